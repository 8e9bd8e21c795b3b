use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing {0}")]
    Missing(String),
    #[error("Invalid {key}: {value:?}")]
    Invalid { key: String, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub telegram: TelegramConfig,
    pub database: DatabaseConfig,
    pub dialogue: DialogueConfig,
    pub language: LanguageConfig,
}

#[derive(Clone, Debug)]
pub struct TelegramConfig(pub String);

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    /// A local SQLite path, `:memory:`, or a `libsql://` / `https://` URL.
    pub url: String,
    /// Only used for remote databases.
    pub token: String,
}

impl DatabaseConfig {
    pub fn is_remote(&self) -> bool {
        ["libsql://", "https://", "http://", "wss://", "ws://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
    }
}

#[derive(Clone, Debug)]
pub struct DialogueConfig {
    pub use_redis: bool,
    pub redis_url: Option<String>,
    /// Idle lifetime of an in-memory dialogue. Zero keeps dialogues forever.
    pub ttl_secs: u64,
    pub clear_interval_secs: u64,
}

#[derive(Clone, Debug)]
pub struct LanguageConfig {
    pub locale: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        build_config(|key| std::env::var(key).ok())
    }

    #[cfg(test)]
    pub fn new_test_config() -> Self {
        Self {
            telegram: TelegramConfig("1234567890:TEST_TOKEN".to_string()),
            database: DatabaseConfig {
                url: ":memory:".to_string(),
                token: String::new(),
            },
            dialogue: DialogueConfig {
                use_redis: false,
                redis_url: None,
                ttl_secs: 0,
                clear_interval_secs: 3600,
            },
            language: LanguageConfig {
                locale: "en".to_string(),
            },
        }
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::Missing(key.to_string()))
}

fn parsed_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key).filter(|value| !value.trim().is_empty()) {
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key: key.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

pub fn build_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    info!("Building AppConfig...");

    let database = DatabaseConfig {
        url: lookup("DATABASE_URL").unwrap_or_else(|| "guessbot.db".to_string()),
        token: lookup("DATABASE_AUTH_TOKEN").unwrap_or_default(),
    };
    if database.is_remote() && database.token.is_empty() {
        return Err(ConfigError::Missing("DATABASE_AUTH_TOKEN".to_string()));
    }

    let use_redis = parsed_or(&lookup, "DIALOGUE_USE_REDIS", false)?;
    let redis_url = if use_redis {
        Some(required(&lookup, "REDIS_URL")?)
    } else {
        lookup("REDIS_URL")
    };

    let clear_interval_secs = parsed_or(&lookup, "DIALOGUE_CLEAR_INTERVAL_SECS", 3600u64)?;
    if clear_interval_secs == 0 {
        return Err(ConfigError::Invalid {
            key: "DIALOGUE_CLEAR_INTERVAL_SECS".to_string(),
            value: "0".to_string(),
        });
    }

    let locale = lookup("BOT_LANGUAGE").unwrap_or_else(|| "uz".to_string());
    if !rust_i18n::available_locales!().contains(&locale.as_str()) {
        return Err(ConfigError::Invalid {
            key: "BOT_LANGUAGE".to_string(),
            value: locale,
        });
    }

    let config = AppConfig {
        telegram: TelegramConfig(required(&lookup, "TELEGRAM_BOT_TOKEN")?),
        database,
        dialogue: DialogueConfig {
            use_redis,
            redis_url,
            ttl_secs: parsed_or(&lookup, "DIALOGUE_TTL_SECS", 0u64)?,
            clear_interval_secs,
        },
        language: LanguageConfig { locale },
    };
    info!("AppConfig built");

    Ok(config)
}
