use std::{sync::Arc, time::Duration};

use chrono::TimeDelta;
use teloxide::dispatching::dialogue::{serializer::Json, Dialogue, ErasedStorage, RedisStorage, Storage};

use crate::{
    config::DialogueConfig,
    storage::{DialogueMemoryStorage, StorageError},
};

pub mod model;

pub use model::DialogueState;

pub type BotDialogue = Dialogue<DialogueState, ErasedStorage<DialogueState>>;

pub struct DialogueService;

impl DialogueService {
    pub async fn get_dialogue_storage(
        config: &DialogueConfig,
    ) -> Result<Arc<ErasedStorage<DialogueState>>, StorageError> {
        if config.use_redis {
            let url = config
                .redis_url
                .as_deref()
                .ok_or_else(|| StorageError::Redis("Missing redis url".to_string()))?;

            if config.ttl_secs > 0 {
                warn!("Dialogue ttl is not applied to Redis dialogue storage");
            }

            info!("Using Redis dialogue storage");
            let storage = RedisStorage::open(url, Json)
                .await
                .map_err(|e| StorageError::Redis(e.to_string()))?
                .erase();

            return Ok(storage);
        }

        let ttl = i64::try_from(config.ttl_secs)
            .ok()
            .filter(|secs| *secs > 0)
            .and_then(TimeDelta::try_seconds);

        let storage = DialogueMemoryStorage::<DialogueState>::new(ttl);

        match ttl {
            Some(ttl) => {
                info!("Using in-memory dialogue storage, idle dialogues expire after {}s", ttl.num_seconds());
                storage.spawn_sweeper(Duration::from_secs(config.clear_interval_secs));
            }
            None => info!("Using in-memory dialogue storage without expiry"),
        }

        Ok(storage.erase())
    }
}
