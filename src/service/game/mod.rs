use std::{cmp::Ordering, ops::RangeInclusive};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Typing this during a game gives up and reveals the number.
pub const EXIT_KEYWORD: &str = "help";

pub const SECRET_RANGE: RangeInclusive<u32> = 1..=100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    secret: u32,
    attempts: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    GaveUp { secret: u32 },
    /// Not a number; the session is left untouched.
    Invalid,
    TooHigh(GameSession),
    TooLow(GameSession),
    Correct { attempts: u32 },
}

impl GameSession {
    pub fn start() -> Self {
        Self::with_secret(rand::thread_rng().gen_range(SECRET_RANGE))
    }

    pub fn with_secret(secret: u32) -> Self {
        Self { secret, attempts: 0 }
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn evaluate(self, input: Option<&str>) -> GuessOutcome {
        let Some(text) = input else {
            return GuessOutcome::Invalid;
        };

        if text == EXIT_KEYWORD {
            return GuessOutcome::GaveUp { secret: self.secret };
        }

        let Some(guess) = parse_guess(text) else {
            return GuessOutcome::Invalid;
        };

        let next = Self {
            attempts: self.attempts.saturating_add(1),
            ..self
        };

        match guess.cmp(&u64::from(self.secret)) {
            Ordering::Greater => GuessOutcome::TooHigh(next),
            Ordering::Less => GuessOutcome::TooLow(next),
            Ordering::Equal => GuessOutcome::Correct {
                attempts: next.attempts,
            },
        }
    }
}

/// Accepts plain ASCII digit strings only. Values past `u64::MAX` still count
/// as a (too high) guess.
fn parse_guess(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(text.parse::<u64>().unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_picks_secret_in_range() {
        for _ in 0..1000 {
            let session = GameSession::start();
            assert!(SECRET_RANGE.contains(&session.secret()));
            assert_eq!(session.attempts(), 0);
        }
    }

    #[test]
    fn test_high_low_and_correct_for_every_secret() {
        for secret in SECRET_RANGE {
            let session = GameSession::with_secret(secret);

            if secret < 100 {
                match session.evaluate(Some(&(secret + 1).to_string())) {
                    GuessOutcome::TooHigh(next) => {
                        assert_eq!(next.secret(), secret);
                        assert_eq!(next.attempts(), 1);
                    }
                    other => panic!("expected TooHigh, got {:?}", other),
                }
            }

            if secret > 1 {
                match session.evaluate(Some(&(secret - 1).to_string())) {
                    GuessOutcome::TooLow(next) => {
                        assert_eq!(next.secret(), secret);
                        assert_eq!(next.attempts(), 1);
                    }
                    other => panic!("expected TooLow, got {:?}", other),
                }
            }

            assert_eq!(
                session.evaluate(Some(&secret.to_string())),
                GuessOutcome::Correct { attempts: 1 }
            );
        }
    }

    #[test]
    fn test_attempts_accumulate() {
        let mut session = GameSession::with_secret(50);

        for guess in ["90", "10", "70", "30"] {
            session = match session.evaluate(Some(guess)) {
                GuessOutcome::TooHigh(next) | GuessOutcome::TooLow(next) => next,
                other => panic!("unexpected outcome {:?}", other),
            };
        }

        assert_eq!(session.attempts(), 4);
        assert_eq!(session.evaluate(Some("50")), GuessOutcome::Correct { attempts: 5 });
    }

    #[test]
    fn test_exit_keyword_reveals_secret() {
        let session = GameSession::with_secret(73);
        assert_eq!(session.evaluate(Some("help")), GuessOutcome::GaveUp { secret: 73 });

        let played = match session.evaluate(Some("10")) {
            GuessOutcome::TooLow(next) => next,
            other => panic!("unexpected outcome {:?}", other),
        };
        assert_eq!(played.evaluate(Some(EXIT_KEYWORD)), GuessOutcome::GaveUp { secret: 73 });
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let session = GameSession::with_secret(5);

        for input in ["", "abc", "-5", "4.2", " 5", "5 ", "+5", "Help", "١٢"] {
            assert_eq!(session.evaluate(Some(input)), GuessOutcome::Invalid, "input {:?}", input);
        }
        assert_eq!(session.evaluate(None), GuessOutcome::Invalid);
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn test_leading_zeros_and_huge_numbers() {
        let session = GameSession::with_secret(7);
        assert_eq!(session.evaluate(Some("007")), GuessOutcome::Correct { attempts: 1 });
        assert!(matches!(
            session.evaluate(Some("0")),
            GuessOutcome::TooLow(next) if next.attempts() == 1
        ));
        assert!(matches!(
            session.evaluate(Some("99999999999999999999999999")),
            GuessOutcome::TooHigh(next) if next.attempts() == 1
        ));
    }

    #[test]
    fn test_binary_search_converges() {
        for secret in SECRET_RANGE {
            let mut session = GameSession::with_secret(secret);
            let (mut low, mut high) = (1u32, 100u32);

            let attempts = loop {
                let guess = (low + high) / 2;
                match session.evaluate(Some(&guess.to_string())) {
                    GuessOutcome::TooHigh(next) => {
                        high = guess - 1;
                        session = next;
                    }
                    GuessOutcome::TooLow(next) => {
                        low = guess + 1;
                        session = next;
                    }
                    GuessOutcome::Correct { attempts } => break attempts,
                    other => panic!("unexpected outcome {:?}", other),
                }
            };

            assert!(attempts <= 7, "secret {} took {} attempts", secret, attempts);
        }
    }
}
