use std::{convert::Infallible, sync::Arc, time::Duration};

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use futures::future::{BoxFuture, FutureExt};
use teloxide::{dispatching::dialogue::Storage, types::ChatId};
use tokio::task::JoinHandle;

#[derive(Debug)]
struct Entry<D> {
    dialogue: D,
    touched_at: DateTime<Utc>,
}

/// In-memory dialogue storage with an optional idle expiry.
///
/// An entry that has not been read or written for `ttl` is treated as absent
/// and dropped on the next access or sweep. Without a ttl entries live until
/// they are removed.
#[derive(Debug)]
pub struct DialogueMemoryStorage<D> {
    entries: DashMap<ChatId, Entry<D>>,
    ttl: Option<TimeDelta>,
}

impl<D> DialogueMemoryStorage<D>
where
    D: Clone + Send + Sync + 'static,
{
    pub fn new(ttl: Option<TimeDelta>) -> Arc<Self> {
        Arc::new(Self {
            entries: DashMap::new(),
            ttl,
        })
    }

    fn is_expired(&self, entry: &Entry<D>, now: DateTime<Utc>) -> bool {
        self.ttl.is_some_and(|ttl| now - entry.touched_at >= ttl)
    }

    pub fn load(&self, chat_id: ChatId) -> Option<D> {
        let now = Utc::now();

        if self
            .entries
            .remove_if(&chat_id, |_, entry| self.is_expired(entry, now))
            .is_some()
        {
            debug!("Dialogue for chat {} expired", chat_id);
            return None;
        }

        self.entries.get_mut(&chat_id).map(|mut entry| {
            entry.touched_at = now;
            entry.dialogue.clone()
        })
    }

    pub fn save(&self, chat_id: ChatId, dialogue: D) {
        self.entries.insert(
            chat_id,
            Entry {
                dialogue,
                touched_at: Utc::now(),
            },
        );
    }

    pub fn remove(&self, chat_id: ChatId) -> bool {
        self.entries.remove(&chat_id).is_some()
    }

    /// Drops every expired entry and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        if self.ttl.is_none() {
            return 0;
        }

        let now = Utc::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !self.is_expired(entry, now));
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let storage = Arc::clone(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                let purged = storage.purge_expired();
                if purged > 0 {
                    info!("Purged {} expired dialogues, {} still active", purged, storage.len());
                }
            }
        })
    }
}

impl<D> Storage<D> for DialogueMemoryStorage<D>
where
    D: Clone + Send + Sync + 'static,
{
    type Error = Infallible;

    fn remove_dialogue(self: Arc<Self>, chat_id: ChatId) -> BoxFuture<'static, Result<(), Self::Error>> {
        async move {
            self.remove(chat_id);
            Ok(())
        }
        .boxed()
    }

    fn update_dialogue(self: Arc<Self>, chat_id: ChatId, dialogue: D) -> BoxFuture<'static, Result<(), Self::Error>> {
        async move {
            self.save(chat_id, dialogue);
            Ok(())
        }
        .boxed()
    }

    fn get_dialogue(self: Arc<Self>, chat_id: ChatId) -> BoxFuture<'static, Result<Option<D>, Self::Error>> {
        async move { Ok(self.load(chat_id)) }.boxed()
    }
}
