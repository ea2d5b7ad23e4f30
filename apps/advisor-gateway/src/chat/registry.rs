//! Session registry — the gateway's explicitly owned set of chat sessions.
//!
//! Each session gets its own controller (and so its own queue, transcript
//! and state flag). Nothing is shared across sessions except the advice
//! service handle. Sessions nobody has touched for the idle TTL are evicted
//! by a background sweep, so abandoned uploads don't pin memory.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::advice_client::AdviceService;
use crate::chat::controller::SessionController;

pub type SharedSession = Arc<Mutex<SessionController>>;

/// Longest pause between two idle sweeps.
const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct Entry {
    session: SharedSession,
    last_used: StdMutex<Instant>,
}

impl Entry {
    fn touch(&self) {
        if let Ok(mut last_used) = self.last_used.lock() {
            *last_used = Instant::now();
        }
    }

    fn idle_for(&self) -> Duration {
        self.last_used
            .lock()
            .map(|last_used| last_used.elapsed())
            .unwrap_or_default()
    }

    /// A session mid-send, or locked by a request right now, is in use.
    fn in_use(&self) -> bool {
        self.session
            .try_lock()
            .map(|controller| controller.is_sending())
            .unwrap_or(true)
    }
}

#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
    service: Arc<dyn AdviceService>,
}

impl SessionRegistry {
    pub fn new(service: Arc<dyn AdviceService>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            service,
        }
    }

    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let controller = SessionController::new(Arc::clone(&self.service));
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            id,
            Entry {
                session: Arc::new(Mutex::new(controller)),
                last_used: StdMutex::new(Instant::now()),
            },
        );
        info!("Session {id} created ({} active)", sessions.len());
        id
    }

    /// Looks up a session and marks it as used.
    pub async fn get(&self, id: Uuid) -> Option<SharedSession> {
        let sessions = self.sessions.read().await;
        let entry = sessions.get(&id)?;
        entry.touch();
        Some(Arc::clone(&entry.session))
    }

    /// Removes the session. A send still in flight finishes against the
    /// detached controller and is then dropped with it.
    pub async fn destroy(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Session {id} destroyed");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session unused for at least `ttl` that is not in use.
    /// Returns how many were evicted.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, entry| {
            let keep = entry.idle_for() < ttl || entry.in_use();
            if !keep {
                debug!("Session {id} evicted after {}s idle", entry.idle_for().as_secs());
            }
            keep
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {evicted} idle session(s) ({} active)", sessions.len());
        }
        evicted
    }

    /// Runs `evict_idle` periodically for the lifetime of the process.
    pub fn spawn_idle_sweeper(&self, ttl: Duration) -> tokio::task::JoinHandle<()> {
        let registry = self.clone();
        let period = ttl.min(MAX_SWEEP_INTERVAL).max(Duration::from_secs(1));
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                registry.evict_idle(ttl).await;
            }
        })
    }
}
