use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::client::LeagueClient;
use crate::config::LeagueConfig;
use crate::error::Result;

/// Process-wide state, created once at startup and shared by reference.
pub struct AppContext {
    client: LeagueClient,
    notifications_registered: AtomicBool,
}

impl AppContext {
    pub fn new(config: LeagueConfig) -> Result<Self> {
        Ok(Self::with_client(LeagueClient::new(config)?))
    }

    pub fn with_client(client: LeagueClient) -> Self {
        Self {
            client,
            notifications_registered: AtomicBool::new(false),
        }
    }

    pub fn client(&self) -> &LeagueClient {
        &self.client
    }

    /// Claim the one-time notification registration. Returns `true` for the
    /// first caller only.
    pub fn mark_notifications_registered(&self) -> bool {
        let first = self
            .notifications_registered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        debug!(first, "notification registration requested");
        first
    }

    pub fn notifications_registered(&self) -> bool {
        self.notifications_registered.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn context() -> AppContext {
        AppContext::new(LeagueConfig::new("http://localhost:5000").unwrap()).unwrap()
    }

    #[test]
    fn test_registration_is_claimed_once() {
        let ctx = context();

        assert!(!ctx.notifications_registered());
        assert!(ctx.mark_notifications_registered());
        assert!(!ctx.mark_notifications_registered());
        assert!(ctx.notifications_registered());
    }

    #[test]
    fn test_registration_across_threads() {
        let ctx = Arc::new(context());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ctx = Arc::clone(&ctx);
                std::thread::spawn(move || ctx.mark_notifications_registered())
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|first| *first)
            .count();

        assert_eq!(winners, 1);
    }
}
