// Search debounce: one pending timer at a time, replaced on every keystroke
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::event::AppEvent;

/// Quiet period after the last edit before the search filter runs
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(120);

/// Owns the handle of the pending filter timer.
///
/// Scheduling aborts whatever was pending, so only the value typed last,
/// after a pause, ever reaches the filter.
pub struct SearchDebounce {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Restart the timer; when it fires, `AppEvent::FilterReady(query)` is sent
    pub fn schedule(&mut self, query: String, tx: UnboundedSender<AppEvent>) {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // receiver gone means the app is shutting down
            let _ = tx.send(AppEvent::FilterReady(query));
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

impl Drop for SearchDebounce {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_quiet_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debounce = SearchDebounce::default();

        debounce.schedule("rust".to_string(), tx);
        tokio::time::sleep(Duration::from_millis(119)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        match rx.try_recv() {
            Ok(AppEvent::FilterReady(q)) => assert_eq!(q, "rust"),
            other => panic!("expected FilterReady, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_collapse_to_last() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debounce = SearchDebounce::default();

        debounce.schedule("r".to_string(), tx.clone());
        tokio::time::sleep(Duration::from_millis(50)).await;
        debounce.schedule("ru".to_string(), tx.clone());
        tokio::time::sleep(Duration::from_millis(50)).await;
        debounce.schedule("rus".to_string(), tx);

        tokio::time::sleep(Duration::from_millis(500)).await;

        let mut fired = Vec::new();
        while let Ok(AppEvent::FilterReady(q)) = rx.try_recv() {
            fired.push(q);
        }
        assert_eq!(fired, vec!["rus".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debounce = SearchDebounce::default();

        debounce.schedule("go".to_string(), tx);
        assert!(debounce.is_pending());
        debounce.cancel();
        assert!(!debounce.is_pending());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }
}
