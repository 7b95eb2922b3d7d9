//! Wall-clock drivers for the rest timer and session clock.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::action::Action;
use crate::error::Result;
use crate::persist::AppStore;

/// Tick the rest timer once a second until it stops.
///
/// The timer stops either by reaching its target or by someone else
/// dispatching [`Action::StopRestTimer`]. Returns the elapsed seconds at
/// that point.
pub async fn run_rest_timer(store: Arc<Mutex<AppStore>>) -> Result<u32> {
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first tick completes immediately.
    interval.tick().await;

    loop {
        {
            let store = store.lock().await;
            let timer = store.state().active_workout.rest_timer;
            if !timer.is_running {
                return Ok(timer.elapsed_seconds);
            }
        }

        interval.tick().await;

        let mut store = store.lock().await;
        if store.state().active_workout.rest_timer.is_running {
            store.dispatch(Action::TickRestTimer)?;
        }
        let timer = store.state().active_workout.rest_timer;
        if !timer.is_running {
            tracing::debug!(
                elapsed = timer.elapsed_seconds,
                target = timer.target_seconds,
                "Rest timer stopped"
            );
            return Ok(timer.elapsed_seconds);
        }
    }
}

/// Whole seconds since the session started. Zero if `now` is earlier.
pub fn session_elapsed(start: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let seconds = (now - start).num_seconds();
    u32::try_from(seconds.max(0)).unwrap_or(u32::MAX)
}

/// Format seconds as `mm:ss`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use kv_store::MemoryStore;

    fn shared_store() -> Arc<Mutex<AppStore>> {
        Arc::new(Mutex::new(AppStore::load(Arc::new(MemoryStore::new("test")))))
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(3599), "59:59");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn test_session_elapsed() {
        let start = Utc.with_ymd_and_hms(2025, 3, 7, 18, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 3, 7, 18, 45, 30).unwrap();
        assert_eq!(session_elapsed(start, later), 2730);
        assert_eq!(session_elapsed(later, start), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_to_target() {
        let store = shared_store();
        store
            .lock()
            .await
            .dispatch(Action::StartRestTimer { seconds: 3 })
            .unwrap();

        let started = tokio::time::Instant::now();
        let elapsed = run_rest_timer(store.clone()).await.unwrap();

        assert_eq!(elapsed, 3);
        assert_eq!(started.elapsed(), Duration::from_secs(3));
        let timer = store.lock().await.state().active_workout.rest_timer;
        assert!(!timer.is_running);
        assert_eq!(timer.remaining_seconds(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_externally() {
        let store = shared_store();
        store
            .lock()
            .await
            .dispatch(Action::StartRestTimer { seconds: 90 })
            .unwrap();

        let handle = tokio::spawn(run_rest_timer(store.clone()));
        tokio::time::sleep(Duration::from_millis(2500)).await;
        store.lock().await.dispatch(Action::StopRestTimer).unwrap();

        let elapsed = handle.await.unwrap().unwrap();
        assert_eq!(elapsed, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_second_rest_does_not_tick() {
        let store = shared_store();
        store
            .lock()
            .await
            .dispatch(Action::StartRestTimer { seconds: 0 })
            .unwrap();

        let started = tokio::time::Instant::now();
        let elapsed = run_rest_timer(store.clone()).await.unwrap();

        assert_eq!(elapsed, 0);
        assert_eq!(started.elapsed(), Duration::ZERO);
        let timer = store.lock().await.state().active_workout.rest_timer;
        assert_eq!(timer.elapsed_seconds, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_timer_returns_immediately() {
        let store = shared_store();
        let elapsed = run_rest_timer(store).await.unwrap();
        assert_eq!(elapsed, 0);
    }
}
