//! Owned, cancellable walk-in clock.
//!
//! [`WalkInClock::spawn`] starts a Tokio interval on the given runtime. Every
//! period it reads the local wall clock, sends a [`ClockTick`] to the UI thread
//! and calls the repaint hook. Dropping the returned guard aborts the task, so
//! the clock lives exactly as long as its owner keeps the guard.

use std::sync::mpsc::Sender as StdSender;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::ticker::ClockTick;
use crate::utils;

pub struct WalkInClock {
    epoch: u64,
    task: JoinHandle<()>,
}

impl WalkInClock {
    /// Start ticking immediately, then once per `period`.
    ///
    /// The task also ends on its own once the receiving side of `tx` is gone.
    pub fn spawn<F>(
        runtime: &Handle,
        epoch: u64,
        period: Duration,
        tx: StdSender<ClockTick>,
        on_tick: F,
    ) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let task = runtime.spawn(async move {
            let mut interval = time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                let tick = ClockTick {
                    epoch,
                    now: utils::now_local(),
                };
                if tx.send(tick).is_err() {
                    log::debug!("walk-in clock {epoch}: receiver dropped, exiting");
                    break;
                }
                on_tick();
            }
        });
        log::debug!("walk-in clock {epoch} started ({period:?} cadence)");
        Self { epoch, task }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[allow(dead_code)]
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for WalkInClock {
    fn drop(&mut self) {
        self.task.abort();
        log::debug!("walk-in clock {} stopped", self.epoch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let (tx, rx) = mpsc::channel();
        let repaints = Arc::new(AtomicUsize::new(0));
        let counter = repaints.clone();
        let clock = WalkInClock::spawn(&Handle::current(), 7, Duration::from_secs(1), tx, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        time::sleep(Duration::from_millis(2500)).await;

        let ticks: Vec<ClockTick> = rx.try_iter().collect();
        assert_eq!(ticks.len(), 3, "ticks at 0s, 1s and 2s");
        assert!(ticks.iter().all(|t| t.epoch == 7));
        assert_eq!(repaints.load(Ordering::SeqCst), 3);
        assert_eq!(clock.epoch(), 7);
        assert!(clock.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_guard_stops_ticks() {
        let (tx, rx) = mpsc::channel();
        let clock = WalkInClock::spawn(&Handle::current(), 1, Duration::from_secs(1), tx, || {});

        time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(rx.try_iter().count(), 2);

        drop(clock);
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn exits_when_receiver_is_gone() {
        let (tx, rx) = mpsc::channel();
        let clock = WalkInClock::spawn(&Handle::current(), 1, Duration::from_secs(1), tx, || {});
        time::sleep(Duration::from_millis(500)).await;
        drop(rx);

        time::sleep(Duration::from_secs(2)).await;
        assert!(!clock.is_running());
    }
}
