//! 营业状态刷新
//!
//! "Now" advances without any event, so the open/closed badge has to be
//! re-evaluated on a timer. [`StatusRefresher`] polls the schedule on a
//! fixed interval (default one minute) and publishes each [`StoreStatus`]
//! through a `watch` channel.
//!
//! The refresher is owned by a [`StatusHandle`]; dropping the handle cancels
//! the timer so a torn-down view never leaks a recurring task.

use std::sync::Arc;
use std::time::Duration;

use chrono::DateTime;
use chrono_tz::Tz;
use shared::BusinessConfig;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::core::{BackgroundTasks, TaskKind};
use crate::schedule::{self, StoreStatus};
use crate::utils::time;

/// Source of "now" for the refresher
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Tz>;
}

/// Wall clock in the business time zone
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        time::now_in(self.tz)
    }
}

/// Periodic schedule evaluator
pub struct StatusRefresher<C: Clock> {
    business: Arc<BusinessConfig>,
    clock: C,
    interval: Duration,
    tx: watch::Sender<StoreStatus>,
    shutdown: CancellationToken,
}

impl<C: Clock> StatusRefresher<C> {
    /// Evaluate once and return the refresher with its subscriber side
    pub fn new(
        business: Arc<BusinessConfig>,
        clock: C,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> (Self, watch::Receiver<StoreStatus>) {
        let initial = schedule::status_at(&business.schedule, &clock.now());
        let (tx, rx) = watch::channel(initial);
        (
            Self {
                business,
                clock,
                interval,
                tx,
                shutdown,
            },
            rx,
        )
    }

    /// 主循环：定时刷新 + 关机信号
    pub async fn run(self) {
        tracing::info!(
            "Status refresher started (every {}s)",
            self.interval.as_secs()
        );

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.refresh();
                }
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Status refresher received shutdown signal");
                    return;
                }
            }
        }
    }

    /// Re-evaluate the schedule and publish the result
    pub fn refresh(&self) {
        let status = schedule::status_at(&self.business.schedule, &self.clock.now());

        self.tx.send_if_modified(|current| {
            if *current == status {
                return false;
            }
            if current.is_open != status.is_open {
                tracing::info!(
                    open = status.is_open,
                    hours = %status.hours_label,
                    at = %status.evaluated_at,
                    "Store is now {}",
                    if status.is_open { "open" } else { "closed" }
                );
            } else {
                tracing::debug!(at = %status.evaluated_at, "Status refreshed");
            }
            *current = status;
            true
        });
    }
}

/// Live store status owned by a view
///
/// Cancels its refresher when dropped or stopped.
pub struct StatusHandle {
    rx: watch::Receiver<StoreStatus>,
    token: CancellationToken,
    _guard: DropGuard,
}

impl StatusHandle {
    /// Start a refresher registered with `tasks`
    ///
    /// The refresher stops when this handle goes away or when `tasks`
    /// shuts down, whichever comes first.
    pub fn spawn<C: Clock>(
        business: Arc<BusinessConfig>,
        clock: C,
        interval: Duration,
        tasks: &mut BackgroundTasks,
    ) -> Self {
        let token = tasks.shutdown_token().child_token();
        let (refresher, rx) = StatusRefresher::new(business, clock, interval, token.clone());
        tasks.spawn_cancellable(
            "status_refresher",
            TaskKind::Periodic,
            token.clone(),
            refresher.run(),
        );

        Self {
            rx,
            _guard: token.clone().drop_guard(),
            token,
        }
    }

    /// Latest published status
    pub fn current(&self) -> StoreStatus {
        self.rx.borrow().clone()
    }

    /// New receiver for change notifications
    pub fn subscribe(&self) -> watch::Receiver<StoreStatus> {
        self.rx.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Cancel the refresher explicitly
    pub fn stop(&self) {
        self.token.cancel();
    }
}
