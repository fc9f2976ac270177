use async_trait::async_trait;
use std::time::Duration;

/// Delay policy between consecutive ticks of one simulated user. A driver
/// sleeps a uniform-random duration from the range after each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub min: Duration,
    pub max: Duration,
}

impl Pacing {
    /// Back-to-back issuance with no enforced delay.
    pub const NONE: Pacing = Pacing {
        min: Duration::ZERO,
        max: Duration::ZERO,
    };

    pub const fn constant(delay: Duration) -> Self {
        Self {
            min: delay,
            max: delay,
        }
    }

    pub fn is_none(&self) -> bool {
        self.min.is_zero() && self.max.is_zero()
    }

    /// Sample one inter-tick delay from the range.
    pub fn sample(&self) -> Duration {
        if self.min >= self.max {
            return self.min;
        }
        self.min + (self.max - self.min).mul_f64(rand::random::<f64>())
    }
}

/// A repeatable simulated-user action polled by a scheduling harness.
///
/// A tick takes no input and reports nothing back: whatever happens, the
/// task logs the outcome itself and leaves scheduling to the caller.
#[async_trait]
pub trait UserTask: Send + Sync {
    fn pacing(&self) -> Pacing {
        Pacing::NONE
    }

    async fn tick(&mut self);
}

/// Drive a task for a fixed number of ticks, honoring its pacing policy.
pub async fn run_ticks<T: UserTask + ?Sized>(task: &mut T, ticks: usize) {
    let pacing = task.pacing();
    for _ in 0..ticks {
        task.tick().await;
        if !pacing.is_none() {
            tokio::time::sleep(pacing.sample()).await;
        }
    }
}
