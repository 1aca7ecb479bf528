use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::{task::JoinHandle, time::MissedTickBehavior};
use tracing::{debug, warn};

/// Index of the home page banner currently on show.
#[derive(Debug)]
pub struct BannerCarousel {
    index: AtomicUsize,
    len: usize,
}

impl BannerCarousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: AtomicUsize::new(0),
            len,
        }
    }

    pub fn current(&self) -> usize {
        self.index.load(Ordering::Relaxed)
    }

    pub fn advance(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        let len = self.len;
        let previous = self
            .index
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |i| Some((i + 1) % len))
            .unwrap_or_default();
        (previous + 1) % len
    }
}

pub fn spawn_rotation(carousel: Arc<BannerCarousel>, period: Duration) -> JoinHandle<()> {
    if period.is_zero() {
        warn!("Banner interval is zero, rotation disabled");
        return tokio::spawn(async {});
    }
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // interval fires immediately; skip that so banner 0 gets a full period
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let index = carousel.advance();
            debug!("Banner advanced to {}", index);
        }
    })
}
