//! Shared fixtures for task tests.

use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that advances one second every time it is read.
#[derive(Debug)]
pub(crate) struct StepClock {
    start: DateTime<Utc>,
    reads: AtomicI64,
}

impl StepClock {
    pub(crate) fn new() -> Self {
        Self {
            start: DateTime::from_timestamp(1_767_258_000, 0).expect("valid start timestamp"),
            reads: AtomicI64::new(0),
        }
    }

    /// The timestamp returned by the first read.
    pub(crate) const fn start(&self) -> DateTime<Utc> {
        self.start
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let step = self.reads.fetch_add(1, Ordering::SeqCst);
        self.start + TimeDelta::seconds(step)
    }
}
