//! Clock and id providers backed by the host system.

use chrono::Utc;

use yja_core::domain::generate_id;
use yja_core::ports::{Clock, IdGenerator};

/// Wall clock from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Random, time-suffixed ids (see [`generate_id`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> String {
        generate_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_after_2024() {
        assert!(SystemClock.now_millis() > 1_704_067_200_000);
    }

    #[test]
    fn test_consecutive_ids_differ() {
        let ids = RandomIdGenerator;
        for _ in 0..1_000 {
            assert_ne!(ids.generate(), ids.generate());
        }
    }
}
