//! Impure inputs of the success estimator: a random source and a clock.
//!
//! `AppState` holds both as `Arc<dyn ...>`, picked at startup from config.
//! Tests use `FixedRandom` / `FixedClock`.

use std::sync::Mutex;

use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers. Must be safe to share across requests.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `[low, high)`.
    fn int_in_range(&self, low: i32, high: i32) -> Result<i32>;
}

/// Today's date as seen by the service.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Thread-local generator. Default when no seed is configured.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn int_in_range(&self, low: i32, high: i32) -> Result<i32> {
        Ok(rand::thread_rng().gen_range(low..high))
    }
}

/// Seeded generator for reproducible deployments (`RNG_SEED`).
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn int_in_range(&self, low: i32, high: i32) -> Result<i32> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| anyhow!("seeded random source lock poisoned"))?;
        Ok(rng.gen_range(low..high))
    }
}

/// Always returns the same value, regardless of range.
#[cfg(test)]
pub struct FixedRandom(pub i32);

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn int_in_range(&self, _low: i32, _high: i32) -> Result<i32> {
        Ok(self.0)
    }
}

/// Local wall-clock date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[cfg(test)]
pub struct FixedClock(pub NaiveDate);

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_half_open_range() {
        for _ in 0..1000 {
            let v = ThreadRandom.int_in_range(-10, 10).unwrap();
            assert!((-10..10).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        for _ in 0..20 {
            assert_eq!(
                a.int_in_range(-10, 10).unwrap(),
                b.int_in_range(-10, 10).unwrap()
            );
        }
    }

    #[test]
    fn test_fixed_sources() {
        assert_eq!(FixedRandom(7).int_in_range(-10, 10).unwrap(), 7);
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
