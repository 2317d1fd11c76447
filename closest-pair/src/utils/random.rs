#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use std::cell::RefCell;

/// Provides the way to use randomized values in generic way.
pub trait Random {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max].
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Shuffles given slice in place.
    fn shuffle<T>(&self, items: &mut [T])
    where
        Self: Sized,
    {
        for idx in (1..items.len()).rev() {
            let other = self.uniform_int(0, idx as i32) as usize;
            items.swap(idx, other);
        }
    }
}

/// A default random implementation which uses thread local generator.
#[derive(Default)]
pub struct DefaultRandom {}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        thread_rng().gen_range(min..=max)
    }
}

/// A random implementation which produces reproducible sequences from the given seed.
pub struct SeededRandom {
    rng: RefCell<SmallRng>,
}

impl SeededRandom {
    /// Creates a new instance of `SeededRandom`.
    pub fn new(seed: u64) -> Self {
        Self { rng: RefCell::new(SmallRng::seed_from_u64(seed)) }
    }
}

impl Random for SeededRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.rng.borrow_mut().gen_range(min..=max)
    }
}
