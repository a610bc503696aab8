use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Source of initial weight and bias values. Every implementation owns its
/// randomness, so a fixed seed reproduces the same network.
pub trait Initializer {
    fn get(&mut self) -> f64;
}

/// Uniform values in [-1, 1], the initialization the output layer is trained
/// from.
pub struct UniformInit {
    rng: SmallRng,
}
impl UniformInit {
    pub fn new() -> UniformInit {
        Self::seeded(0)
    }

    pub fn seeded(seed: u64) -> UniformInit {
        UniformInit {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Initializer for UniformInit {
    fn get(&mut self) -> f64 {
        self.rng.gen_range(-1., 1.)
    }
}

/// Normal values scaled by the fan-in, for callers who prefer a
/// variance-preserving start over the uniform default.
pub struct XavierInit {
    rng: SmallRng,
    fan_in: usize,
}
impl XavierInit {
    pub fn new(fan_in: usize) -> XavierInit {
        XavierInit {
            rng: SmallRng::seed_from_u64(0),
            fan_in,
        }
    }
}

impl Initializer for XavierInit {
    fn get(&mut self) -> f64 {
        self.rng.sample::<f64, StandardNormal>(StandardNormal) / (self.fan_in as f64).sqrt()
    }
}

/// This initializer accepts an iterator over f64 values and uses them to
/// initialize the weights. Panics if a weight is requested but the iterator
/// returns None.
pub struct WeightInit<T: Iterator<Item = f64>> {
    iter: T,
}
impl<I: Iterator<Item = f64>> WeightInit<I> {
    pub fn new<T: IntoIterator<Item = f64, IntoIter = I>>(weights: T) -> Self {
        Self {
            iter: weights.into_iter(),
        }
    }
}

impl<I: Iterator<Item = f64>> Initializer for WeightInit<I> {
    fn get(&mut self) -> f64 {
        self.iter.next().expect("Ran out of weights")
    }
}
