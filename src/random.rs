use rand::{Rng, SeedableRng, rngs::StdRng};

/// Injectable uniform random source for the noise effect.
///
/// Each draw lies in `[-1, 1]`.
pub trait UniformSource {
    /// Next uniform sample in `[-1, 1]`.
    fn next_signed(&mut self) -> f64;
}

/// `rand`-backed source; reproducible for a given seed.
#[derive(Clone, Debug)]
pub struct SeededUniform {
    rng: StdRng,
}

impl SeededUniform {
    /// Seed deterministically.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl UniformSource for SeededUniform {
    fn next_signed(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }
}

/// Replays a fixed sequence, cycling. Values are clamped into `[-1, 1]`.
///
/// An empty sequence yields `0.0` forever.
#[derive(Clone, Debug)]
pub struct FixedUniform {
    values: Vec<f64>,
    next: usize,
}

impl FixedUniform {
    /// Build from the values to replay.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// Always return the same value.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl UniformSource for FixedUniform {
    fn next_signed(&mut self) -> f64 {
        let Some(&v) = self.values.get(self.next) else {
            return 0.0;
        };
        self.next = (self.next + 1) % self.values.len();
        if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) }
    }
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    fn next_signed(&mut self) -> f64 {
        (**self).next_signed()
    }
}

#[cfg(test)]
#[path = "../tests/unit/random.rs"]
mod tests;
