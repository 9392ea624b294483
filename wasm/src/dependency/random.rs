use rand::rngs::SmallRng;
use rand::Rng;
#[cfg(not(target_arch = "wasm32"))]
use rand::SeedableRng;

/// Source of uniform samples in `[0, 1)` used to light the initial board.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for SmallRng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Browser `Math.random()`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MathRandom;

#[cfg(target_arch = "wasm32")]
impl RandomSource for MathRandom {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[cfg(target_arch = "wasm32")]
pub type DefaultSource = MathRandom;

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultSource = SmallRng;

#[cfg(target_arch = "wasm32")]
pub fn default_source() -> DefaultSource {
    MathRandom
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_source() -> DefaultSource {
    SmallRng::seed_from_u64(clock_seed())
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::SystemTime;
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0x9E37_79B9_7F4A_7C15)
}

/// Replays a fixed list of samples, wrapping around at the end
#[cfg(test)]
pub struct SequenceSource {
    values: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "sequence needs at least one sample");
        Self { values, next: 0 }
    }

    pub fn draws(&self) -> usize {
        self.next
    }
}

#[cfg(test)]
impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
