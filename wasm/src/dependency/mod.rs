mod logger;
mod performance;
mod random;

pub use logger::{install_logger, parse_level};
pub use performance::{elapsed_ms, performance_now};
#[cfg(target_arch = "wasm32")]
pub use random::MathRandom;
#[cfg(test)]
pub use random::SequenceSource;
pub use random::{default_source, DefaultSource, RandomSource};
