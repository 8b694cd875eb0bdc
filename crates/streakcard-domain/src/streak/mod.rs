mod evaluator;
mod result;
mod stats;

#[cfg(test)]
mod evaluator_test;

pub use evaluator::{compute_streak, evaluate};
pub use result::{DataSource, StreakResult};
pub use stats::{summarize, StreakStats};
