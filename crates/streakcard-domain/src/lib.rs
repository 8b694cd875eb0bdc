// Domain layer - Pure streak computation
// No dependencies on infrastructure or presentation layers

pub mod calendar;
pub mod platform;
pub mod shared;
pub mod streak;

// Re-exports for convenience
pub use calendar::{
    normalize, ActivityCalendar, ActivityEntry, CanonicalDay, CanonicalDaySet, RawActivityRecord,
};
pub use platform::{ActivitySource, Platform, Retrieval};
pub use shared::{Clock, DomainError, FixedClock, SystemClock};
pub use streak::{compute_streak, evaluate, summarize, DataSource, StreakResult, StreakStats};
