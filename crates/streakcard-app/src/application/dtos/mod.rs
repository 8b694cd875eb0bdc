mod card_dto;
mod streak_dto;

pub use card_dto::{CardPlatformInput, CardQuery};
pub use streak_dto::{StreakDto, StreakQuery, StreakStatsDto};
