pub mod card;
pub mod health;
pub mod streak;
