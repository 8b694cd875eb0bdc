mod card_renderer;
mod streak_service;


pub use card_renderer::{render_card, CardLayout, CardPalette, CardSpec};
pub use streak_service::{StreakReport, StreakRequest, StreakService};
