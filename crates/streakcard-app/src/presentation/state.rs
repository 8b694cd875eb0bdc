use std::sync::Arc;

use crate::application::services::StreakService;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub streaks: Arc<StreakService>,
}

impl AppState {
    pub fn new(streaks: StreakService) -> Self {
        Self {
            streaks: Arc::new(streaks),
        }
    }
}
