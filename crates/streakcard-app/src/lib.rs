pub mod application;
pub mod presentation;

pub use presentation::bootstrap::{build_app_state, run};
pub use presentation::routes::build_router;
pub use presentation::state::AppState;
