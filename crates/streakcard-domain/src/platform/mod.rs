mod catalogue;
mod source;

pub use catalogue::{display_name, profile_url, Platform, Retrieval};
pub use source::ActivitySource;
