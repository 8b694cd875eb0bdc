mod normalizer;
mod value_objects;


pub use normalizer::normalize;
pub use value_objects::{
    ActivityCalendar, ActivityEntry, CanonicalDay, CanonicalDaySet, RawActivityRecord,
};
