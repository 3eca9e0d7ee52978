pub mod event_types;
pub mod result;
pub mod user_data;

pub use event_types::{EventType, EventTypeTeam};
