use serde::{Deserialize, Serialize};

/// The team that owns an event type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventTypeTeam {
    pub id: i32,
    pub name: String,
}

/// A bookable event type, as returned by `/api/v1/event_types/list_with_team`.
///
/// `team` is `None` when the event type belongs to the current user rather than a team.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub team: Option<EventTypeTeam>,
}

impl EventType {
    pub fn team_name(&self) -> Option<&str> {
        self.team.as_ref().map(|team| team.name.as_str())
    }
}
