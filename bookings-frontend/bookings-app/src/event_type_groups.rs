//! Grouping of event types by owning team, and the derived state of the event type filter.
//!
//! Everything in here is a pure function of its inputs so the filter can be exercised without a
//! browser. The component in [`crate::components::event_type_filter`] only wires these values into
//! the view and forwards [`FilterRequest`]s to the query store.

use std::collections::HashMap;

use bookings_api_types::EventType;

use crate::global_state::{filter_query::IdList, locale::Locale};

/// Bucket an event type is listed under.
///
/// Individual event types are a variant of their own rather than a magic string, so no team name
/// (including `""`) can ever be confused with them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Individual,
    Team(String),
}

impl GroupKey {
    pub fn for_event_type(event_type: &EventType) -> Self {
        event_type
            .team_name()
            .map_or(GroupKey::Individual, |name| GroupKey::Team(name.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventTypeGroup {
    pub key: GroupKey,
    pub event_types: Vec<EventType>,
}

/// Ordered mapping of [`GroupKey`] to event types.
///
/// The individual group, when present, is always first. Team groups follow in the order their
/// first event type appeared in the source list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupedEventTypes(Vec<EventTypeGroup>);

impl GroupedEventTypes {
    pub fn iter(&self) -> impl Iterator<Item = &EventTypeGroup> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.0.iter().map(|group| &group.key)
    }

    pub fn get(&self, key: &GroupKey) -> Option<&[EventType]> {
        self.0
            .iter()
            .find(|group| &group.key == key)
            .map(|group| group.event_types.as_slice())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn group_event_types(event_types: &[EventType]) -> GroupedEventTypes {
    let mut individual = vec![];
    let mut teams: Vec<EventTypeGroup> = vec![];
    let mut team_positions: HashMap<&str, usize> = HashMap::new();
    for event_type in event_types {
        let Some(team) = &event_type.team else {
            individual.push(event_type.clone());
            continue;
        };
        let position = *team_positions.entry(team.name.as_str()).or_insert_with(|| {
            teams.push(EventTypeGroup {
                key: GroupKey::Team(team.name.clone()),
                event_types: vec![],
            });
            teams.len() - 1
        });
        teams[position].event_types.push(event_type.clone());
    }
    let groups = if individual.is_empty() {
        teams
    } else {
        std::iter::once(EventTypeGroup {
            key: GroupKey::Individual,
            event_types: individual,
        })
        .chain(teams)
        .collect()
    };
    GroupedEventTypes(groups)
}

/// The currently selected event type ids, as read from the query string.
///
/// No selection at all means every event type is included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState(Option<IdList>);

impl SelectionState {
    pub fn new(ids: Option<IdList>) -> Self {
        Self(ids)
    }

    pub fn is_all(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: i32) -> bool {
        self.0.as_ref().is_some_and(|ids| ids.contains(id))
    }

    pub fn len(&self) -> usize {
        self.0.as_ref().map(IdList::len).unwrap_or_default()
    }

    pub fn ids(&self) -> Option<&IdList> {
        self.0.as_ref()
    }
}

/// A change to the persisted selection. The component never mutates the selection itself, it
/// hands one of these to the query store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterRequest {
    Add { key: &'static str, value: i32 },
    Remove { key: &'static str, value: i32 },
    ClearAll,
}

pub fn toggle_request(key: &'static str, id: i32, checked: bool) -> FilterRequest {
    if checked {
        FilterRequest::Add { key, value: id }
    } else {
        FilterRequest::Remove { key, value: id }
    }
}

/// Clicking "All" clears the selection whatever the checkbox showed. When nothing was selected
/// the stored selection doesn't change, so the box has to be restored from state.
pub fn all_option_request() -> FilterRequest {
    FilterRequest::ClearAll
}

pub fn matches_search(title: &str, search: &str) -> bool {
    search.is_empty() || title.to_lowercase().contains(&search.to_lowercase())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub id: i32,
    pub title: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupView {
    pub key: GroupKey,
    pub options: Vec<OptionView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterView {
    pub all_checked: bool,
    pub groups: Vec<GroupView>,
}

/// Checkbox state for every event type that passes the search. Groups with no matches are kept so
/// their header still renders.
pub fn derive_filter_view(
    grouped: &GroupedEventTypes,
    search: &str,
    selection: &SelectionState,
) -> FilterView {
    let groups = grouped
        .iter()
        .map(|group| GroupView {
            key: group.key.clone(),
            options: group
                .event_types
                .iter()
                .filter(|event_type| matches_search(&event_type.title, search))
                .map(|event_type| OptionView {
                    id: event_type.id,
                    title: event_type.title.clone(),
                    checked: selection.contains(event_type.id),
                })
                .collect(),
        })
        .collect();
    FilterView {
        all_checked: selection.is_all(),
        groups,
    }
}

/// What the filter renders once the event types have been requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterContent {
    /// The event types haven't arrived yet, nothing is rendered.
    Loading,
    /// The user has no event types to filter by.
    Empty,
    Options(GroupedEventTypes),
}

impl FilterContent {
    pub fn new(event_types: Option<&[EventType]>) -> Self {
        match event_types {
            None => FilterContent::Loading,
            Some([]) => FilterContent::Empty,
            Some(event_types) => FilterContent::Options(group_event_types(event_types)),
        }
    }
}

pub fn summary_text(selection: &SelectionState, locale: Locale) -> String {
    if selection.is_all() {
        locale.t("all")
    } else {
        locale.t_count("number_selected", selection.len())
    }
}

pub fn group_header(key: &GroupKey, locale: Locale) -> String {
    match key {
        GroupKey::Individual => locale.t("individual"),
        GroupKey::Team(name) => name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use bookings_api_types::EventTypeTeam;

    use super::*;
    use crate::global_state::filter_query::{apply_request, EVENT_TYPE_IDS};

    fn event_type(id: i32, title: &str, team: Option<(i32, &str)>) -> EventType {
        EventType {
            id,
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            team: team.map(|(id, name)| EventTypeTeam {
                id,
                name: name.to_string(),
            }),
        }
    }

    fn sample() -> Vec<EventType> {
        vec![
            event_type(1, "Intro", None),
            event_type(2, "Sync", Some((5, "Sales"))),
            event_type(3, "Demo", Some((5, "Sales"))),
        ]
    }

    fn ids(group: &[EventType]) -> Vec<i32> {
        group.iter().map(|e| e.id).collect()
    }

    fn checked_ids(view: &FilterView) -> Vec<(i32, bool)> {
        view.groups
            .iter()
            .flat_map(|g| g.options.iter().map(|o| (o.id, o.checked)))
            .collect()
    }

    #[test]
    fn groups_individual_then_teams() {
        let grouped = group_event_types(&sample());
        assert_eq!(
            grouped.keys().cloned().collect::<Vec<_>>(),
            vec![GroupKey::Individual, GroupKey::Team("Sales".to_string())]
        );
        assert_eq!(ids(grouped.get(&GroupKey::Individual).unwrap()), vec![1]);
        assert_eq!(
            ids(grouped.get(&GroupKey::Team("Sales".to_string())).unwrap()),
            vec![2, 3]
        );
    }

    #[test]
    fn individual_group_first_even_when_last_in_input() {
        let input = vec![
            event_type(1, "A", Some((7, "Support"))),
            event_type(2, "B", Some((5, "Sales"))),
            event_type(3, "C", None),
            event_type(4, "D", Some((7, "Support"))),
            event_type(5, "E", None),
        ];
        let grouped = group_event_types(&input);
        assert_eq!(
            grouped.keys().cloned().collect::<Vec<_>>(),
            vec![
                GroupKey::Individual,
                GroupKey::Team("Support".to_string()),
                GroupKey::Team("Sales".to_string()),
            ]
        );
        assert_eq!(ids(grouped.get(&GroupKey::Individual).unwrap()), vec![3, 5]);
        assert_eq!(
            ids(grouped.get(&GroupKey::Team("Support".to_string())).unwrap()),
            vec![1, 4]
        );
    }

    #[test]
    fn every_event_type_lands_in_exactly_one_group() {
        let input = vec![
            event_type(1, "A", Some((1, "X"))),
            event_type(2, "B", None),
            event_type(3, "C", Some((2, "Y"))),
            event_type(4, "D", Some((1, "X"))),
            event_type(5, "E", Some((2, "Y"))),
        ];
        let grouped = group_event_types(&input);
        let mut seen = grouped
            .iter()
            .flat_map(|group| {
                group.event_types.iter().map(move |event_type| {
                    assert_eq!(group.key, GroupKey::for_event_type(event_type));
                    event_type.id
                })
            })
            .collect::<Vec<_>>();
        seen.sort();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn teams_only_has_no_individual_group() {
        let grouped = group_event_types(&[event_type(2, "Sync", Some((5, "Sales")))]);
        assert_eq!(grouped.len(), 1);
        assert!(grouped.get(&GroupKey::Individual).is_none());
    }

    #[test]
    fn empty_input_is_empty_mapping() {
        let grouped = group_event_types(&[]);
        assert!(grouped.is_empty());
        assert_eq!(grouped.len(), 0);
    }

    #[test]
    fn empty_team_name_is_its_own_group() {
        let input = vec![event_type(1, "Solo", None), event_type(2, "Nameless", Some((9, "")))];
        let grouped = group_event_types(&input);
        assert_eq!(
            grouped.keys().cloned().collect::<Vec<_>>(),
            vec![GroupKey::Individual, GroupKey::Team(String::new())]
        );
        assert_eq!(ids(grouped.get(&GroupKey::Team(String::new())).unwrap()), vec![2]);
    }

    #[test]
    fn team_named_like_a_sentinel_is_still_a_team() {
        let input = vec![
            event_type(1, "Solo", None),
            event_type(2, "Shared", Some((3, "user_own_event_types"))),
        ];
        let grouped = group_event_types(&input);
        assert_eq!(ids(grouped.get(&GroupKey::Individual).unwrap()), vec![1]);
        assert_eq!(
            ids(grouped
                .get(&GroupKey::Team("user_own_event_types".to_string()))
                .unwrap()),
            vec![2]
        );
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(matches_search("Sync", "sy"));
        assert!(matches_search("Sync", "YNC"));
        assert!(matches_search("Anything", ""));
        assert!(!matches_search("Demo", "sy"));
    }

    #[test]
    fn selection_checks_only_selected_ids() {
        let grouped = group_event_types(&sample());
        let selection = SelectionState::new(Some(IdList::from(vec![2])));
        let view = derive_filter_view(&grouped, "", &selection);
        assert!(!view.all_checked);
        assert_eq!(checked_ids(&view), vec![(1, false), (2, true), (3, false)]);
        assert_eq!(summary_text(&selection, Locale::English), "1 selected");
    }

    #[test]
    fn search_keeps_groups_without_matches() {
        let grouped = group_event_types(&sample());
        let view = derive_filter_view(&grouped, "sy", &SelectionState::default());
        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.groups[0].key, GroupKey::Individual);
        assert!(view.groups[0].options.is_empty());
        assert_eq!(
            view.groups[1].options,
            vec![OptionView {
                id: 2,
                title: "Sync".to_string(),
                checked: false
            }]
        );
    }

    #[test]
    fn uppercase_search_matches() {
        let grouped = group_event_types(&sample());
        let view = derive_filter_view(&grouped, "DEM", &SelectionState::default());
        assert_eq!(checked_ids(&view), vec![(3, false)]);
    }

    #[test]
    fn empty_or_absent_selection_is_all() {
        let grouped = group_event_types(&sample());
        for selection in [
            SelectionState::default(),
            SelectionState::new(Some(IdList::default())),
        ] {
            let view = derive_filter_view(&grouped, "", &selection);
            assert!(view.all_checked);
            assert!(checked_ids(&view).iter().all(|(_, checked)| !checked));
            assert_eq!(summary_text(&selection, Locale::English), "All");
        }
    }

    #[test]
    fn summary_counts_selection() {
        let selection = SelectionState::new(Some(IdList::from(vec![1, 2, 3])));
        assert_eq!(summary_text(&selection, Locale::English), "3 selected");
    }

    #[test]
    fn toggles_produce_requests() {
        assert_eq!(
            toggle_request(EVENT_TYPE_IDS, 4, true),
            FilterRequest::Add {
                key: EVENT_TYPE_IDS,
                value: 4
            }
        );
        assert_eq!(
            toggle_request(EVENT_TYPE_IDS, 4, false),
            FilterRequest::Remove {
                key: EVENT_TYPE_IDS,
                value: 4
            }
        );
    }

    #[test]
    fn clicking_all_when_nothing_is_selected_stays_all() {
        let grouped = group_event_types(&sample());
        let next = apply_request(None, &all_option_request());
        assert_eq!(next, None);
        let view = derive_filter_view(&grouped, "", &SelectionState::new(next));
        assert!(view.all_checked);
        assert!(view
            .groups
            .iter()
            .flat_map(|group| &group.options)
            .all(|option| !option.checked));
    }

    #[test]
    fn clicking_all_clears_a_selection() {
        let grouped = group_event_types(&sample());
        let current = IdList::from(vec![2, 4]);
        let next = apply_request(Some(&current), &all_option_request());
        let view = derive_filter_view(&grouped, "", &SelectionState::new(next));
        assert!(view.all_checked);
    }

    #[test]
    fn content_states() {
        assert_eq!(FilterContent::new(None), FilterContent::Loading);
        assert_eq!(FilterContent::new(Some(&[])), FilterContent::Empty);
        let sample = sample();
        assert_eq!(
            FilterContent::new(Some(&sample)),
            FilterContent::Options(group_event_types(&sample))
        );
    }

    #[test]
    fn group_headers() {
        assert_eq!(group_header(&GroupKey::Individual, Locale::English), "Individual");
        assert_eq!(
            group_header(&GroupKey::Team("Sales".to_string()), Locale::English),
            "Sales"
        );
    }
}
