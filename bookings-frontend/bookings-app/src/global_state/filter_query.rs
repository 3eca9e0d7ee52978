use std::{convert::Infallible, fmt::Display, str::FromStr};

use leptos::prelude::*;
use leptos_router::{hooks::query_signal_with_options, NavigateOptions};

use crate::event_type_groups::{FilterRequest, SelectionState};

/// Query parameter holding the selected event type ids.
pub const EVENT_TYPE_IDS: &str = "eventTypeIds";

/// The ids stored under a single filter query parameter, e.g. `eventTypeIds=2,3`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdList(Vec<i32>);

impl IdList {
    pub fn contains(&self, id: i32) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }
}

impl From<Vec<i32>> for IdList {
    fn from(value: Vec<i32>) -> Self {
        Self(value)
    }
}

impl FromStr for IdList {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(
            s.split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .filter_map(|segment| {
                    segment
                        .parse::<i32>()
                        .inspect_err(|e| log::warn!("ignoring filter id {segment:?}: {e}"))
                        .ok()
                })
                .collect(),
        ))
    }
}

impl Display for IdList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids = self.0.iter();
        if let Some(first) = ids.next() {
            write!(f, "{first}")?;
        }
        for id in ids {
            write!(f, ",{id}")?;
        }
        Ok(())
    }
}

/// Applies a request to the ids currently stored under its key.
/// `None` means the parameter should be removed from the query.
pub fn apply_request(current: Option<&IdList>, request: &FilterRequest) -> Option<IdList> {
    let mut ids = current.map(|ids| ids.0.clone()).unwrap_or_default();
    match request {
        FilterRequest::Add { value, .. } => {
            if !ids.contains(value) {
                ids.push(*value);
            }
        }
        FilterRequest::Remove { value, .. } => ids.retain(|id| id != value),
        FilterRequest::ClearAll => ids.clear(),
    }
    (!ids.is_empty()).then_some(IdList(ids))
}

/// Selection persisted in the page's query string for a single filter key.
#[derive(Clone, Copy)]
pub struct FilterQueryStore {
    key: &'static str,
    ids: Memo<Option<IdList>>,
    set_ids: SignalSetter<Option<IdList>>,
}

impl FilterQueryStore {
    pub fn new(key: &'static str) -> Self {
        let (ids, set_ids) = query_signal_with_options::<IdList>(
            key,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
        Self { key, ids, set_ids }
    }

    pub fn selection(&self) -> Signal<SelectionState> {
        let ids = self.ids;
        Signal::derive(move || SelectionState::new(ids.get()))
    }

    /// `ClearAll` clears only this store's key. Other query parameters are left in place, the
    /// bookings view has no other filter keys to clear.
    pub fn dispatch(&self, request: FilterRequest) {
        match &request {
            FilterRequest::Add { key, .. } | FilterRequest::Remove { key, .. }
                if *key != self.key =>
            {
                log::warn!("{} filter ignoring request for {key}", self.key);
                return;
            }
            _ => {}
        }
        let next = self.ids.with_untracked(|ids| apply_request(ids.as_ref(), &request));
        self.set_ids.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(value: i32) -> FilterRequest {
        FilterRequest::Add {
            key: EVENT_TYPE_IDS,
            value,
        }
    }

    fn remove(value: i32) -> FilterRequest {
        FilterRequest::Remove {
            key: EVENT_TYPE_IDS,
            value,
        }
    }

    #[test]
    fn parses_comma_separated_ids() {
        assert_eq!("2,3".parse::<IdList>().unwrap(), IdList(vec![2, 3]));
        assert_eq!(" 4 , 5 ".parse::<IdList>().unwrap(), IdList(vec![4, 5]));
        assert_eq!("".parse::<IdList>().unwrap(), IdList::default());
    }

    #[test]
    fn skips_garbage_ids() {
        assert_eq!("1,abc,,3".parse::<IdList>().unwrap(), IdList(vec![1, 3]));
    }

    #[test]
    fn displays_comma_separated() {
        assert_eq!(IdList(vec![7, 1, 9]).to_string(), "7,1,9");
        assert_eq!(IdList(vec![7]).to_string(), "7");
        assert_eq!(IdList::default().to_string(), "");
    }

    #[test]
    fn add_appends_without_duplicates() {
        assert_eq!(apply_request(None, &add(2)), Some(IdList(vec![2])));
        let current = IdList(vec![2]);
        assert_eq!(
            apply_request(Some(&current), &add(3)),
            Some(IdList(vec![2, 3]))
        );
        assert_eq!(apply_request(Some(&current), &add(2)), Some(IdList(vec![2])));
    }

    #[test]
    fn remove_drops_parameter_when_empty() {
        let current = IdList(vec![2, 3, 2]);
        assert_eq!(apply_request(Some(&current), &remove(2)), Some(IdList(vec![3])));
        assert_eq!(apply_request(Some(&IdList(vec![3])), &remove(3)), None);
        assert_eq!(apply_request(None, &remove(3)), None);
    }

    #[test]
    fn clear_all_removes_parameter() {
        let current = IdList(vec![1, 2]);
        assert_eq!(apply_request(Some(&current), &FilterRequest::ClearAll), None);
    }
}
