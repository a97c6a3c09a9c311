//! Shared UI selection state for the active date range.
//!
//! An explicit state container owning the value plus a subscriber list.
//! The UI layer is expected to hold the only reference — this is not an
//! ambient global.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Selected date interval. `None` bounds mean the full timeline on
/// that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Whether both bounds are unset (initial state).
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Inclusive containment; an unset bound is open on that side.
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

type Subscriber = Box<dyn FnMut(&DateRange)>;

/// Observable container for the selected date range.
///
/// Subscribers are called immediately on subscribe with the current
/// value, then on every change, in subscription order.
pub struct SelectionStore {
    value: DateRange,
    subscribers: Vec<(Uuid, Subscriber)>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self {
            value: DateRange::default(),
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> DateRange {
        self.value
    }

    pub fn set(&mut self, value: DateRange) {
        self.value = value;
        self.notify();
    }

    /// Derive the next value from the current one.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(DateRange) -> DateRange,
    {
        self.value = f(self.value);
        self.notify();
    }

    pub fn subscribe<F>(&mut self, mut callback: F) -> Uuid
    where
        F: FnMut(&DateRange) + 'static,
    {
        callback(&self.value);
        let token = Uuid::new_v4();
        self.subscribers.push((token, Box::new(callback)));
        token
    }

    pub fn unsubscribe(&mut self, token: Uuid) {
        self.subscribers.retain(|(t, _)| *t != token);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        for (_, callback) in &mut self.subscribers {
            callback(&self.value);
        }
    }
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_contains_open_bounds() {
        let range = DateRange::default();
        assert!(range.is_unbounded());
        assert!(range.contains(date("2023-04-25")));

        let from = DateRange::new(Some(date("2023-01-01")), None);
        assert!(from.contains(date("2024-12-31")));
        assert!(!from.contains(date("2022-12-31")));
    }

    #[test]
    fn test_contains_inclusive() {
        let range = DateRange::new(Some(date("2023-01-01")), Some(date("2024-12-31")));
        assert!(range.contains(date("2023-01-01")));
        assert!(range.contains(date("2024-12-31")));
        assert!(!range.contains(date("2025-01-01")));
    }

    #[test]
    fn test_subscribe_fires_immediately_and_on_set() {
        let seen: Rc<RefCell<Vec<DateRange>>> = Rc::new(RefCell::new(Vec::new()));
        let mut store = SelectionStore::new();

        let sink = seen.clone();
        store.subscribe(move |range| sink.borrow_mut().push(*range));
        assert_eq!(seen.borrow().len(), 1);
        assert!(seen.borrow()[0].is_unbounded());

        store.set(DateRange::new(Some(date("2023-04-01")), Some(date("2023-05-31"))));
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[1].start, Some(date("2023-04-01")));
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let seen: Rc<RefCell<Vec<DateRange>>> = Rc::new(RefCell::new(Vec::new()));
        let mut store = SelectionStore::new();

        let sink = seen.clone();
        let token = store.subscribe(move |range| sink.borrow_mut().push(*range));
        store.unsubscribe(token);
        assert_eq!(store.subscriber_count(), 0);

        store.set(DateRange::new(Some(date("2024-08-01")), None));
        assert_eq!(seen.borrow().len(), 1); // only the initial call
    }

    #[test]
    fn test_update_derives_from_current() {
        let mut store = SelectionStore::new();
        store.set(DateRange::new(Some(date("2023-01-01")), None));
        store.update(|r| DateRange::new(r.start, Some(date("2024-12-31"))));

        let value = store.get();
        assert_eq!(value.start, Some(date("2023-01-01")));
        assert_eq!(value.end, Some(date("2024-12-31")));
    }
}
