use std::cell::RefCell;
use std::rc::Rc;

use crate::config::DEFAULT_SCROLL_THRESHOLD;
use crate::utils::scroll_source::{ScrollSource, ScrollSourceError, ScrollSubscription};

/// Visual density of the navbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollMode {
    Compact,
    #[default]
    Expanded,
}

impl ScrollMode {
    /// Strictly past the threshold is compact; the threshold itself is not.
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            ScrollMode::Compact
        } else {
            ScrollMode::Expanded
        }
    }

    pub fn is_compact(self) -> bool {
        self == ScrollMode::Compact
    }

    pub fn class(self) -> &'static str {
        match self {
            ScrollMode::Compact => "compact",
            ScrollMode::Expanded => "expanded",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollModeTracker {
    threshold: f64,
    mode: ScrollMode,
}

impl Default for ScrollModeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollModeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            mode: ScrollMode::default(),
        }
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    /// Feeds one offset. Returns the new mode only when it changed.
    pub fn observe(&mut self, offset: f64) -> Option<ScrollMode> {
        let next = ScrollMode::for_offset(offset, self.threshold);
        if next == self.mode {
            return None;
        }
        self.mode = next;
        Some(next)
    }
}

/// Follows `source`, calling `on_change` whenever the mode flips.
///
/// The current offset is applied immediately so a page restored mid-scroll
/// starts in the right mode. Tracking stops when the returned subscription
/// is dropped.
pub fn track(
    source: &dyn ScrollSource,
    threshold: f64,
    on_change: impl Fn(ScrollMode) + 'static,
) -> Result<ScrollSubscription, ScrollSourceError> {
    let mut tracker = ScrollModeTracker::new(threshold);
    if let Some(mode) = tracker.observe(source.offset()?) {
        on_change(mode);
    }

    let tracker = Rc::new(RefCell::new(tracker));
    source.subscribe(Box::new(move |offset| {
        let changed = tracker.borrow_mut().observe(offset);
        if let Some(mode) = changed {
            log::debug!("Navbar mode -> {:?} at offset {}", mode, offset);
            on_change(mode);
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::scroll_source::ManualScrollSource;
    use std::cell::Cell;

    #[test]
    fn threshold_boundary_is_expanded() {
        assert_eq!(ScrollMode::for_offset(0.0, 20.0), ScrollMode::Expanded);
        assert_eq!(ScrollMode::for_offset(20.0, 20.0), ScrollMode::Expanded);
        assert_eq!(ScrollMode::for_offset(20.5, 20.0), ScrollMode::Compact);
        assert_eq!(ScrollMode::for_offset(10_000.0, 20.0), ScrollMode::Compact);
    }

    #[test]
    fn overscroll_above_the_top_stays_expanded() {
        assert_eq!(ScrollMode::for_offset(-15.0, 20.0), ScrollMode::Expanded);
    }

    #[test]
    fn tracker_starts_expanded() {
        let tracker = ScrollModeTracker::default();
        assert_eq!(tracker.mode(), ScrollMode::Expanded);
    }

    #[test]
    fn tracker_reports_only_changes() {
        let mut tracker = ScrollModeTracker::new(20.0);
        assert_eq!(tracker.observe(5.0), None);
        assert_eq!(tracker.observe(21.0), Some(ScrollMode::Compact));
        assert_eq!(tracker.observe(21.0), None);
        assert_eq!(tracker.observe(300.0), None);
        assert_eq!(tracker.observe(20.0), Some(ScrollMode::Expanded));
        assert_eq!(tracker.mode(), ScrollMode::Expanded);
    }

    #[test]
    fn same_offset_twice_is_idempotent() {
        let mut tracker = ScrollModeTracker::new(20.0);
        tracker.observe(45.0);
        let before = tracker.clone();
        assert_eq!(tracker.observe(45.0), None);
        assert_eq!(tracker, before);
    }

    #[test]
    fn track_notifies_on_transitions_only() {
        let source = ManualScrollSource::new();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let changes = Rc::clone(&changes);
            track(&source, 20.0, move |mode| changes.borrow_mut().push(mode)).unwrap()
        };

        for offset in [0.0, 10.0, 20.0, 21.0, 45.0, 45.0, 19.0, 3.0] {
            source.scroll_to(offset);
        }

        assert_eq!(
            *changes.borrow(),
            vec![ScrollMode::Compact, ScrollMode::Expanded]
        );
    }

    #[test]
    fn track_seeds_from_current_offset() {
        let source = ManualScrollSource::new();
        source.scroll_to(250.0);
        let last = Rc::new(Cell::new(ScrollMode::Expanded));
        let _subscription = {
            let last = Rc::clone(&last);
            track(&source, 20.0, move |mode| last.set(mode)).unwrap()
        };
        assert_eq!(last.get(), ScrollMode::Compact);
    }

    #[test]
    fn dropping_tracking_stops_updates() {
        let source = ManualScrollSource::new();
        let hits = Rc::new(Cell::new(0));
        let subscription = {
            let hits = Rc::clone(&hits);
            track(&source, 20.0, move |_| hits.set(hits.get() + 1)).unwrap()
        };
        source.scroll_to(50.0);
        drop(subscription);
        source.scroll_to(0.0);
        source.scroll_to(50.0);

        assert_eq!(hits.get(), 1);
        assert_eq!(source.listener_count(), 0);
    }
}
