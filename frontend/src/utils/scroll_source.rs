use std::cell::{Cell, RefCell};
use std::fmt;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use thiserror::Error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

pub type ScrollListener = Box<dyn Fn(f64)>;

#[derive(Debug, Error)]
pub enum ScrollSourceError {
    #[error("no browser window available")]
    NoWindow,
    #[error("failed to read scroll offset: {0}")]
    Offset(String),
    #[error("failed to register scroll listener: {0}")]
    Register(String),
}

/// Something that produces vertical scroll offsets.
pub trait ScrollSource {
    /// Current offset, used to seed subscribers before the first event.
    fn offset(&self) -> Result<f64, ScrollSourceError>;

    /// Registers `listener` until the returned subscription is dropped.
    fn subscribe(&self, listener: ScrollListener) -> Result<ScrollSubscription, ScrollSourceError>;
}

/// Keeps a listener registered. Dropping it deregisters the listener.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// The browser window's `scroll` event and `scrollY`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowScrollSource;

impl ScrollSource for WindowScrollSource {
    fn offset(&self) -> Result<f64, ScrollSourceError> {
        let window = web_sys::window().ok_or(ScrollSourceError::NoWindow)?;
        window
            .scroll_y()
            .map_err(|e| ScrollSourceError::Offset(format!("{:?}", e)))
    }

    fn subscribe(&self, listener: ScrollListener) -> Result<ScrollSubscription, ScrollSourceError> {
        let window = web_sys::window().ok_or(ScrollSourceError::NoWindow)?;
        let callback = Closure::<dyn Fn()>::new(move || {
            if let Some(win) = web_sys::window() {
                match win.scroll_y() {
                    Ok(scroll_y) => listener(scroll_y),
                    Err(e) => log::warn!("Failed to read scroll offset: {:?}", e),
                }
            }
        });
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(|e| ScrollSourceError::Register(format!("{:?}", e)))?;

        Ok(ScrollSubscription::new(move || {
            if let Err(e) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove scroll listener: {:?}", e);
            }
        }))
    }
}

#[derive(Default)]
struct ManualState {
    offset: Cell<f64>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Rc<dyn Fn(f64)>)>>,
}

/// A scroll source driven by hand, for hosts without a window and for tests.
#[derive(Clone, Default)]
pub struct ManualScrollSource {
    state: Rc<ManualState>,
}

impl ManualScrollSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to `offset` and notifies every registered listener.
    pub fn scroll_to(&self, offset: f64) {
        self.state.offset.set(offset);
        // Snapshot so a listener may subscribe or unsubscribe while being notified.
        let listeners: Vec<Rc<dyn Fn(f64)>> = self
            .state
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(offset);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.state.listeners.borrow().len()
    }
}

impl ScrollSource for ManualScrollSource {
    fn offset(&self) -> Result<f64, ScrollSourceError> {
        Ok(self.state.offset.get())
    }

    fn subscribe(&self, listener: ScrollListener) -> Result<ScrollSubscription, ScrollSourceError> {
        let id = self.state.next_id.get();
        self.state.next_id.set(id + 1);
        self.state
            .listeners
            .borrow_mut()
            .push((id, Rc::from(listener)));

        let state: Weak<ManualState> = Rc::downgrade(&self.state);
        Ok(ScrollSubscription::new(move || {
            if let Some(state) = state.upgrade() {
                state.listeners.borrow_mut().retain(|(other, _)| *other != id);
            }
        }))
    }
}

/// Shared handle to a scroll source that can travel through component props.
#[derive(Clone)]
pub struct ScrollSourceHandle(Rc<dyn ScrollSource>);

impl ScrollSourceHandle {
    pub fn new(source: impl ScrollSource + 'static) -> Self {
        Self(Rc::new(source))
    }
}

thread_local! {
    static WINDOW_SOURCE: ScrollSourceHandle = ScrollSourceHandle::new(WindowScrollSource);
}

/// Every default handle shares one window source, so props built from the
/// default compare equal across renders.
impl Default for ScrollSourceHandle {
    fn default() -> Self {
        WINDOW_SOURCE.with(ScrollSourceHandle::clone)
    }
}

impl PartialEq for ScrollSourceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ScrollSourceHandle {
    type Target = dyn ScrollSource;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_source_delivers_offsets_to_listeners() {
        let source = ManualScrollSource::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _subscription = {
            let seen = Rc::clone(&seen);
            source
                .subscribe(Box::new(move |offset| seen.borrow_mut().push(offset)))
                .unwrap()
        };

        source.scroll_to(12.0);
        source.scroll_to(40.5);

        assert_eq!(*seen.borrow(), vec![12.0, 40.5]);
        assert_eq!(source.offset().unwrap(), 40.5);
    }

    #[test]
    fn dropping_subscription_deregisters_listener() {
        let source = ManualScrollSource::new();
        let hits = Rc::new(Cell::new(0));
        let subscription = {
            let hits = Rc::clone(&hits);
            source
                .subscribe(Box::new(move |_| hits.set(hits.get() + 1)))
                .unwrap()
        };
        assert_eq!(source.listener_count(), 1);

        drop(subscription);
        source.scroll_to(100.0);

        assert_eq!(source.listener_count(), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn repeated_subscribe_cycles_do_not_accumulate() {
        let source = ManualScrollSource::new();
        for _ in 0..10 {
            let _subscription = source.subscribe(Box::new(|_| {})).unwrap();
            assert_eq!(source.listener_count(), 1);
        }
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn subscription_outliving_source_is_harmless() {
        let source = ManualScrollSource::new();
        let subscription = source.subscribe(Box::new(|_| {})).unwrap();
        drop(source);
        drop(subscription);
    }

    #[test]
    fn handles_compare_by_identity() {
        let handle = ScrollSourceHandle::new(ManualScrollSource::new());
        let same = handle.clone();
        let other = ScrollSourceHandle::new(ManualScrollSource::new());
        assert!(handle == same);
        assert!(handle != other);
    }

    #[test]
    fn default_handles_share_the_window_source() {
        assert!(ScrollSourceHandle::default() == ScrollSourceHandle::default());
        assert!(ScrollSourceHandle::default() != ScrollSourceHandle::new(WindowScrollSource));
    }
}
