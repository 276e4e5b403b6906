//! Scoped subscriptions to a viewport's vertical scroll offset.
//!
//! A [`ScrollSubscription`] is the only handle to an attached listener.
//! Dropping it flips a shared liveness flag *before* detaching, so a scroll
//! signal that races the release finds the flag cleared and does nothing.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use thiserror::Error;

pub type ScrollCallback = Box<dyn FnMut(f64)>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubscribeError {
    #[error("no scrollable viewport is available")]
    NoViewport,
    #[error("failed to attach scroll listener: {0}")]
    Listener(String),
}

/// Anything that can report vertical scroll offsets to a callback.
pub trait ScrollSource {
    fn subscribe(&self, on_offset: ScrollCallback) -> Result<ScrollSubscription, SubscribeError>;
}

pub struct ScrollSubscription {
    alive: Rc<Cell<bool>>,
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(alive: Rc<Cell<bool>>, release: impl FnOnce() + 'static) -> Self {
        Self {
            alive,
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.alive.get()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.alive.set(false);
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// The browser window.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    #[cfg(target_arch = "wasm32")]
    fn subscribe(&self, mut on_offset: ScrollCallback) -> Result<ScrollSubscription, SubscribeError> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or(SubscribeError::NoViewport)?;
        let alive = Rc::new(Cell::new(true));

        let reader = window.clone();
        let guard = alive.clone();
        let listener = Closure::<dyn FnMut()>::new(move || {
            if guard.get() {
                on_offset(reader.scroll_y().unwrap_or(0.0));
            }
        });

        window
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .map_err(|err| SubscribeError::Listener(format!("{err:?}")))?;

        Ok(ScrollSubscription::new(alive, move || {
            let _ = window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            drop(listener);
        }))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn subscribe(&self, _on_offset: ScrollCallback) -> Result<ScrollSubscription, SubscribeError> {
        Err(SubscribeError::NoViewport)
    }
}

#[derive(Clone)]
struct Listener {
    alive: Rc<Cell<bool>>,
    callback: Rc<RefCell<ScrollCallback>>,
}

#[derive(Default)]
struct ManualInner {
    offset: f64,
    listeners: Vec<Listener>,
}

/// A scroll source driven by hand with [`ManualScroll::emit`].
///
/// Hosts without a browser viewport can provide one through context; the
/// navbar picks it up instead of the window.
#[derive(Clone, Default)]
pub struct ManualScroll {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last emitted offset.
    pub fn offset(&self) -> f64 {
        self.inner.borrow().offset
    }

    pub fn listener_count(&self) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.alive.get())
            .count()
    }

    /// Deliver `offset` to every live listener.
    ///
    /// Listeners are snapshotted first so a callback may drop its own (or
    /// another) subscription without re-entering the borrow.
    pub fn emit(&self, offset: f64) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.offset = offset;
            inner.listeners.retain(|l| l.alive.get());
            inner.listeners.clone()
        };
        for listener in listeners {
            if !listener.alive.get() {
                continue;
            }
            if let Ok(mut callback) = listener.callback.try_borrow_mut() {
                callback(offset);
            }
        }
    }
}

impl ScrollSource for ManualScroll {
    fn subscribe(&self, on_offset: ScrollCallback) -> Result<ScrollSubscription, SubscribeError> {
        let alive = Rc::new(Cell::new(true));
        self.inner.borrow_mut().listeners.push(Listener {
            alive: alive.clone(),
            callback: Rc::new(RefCell::new(on_offset)),
        });

        let inner: Weak<RefCell<ManualInner>> = Rc::downgrade(&self.inner);
        Ok(ScrollSubscription::new(alive, move || {
            if let Some(inner) = inner.upgrade() {
                if let Ok(mut inner) = inner.try_borrow_mut() {
                    inner.listeners.retain(|l| l.alive.get());
                }
            }
        }))
    }
}

impl PartialEq for ManualScroll {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for ManualScroll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScroll")
            .field("offset", &self.offset())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navbar::{NavEvent, NavbarState};

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, ScrollCallback) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Box::new(move |offset| sink.borrow_mut().push(offset)))
    }

    #[test]
    fn delivers_offsets_while_held() {
        let source = ManualScroll::new();
        let (seen, callback) = recorder();
        let sub = source.subscribe(callback).unwrap();
        source.emit(10.0);
        source.emit(75.0);
        assert!(sub.is_active());
        assert_eq!(*seen.borrow(), vec![10.0, 75.0]);
    }

    #[test]
    fn drop_stops_delivery() {
        let source = ManualScroll::new();
        let (seen, callback) = recorder();
        let sub = source.subscribe(callback).unwrap();
        source.emit(1.0);
        drop(sub);
        source.emit(2.0);
        assert_eq!(*seen.borrow(), vec![1.0]);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn instances_are_independent() {
        let source = ManualScroll::new();
        let (first_seen, first) = recorder();
        let (second_seen, second) = recorder();
        let first_sub = source.subscribe(first).unwrap();
        let _second_sub = source.subscribe(second).unwrap();
        assert_eq!(source.listener_count(), 2);

        drop(first_sub);
        source.emit(60.0);
        assert!(first_seen.borrow().is_empty());
        assert_eq!(*second_seen.borrow(), vec![60.0]);
    }

    #[test]
    fn release_during_emit_is_a_no_op_for_later_listeners() {
        let source = ManualScroll::new();
        let slot: Rc<RefCell<Option<ScrollSubscription>>> = Rc::new(RefCell::new(None));
        let (seen, callback) = recorder();

        let killer_slot = slot.clone();
        let _killer = source
            .subscribe(Box::new(move |_| {
                killer_slot.borrow_mut().take();
            }))
            .unwrap();
        *slot.borrow_mut() = Some(source.subscribe(callback).unwrap());

        source.emit(99.0);
        source.emit(100.0);
        assert!(seen.borrow().is_empty());
        assert_eq!(source.listener_count(), 1);
    }

    #[test]
    fn subscription_outliving_source_drops_cleanly() {
        let source = ManualScroll::new();
        let sub = source.subscribe(Box::new(|_| {})).unwrap();
        drop(source);
        drop(sub);
    }

    #[test]
    fn unmount_freezes_navbar_state() {
        let source = ManualScroll::new();
        let state = Rc::new(Cell::new(NavbarState::default()));
        let target = state.clone();
        let sub = source
            .subscribe(Box::new(move |offset| {
                let mut next = target.get();
                next.handle(NavEvent::Scrolled(offset));
                target.set(next);
            }))
            .unwrap();

        source.emit(80.0);
        assert!(state.get().compacted());
        drop(sub);
        source.emit(0.0);
        assert!(state.get().compacted());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn no_window_off_wasm() {
        let err = WindowScroll.subscribe(Box::new(|_| {})).unwrap_err();
        assert_eq!(err, SubscribeError::NoViewport);
    }
}
