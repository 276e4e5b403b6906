use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::viewport::{ManualScroll, ScrollSource, ScrollSubscription, WindowScroll};

/// Attach `on_offset` to the viewport for the lifetime of the calling
/// component.
///
/// The source is a [`ManualScroll`] from context when the host provides one,
/// otherwise the browser window. When no viewport can be attached the
/// callback simply never fires.
pub fn use_scroll_watcher(on_offset: impl FnMut(f64) + 'static) {
    let manual = try_use_context::<ManualScroll>();

    let subscription: Rc<RefCell<Option<ScrollSubscription>>> = use_hook(move || {
        let result = match manual {
            Some(source) => source.subscribe(Box::new(on_offset)),
            None => WindowScroll.subscribe(Box::new(on_offset)),
        };
        let held = match result {
            Ok(sub) => Some(sub),
            Err(err) => {
                debug!("scroll watcher inactive: {err}");
                None
            }
        };
        Rc::new(RefCell::new(held))
    });

    use_drop(move || {
        subscription.borrow_mut().take();
    });
}
