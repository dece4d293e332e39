//! Browser access for the scroll hooks: geometry reads and a self-rearming
//! animation frame loop.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::{Element, Window};
use yew::NodeRef;

use crate::animation::progress::SectionRect;
use crate::error::{Result, SiteError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn document_height(window: &Window) -> Result<f64> {
    let document = window.document().ok_or(SiteError::NoDocument)?;
    let root = document.document_element().ok_or(SiteError::NoDocument)?;
    Ok(root.scroll_height() as f64)
}

pub fn section_rect(node: &NodeRef, name: &'static str) -> Result<SectionRect> {
    let element = node.cast::<Element>().ok_or(SiteError::Unmounted(name))?;
    let rect = element.get_bounding_client_rect();
    Ok(SectionRect::new(rect.top(), rect.bottom()))
}

type FrameSlot = RefCell<Option<AnimationFrame>>;

/// Calls `callback` on every animation frame until dropped.
pub struct FrameLoop {
    slot: Rc<FrameSlot>,
}

impl FrameLoop {
    pub fn start<F>(callback: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let slot: Rc<FrameSlot> = Rc::new(RefCell::new(None));
        let callback = Rc::new(RefCell::new(callback));
        let first = schedule(Rc::downgrade(&slot), callback);
        *slot.borrow_mut() = Some(first);
        Self { slot }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        // Dropping the pending frame cancels it.
        self.slot.borrow_mut().take();
    }
}

fn schedule<F>(slot: Weak<FrameSlot>, callback: Rc<RefCell<F>>) -> AnimationFrame
where
    F: FnMut(f64) + 'static,
{
    request_animation_frame(move |timestamp| {
        let Some(live) = slot.upgrade() else {
            return;
        };
        live.borrow_mut().take();
        (callback.borrow_mut())(timestamp);
        let next = schedule(Rc::downgrade(&live), callback);
        *live.borrow_mut() = Some(next);
    })
}
