//! Hooks that bind the animation core to browser events.
//!
//! Each hook owns its core state for the lifetime of the calling component.
//! Listeners and frame loops are RAII guards held by the effect and dropped by
//! its destructor, so unmounting always releases them.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Event, WheelEvent};
use yew::prelude::*;
use yew_hooks::prelude::use_window_size;

use crate::animation::progress::{page_progress, ScrollProgressTracker, ScrollReading};
use crate::animation::smoothing::SmoothedValue;
use crate::animation::tunnel::TunnelCamera;
use crate::animation::virtual_scroll::WheelInput;
use crate::animation::word_cycle::WordCycle;
use crate::config::{FooterConfig, TunnelConfig};
use crate::dom::{self, FrameLoop};
use crate::error::Result;

/// Smallest change in a smoothed value worth a re-render.
const PUBLISH_EPSILON: f64 = 1e-4;

/// Native scroll at or below this offset counts as the top of the page.
const PAGE_TOP_SLOP: f64 = 1.0;

/// Pixels per line for wheel events reported in lines.
const LINE_HEIGHT_PX: f64 = 16.0;

fn page_at_top(scroll_y: f64) -> bool {
    scroll_y <= PAGE_TOP_SLOP
}

/// Wheel delta in pixels whatever the event's delta mode.
fn delta_pixels(delta: f64, mode: u32, viewport_height: f64) -> f64 {
    match mode {
        WheelEvent::DOM_DELTA_LINE => delta * LINE_HEIGHT_PX,
        WheelEvent::DOM_DELTA_PAGE => delta * viewport_height,
        _ => delta,
    }
}

fn should_publish(last: f64, next: f64, target: f64) -> bool {
    (next - last).abs() >= PUBLISH_EPSILON || (next == target && last != target)
}

/// Publishes a smoothed value into component state, skipping sub-pixel noise.
struct Publisher {
    last: f64,
    state: UseStateHandle<f64>,
}

impl Publisher {
    fn new(state: UseStateHandle<f64>) -> Self {
        Self { last: *state, state }
    }

    fn offer(&mut self, next: f64, target: f64) {
        if should_publish(self.last, next, target) {
            self.last = next;
            self.state.set(next);
        }
    }
}

#[hook]
pub fn use_viewport_width() -> f64 {
    let (width, _) = use_window_size();
    width
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionScrollOptions {
    pub name: &'static str,
    /// Scroll distance in viewport heights.
    pub multiplier: f64,
    pub damping: f64,
    pub snap_within: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionScroll {
    pub reading: ScrollReading,
    pub smoothed: f64,
}

struct SectionSubscriptions {
    _scroll: EventListener,
    _resize: EventListener,
    _frames: FrameLoop,
}

fn subscribe_section(
    node: NodeRef,
    options: SectionScrollOptions,
    reading: UseStateHandle<ScrollReading>,
    smoothed: UseStateHandle<f64>,
) -> Result<SectionSubscriptions> {
    let window = dom::window()?;
    let mut value = SmoothedValue::new(*smoothed, options.damping);
    if let Some(epsilon) = options.snap_within {
        value = value.with_snap(epsilon);
    }
    let value = Rc::new(RefCell::new(value));

    let measure = {
        let window = window.clone();
        let value = value.clone();
        Rc::new(move || {
            let viewport = dom::viewport_height(&window);
            let tracker = ScrollProgressTracker::for_viewport(viewport, options.multiplier);
            match dom::section_rect(&node, options.name) {
                Ok(rect) => {
                    let next = tracker.read(rect, viewport);
                    value.borrow_mut().set_target(next.progress);
                    reading.set(next);
                }
                Err(err) => log::debug!("skipping scroll sample: {}", err),
            }
        })
    };

    // Mid-page loads render correctly before the first scroll event.
    (*measure)();

    let scroll = {
        let measure = measure.clone();
        EventListener::new(&window, "scroll", move |_| (*measure)())
    };
    let resize = EventListener::new(&window, "resize", move |_| (*measure)());

    let mut publisher = Publisher::new(smoothed);
    let frames = FrameLoop::start(move |_| {
        let mut value = value.borrow_mut();
        let next = value.step();
        publisher.offer(next, value.target());
    });

    log::debug!("tracking scroll for `{}`", options.name);
    Ok(SectionSubscriptions {
        _scroll: scroll,
        _resize: resize,
        _frames: frames,
    })
}

/// Scroll progress through the section behind `node`, raw and smoothed.
#[hook]
pub fn use_section_scroll(node: NodeRef, options: SectionScrollOptions) -> SectionScroll {
    let reading = use_state_eq(ScrollReading::idle);
    let smoothed = use_state_eq(|| 0.0);

    {
        let reading = reading.clone();
        let smoothed = smoothed.clone();
        use_effect_with_deps(
            move |(node, options)| {
                let subscriptions = match subscribe_section(node.clone(), *options, reading, smoothed) {
                    Ok(subscriptions) => Some(subscriptions),
                    Err(err) => {
                        log::warn!("scroll tracking for `{}` disabled: {}", options.name, err);
                        None
                    }
                };
                move || drop(subscriptions)
            },
            (node, options),
        );
    }

    SectionScroll {
        reading: *reading,
        smoothed: *smoothed,
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TunnelView {
    pub depth: f64,
    pub progress: f64,
    pub completed: bool,
}

struct TunnelSubscriptions {
    _wheel: EventListener,
    _frames: FrameLoop,
}

fn subscribe_tunnel(
    node: NodeRef,
    config: TunnelConfig,
    depth: UseStateHandle<f64>,
    progress: UseStateHandle<f64>,
    completed: UseStateHandle<bool>,
) -> Result<TunnelSubscriptions> {
    let window = dom::window()?;
    let camera = Rc::new(RefCell::new(TunnelCamera::new(&config)));
    depth.set(0.0);
    progress.set(camera.borrow().scroll().progress());
    completed.set(camera.borrow().scroll().is_completed());

    let wheel = {
        let page = window.clone();
        let camera = camera.clone();
        EventListener::new_with_options(
            &window,
            "wheel",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                    return;
                };
                let Ok(rect) = dom::section_rect(&node, "hero") else {
                    return;
                };
                let input = WheelInput {
                    delta_y: delta_pixels(
                        wheel.delta_y(),
                        wheel.delta_mode(),
                        dom::viewport_height(&page),
                    ),
                    engaged: rect.covers_viewport_top(),
                    page_at_top: page_at_top(dom::scroll_y(&page)),
                };
                let mut camera = camera.borrow_mut();
                if camera.scroll_mut().on_wheel(input).suppresses_native() {
                    event.prevent_default();
                }
                progress.set(camera.scroll().progress());
                completed.set(camera.scroll().is_completed());
            },
        )
    };

    let mut publisher = Publisher::new(depth);
    let frames = FrameLoop::start(move |_| {
        let mut camera = camera.borrow_mut();
        let next = camera.tick();
        let target = camera.geometry().target_depth(camera.scroll().accumulated());
        publisher.offer(next, target);
    });

    Ok(TunnelSubscriptions {
        _wheel: wheel,
        _frames: frames,
    })
}

/// Wheel-locked hero tunnel: camera depth and sequence state. A new config
/// restarts the sequence from the top of the tunnel.
#[hook]
pub fn use_tunnel(node: NodeRef, config: TunnelConfig) -> TunnelView {
    let depth = use_state_eq(|| 0.0);
    let progress = use_state_eq(|| 0.0);
    let completed = use_state_eq(|| false);

    {
        let depth = depth.clone();
        let progress = progress.clone();
        let completed = completed.clone();
        use_effect_with_deps(
            move |(node, config)| {
                let subscriptions =
                    match subscribe_tunnel(node.clone(), *config, depth, progress, completed) {
                        Ok(subscriptions) => Some(subscriptions),
                        Err(err) => {
                            log::warn!("hero scroll lock disabled: {}", err);
                            None
                        }
                    };
                move || drop(subscriptions)
            },
            (node, config),
        );
    }

    TunnelView {
        depth: *depth,
        progress: *progress,
        completed: *completed,
    }
}

struct PageSubscriptions {
    _scroll: EventListener,
    _frames: FrameLoop,
}

fn subscribe_page_rotation(
    config: FooterConfig,
    rotation: UseStateHandle<f64>,
) -> Result<PageSubscriptions> {
    let window = dom::window()?;
    let value = Rc::new(RefCell::new(SmoothedValue::new(0.0, config.damping)));

    let measure = {
        let window = window.clone();
        let value = value.clone();
        Rc::new(move || {
            let document_height = match dom::document_height(&window) {
                Ok(height) => height,
                Err(err) => {
                    log::debug!("skipping page progress sample: {}", err);
                    return;
                }
            };
            let progress = page_progress(
                dom::scroll_y(&window),
                document_height,
                dom::viewport_height(&window),
            );
            value.borrow_mut().set_target(progress * config.rotation);
        })
    };
    (*measure)();
    let scroll = EventListener::new(&window, "scroll", move |_| (*measure)());

    let mut publisher = Publisher::new(rotation);
    let frames = FrameLoop::start(move |_| {
        let mut value = value.borrow_mut();
        let next = value.step();
        publisher.offer(next, value.target());
    });

    Ok(PageSubscriptions {
        _scroll: scroll,
        _frames: frames,
    })
}

/// Smoothed rotation in degrees following whole-page scroll progress.
#[hook]
pub fn use_page_rotation(config: FooterConfig) -> f64 {
    let rotation = use_state_eq(|| 0.0);

    {
        let rotation = rotation.clone();
        use_effect_with_deps(
            move |config| {
                let subscriptions = match subscribe_page_rotation(*config, rotation) {
                    Ok(subscriptions) => Some(subscriptions),
                    Err(err) => {
                        log::warn!("page rotation disabled: {}", err);
                        None
                    }
                };
                move || drop(subscriptions)
            },
            config,
        );
    }

    *rotation
}

/// Word cycle advanced on a fixed interval.
#[hook]
pub fn use_word_cycle(actions: usize, targets: usize, interval_ms: u32) -> WordCycle {
    let cycle = use_state_eq(|| WordCycle::new(actions, targets));

    {
        let cycle = cycle.clone();
        use_effect_with_deps(
            move |(actions, targets, interval_ms)| {
                let mut current = WordCycle::new(*actions, *targets);
                cycle.set(current);
                let interval = Interval::new(*interval_ms, move || {
                    let step = current.advance();
                    if step.action_changed {
                        log::debug!("word cycle moved to action {}", current.action());
                    }
                    cycle.set(current);
                });
                move || drop(interval)
            },
            (actions, targets, interval_ms),
        );
    }

    *cycle
}
