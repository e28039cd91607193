use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::animation::disposer::Disposers;
use crate::animation::dom::{now_secs, set_style};
use crate::animation::geometry::{Offset, PointerSample, Rect};
use crate::animation::parallax::{LayerId, LayerSurface, ParallaxAnimator, ParallaxConfig};

/// Resolves the hero and its layers through their `NodeRef`s on every call,
/// so an element that unmounts mid-animation is simply skipped.
struct DomSurface {
    region: NodeRef,
    layers: Vec<(LayerId, NodeRef)>,
}

impl DomSurface {
    fn element(&self, layer: LayerId) -> Option<HtmlElement> {
        self.layers
            .iter()
            .find(|(id, _)| *id == layer)
            .and_then(|(_, node)| node.cast::<HtmlElement>())
    }
}

impl LayerSurface for DomSurface {
    fn region_rect(&self) -> Option<Rect> {
        self.region
            .cast::<Element>()
            .map(|el| Rect::from(&el.get_bounding_client_rect()))
    }

    fn has_layer(&self, layer: LayerId) -> bool {
        self.element(layer).is_some()
    }

    fn apply(&self, layer: LayerId, offset: Offset) -> bool {
        match self.element(layer) {
            Some(el) => {
                set_style(&el, "transform", &offset.to_css_transform());
                true
            }
            None => false,
        }
    }
}

/// At most one outstanding `requestAnimationFrame` at a time.
#[derive(Default)]
struct FrameLoop {
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl FrameLoop {
    fn request(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(window) = window() else { return };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else { return };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(err) => warn!("Failed to request parallax frame: {:?}", err),
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.callback.borrow_mut().take();
    }
}

fn attach(
    region: NodeRef,
    layers: Vec<(LayerId, NodeRef)>,
    config: ParallaxConfig,
    disposers: &mut Disposers,
) {
    let Some(region_el) = region.cast::<HtmlElement>() else {
        debug!("Parallax region not mounted, nothing to attach");
        return;
    };
    if config.layers.is_empty() || layers.is_empty() {
        debug!("No parallax layers configured, nothing to attach");
        return;
    }

    let surface = Rc::new(DomSurface { region, layers });
    let animator = Rc::new(RefCell::new(ParallaxAnimator::new(config)));
    let frames = Rc::new(FrameLoop::default());

    {
        let weak: Weak<FrameLoop> = Rc::downgrade(&frames);
        let surface = surface.clone();
        let animator = animator.clone();
        let on_frame = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(frames) = weak.upgrade() else { return };
            frames.pending.set(None);
            let in_flight = animator.borrow_mut().frame(&*surface, timestamp / 1000.0);
            if in_flight {
                frames.request();
            }
        }) as Box<dyn FnMut(f64)>);
        *frames.callback.borrow_mut() = Some(on_frame);
    }

    let on_move = {
        let surface = surface.clone();
        let animator = animator.clone();
        let frames = frames.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let pointer = PointerSample::new(event.client_x() as f64, event.client_y() as f64);
            let retargeted = animator
                .borrow_mut()
                .pointer_moved(&*surface, pointer, now_secs());
            if retargeted > 0 {
                frames.request();
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };

    if let Err(err) =
        region_el.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
    {
        warn!("Failed to attach parallax listener: {:?}", err);
        frames.cancel();
        return;
    }
    debug!(
        "Parallax attached with {} layers",
        animator.borrow().config().layers.len()
    );

    disposers.push(move || {
        animator.borrow_mut().detach();
        frames.cancel();
        debug!("Parallax detached");
    });
    disposers.push(move || {
        let _ = region_el
            .remove_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    });
}

/// Drives the hero depth effect: `layers` follow the pointer over `region`,
/// each scaled by its coefficient in `ParallaxConfig`. The listener lives
/// exactly as long as the component that calls the hook.
#[hook]
pub fn use_parallax(region: NodeRef, layers: Vec<(LayerId, NodeRef)>) {
    use_effect_with_deps(
        move |_| {
            let mut disposers = Disposers::new();
            attach(region, layers, ParallaxConfig::default(), &mut disposers);
            move || disposers.dispose()
        },
        (),
    );
}
