use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MouseEvent, Window};
use yew::prelude::*;

use crate::host::{self, HostError, FINE_POINTER_QUERY, REDUCED_MOTION_QUERY};
use crate::trail::{Capabilities, FrameScheduler, TrailAnimator, TrailFrame, TrailPoint, Transition};

type SharedAnimator = Rc<RefCell<TrailAnimator<RafScheduler>>>;

/// `requestAnimationFrame` with one reusable callback.
struct RafScheduler {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(handle) => Some(handle),
            Err(err) => {
                warn!("requestAnimationFrame failed: {}", host::js_detail(&err));
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            warn!("cancelAnimationFrame failed: {}", host::js_detail(&err));
        }
    }
}

fn new_animator(window: Window, on_frame: Callback<TrailFrame>) -> SharedAnimator {
    Rc::new_cyclic(|weak: &Weak<RefCell<TrailAnimator<RafScheduler>>>| {
        let weak = weak.clone();
        let callback = Closure::wrap(Box::new(move || {
            if let Some(animator) = weak.upgrade() {
                let frame = {
                    let mut animator = animator.borrow_mut();
                    animator.frame_tick().then(|| animator.snapshot())
                };
                if let Some(frame) = frame {
                    on_frame.emit(frame);
                }
            }
        }) as Box<dyn FnMut()>);
        RefCell::new(TrailAnimator::new(RafScheduler { window, callback }))
    })
}

/// Owns the `mousemove` listener and attaches it only while the animator is enabled.
struct TrailHost {
    window: Window,
    animator: SharedAnimator,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    listening: Cell<bool>,
    on_frame: Callback<TrailFrame>,
}

impl TrailHost {
    fn new(window: Window, on_frame: Callback<TrailFrame>) -> Self {
        let animator = new_animator(window.clone(), on_frame.clone());
        let on_move = {
            let weak = Rc::downgrade(&animator);
            Closure::wrap(Box::new(move |e: MouseEvent| {
                if let Some(animator) = weak.upgrade() {
                    let point = TrailPoint::new(e.client_x() as f64, e.client_y() as f64);
                    animator.borrow_mut().pointer_moved(point);
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        Self {
            window,
            animator,
            on_move,
            listening: Cell::new(false),
            on_frame,
        }
    }

    fn update<F>(&self, update: F)
    where
        F: FnOnce(&mut TrailAnimator<RafScheduler>, &Window) -> Transition,
    {
        let transition = {
            let mut animator = self.animator.borrow_mut();
            update(&mut *animator, &self.window)
        };
        self.apply(transition);
    }

    fn apply(&self, transition: Transition) {
        match transition {
            Transition::Enabled => {
                if let Err(err) = self.listen() {
                    warn!("pointer trail disabled: {}", err);
                    self.animator.borrow_mut().disable();
                } else {
                    debug!("pointer trail enabled");
                }
            }
            Transition::Disabled => {
                self.unlisten();
                debug!("pointer trail disabled");
            }
            Transition::Unchanged => return,
        }
        let frame = self.animator.borrow().snapshot();
        self.on_frame.emit(frame);
    }

    fn listen(&self) -> Result<(), HostError> {
        if self.listening.get() {
            return Ok(());
        }
        self.window
            .add_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref())
            .map_err(|err| HostError::Listener {
                event: "mousemove",
                detail: host::js_detail(&err),
            })?;
        self.listening.set(true);
        Ok(())
    }

    fn unlisten(&self) {
        if !self.listening.replace(false) {
            return;
        }
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref())
        {
            warn!("could not remove mousemove listener: {}", host::js_detail(&err));
        }
    }

    /// Listener first, then the pending frame, so nothing lands after this returns.
    fn shutdown(&self) {
        self.unlisten();
        self.animator.borrow_mut().disable();
    }
}

/// A `change` subscription on a media query, removed on drop.
struct MediaWatch {
    list: MediaQueryList,
    on_change: Closure<dyn FnMut()>,
}

impl MediaWatch {
    fn subscribe<F>(list: MediaQueryList, mut handler: F) -> Result<Self, HostError>
    where
        F: FnMut(bool) + 'static,
    {
        let probe = list.clone();
        let on_change = Closure::wrap(Box::new(move || handler(probe.matches())) as Box<dyn FnMut()>);
        list.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .map_err(|err| HostError::Listener {
                event: "change",
                detail: host::js_detail(&err),
            })?;
        Ok(Self { list, on_change })
    }
}

impl Drop for MediaWatch {
    fn drop(&mut self) {
        if let Err(err) = self
            .list
            .remove_event_listener_with_callback("change", self.on_change.as_ref().unchecked_ref())
        {
            warn!("could not remove change listener: {}", host::js_detail(&err));
        }
    }
}

/// Everything the trail component keeps alive between mount and unmount.
struct TrailSession {
    host: Rc<TrailHost>,
    watches: Vec<MediaWatch>,
}

impl TrailSession {
    fn start(on_frame: Callback<TrailFrame>) -> Result<Self, HostError> {
        let window = host::window()?;
        let reduce_motion = host::match_media(&window, REDUCED_MOTION_QUERY)?;
        let fine_pointer = host::match_media(&window, FINE_POINTER_QUERY)?;
        let initial = Capabilities {
            reduced_motion: reduce_motion.matches(),
            precise_pointer: fine_pointer.matches(),
        };

        let trail_host = Rc::new(TrailHost::new(window, on_frame));
        let watches = vec![
            MediaWatch::subscribe(reduce_motion, {
                let trail_host = trail_host.clone();
                move |matches| {
                    trail_host.update(|animator, window| {
                        animator.set_reduced_motion(matches, || host::viewport(window))
                    })
                }
            })?,
            MediaWatch::subscribe(fine_pointer, {
                let trail_host = trail_host.clone();
                move |matches| {
                    trail_host.update(|animator, window| {
                        animator.set_precise_pointer(matches, || host::viewport(window))
                    })
                }
            })?,
        ];

        trail_host.update(|animator, window| {
            animator.set_capabilities(initial, || host::viewport(window))
        });
        Ok(Self {
            host: trail_host,
            watches,
        })
    }
}

impl Drop for TrailSession {
    fn drop(&mut self) {
        self.watches.clear();
        self.host.shutdown();
    }
}

/// Decorative paper-plane that follows the mouse, leaving a dotted trail.
/// Stays hidden for touch devices and when reduced motion is requested.
#[function_component(PointerTrail)]
pub fn pointer_trail() -> Html {
    let frame = use_state(TrailFrame::default);

    {
        let frame = frame.clone();
        use_effect_with_deps(
            move |_| {
                let on_frame = Callback::from(move |next: TrailFrame| frame.set(next));
                let session = match TrailSession::start(on_frame) {
                    Ok(session) => Some(session),
                    Err(err) => {
                        warn!("pointer trail unavailable: {}", err);
                        None
                    }
                };
                move || drop(session)
            },
            (),
        );
    }

    let plane = match frame.points.last() {
        Some(point) => html! {
            <div
                class="pointer-trail-plane"
                style={format!(
                    "transform: translate({}px, {}px) translate(-50%, -50%) rotate({}deg);",
                    point.x, point.y, frame.heading
                )}
            >
                {"✈"}
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="pointer-trail" aria-hidden="true">
            <style>
                {r#"
                    .pointer-trail {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        z-index: 25;
                    }
                    .pointer-trail svg {
                        width: 100%;
                        height: 100%;
                    }
                    .pointer-trail path {
                        fill: none;
                        stroke: rgba(56, 189, 248, 0.55);
                        stroke-width: 2;
                        stroke-dasharray: 2 6;
                        stroke-linecap: round;
                        stroke-linejoin: round;
                    }
                    .pointer-trail-plane {
                        position: absolute;
                        top: 0;
                        left: 0;
                        font-size: 20px;
                        color: rgba(14, 165, 233, 0.85);
                        will-change: transform;
                    }
                "#}
            </style>
            {
                if frame.path.is_empty() {
                    html! {}
                } else {
                    html! {
                        <svg>
                            <path d={frame.path.clone()} />
                        </svg>
                    }
                }
            }
            { plane }
        </div>
    }
}
