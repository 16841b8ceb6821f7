//! DOM wiring for the line-grid background.
//!
//! One `Background` owns one canvas. The parent element is the measured
//! container: pointer events are observed there (the canvas itself stays
//! non-interactive so it never steals input from foreground content), and
//! its bounding box drives the backing-store size.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    console, CanvasRenderingContext2d, Element, HtmlCanvasElement, PointerEvent, Window,
};

use crate::config::{CoverageSource, RedrawPolicy, RenderConfig};
use crate::driver::RedrawGate;
use crate::geometry::LineField;
use crate::highlight::highlight_alpha;
use crate::pointer::PointerTracker;
use crate::surface::BackingSize;
use crate::theme::{Palette, ThemeMode};

fn request_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(f.as_ref().unchecked_ref::<js_sys::Function>())
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Dark mode is signalled by a `dark` class on the document element.
fn theme_mode(window: &Window) -> ThemeMode {
    let dark = window
        .document()
        .and_then(|doc| doc.document_element())
        .map(|root| root.class_list().contains("dark"))
        .unwrap_or(false);
    if dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

/// Per-instance state shared between the event handlers and the drivers.
struct BackgroundState {
    canvas: HtmlCanvasElement,
    container: Element,
    config: RenderConfig,
    tracker: PointerTracker,
    gate: RedrawGate,
    backing: Cell<BackingSize>,
    context_warned: Cell<bool>,
}

impl BackgroundState {
    /// One full draw pass. Returns without drawing when a pass is already
    /// in flight, when the container has no layout yet, or when the 2D
    /// context is unavailable; all three retry naturally on the next
    /// scheduled cycle.
    fn draw(&self) -> Result<(), JsValue> {
        let Some(_pass) = self.gate.try_begin() else {
            return Ok(());
        };

        let window = web_sys::window().ok_or("no window")?;
        let raw_dpr = window.device_pixel_ratio();
        let dpr = if raw_dpr.is_finite() && raw_dpr > 0.0 {
            raw_dpr
        } else {
            1.0
        };

        let rect = self.container.get_bounding_client_rect();
        let Some(target) = BackingSize::target(rect.width(), rect.height(), dpr) else {
            // Not laid out yet.
            return Ok(());
        };
        if self.backing.get().needs_resize(target) {
            self.canvas.set_width(target.width);
            self.canvas.set_height(target.height);
            self.backing.set(target);
        }

        let Some(ctx) = context_2d(&self.canvas) else {
            if !self.context_warned.replace(true) {
                console::warn_1(&"gridlight: 2d context unavailable, skipping frame".into());
            }
            return Ok(());
        };

        // Theme tokens are read fresh every pass so a flip shows up on
        // the next frame.
        let style = window.get_computed_style(&self.container)?;
        let palette = Palette::resolve(theme_mode(&window), |name| {
            style
                .as_ref()
                .and_then(|s| s.get_property_value(name).ok())
        });

        let min_cover_w = match self.config.coverage {
            CoverageSource::Viewport => {
                window.inner_width()?.as_f64().unwrap_or(0.0) * dpr
            }
            CoverageSource::Container => 0.0,
        };

        let w = target.width_f64();
        let h = target.height_f64();
        let field = LineField::compute(w, h, min_cover_w, dpr, &self.config);
        let pointer = self.tracker.device_position(dpr);

        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        ctx.set_global_alpha(1.0);
        ctx.clear_rect(0.0, 0.0, w, h);
        ctx.set_fill_style_str(&palette.background);
        ctx.fill_rect(0.0, 0.0, w, h);

        // All strokes happen in the rotated, centered space; one matrix
        // per frame instead of per-line trigonometry.
        let (cx, cy) = field.center();
        let (sin, cos) = field.angle_sin_cos();
        ctx.set_transform(cos, sin, -sin, cos, cx, cy)?;

        let half_len = field.half_len();

        // Base pass: one path for the whole family.
        ctx.set_stroke_style_str(&palette.quiet_line);
        ctx.set_line_width(self.config.base_width * dpr);
        ctx.set_global_alpha(self.config.base_alpha);
        ctx.begin_path();
        for line in field.lines() {
            ctx.move_to(line.offset, -half_len);
            ctx.line_to(line.offset, half_len);
        }
        ctx.stroke();

        // Highlight pass: per-line alpha, so per-line strokes.
        if let Some(pointer) = pointer {
            ctx.set_stroke_style_str(&palette.strong_line);
            ctx.set_line_width((self.config.base_width + self.config.highlight_width_boost) * dpr);
            let radius = self.config.highlight_radius * dpr;
            for line in field.lines() {
                let distance = field.pointer_distance(line, pointer);
                let Some(alpha) = highlight_alpha(
                    distance,
                    radius,
                    self.config.base_alpha,
                    self.config.max_alpha,
                ) else {
                    continue;
                };
                ctx.set_global_alpha(alpha);
                ctx.begin_path();
                ctx.move_to(line.offset, -half_len);
                ctx.line_to(line.offset, half_len);
                ctx.stroke();
            }
        }

        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        Ok(())
    }

    fn draw_logged(&self) {
        if let Err(err) = self.draw() {
            console::warn_1(&err);
        }
    }
}

/// Self-rescheduling animation-frame loop for the continuous policy.
struct RafLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    // Held so the callback outlives the registration; the slot also lets
    // the closure reach itself to reschedule.
    _closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafLoop {
    fn start(state: Rc<BackgroundState>) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let inner_slot = slot.clone();
        let inner_pending = pending.clone();
        let inner_window = window.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            state.draw_logged();
            // schedule next
            if let Some(callback) = inner_slot.borrow().as_ref() {
                match request_frame(&inner_window, callback) {
                    Ok(id) => inner_pending.set(Some(id)),
                    Err(err) => console::warn_1(&err),
                }
            }
        }) as Box<dyn FnMut()>));

        let first = {
            let slot = slot.borrow();
            request_frame(&window, slot.as_ref().ok_or("frame callback missing")?)?
        };
        pending.set(Some(first));

        Ok(Self {
            window,
            pending,
            _closure: slot,
        })
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

/// A mounted background renderer. Dropping it removes every listener and
/// cancels all scheduled work, so nothing draws into a detached surface.
pub struct Background {
    state: Rc<BackgroundState>,
    on_pointer_move: Closure<dyn FnMut(PointerEvent)>,
    on_pointer_leave: Closure<dyn FnMut(PointerEvent)>,
    on_resize: Closure<dyn FnMut()>,
    raf: Option<RafLoop>,
    poll: Option<Interval>,
}

impl Background {
    /// Wire the renderer to `canvas`, using its parent element as the
    /// measured container, and start the configured redraw driver.
    pub fn attach(canvas: HtmlCanvasElement, config: RenderConfig) -> Result<Self, JsValue> {
        let container = canvas
            .parent_element()
            .ok_or("background canvas has no parent to measure")?;

        let state = Rc::new(BackgroundState {
            canvas,
            container,
            config,
            tracker: PointerTracker::new(),
            gate: RedrawGate::new(),
            backing: Cell::new(BackingSize::default()),
            context_warned: Cell::new(false),
        });

        let event_driven = matches!(config.redraw, RedrawPolicy::EventPoll { .. });

        let on_pointer_move = {
            let state = state.clone();
            Closure::wrap(Box::new(move |event: PointerEvent| {
                // Container-relative at the time of the event; the rect is
                // re-measured so layout shifts never skew the coordinate.
                let rect = state.container.get_bounding_client_rect();
                state.tracker.set(
                    f64::from(event.client_x()) - rect.left(),
                    f64::from(event.client_y()) - rect.top(),
                );
                if event_driven {
                    state.draw_logged();
                }
            }) as Box<dyn FnMut(PointerEvent)>)
        };
        state.container.add_event_listener_with_callback(
            "pointermove",
            on_pointer_move.as_ref().unchecked_ref(),
        )?;

        let on_pointer_leave = {
            let state = state.clone();
            Closure::wrap(Box::new(move |_: PointerEvent| {
                state.tracker.clear();
                if event_driven {
                    state.draw_logged();
                }
            }) as Box<dyn FnMut(PointerEvent)>)
        };
        state.container.add_event_listener_with_callback(
            "pointerleave",
            on_pointer_leave.as_ref().unchecked_ref(),
        )?;

        let window = web_sys::window().ok_or("no window")?;
        let on_resize = {
            let state = state.clone();
            Closure::wrap(Box::new(move || {
                state.draw_logged();
            }) as Box<dyn FnMut()>)
        };
        window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        let (raf, poll) = match config.redraw {
            RedrawPolicy::Continuous => (Some(RafLoop::start(state.clone())?), None),
            RedrawPolicy::EventPoll { interval_ms } => {
                // Draw once on mount; the short timer is the safety net
                // for state changes with no event of their own.
                state.draw_logged();
                let poll_state = state.clone();
                let interval = Interval::new(interval_ms, move || {
                    poll_state.draw_logged();
                });
                (None, Some(interval))
            }
        };

        Ok(Self {
            state,
            on_pointer_move,
            on_pointer_leave,
            on_resize,
            raf,
            poll,
        })
    }

    /// Force a redraw outside the configured schedule, e.g. from an
    /// explicit theme-change signal.
    pub fn invalidate(&self) {
        self.state.draw_logged();
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.state.canvas
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        self.raf.take();
        self.poll.take();
        let _ = self.state.container.remove_event_listener_with_callback(
            "pointermove",
            self.on_pointer_move.as_ref().unchecked_ref(),
        );
        let _ = self.state.container.remove_event_listener_with_callback(
            "pointerleave",
            self.on_pointer_leave.as_ref().unchecked_ref(),
        );
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
        }
    }
}
