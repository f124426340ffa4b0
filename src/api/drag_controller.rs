use tracing::{debug, trace};

use crate::core::{Point, SliderLayout, TrackBounds};
use crate::interaction::{DragHandle, DragState, HitZone, classify_pointer};
use crate::render::Renderer;

use super::ZoomEngine;

impl<R: Renderer> ZoomEngine<R> {
    /// Classifies a pointer position against the slider's current geometry.
    #[must_use]
    pub fn hit_test(&self, point: Point, track: TrackBounds) -> HitZone {
        let layout = SliderLayout::compute(&self.window, track);
        classify_pointer(&layout, point)
    }

    /// Begins a drag gesture. Returns the zone that captured the pointer;
    /// `Track` and `None` capture nothing.
    pub fn pointer_down(&mut self, point: Point, track: TrackBounds) -> HitZone {
        if !self.accepts_slider_input() {
            return HitZone::None;
        }

        let zone = self.hit_test(point, track);
        let grab_percent = track.percent_at(point.x);
        let origin_start = self.window.start();
        let origin_end = self.window.end();

        match zone {
            HitZone::StartHandle => {
                self.drag =
                    DragState::handle_grab(DragHandle::Start, grab_percent, origin_start, origin_end);
            }
            HitZone::EndHandle => {
                self.drag =
                    DragState::handle_grab(DragHandle::End, grab_percent, origin_start, origin_end);
            }
            HitZone::Selection => {
                self.drag = DragState::selection_grab(grab_percent, origin_start, origin_end);
            }
            HitZone::Track | HitZone::None => {}
        }

        if self.drag.is_dragging() {
            debug!(?zone, grab_percent, origin_start, origin_end, "drag gesture began");
            self.refresh_labels();
        }
        zone
    }

    /// Applies pointer motion to the active gesture.
    ///
    /// The new bounds derive from the gesture origins plus the authoritative
    /// pointer position, never from accumulated increments.
    pub fn pointer_move(&mut self, point: Point, track: TrackBounds) {
        if !self.accepts_slider_input() {
            return;
        }

        let percent = track.percent_at(point.x);
        match self.drag {
            DragState::Idle => return,
            DragState::DraggingHandle {
                handle,
                grab_percent,
                origin_start,
                origin_end,
            } => {
                let delta = percent - grab_percent;
                self.apply_handle_drag(handle, origin_start, origin_end, delta);
            }
            DragState::DraggingSelection {
                grab_percent,
                origin_start,
                origin_end,
            } => {
                let delta = percent - grab_percent;
                self.shift_from_origin(origin_start, origin_end, delta);
            }
        }

        trace!(
            start = self.window.start(),
            end = self.window.end(),
            "drag update"
        );
        self.refresh_labels();
    }

    /// Ends the gesture, committing the last applied update.
    pub fn pointer_up(&mut self) {
        self.end_drag();
    }

    /// Ends the gesture without committing any further deltas; the window
    /// keeps the bounds from the last pointer update.
    pub fn pointer_cancel(&mut self) {
        self.end_drag();
    }

    /// Applies wheel notches to the window: positive zooms in, negative
    /// zooms out. Each notch moves the two bounds symmetrically by the
    /// scroll sensitivity, capped so zooming in never crosses them.
    ///
    /// No-op under zoom lock and for non-finite input.
    pub fn wheel_zoom(&mut self, notches: f64) {
        if !self.accepts_inside_input() || !notches.is_finite() || notches == 0.0 {
            return;
        }
        if self.window.zoom_lock() {
            return;
        }

        let step = notches * self.window.scroll_sensitivity();
        let start = self.window.start();
        let end = self.window.end();
        let mut half = step / 2.0;
        if step > 0.0 {
            half = half.min((end - start).abs() / 2.0);
        }

        if end >= start {
            self.window.set_start(start + half);
            self.window.set_end(end - half);
        } else {
            self.window.set_start(start - half);
            self.window.set_end(end + half);
        }

        trace!(
            notches,
            start = self.window.start(),
            end = self.window.end(),
            "wheel zoom"
        );
        self.refresh_labels();
    }

    fn end_drag(&mut self) {
        if !self.drag.is_dragging() {
            return;
        }
        self.drag = DragState::Idle;
        debug!(
            start = self.window.start(),
            end = self.window.end(),
            "drag gesture ended"
        );
        self.refresh_labels();
    }

    fn apply_handle_drag(
        &mut self,
        handle: DragHandle,
        origin_start: f64,
        origin_end: f64,
        delta: f64,
    ) {
        if !delta.is_finite() {
            return;
        }
        if self.window.zoom_lock() {
            // lock converts the resize into a translation of the whole window
            self.shift_from_origin(origin_start, origin_end, delta);
            return;
        }
        match handle {
            DragHandle::Start => self.window.set_start(origin_start + delta),
            DragHandle::End => self.window.set_end(origin_end + delta),
        }
    }

    /// Translates both gesture-origin bounds by one shared delta, clamped
    /// jointly so the window width survives intact.
    fn shift_from_origin(&mut self, origin_start: f64, origin_end: f64, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        let low = -origin_start.min(origin_end);
        let high = 100.0 - origin_start.max(origin_end);
        let delta = delta.clamp(low, high);
        self.window.set_start(origin_start + delta);
        self.window.set_end(origin_end + delta);
    }

    fn accepts_slider_input(&self) -> bool {
        self.window.enabled() && self.window.support_slider()
    }

    fn accepts_inside_input(&self) -> bool {
        self.window.enabled() && self.window.support_inside()
    }
}
