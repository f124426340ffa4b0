use crate::core::types::{Rect, TrackBounds};
use crate::core::window::ZoomWindow;

/// Fixed half-width of each handle's interactive band, in pixels.
pub const HANDLE_HALF_WIDTH_PX: f64 = 10.0;

/// Pixel rectangles for one slider draw/hit pass.
///
/// All rectangles are min/max-normalized at construction, so an inverted
/// window or a degenerate track still produces well-defined geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    pub track: Rect,
    pub selection: Rect,
    pub start_handle: Rect,
    pub end_handle: Rect,
}

impl SliderLayout {
    /// Maps the window's percent bounds into track pixel space.
    ///
    /// Each handle band stays centered on its own bound's pixel position, so
    /// the start handle keeps tracking the start value even when the window
    /// is inverted and that value is the right edge.
    #[must_use]
    pub fn compute(window: &ZoomWindow, track: TrackBounds) -> Self {
        let bottom = window.bottom();
        let top = bottom + window.height();
        let start_x = track.x_at(window.start());
        let end_x = track.x_at(window.end());

        Self {
            track: Rect::from_min_max(track.start_x, bottom, track.start_x + track.width, top),
            selection: Rect::from_min_max(start_x, bottom, end_x, top),
            start_handle: Rect::from_min_max(
                start_x - HANDLE_HALF_WIDTH_PX,
                bottom,
                start_x + HANDLE_HALF_WIDTH_PX,
                top,
            ),
            end_handle: Rect::from_min_max(
                end_x - HANDLE_HALF_WIDTH_PX,
                bottom,
                end_x + HANDLE_HALF_WIDTH_PX,
                top,
            ),
        }
    }
}
