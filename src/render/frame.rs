use crate::core::{Rect, SliderLayout};
use crate::error::{ZoomError, ZoomResult};

/// Backend-agnostic scene for one slider draw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderFrame {
    pub track: Rect,
    pub selection: Rect,
    pub start_handle: Rect,
    pub end_handle: Rect,
    pub start_percent: f64,
    pub end_percent: f64,
    pub is_dragging: bool,
    pub show_data_shadow: bool,
}

impl SliderFrame {
    #[must_use]
    pub fn new(
        layout: SliderLayout,
        start_percent: f64,
        end_percent: f64,
        is_dragging: bool,
        show_data_shadow: bool,
    ) -> Self {
        Self {
            track: layout.track,
            selection: layout.selection,
            start_handle: layout.start_handle,
            end_handle: layout.end_handle,
            start_percent,
            end_percent,
            is_dragging,
            show_data_shadow,
        }
    }

    /// Rejects non-finite geometry before it reaches a backend.
    ///
    /// Degenerate (zero-area) rectangles are valid; they draw nothing.
    pub fn validate(&self) -> ZoomResult<()> {
        for (name, rect) in [
            ("track", self.track),
            ("selection", self.selection),
            ("start_handle", self.start_handle),
            ("end_handle", self.end_handle),
        ] {
            if !rect.is_finite() {
                return Err(ZoomError::InvalidGeometry(format!(
                    "`{name}` rectangle must have finite coordinates"
                )));
            }
        }
        if !self.start_percent.is_finite() || !self.end_percent.is_finite() {
            return Err(ZoomError::InvalidGeometry(
                "window percents must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
