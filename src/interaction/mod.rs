use serde::{Deserialize, Serialize};

use crate::core::{Point, SliderLayout};

/// Interactive zone under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitZone {
    /// Outside the slider entirely.
    None,
    /// Inside the track background, outside the selection.
    Track,
    /// Inside the selected sub-region.
    Selection,
    /// Inside the start bound's resize band.
    StartHandle,
    /// Inside the end bound's resize band.
    EndHandle,
}

/// Which resize handle a gesture grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragHandle {
    Start,
    End,
}

/// Classifies a pointer position against computed slider geometry.
///
/// Handle bands beat the selection zone so near-edge drags resize rather
/// than pan; the selection beats the plain track. When both handle bands
/// contain the pointer (window narrower than a band), the nearer band center
/// wins and exact ties go to the start handle.
#[must_use]
pub fn classify_pointer(layout: &SliderLayout, point: Point) -> HitZone {
    let in_start = layout.start_handle.contains(point);
    let in_end = layout.end_handle.contains(point);

    if in_start && in_end {
        let start_distance = (point.x - layout.start_handle.center_x()).abs();
        let end_distance = (point.x - layout.end_handle.center_x()).abs();
        return if end_distance < start_distance {
            HitZone::EndHandle
        } else {
            HitZone::StartHandle
        };
    }
    if in_start {
        return HitZone::StartHandle;
    }
    if in_end {
        return HitZone::EndHandle;
    }
    if layout.selection.contains(point) {
        return HitZone::Selection;
    }
    if layout.track.contains(point) {
        return HitZone::Track;
    }
    HitZone::None
}

/// Drag gesture state.
///
/// A gesture records the window bounds and pointer percent at pointer-down;
/// every later update derives the new bounds from those origins plus the
/// current pointer position, so no incremental error accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingHandle {
        handle: DragHandle,
        grab_percent: f64,
        origin_start: f64,
        origin_end: f64,
    },
    DraggingSelection {
        grab_percent: f64,
        origin_start: f64,
        origin_end: f64,
    },
}

impl DragState {
    #[must_use]
    pub fn handle_grab(handle: DragHandle, grab_percent: f64, origin_start: f64, origin_end: f64) -> Self {
        Self::DraggingHandle {
            handle,
            grab_percent,
            origin_start,
            origin_end,
        }
    }

    #[must_use]
    pub fn selection_grab(grab_percent: f64, origin_start: f64, origin_end: f64) -> Self {
        Self::DraggingSelection {
            grab_percent,
            origin_start,
            origin_end,
        }
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        !matches!(self, Self::Idle)
    }
}
