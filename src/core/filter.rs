use crate::core::window::FilterMode;

/// Outcome of classifying one data item against the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// Item stays untouched.
    Keep,
    /// Item is removed from the working set.
    Drop,
    /// Item stays but its out-of-window values are replaced with a
    /// "no value" marker.
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WindowSide {
    Below,
    Inside,
    Above,
}

fn side_of(value: f64, window_min: f64, window_max: f64) -> WindowSide {
    if value < window_min {
        WindowSide::Below
    } else if value > window_max {
        WindowSide::Above
    } else {
        WindowSide::Inside
    }
}

/// Classifies one data item against the window.
///
/// `dimension_percents` holds the item's position on each bound dimension,
/// expressed as a percentage of that axis extent — the same unit as the
/// window bounds. The window interval is normalized internally, so inverted
/// windows classify identically to their normalized form.
///
/// This is the whole of the engine's filtering contract; scanning the dataset
/// and applying the decision is the caller's job.
#[must_use]
pub fn classify_item(
    dimension_percents: &[f64],
    window_start: f64,
    window_end: f64,
    mode: FilterMode,
) -> FilterDecision {
    if mode == FilterMode::None || dimension_percents.is_empty() {
        return FilterDecision::Keep;
    }

    let window_min = window_start.min(window_end);
    let window_max = window_start.max(window_end);

    let mut any_outside = false;
    let mut all_below = true;
    let mut all_above = true;
    for &value in dimension_percents {
        match side_of(value, window_min, window_max) {
            WindowSide::Below => {
                any_outside = true;
                all_above = false;
            }
            WindowSide::Inside => {
                all_below = false;
                all_above = false;
            }
            WindowSide::Above => {
                any_outside = true;
                all_below = false;
            }
        }
    }

    match mode {
        FilterMode::Filter => {
            if any_outside {
                FilterDecision::Drop
            } else {
                FilterDecision::Keep
            }
        }
        FilterMode::WeakFilter => {
            if all_below || all_above {
                FilterDecision::Drop
            } else {
                FilterDecision::Keep
            }
        }
        FilterMode::Empty => {
            if any_outside {
                FilterDecision::Blank
            } else {
                FilterDecision::Keep
            }
        }
        FilterMode::None => FilterDecision::Keep,
    }
}
