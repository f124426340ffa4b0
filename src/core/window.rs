use serde::{Deserialize, Serialize};

/// Policy governing how data outside the window affects the dataset and the
/// ranges of sibling axes. Applied by the host's data layer, selected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    /// An item is dropped when any bound dimension falls outside the window.
    /// Dropping items can shrink the effective range of other axes.
    Filter,
    /// An item is dropped only when every bound dimension falls outside the
    /// window on the same side; otherwise it is retained.
    WeakFilter,
    /// Out-of-window values are blanked instead of removed, so sibling-axis
    /// ranges are unaffected.
    Empty,
    /// No filtering; only the visual window changes.
    None,
}

/// Unit of `start`/`end`. Only percentages are supported; an absolute-value
/// mode is reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeMode {
    Percent,
}

/// Presentation style hint for the drag-detail labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

/// Vertical margin subtracted when auto-deriving the track height from the
/// container bottom edge.
pub const AUTO_HEIGHT_MARGIN_PX: f64 = 30.0;

/// Floor applied to the auto-derived track height.
pub const MIN_TRACK_HEIGHT_PX: f64 = 10.0;

const MIN_SCROLL_SENSITIVITY: f64 = 1.0;
const MAX_SCROLL_SENSITIVITY: f64 = 20.0;

/// Clamps a window bound into the percent range.
///
/// Out-of-range values snap to the nearest bound; non-finite values pass
/// through unchanged.
#[must_use]
fn clamp_percent(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else if value > 100.0 {
        100.0
    } else {
        value
    }
}

/// State of one zoom window, bound to one x/y axis pairing of the host chart.
///
/// Pure value semantics: setters clamp, nothing fails. `start <= end` is NOT
/// enforced; geometry and hit testing stay defined for inverted windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomWindow {
    enabled: bool,
    filter_mode: FilterMode,
    range_mode: RangeMode,
    x_axis_index: usize,
    y_axis_index: usize,
    support_inside: bool,
    support_slider: bool,
    show_data_shadow: bool,
    show_detail: bool,
    zoom_lock: bool,
    start: f64,
    end: f64,
    bottom: f64,
    height: f64,
    scroll_sensitivity: f64,
    font_size: u32,
    font_style: FontStyle,
}

impl ZoomWindow {
    /// Documented default window: `30..70` percent, `filter_mode = None`,
    /// `bottom = 10`, auto height, scroll sensitivity 10.
    ///
    /// Input handling stays off until the host opts in, mirroring a freshly
    /// declared component.
    #[must_use]
    pub fn slider_default() -> Self {
        Self {
            enabled: false,
            filter_mode: FilterMode::None,
            range_mode: RangeMode::Percent,
            x_axis_index: 0,
            y_axis_index: 0,
            support_inside: false,
            support_slider: false,
            show_data_shadow: true,
            show_detail: false,
            zoom_lock: false,
            start: 30.0,
            end: 70.0,
            bottom: 10.0,
            height: 0.0,
            scroll_sensitivity: 10.0,
            font_size: 18,
            font_style: FontStyle::Normal,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    #[must_use]
    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
    }

    #[must_use]
    pub fn range_mode(&self) -> RangeMode {
        self.range_mode
    }

    #[must_use]
    pub fn x_axis_index(&self) -> usize {
        self.x_axis_index
    }

    pub fn set_x_axis_index(&mut self, index: usize) {
        self.x_axis_index = index;
    }

    #[must_use]
    pub fn y_axis_index(&self) -> usize {
        self.y_axis_index
    }

    pub fn set_y_axis_index(&mut self, index: usize) {
        self.y_axis_index = index;
    }

    #[must_use]
    pub fn support_inside(&self) -> bool {
        self.support_inside
    }

    pub fn set_support_inside(&mut self, support: bool) {
        self.support_inside = support;
    }

    #[must_use]
    pub fn support_slider(&self) -> bool {
        self.support_slider
    }

    pub fn set_support_slider(&mut self, support: bool) {
        self.support_slider = support;
    }

    #[must_use]
    pub fn show_data_shadow(&self) -> bool {
        self.show_data_shadow
    }

    pub fn set_show_data_shadow(&mut self, show: bool) {
        self.show_data_shadow = show;
    }

    #[must_use]
    pub fn show_detail(&self) -> bool {
        self.show_detail
    }

    pub fn set_show_detail(&mut self, show: bool) {
        self.show_detail = show;
    }

    #[must_use]
    pub fn zoom_lock(&self) -> bool {
        self.zoom_lock
    }

    pub fn set_zoom_lock(&mut self, lock: bool) {
        self.zoom_lock = lock;
    }

    /// Start bound of the window, percent of the data extent.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Sets the start bound, clamped to `[0, 100]`.
    pub fn set_start(&mut self, value: f64) {
        self.start = clamp_percent(value);
    }

    /// End bound of the window, percent of the data extent.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Sets the end bound, clamped to `[0, 100]`.
    pub fn set_end(&mut self, value: f64) {
        self.end = clamp_percent(value);
    }

    /// Shifts both bounds by `delta`, clamped jointly so the window width is
    /// preserved and neither bound leaves `[0, 100]`.
    ///
    /// Non-finite deltas are ignored.
    pub fn pan_by(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        let low = -self.start.min(self.end);
        let high = 100.0 - self.start.max(self.end);
        let delta = delta.clamp(low, high);
        self.start += delta;
        self.end += delta;
    }

    /// Distance between the window bounds from the container's bottom side.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn set_bottom(&mut self, bottom: f64) {
        self.bottom = bottom;
    }

    /// Track height in pixels. `<= 0` means "auto", resolved lazily by
    /// [`ZoomWindow::resolve_height`].
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Resolves the track height, deriving and caching it from the container
    /// bottom edge when unset.
    ///
    /// Idempotent: once resolved (or explicitly set), later calls return the
    /// cached value regardless of the edge argument.
    pub fn resolve_height(&mut self, container_bottom_edge: f64) -> f64 {
        if self.height > 0.0 {
            return self.height;
        }
        let derived = container_bottom_edge - self.bottom - AUTO_HEIGHT_MARGIN_PX;
        self.height = if derived < MIN_TRACK_HEIGHT_PX {
            MIN_TRACK_HEIGHT_PX
        } else {
            derived
        };
        self.height
    }

    /// Percent of window change per wheel notch, clamped to `[1, 20]`.
    #[must_use]
    pub fn scroll_sensitivity(&self) -> f64 {
        self.scroll_sensitivity
    }

    pub fn set_scroll_sensitivity(&mut self, sensitivity: f64) {
        self.scroll_sensitivity = if sensitivity < MIN_SCROLL_SENSITIVITY {
            MIN_SCROLL_SENSITIVITY
        } else if sensitivity > MAX_SCROLL_SENSITIVITY {
            MAX_SCROLL_SENSITIVITY
        } else {
            sensitivity
        };
    }

    #[must_use]
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size;
    }

    #[must_use]
    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    pub fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
    }

    /// Whether drags update the view in realtime. Always true; a deferred
    /// update mode was never implemented.
    #[must_use]
    pub fn realtime(&self) -> bool {
        true
    }
}

impl Default for ZoomWindow {
    fn default() -> Self {
        Self::slider_default()
    }
}
