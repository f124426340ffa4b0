mod drag_controller;
mod json_contract;
mod labels;

pub use json_contract::{ENGINE_CONFIG_JSON_SCHEMA_V1, ZoomEngineConfigJsonContractV1};
pub use labels::{LabelFormatter, LabelSurface};

use serde::{Deserialize, Serialize};

use crate::core::{FilterMode, FontStyle, RangeMode, SliderLayout, TrackBounds, ZoomWindow};
use crate::error::{ZoomError, ZoomResult};
use crate::interaction::DragState;
use crate::render::{Renderer, SliderFrame};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load the
/// slider setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomEngineConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_filter_mode")]
    pub filter_mode: FilterMode,
    #[serde(default = "default_range_mode")]
    pub range_mode: RangeMode,
    #[serde(default)]
    pub x_axis_index: usize,
    #[serde(default)]
    pub y_axis_index: usize,
    #[serde(default = "default_true")]
    pub support_inside: bool,
    #[serde(default = "default_true")]
    pub support_slider: bool,
    #[serde(default = "default_true")]
    pub show_data_shadow: bool,
    #[serde(default)]
    pub show_detail: bool,
    #[serde(default)]
    pub zoom_lock: bool,
    pub start_percent: f64,
    pub end_percent: f64,
    #[serde(default = "default_bottom_px")]
    pub bottom_px: f64,
    #[serde(default)]
    pub height_px: f64,
    #[serde(default = "default_scroll_sensitivity")]
    pub scroll_sensitivity: f64,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    #[serde(default)]
    pub font_style: FontStyle,
}

fn default_true() -> bool {
    true
}

fn default_filter_mode() -> FilterMode {
    FilterMode::None
}

fn default_range_mode() -> RangeMode {
    RangeMode::Percent
}

fn default_bottom_px() -> f64 {
    10.0
}

fn default_scroll_sensitivity() -> f64 {
    10.0
}

fn default_font_size() -> u32 {
    18
}

impl ZoomEngineConfig {
    /// Creates a config with the documented default window (`30..70`) and
    /// all input paths enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            filter_mode: default_filter_mode(),
            range_mode: default_range_mode(),
            x_axis_index: 0,
            y_axis_index: 0,
            support_inside: true,
            support_slider: true,
            show_data_shadow: true,
            show_detail: false,
            zoom_lock: false,
            start_percent: 30.0,
            end_percent: 70.0,
            bottom_px: default_bottom_px(),
            height_px: 0.0,
            scroll_sensitivity: default_scroll_sensitivity(),
            font_size: default_font_size(),
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the initial window bounds (percent).
    #[must_use]
    pub fn with_window(mut self, start_percent: f64, end_percent: f64) -> Self {
        self.start_percent = start_percent;
        self.end_percent = end_percent;
        self
    }

    /// Sets the filter policy handed to the host data layer.
    #[must_use]
    pub fn with_filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = mode;
        self
    }

    /// Sets the controlled axis indices.
    #[must_use]
    pub fn with_axis_indices(mut self, x_axis_index: usize, y_axis_index: usize) -> Self {
        self.x_axis_index = x_axis_index;
        self.y_axis_index = y_axis_index;
        self
    }

    /// Sets the track's bottom offset and explicit height (`0` = auto).
    #[must_use]
    pub fn with_track_metrics(mut self, bottom_px: f64, height_px: f64) -> Self {
        self.bottom_px = bottom_px;
        self.height_px = height_px;
        self
    }

    /// Locks the window width so gestures translate instead of resizing.
    #[must_use]
    pub fn with_zoom_lock(mut self, lock: bool) -> Self {
        self.zoom_lock = lock;
        self
    }

    /// Keeps the detail labels visible outside active drags.
    #[must_use]
    pub fn with_show_detail(mut self, show: bool) -> Self {
        self.show_detail = show;
        self
    }

    /// Sets the wheel-zoom sensitivity (percent per notch, clamped `[1, 20]`).
    #[must_use]
    pub fn with_scroll_sensitivity(mut self, sensitivity: f64) -> Self {
        self.scroll_sensitivity = sensitivity;
        self
    }

    fn validate(self) -> ZoomResult<Self> {
        for (name, value) in [
            ("start_percent", self.start_percent),
            ("end_percent", self.end_percent),
            ("bottom_px", self.bottom_px),
            ("height_px", self.height_px),
            ("scroll_sensitivity", self.scroll_sensitivity),
        ] {
            if !value.is_finite() {
                return Err(ZoomError::InvalidData(format!(
                    "config field `{name}` must be finite"
                )));
            }
        }
        Ok(self)
    }
}

impl Default for ZoomEngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Zoom-window slider engine: owns the window state, the drag gesture state,
/// the optional label surfaces, and the rendering backend.
pub struct ZoomEngine<R: Renderer> {
    renderer: R,
    window: ZoomWindow,
    drag: DragState,
    start_label: Option<Box<dyn LabelSurface>>,
    end_label: Option<Box<dyn LabelSurface>>,
    label_formatter: Option<LabelFormatter>,
}

impl<R: Renderer> ZoomEngine<R> {
    pub fn new(renderer: R, config: ZoomEngineConfig) -> ZoomResult<Self> {
        let config = config.validate()?;

        let mut window = ZoomWindow::slider_default();
        window.set_enabled(config.enabled);
        window.set_filter_mode(config.filter_mode);
        window.set_x_axis_index(config.x_axis_index);
        window.set_y_axis_index(config.y_axis_index);
        window.set_support_inside(config.support_inside);
        window.set_support_slider(config.support_slider);
        window.set_show_data_shadow(config.show_data_shadow);
        window.set_show_detail(config.show_detail);
        window.set_zoom_lock(config.zoom_lock);
        window.set_start(config.start_percent);
        window.set_end(config.end_percent);
        window.set_bottom(config.bottom_px);
        window.set_height(config.height_px);
        window.set_scroll_sensitivity(config.scroll_sensitivity);
        window.set_font_size(config.font_size);
        window.set_font_style(config.font_style);

        Ok(Self {
            renderer,
            window,
            drag: DragState::Idle,
            start_label: None,
            end_label: None,
            label_formatter: None,
        })
    }

    #[must_use]
    pub fn window(&self) -> &ZoomWindow {
        &self.window
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.window.start()
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.window.end()
    }

    /// Sets both window bounds (clamped individually to `[0, 100]`).
    pub fn set_window(&mut self, start_percent: f64, end_percent: f64) {
        self.window.set_start(start_percent);
        self.window.set_end(end_percent);
        self.refresh_labels();
    }

    #[must_use]
    pub fn filter_mode(&self) -> FilterMode {
        self.window.filter_mode()
    }

    pub fn set_filter_mode(&mut self, mode: FilterMode) {
        self.window.set_filter_mode(mode);
    }

    #[must_use]
    pub fn zoom_lock(&self) -> bool {
        self.window.zoom_lock()
    }

    pub fn set_zoom_lock(&mut self, lock: bool) {
        self.window.set_zoom_lock(lock);
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.window.enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.window.set_enabled(enabled);
    }

    #[must_use]
    pub fn show_detail(&self) -> bool {
        self.window.show_detail()
    }

    pub fn set_show_detail(&mut self, show: bool) {
        self.window.set_show_detail(show);
        self.refresh_labels();
    }

    #[must_use]
    pub fn scroll_sensitivity(&self) -> f64 {
        self.window.scroll_sensitivity()
    }

    pub fn set_scroll_sensitivity(&mut self, sensitivity: f64) {
        self.window.set_scroll_sensitivity(sensitivity);
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Resolves (and caches) the track height from the container bottom edge.
    pub fn resolve_height(&mut self, container_bottom_edge: f64) -> f64 {
        self.window.resolve_height(container_bottom_edge)
    }

    /// Computes slider geometry for the supplied track, resolving the track
    /// height first when it is still unset.
    pub fn layout(&mut self, track: TrackBounds, container_bottom_edge: f64) -> SliderLayout {
        self.window.resolve_height(container_bottom_edge);
        SliderLayout::compute(&self.window, track)
    }

    /// Builds the current frame and hands it to the rendering backend.
    pub fn render(&mut self, track: TrackBounds, container_bottom_edge: f64) -> ZoomResult<()> {
        let layout = self.layout(track, container_bottom_edge);
        let frame = SliderFrame::new(
            layout,
            self.window.start(),
            self.window.end(),
            self.drag.is_dragging(),
            self.window.show_data_shadow(),
        );
        self.renderer.render(&frame)
    }

    /// Copies the current state back into a persistable configuration value.
    #[must_use]
    pub fn snapshot_config(&self) -> ZoomEngineConfig {
        ZoomEngineConfig {
            enabled: self.window.enabled(),
            filter_mode: self.window.filter_mode(),
            range_mode: self.window.range_mode(),
            x_axis_index: self.window.x_axis_index(),
            y_axis_index: self.window.y_axis_index(),
            support_inside: self.window.support_inside(),
            support_slider: self.window.support_slider(),
            show_data_shadow: self.window.show_data_shadow(),
            show_detail: self.window.show_detail(),
            zoom_lock: self.window.zoom_lock(),
            start_percent: self.window.start(),
            end_percent: self.window.end(),
            bottom_px: self.window.bottom(),
            height_px: self.window.height(),
            scroll_sensitivity: self.window.scroll_sensitivity(),
            font_size: self.window.font_size(),
            font_style: self.window.font_style(),
        }
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
