use crate::render::Renderer;

use super::ZoomEngine;

/// Display target for one drag-detail label.
///
/// The engine toggles visibility and pushes text; it never owns the
/// surface's lifecycle. An absent surface disables the feature silently.
pub trait LabelSurface {
    fn set_visible(&mut self, visible: bool);
    fn set_text(&mut self, text: &str);
}

/// Caller-supplied rendering of a window bound into label text.
pub type LabelFormatter = Box<dyn Fn(f64) -> String>;

impl<R: Renderer> ZoomEngine<R> {
    /// Attaches the surface showing the start bound during drags.
    pub fn attach_start_label(&mut self, surface: Box<dyn LabelSurface>) {
        self.start_label = Some(surface);
        self.refresh_labels();
    }

    /// Attaches the surface showing the end bound during drags.
    pub fn attach_end_label(&mut self, surface: Box<dyn LabelSurface>) {
        self.end_label = Some(surface);
        self.refresh_labels();
    }

    /// Overrides the default percent rendering of label text.
    pub fn set_label_formatter(&mut self, formatter: LabelFormatter) {
        self.label_formatter = Some(formatter);
        self.refresh_labels();
    }

    /// Pushes visibility and text to both label surfaces.
    ///
    /// Labels show during any active drag and whenever detail display is on;
    /// text is pushed only while visible.
    pub(super) fn refresh_labels(&mut self) {
        let visible = self.drag.is_dragging() || self.window.show_detail();
        let start_text = self.format_label(self.window.start());
        let end_text = self.format_label(self.window.end());

        if let Some(label) = self.start_label.as_deref_mut() {
            label.set_visible(visible);
            if visible {
                label.set_text(&start_text);
            }
        }
        if let Some(label) = self.end_label.as_deref_mut() {
            label.set_visible(visible);
            if visible {
                label.set_text(&end_text);
            }
        }
    }

    fn format_label(&self, value: f64) -> String {
        match &self.label_formatter {
            Some(formatter) => formatter(value),
            None => format!("{value:.0}%"),
        }
    }
}
