mod frame;
mod null_renderer;

pub use frame::SliderFrame;
pub use null_renderer::NullRenderer;

use crate::error::ZoomResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `SliderFrame` so
/// drawing code remains isolated from window state and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &SliderFrame) -> ZoomResult<()>;
}
