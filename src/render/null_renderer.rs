use crate::error::ZoomResult;
use crate::render::{Renderer, SliderFrame};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_frame: Option<SliderFrame>,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SliderFrame) -> ZoomResult<()> {
        frame.validate()?;
        self.last_frame = Some(*frame);
        self.render_count += 1;
        Ok(())
    }
}
