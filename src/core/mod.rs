pub mod filter;
pub mod geometry;
pub mod types;
pub mod window;

pub use filter::{FilterDecision, classify_item};
pub use geometry::{HANDLE_HALF_WIDTH_PX, SliderLayout};
pub use types::{Point, Rect, TrackBounds};
pub use window::{FilterMode, FontStyle, RangeMode, ZoomWindow};
