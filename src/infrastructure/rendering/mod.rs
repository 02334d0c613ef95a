pub mod canvas_renderer;
pub mod geometry;

pub use canvas_renderer::PieCanvasRenderer;
pub use geometry::{PieLayout, SliceGeometry, compute_slices};
