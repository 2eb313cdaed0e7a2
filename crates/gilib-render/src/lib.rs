//! # gilib Renderer
//!
//! The view/camera transform that maps world space onto device pixels, and
//! the drawing-surface abstraction it renders through.
//!
//! `RecordingSurface` captures the issued calls as JSON-serializable draw
//! commands, which a host can replay onto a real canvas.

pub mod surface;
pub mod view;

pub use surface::{DrawCommand, DrawSurface, Drawable, RecordingSurface};
pub use view::ViewTransform;
