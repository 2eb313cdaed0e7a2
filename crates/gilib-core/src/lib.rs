//! # gilib Core
//!
//! Shared vocabulary of the gilib canvas GUI: world-space geometry and the
//! 2D affine transform, RGBA colors and their canvas style strings, the closed
//! set of input events, the error type, and the library settings.

pub mod geometry;
pub mod color;
pub mod event;
pub mod error;
pub mod settings;

use uuid::Uuid;

/// Unique widget identifier.
pub type WidgetId = Uuid;

pub use geometry::{Affine, Bounds, Point};
pub use color::Rgba;
pub use event::Event;
pub use error::GuiError;
pub use settings::GuiSettings;
