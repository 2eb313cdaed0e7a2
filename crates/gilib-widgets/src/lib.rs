//! # gilib Widgets
//!
//! The widget capability trait, the rectangular grid widget, a registry that
//! owns widgets and tracks their parent links by id, and `Gui`, the root
//! object tying a view, the registry and a root widget into a render pass.

pub mod widget;
pub mod grid;
pub mod registry;
pub mod gui;

pub use widget::{EventCallback, Widget};
pub use grid::RectWidget;
pub use registry::WidgetRegistry;
pub use gui::Gui;
