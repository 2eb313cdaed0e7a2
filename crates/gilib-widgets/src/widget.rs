use std::any::Any;

use gilib_core::{Event, WidgetId};
use gilib_render::Drawable;

/// Caller-supplied observer for events a widget does not consume itself.
pub type EventCallback = Box<dyn FnMut(&Event)>;

/// A drawable GUI element that can react to input.
pub trait Widget: Drawable + std::fmt::Debug {
    fn id(&self) -> WidgetId;

    /// Handle an event. Returns `true` when the event was consumed.
    fn on_event(&mut self, event: &Event) -> bool;

    /// Parent in the widget hierarchy, if any. The link is an id only.
    fn parent(&self) -> Option<WidgetId>;
    fn set_parent(&mut self, parent: Option<WidgetId>);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
