use gilib_core::{Event, GuiError, GuiSettings, Point, WidgetId};
use gilib_render::{DrawSurface, Drawable, ViewTransform};

use crate::grid::RectWidget;
use crate::registry::WidgetRegistry;
use crate::widget::Widget;

/// The GUI root: a view over the world, the widgets living in it and the
/// widget drawn first in every render pass.
#[derive(Debug)]
pub struct Gui {
    view: ViewTransform,
    widgets: WidgetRegistry,
    root: Option<WidgetId>,
    settings: GuiSettings,
    /// Set whenever something visible changed since the last render.
    dirty: bool,
}

/// Stand-in root when none has been set; renders as a cleared surface.
struct EmptyScene;

impl Drawable for EmptyScene {
    fn draw(&self, _surface: &mut dyn DrawSurface) {}
}

impl Gui {
    pub fn new(width: f64, height: f64, settings: GuiSettings) -> Result<Self, GuiError> {
        let mut view = ViewTransform::new(width, height)?;
        view.set_view(0.0, 0.0, width, height, settings.initial_zoom)?;
        Ok(Self {
            view,
            widgets: WidgetRegistry::new(),
            root: None,
            settings,
            dirty: true,
        })
    }

    /// A full-viewport grid styled by the current settings. Not registered.
    pub fn new_grid(&self) -> RectWidget {
        RectWidget::with_settings(self.view.width(), self.view.height(), &self.settings)
    }

    pub fn add_widget(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        self.dirty = true;
        self.widgets.add(widget)
    }

    pub fn set_root(&mut self, id: WidgetId) -> Result<(), GuiError> {
        if !self.widgets.contains(&id) {
            return Err(GuiError::UnknownWidget(id));
        }
        log::debug!("Root widget set to {}", id);
        self.root = Some(id);
        self.dirty = true;
        Ok(())
    }

    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    // ── View ─────────────────────────────────────────────────────────

    pub fn set_view(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, zoom: f64) -> Result<(), GuiError> {
        self.view.set_view(x1, y1, x2, y2, zoom)?;
        self.dirty = true;
        Ok(())
    }

    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<(), GuiError> {
        self.view.pan(dx, dy)?;
        self.dirty = true;
        Ok(())
    }

    pub fn zoom_by(&mut self, factor: f64) -> Result<(), GuiError> {
        self.view.zoom_by(factor)?;
        self.dirty = true;
        Ok(())
    }

    pub fn device_to_world(&self, px: f64, py: f64) -> Point {
        self.view.device_to_world(px, py)
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    // ── Events & rendering ───────────────────────────────────────────

    /// Deliver an event to the root widget. Returns whether it was handled.
    pub fn dispatch(&mut self, event: &Event) -> bool {
        let Some(root) = self.root else {
            return false;
        };
        let handled = self
            .widgets
            .get_mut(&root)
            .map_or(false, |w| w.on_event(event));
        if handled {
            self.dirty = true;
        }
        handled
    }

    pub fn render(&mut self, surface: &mut dyn DrawSurface) -> Result<(), GuiError> {
        match self.root {
            Some(id) => {
                let root = self.widgets.get(&id).ok_or(GuiError::UnknownWidget(id))?;
                self.view.render(surface, root);
            }
            None => self.view.render(surface, &EmptyScene),
        }
        self.dirty = false;
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn widgets(&self) -> &WidgetRegistry {
        &self.widgets
    }

    /// Mutable access to the widgets. Marks the GUI dirty.
    pub fn widgets_mut(&mut self) -> &mut WidgetRegistry {
        self.dirty = true;
        &mut self.widgets
    }

    pub fn settings(&self) -> &GuiSettings {
        &self.settings
    }
}
