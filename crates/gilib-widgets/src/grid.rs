use std::any::Any;
use std::fmt;

use uuid::Uuid;

use gilib_core::{Bounds, Event, GuiSettings, Rgba, WidgetId};
use gilib_render::{DrawSurface, Drawable};

use crate::widget::{EventCallback, Widget};

/// A rectangular region that paints a background and a border.
pub struct RectWidget {
    id: WidgetId,
    parent: Option<WidgetId>,
    bounds: Bounds,
    visible: bool,
    /// Stored only; drawing does not clip yet.
    clip: bool,
    /// Stored only.
    overlay: bool,
    back_color: Rgba,
    border_color: Rgba,
    line_width: f64,
    scroll_y: i32,
    callback: Option<EventCallback>,
}

impl RectWidget {
    /// Create a widget covering the full `width` x `height` viewport.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_settings(width, height, &GuiSettings::default())
    }

    /// Create a full-viewport widget taking its colors and border width
    /// from `settings`.
    pub fn with_settings(width: f64, height: f64, settings: &GuiSettings) -> Self {
        Self {
            id: Uuid::new_v4(),
            parent: None,
            bounds: Bounds::new(0.0, 0.0, width, height),
            visible: true,
            clip: false,
            overlay: false,
            back_color: settings.back_color,
            border_color: settings.border_color,
            line_width: settings.border_line_width,
            scroll_y: 0,
            callback: None,
        }
    }

    /// Replace the bounds. Inverted corners are kept as given.
    pub fn set_size(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.bounds = Bounds::new(x1, y1, x2, y2);
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_clip(&mut self, clip: bool) {
        self.clip = clip;
    }

    pub fn clip(&self) -> bool {
        self.clip
    }

    pub fn set_overlay(&mut self, overlay: bool) {
        self.overlay = overlay;
    }

    pub fn overlay(&self) -> bool {
        self.overlay
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set the background color from 0..1 channels.
    pub fn set_back_clr(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.back_color = Rgba::from_unit(r, g, b, a);
    }

    /// Set the border color from 0..1 channels.
    pub fn set_border_clr(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.border_color = Rgba::from_unit(r, g, b, a);
    }

    pub fn back_color(&self) -> Rgba {
        self.back_color
    }

    pub fn border_color(&self) -> Rgba {
        self.border_color
    }

    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    /// Install an observer for events this widget does not consume. The
    /// widget still reports those events as unhandled.
    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.callback = Some(Box::new(callback));
    }

    pub fn clear_callback(&mut self) {
        self.callback = None;
    }
}

impl Drawable for RectWidget {
    fn draw(&self, surface: &mut dyn DrawSurface) {
        if !self.visible {
            return;
        }
        let Bounds { x1, y1, x2, y2 } = self.bounds;

        // background
        surface.set_fill_style(&self.back_color.to_css());
        surface.fill_rect(x1, y1, x2, y2);

        // border
        surface.set_line_width(self.line_width);
        surface.set_stroke_style(&self.border_color.to_css());
        surface.stroke_rect(x1, y1, x2, y2);
    }
}

impl Widget for RectWidget {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn on_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Scroll(amount) => {
                self.scroll_y = *amount;
                true
            }
            other => {
                if let Some(callback) = self.callback.as_mut() {
                    callback(other);
                }
                false
            }
        }
    }

    fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    fn set_parent(&mut self, parent: Option<WidgetId>) {
        self.parent = parent;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl fmt::Debug for RectWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RectWidget")
            .field("id", &self.id)
            .field("parent", &self.parent)
            .field("bounds", &self.bounds)
            .field("visible", &self.visible)
            .field("clip", &self.clip)
            .field("overlay", &self.overlay)
            .field("back_color", &self.back_color)
            .field("border_color", &self.border_color)
            .field("line_width", &self.line_width)
            .field("scroll_y", &self.scroll_y)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}
