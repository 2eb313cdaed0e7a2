use serde::{Deserialize, Serialize};

use gilib_core::{Affine, Bounds, GuiError, Point};

use crate::surface::{DrawSurface, Drawable};

/// Maps world coordinates onto the device viewport.
///
/// The view is requested as a world rectangle plus a zoom factor. The visible
/// rectangle keeps the requested center; its extents are the requested ones
/// divided by the zoom, so zoom > 1 magnifies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Viewport width in pixels.
    width: f64,
    /// Viewport height in pixels.
    height: f64,
    /// Rectangle passed to the last successful `set_view`.
    requested: Bounds,
    center: Point,
    zoom: f64,
    /// World rectangle seen through the viewport.
    visible: Bounds,
    transform: Affine,
}

impl ViewTransform {
    /// Create a view for a `width` x `height` pixel viewport, showing the
    /// world rectangle `(0, 0)-(width, height)` at zoom 1.
    pub fn new(width: f64, height: f64) -> Result<Self, GuiError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GuiError::InvalidViewport { width, height });
        }
        let full = Bounds::new(0.0, 0.0, width, height);
        let mut view = Self {
            width,
            height,
            requested: full,
            center: full.center(),
            zoom: 1.0,
            visible: full,
            transform: Affine::identity(),
        };
        view.apply(full, 1.0)?;
        Ok(view)
    }

    /// Request a new view of the world rectangle `(x1, y1)-(x2, y2)`.
    ///
    /// Fails with [`GuiError::InvalidZoom`] when `zoom` is not a positive
    /// finite number, and with [`GuiError::NonFiniteView`] when the resulting
    /// view leaves the finite range; the previous view is kept in both cases.
    pub fn set_view(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, zoom: f64) -> Result<(), GuiError> {
        check_zoom(zoom)?;
        self.apply(Bounds::new(x1, y1, x2, y2), zoom)
    }

    /// Pan by a delta in device pixels. The world moves with the pointer.
    pub fn pan(&mut self, dx: f64, dy: f64) -> Result<(), GuiError> {
        let requested = self.requested;
        let (wx, wy) = (dx / self.zoom, dy / self.zoom);
        self.apply(
            Bounds::new(
                requested.x1 - wx,
                requested.y1 - wy,
                requested.x2 - wx,
                requested.y2 - wy,
            ),
            self.zoom,
        )
    }

    /// Multiply the zoom about the current center.
    pub fn zoom_by(&mut self, factor: f64) -> Result<(), GuiError> {
        check_zoom(factor)?;
        let zoom = self.zoom * factor;
        check_zoom(zoom)?;
        self.apply(self.requested, zoom)
    }

    /// Recompute the view from `requested`. Nothing is written unless every
    /// derived value is finite.
    fn apply(&mut self, requested: Bounds, zoom: f64) -> Result<(), GuiError> {
        let center = requested.center();
        let half_w = requested.width() / (2.0 * zoom);
        let half_h = requested.height() / (2.0 * zoom);
        let visible = Bounds::from_center(center, half_w, half_h);
        let transform = Affine::scale_translate(zoom, -visible.x1 * zoom, -visible.y1 * zoom);

        let finite = [
            requested.x1,
            requested.y1,
            requested.x2,
            requested.y2,
            visible.x1,
            visible.y1,
            visible.x2,
            visible.y2,
            transform.e,
            transform.f,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            log::warn!(
                "Rejected view ({}, {})-({}, {}) at zoom {}",
                requested.x1,
                requested.y1,
                requested.x2,
                requested.y2,
                zoom
            );
            return Err(GuiError::NonFiniteView {
                x1: requested.x1,
                y1: requested.y1,
                x2: requested.x2,
                y2: requested.y2,
                zoom,
            });
        }

        self.requested = requested;
        self.center = center;
        self.zoom = zoom;
        self.visible = visible;
        self.transform = transform;

        log::debug!(
            "View set: center ({}, {}), zoom {}, visible ({}, {})-({}, {})",
            center.x,
            center.y,
            zoom,
            visible.x1,
            visible.y1,
            visible.x2,
            visible.y2
        );
        Ok(())
    }

    /// Convert a device pixel position to world coordinates.
    pub fn device_to_world(&self, px: f64, py: f64) -> Point {
        let v = &self.visible;
        Point::new(
            v.x1 + px * v.width() / self.width,
            v.y1 + py * v.height() / self.height,
        )
    }

    /// Convert a world position to device pixels.
    pub fn world_to_device(&self, wx: f64, wy: f64) -> Point {
        self.transform.apply(&Point::new(wx, wy))
    }

    /// Clear the whole surface, install the view transform and draw `root`
    /// in world space.
    pub fn render<D: Drawable + ?Sized>(&self, surface: &mut dyn DrawSurface, root: &D) {
        let (width, height) = (surface.width(), surface.height());
        log::trace!("Render pass: {}x{} at zoom {}", width, height, self.zoom);

        // Clear in device space.
        surface.set_transform(Affine::identity());
        surface.clear_rect(0.0, 0.0, width, height);

        surface.set_transform(self.transform);
        root.draw(surface);
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn requested(&self) -> Bounds {
        self.requested
    }

    pub fn visible(&self) -> Bounds {
        self.visible
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }
}

fn check_zoom(zoom: f64) -> Result<(), GuiError> {
    if zoom.is_finite() && zoom > 0.0 {
        Ok(())
    } else {
        log::warn!("Rejected zoom factor {}", zoom);
        Err(GuiError::InvalidZoom(zoom))
    }
}
