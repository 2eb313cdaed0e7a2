use thiserror::Error;

use crate::WidgetId;

#[derive(Error, Debug)]
pub enum GuiError {
    #[error("Invalid zoom factor {0}: zoom must be finite and greater than zero")]
    InvalidZoom(f64),

    #[error("View ({x1}, {y1})-({x2}, {y2}) at zoom {zoom} leaves the finite range")]
    NonFiniteView { x1: f64, y1: f64, x2: f64, y2: f64, zoom: f64 },

    #[error("Invalid viewport {width}x{height}: dimensions must be finite and positive")]
    InvalidViewport { width: f64, height: f64 },

    #[error("Widget {0} is not registered")]
    UnknownWidget(WidgetId),

    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),
}
