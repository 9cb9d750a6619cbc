//! Tracing a single character: capture strokes, then check them against a waypoint template.

mod config;
pub use config::*;

mod error;
pub use error::*;

mod glyphs;

mod ink;
pub use ink::*;

mod input;
pub use input::*;

mod session;
pub use session::*;

mod stroke;
pub use stroke::*;

mod template;
pub use template::*;

mod validate;
pub use validate::*;

pub use crate::geom::CanvasSize;
