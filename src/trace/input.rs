use derive_more::Display;
use glam::Vec2;

use crate::geom::CanvasSize;

#[derive(Debug, Display, Default, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
	#[default]
	#[display("mouse")]
	Mouse,
	#[display("touch")]
	Touch,
	#[display("pen")]
	Pen,
}

impl PointerSource {
	/// Parses the DOM `pointerType` string. Unknown types are treated as a mouse.
	pub fn from_pointer_type(pointer_type: &str) -> Self {
		match pointer_type {
			"touch" => PointerSource::Touch,
			"pen" => PointerSource::Pen,
			_ => PointerSource::Mouse,
		}
	}
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
	#[display("press")]
	Press,
	#[display("move")]
	Move,
	#[display("release")]
	Release,
	#[display("cancel")]
	Cancel,
	#[display("leave")]
	Leave,
}

impl InputPhase {
	/// Release, cancel and leave all end the current stroke.
	pub fn ends_stroke(self) -> bool {
		matches!(self, InputPhase::Release | InputPhase::Cancel | InputPhase::Leave)
	}
}

/// A device-independent pointer event with its position already in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
	pub pointer_id: i32,
	pub source: PointerSource,
	pub phase: InputPhase,
	pub position: Vec2,
}

impl InputEvent {
	pub fn new(pointer_id: i32, phase: InputPhase, position: Vec2) -> Self {
		Self {
			pointer_id,
			source: PointerSource::default(),
			phase,
			position,
		}
	}

	pub fn press(pointer_id: i32, position: Vec2) -> Self {
		Self::new(pointer_id, InputPhase::Press, position)
	}

	pub fn moved(pointer_id: i32, position: Vec2) -> Self {
		Self::new(pointer_id, InputPhase::Move, position)
	}

	pub fn release(pointer_id: i32, position: Vec2) -> Self {
		Self::new(pointer_id, InputPhase::Release, position)
	}

	pub fn with_source(self, source: PointerSource) -> Self {
		Self { source, ..self }
	}
}

/// Scales an element-relative offset into the canvas backing store, which may differ from
/// the element's on-screen size. Returns `None` while the element has no layout.
pub fn to_canvas_space(offset: Vec2, client_size: Vec2, canvas: CanvasSize) -> Option<Vec2> {
	if client_size.x <= 0.0 || client_size.y <= 0.0 {
		return None;
	}
	Some(offset / client_size * canvas.as_vec2())
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::vec2;

	#[test]
	fn pointer_types() {
		assert_eq!(PointerSource::from_pointer_type("touch"), PointerSource::Touch);
		assert_eq!(PointerSource::from_pointer_type("pen"), PointerSource::Pen);
		assert_eq!(PointerSource::from_pointer_type("mouse"), PointerSource::Mouse);
		assert_eq!(PointerSource::from_pointer_type(""), PointerSource::Mouse);
		assert_eq!(PointerSource::Touch.to_string(), "touch");
	}

	#[test]
	fn ending_phases() {
		assert!(InputPhase::Release.ends_stroke());
		assert!(InputPhase::Cancel.ends_stroke());
		assert!(InputPhase::Leave.ends_stroke());
		assert!(!InputPhase::Press.ends_stroke());
		assert!(!InputPhase::Move.ends_stroke());
	}

	#[test]
	fn scales_css_pixels_to_backing_pixels() {
		let canvas = CanvasSize::square(400.0).unwrap();
		assert_eq!(
			to_canvas_space(vec2(50.0, 100.0), vec2(200.0, 200.0), canvas),
			Some(vec2(100.0, 200.0))
		);
		assert_eq!(to_canvas_space(vec2(1.0, 1.0), vec2(0.0, 200.0), canvas), None);
	}
}
