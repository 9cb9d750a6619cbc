use crate::trace::{to_canvas_space, CanvasSize, InputEvent, InputPhase, PointerSource};
use glam::Vec2;
use wasm_bindgen::JsCast;

mod result_ext;
pub use result_ext::*;

#[derive(thiserror::Error, Debug)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

fn current_element(event: &web_sys::Event) -> Option<web_sys::Element> {
	event
		.current_target()
		.and_then(|target| target.dyn_into::<web_sys::Element>().ok())
		.or_warn("event target is not an element")
}

pub trait PointerCapture {
	/// Keeps delivering this pointer's events to the target while it is outside.
	fn set_pointer_capture(&self) -> bool;
}

impl PointerCapture for leptos::ev::PointerEvent {
	fn set_pointer_capture(&self) -> bool {
		current_element(self)
			.and_then(|target| {
				target
					.set_pointer_capture(self.pointer_id())
					.map_err(JsError::from)
					.ok_or_log()
			})
			.is_some()
	}
}

pub trait CoordinateSource {
	/// Offset from the target's top-left corner and the target's size, both in CSS pixels.
	fn get_offset(&self) -> Option<(Vec2, Vec2)>;

	/// The position in the canvas backing store.
	fn get_canvas_coordinates(&self, canvas: CanvasSize) -> Option<Vec2> {
		let (offset, client_size) = self.get_offset()?;
		to_canvas_space(offset, client_size, canvas)
	}
}

impl CoordinateSource for leptos::ev::PointerEvent {
	fn get_offset(&self) -> Option<(Vec2, Vec2)> {
		let element = current_element(self)?;
		let offset = Vec2::new(self.offset_x() as f32, self.offset_y() as f32);
		let client_size = Vec2::new(element.client_width() as f32, element.client_height() as f32);
		Some((offset, client_size))
	}
}

pub trait PointerEventExt {
	fn to_input_event(&self, phase: InputPhase, canvas: CanvasSize) -> Option<InputEvent>;
}

impl PointerEventExt for leptos::ev::PointerEvent {
	fn to_input_event(&self, phase: InputPhase, canvas: CanvasSize) -> Option<InputEvent> {
		let position = self.get_canvas_coordinates(canvas)?;
		let source = PointerSource::from_pointer_type(&self.pointer_type());
		Some(InputEvent::new(self.pointer_id(), phase, position).with_source(source))
	}
}
