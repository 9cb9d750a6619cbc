use crate::trace::*;
use crate::util::*;
use glam::Vec2;
use leptos::*;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;

const INK_COLOR: &str = "#1d2b53";
const GUIDE_COLOR: &str = "#5b6b8c";
const START_COLOR: &str = "#2e9e5b";
const DONE_COLOR: &str = "#2e9e5b";

/// Paints a [`TraceSession`] onto a 2D canvas context.
struct CanvasInk {
	context: web_sys::CanvasRenderingContext2d,
	canvas: CanvasSize,
}

impl CanvasInk {
	fn from_node(node: NodeRef<html::Canvas>, canvas: CanvasSize) -> Option<Self> {
		let element = node.get_untracked()?;
		let context = element
			.get_context("2d")
			.map_err(JsError::from)
			.ok_or_log()
			.flatten()
			.and_then(|context| context.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
			.or_warn("canvas has no 2d context")?;
		Some(Self { context, canvas })
	}

	fn line_width(&self) -> f64 {
		(self.canvas.width().min(self.canvas.height()) / 40.0).max(2.0) as f64
	}

	fn dot(&self, at: Vec2, radius: f64) {
		self.context.begin_path();
		self.context
			.arc(at.x as f64, at.y as f64, radius, 0.0, TAU)
			.map_err(JsError::from)
			.ok_or_log();
		self.context.fill();
	}
}

impl Ink for CanvasInk {
	fn clear(&mut self) {
		let size = self.canvas.as_vec2();
		self.context.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
	}

	fn guide(&mut self, character: &str, template: Option<&Template>, canvas: CanvasSize) {
		let size = canvas.as_vec2();
		let context = &self.context;
		context.save();
		context.set_global_alpha(0.15);
		context.set_fill_style_str(GUIDE_COLOR);
		context.set_font(&format!("{}px sans-serif", (size.y * 0.8).round()));
		context.set_text_align("center");
		context.set_text_baseline("middle");
		context
			.fill_text(character, (size.x / 2.0) as f64, (size.y / 2.0) as f64)
			.map_err(JsError::from)
			.ok_or_log();

		if let Some(template) = template {
			context.set_global_alpha(0.35);
			for waypoint in template.waypoints() {
				self.dot(canvas.denormalize(*waypoint), self.line_width() * 0.5);
			}
		}
		context.restore();
	}

	fn start_dot(&mut self, at: Vec2) {
		self.context.set_fill_style_str(START_COLOR);
		self.dot(at, self.line_width() * 0.75);
	}

	fn segment(&mut self, from: Vec2, to: Vec2) {
		let context = &self.context;
		context.set_stroke_style_str(INK_COLOR);
		context.set_line_width(self.line_width());
		context.set_line_cap("round");
		context.set_line_join("round");
		context.begin_path();
		context.move_to(from.x as f64, from.y as f64);
		context.line_to(to.x as f64, to.y as f64);
		context.stroke();
	}

	fn completed(&mut self) {
		let size = self.canvas.as_vec2();
		let context = &self.context;
		context.save();
		context.set_stroke_style_str(DONE_COLOR);
		context.set_line_width(self.line_width() * 1.5);
		context.set_line_cap("round");
		context.set_line_join("round");
		context.begin_path();
		let check = [(0.62, 0.82), (0.72, 0.92), (0.92, 0.68)];
		for (i, (x, y)) in check.into_iter().enumerate() {
			let (x, y) = ((size.x * x) as f64, (size.y * y) as f64);
			if i == 0 {
				context.move_to(x, y);
			} else {
				context.line_to(x, y);
			}
		}
		context.stroke();
		context.restore();
	}
}

/// A square canvas for tracing `target` with a finger, pen or mouse.
#[component]
pub fn TracePad(
	#[prop(into)] target: MaybeSignal<String>,
	/// Backing store size in pixels. CSS may display it at any size.
	#[prop(default = 320)]
	size: u32,
	#[prop(optional, into)] on_complete: Option<Callback<()>>,
	/// Called whenever a stroke is judged or the pad is cleared.
	#[prop(optional, into)]
	on_update: Option<Callback<TraceSnapshot>>,
	/// Clears the pad each time it is notified.
	#[prop(optional)]
	clear: Option<Trigger>,
) -> impl IntoView {
	let canvas = match CanvasSize::square(size as f32) {
		Ok(canvas) => canvas,
		Err(err) => {
			tracing::error!(%err);
			return view! { <div class="TracePad error">{err.to_string()}</div> }.into_view();
		}
	};

	let canvas_ref = create_node_ref::<html::Canvas>();
	let session = store_value(TraceSession::new(target.get_untracked(), canvas));

	let publish = move || {
		if let Some(on_update) = on_update {
			on_update.call(session.with_value(TraceSession::snapshot));
		}
	};

	canvas_ref.on_load(move |_| {
		let mut ink = CanvasInk::from_node(canvas_ref, canvas);
		session.with_value(|session| session.redraw(&mut ink));
	});

	create_effect(move |_| {
		let target = target.get();
		let mut ink = CanvasInk::from_node(canvas_ref, canvas);
		if session
			.try_update_value(|session| session.retarget(target, &mut ink))
			.unwrap_or(false)
		{
			publish();
		}
	});

	if let Some(clear) = clear {
		create_effect(move |previous: Option<()>| {
			clear.track();
			if previous.is_some() {
				let mut ink = CanvasInk::from_node(canvas_ref, canvas);
				session.update_value(|session| session.clear(&mut ink));
				publish();
			}
		});
	}

	let on_pointer = move |e: &ev::PointerEvent, phase: InputPhase| {
		let Some(event) = e.to_input_event(phase, canvas) else {
			return;
		};
		let mut ink = CanvasInk::from_node(canvas_ref, canvas);
		let Some(response) = session.try_update_value(|session| session.handle(event, &mut ink)) else {
			return;
		};
		match response {
			Response::Completed(_) => {
				publish();
				if let Some(on_complete) = on_complete {
					on_complete.call(());
				}
			}
			Response::Rejected(_) => publish(),
			_ => {}
		}
	};

	let touchstart = move |e: ev::TouchEvent| {
		e.prevent_default();
	};

	let pointerdown = move |e: ev::PointerEvent| {
		e.set_pointer_capture();
		e.prevent_default();
		on_pointer(&e, InputPhase::Press);
	};

	// Hovering pens and mice are ignored by the session.
	let pointermove = move |e: ev::PointerEvent| on_pointer(&e, InputPhase::Move);
	let pointerup = move |e: ev::PointerEvent| on_pointer(&e, InputPhase::Release);
	let pointercancel = move |e: ev::PointerEvent| on_pointer(&e, InputPhase::Cancel);
	let pointerleave = move |e: ev::PointerEvent| on_pointer(&e, InputPhase::Leave);

	view! {
		<canvas
			class="TracePad"
			node_ref=canvas_ref
			width=size
			height=size
			style="touch-action: none"
			on:touchstart=touchstart
			on:pointerdown=pointerdown
			on:pointermove=pointermove
			on:pointerup=pointerup
			on:pointercancel=pointercancel
			on:pointerleave=pointerleave
		></canvas>
	}
	.into_view()
}
