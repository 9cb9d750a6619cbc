use glam::Vec2;

use super::Template;
use crate::geom::CanvasSize;

/// Receives drawing commands from a [`TraceSession`](super::TraceSession). Live input only
/// ever adds to what is already on screen; `clear` is followed by a full replay.
pub trait Ink {
	fn clear(&mut self);

	/// Faint overlay showing what to trace. `template` is `None` for characters without one.
	fn guide(&mut self, character: &str, template: Option<&Template>, canvas: CanvasSize);

	fn start_dot(&mut self, at: Vec2);

	fn segment(&mut self, from: Vec2, to: Vec2);

	fn completed(&mut self);
}

/// Headless sessions draw nothing.
impl Ink for () {
	fn clear(&mut self) {}
	fn guide(&mut self, _: &str, _: Option<&Template>, _: CanvasSize) {}
	fn start_dot(&mut self, _: Vec2) {}
	fn segment(&mut self, _: Vec2, _: Vec2) {}
	fn completed(&mut self) {}
}

/// Draws only when a surface is available, e.g. before a canvas is mounted.
impl<I: Ink> Ink for Option<I> {
	fn clear(&mut self) {
		if let Some(ink) = self {
			ink.clear();
		}
	}

	fn guide(&mut self, character: &str, template: Option<&Template>, canvas: CanvasSize) {
		if let Some(ink) = self {
			ink.guide(character, template, canvas);
		}
	}

	fn start_dot(&mut self, at: Vec2) {
		if let Some(ink) = self {
			ink.start_dot(at);
		}
	}

	fn segment(&mut self, from: Vec2, to: Vec2) {
		if let Some(ink) = self {
			ink.segment(from, to);
		}
	}

	fn completed(&mut self) {
		if let Some(ink) = self {
			ink.completed();
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum InkCommand {
	Clear,
	Guide { character: String, waypoints: usize },
	StartDot(Vec2),
	Segment(Vec2, Vec2),
	Completed,
}

/// Records commands instead of drawing them.
impl Ink for Vec<InkCommand> {
	fn clear(&mut self) {
		self.push(InkCommand::Clear);
	}

	fn guide(&mut self, character: &str, template: Option<&Template>, _: CanvasSize) {
		self.push(InkCommand::Guide {
			character: character.to_owned(),
			waypoints: template.map_or(0, Template::len),
		});
	}

	fn start_dot(&mut self, at: Vec2) {
		self.push(InkCommand::StartDot(at));
	}

	fn segment(&mut self, from: Vec2, to: Vec2) {
		self.push(InkCommand::Segment(from, to));
	}

	fn completed(&mut self) {
		self.push(InkCommand::Completed);
	}
}
