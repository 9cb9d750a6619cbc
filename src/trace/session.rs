use derive_more::Display;
use glam::Vec2;
use itertools::Itertools;

use super::*;
use crate::geom::CanvasSize;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
	#[display("idle")]
	Idle,
	#[display("drawing")]
	Drawing,
	/// Terminal until the session is reset or retargeted.
	#[display("complete")]
	Complete,
}

/// What a single input did to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Response {
	Ignored,
	Started,
	Recorded,
	/// Too close to the previous point to record.
	Skipped,
	Rejected(Verdict),
	/// Returned exactly once per session, on the stroke that got accepted.
	Completed(Verdict),
}

/// Everything a view needs to show about a session.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSnapshot {
	pub target: String,
	pub state: SessionState,
	pub point_count: usize,
	pub stroke_count: usize,
	pub attempts: u32,
	pub last_verdict: Option<Verdict>,
}

impl TraceSnapshot {
	pub fn is_complete(&self) -> bool {
		self.state == SessionState::Complete
	}
}

/// Live capture state for tracing one character.
#[derive(Debug, Clone)]
pub struct TraceSession<'a> {
	validator: Validator<'a>,
	target: String,
	canvas: CanvasSize,
	strokes: StrokeSet,
	state: SessionState,
	attempts: u32,
	last_verdict: Option<Verdict>,
	active_pointer: Option<i32>,
}

impl TraceSession<'static> {
	pub fn new(target: impl Into<String>, canvas: CanvasSize) -> Self {
		Self::with_validator(Validator::default(), target, canvas)
	}
}

impl<'a> TraceSession<'a> {
	pub fn with_validator(validator: Validator<'a>, target: impl Into<String>, canvas: CanvasSize) -> Self {
		Self {
			validator,
			target: target.into(),
			canvas,
			strokes: StrokeSet::new(),
			state: SessionState::Idle,
			attempts: 0,
			last_verdict: None,
			active_pointer: None,
		}
	}

	pub fn target(&self) -> &str {
		&self.target
	}

	pub fn canvas(&self) -> CanvasSize {
		self.canvas
	}

	pub fn state(&self) -> SessionState {
		self.state
	}

	pub fn is_complete(&self) -> bool {
		self.state == SessionState::Complete
	}

	/// Rejected strokes with enough points to be a real try.
	pub fn attempts(&self) -> u32 {
		self.attempts
	}

	pub fn last_verdict(&self) -> Option<Verdict> {
		self.last_verdict
	}

	pub fn strokes(&self) -> &StrokeSet {
		&self.strokes
	}

	pub fn point_count(&self) -> usize {
		self.strokes.point_count()
	}

	/// Captured points with a [`TracePoint::Break`] at every pen lift.
	pub fn flat_points(&self) -> Vec<TracePoint> {
		self.strokes.flatten()
	}

	pub fn template(&self) -> Option<&'a Template> {
		self.validator.library().lookup(&self.target)
	}

	pub fn snapshot(&self) -> TraceSnapshot {
		TraceSnapshot {
			target: self.target.clone(),
			state: self.state,
			point_count: self.point_count(),
			stroke_count: self.strokes.stroke_count(),
			attempts: self.attempts,
			last_verdict: self.last_verdict,
		}
	}

	pub fn press(&mut self, at: Vec2, ink: &mut impl Ink) -> Response {
		if self.state != SessionState::Idle {
			return Response::Ignored;
		}
		self.strokes.begin(at);
		self.state = SessionState::Drawing;
		ink.start_dot(at);
		Response::Started
	}

	pub fn move_to(&mut self, at: Vec2, ink: &mut impl Ink) -> Result<Response, TraceError> {
		match self.state {
			SessionState::Idle => Err(TraceError::NotPressed),
			SessionState::Complete => Ok(Response::Ignored),
			SessionState::Drawing => {
				let Some(last) = self.strokes.last_point() else {
					return Err(TraceError::NotPressed);
				};
				if last.distance(at) <= self.validator.config().min_movement {
					return Ok(Response::Skipped);
				}
				self.strokes.extend(at);
				ink.segment(last, at);
				Ok(Response::Recorded)
			}
		}
	}

	#[tracing::instrument(level = "debug", skip_all, fields(character = %self.target, points = self.point_count()))]
	pub fn release(&mut self, ink: &mut impl Ink) -> Result<Response, TraceError> {
		match self.state {
			SessionState::Idle => Err(TraceError::NotPressed),
			SessionState::Complete => Ok(Response::Ignored),
			SessionState::Drawing => {
				let verdict = self
					.validator
					.validate_strokes(&self.strokes, &self.target, self.canvas);
				self.last_verdict = Some(verdict);
				if verdict.is_accepted() {
					tracing::info!(%verdict, "trace complete");
					self.state = SessionState::Complete;
					ink.completed();
					return Ok(Response::Completed(verdict));
				}
				if self.point_count() > self.validator.config().attempt_floor {
					self.attempts += 1;
				}
				tracing::debug!(%verdict, attempts = self.attempts, "trace not yet accepted");
				self.state = SessionState::Idle;
				Ok(Response::Rejected(verdict))
			}
		}
	}

	/// Routes a device event, following only the pointer that started the current stroke.
	pub fn handle(&mut self, event: InputEvent, ink: &mut impl Ink) -> Response {
		let InputEvent {
			pointer_id,
			phase,
			position,
			..
		} = event;

		if phase == InputPhase::Press {
			match self.active_pointer {
				Some(active) if active != pointer_id => {
					tracing::debug!(active, pointer_id, "ignoring press from a second pointer");
					return Response::Ignored;
				}
				// The release was lost; end the old stroke rather than bridge the lift.
				Some(_) => {
					tracing::debug!(pointer_id, "press without release");
					self.active_pointer = None;
					if let Ok(response @ Response::Completed(_)) = self.release(ink) {
						return response;
					}
				}
				None => {}
			}
			let response = self.press(position, ink);
			if response == Response::Started {
				tracing::trace!(pointer_id, source = %event.source, "stroke started");
				self.active_pointer = Some(pointer_id);
			}
			return response;
		}

		if self.active_pointer != Some(pointer_id) {
			return Response::Ignored;
		}

		let result = if phase.ends_stroke() {
			self.active_pointer = None;
			self.release(ink)
		} else {
			self.move_to(position, ink)
		};
		result.unwrap_or_else(|err| {
			tracing::warn!(%err, %phase, "dropping pointer event");
			Response::Ignored
		})
	}

	/// Discards all input and the completion state.
	pub fn reset(&mut self) {
		self.strokes.clear();
		self.state = SessionState::Idle;
		self.attempts = 0;
		self.last_verdict = None;
		self.active_pointer = None;
	}

	/// Resets and leaves only the guide on screen.
	pub fn clear(&mut self, ink: &mut impl Ink) {
		self.reset();
		self.redraw(ink);
	}

	/// Switches to a new character. Returns `false`, leaving everything intact, if the
	/// target is unchanged.
	pub fn retarget(&mut self, target: impl Into<String>, ink: &mut impl Ink) -> bool {
		let target = target.into();
		if target == self.target {
			return false;
		}
		tracing::debug!(from = %self.target, to = %target, "retarget");
		self.target = target;
		self.clear(ink);
		true
	}

	/// Paints everything from scratch: guide, every stroke in order, then the completion mark.
	pub fn redraw(&self, ink: &mut impl Ink) {
		ink.clear();
		ink.guide(&self.target, self.template(), self.canvas);
		for stroke in self.strokes.strokes() {
			if let Some(first) = stroke.first() {
				ink.start_dot(first);
			}
			for (from, to) in stroke.points().iter().copied().tuple_windows() {
				ink.segment(from, to);
			}
		}
		if self.is_complete() {
			ink.completed();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use glam::vec2;

	fn canvas() -> CanvasSize {
		CanvasSize::square(200.0).unwrap()
	}

	/// Presses at the first point, moves through the rest and releases.
	fn stroke(session: &mut TraceSession, points: &[Vec2], ink: &mut impl Ink) -> Response {
		session.press(points[0], ink);
		for p in &points[1..] {
			session.move_to(*p, ink).unwrap();
		}
		session.release(ink).unwrap()
	}

	fn vertical(x: f32, y0: f32, y1: f32, step: f32) -> Vec<Vec2> {
		let mut points = Vec::new();
		let mut y = y0;
		while y <= y1 {
			points.push(vec2(x, y));
			y += step;
		}
		points
	}

	#[test]
	fn starts_idle() {
		let session = TraceSession::new("I", canvas());
		assert_eq!(session.state(), SessionState::Idle);
		assert_eq!(session.point_count(), 0);
		assert_eq!(session.attempts(), 0);
		assert!(!session.is_complete());
		assert_eq!(session.last_verdict(), None);
	}

	#[test]
	fn move_and_release_require_a_press() {
		let mut session = TraceSession::new("I", canvas());
		assert_eq!(session.move_to(vec2(1.0, 1.0), &mut ()), Err(TraceError::NotPressed));
		assert_eq!(session.release(&mut ()), Err(TraceError::NotPressed));
		assert_eq!(session.point_count(), 0);
	}

	#[test]
	fn small_movements_are_skipped() {
		let mut ink = Vec::new();
		let mut session = TraceSession::new("I", canvas());
		assert_eq!(session.press(vec2(10.0, 10.0), &mut ink), Response::Started);
		assert_eq!(session.move_to(vec2(11.0, 11.0), &mut ink), Ok(Response::Skipped));
		assert_eq!(session.move_to(vec2(12.0, 10.0), &mut ink), Ok(Response::Skipped));
		assert_eq!(session.move_to(vec2(13.0, 10.0), &mut ink), Ok(Response::Recorded));
		assert_eq!(session.point_count(), 2);
		assert_eq!(
			ink,
			vec![
				InkCommand::StartDot(vec2(10.0, 10.0)),
				InkCommand::Segment(vec2(10.0, 10.0), vec2(13.0, 10.0)),
			]
		);
	}

	#[test]
	fn accepted_stroke_completes_once() {
		let mut ink = Vec::new();
		let mut session = TraceSession::new("I", canvas());
		let response = stroke(&mut session, &vertical(100.0, 30.0, 170.0, 5.0), &mut ink);
		assert!(matches!(response, Response::Completed(v) if v.is_accepted()));
		assert!(session.is_complete());
		assert_eq!(ink.iter().filter(|c| **c == InkCommand::Completed).count(), 1);

		// Further input is ignored and never completes again.
		let points = session.point_count();
		assert_eq!(session.press(vec2(5.0, 5.0), &mut ink), Response::Ignored);
		assert_eq!(session.move_to(vec2(50.0, 50.0), &mut ink), Ok(Response::Ignored));
		assert_eq!(session.release(&mut ink), Ok(Response::Ignored));
		assert_eq!(session.point_count(), points);
		assert_eq!(ink.iter().filter(|c| **c == InkCommand::Completed).count(), 1);
	}

	#[test]
	fn rejected_stroke_counts_as_attempt() {
		let mut session = TraceSession::new("I", canvas());
		let response = stroke(&mut session, &vertical(100.0, 30.0, 100.0, 5.0), &mut ());
		assert!(matches!(response, Response::Rejected(_)));
		assert_eq!(session.attempts(), 1);
		assert_eq!(session.state(), SessionState::Idle);
		assert_eq!(session.point_count(), 15);
	}

	#[test]
	fn tiny_stroke_is_not_an_attempt() {
		let mut session = TraceSession::new("I", canvas());
		let response = stroke(&mut session, &vertical(100.0, 30.0, 60.0, 5.0), &mut ());
		assert!(matches!(response, Response::Rejected(_)));
		assert_eq!(session.point_count(), 7);
		assert_eq!(session.attempts(), 0);
	}

	#[test]
	fn attempts_start_above_ten_points() {
		let mut session = TraceSession::new("I", canvas());
		let response = stroke(&mut session, &vertical(100.0, 30.0, 57.0, 3.0), &mut ());
		assert!(matches!(response, Response::Rejected(_)));
		assert_eq!(session.point_count(), 10);
		assert_eq!(session.attempts(), 0);

		let mut session = TraceSession::new("I", canvas());
		let response = stroke(&mut session, &vertical(100.0, 30.0, 60.0, 3.0), &mut ());
		assert!(matches!(response, Response::Rejected(_)));
		assert_eq!(session.point_count(), 11);
		assert_eq!(session.attempts(), 1);
	}

	#[test]
	fn second_stroke_continues_the_character() {
		let mut session = TraceSession::new("I", canvas());
		let first = stroke(&mut session, &vertical(100.0, 30.0, 95.0, 5.0), &mut ());
		assert!(matches!(first, Response::Rejected(_)));
		let second = stroke(&mut session, &vertical(100.0, 110.0, 170.0, 5.0), &mut ());
		assert!(matches!(second, Response::Completed(_)));
		assert_eq!(session.strokes().stroke_count(), 2);

		let flat = session.flat_points();
		assert_eq!(flat.iter().filter(|p| **p == TracePoint::Break).count(), 1);
		assert_eq!(flat.len(), session.point_count() + 1);
	}

	#[test]
	fn redraw_does_not_bridge_pen_lifts() {
		let mut session = TraceSession::new("?", canvas());
		stroke(&mut session, &[vec2(10.0, 10.0), vec2(20.0, 10.0)], &mut ());
		stroke(&mut session, &[vec2(50.0, 50.0), vec2(60.0, 50.0)], &mut ());

		let mut ink = Vec::new();
		session.redraw(&mut ink);
		assert_eq!(
			ink,
			vec![
				InkCommand::Clear,
				InkCommand::Guide {
					character: "?".to_owned(),
					waypoints: 0
				},
				InkCommand::StartDot(vec2(10.0, 10.0)),
				InkCommand::Segment(vec2(10.0, 10.0), vec2(20.0, 10.0)),
				InkCommand::StartDot(vec2(50.0, 50.0)),
				InkCommand::Segment(vec2(50.0, 50.0), vec2(60.0, 50.0)),
			]
		);
	}

	#[test]
	fn redraw_matches_live_drawing() {
		let mut live = Vec::new();
		let mut session = TraceSession::new("I", canvas());
		stroke(&mut session, &vertical(100.0, 30.0, 90.0, 1.5), &mut live);
		stroke(&mut session, &vertical(100.0, 110.0, 170.0, 3.0), &mut live);

		let mut replay = Vec::new();
		session.redraw(&mut replay);
		assert_eq!(&replay[2..], &live[..]);
	}

	#[test]
	fn clear_is_idempotent() {
		let mut session = TraceSession::new("I", canvas());
		stroke(&mut session, &vertical(100.0, 30.0, 170.0, 5.0), &mut ());
		assert!(session.is_complete());

		let mut ink = Vec::new();
		session.clear(&mut ink);
		session.clear(&mut ink);
		assert_eq!(session.snapshot(), TraceSession::new("I", canvas()).snapshot());
		assert_eq!(
			ink,
			vec![
				InkCommand::Clear,
				InkCommand::Guide {
					character: "I".to_owned(),
					waypoints: 3
				},
				InkCommand::Clear,
				InkCommand::Guide {
					character: "I".to_owned(),
					waypoints: 3
				},
			]
		);
	}

	#[test]
	fn clear_mid_stroke() {
		let mut session = TraceSession::new("I", canvas());
		session.press(vec2(100.0, 30.0), &mut ());
		session.move_to(vec2(100.0, 60.0), &mut ()).unwrap();
		session.clear(&mut ());
		assert_eq!(session.state(), SessionState::Idle);
		assert_eq!(session.release(&mut ()), Err(TraceError::NotPressed));
	}

	#[test]
	fn retarget_resets_only_on_change() {
		let mut session = TraceSession::new("I", canvas());
		stroke(&mut session, &vertical(100.0, 30.0, 100.0, 5.0), &mut ());
		assert!(!session.retarget("I", &mut ()));
		assert_eq!(session.attempts(), 1);
		assert!(session.retarget("L", &mut ()));
		assert_eq!(session.target(), "L");
		assert_eq!(session.attempts(), 0);
		assert_eq!(session.point_count(), 0);
		assert_eq!(session.template().map(Template::len), Some(3));
	}

	#[test]
	fn second_pointer_cannot_corrupt_stroke() {
		let mut session = TraceSession::new("I", canvas());
		assert_eq!(session.handle(InputEvent::press(1, vec2(100.0, 30.0)), &mut ()), Response::Started);
		assert_eq!(session.handle(InputEvent::press(2, vec2(10.0, 10.0)), &mut ()), Response::Ignored);
		assert_eq!(session.handle(InputEvent::moved(2, vec2(20.0, 20.0)), &mut ()), Response::Ignored);
		assert_eq!(session.handle(InputEvent::release(2, vec2(20.0, 20.0)), &mut ()), Response::Ignored);
		assert_eq!(session.state(), SessionState::Drawing);
		assert_eq!(session.handle(InputEvent::moved(1, vec2(100.0, 40.0)), &mut ()), Response::Recorded);
		assert_eq!(session.point_count(), 2);
		assert!(session.real_points_are(&[vec2(100.0, 30.0), vec2(100.0, 40.0)]));
	}

	#[test]
	fn repeated_press_ends_the_previous_stroke() {
		let mut ink = Vec::new();
		let mut session = TraceSession::new("I", canvas());
		session.handle(InputEvent::press(1, vec2(100.0, 30.0)), &mut ink);
		session.handle(InputEvent::moved(1, vec2(100.0, 40.0)), &mut ink);
		assert_eq!(session.handle(InputEvent::press(1, vec2(20.0, 150.0)), &mut ink), Response::Started);
		assert_eq!(session.handle(InputEvent::moved(1, vec2(30.0, 150.0)), &mut ink), Response::Recorded);
		assert_eq!(session.strokes().stroke_count(), 2);
		assert!(matches!(session.last_verdict(), Some(v) if !v.is_accepted()));
		assert_eq!(
			ink.last(),
			Some(&InkCommand::Segment(vec2(20.0, 150.0), vec2(30.0, 150.0)))
		);
		assert!(!ink.contains(&InkCommand::Segment(vec2(100.0, 40.0), vec2(20.0, 150.0))));
	}

	#[test]
	fn repeated_press_can_complete_the_previous_stroke() {
		let mut session = TraceSession::new("I", canvas());
		session.handle(InputEvent::press(1, vec2(100.0, 30.0)), &mut ());
		for y in (35..=170).step_by(5) {
			session.handle(InputEvent::moved(1, vec2(100.0, y as f32)), &mut ());
		}
		let response = session.handle(InputEvent::press(1, vec2(20.0, 20.0)), &mut ());
		assert!(matches!(response, Response::Completed(_)));
		assert!(session.is_complete());
		assert_eq!(session.strokes().stroke_count(), 1);
	}

	#[test]
	fn hover_moves_are_ignored() {
		let mut session = TraceSession::new("I", canvas());
		assert_eq!(session.handle(InputEvent::moved(1, vec2(1.0, 1.0)), &mut ()), Response::Ignored);
		assert_eq!(session.handle(InputEvent::release(1, vec2(1.0, 1.0)), &mut ()), Response::Ignored);
	}

	#[test]
	fn cancel_and_leave_end_the_stroke() {
		for phase in [InputPhase::Cancel, InputPhase::Leave] {
			let mut session = TraceSession::new("I", canvas());
			session.handle(InputEvent::press(7, vec2(100.0, 30.0)), &mut ());
			for y in (35..=170).step_by(5) {
				session.handle(InputEvent::moved(7, vec2(100.0, y as f32)), &mut ());
			}
			let response = session.handle(InputEvent::new(7, phase, vec2(100.0, 170.0)), &mut ());
			assert!(matches!(response, Response::Completed(_)), "{phase}");
		}
	}

	#[test]
	fn new_pointer_after_release() {
		let mut session = TraceSession::new("I", canvas());
		session.handle(InputEvent::press(1, vec2(100.0, 30.0)), &mut ());
		session.handle(InputEvent::release(1, vec2(100.0, 30.0)), &mut ());
		let press = InputEvent::press(2, vec2(100.0, 100.0)).with_source(PointerSource::Touch);
		assert_eq!(session.handle(press, &mut ()), Response::Started);
		assert_eq!(session.strokes().stroke_count(), 2);
	}

	impl TraceSession<'_> {
		fn real_points_are(&self, expected: &[Vec2]) -> bool {
			self.strokes.real_points().eq(expected.iter().copied())
		}
	}
}
