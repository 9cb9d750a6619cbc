use glam::Vec2;

/// One element of a flattened trace: either a captured position or a pen lift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TracePoint {
	Point(Vec2),
	Break,
}

impl TracePoint {
	/// Interprets any non-finite coordinate as a break marker.
	pub fn from_raw(point: Vec2) -> Self {
		if point.is_finite() {
			TracePoint::Point(point)
		} else {
			TracePoint::Break
		}
	}

	/// Break markers become `(NaN, NaN)`.
	pub fn to_raw(self) -> Vec2 {
		match self {
			TracePoint::Point(point) => point,
			TracePoint::Break => Vec2::NAN,
		}
	}

	pub fn point(self) -> Option<Vec2> {
		match self {
			TracePoint::Point(point) => Some(point),
			TracePoint::Break => None,
		}
	}
}

/// A single press-to-release motion in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
	points: Vec<Vec2>,
}

impl Stroke {
	pub fn new(start: Vec2) -> Self {
		Self {
			points: vec![start],
		}
	}

	pub fn push(&mut self, point: Vec2) {
		self.points.push(point);
	}

	pub fn points(&self) -> &[Vec2] {
		&self.points
	}

	pub fn first(&self) -> Option<Vec2> {
		self.points.first().copied()
	}

	pub fn last(&self) -> Option<Vec2> {
		self.points.last().copied()
	}

	/// Always at least one: the press that started the stroke.
	pub fn point_count(&self) -> usize {
		self.points.len()
	}
}

/// Every stroke drawn for one character, in drawing order. Never holds an empty stroke.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeSet {
	strokes: Vec<Stroke>,
}

impl StrokeSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a new stroke at `start`.
	pub fn begin(&mut self, start: Vec2) {
		self.strokes.push(Stroke::new(start));
	}

	/// Appends to the most recent stroke. Returns the previous point, or `None` if no stroke exists.
	pub fn extend(&mut self, point: Vec2) -> Option<Vec2> {
		let stroke = self.strokes.last_mut()?;
		let previous = stroke.last();
		stroke.push(point);
		previous
	}

	pub fn last_point(&self) -> Option<Vec2> {
		self.strokes.last().and_then(Stroke::last)
	}

	pub fn strokes(&self) -> &[Stroke] {
		&self.strokes
	}

	pub fn stroke_count(&self) -> usize {
		self.strokes.len()
	}

	pub fn point_count(&self) -> usize {
		self.strokes.iter().map(Stroke::point_count).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.strokes.is_empty()
	}

	pub fn clear(&mut self) {
		self.strokes.clear();
	}

	/// All captured positions with pen lifts discarded.
	pub fn real_points(&self) -> impl Iterator<Item = Vec2> + '_ {
		self.strokes.iter().flat_map(|s| s.points().iter().copied())
	}

	/// Flattens into a single sequence with a `Break` between consecutive strokes.
	pub fn flatten(&self) -> Vec<TracePoint> {
		let mut flat = Vec::with_capacity(self.point_count() + self.strokes.len());
		for (index, stroke) in self.strokes.iter().enumerate() {
			if index > 0 {
				flat.push(TracePoint::Break);
			}
			flat.extend(stroke.points().iter().copied().map(TracePoint::Point));
		}
		flat
	}

	/// Rebuilds strokes from a flattened sequence. Leading, trailing and repeated breaks
	/// are tolerated; they never produce empty strokes.
	pub fn from_flat(points: impl IntoIterator<Item = TracePoint>) -> Self {
		let mut strokes = Vec::new();
		let mut current: Option<Stroke> = None;
		for point in points {
			match point {
				TracePoint::Point(p) => match current.as_mut() {
					Some(stroke) => stroke.push(p),
					None => current = Some(Stroke::new(p)),
				},
				TracePoint::Break => strokes.extend(current.take()),
			}
		}
		strokes.extend(current);
		Self { strokes }
	}

	/// Same as [`StrokeSet::from_flat`] for NaN-separated coordinate arrays.
	pub fn from_raw(points: impl IntoIterator<Item = Vec2>) -> Self {
		Self::from_flat(points.into_iter().map(TracePoint::from_raw))
	}
}
