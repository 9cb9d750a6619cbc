use glam::Vec2;

use crate::trace::TraceError;

/// Axis-aligned bounding box. An empty box has `min > max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec2::MAX, Vec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x || self.min.y > self.max.y
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl Iterator<Item = Vec2>) -> Self {
		points.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	pub fn size(&self) -> Vec2 {
		if self.is_empty() {
			Vec2::ZERO
		} else {
			self.max - self.min
		}
	}

	pub fn area(&self) -> f32 {
		let size = self.size();
		size.x * size.y
	}
}

/// Pixel dimensions of the drawing surface. Both sides are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
	width: f32,
	height: f32,
}

impl CanvasSize {
	pub fn new(width: f32, height: f32) -> Result<Self, TraceError> {
		if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
			return Err(TraceError::InvalidCanvasSize { width, height });
		}
		Ok(Self { width, height })
	}

	pub fn square(side: f32) -> Result<Self, TraceError> {
		Self::new(side, side)
	}

	pub fn width(&self) -> f32 {
		self.width
	}

	pub fn height(&self) -> f32 {
		self.height
	}

	pub fn as_vec2(&self) -> Vec2 {
		Vec2::new(self.width, self.height)
	}

	pub fn area(&self) -> f32 {
		self.width * self.height
	}

	/// Maps a canvas pixel position into the unit square.
	pub fn normalize(&self, point: Vec2) -> Vec2 {
		point / self.as_vec2()
	}

	/// Maps a unit-square position back to canvas pixels.
	pub fn denormalize(&self, point: Vec2) -> Vec2 {
		point * self.as_vec2()
	}
}
