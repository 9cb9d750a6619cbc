use derive_more::Display;
use glam::Vec2;

use super::{StrokeSet, Template, TemplateLibrary, TraceConfig, TracePoint};
use crate::geom::{AABox, CanvasSize};

/// Minimum fraction of waypoints that must be visited, kept as an exact ratio.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display("{numerator}/{denominator}")]
pub struct HitThreshold {
	numerator: usize,
	denominator: usize,
}

impl HitThreshold {
	pub const ALL: Self = Self::new(1, 1);
	pub const MOST: Self = Self::new(3, 5);
	pub const HALF: Self = Self::new(1, 2);

	const fn new(numerator: usize, denominator: usize) -> Self {
		Self {
			numerator,
			denominator,
		}
	}

	/// Templates with few waypoints have little redundancy, so each one matters more.
	pub fn for_waypoint_count(count: usize) -> Self {
		match count {
			0..=3 => Self::ALL,
			4..=5 => Self::MOST,
			_ => Self::HALF,
		}
	}

	pub fn is_met(&self, hits: usize, total: usize) -> bool {
		total > 0 && hits * self.denominator >= self.numerator * total
	}

	pub fn ratio(&self) -> f32 {
		self.numerator as f32 / self.denominator as f32
	}
}

#[derive(Debug, Display, Clone, Copy, PartialEq)]
pub enum Score {
	#[display("{count} points, need {required}")]
	TooFewPoints { count: usize, required: usize },

	#[display("{hits}/{total} waypoints, need {required}")]
	Waypoints {
		hits: usize,
		total: usize,
		required: HitThreshold,
	},

	#[display("{ratio:.3} coverage, need {required:.3}")]
	Coverage { ratio: f32, required: f32 },
}

impl Score {
	/// The measured quantity in `[0, 1]`, for callers that adapt their messaging.
	pub fn ratio(&self) -> f32 {
		match *self {
			Score::TooFewPoints { count, required } => {
				(count as f32 / required.max(1) as f32).min(1.0)
			}
			Score::Waypoints { hits, total, .. } => hits as f32 / total.max(1) as f32,
			Score::Coverage { ratio, .. } => ratio,
		}
	}

	pub fn is_met(&self) -> bool {
		match *self {
			Score::TooFewPoints { .. } => false,
			Score::Waypoints {
				hits,
				total,
				required,
			} => required.is_met(hits, total),
			Score::Coverage { ratio, required } => ratio >= required,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
	accepted: bool,
	score: Score,
}

impl Verdict {
	fn from_score(score: Score) -> Self {
		Self {
			accepted: score.is_met(),
			score,
		}
	}

	pub fn is_accepted(&self) -> bool {
		self.accepted
	}

	pub fn score(&self) -> Score {
		self.score
	}
}

impl std::fmt::Display for Verdict {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let outcome = if self.accepted { "accepted" } else { "rejected" };
		write!(f, "{outcome} ({})", self.score)
	}
}

/// Fraction of `canvas` covered by the bounding box of `points`.
pub fn coverage_ratio(points: &[Vec2], canvas: CanvasSize) -> f32 {
	AABox::containing(points.iter().copied()).area() / canvas.area()
}

/// Number of waypoints with at least one normalized point within `radius`.
pub fn count_hits(points: &[Vec2], template: &Template, canvas: CanvasSize, radius: f32) -> usize {
	let normalized: Vec<Vec2> = points.iter().map(|p| canvas.normalize(*p)).collect();
	let radius_squared = radius * radius;
	template
		.waypoints()
		.iter()
		.filter(|w| normalized.iter().any(|p| p.distance_squared(**w) <= radius_squared))
		.count()
}

/// Decides whether captured points reproduce a character well enough.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
	library: &'a TemplateLibrary,
	config: TraceConfig,
}

impl Default for Validator<'static> {
	fn default() -> Self {
		Self::new(TraceConfig::default())
	}
}

impl Validator<'static> {
	pub fn new(config: TraceConfig) -> Self {
		Self::with_library(TemplateLibrary::builtin(), config)
	}
}

impl<'a> Validator<'a> {
	pub fn with_library(library: &'a TemplateLibrary, config: TraceConfig) -> Self {
		Self { library, config }
	}

	pub fn config(&self) -> &TraceConfig {
		&self.config
	}

	pub fn library(&self) -> &'a TemplateLibrary {
		self.library
	}

	/// Non-finite entries are break markers and are skipped.
	#[tracing::instrument(level = "debug", skip(self, points), fields(points = points.len()), ret)]
	pub fn validate(&self, points: &[Vec2], character: &str, canvas: CanvasSize) -> Verdict {
		let points: Vec<Vec2> = points.iter().copied().filter(|p| p.is_finite()).collect();

		if points.len() < self.config.min_points {
			return Verdict::from_score(Score::TooFewPoints {
				count: points.len(),
				required: self.config.min_points,
			});
		}

		let Some(template) = self.library.lookup(character) else {
			tracing::debug!(character, "no template, checking coverage");
			return Verdict::from_score(Score::Coverage {
				ratio: coverage_ratio(&points, canvas),
				required: self.config.min_coverage,
			});
		};

		Verdict::from_score(Score::Waypoints {
			hits: count_hits(&points, template, canvas, self.config.hit_radius),
			total: template.len(),
			required: HitThreshold::for_waypoint_count(template.len()),
		})
	}

	pub fn validate_strokes(&self, strokes: &StrokeSet, character: &str, canvas: CanvasSize) -> Verdict {
		let points: Vec<Vec2> = strokes.real_points().collect();
		self.validate(&points, character, canvas)
	}

	pub fn validate_flat(&self, points: &[TracePoint], character: &str, canvas: CanvasSize) -> Verdict {
		let points: Vec<Vec2> = points.iter().filter_map(|p| p.point()).collect();
		self.validate(&points, character, canvas)
	}
}

/// Validates against the built-in templates with default tolerances.
pub fn validate(points: &[Vec2], character: &str, canvas: CanvasSize) -> bool {
	Validator::default().validate(points, character, canvas).is_accepted()
}
