/// Tolerances for capture and validation. `Default` gives the tuned values; lower the hit
/// radius or raise the coverage to make tracing harder.
#[derive(Debug, Clone, Copy, PartialEq, bon::Builder)]
pub struct TraceConfig {
	/// Fewer real points than this can never be accepted.
	#[builder(default = 10)]
	pub min_points: usize,

	/// Distance, in unit-square coordinates, within which a waypoint counts as visited.
	#[builder(default = 0.18)]
	pub hit_radius: f32,

	/// Bounding-box area over canvas area required when no template exists.
	#[builder(default = 0.12)]
	pub min_coverage: f32,

	/// Pixels the pointer has to travel before another point is recorded.
	#[builder(default = 2.0)]
	pub min_movement: f32,

	/// A rejected stroke only counts as an attempt above this many real points.
	#[builder(default = 10)]
	pub attempt_floor: usize,
}

impl Default for TraceConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}
