#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TraceError {
	#[error("canvas size must be positive, got {width}x{height}")]
	InvalidCanvasSize { width: f32, height: f32 },

	#[error("pointer moved or released without a press")]
	NotPressed,
}

static_assertions::assert_impl_all!(TraceError: std::error::Error, Send, Sync);
