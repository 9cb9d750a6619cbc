mod trace_pad;
pub use trace_pad::*;
