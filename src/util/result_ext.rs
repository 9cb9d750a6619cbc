pub trait ResultExt<T, E> {
	/// Logs the error, if any, and discards it.
	fn ok_or_log(self) -> Option<T>
	where
		E: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self) -> Option<T>
	where
		E: std::fmt::Display,
	{
		self.inspect_err(|err| tracing::error!(%err)).ok()
	}
}

pub trait OptionExt<T> {
	/// Logs `message` at warn level if there is no value.
	fn or_warn(self, message: &str) -> Option<T>;
}

impl<T> OptionExt<T> for Option<T> {
	fn or_warn(self, message: &str) -> Option<T> {
		if self.is_none() {
			tracing::warn!("{}", message);
		}
		self
	}
}
