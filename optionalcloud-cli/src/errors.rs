type ErrorCause = Box<dyn ::std::error::Error + Send + Sync>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	// InvalidArguments is for CLI level parse errors, and for event input we can't make sense of.
	#[error("invalid arguments: {cause}")]
	InvalidArguments { cause: ErrorCause },

	/// BizarreEnvironment covers things that should never be missing,
	/// like the path of our own executable or a readable stdout.
	///
	/// Make sure the cause describes itself well, since this error's display message preamble provides little information itself.
	#[error("halting due to strange environment: {cause}")]
	BizarreEnvironment { cause: ErrorCause },

	/// The invocation itself produced an error outcome.
	/// Displayed verbatim, exactly as the function platform would show it.
	#[error("{cause}")]
	Invocation { cause: optionalcloud_adapter::Error },
}

impl Error {
	pub fn code(&self) -> i32 {
		match self {
			Error::InvalidArguments { .. } => 1,
			Error::BizarreEnvironment { .. } => 4,
			Error::Invocation { .. } => 10,
		}
	}
}
