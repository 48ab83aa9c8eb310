use std::path::PathBuf;
use std::process::ExitStatus;

pub type Result<T> = std::result::Result<T, Error>;

type ErrorCause = Box<dyn ::std::error::Error + Send + Sync>;

/// Everything that can go wrong while bridging one invocation.
///
/// The `Display` text of each variant is exactly the message handed to the platform's error channel.
/// Adapter-side failures are prefixed with `500:`, while [`Error::ApplicationStatus`] carries
/// whatever status the program reported.
#[derive(thiserror::Error, Debug)]
pub enum Error {
	/// The event could not be turned into JSON for the program's stdin.
	#[error("500:could not serialize event: {cause}")]
	EventSerialization { cause: serde_json::Error },

	/// The program could not be started at all: missing executable, permission denied, etc.
	#[error("500:could not launch {}: {cause}", .program.display())]
	LaunchFailed {
		program: PathBuf,
		cause: std::io::Error,
	},

	/// The program started, but exited non-zero or was killed by a signal.
	/// Its output is ignored in that case.
	#[error("500:{} exited unsuccessfully ({status})", .program.display())]
	NonZeroExit { program: PathBuf, status: ExitStatus },

	/// The program exited zero, but stdout was not the JSON the convention asks for.
	#[error("500:malformed output from external program: {cause}")]
	MalformedOutput { cause: ErrorCause },

	/// The response envelope reported a status outside of the success bucket.
	#[error("{status}: {body}")]
	ApplicationStatus { status: i64, body: String },

	/// Pipes to or from the program broke while it was running.
	#[error("500:{msg}: {cause}")]
	SystemRuntimeError { msg: String, cause: ErrorCause },

	#[error("unknown response convention {name:?} (expected \"status-aware\" or \"pass-through\")")]
	UnknownConvention { name: String },

	/// The directory of the running binary could not be determined,
	/// so the default program location is unknown.
	#[error("could not locate the adapter's own executable: {cause}")]
	ProgramLocation { cause: std::io::Error },
}

impl Error {
	/// The HTTP-like status this error reports to the platform, if it is an invocation outcome at all.
	pub fn status(&self) -> Option<i64> {
		match self {
			Error::ApplicationStatus { status, .. } => Some(*status),
			Error::EventSerialization { .. }
			| Error::LaunchFailed { .. }
			| Error::NonZeroExit { .. }
			| Error::MalformedOutput { .. }
			| Error::SystemRuntimeError { .. } => Some(500),
			Error::UnknownConvention { .. } | Error::ProgramLocation { .. } => None,
		}
	}
}
