use std::env;
use std::path::{Path, PathBuf};

use optionalcloud_terminal::Logger;
use serde::Serialize;
use serde_json::Value;

mod convention;
mod envelope;
mod errors;
pub mod gateway;
mod process;


pub use convention::Convention;
pub use envelope::ResponseEnvelope;
pub use errors::Error;
pub use errors::Result;
pub use process::ProcessResult;

/// File name of the program the adapter runs, expected next to the adapter's own binary.
pub const PROGRAM_NAME: &str = "optionalcloud";

/// Bridges function invocations to one external program.
///
/// Every call to [`Adapter::invoke`] runs the program once, from start to exit.
/// Nothing is kept between invocations, so one adapter can serve any number of them,
/// concurrently or not.
pub struct Adapter {
	program: PathBuf,
	convention: Convention,
	logger: Logger,
}

impl Adapter {
	pub fn new(program: impl Into<PathBuf>, convention: Convention, logger: Logger) -> Self {
		Adapter {
			program: program.into(),
			convention,
			logger,
		}
	}

	/// `optionalcloud` in the directory holding the currently running executable.
	pub fn default_program() -> Result<PathBuf> {
		let exe = env::current_exe().map_err(|cause| Error::ProgramLocation { cause })?;
		let dir = exe.parent().ok_or_else(|| Error::ProgramLocation {
			cause: std::io::Error::other(format!("{} has no parent directory", exe.display())),
		})?;
		Ok(dir.join(PROGRAM_NAME))
	}

	pub fn program(&self) -> &Path {
		&self.program
	}

	pub fn convention(&self) -> Convention {
		self.convention
	}

	/// Runs the program for one event and turns what it did into the invocation's outcome.
	///
	/// `Ok` carries the value for the platform's success channel; the `Display` text of `Err`
	/// is the message for its error channel.
	pub async fn invoke<E>(&self, event: &E) -> Result<Value>
	where
		E: Serialize + ?Sized,
	{
		let input = serde_json::to_vec(event).map_err(|cause| Error::EventSerialization { cause })?;

		let result = process::run_program(&self.program, input).await?;
		self.conclude(result)
	}

	/// Outcome of a run whose output was collected. Stderr is logged first, whatever follows.
	fn conclude(&self, result: ProcessResult) -> Result<Value> {
		self.log_stderr(&result.stderr);

		if let Some(cause) = result.feed_error {
			return Err(Error::SystemRuntimeError {
				msg: "failed to feed event to external program".into(),
				cause: Box::new(cause),
			});
		}
		if !result.status.success() {
			return Err(Error::NonZeroExit {
				program: self.program.clone(),
				status: result.status,
			});
		}
		self.convention.translate(&result.stdout)
	}

	fn log_stderr(&self, stderr: &[u8]) {
		let text = String::from_utf8_lossy(stderr);
		// Diagnostics only: a lagging or closed log stream must not hold up the invocation.
		let _ = self
			.logger
			.try_log(format!("stderr: {}\n", text.trim_end()));
	}
}
