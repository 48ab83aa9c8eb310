use std::io::ErrorKind;
use std::path::Path;
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::{Error, Result};

/// Terminal state of one program run: how it exited, and everything it wrote.
#[derive(Debug)]
pub struct ProcessResult {
	pub status: ExitStatus,
	pub stdout: Vec<u8>,
	pub stderr: Vec<u8>,
	/// Set when writing the event to stdin failed for a reason other than the program closing it.
	/// Output is still collected in that case, so stderr can be reported before the error is.
	pub feed_error: Option<std::io::Error>,
}

/// Runs `program` with no arguments, feeding `input` on stdin, and waits for it to exit.
///
/// Stdin is written at the same time as stdout and stderr are drained,
/// so a program that answers before it has read all of its input cannot wedge either side.
/// The child is killed if this future is dropped early, and reaped before returning otherwise.
pub(crate) async fn run_program(program: &Path, input: Vec<u8>) -> Result<ProcessResult> {
	let mut cmd = Command::new(program);
	cmd.stdin(Stdio::piped());
	cmd.stdout(Stdio::piped());
	cmd.stderr(Stdio::piped());
	cmd.kill_on_drop(true);

	let mut child = cmd.spawn().map_err(|cause| Error::LaunchFailed {
		program: program.to_owned(),
		cause,
	})?;

	let mut stdin = child.stdin.take().ok_or_else(|| Error::SystemRuntimeError {
		msg: "failed to feed event to external program".into(),
		cause: "child did not have a handle to stdin".into(),
	})?;

	let feed = async move {
		let written = stdin.write_all(&input).await;
		drop(stdin); // EOF for the program.
		match written {
			// The program is free to exit without reading its input.
			Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
			other => other,
		}
	};

	let (fed, output) = tokio::join!(feed, child.wait_with_output());
	// No stderr survives a failed wait, so there is no diagnostic to write on this path.
	let output = output.map_err(|e| Error::SystemRuntimeError {
		msg: "failed to collect output of external program".into(),
		cause: Box::new(e),
	})?;

	Ok(ProcessResult {
		status: output.status,
		stdout: output.stdout,
		stderr: output.stderr,
		feed_error: fed.err(),
	})
}
