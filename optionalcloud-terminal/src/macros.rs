use crate::Logger;

/// Sends one message to the global logger; the expansion target of [`logln!`].
///
/// # Panics
///
/// Binaries install the global logger first thing in `main` and close it last,
/// so a missing or closed logger here is a programming error and panics.
pub async fn log_global(message: impl Into<String>) {
	let logger = Logger::get_global()
		.expect("logln!() needs a global logger installed with `Logger::set_global`");
	logger
		.log(message.into())
		.await
		.expect("logln!() was used after the global logger was closed");
}

/// Formats like [`format!`], appends `\n`, and waits until the global logger has accepted the line.
///
/// # Panics
///
/// Same as [`log_global`]: the global logger must be installed and not yet closed.
///
/// # Examples
///
/// ```
/// use optionalcloud_terminal::{logln, Logger};
///
/// # #[tokio::main]
/// # async fn main() {
/// Logger::set_global(Logger::new_local()).unwrap();
///
/// logln!(); // Logs just a newline
/// logln!("exit code {}", 10);
/// let status = 404;
/// logln!("{status}: not found");
/// # }
/// ```
#[macro_export]
macro_rules! logln {
	() => { $crate::log_global("\n").await };
	// Two format_args! calls avoid allocating two String instances.
	($($arg:tt)+) => { $crate::log_global(std::fmt::format(format_args!("{}\n", format_args!($($arg)+)))).await };
}
