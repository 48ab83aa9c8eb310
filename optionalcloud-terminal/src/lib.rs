mod errors;
mod macros;
mod render;

use std::sync::OnceLock;

use tokio::io::AsyncWrite;
use tokio::sync::mpsc::{self, error::TrySendError, Sender};
use tokio::sync::oneshot;

pub use crate::errors::Error;
use crate::errors::Result;
pub use crate::macros::log_global;
use crate::render::TerminalRenderer;

const CHANNEL_CAPACITY: usize = 32;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Handle for sending log lines to a renderer task.
///
/// Clones share the same renderer, so messages from all clones come out in the order they were sent.
/// Every constructor spawns onto the current tokio runtime; calling one outside of a runtime panics.
#[derive(Clone)]
pub struct Logger {
	channel: Sender<Message>,
}

#[derive(Debug)]
pub(crate) enum Message {
	Log(String),
	Close(oneshot::Sender<()>),
}

impl Logger {
	/// Logs to stderr, which is where the function platform collects operator-visible output.
	pub fn new_local() -> Self {
		Self::new_writer(tokio::io::stderr())
	}

	pub fn new_writer<W>(writer: W) -> Self
	where
		W: AsyncWrite + Unpin + Send + 'static,
	{
		let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
		TerminalRenderer::start(receiver, writer);
		Self { channel: sender }
	}

	pub fn set_global(logger: Logger) -> Result<()> {
		GLOBAL_LOGGER
			.set(logger)
			.map_err(|_| Error::GlobalAlreadySet)
	}

	pub fn get_global() -> Result<&'static Logger> {
		GLOBAL_LOGGER.get().ok_or(Error::GlobalNotSet)
	}

	pub async fn log(&self, message: impl Into<String>) -> Result<()> {
		self.send(Message::Log(message.into())).await
	}

	/// Like [`Self::log`], but gives up instead of waiting when the renderer is behind.
	pub fn try_log(&self, message: impl Into<String>) -> Result<()> {
		self.channel
			.try_send(Message::Log(message.into()))
			.map_err(|e| match e {
				TrySendError::Full(_) => Error::ChannelFull,
				TrySendError::Closed(_) => Error::ChannelInternal,
			})
	}

	/// Stops the renderer once everything sent before this call has been written and flushed.
	///
	/// Messages sent after closing fail with [`Error::ChannelInternal`].
	pub async fn close(&self) -> Result<()> {
		let (notify, done) = oneshot::channel();
		self.send(Message::Close(notify)).await?;
		done.await.map_err(|_| Error::ChannelInternal)
	}

	async fn send(&self, message: Message) -> Result<()> {
		self.channel
			.send(message)
			.await
			.map_err(|_| Error::ChannelInternal)
	}
}
