pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	#[error("internal channel error")]
	ChannelInternal,

	/// Only produced by [`crate::Logger::try_log`], which refuses to wait for the renderer.
	#[error("log channel is full")]
	ChannelFull,

	#[error("global logger is already set")]
	GlobalAlreadySet,

	#[error("global logger is not set")]
	GlobalNotSet,
}
