use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::Receiver;

use crate::Message;

pub(crate) struct TerminalRenderer<W> {
	writer: W,
	channel: Receiver<Message>,
}

impl<W> TerminalRenderer<W>
where
	W: AsyncWrite + Unpin + Send + 'static,
{
	pub(crate) fn start(channel: Receiver<Message>, writer: W) {
		tokio::spawn(async move { Self { writer, channel }.run().await });
	}

	async fn run(mut self) {
		while let Some(message) = self.channel.recv().await {
			match message {
				Message::Log(message) => {
					// Nowhere left to report a broken log stream; keep draining so senders never stall.
					let _ = self.writer.write_all(message.as_bytes()).await;
				}
				Message::Close(notify) => {
					let _ = self.writer.flush().await;
					self.channel.close();
					let _ = notify.send(()); // Ignore if no notification could be sent.
					break;
				}
			}
		}
		let _ = self.writer.shutdown().await;
	}
}
