use clap::error::ErrorKind;
use clap::Parser;

use optionalcloud_terminal::logln;
use optionalcloud_terminal::Logger;

mod cmds;
mod errors;

use errors::*;

#[tokio::main]
async fn main() {
	if let Err(e) = Logger::set_global(Logger::new_local()) {
		eprintln!("{e}");
		std::process::exit(4);
	}

	let result = main2().await;
	if let Err(e) = &result {
		logln!("{}", e);
	}

	// Wait for all messages to be written out.
	if let Ok(logger) = Logger::get_global() {
		let _ = logger.close().await;
	}

	if let Err(e) = &result {
		std::process::exit(e.code());
	}
}

async fn main2() -> Result<(), Error> {
	let cli = match cmds::Root::try_parse() {
		Ok(arguments) => arguments,
		Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
			logln!("{e}");
			return Ok(());
		}
		Err(e) => return Err(Error::InvalidArguments { cause: Box::new(e) }),
	};

	if cli.verbosity >= 2 {
		logln!("args: {cli:?}");
	}

	match &cli.subcommand {
		Some(cmds::Subcommands::Invoke(cmd)) => cmds::invoke::execute(&cli, cmd).await,
		None => {
			logln!("command used with no args.  try 'invoke --help'.");
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verify_cli() {
		use clap::CommandFactory;
		cmds::Root::command().debug_assert()
	}
}
