use std::path::PathBuf;

use clap::Parser;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use optionalcloud_adapter::{Adapter, Convention};
use optionalcloud_terminal::{logln, Logger};
use serde_json::Value;

/// Settings for the function.  On the platform these come from the function's environment variables.
#[derive(Parser, Debug)]
#[command(about = "AWS Lambda entry point that bridges each invocation to the optionalcloud program")]
struct Config {
	/// Program to run for every invocation.  Defaults to `optionalcloud` next to this executable.
	#[arg(long, env = "OPTIONALCLOUD_PROGRAM")]
	program: Option<PathBuf>,

	/// How the program's output becomes the outcome: "status-aware" or "pass-through".
	#[arg(long, env = "OPTIONALCLOUD_CONVENTION", default_value_t = Convention::StatusAware)]
	convention: Convention,
}

impl Config {
	fn program(&self) -> Result<PathBuf, optionalcloud_adapter::Error> {
		match &self.program {
			Some(program) => Ok(program.clone()),
			None => Adapter::default_program(),
		}
	}
}

#[tokio::main]
async fn main() -> Result<(), Error> {
	Logger::set_global(Logger::new_local())?;
	let config = Config::try_parse()?;

	let adapter = Adapter::new(
		config.program()?,
		config.convention,
		Logger::get_global()?.clone(),
	);
	logln!(
		"bridging invocations to {} ({} convention)",
		adapter.program().display(),
		adapter.convention()
	);

	let adapter = &adapter;
	run(service_fn(move |event: LambdaEvent<Value>| async move {
		handle(adapter, event).await
	}))
	.await
}

/// One invocation: the payload goes to the program, the context stays here.
async fn handle(adapter: &Adapter, event: LambdaEvent<Value>) -> Result<Value, Error> {
	let (payload, _context) = event.into_parts();
	Ok(adapter.invoke(&payload).await?)
}
