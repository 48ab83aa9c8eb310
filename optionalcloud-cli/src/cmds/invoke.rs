use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use optionalcloud_adapter::gateway::{GatewayContext, GatewayParams, GatewayRequest};
use optionalcloud_adapter::{Adapter, Convention};
use optionalcloud_terminal::{logln, Logger};
use serde_json::Value;

use crate::{cmds::Root, Error};

#[derive(clap::Args, Debug)]
pub struct Cmd {
	/// Program to run.  Defaults to `optionalcloud` next to this executable.
	#[arg(long)]
	pub program: Option<PathBuf>,

	/// How the program's output becomes the outcome: "status-aware" or "pass-through".
	#[arg(long, default_value_t = Convention::StatusAware)]
	pub convention: Convention,

	/// JSON file holding the event.  Use "-" (or leave it out) to read stdin.
	#[arg(long, conflicts_with = "method")]
	pub event: Option<PathBuf>,

	/// Build an API gateway request event for this HTTP method instead of reading one.
	#[arg(long, requires = "resource")]
	pub method: Option<String>,

	/// Resource path of the gateway request, e.g. "/users".
	#[arg(long, requires = "method")]
	pub resource: Option<String>,

	/// JSON request body of the gateway request.
	#[arg(long, requires = "method")]
	pub body: Option<String>,

	/// Query string parameter of the gateway request, as key=value.  Repeatable.
	#[arg(long = "query", value_parser = parse_key_val, requires = "method")]
	pub query: Vec<(String, String)>,

	/// Header of the gateway request, as key=value.  Repeatable.
	#[arg(long = "header", value_parser = parse_key_val, requires = "method")]
	pub headers: Vec<(String, String)>,

	/// Stage variable of the gateway request, as key=value.  Repeatable.
	#[arg(long = "stage-var", value_parser = parse_key_val, requires = "method")]
	pub stage_vars: Vec<(String, String)>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
	match s.split_once('=') {
		Some((key, _)) if key.is_empty() => Err(format!("missing key in '{s}'")),
		Some((key, value)) => Ok((key.to_owned(), value.to_owned())),
		None => Err(format!("expected key=value, got '{s}'")),
	}
}

pub async fn execute(cli: &Root, cmd: &Cmd) -> Result<(), Error> {
	let program = match &cmd.program {
		Some(program) => program.clone(),
		None => Adapter::default_program()
			.map_err(|e| Error::BizarreEnvironment { cause: Box::new(e) })?,
	};
	let event = build_event(cmd)?;

	if cli.verbosity >= 1 {
		logln!(
			"invoking {} ({} convention)",
			program.display(),
			cmd.convention
		);
	}

	let logger = Logger::get_global()
		.map_err(|e| Error::BizarreEnvironment { cause: Box::new(e) })?
		.clone();
	let adapter = Adapter::new(program, cmd.convention, logger);
	let value = adapter
		.invoke(&event)
		.await
		.map_err(|cause| Error::Invocation { cause })?;

	let mut stdout = io::stdout().lock();
	serde_json::to_writer_pretty(&mut stdout, &value)
		.map_err(|e| Error::BizarreEnvironment { cause: Box::new(e) })?;
	writeln!(stdout).map_err(|e| Error::BizarreEnvironment { cause: Box::new(e) })?;
	Ok(())
}

fn build_event(cmd: &Cmd) -> Result<Value, Error> {
	let Some(method) = &cmd.method else {
		return read_event(cmd.event.as_ref());
	};

	let body = match &cmd.body {
		Some(body) => serde_json::from_str(body).map_err(|e| Error::InvalidArguments {
			cause: format!("--body is not valid JSON: {e}").into(),
		})?,
		None => Value::Null,
	};
	let request = GatewayRequest {
		body,
		params: GatewayParams {
			query: cmd.query.iter().cloned().collect(),
			header: cmd.headers.iter().cloned().collect(),
			..Default::default()
		},
		stage_variables: cmd.stage_vars.iter().cloned().collect(),
		context: GatewayContext {
			method: method.to_uppercase(),
			resource_path: cmd.resource.clone().unwrap_or_default(),
			stage: "local".into(),
			source_ip: "127.0.0.1".into(),
		},
	};
	serde_json::to_value(request).map_err(|e| Error::InvalidArguments { cause: Box::new(e) })
}

fn read_event(path: Option<&PathBuf>) -> Result<Value, Error> {
	let reader: Box<dyn Read> = match path {
		Some(path) if path.as_os_str() != "-" => Box::new(BufReader::new(
			File::open(path).map_err(|e| Error::InvalidArguments { cause: Box::new(e) })?,
		)),
		_ => Box::new(io::stdin().lock()),
	};
	serde_json::from_reader(reader).map_err(|e| Error::InvalidArguments {
		cause: format!("invalid event: {e}").into(),
	})
}
