pub mod invoke;

#[derive(clap::Parser, Debug)]
#[command(about = "Run the optionalcloud function adapter locally")]
pub struct Root {
	#[command(subcommand)]
	pub subcommand: Option<Subcommands>,

	/// Raise verbosity by specifying this flag repeatedly.
	#[arg(short, action = clap::ArgAction::Count)]
	pub verbosity: u8,
}

#[derive(clap::Subcommand, Debug)]
pub enum Subcommands {
	/// invoke the external program once, the same way the function platform would.
	Invoke(invoke::Cmd),
}
