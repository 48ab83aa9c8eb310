use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::Value;

use crate::envelope::ResponseEnvelope;
use crate::{Error, Result};

/// How the stdout of a successful (exit 0) run turns into an outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Convention {
	/// Stdout is a [`ResponseEnvelope`]; its status picks success or error.
	#[default]
	StatusAware,

	/// Stdout is forwarded as the success value, whatever it holds.
	PassThrough,
}

impl Convention {
	pub(crate) fn translate(self, stdout: &[u8]) -> Result<Value> {
		let value: Value = serde_json::from_slice(stdout).map_err(|e| Error::MalformedOutput {
			cause: Box::new(e),
		})?;

		match self {
			Convention::PassThrough => Ok(value),
			Convention::StatusAware => {
				let envelope = ResponseEnvelope::deserialize(&value)
					.map_err(|e| Error::MalformedOutput { cause: Box::new(e) })?;
				if envelope.is_success() {
					Ok(value)
				} else {
					Err(Error::ApplicationStatus {
						status: envelope.status,
						body: envelope.body_text(),
					})
				}
			}
		}
	}
}

impl fmt::Display for Convention {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Convention::StatusAware => "status-aware",
			Convention::PassThrough => "pass-through",
		})
	}
}

impl FromStr for Convention {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"status-aware" => Ok(Convention::StatusAware),
			"pass-through" => Ok(Convention::PassThrough),
			_ => Err(Error::UnknownConvention { name: s.into() }),
		}
	}
}
