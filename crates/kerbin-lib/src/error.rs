//! Crate wide error and result types.

pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
	#[error("IO error: {0}")]
	IO(#[from] std::io::Error),

	#[error("json error: {0}")]
	SerdeJSON(#[from] serde_json::Error),

	#[error("snapshot error: {0}")]
	Bincode(#[from] bincode::Error),

	/// Malformed input data such as catalog documents or version strings.
	#[error("parsing error: {0}")]
	Parse(String),

	/// The identifier is not known to the registry.
	#[error("package not found: {0}")]
	ModuleNotFound(String),

	/// A virtual package resolved to more than one provider and no policy
	/// allowed picking one.
	#[error("too many packages provide {name}: {}", providers.join(", "))]
	TooManyProvides {
		name: String,
		providers: Vec<String>,
	},

	/// The package set cannot coexist. Each entry describes one finding.
	#[error("inconsistent package set: {}", .0.join("; "))]
	Inconsistent(Vec<String>),

	/// A registry transaction was opened or used in an unsupported way.
	#[error("transaction error: {0}")]
	Transaction(String),
}
