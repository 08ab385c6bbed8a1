use serde::*;

/// What a package actually installs.
///
/// Metapackages and DLC carry relationships and compatibility data like any
/// other package but have no content of their own; executors skip them when
/// carrying out a change set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
	Package,
	MetaPackage,
	Dlc,
}
impl Default for Kind { fn default() -> Self { Self::Package } }
