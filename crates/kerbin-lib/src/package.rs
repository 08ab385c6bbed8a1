//! Various types associated with packages.

use std::collections::HashSet;
use serde::*;

/// A catalog entry describing one version of one package.
///
/// Catalog documents are too loose for serde alone (one-or-many fields, two
/// spellings of the game version constraint), use the
/// [`read_from_json`](Package::read_from_json) associated function to build
/// these from catalog JSON. The serde implementations exist for registry
/// snapshots.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Package {
	/* Required Fields */
	pub identifier: String,
	pub name: String,
	pub blurb: String,
	/* one or many */
	pub authors: Vec<String>,
	/* one or many */
	pub licenses: Vec<String>,
	pub version: PackageVersion,
	/* Required when `kind` is not `"metapackage"` or `"dlc"` */
	pub download: Option<String>,

	/* Optional Fields */
	pub release_status: ReleaseStatus,
	pub kind: Kind,
	pub depends: Vec<PackageDescriptor>,
	pub recommends: Vec<PackageDescriptor>,
	pub suggests: Vec<PackageDescriptor>,
	pub conflicts: Vec<PackageDescriptor>,
	pub provides: HashSet<String>,
	pub game_versions: GameVersionBounds,
	pub game_version_strict: bool,
}

impl std::hash::Hash for Package {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		/* Identifier and version are the unique key for a package. */
		self.identifier.hash(state);
		self.version.hash(state);
	}
}

impl std::cmp::PartialEq for Package {
	fn eq(&self, other: &Self) -> bool {
		self.identifier == other.identifier &&
		self.version == other.version
	}
}

impl std::cmp::Ord for Package {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		match self.identifier.cmp(&other.identifier) {
			core::cmp::Ordering::Equal => {}
			ord => return ord,
		}
		self.version.cmp(&other.version)
	}
}

impl std::cmp::PartialOrd for Package {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl std::fmt::Display for Package {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}", self.identifier, self.version)
	}
}

impl Package {
	/// Checks if the given packages conflict with each other.
	///
	/// Conflicts act in both directions, either side declaring one is enough.
	pub fn do_packages_conflict(lhs: &Self, rhs: &Self) -> bool {
		let mut conflicts = false;
		for con in &lhs.conflicts {
			conflicts |= relationship::does_package_provide_descriptor(rhs, con);
		}
		for con in &rhs.conflicts {
			conflicts |= relationship::does_package_provide_descriptor(lhs, con);
		}
		conflicts
	}
}

/* Package Types */

mod package_version;
pub use package_version::PackageVersion;
pub use package_version::PackageVersionBounds;

mod version_bounds;
pub use version_bounds::VersionBounds;

mod game_version;
pub use game_version::GameVersion;
pub use game_version::GameVersionRange;
pub use game_version::GameVersionBounds;

mod release;
pub use release::ReleaseStatus;

mod kind;
pub use kind::Kind;

pub mod relationship;
pub use relationship::PackageIdentifier;
pub use relationship::PackageDescriptor;
pub use relationship::does_package_match_descriptor;
pub use relationship::does_package_provide_descriptor;

mod import;
