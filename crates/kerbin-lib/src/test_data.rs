//! Shared fixtures for unit tests.

use crate::package::{GameVersionBounds, Kind, Package, PackageDescriptor, PackageVersion, ReleaseStatus};

/// A minimal valid package, meant to be bent into shape with struct update
/// syntax at the use site.
pub(crate) fn package(identifier: &str, version: &str) -> Package {
	Package {
		identifier: identifier.to_string(),
		name: identifier.to_string(),
		blurb: String::new(),
		authors: vec![],
		licenses: vec![],
		version: PackageVersion::new(version),
		download: Some(format!("https://example.com/{}.zip", identifier)),
		release_status: ReleaseStatus::Stable,
		kind: Kind::Package,
		depends: vec![],
		recommends: vec![],
		suggests: vec![],
		conflicts: vec![],
		provides: Default::default(),
		game_versions: GameVersionBounds::Any,
		game_version_strict: false,
	}
}

/// A dependency on any version of `name`.
pub(crate) fn dep(name: &str) -> PackageDescriptor {
	PackageDescriptor::any_version(name)
}
