//! Various helper functions and fixtures for testing
//!
//! Helpers here panic freely, they are only ever called from tests.

use std::collections::HashSet;

use kerbin::Registry;
use kerbin::package::*;

pub use tempfile;

/// Builds [`Package`] values without spelling out every field.
///
/// Starts from a stable content package compatible with any game version and
/// with no relationships, then layers the interesting parts on top.
pub struct PackageBuilder {
	package: Package,
}

impl PackageBuilder {
	/// Starts a builder.
	/// # Parameters
	/// - `identifier` - used for the identifier, the display name and the download url.
	/// - `version` - parsed leniently, anything goes.
	pub fn new(identifier: &str, version: &str) -> Self {
		PackageBuilder {
			package: Package {
				identifier: identifier.to_string(),
				name: identifier.to_string(),
				blurb: String::new(),
				authors: Vec::new(),
				licenses: Vec::new(),
				version: PackageVersion::new(version),
				download: Some(format!("https://example.com/{}.zip", identifier)),
				release_status: ReleaseStatus::Stable,
				kind: Kind::Package,
				depends: Vec::new(),
				recommends: Vec::new(),
				suggests: Vec::new(),
				conflicts: Vec::new(),
				provides: HashSet::new(),
				game_versions: GameVersionBounds::Any,
				game_version_strict: false,
			},
		}
	}

	/// Adds a dependency on any version of `name`.
	pub fn depends(mut self, name: &str) -> Self {
		self.package.depends.push(PackageDescriptor::any_version(name));
		self
	}

	/// Adds a dependency on `name` constrained to `bounds`.
	pub fn depends_version(mut self, name: &str, bounds: PackageVersionBounds) -> Self {
		self.package.depends.push(PackageDescriptor::new(name, bounds));
		self
	}

	/// Adds a recommendation of any version of `name`.
	pub fn recommends(mut self, name: &str) -> Self {
		self.package.recommends.push(PackageDescriptor::any_version(name));
		self
	}

	/// Adds a suggestion of any version of `name`.
	pub fn suggests(mut self, name: &str) -> Self {
		self.package.suggests.push(PackageDescriptor::any_version(name));
		self
	}

	/// Adds a conflict with any version of `name`.
	pub fn conflicts(mut self, name: &str) -> Self {
		self.package.conflicts.push(PackageDescriptor::any_version(name));
		self
	}

	/// Declares that the package also answers to `name`.
	pub fn provides(mut self, name: &str) -> Self {
		self.package.provides.insert(name.to_string());
		self
	}

	/// Restricts the compatible game versions.
	pub fn game_versions(mut self, bounds: GameVersionBounds) -> Self {
		self.package.game_versions = bounds;
		self
	}

	/// Changes the package kind.
	///
	/// Metapackages and DLC carry no download, setting those kinds clears it.
	pub fn kind(mut self, kind: Kind) -> Self {
		self.package.kind = kind;
		if kind != Kind::Package {
			self.package.download = None;
		}
		self
	}

	pub fn build(self) -> Package {
		self.package
	}
}

/// A registry stocked with [`sample_catalog`].
pub fn sample_registry() -> Registry {
	let mut registry = Registry::new();
	for package in sample_catalog() {
		registry.add_available(package);
	}
	registry
}

/// A small coherent catalog.
///
/// It carries a plain dependency chain (`MechJeb2` and `KerbalEngineerRedux`
/// both need `ModuleManager`), a virtual name with two providers
/// (`CustomBiomesData`) and a standalone package (`ScanSat`).
pub fn sample_catalog() -> Vec<Package> {
	vec![
		PackageBuilder::new("ModuleManager", "4.2.1").build(),
		PackageBuilder::new("MechJeb2", "2.14.3")
			.depends("ModuleManager")
			.build(),
		PackageBuilder::new("KerbalEngineerRedux", "1.1.9")
			.depends("ModuleManager")
			.build(),
		PackageBuilder::new("CustomBiomes", "1.6.8")
			.depends("CustomBiomesData")
			.build(),
		PackageBuilder::new("CustomBiomesKerbal", "1.6.8")
			.depends("CustomBiomes")
			.provides("CustomBiomesData")
			.conflicts("CustomBiomesData")
			.build(),
		PackageBuilder::new("CustomBiomesRSS", "1.6.8")
			.depends("CustomBiomes")
			.provides("CustomBiomesData")
			.conflicts("CustomBiomesData")
			.build(),
		PackageBuilder::new("ScanSat", "20.4").build(),
	]
}

/// Routes log output through the test harness.
///
/// Safe to call at the top of every test, repeat calls do nothing.
pub fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}
