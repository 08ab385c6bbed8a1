use serde::*;
use super::Package;
use super::package_version::{PackageVersion, PackageVersionBounds};

/// A unique identifier for packages.
///
/// Mainly used as an index into the registry and to name the package a
/// change set entry was pulled in by.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PackageIdentifier {
	pub identifier: String,
	pub version: PackageVersion,
}

impl std::cmp::Ord for PackageIdentifier {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		match self.identifier.cmp(&other.identifier) {
			core::cmp::Ordering::Equal => {}
			ord => return ord,
		}
		self.version.cmp(&other.version)
	}
}

impl std::cmp::PartialOrd for PackageIdentifier {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl From<&Package> for PackageIdentifier {
	fn from(package: &Package) -> Self {
		PackageIdentifier {
			identifier: package.identifier.clone(),
			version: package.version.clone(),
		}
	}
}

impl std::fmt::Display for PackageIdentifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} {}", self.identifier, self.version)
	}
}

/// Describes packages using a name and a version requirement.
///
/// `name` can be a package identifier or a virtual name that packages
/// [`provide`](Package::provides), so a descriptor stands for a set of
/// packages rather than one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
	pub name: String,
	pub version: PackageVersionBounds,
}

impl PackageDescriptor {
	pub fn new(name: impl Into<String>, version: PackageVersionBounds) -> Self {
		Self {
			name: name.into(),
			version,
		}
	}

	/// A descriptor accepting any version of `name`.
	pub fn any_version(name: impl Into<String>) -> Self {
		Self::new(name, PackageVersionBounds::Any)
	}
}

impl std::fmt::Display for PackageDescriptor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.version {
			PackageVersionBounds::Any => write!(f, "{}", self.name),
			bounds => write!(f, "{} {}", self.name, bounds),
		}
	}
}

/// Does `identifier` name the descriptor's package at an acceptable version.
///
/// This only considers the package's own identifier, use
/// [`does_package_provide_descriptor`] to also honour virtual names.
pub fn does_package_match_descriptor(identifier: &PackageIdentifier, descriptor: &PackageDescriptor) -> bool {
	if identifier.identifier != descriptor.name {
		return false
	}
	descriptor.version.is_version_within(&identifier.version)
}

/// Does `package` satisfy the descriptor through its identifier or one of its
/// provided virtual names. Version requirements apply to the providing
/// package's own version either way.
pub fn does_package_provide_descriptor(package: &Package, descriptor: &PackageDescriptor) -> bool {
	if package.identifier != descriptor.name && !package.provides.contains(&descriptor.name) {
		return false
	}
	descriptor.version.is_version_within(&package.version)
}
