//! The registry of available and installed packages.
//!
//! The registry is the data half of the dependency machinery, it owns every
//! catalog entry, what's installed at which version and which loose DLLs were
//! detected in the game directory. Resolution reads it, executors mutate it
//! under a transaction.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::compatibility::GameComparator;
use crate::package::{GameVersion, Package, PackageVersion};
use crate::sanity;

mod transaction;
pub use transaction::RegistryTransaction;
pub use transaction::TransactionMode;

/// A package registered as present in the game instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledPackage {
	pub package: Package,
	/// Pulled in as a dependency rather than asked for by the user.
	pub auto_installed: bool,
}

/// Everything a transaction snapshot has to cover.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RegistryState {
	/// Every known version of every known identifier. "Latest" is the
	/// greatest key of the inner map.
	available: HashMap<String, BTreeMap<PackageVersion, Package>>,
	installed: HashMap<String, InstalledPackage>,
	/// Detected loose DLLs, name to the relative path it was found at.
	dlls: HashMap<String, String>,
}

#[derive(Debug, Default)]
pub struct Registry {
	state: RegistryState,
	transaction_backup: Option<Box<RegistryState>>,
}

impl Registry {
	pub fn new() -> Self {
		Self::default()
	}

	/* Available packages */

	/// Inserts a package into the catalog, replacing any prior entry with the
	/// same identifier and version.
	pub fn add_available(&mut self, package: Package) {
		log::debug!("available: {}", package);
		self.state.available
			.entry(package.identifier.clone())
			.or_default()
			.insert(package.version.clone(), package);
	}

	/// Removes one version of a package from the catalog and returns it.
	/// Removing the only remaining version leaves the identifier unknown.
	///
	/// # Errors
	/// [`ModuleNotFound`](crate::Error::ModuleNotFound) when the identifier or
	/// the version isn't in the catalog.
	pub fn remove_available(&mut self, identifier: &str, version: &PackageVersion) -> crate::Result<Package> {
		let versions = self.state.available.get_mut(identifier)
			.ok_or_else(|| crate::Error::ModuleNotFound(identifier.to_string()))?;

		let removed = versions.remove(version)
			.ok_or_else(|| crate::Error::ModuleNotFound(format!("{} {}", identifier, version)))?;

		if versions.is_empty() {
			self.state.available.remove(identifier);
		}
		Ok(removed)
	}

	pub fn clear_available(&mut self) {
		self.state.available.clear();
	}

	/// Reads catalog JSON documents into the available set, skipping and
	/// logging any that don't parse. Returns how many were added.
	pub fn add_catalog_documents(&mut self, documents: impl IntoIterator<Item = serde_json::Value>) -> usize {
		let mut count = 0;
		for document in documents {
			match Package::read_from_json(document) {
				Ok(package) => {
					self.add_available(package);
					count += 1;
				}
				Err(e) => log::warn!("skipping unreadable catalog document: {}", e),
			}
		}
		count
	}

	/// Returns the latest version of `identifier` compatible with `criteria`.
	///
	/// Returns `Ok(None)` when the identifier is known but no version of it is
	/// compatible, which is not the same thing as not knowing the identifier.
	///
	/// # Errors
	/// [`ModuleNotFound`](crate::Error::ModuleNotFound) when the identifier
	/// isn't in the catalog at all.
	pub fn latest_available(&self, identifier: &str, criteria: &[GameVersion], comparator: &dyn GameComparator) -> crate::Result<Option<&Package>> {
		log::debug!("finding latest available for {}", identifier);
		let versions = self.state.available.get(identifier)
			.ok_or_else(|| crate::Error::ModuleNotFound(identifier.to_string()))?;

		Ok(versions.values().rev().find(|p| comparator.compatible(criteria, p)))
	}

	/// Returns the latest compatible version of everything that is or provides
	/// `name`. Unlike [`latest_available`](Registry::latest_available) an
	/// unknown name is no error, it just has no providers.
	pub fn latest_available_with_provides(&self, name: &str, criteria: &[GameVersion], comparator: &dyn GameComparator) -> Vec<&Package> {
		log::debug!("finding latest available with provides for {}", name);
		let mut packages = Vec::new();

		if let Ok(Some(package)) = self.latest_available(name, criteria, comparator) {
			packages.push(package);
		}

		/* Walk the rest of the catalog for anything providing the name. */
		for (identifier, versions) in &self.state.available {
			if identifier == name {
				continue;
			}
			if let Some(latest) = versions.values().rev().find(|p| comparator.compatible(criteria, p)) {
				if latest.provides.contains(name) {
					packages.push(latest);
				}
			}
		}

		packages
	}

	/// The latest compatible version of every identifier whose hard
	/// dependencies can also be satisfied, sorted by identifier.
	pub fn compatible_packages(&self, criteria: &[GameVersion], comparator: &dyn GameComparator) -> Vec<&Package> {
		let mut candidates = self.state.available.keys().collect::<Vec<_>>();
		candidates.sort();

		let mut compatible = Vec::new();
		for candidate in candidates {
			if let Ok(Some(available)) = self.latest_available(candidate, criteria, comparator) {
				/* No point offering something whose dependencies can't be got. */
				let failed_dependency = available.depends.iter()
					.any(|dep| self.latest_available_with_provides(&dep.name, criteria, comparator).is_empty());
				if !failed_dependency {
					compatible.push(available);
				}
			}
		}
		compatible
	}

	/// The latest version of every identifier with no compatible version at
	/// all, sorted by identifier.
	pub fn incompatible_packages(&self, criteria: &[GameVersion], comparator: &dyn GameComparator) -> Vec<&Package> {
		let mut candidates = self.state.available.keys().collect::<Vec<_>>();
		candidates.sort();

		let mut incompatible = Vec::new();
		for candidate in candidates {
			if let Ok(None) = self.latest_available(candidate, criteria, comparator) {
				if let Ok(Some(latest)) = self.latest_available(candidate, &[], comparator) {
					incompatible.push(latest);
				}
			}
		}
		incompatible
	}

	/* Installed packages */

	/// Registers the supplied package as having been installed, replacing any
	/// record under the same identifier.
	pub fn register_installed(&mut self, package: Package, auto_installed: bool) {
		log::debug!("registering {} as installed", package);
		self.state.installed.insert(
			package.identifier.clone(),
			InstalledPackage { package, auto_installed },
		);
	}

	/// Forgets an installed package and returns its record.
	///
	/// # Errors
	/// [`ModuleNotFound`](crate::Error::ModuleNotFound) when nothing by that
	/// identifier is registered as installed.
	pub fn deregister_installed(&mut self, identifier: &str) -> crate::Result<InstalledPackage> {
		self.state.installed.remove(identifier)
			.ok_or_else(|| crate::Error::ModuleNotFound(identifier.to_string()))
	}

	/// The record for one installed package. Does *not* look up virtual or
	/// DLL names, use [`is_installed`](Registry::is_installed) for those.
	pub fn installed_package(&self, identifier: &str) -> Option<&InstalledPackage> {
		self.state.installed.get(identifier)
	}

	pub fn installed_packages(&self) -> Vec<&InstalledPackage> {
		self.state.installed.values().collect()
	}

	/// Check if a name is installed, whether as a package, as a virtual name
	/// provided by an installed package, or as a detected DLL.
	pub fn is_installed(&self, name: &str) -> bool {
		self.state.installed.contains_key(name)
			|| self.state.dlls.contains_key(name)
			|| self.state.installed.values().any(|i| i.package.provides.contains(name))
	}

	/* Detected DLLs */

	/// Registers a loose DLL found in the game directory, giving unmanaged
	/// installs a say in dependency checks.
	///
	/// Only paths of the form `GameData/**/<name>.dll` count, with `<name>`
	/// cut at the first dot so versioned file names collapse to one name.
	/// Returns the registered name, or `None` (with a warning logged) for
	/// paths that don't look like a game DLL.
	pub fn register_dll(&mut self, path: &str) -> Option<String> {
		let regex = regex::Regex::new(r"(?i)(?:^|/)gamedata/((?:.*/)?([^.]+)[^/]*\.dll)$")
			.expect("compiled regex should always be valid");

		match regex.captures(path) {
			Some(captures) => {
				let rel_path = captures.get(1).map(|m| m.as_str().to_string())?;
				let name = captures.get(2).map(|m| m.as_str().to_string())?;
				log::info!("registering {} -> {}", name, rel_path);
				/* We're fine if we overwrite an existing key. */
				self.state.dlls.insert(name.clone(), rel_path);
				Some(name)
			}
			None => {
				log::warn!("attempted to index {} which is not a game dll", path);
				None
			}
		}
	}

	pub fn has_dll(&self, name: &str) -> bool {
		self.state.dlls.contains_key(name)
	}

	pub fn clear_dlls(&mut self) {
		self.state.dlls.clear();
	}

	/* Consistency */

	fn installed_sources(&self) -> Vec<Package> {
		self.state.installed.values().map(|i| i.package.clone()).collect()
	}

	/// The names of every detected DLL.
	pub fn dll_names(&self) -> HashSet<String> {
		self.state.dlls.keys().cloned().collect()
	}

	/// Checks the sanity of the registry, to ensure that all dependencies of
	/// installed packages are met, and none of them conflict.
	///
	/// # Errors
	/// [`Inconsistent`](crate::Error::Inconsistent) listing every finding.
	pub fn check_sanity(&self) -> crate::Result<()> {
		sanity::enforce_consistency(&self.installed_sources(), &self.dll_names())
	}

	/// Finds all installed packages that could not exist without the listed
	/// ones, including themselves.
	pub fn find_reverse_dependencies(&self, to_remove: &HashSet<String>) -> HashSet<String> {
		sanity::find_reverse_dependencies(to_remove, &self.installed_sources(), &self.dll_names())
	}

	/* Persistence */

	/// Writes the registry to a snapshot file.
	///
	/// # Errors
	/// - [`Transaction`](crate::Error::Transaction) when a transaction is open,
	/// a half-done state shouldn't outlive the process.
	/// - [`IO`](crate::Error::IO) when creating or writing the file.
	/// - [`Bincode`](crate::Error::Bincode) when serializing.
	pub fn save_to_file(&self, path: impl AsRef<Path>) -> crate::Result<()> {
		if self.transaction_backup.is_some() {
			return Err(crate::Error::Transaction("refusing to snapshot the registry during an open transaction".to_string()));
		}
		let file = std::fs::File::create(path)?;
		bincode::serialize_into(file, &self.state)?;
		Ok(())
	}

	/// Reads a registry back from a snapshot file.
	///
	/// # Errors
	/// - [`IO`](crate::Error::IO) when opening or reading the file.
	/// - [`Bincode`](crate::Error::Bincode) when deserializing.
	pub fn load_from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
		let file = std::fs::File::open(path)?;
		Ok(Registry {
			state: bincode::deserialize_from(file)?,
			transaction_backup: None,
		})
	}
}
