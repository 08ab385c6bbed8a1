//! Sanity checks on what packages we have installed, or may install.
//!
//! These checks are pure functions over explicit package lists so they can be
//! run against real installed state, hypothetical states during resolution, or
//! anything in between. Dependency and conflict checks go by name only,
//! version constraints are not examined here.

use std::collections::{HashMap, HashSet};

use crate::package::Package;

/// Builds a map of which names are provided by which packages.
///
/// Every package provides its own identifier plus its `provides` list, so a
/// key can have several providers.
pub fn packages_to_provides(packages: &[Package]) -> HashMap<String, Vec<String>> {
	let mut providers = HashMap::<String, Vec<String>>::new();
	for package in packages {
		providers.entry(package.identifier.clone()).or_default().push(package.identifier.clone());
		for name in &package.provides {
			log::debug!("{} provides {}", package, name);
			providers.entry(name.clone()).or_default().push(package.identifier.clone());
		}
	}
	providers
}

/// A detected DLL counts as providing its own name, nothing more.
fn providers_with_dlls(packages: &[Package], dlls: &HashSet<String>) -> HashMap<String, Vec<String>> {
	let mut providers = packages_to_provides(packages);
	for dll in dlls {
		providers.entry(dll.clone()).or_default().push(dll.clone());
	}
	providers
}

/// Checks the list of packages for consistency errors, returning a list of
/// errors found. The list will be empty if everything is fine.
pub fn consistency_errors(packages: &[Package], dlls: &HashSet<String>) -> Vec<String> {
	let mut errors = Vec::new();

	let providers = providers_with_dlls(packages, dlls);

	/* Walk everything we depend upon, and make sure it's there. */
	for package in packages {
		for dep in &package.depends {
			if !providers.contains_key(&dep.name) {
				errors.push(format!("{} requires {}, but nothing provides it.", package.identifier, dep.name));
			}
		}
	}

	/* Conflicts are more difficult. Packages are allowed to conflict with
	 * themselves, which happens whenever one provides the name it conflicts
	 * with. So walk every conflict, find what provides that name, and only
	 * report providers other than the package we're examining. */
	for package in packages {
		for conflict in &package.conflicts {
			if let Some(conflict_providers) = providers.get(&conflict.name) {
				for provider in conflict_providers {
					if provider != &package.identifier {
						errors.push(format!("{} conflicts with {}.", package.identifier, provider));
					}
				}
			}
		}
	}

	errors
}

/// Returns true if the packages supplied can co-exist.
pub fn is_consistent(packages: &[Package], dlls: &HashSet<String>) -> bool {
	consistency_errors(packages, dlls).is_empty()
}

/// Ensures all packages in the list provided can co-exist.
///
/// # Errors
/// [`Inconsistent`](crate::Error::Inconsistent) carrying every finding when
/// they can not.
pub fn enforce_consistency(packages: &[Package], dlls: &HashSet<String>) -> crate::Result<()> {
	let errors = consistency_errors(packages, dlls);
	if errors.is_empty() {
		Ok(())
	} else {
		Err(crate::Error::Inconsistent(errors))
	}
}

/// Finds dependencies nothing in the list provides.
///
/// Keys are the missing names, values the packages depending on them.
pub fn find_unmet_dependencies<'a>(packages: &'a [Package], dlls: &HashSet<String>) -> HashMap<String, Vec<&'a Package>> {
	let providers = providers_with_dlls(packages, dlls);

	let mut unmet = HashMap::<String, Vec<&Package>>::new();
	for package in packages {
		for dep in &package.depends {
			if !providers.contains_key(&dep.name) {
				unmet.entry(dep.name.clone()).or_default().push(package);
			}
		}
	}
	unmet
}

/// Finds all packages that could not exist without `to_remove`.
///
/// Takes away the removal set, collects everything whose dependencies went
/// unmet, and repeats until the set stops growing. The result always contains
/// the names asked about, whether installed or not.
pub fn find_reverse_dependencies(to_remove: &HashSet<String>, installed: &[Package], dlls: &HashSet<String>) -> HashSet<String> {
	let mut to_remove = to_remove.clone();
	loop {
		/* Pretend the current removal set is gone and see what breaks. */
		let hypothetical = installed.iter()
			.filter(|p| !to_remove.contains(&p.identifier))
			.cloned()
			.collect::<Vec<_>>();

		let broken = find_unmet_dependencies(&hypothetical, dlls)
			.into_values()
			.flatten()
			.map(|p| p.identifier.clone())
			.collect::<HashSet<_>>();

		if broken.is_subset(&to_remove) {
			log::debug!("reverse dependencies settled on {}", to_remove.iter().cloned().collect::<Vec<_>>().join(", "));
			return to_remove;
		}
		to_remove.extend(broken);
	}
}
