//! Resolution of package relationships into an installable change set.
//!
//! # Usage
//! 1. Create a [`RelationshipResolver`] over a [`Registry`].
//! 2. Optionally call [`RelationshipResolver::remove_installed()`] when
//! planning an upgrade or removal.
//! 3. Call [`RelationshipResolver::resolve()`] with the requested packages
//! to get a [`ChangeSet`].
//! 4. Query the change set, or hand [`ChangeSet::in_install_order()`] to an
//! install executor.
//!
//! Resolution works a FIFO queue of relationship descriptors. Every request
//! enters the queue before any expansion happens, so user supplied packages
//! claim provides names ahead of anything pulled in transitively.

use std::collections::{HashMap, VecDeque};

use crate::compatibility::GameComparator;
use crate::package::{GameVersion, Package, PackageDescriptor, PackageIdentifier, PackageVersionBounds};
use crate::registry::Registry;
use crate::sanity;

mod change_set;
pub use change_set::ChangeSet;
pub use change_set::ChangeSetEntry;
pub use change_set::SelectionReason;

/// Tuning knobs for a resolution pass.
#[derive(Debug, Clone, Copy)]
pub struct ResolverOptions {
	/// Add recommended packages, and their recommendations.
	pub with_recommends: bool,
	/// Add suggested packages, but not what they suggest in turn.
	pub with_suggests: bool,
	/// Add suggested packages and their suggestions, all the way down.
	pub with_all_suggests: bool,
	/// Settle an ambiguous virtual package on the alphabetically first
	/// provider instead of failing.
	pub without_toomanyprovides_kraken: bool,
	/// Skip the final consistency pass. Such resolutions can't actually be
	/// installed, this mostly serves to report failures back to a user.
	pub without_enforce_consistency: bool,
	/// Record conflicts on the change set instead of failing on them.
	pub procede_with_inconsistencies: bool,
}

impl Default for ResolverOptions {
	fn default() -> Self {
		ResolverOptions {
			with_recommends: true,
			with_suggests: false,
			with_all_suggests: false,
			without_toomanyprovides_kraken: false,
			without_enforce_consistency: false,
			procede_with_inconsistencies: false,
		}
	}
}

/// One queued descriptor waiting to be settled.
#[derive(Debug)]
struct WorkItem {
	descriptor: PackageDescriptor,
	reason: SelectionReason,
	/// A soft item that can't be settled is dropped instead of failing the
	/// resolution. Recommendations and suggestions are soft.
	soft: bool,
	/// The option set governing the expansion of whatever this item selects.
	options: ResolverOptions,
	/// The relationship list the descriptor appeared in, consulted to settle
	/// ambiguous provides.
	stanza: Vec<PackageDescriptor>,
}

/// Expands requested packages into the full set needed to install them.
///
/// The resolver works against a fixed view of the world: the registry's
/// catalog, its installed packages and detected DLLs, and one set of game
/// version criteria. Resolution never mutates the registry, it only returns
/// a plan.
pub struct RelationshipResolver<'r> {
	registry: &'r Registry,
	criteria: Vec<GameVersion>,
	comparator: &'r dyn GameComparator,
	options: ResolverOptions,

	installed: Vec<Package>,
	queue: VecDeque<WorkItem>,
	/* Keys are names: identifiers and claimed provides aliases both. */
	modlist: HashMap<String, Package>,
	reasons: HashMap<String, SelectionReason>,
	conflicts: Vec<(PackageIdentifier, PackageIdentifier)>,
	inconsistencies: Vec<String>,
}

impl<'r> RelationshipResolver<'r> {
	pub fn new(registry: &'r Registry, criteria: &[GameVersion], comparator: &'r dyn GameComparator, options: ResolverOptions) -> Self {
		RelationshipResolver {
			registry,
			criteria: criteria.to_vec(),
			comparator,
			options,
			installed: registry.installed_packages().into_iter().map(|i| i.package.clone()).collect(),
			queue: VecDeque::new(),
			modlist: HashMap::new(),
			reasons: HashMap::new(),
			conflicts: Vec::new(),
			inconsistencies: Vec::new(),
		}
	}

	/// Resolve as if the given packages were not installed. Meant for
	/// planning upgrades and removals.
	pub fn remove_installed(&mut self, identifiers: &[&str]) {
		self.installed.retain(|package| !identifiers.contains(&package.identifier.as_str()));
	}

	/// Runs the resolution to completion.
	///
	/// An empty request always succeeds with an empty change set.
	///
	/// # Errors
	/// - [`ModuleNotFound`](crate::Error::ModuleNotFound) when a hard
	/// dependency has no provider under the current criteria.
	/// - [`TooManyProvides`](crate::Error::TooManyProvides) when a virtual
	/// name stays ambiguous after disambiguation.
	/// - [`Inconsistent`](crate::Error::Inconsistent) when packages that
	/// have to coexist conflict, unless `procede_with_inconsistencies`
	/// records it on the change set instead.
	pub fn resolve(mut self, requested: &[PackageDescriptor]) -> crate::Result<ChangeSet> {
		log::debug!("processing relationships for {} packages", requested.len());

		if requested.is_empty() {
			return Ok(self.into_change_set());
		}

		for descriptor in requested {
			self.queue.push_back(WorkItem {
				descriptor: descriptor.clone(),
				reason: SelectionReason::UserRequested,
				soft: false,
				options: self.options,
				stanza: requested.to_vec(),
			});
		}

		while let Some(item) = self.queue.pop_front() {
			self.process(item)?;
		}

		if !self.options.without_enforce_consistency {
			self.enforce_final_consistency()?;
		}

		Ok(self.into_change_set())
	}

	/// Settles one queued descriptor. May push the expansion of whatever
	/// package it selects back onto the queue.
	fn process(&mut self, item: WorkItem) -> crate::Result<()> {
		let name = item.descriptor.name.clone();
		log::debug!("considering {}", name);

		/* Covered by something already in the change set? */
		if let Some(existing) = self.modlist.get(&name).cloned() {
			if item.descriptor.version.is_version_within(&existing.version) {
				return Ok(());
			}
			return self.version_clash(&item, &existing, "is in the resolver");
		}

		/* Covered by something already on the machine? */
		if let Some(installed) = self.installed_satisfying(&name).cloned() {
			if item.descriptor.version.is_version_within(&installed.version) {
				return Ok(());
			}
			return self.version_clash(&item, &installed, "is already installed");
		}
		/* A detected DLL has no version to check, it only satisfies
		 * unconstrained descriptors. */
		if item.descriptor.version == PackageVersionBounds::Any && self.registry.has_dll(&name) {
			return Ok(());
		}

		let candidate = match self.select_candidate(&item)? {
			Some(candidate) => candidate,
			None => return Ok(()),
		};

		/* Check the candidate against everything fixed in place so far. */
		let blocking = self.modlist.values()
			.chain(self.installed.iter())
			.find(|fixed| Package::do_packages_conflict(fixed, &candidate))
			.cloned();

		match blocking {
			None => {
				self.add(&candidate, &item.reason);
				self.expand(&candidate, item.options);
			}
			Some(_) if item.soft => {
				log::info!("{} would cause conflicts, excluding it from consideration", candidate);
			}
			Some(blocking) => {
				if self.options.procede_with_inconsistencies {
					self.record_conflict((&blocking).into(), (&candidate).into());
					self.add(&candidate, &item.reason);
					self.expand(&candidate, item.options);
				} else {
					return Err(crate::Error::Inconsistent(vec![
						format!("{} conflicts with {}, can't install both.", blocking, candidate),
					]));
				}
			}
		}
		Ok(())
	}

	/// Picks the package to satisfy a descriptor. `None` means a soft item
	/// or a tolerated ambiguity was dropped.
	fn select_candidate(&self, item: &WorkItem) -> crate::Result<Option<Package>> {
		let name = &item.descriptor.name;

		/* Requested packages are taken at face value, problems in their
		 * dependencies surface during expansion under their own names. */
		let screened = item.reason != SelectionReason::UserRequested;
		let mut candidates = self.registry
			.latest_available_with_provides(name, &self.criteria, self.comparator)
			.into_iter()
			.filter(|package| item.descriptor.version.is_version_within(&package.version))
			.filter(|package| !screened || self.might_be_installable(package, &mut Vec::new()))
			.collect::<Vec<_>>();
		candidates.sort_by(|a, b| a.identifier.cmp(&b.identifier));

		if candidates.is_empty() {
			if item.soft {
				log::info!("{} is recommended/suggested but it is not in the catalog, or not compatible with the game version", name);
				return Ok(None);
			}
			log::error!("dependency on {} found but it is not in the catalog, or not compatible with the game version", name);
			return Err(crate::Error::ModuleNotFound(name.clone()));
		}

		if candidates.len() > 1 {
			/* An exact identifier match outranks packages merely providing
			 * the name. */
			if let Some(exact) = candidates.iter().find(|package| &package.identifier == name) {
				return Ok(Some((*exact).clone()));
			}
			/* A sibling relationship naming one candidate outright settles
			 * the choice. */
			let named = candidates.iter()
				.filter(|package| item.stanza.iter().any(|relation| relation.name == package.identifier))
				.collect::<Vec<_>>();
			if named.len() == 1 {
				return Ok(Some((*named[0]).clone()));
			}
			if self.options.without_toomanyprovides_kraken {
				log::info!("{} is provided by several packages, settling on {}", name, candidates[0].identifier);
				return Ok(Some(candidates[0].clone()));
			}
			return Err(crate::Error::TooManyProvides {
				name: name.clone(),
				providers: candidates.iter().map(|package| package.identifier.clone()).collect(),
			});
		}

		Ok(Some(candidates[0].clone()))
	}

	/// Whether the package's hard dependencies could be satisfied at all
	/// under the current criteria. `assumed` carries identifiers taken as
	/// installable to cut dependency cycles.
	fn might_be_installable(&self, package: &Package, assumed: &mut Vec<String>) -> bool {
		if package.depends.is_empty() {
			return true;
		}
		if assumed.contains(&package.identifier) {
			return true;
		}
		assumed.push(package.identifier.clone());
		let installable = package.depends.iter().all(|dep| {
			self.descriptor_presatisfied(dep)
				|| self.registry
					.latest_available_with_provides(&dep.name, &self.criteria, self.comparator)
					.iter()
					.any(|candidate| self.might_be_installable(candidate, assumed))
		});
		assumed.pop();
		installable
	}

	/// Whether a descriptor is already satisfied outside the catalog, by an
	/// installed package within its bounds or by a detected DLL.
	fn descriptor_presatisfied(&self, descriptor: &PackageDescriptor) -> bool {
		if let Some(installed) = self.installed_satisfying(&descriptor.name) {
			return descriptor.version.is_version_within(&installed.version);
		}
		descriptor.version == PackageVersionBounds::Any && self.registry.has_dll(&descriptor.name)
	}

	/// A descriptor hit a name the resolution can no longer change, at a
	/// version outside its bounds.
	fn version_clash(&mut self, item: &WorkItem, blocking: &Package, placement: &str) -> crate::Result<()> {
		let message = format!(
			"{} requires a version {}. However a incompatible version, {}, {}",
			item.descriptor.name, item.descriptor.version, blocking.version, placement,
		);
		if self.options.procede_with_inconsistencies {
			match item.reason.parent() {
				Some(parent) => self.record_conflict(blocking.into(), parent.clone()),
				None => self.inconsistencies.push(message),
			}
			return Ok(());
		}
		Err(crate::Error::Inconsistent(vec![message]))
	}

	/* (a, b) in the conflict list implies (b, a), callers record one way. */
	fn record_conflict(&mut self, a: PackageIdentifier, b: PackageIdentifier) {
		self.conflicts.push((a.clone(), b.clone()));
		self.conflicts.push((b, a));
	}

	/// Adds a package to the working set under the first reason that
	/// selected it, and claims its provides names.
	fn add(&mut self, package: &Package, reason: &SelectionReason) {
		log::debug!("adding {}", package);
		self.modlist.insert(package.identifier.clone(), package.clone());
		self.reasons.entry(package.identifier.clone()).or_insert_with(|| reason.clone());

		/* An alias already claimed by an earlier package stays claimed. */
		for alias in &package.provides {
			if !self.modlist.contains_key(alias) {
				log::debug!("adding {} providing {}", package.identifier, alias);
				self.modlist.insert(alias.clone(), package.clone());
			}
		}
	}

	/// Queues the relationships of a freshly selected package.
	///
	/// Suggestions are only followed one level deep unless
	/// `with_all_suggests` keeps them on for the whole tree.
	fn expand(&mut self, package: &Package, options: ResolverOptions) {
		let parent = PackageIdentifier::from(package);
		let mut sub_options = options;
		sub_options.with_suggests = false;

		log::debug!("resolving dependencies for {}", package.identifier);
		self.enqueue_stanza(&package.depends, SelectionReason::Depends(parent.clone()), false, sub_options);

		if options.with_recommends {
			log::debug!("resolving recommends for {}", package.identifier);
			self.enqueue_stanza(&package.recommends, SelectionReason::Recommended(parent.clone()), true, sub_options);
		}
		if options.with_suggests || options.with_all_suggests {
			log::debug!("resolving suggests for {}", package.identifier);
			self.enqueue_stanza(&package.suggests, SelectionReason::Suggested(parent), true, sub_options);
		}
	}

	fn enqueue_stanza(&mut self, stanza: &[PackageDescriptor], reason: SelectionReason, soft: bool, options: ResolverOptions) {
		for descriptor in stanza {
			self.queue.push_back(WorkItem {
				descriptor: descriptor.clone(),
				reason: reason.clone(),
				soft,
				options,
				stanza: stanza.to_vec(),
			});
		}
	}

	fn installed_satisfying(&self, name: &str) -> Option<&Package> {
		self.installed.iter().find(|package| package.identifier == name || package.provides.contains(name))
	}

	/// The change set and the installed state have to make sense as one
	/// installation.
	fn enforce_final_consistency(&mut self) -> crate::Result<()> {
		let mut final_packages = Vec::new();
		for (name, package) in &self.modlist {
			if name == &package.identifier {
				final_packages.push(package.clone());
			}
		}
		final_packages.extend(self.installed.iter().cloned());

		match sanity::enforce_consistency(&final_packages, &self.registry.dll_names()) {
			Err(crate::Error::Inconsistent(errors)) if self.options.procede_with_inconsistencies => {
				for error in &errors {
					log::warn!("resolution finished inconsistent: {}", error);
				}
				self.inconsistencies.extend(errors);
				Ok(())
			}
			result => result,
		}
	}

	fn into_change_set(self) -> ChangeSet {
		let mut reasons = self.reasons;
		let mut entries = Vec::new();
		for (name, package) in self.modlist {
			/* Alias rows duplicate their package under its provides names. */
			if name != package.identifier {
				continue;
			}
			let reason = reasons.remove(&package.identifier).unwrap_or(SelectionReason::UserRequested);
			entries.push(ChangeSetEntry { package, reason });
		}
		let installed = self.installed.iter().map(PackageIdentifier::from).collect();
		ChangeSet::new(entries, installed, self.conflicts, self.inconsistencies)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::compatibility::StrictGameComparator;
	use crate::package::{Kind, PackageVersion, VersionBounds};
	use crate::test_data::{dep, package};

	fn catalog(packages: Vec<Package>) -> Registry {
		let mut registry = Registry::new();
		for package in packages {
			registry.add_available(package);
		}
		registry
	}

	fn resolve(registry: &Registry, requested: &[PackageDescriptor]) -> crate::Result<ChangeSet> {
		resolve_with(registry, requested, ResolverOptions::default())
	}

	fn resolve_with(registry: &Registry, requested: &[PackageDescriptor], options: ResolverOptions) -> crate::Result<ChangeSet> {
		RelationshipResolver::new(registry, &[], &StrictGameComparator, options).resolve(requested)
	}

	fn min_version(name: &str, version: &str) -> PackageDescriptor {
		PackageDescriptor::new(name, VersionBounds::MinOnly(PackageVersion::new(version)))
	}

	#[test]
	fn resolver_empty_request_yields_empty_change_set() {
		let change_set = resolve(&catalog(vec![]), &[]).unwrap();
		assert!(change_set.is_empty());
	}

	#[test]
	fn resolver_diamond_dependency_resolves_each_package_once() {
		let registry = catalog(vec![
			Package { depends: vec![dep("B"), dep("C")], ..package("A", "1.0") },
			Package { depends: vec![dep("D")], ..package("B", "1.0") },
			Package { depends: vec![dep("D")], ..package("C", "1.0") },
			package("D", "1.0"),
		]);
		let change_set = resolve(&registry, &[dep("A")]).unwrap();
		assert_eq!(change_set.len(), 4);
		assert!(change_set.contains("D"));
	}

	#[test]
	fn resolver_requested_conflict_is_inconsistent() {
		let registry = catalog(vec![
			Package { conflicts: vec![dep("Y")], ..package("X", "1.0") },
			package("Y", "1.0"),
		]);
		assert!(matches!(resolve(&registry, &[dep("X"), dep("Y")]), Err(crate::Error::Inconsistent(_))));
	}

	#[test]
	fn resolver_ambiguous_provides_fails_by_default() {
		let registry = catalog(vec![
			Package { provides: ["Q".to_string()].into(), ..package("P1", "1.0") },
			Package { provides: ["Q".to_string()].into(), ..package("P2", "1.0") },
		]);
		assert!(matches!(resolve(&registry, &[dep("Q")]), Err(crate::Error::TooManyProvides { .. })));
	}

	#[test]
	fn resolver_tolerant_ambiguity_picks_alphabetically() {
		let registry = catalog(vec![
			Package { provides: ["Q".to_string()].into(), ..package("P2", "1.0") },
			Package { provides: ["Q".to_string()].into(), ..package("P1", "1.0") },
		]);
		let options = ResolverOptions { without_toomanyprovides_kraken: true, ..Default::default() };
		let change_set = resolve_with(&registry, &[dep("Q")], options).unwrap();
		assert!(change_set.contains("P1"));
		assert!(!change_set.contains("P2"));
	}

	#[test]
	fn resolver_exact_identifier_outranks_providers() {
		let registry = catalog(vec![
			package("Q", "1.0"),
			Package { provides: ["Q".to_string()].into(), ..package("P", "1.0") },
			Package { depends: vec![dep("Q")], ..package("A", "1.0") },
		]);
		let change_set = resolve(&registry, &[dep("A")]).unwrap();
		assert!(change_set.contains("Q"));
		assert!(!change_set.contains("P"));
	}

	#[test]
	fn resolver_sibling_relationship_settles_ambiguity() {
		let registry = catalog(vec![
			Package { provides: ["Q".to_string()].into(), ..package("P1", "1.0") },
			Package { provides: ["Q".to_string()].into(), ..package("P2", "1.0") },
			Package { depends: vec![dep("Q"), dep("P2")], ..package("A", "1.0") },
		]);
		let change_set = resolve(&registry, &[dep("A")]).unwrap();
		assert!(change_set.contains("P2"));
		assert!(!change_set.contains("P1"));
	}

	#[test]
	fn resolver_installed_packages_satisfy_dependencies() {
		let mut registry = catalog(vec![Package { depends: vec![dep("B")], ..package("A", "1.0") }]);
		registry.register_installed(package("B", "1.0"), false);
		let change_set = resolve(&registry, &[dep("A")]).unwrap();
		assert_eq!(change_set.len(), 1);
		assert_eq!(change_set.reason_for("B"), Some(SelectionReason::Installed));
	}

	#[test]
	fn resolver_installed_version_clash_is_inconsistent() {
		let mut registry = catalog(vec![
			Package { depends: vec![min_version("B", "2.0")], ..package("A", "1.0") },
		]);
		registry.register_installed(package("B", "1.0"), false);
		assert!(matches!(resolve(&registry, &[dep("A")]), Err(crate::Error::Inconsistent(_))));
	}

	#[test]
	fn resolver_procede_records_the_clash_instead() {
		let mut registry = catalog(vec![
			Package { depends: vec![min_version("B", "2.0")], ..package("A", "1.0") },
		]);
		registry.register_installed(package("B", "1.0"), false);
		let options = ResolverOptions { procede_with_inconsistencies: true, ..Default::default() };
		let change_set = resolve_with(&registry, &[dep("A")], options).unwrap();
		assert!(!change_set.is_consistent());
		assert!(change_set.contains("A"));
	}

	#[test]
	fn resolver_missing_recommendation_is_not_fatal() {
		let registry = catalog(vec![Package { recommends: vec![dep("Absent")], ..package("A", "1.0") }]);
		let change_set = resolve(&registry, &[dep("A")]).unwrap();
		assert_eq!(change_set.len(), 1);
	}

	#[test]
	fn resolver_missing_dependency_is_fatal() {
		let registry = catalog(vec![Package { depends: vec![dep("Absent")], ..package("A", "1.0") }]);
		assert!(matches!(resolve(&registry, &[dep("A")]), Err(crate::Error::ModuleNotFound(_))));
	}

	#[test]
	fn resolver_recommends_can_be_disabled() {
		let registry = catalog(vec![
			Package { recommends: vec![dep("B")], ..package("A", "1.0") },
			package("B", "1.0"),
		]);
		let options = ResolverOptions { with_recommends: false, ..Default::default() };
		let change_set = resolve_with(&registry, &[dep("A")], options).unwrap();
		assert!(!change_set.contains("B"));
	}

	#[test]
	fn resolver_suggestions_only_go_one_level_deep() {
		let registry = catalog(vec![
			Package { suggests: vec![dep("B")], ..package("A", "1.0") },
			Package { suggests: vec![dep("C")], ..package("B", "1.0") },
			package("C", "1.0"),
		]);
		let options = ResolverOptions { with_suggests: true, ..Default::default() };
		let change_set = resolve_with(&registry, &[dep("A")], options).unwrap();
		assert!(change_set.contains("B"));
		assert!(!change_set.contains("C"));
	}

	#[test]
	fn resolver_all_suggests_follows_the_whole_tree() {
		let registry = catalog(vec![
			Package { suggests: vec![dep("B")], ..package("A", "1.0") },
			Package { suggests: vec![dep("C")], ..package("B", "1.0") },
			package("C", "1.0"),
		]);
		let options = ResolverOptions { with_all_suggests: true, ..Default::default() };
		let change_set = resolve_with(&registry, &[dep("A")], options).unwrap();
		assert!(change_set.contains("C"));
	}

	#[test]
	fn resolver_conflicting_recommendation_is_skipped() {
		let registry = catalog(vec![
			Package { recommends: vec![dep("B")], ..package("A", "1.0") },
			Package { conflicts: vec![dep("A")], ..package("B", "1.0") },
		]);
		let change_set = resolve(&registry, &[dep("A")]).unwrap();
		assert_eq!(change_set.len(), 1);
	}

	#[test]
	fn resolver_metapackages_ride_along_for_their_relationships() {
		let registry = catalog(vec![
			Package { kind: Kind::MetaPackage, download: None, depends: vec![dep("Real")], ..package("Meta", "1.0") },
			package("Real", "1.0"),
		]);
		let change_set = resolve(&registry, &[dep("Meta")]).unwrap();
		assert!(change_set.contains("Real"));
		/* The entry keeps its kind, executors know to skip its content. */
		let meta = change_set.entries().iter().find(|e| e.package.identifier == "Meta").unwrap();
		assert_eq!(meta.package.kind, Kind::MetaPackage);
	}

	#[test]
	fn resolver_dependency_on_a_metapackage_stays_consistent() {
		let registry = catalog(vec![
			Package { depends: vec![dep("Meta")], ..package("A", "1.0") },
			Package { kind: Kind::MetaPackage, download: None, depends: vec![dep("Real")], ..package("Meta", "1.0") },
			package("Real", "1.0"),
		]);
		let change_set = resolve(&registry, &[dep("A")]).unwrap();
		assert_eq!(change_set.len(), 3);
	}

	#[test]
	fn resolver_remove_installed_replans_the_package() {
		let mut registry = catalog(vec![
			Package { depends: vec![dep("B")], ..package("A", "1.0") },
			package("B", "2.0"),
		]);
		registry.register_installed(package("B", "1.0"), true);
		let mut resolver = RelationshipResolver::new(&registry, &[], &StrictGameComparator, ResolverOptions::default());
		resolver.remove_installed(&["B"]);
		let change_set = resolver.resolve(&[dep("A")]).unwrap();
		assert!(change_set.contains("B"));
		assert!(matches!(change_set.reason_for("B"), Some(SelectionReason::Depends(_))));
	}

	#[test]
	fn resolver_dll_satisfies_only_unbounded_descriptors() {
		let mut registry = catalog(vec![
			Package { depends: vec![dep("Loose")], ..package("A", "1.0") },
			Package { depends: vec![min_version("Loose", "1.0")], ..package("B", "1.0") },
		]);
		registry.register_dll("GameData/Loose.dll");
		assert!(resolve(&registry, &[dep("A")]).is_ok());
		assert!(matches!(resolve(&registry, &[dep("B")]), Err(crate::Error::ModuleNotFound(_))));
	}

	#[test]
	fn resolver_requested_bounds_filter_candidates() {
		let registry = catalog(vec![package("A", "2.0")]);
		assert!(matches!(resolve(&registry, &[min_version("A", "3.0")]), Err(crate::Error::ModuleNotFound(_))));
	}

	#[test]
	fn resolver_uninstallable_provider_is_passed_over() {
		let registry = catalog(vec![
			Package { provides: ["Q".to_string()].into(), depends: vec![dep("Gone")], ..package("P1", "1.0") },
			Package { provides: ["Q".to_string()].into(), ..package("P2", "1.0") },
			Package { depends: vec![dep("Q")], ..package("A", "1.0") },
		]);
		let change_set = resolve(&registry, &[dep("A")]).unwrap();
		assert!(change_set.contains("P2"));
	}
}
