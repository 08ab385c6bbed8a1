use std::collections::HashMap;

use petgraph::prelude::*;

use crate::package::relationship::does_package_provide_descriptor;
use crate::package::{Package, PackageIdentifier};

/// Why a package ended up in the change set.
///
/// `Installed` is never attached to an entry, installed packages are fixed
/// context rather than plan items, but [`ChangeSet::reason_for`] can still
/// answer for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionReason {
	Installed,
	UserRequested,
	Depends(PackageIdentifier),
	Recommended(PackageIdentifier),
	Suggested(PackageIdentifier),
}

impl SelectionReason {
	/// The package whose relationships pulled this entry in, when there is one.
	pub fn parent(&self) -> Option<&PackageIdentifier> {
		match self {
			SelectionReason::Installed | SelectionReason::UserRequested => None,
			SelectionReason::Depends(parent)
			| SelectionReason::Recommended(parent)
			| SelectionReason::Suggested(parent) => Some(parent),
		}
	}
}

impl std::fmt::Display for SelectionReason {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			SelectionReason::Installed => write!(f, "Currently installed."),
			SelectionReason::UserRequested => write!(f, "Requested by user."),
			SelectionReason::Depends(parent) => write!(f, "To satisfy dependency from {}.", parent),
			SelectionReason::Recommended(parent) => write!(f, "Recommended by {}.", parent),
			SelectionReason::Suggested(parent) => write!(f, "Suggested by {}.", parent),
		}
	}
}

/// A package to install together with why it was selected.
#[derive(Debug, Clone)]
pub struct ChangeSetEntry {
	pub package: Package,
	pub reason: SelectionReason,
}

/// The outcome of a resolution.
///
/// Entries are the packages to install; already installed packages never
/// appear among them. When the resolver ran with
/// `procede_with_inconsistencies` the recorded conflicts and consistency
/// findings ride along instead of failing the resolution.
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
	entries: Vec<ChangeSetEntry>,
	installed: Vec<PackageIdentifier>,
	conflicts: Vec<(PackageIdentifier, PackageIdentifier)>,
	inconsistencies: Vec<String>,
}

impl ChangeSet {
	pub(super) fn new(
		mut entries: Vec<ChangeSetEntry>,
		installed: Vec<PackageIdentifier>,
		conflicts: Vec<(PackageIdentifier, PackageIdentifier)>,
		inconsistencies: Vec<String>,
	) -> Self {
		entries.sort_by(|a, b| a.package.identifier.cmp(&b.package.identifier));
		ChangeSet { entries, installed, conflicts, inconsistencies }
	}

	pub fn entries(&self) -> &[ChangeSetEntry] {
		&self.entries
	}

	pub fn packages(&self) -> impl Iterator<Item = &Package> {
		self.entries.iter().map(|entry| &entry.package)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn contains(&self, identifier: &str) -> bool {
		self.entries.iter().any(|entry| entry.package.identifier == identifier)
	}

	/// Why `identifier` is part of the resolution, covering both entries and
	/// the installed packages the resolution was planned around.
	pub fn reason_for(&self, identifier: &str) -> Option<SelectionReason> {
		self.entries.iter()
			.find(|entry| entry.package.identifier == identifier)
			.map(|entry| entry.reason.clone())
			.or_else(|| {
				self.installed.iter()
					.any(|installed| installed.identifier == identifier)
					.then_some(SelectionReason::Installed)
			})
	}

	/// Conflicting pairs recorded while proceding with inconsistencies.
	/// `(a, b)` in the list implies `(b, a)` is in the list.
	pub fn conflicts(&self) -> &[(PackageIdentifier, PackageIdentifier)] {
		&self.conflicts
	}

	/// Findings of the final consistency pass when it was told not to fail.
	pub fn inconsistencies(&self) -> &[String] {
		&self.inconsistencies
	}

	/// Whether the change set can actually be installed.
	pub fn is_consistent(&self) -> bool {
		self.conflicts.is_empty() && self.inconsistencies.is_empty()
	}

	/// Entries ordered so every package comes after the packages it depends
	/// on. A dependency cycle is emitted as one alphabetical group, and
	/// alphabetical order also breaks ties between unrelated packages.
	pub fn in_install_order(&self) -> Vec<&ChangeSetEntry> {
		let mut graph = DiGraph::<usize, ()>::new();
		let nodes = (0..self.entries.len()).map(|index| graph.add_node(index)).collect::<Vec<_>>();

		/* Edges point from a dependency to the entry needing it. */
		for (dependent, entry) in self.entries.iter().enumerate() {
			for descriptor in &entry.package.depends {
				for (dependency, other) in self.entries.iter().enumerate() {
					if dependency != dependent && does_package_provide_descriptor(&other.package, descriptor) {
						graph.add_edge(nodes[dependency], nodes[dependent], ());
					}
				}
			}
		}

		let condensed = petgraph::algo::condensation(graph, true);

		let keys = condensed.node_indices()
			.map(|node| {
				let first = condensed[node].iter()
					.map(|&index| self.entries[index].package.identifier.as_str())
					.min()
					.unwrap_or_default();
				(node, first)
			})
			.collect::<HashMap<_, _>>();

		let mut incoming = condensed.node_indices()
			.map(|node| (node, condensed.neighbors_directed(node, Incoming).count()))
			.collect::<HashMap<_, _>>();

		let mut ready = incoming.iter()
			.filter(|(_, &count)| count == 0)
			.map(|(&node, _)| node)
			.collect::<Vec<_>>();

		let mut order = Vec::with_capacity(self.entries.len());
		loop {
			/* Always take the alphabetically first ready component. */
			let next = match ready.iter().min_by_key(|&&node| keys[&node]) {
				Some(&node) => node,
				None => break,
			};
			ready.retain(|&node| node != next);

			let mut members = condensed[next].clone();
			members.sort_by(|&a, &b| self.entries[a].package.identifier.cmp(&self.entries[b].package.identifier));
			order.extend(members.into_iter().map(|index| &self.entries[index]));

			for successor in condensed.neighbors_directed(next, Outgoing) {
				if let Some(count) = incoming.get_mut(&successor) {
					*count -= 1;
					if *count == 0 {
						ready.push(successor);
					}
				}
			}
		}
		order
	}
}
