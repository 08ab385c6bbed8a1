//! Game version compatibility policies.
//!
//! Whether a package "works on" a game version is a policy question, not a
//! fact; communities pile up folklore about which releases really broke mods.
//! The policies here are strategies over the same declared data so front-ends
//! can pick how adventurous to be.

use serde::{Serialize, Deserialize};

use crate::package::{GameVersion, Package};

/// Decides whether a package is compatible with a set of game versions.
///
/// The criteria slice holds every game version the running instance counts
/// as, compatibility with any one of them is enough. An empty slice places no
/// constraint and accepts everything.
pub trait GameComparator {
	fn compatible(&self, criteria: &[GameVersion], package: &Package) -> bool;
}

/// Does the package's declared range overlap `version`'s release line.
fn strict_single(version: &GameVersion, package: &Package) -> bool {
	match package.game_versions.to_range() {
		Some(range) => range.intersects(&version.to_version_range()),
		/* Bounds with an empty range accept nothing. */
		None => false,
	}
}

/// Takes declared compatibility at face value.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictGameComparator;

impl GameComparator for StrictGameComparator {
	fn compatible(&self, criteria: &[GameVersion], package: &Package) -> bool {
		criteria.is_empty() || criteria.iter().any(|v| strict_single(v, package))
	}
}

/// One entry of the "generally recognised as safe" table.
///
/// A criteria version inside `game_version`'s release line is additionally
/// checked as if it were `treated_as`. The table captures hotfix releases
/// that didn't break mods made for the preceding stable version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrasExemption {
	pub game_version: GameVersion,
	pub treated_as: GameVersion,
}

impl GrasExemption {
	/// # Errors
	/// [`Parse`](crate::Error::Parse) when either version string doesn't parse.
	pub fn new(game_version: impl AsRef<str>, treated_as: impl AsRef<str>) -> crate::Result<Self> {
		Ok(GrasExemption {
			game_version: GameVersion::new(game_version)?,
			treated_as: GameVersion::new(treated_as)?,
		})
	}
}

/// Strict compatibility widened by an exemption table.
///
/// Packages declaring `game_version_strict` opt out of the table and get the
/// strict behaviour. The `Default` table is the known KSP one; other games
/// want their own table passed at construction.
#[derive(Debug, Clone)]
pub struct GrasGameComparator {
	exemptions: Vec<GrasExemption>,
}

impl GrasGameComparator {
	pub fn new(exemptions: Vec<GrasExemption>) -> Self {
		GrasGameComparator { exemptions }
	}

	fn single(&self, version: &GameVersion, package: &Package) -> bool {
		if strict_single(version, package) { return true }
		if package.game_version_strict { return false }
		self.exemptions.iter().any(|ex| {
			ex.game_version.to_version_range().intersects(&version.to_version_range())
				&& strict_single(&ex.treated_as, package)
		})
	}
}

impl Default for GrasGameComparator {
	fn default() -> Self {
		let exemptions = [("1.0.4", "1.0.3"), ("1.1.1", "1.1.0"), ("1.1.2", "1.1.0")]
			.into_iter()
			.filter_map(|(game_version, treated_as)| GrasExemption::new(game_version, treated_as).ok())
			.collect();
		GrasGameComparator { exemptions }
	}
}

impl GameComparator for GrasGameComparator {
	fn compatible(&self, criteria: &[GameVersion], package: &Package) -> bool {
		criteria.is_empty() || criteria.iter().any(|v| self.single(v, package))
	}
}

/// Assumes everything is compatible with everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct YoyoGameComparator;

impl GameComparator for YoyoGameComparator {
	fn compatible(&self, _criteria: &[GameVersion], _package: &Package) -> bool {
		true
	}
}
