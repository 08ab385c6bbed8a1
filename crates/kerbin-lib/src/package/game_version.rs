//! Structs representing game version numbers.
//!
//! # Game Versioning Numbers
//!
//! Although we use the terms major/minor/patch for the components the game does
//! not use semantic versioning, breaking changes usually occur on minor version
//! bumps.
//!
//! Packages can declare compatibility with a partial version such as `1.12`
//! which stands for every version in the `1.12` line. Partial versions become
//! closed [`GameVersionRange`]s, membership and overlap checks all go through
//! ranges rather than through the raw component order.

use serde::{Serialize, Deserialize};
use try_map::FallibleMapExt;

/// A game version with up to four components.
///
/// # Format
///
/// `MAJOR`.`MINOR`.`PATCH`.`BUILD`
///
/// For example: `1.12.3.3173`
///
/// Any trailing run of components may be left undefined; a defined component is
/// never preceded by an undefined one. A version with *all* components
/// undefined is [`GameVersion::ANY`], written `"any"`.
///
/// # Eq & Ord
///
/// Equality and order are value based per component with undefined sorting
/// below every defined value, so `1.2 < 1.2.0`. This order exists for sorted
/// containers; compatibility questions should go through
/// [`GameVersion::to_version_range()`] instead, as a partial version stands for
/// a whole line of releases rather than a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameVersion {
	major: Option<u32>,
	minor: Option<u32>,
	patch: Option<u32>,
	build: Option<u32>,
}

impl GameVersion {
	/// The version every game version is part of.
	pub const ANY: GameVersion = GameVersion { major: None, minor: None, patch: None, build: None };

	/// Create a new [`GameVersion`] from a version string.
	///
	/// # Errors
	/// This function will return a [`Parse`](crate::Error::Parse) error in the following cases.
	/// - Input has more components than the `MAJOR`.`MINOR`.`PATCH`.`BUILD` format.
	/// - The components of the version can't be parsed as non-negative integers.
	///
	/// `"any"` (case insensitive) and the empty string parse to [`GameVersion::ANY`].
	pub fn new(s: impl AsRef<str>) -> crate::Result<Self> {
		use crate::Error::Parse;
		let s = s.as_ref();
		if s.is_empty() || s.to_lowercase() == "any" { return Ok(GameVersion::ANY) }

		let components = s.split('.').collect::<Vec<_>>();
		if components.len() > 4 { return Err(Parse(format!("too many version components in {:?}", s))) }

		let parse = |v: &&str| v.parse::<u32>().map_err(|_| Parse(format!("version component {:?} is not a non-negative integer", v)));
		let major = components.first().try_map(parse)?;
		let minor = components.get(1).try_map(parse)?;
		let patch = components.get(2).try_map(parse)?;
		let build = components.get(3).try_map(parse)?;

		Ok(GameVersion { major, minor, patch, build })
	}

	pub fn major(&self) -> Option<u32> { self.major }
	pub fn minor(&self) -> Option<u32> { self.minor }
	pub fn patch(&self) -> Option<u32> { self.patch }
	pub fn build(&self) -> Option<u32> { self.build }

	pub fn is_any(&self) -> bool { *self == GameVersion::ANY }

	/// Replaces every undefined component with `fill`.
	fn filled(&self, fill: u32) -> GameVersion {
		GameVersion {
			major: self.major.or(Some(fill)),
			minor: self.minor.or(Some(fill)),
			patch: self.patch.or(Some(fill)),
			build: self.build.or(Some(fill)),
		}
	}

	/// The range of releases this version stands for.
	///
	/// A fully defined version yields a point interval. A partial version such
	/// as `1.2` yields the whole line, `[1.2.0.0, 1.2.*.*]`, and
	/// [`GameVersion::ANY`] yields every version there is.
	pub fn to_version_range(&self) -> GameVersionRange {
		GameVersionRange {
			lower: self.filled(0),
			upper: self.filled(u32::MAX),
		}
	}
}

impl TryFrom<&str> for GameVersion {
	type Error = crate::Error;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl std::fmt::Display for GameVersion {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.is_any() { return write!(f, "any") }
		let mut first = true;
		for component in [self.major, self.minor, self.patch, self.build].into_iter().flatten() {
			if first {
				write!(f, "{}", component)?;
				first = false;
			} else {
				write!(f, ".{}", component)?;
			}
		}
		Ok(())
	}
}

/// A closed interval of game versions.
///
/// Endpoints are always fully defined, partial endpoints are widened on
/// construction; the lower endpoint fills undefined components with `0`, the
/// upper with the largest value. This keeps membership a plain component
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameVersionRange {
	lower: GameVersion,
	upper: GameVersion,
}

impl GameVersionRange {
	/// The range containing every version.
	pub const FULL: GameVersionRange = GameVersionRange {
		lower: GameVersion { major: Some(0), minor: Some(0), patch: Some(0), build: Some(0) },
		upper: GameVersion { major: Some(u32::MAX), minor: Some(u32::MAX), patch: Some(u32::MAX), build: Some(u32::MAX) },
	};

	/// Creates a range between two versions, widening partial endpoints.
	///
	/// Returns `None` when the widened endpoints are out of order and the range
	/// would contain nothing.
	pub fn new(lower: GameVersion, upper: GameVersion) -> Option<Self> {
		let lower = lower.filled(0);
		let upper = upper.filled(u32::MAX);
		if lower <= upper {
			Some(GameVersionRange { lower, upper })
		} else {
			None
		}
	}

	pub fn lower(&self) -> &GameVersion { &self.lower }
	pub fn upper(&self) -> &GameVersion { &self.upper }

	/// Gets the overlap of two ranges, if they don't overlap returns `None`
	pub fn intersect(&self, other: &Self) -> Option<Self> {
		let lower = std::cmp::max(self.lower, other.lower);
		let upper = std::cmp::min(self.upper, other.upper);
		if lower <= upper {
			Some(GameVersionRange { lower, upper })
		} else {
			None
		}
	}

	pub fn intersects(&self, other: &Self) -> bool {
		self.intersect(other).is_some()
	}
}

impl std::fmt::Display for GameVersionRange {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {}]", self.lower, self.upper)
	}
}

pub type GameVersionBounds = super::version_bounds::VersionBounds<GameVersion>;

impl GameVersionBounds {
	/// Generate a new version bounds from version strings such as `"1.12.3"`.
	///
	/// `"any"` strings act as missing constraints. Catalogs aren't supposed to
	/// combine an exact version with a min or max but some do, in which case
	/// the min/max pair wins.
	///
	/// # Errors
	/// Only generates the same errors as [`GameVersion::new()`] when creating versions from the input.
	pub fn new_from_str(explicit: Option<impl AsRef<str>>, min: Option<impl AsRef<str>>, max: Option<impl AsRef<str>>) -> crate::Result<Self> {
		let explicit = explicit.try_map(|s| GameVersion::new(s))?.filter(|v| !v.is_any());
		let min = min.try_map(|s| GameVersion::new(s))?.filter(|v| !v.is_any());
		let max = max.try_map(|s| GameVersion::new(s))?.filter(|v| !v.is_any());

		if min.is_some() || max.is_some() {
			Self::new(None, min, max)
		} else {
			Self::new(explicit, None, None)
		}
	}

	/// The range of game versions these bounds accept.
	///
	/// Returns `None` for a min/max pair that contains nothing, such bounds
	/// come from broken catalog data and accept no version at all.
	pub fn to_range(&self) -> Option<GameVersionRange> {
		match self {
			GameVersionBounds::Any => Some(GameVersionRange::FULL),
			GameVersionBounds::Explicit(v) => Some(v.to_version_range()),
			GameVersionBounds::MinOnly(min) => GameVersionRange::new(*min, GameVersion::ANY),
			GameVersionBounds::MaxOnly(max) => GameVersionRange::new(GameVersion::ANY, *max),
			GameVersionBounds::MinMax(min, max) => {
				let range = GameVersionRange::new(*min, *max);
				if range.is_none() {
					log::warn!("game version constraint [{}, {}] doesn't contain any versions", min, max);
				}
				range
			}
		}
	}
}
