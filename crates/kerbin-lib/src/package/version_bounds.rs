use serde::{Serialize, Deserialize};

/// A generic enum to describe a range of versions.
///
/// All bounds are inclusive.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersionBounds<T>
where T: Ord + Clone,
{
	#[default] Any,
	Explicit(T),
	MinOnly(T),
	MaxOnly(T),
	MinMax(T, T),
}

impl<T> VersionBounds<T>
where T: Ord + Clone,
{
	/// When all arguments are `None` will return `Any`
	///
	/// # Errors
	/// An explicit version can't be combined with a min or max version.
	pub fn new(explicit: Option<T>, min: Option<T>, max: Option<T>) -> crate::Result<VersionBounds<T>> {
		match (explicit, min, max) {
			(None, None, None) => Ok(VersionBounds::Any),
			(None, None, Some(max)) => Ok(VersionBounds::MaxOnly(max)),
			(None, Some(min), None) => Ok(VersionBounds::MinOnly(min)),
			(None, Some(min), Some(max)) => Ok(VersionBounds::MinMax(min, max)),
			(Some(e), None, None) => Ok(VersionBounds::Explicit(e)),
			_ => Err(crate::Error::Parse("Attempted to create bounds with both explicit and min or max version constraint".to_string()))
		}
	}

	pub fn is_version_within(&self, other: &T) -> bool {
		match self {
			VersionBounds::Any => true,
			VersionBounds::Explicit(v) => other == v,
			VersionBounds::MinOnly(min) => other >= min,
			VersionBounds::MaxOnly(max) => other <= max,
			VersionBounds::MinMax(min, max) => min <= other && other <= max,
		}
	}

	fn lower(&self) -> Option<&T> {
		match self {
			VersionBounds::Explicit(v) | VersionBounds::MinOnly(v) | VersionBounds::MinMax(v, _) => Some(v),
			_ => None,
		}
	}

	fn upper(&self) -> Option<&T> {
		match self {
			VersionBounds::Explicit(v) | VersionBounds::MaxOnly(v) | VersionBounds::MinMax(_, v) => Some(v),
			_ => None,
		}
	}

	/// Gets the intersection between the bounds, if no intersection exists returns `None`
	pub fn inner_join(&self, other: &Self) -> Option<Self> {
		match (self, other) {
			(VersionBounds::Any, r) => Some(r.clone()),
			(l, VersionBounds::Any) => Some(l.clone()),

			(VersionBounds::Explicit(a), VersionBounds::Explicit(b)) => if a == b { Some(VersionBounds::Explicit(a.clone())) } else { None },
			(VersionBounds::Explicit(a), b) => if b.is_version_within(a) { Some(VersionBounds::Explicit(a.clone())) } else { None },
			(a, VersionBounds::Explicit(b)) => if a.is_version_within(b) { Some(VersionBounds::Explicit(b.clone())) } else { None },

			_ => {
				/* A missing endpoint means unbounded on that side. */
				let min = match (self.lower(), other.lower()) {
					(Some(a), Some(b)) => Some(std::cmp::max(a, b)),
					(a, b) => a.or(b),
				};
				let max = match (self.upper(), other.upper()) {
					(Some(a), Some(b)) => Some(std::cmp::min(a, b)),
					(a, b) => a.or(b),
				};

				if let (Some(min), Some(max)) = (min, max) {
					if min > max {
						return None;
					}
				}

				match (min.cloned(), max.cloned()) {
					(None, None) => Some(VersionBounds::Any),
					(Some(min), None) => Some(VersionBounds::MinOnly(min)),
					(None, Some(max)) => Some(VersionBounds::MaxOnly(max)),
					(Some(min), Some(max)) => Some(VersionBounds::MinMax(min, max)),
				}
			}
		}
	}
}

impl<T> std::fmt::Display for VersionBounds<T>
where T: Ord + Clone + std::fmt::Display,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			VersionBounds::Any => write!(f, "any version"),
			VersionBounds::Explicit(v) => write!(f, "= {}", v),
			VersionBounds::MinOnly(min) => write!(f, ">= {}", min),
			VersionBounds::MaxOnly(max) => write!(f, "<= {}", max),
			VersionBounds::MinMax(min, max) => write!(f, ">= {}, <= {}", min, max),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test] fn version_bounds_rejects_explicit_with_min() { assert!(VersionBounds::new(Some(1), Some(0), None).is_err()) }
	#[test] fn version_bounds_any_joins_to_other() { assert_eq!(VersionBounds::Any.inner_join(&VersionBounds::MinOnly(3)), Some(VersionBounds::MinOnly(3))) }
	#[test] fn version_bounds_explicit_join_requires_membership() { assert_eq!(VersionBounds::Explicit(5).inner_join(&VersionBounds::MaxOnly(4)), None) }
	#[test] fn version_bounds_min_max_join_keeps_touching_endpoint() { assert_eq!(VersionBounds::MinOnly(4).inner_join(&VersionBounds::MaxOnly(4)), Some(VersionBounds::MinMax(4, 4))) }
	#[test] fn version_bounds_min_max_pair_join_tightens() { assert_eq!(VersionBounds::MinMax(1, 5).inner_join(&VersionBounds::MinMax(3, 8)), Some(VersionBounds::MinMax(3, 5))) }
	#[test] fn version_bounds_min_max_pair_join_single_point() { assert_eq!(VersionBounds::MinMax(1, 4).inner_join(&VersionBounds::MinMax(4, 8)), Some(VersionBounds::MinMax(4, 4))) }
	#[test] fn version_bounds_disjoint_join_is_none() { assert_eq!(VersionBounds::MinMax(1, 2).inner_join(&VersionBounds::MinMax(3, 4)), None) }
	#[test] fn version_bounds_max_only_join_keeps_lower() { assert_eq!(VersionBounds::MaxOnly(3).inner_join(&VersionBounds::MinMax(1, 5)), Some(VersionBounds::MinMax(1, 3))) }
	#[test] fn version_bounds_max_only_below_min_is_none() { assert_eq!(VersionBounds::MaxOnly(0).inner_join(&VersionBounds::MinMax(1, 5)), None) }
}
