use serde::{Serialize, Deserialize};

/// The version of a package.
///
/// # Format
/// Package versions follow a format `[epoch:]version`.
/// - `epoch` is a non-negative integer used to correct errors in versioning
/// schemes or to organize versions that are difficult to interpret. It
/// defaults to `0` when absent.
/// - `version` can be *any* string, so parsing never fails; strings that
/// don't look like versions still get a consistent total order.
///
/// Versions are compared epoch first, then by walking the version part as
/// alternating non-digit and digit runs. Digit runs compare numerically with
/// no length limit, non-digit runs compare as strings except `.` sorts above
/// every other character. A version that is a prefix of another sorts below
/// it, so `1.2 < 1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageVersion {
	epoch: u32,
	version: String,
}

impl PackageVersion {
	pub fn new(version: &str) -> Self {
		match version.split_once(':') {
			Some((epoch, rest)) if !epoch.is_empty() && epoch.bytes().all(|b| b.is_ascii_digit()) => {
				match epoch.parse::<u32>() {
					Ok(epoch) => PackageVersion { epoch, version: rest.to_string() },
					/* Overflowing epochs are treated as not being epochs at all. */
					Err(_) => PackageVersion { epoch: 0, version: version.to_string() },
				}
			}
			_ => PackageVersion { epoch: 0, version: version.to_string() },
		}
	}

	pub fn epoch(&self) -> u32 {
		self.epoch
	}
}

impl From<&str> for PackageVersion {
	fn from(value: &str) -> Self { Self::new(value) }
}

impl From<String> for PackageVersion {
	fn from(value: String) -> Self { Self::new(&value) }
}

/// Splits into the leading run without digits and the rest.
fn split_at_digit(s: &str) -> (&str, &str) {
	match s.find(|c: char| c.is_ascii_digit()) {
		Some(i) => s.split_at(i),
		None => (s, ""),
	}
}

/// Splits into the leading run of digits and the rest.
fn split_at_nondigit(s: &str) -> (&str, &str) {
	match s.find(|c: char| !c.is_ascii_digit()) {
		Some(i) => s.split_at(i),
		None => (s, ""),
	}
}

/// Compares two non-digit runs. `.` sorts above everything else so that a
/// dotted segment boundary outranks trailing letters, and a bare `.` outranks
/// longer `.`-led runs.
fn cmp_nondigit_runs(a: &str, b: &str) -> std::cmp::Ordering {
	use std::cmp::Ordering;

	if a.is_empty() || b.is_empty() {
		return a.cmp(b);
	}

	let a_dot = a.starts_with('.');
	let b_dot = b.starts_with('.');
	match (a_dot, b_dot) {
		(false, true) => Ordering::Less,
		(true, false) => Ordering::Greater,
		(true, true) => {
			if a.len() == 1 && b.len() > 1 {
				Ordering::Greater
			} else if a.len() > 1 && b.len() == 1 {
				Ordering::Less
			} else {
				a.cmp(b)
			}
		}
		(false, false) => a.cmp(b),
	}
}

/// Compares two digit runs numerically. Runs may be longer than any integer
/// type, so strip leading zeros and compare by significant length first. An
/// empty run counts as zero.
fn cmp_digit_runs(a: &str, b: &str) -> std::cmp::Ordering {
	let a = a.trim_start_matches('0');
	let b = b.trim_start_matches('0');
	a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for PackageVersion {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		match self.epoch.cmp(&other.epoch) {
			std::cmp::Ordering::Equal => {}
			ord => return ord,
		}

		let mut lhs = self.version.as_str();
		let mut rhs = other.version.as_str();

		while !lhs.is_empty() && !rhs.is_empty() {
			let (a, lhs_rest) = split_at_digit(lhs);
			let (b, rhs_rest) = split_at_digit(rhs);
			match cmp_nondigit_runs(a, b) {
				std::cmp::Ordering::Equal => {}
				ord => return ord,
			}

			let (a, lhs_rest) = split_at_nondigit(lhs_rest);
			let (b, rhs_rest) = split_at_nondigit(rhs_rest);
			match cmp_digit_runs(a, b) {
				std::cmp::Ordering::Equal => {}
				ord => return ord,
			}

			lhs = lhs_rest;
			rhs = rhs_rest;
		}

		/* Whichever string ran out first is the lesser, `1.2 < 1.2.3`. */
		lhs.len().cmp(&rhs.len())
	}
}

impl PartialOrd for PackageVersion {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl std::fmt::Display for PackageVersion {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.epoch != 0 {
			write!(f, "{}:{}", self.epoch, self.version)
		} else {
			write!(f, "{}", self.version)
		}
	}
}

pub type PackageVersionBounds = super::version_bounds::VersionBounds<PackageVersion>;

#[cfg(test)]
mod test {
	use super::*;

	#[test] fn package_version_is_not_compared_lexically() { assert!(PackageVersion::new("1.2.4.0") < PackageVersion::new("1.2.10.0")) }
	#[test] fn package_version_short_version_is_lt() { assert!(PackageVersion::new("1.2") < PackageVersion::new("1.2.3")) }
	#[test] fn package_version_identical_are_eq() { assert!(PackageVersion::new("1.2.3") == PackageVersion::new("1.2.3")) }
	#[test] fn package_version_higher_version_is_gt() { assert!(PackageVersion::new("1.2.3") < PackageVersion::new("1.2.4")) }
	#[test] fn package_version_prefix_is_supported() { assert!(PackageVersion::new("v1.2.3") < PackageVersion::new("v1.2.4")) }
	#[test] fn package_version_prefix_is_compared_lexically() { assert!(PackageVersion::new("a1.2.3") < PackageVersion::new("b1.2.3")) }
	#[test] fn package_version_trailing_non_digit() { assert!(PackageVersion::new("1.2a") < PackageVersion::new("1.2b")) }
	#[test] fn package_version_trailing_digit() { assert!(PackageVersion::new("1.2") < PackageVersion::new("1.3")) }
	#[test] fn package_version_epoch_is_respected() { assert!(PackageVersion::new("1:1.2") < PackageVersion::new("2:v0.1")) }
	#[test] fn package_version_epoch_needs_digits() { assert_eq!(PackageVersion::new("v1:1.2").epoch(), 0) }
	#[test] fn package_version_dot_outranks_letters() { assert!(PackageVersion::new("1a") < PackageVersion::new("1.0")) }
	#[test] fn package_version_huge_numbers_do_not_panic() { assert!(PackageVersion::new("1.99999999999999999999") > PackageVersion::new("1.2")) }
	#[test] fn package_version_leading_zeros_are_numeric() { assert!(PackageVersion::new("1.02") == PackageVersion::new("1.02") && PackageVersion::new("1.02") < PackageVersion::new("1.10")) }
	#[test] fn package_version_display_hides_zero_epoch() { assert_eq!(PackageVersion::new("1.2").to_string(), "1.2") }
	#[test] fn package_version_display_keeps_epoch() { assert_eq!(PackageVersion::new("3:1.2").to_string(), "3:1.2") }
}
