//! Functions and methods for reading catalog types from JSON

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::*;
use crate::package::relationship::PackageDescriptor;

/// Reads a field that may be a single string or an array of strings.
fn get_one_or_many_string(map: &Map<String, Value>, key: &str) -> crate::Result<Vec<String>> {
	use crate::Error::Parse;
	match map.get(key) {
		Some(Value::String(s)) => Ok(vec![s.clone()]),
		Some(Value::Array(arr)) => {
			arr.iter()
				.map(|e| {
					e.as_str()
						.map(|s| s.to_string())
						.ok_or_else(|| Parse(format!("{} array elements must be strings", key)))
				})
				.collect()
		}
		Some(_) => Err(Parse(format!("{} must be a string or an array of strings", key))),
		None => Err(Parse(format!("JSON has no {} field", key))),
	}
}

/// Version fields show up as JSON strings but occasionally as bare numbers,
/// both read as the string the number was written as.
fn value_to_version_string(value: Option<&Value>, key: &str) -> crate::Result<Option<String>> {
	use crate::Error::Parse;
	match value {
		None | Some(Value::Null) => Ok(None),
		Some(Value::String(s)) => Ok(Some(s.clone())),
		Some(Value::Number(n)) => Ok(Some(n.to_string())),
		Some(_) => Err(Parse(format!("{} must be a version string", key))),
	}
}

impl PackageDescriptor {
	pub fn from_json(v: &Value) -> crate::Result<Self> {
		use crate::Error::Parse;

		let name = v.get("name")
			.ok_or_else(|| Parse("JSON has no name field".to_string()))?
			.as_str().ok_or_else(|| Parse("name must be a string".to_string()))?
			.to_string();

		let explicit = value_to_version_string(v.get("version"), "version")?;
		let min = value_to_version_string(v.get("min_version"), "min_version")?;
		let max = value_to_version_string(v.get("max_version"), "max_version")?;

		let version = PackageVersionBounds::new(
			explicit.map(|s| PackageVersion::new(&s)),
			min.map(|s| PackageVersion::new(&s)),
			max.map(|s| PackageVersion::new(&s)),
		)?;

		Ok(PackageDescriptor::new(name, version))
	}
}

fn relationships_from_json(v: &Value) -> crate::Result<Vec<PackageDescriptor>> {
	use crate::Error::Parse;

	let arr = v.as_array().ok_or_else(|| Parse("relationships must be an array".to_string()))?;

	let mut relationships = Vec::<PackageDescriptor>::with_capacity(arr.len());
	for elem in arr {
		if !elem.is_object() {
			return Err(Parse("relationship array elements must be objects".to_string()));
		}
		relationships.push(PackageDescriptor::from_json(elem)?);
	}

	Ok(relationships)
}

impl Package {
	/// Builds a package from one catalog JSON document.
	///
	/// # Errors
	/// [`Parse`](crate::Error::Parse) when a required field is missing or has
	/// the wrong shape, when a relationship mixes `version` with
	/// `min_version`/`max_version`, or when an installable package has no
	/// download url. Unknown fields are ignored.
	pub fn read_from_json(v: serde_json::Value) -> crate::Result<Self> {
		use crate::Error::Parse;

		fn get_val<T>(map: &Map<String, Value>, key: &str) -> crate::Result<T>
		where T: DeserializeOwned {
			Ok(
				serde_json::from_value(map.get(key).unwrap_or(&Value::Null).to_owned())?
			)
		}

		fn get_relationships(map: &Map<String, Value>, key: &str) -> crate::Result<Vec<PackageDescriptor>> {
			map.get(key).map(relationships_from_json).transpose().map(Option::unwrap_or_default)
		}

		let obj = v.as_object().ok_or_else(|| Parse("JSON is not an object".to_string()))?;

		let package = Package {
			identifier: get_val(obj, "identifier")?,
			name: get_val(obj, "name")?,
			blurb: get_val(obj, "abstract")?,
			authors: get_one_or_many_string(obj, "author")?,
			licenses: get_one_or_many_string(obj, "license")?,
			version: PackageVersion::new(&get_val::<String>(obj, "version")?),
			download: {
				match obj.get("download") {
					Some(Value::String(v)) => Some(v.clone()),
					Some(_) => return Err(Parse("invalid type, expected string for download".to_string())),
					None => None,
				}
			},

			/* Optionals */
			release_status: {
				match obj.get("release_status") {
					Some(Value::String(v)) => {
						if v == "stable" {
							ReleaseStatus::Stable
						} else if v == "testing" {
							ReleaseStatus::Testing
						} else if v == "development" {
							ReleaseStatus::Development
						} else {
							return Err(Parse("unknown release_status".to_string()))
						}
					}
					Some(_) => return Err(Parse("invalid type, expected string for release_status".to_string())),
					None => ReleaseStatus::Stable,
				}
			},
			kind: {
				match obj.get("kind") {
					Some(Value::String(v)) => {
						if v == "package" {
							Kind::Package
						} else if v == "metapackage" {
							Kind::MetaPackage
						} else if v == "dlc" {
							Kind::Dlc
						} else {
							return Err(Parse("unknown kind".to_string()))
						}
					}
					Some(_) => return Err(Parse("invalid type, expected string for kind".to_string())),
					None => Kind::Package,
				}
			},
			depends: get_relationships(obj, "depends")?,
			recommends: get_relationships(obj, "recommends")?,
			suggests: get_relationships(obj, "suggests")?,
			conflicts: get_relationships(obj, "conflicts")?,
			provides: {
				match obj.get("provides") {
					Some(_) => get_one_or_many_string(obj, "provides")?.into_iter().collect::<HashSet<_>>(),
					None => HashSet::new(),
				}
			},
			game_versions: GameVersionBounds::new_from_str(
				value_to_version_string(obj.get("ksp_version"), "ksp_version")?,
				value_to_version_string(obj.get("ksp_version_min"), "ksp_version_min")?,
				value_to_version_string(obj.get("ksp_version_max"), "ksp_version_max")?,
			)?,
			game_version_strict: {
				match obj.get("ksp_version_strict") {
					Some(Value::Bool(b)) => *b,
					Some(_) => return Err(Parse("ksp_version_strict must be a boolean".to_string())),
					None => false,
				}
			},
		};

		if package.download.is_none() && package.kind == Kind::Package {
			return Err(Parse(format!("package {} has no download url", package.identifier)));
		}

		Ok(package)
	}
}
