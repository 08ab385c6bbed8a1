pub mod error;
pub use error::Result;
pub use error::Error;

pub mod package;
pub use package::Package;

pub mod compatibility;
pub mod sanity;

pub mod registry;
pub use registry::Registry;

pub mod relationship_resolver;
pub use relationship_resolver::RelationshipResolver;
pub use relationship_resolver::ChangeSet;

#[cfg(test)]
mod test_data;
