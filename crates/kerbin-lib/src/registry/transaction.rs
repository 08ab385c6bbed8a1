//! Transactional mutation of the registry.
//!
//! A sequence of registry changes forming one logical operation runs through a
//! [`RegistryTransaction`] handle, all of it takes effect on commit or none of
//! it on drop. The handle borrows the registry exclusively so no other code
//! can slip mutations in between.

use super::{Registry, RegistryState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionMode {
	/// Open a fresh transaction, failing if one is already open.
	RequireNew,
	/// Join the transaction already open, or open one if there is none.
	/// Joined handles commit together with the outermost one.
	JoinAmbient,
}

impl Registry {
	/// Opens a transaction over this registry.
	///
	/// Mutations made through the returned handle are kept on
	/// [`commit`](RegistryTransaction::commit) and undone when the handle is
	/// dropped or [`cancel`](RegistryTransaction::cancel)led. An uncommitted
	/// drop of *any* handle restores the snapshot taken when the outermost
	/// handle opened.
	///
	/// # Errors
	/// [`Transaction`](crate::Error::Transaction) when opening a
	/// [`RequireNew`](TransactionMode::RequireNew) transaction while another
	/// is open. Nested independent transactions are not supported.
	pub fn begin_transaction(&mut self, mode: TransactionMode) -> crate::Result<RegistryTransaction<'_>> {
		let owns_snapshot = match mode {
			TransactionMode::RequireNew => {
				if self.transaction_backup.is_some() {
					return Err(crate::Error::Transaction("registry cannot participate in nested transactions".to_string()));
				}
				self.transaction_backup = Some(Box::new(self.state.clone()));
				true
			}
			TransactionMode::JoinAmbient => {
				if self.transaction_backup.is_none() {
					self.transaction_backup = Some(Box::new(self.state.clone()));
					true
				} else {
					false
				}
			}
		};

		log::debug!("registry enlisting in transaction");
		Ok(RegistryTransaction {
			registry: self,
			owns_snapshot,
			committed: false,
		})
	}
}

/// An open transaction. Derefs to [`Registry`], so every registry operation
/// is available through it.
#[derive(Debug)]
pub struct RegistryTransaction<'r> {
	registry: &'r mut Registry,
	owns_snapshot: bool,
	committed: bool,
}

impl RegistryTransaction<'_> {
	/// Keeps every change made since the transaction opened.
	///
	/// Committing a joined handle is a no-op, the outermost handle decides.
	pub fn commit(mut self) {
		if self.owns_snapshot {
			self.registry.transaction_backup = None;
			log::debug!("transaction committed");
		}
		self.committed = true;
	}

	/// Rolls the registry back to the snapshot right away.
	pub fn cancel(self) {
		/* Dropping without commit restores the snapshot. */
	}
}

impl std::ops::Deref for RegistryTransaction<'_> {
	type Target = Registry;
	fn deref(&self) -> &Registry { self.registry }
}

impl std::ops::DerefMut for RegistryTransaction<'_> {
	fn deref_mut(&mut self) -> &mut Registry { self.registry }
}

impl Drop for RegistryTransaction<'_> {
	fn drop(&mut self) {
		if !self.committed {
			if let Some(backup) = self.registry.transaction_backup.take() {
				log::info!("aborted transaction, rolling back in-memory registry changes");
				self.registry.state = *backup;
			}
		}
	}
}
