// Copyright 2025 the Borderbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-scene command context: store + host + undo journal, plus typed operations.

use core::fmt;

use borderbook_store::{BorderRecord, BorderStore};

use crate::command::{CaptureBorder, CommandError, DeleteBorder};
use crate::host::RenderHost;

/// The host-owned undo journal.
///
/// Undo/redo itself is the host's business; commands only mark transaction
/// boundaries. [`CommandTable::invoke`](crate::CommandTable::invoke) calls
/// [`History::commit`] exactly once per successful command, so a single host
/// undo step reverses that command atomically. Failed commands commit
/// nothing.
///
/// The unit type is a no-op journal for hosts without an undo stack.
pub trait History {
    /// Records one coarse-grained undo step under `label`.
    fn commit(&mut self, label: &'static str);
}

impl History for () {
    fn commit(&mut self, _label: &'static str) {}
}

/// Everything a command touches, borrowed for one synchronous invocation.
///
/// A `SceneContext` is built fresh per user action from the scene's
/// [`BorderStore`], the host's [`RenderHost`] implementation, and its
/// [`History`] journal. There is no ambient global state: commands can only
/// reach what the context lends them.
///
/// The typed operations ([`capture`](Self::capture), [`apply`](Self::apply),
/// [`delete`](Self::delete)) and their polls (`can_*`) live here; the
/// [`Command`](crate::Command) objects in this crate are thin registered
/// wrappers around them.
pub struct SceneContext<'a, H> {
    store: &'a mut BorderStore,
    host: &'a mut H,
    history: &'a mut dyn History,
}

impl<H> fmt::Debug for SceneContext<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneContext")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl<'a, H: RenderHost> SceneContext<'a, H> {
    /// Borrows a scene's store, host state, and undo journal.
    ///
    /// Hosts without an undo stack can pass `&mut ()`.
    pub fn new(
        store: &'a mut BorderStore,
        host: &'a mut H,
        history: &'a mut dyn History,
    ) -> Self {
        Self {
            store,
            host,
            history,
        }
    }

    /// Returns the scene's saved-border store.
    #[must_use]
    pub fn store(&self) -> &BorderStore {
        self.store
    }

    /// Returns the scene's saved-border store mutably.
    ///
    /// The presentation layer uses this to drive the cursor from list
    /// selection ([`BorderStore::set_active`]) and to rename rows.
    #[must_use]
    pub fn store_mut(&mut self) -> &mut BorderStore {
        self.store
    }

    /// Returns the host's live border state.
    #[must_use]
    pub fn host(&self) -> &H {
        self.host
    }

    /// Records one coarse-grained undo step with the host's journal.
    ///
    /// [`CommandTable::invoke`](crate::CommandTable::invoke) does this for
    /// you; call it directly only when bypassing the table.
    pub fn commit(&mut self, label: &'static str) {
        self.history.commit(label);
    }

    /// Returns `true` if Capture may run: the live border must be enabled.
    #[must_use]
    pub fn can_capture(&self) -> bool {
        self.host.border_enabled()
    }

    /// Returns `true` unconditionally: Apply is always offered.
    ///
    /// An out-of-range index still fails loudly at execution time.
    #[must_use]
    pub fn can_apply(&self) -> bool {
        true
    }

    /// Returns `true` if Delete may run: the store must be non-empty.
    #[must_use]
    pub fn can_delete(&self) -> bool {
        !self.store.is_empty()
    }

    /// Captures the live border under `name`, returning the new record index.
    ///
    /// Reads the four scalar bounds from the host, appends a
    /// [`BorderRecord`] to the store, and leaves the cursor untouched. Fails
    /// with [`CommandError::Inapplicable`] when the live border is disabled.
    pub fn capture(&mut self, name: &str) -> Result<usize, CommandError> {
        if !self.can_capture() {
            return Err(CommandError::Inapplicable {
                command: CaptureBorder::ID,
            });
        }

        let record = BorderRecord::new(name, self.host.border_x(), self.host.border_y());
        Ok(self.store.append(record))
    }

    /// Applies the record at `index` to the host's live border.
    ///
    /// Enables the border and copies both spans verbatim from the record.
    /// An out-of-range index fails before any host state is touched; the
    /// store is never mutated.
    pub fn apply(&mut self, index: usize) -> Result<(), CommandError> {
        let record = self.store.get(index)?;
        let (x_range, y_range) = (record.x_range, record.y_range);

        self.host.set_border_enabled(true);
        self.host.set_border_x(x_range);
        self.host.set_border_y(y_range);
        Ok(())
    }

    /// Deletes the record at `index`, re-clamping the cursor.
    ///
    /// Fails with [`CommandError::Inapplicable`] on an empty store and with
    /// [`CommandError::OutOfRange`] on a bad index. On success the store's
    /// clamp-on-delete invariant moves the cursor to the nearest surviving
    /// predecessor (see [`BorderStore::remove`]).
    pub fn delete(&mut self, index: usize) -> Result<(), CommandError> {
        if !self.can_delete() {
            return Err(CommandError::Inapplicable {
                command: DeleteBorder::ID,
            });
        }

        self.store.remove(index)?;
        Ok(())
    }
}
