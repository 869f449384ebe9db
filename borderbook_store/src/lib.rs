// Copyright 2025 the Borderbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Borderbook Store: per-scene storage for named render-border rectangles.
//!
//! A "render border" is a normalized rectangular sub-region of the render
//! frame: an X span and a Y span, each a `(min, max)` pair in `[0.0, 1.0]`.
//! This crate focuses on the _bookkeeping_ of a scene's saved borders: an
//! insertion-ordered collection of [`BorderRecord`] values plus an **active
//! index** cursor that a list widget can drive. It does **not** talk to the
//! host application's render settings; the `borderbook_commands` crate owns
//! that boundary.
//!
//! The core type is [`BorderStore`], a small container that tracks:
//! - The saved records, in insertion order (duplicate names are allowed).
//! - An optional **active** index (the list widget's selected row).
//! - A monotonically increasing **revision** counter that bumps when the
//!   store changes.
//!
//! The container is intentionally opinionated and compact:
//! - Records live in a small `Vec<BorderRecord>`; the store never reorders them.
//! - The cursor is an `Option<usize>`: an empty store has **no** selection
//!   rather than a selection of row zero.
//! - Removal unconditionally re-clamps the cursor onto the nearest valid
//!   predecessor, so observers never read a stale or out-of-range index.
//!
//! ## Minimal example
//!
//! ```rust
//! use borderbook_store::{BorderRecord, BorderStore};
//!
//! let mut store = BorderStore::new();
//!
//! // Save two borders.
//! let a = store.append(BorderRecord::new("Close-up", [0.2, 0.8], [0.1, 0.9]));
//! let b = store.append(BorderRecord::new("Full frame", [0.0, 1.0], [0.0, 1.0]));
//! assert_eq!((a, b), (0, 1));
//!
//! // The list widget selects the first row.
//! store.set_active(0).unwrap();
//!
//! // Deleting the selected row moves the cursor onto its nearest
//! // surviving predecessor.
//! store.remove(0).unwrap();
//! assert_eq!(store.active().map(|r| r.name.as_str()), Some("Full frame"));
//!
//! // Deleting the last record clears the selection entirely.
//! store.remove(0).unwrap();
//! assert_eq!(store.active_index(), None);
//! ```
//!
//! ## Cursor semantics
//!
//! [`BorderStore::remove`] is the one operation with a non-trivial invariant:
//! after every successful removal of index `i`, the cursor becomes
//! `min(max(0, i - 1), new_len - 1)` — the nearest valid predecessor — or
//! `None` when the store empties. [`BorderStore::append`] never moves the
//! cursor; row selection is the list widget's job, via
//! [`BorderStore::set_active`].
//!
//! All other index-taking operations ([`get`](BorderStore::get),
//! [`rename`](BorderStore::rename), [`set_active`](BorderStore::set_active),
//! [`remove`](BorderStore::remove) itself) fail loudly with
//! [`IndexOutOfBounds`] on an invalid index; the cursor re-clamp above is the
//! single deliberate exception to that rule.
//!
//! ## Geometry
//!
//! Records clamp every bound into the unit interval on construction, exactly
//! as the host's numeric input widgets do, but a span's `min` is allowed to
//! exceed its `max`: the store keeps whatever ordering it is given, and the
//! host interprets it. [`BorderRecord::rect`] and [`BorderRecord::from_rect`]
//! convert to and from a [`kurbo::Rect`] in the unit square for callers that
//! want to draw or hit-test saved borders.
//!
//! ## Persistence
//!
//! The store defines the schema and nothing else; file I/O belongs to the
//! host's own document serialization. With the `serde` feature enabled,
//! [`BorderRecord`] and [`BorderStore`] derive `Serialize`/`Deserialize`
//! (records plus the active cursor; the revision counter is instance-local
//! and not persisted). The cursor is validated on load: a stale or
//! hand-edited document whose cursor no longer points inside the collection
//! deserializes with the selection cleared, so widgets reading the store
//! never see an out-of-range index.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

/// Default label for newly captured borders.
pub const DEFAULT_NAME: &str = "Render Border";

/// A saved render border: a name plus normalized X and Y spans.
///
/// Each span is a `(min, max)` pair with both bounds in `[0.0, 1.0]`.
/// Names are user-editable and carry no uniqueness constraint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderRecord {
    /// User-facing label for this border.
    pub name: String,
    /// Normalized `(min, max)` span along X.
    pub x_range: [f64; 2],
    /// Normalized `(min, max)` span along Y.
    pub y_range: [f64; 2],
}

impl BorderRecord {
    /// Creates a record, clamping every bound into `[0.0, 1.0]`.
    ///
    /// Clamping mirrors the host's numeric input widgets, which clamp on
    /// assignment. Span ordering is preserved as given: a span whose `min`
    /// exceeds its `max` is stored verbatim, not swapped.
    #[must_use]
    pub fn new(name: impl Into<String>, x_range: [f64; 2], y_range: [f64; 2]) -> Self {
        Self {
            name: name.into(),
            x_range: clamp_unit(x_range),
            y_range: clamp_unit(y_range),
        }
    }

    /// Creates a record from a rectangle in the unit square.
    ///
    /// `rect.x0`/`rect.x1` become the X span and `rect.y0`/`rect.y1` the Y
    /// span, with the same clamping as [`BorderRecord::new`].
    #[must_use]
    pub fn from_rect(name: impl Into<String>, rect: Rect) -> Self {
        Self::new(name, [rect.x0, rect.x1], [rect.y0, rect.y1])
    }

    /// Returns the border as a [`Rect`] in the unit square.
    ///
    /// The rectangle is built directly from the stored spans, so an inverted
    /// span yields a rectangle with `x0 > x1` (or `y0 > y1`). Callers that
    /// need a well-ordered rectangle can use [`Rect::abs`] on the result.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x_range[0],
            self.y_range[0],
            self.x_range[1],
            self.y_range[1],
        )
    }
}

impl Default for BorderRecord {
    /// A full-frame border named [`DEFAULT_NAME`].
    fn default() -> Self {
        Self {
            name: String::from(DEFAULT_NAME),
            x_range: [0.0, 1.0],
            y_range: [0.0, 1.0],
        }
    }
}

fn clamp_unit(range: [f64; 2]) -> [f64; 2] {
    [range[0].clamp(0.0, 1.0), range[1].clamp(0.0, 1.0)]
}

/// Error returned when an index is outside the store's current bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The store's length at the time of the request.
    pub len: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} is out of range for a store of {} saved borders",
            self.index, self.len
        )
    }
}

impl core::error::Error for IndexOutOfBounds {}

/// An insertion-ordered collection of saved borders plus an active-row cursor.
///
/// One `BorderStore` is attached to each document/scene: created empty when
/// the scene is created and dropped with it. See the [crate docs](crate) for
/// the cursor semantics.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "BorderStoreRepr")
)]
pub struct BorderStore {
    records: Vec<BorderRecord>,
    active: Option<usize>,
    #[cfg_attr(feature = "serde", serde(skip))]
    revision: u64,
}

impl BorderStore {
    /// Creates an empty store with no selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            active: None,
            revision: 0,
        }
    }

    /// Returns `true` if no borders are saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of saved borders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns all saved borders in insertion order.
    #[must_use]
    pub fn records(&self) -> &[BorderRecord] {
        &self.records
    }

    /// Returns an iterator over the saved borders in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, BorderRecord> {
        self.records.iter()
    }

    /// Returns the cursor, or `None` when nothing is selected.
    ///
    /// When `Some(i)`, `i` is always a valid index into the store.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Returns the record under the cursor, if any.
    #[must_use]
    pub fn active(&self) -> Option<&BorderRecord> {
        self.active.map(|idx| &self.records[idx])
    }

    /// Returns the current revision counter.
    ///
    /// The revision is a monotonically increasing counter local to this
    /// store. It is bumped only when a mutation changes the semantic
    /// contents: records or cursor. No-op calls (for example, re-selecting
    /// the already-active row) leave it unchanged.
    ///
    /// This is useful for observers that want a cheap "did anything actually
    /// change?" marker without comparing the full contents.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the record at `index`.
    pub fn get(&self, index: usize) -> Result<&BorderRecord, IndexOutOfBounds> {
        self.records.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.records.len(),
        })
    }

    /// Appends a record, returning its index.
    ///
    /// Appending never moves the cursor: newly saved borders do not steal the
    /// list selection.
    pub fn append(&mut self, record: BorderRecord) -> usize {
        self.records.push(record);
        self.bump_revision();
        self.records.len() - 1
    }

    /// Removes and returns the record at `index`, re-clamping the cursor.
    ///
    /// After every successful removal the cursor becomes
    /// `min(max(0, index - 1), new_len - 1)` — the nearest valid predecessor
    /// of the removed row — or `None` when the store empties. The re-clamp
    /// runs unconditionally, whatever the cursor held before.
    pub fn remove(&mut self, index: usize) -> Result<BorderRecord, IndexOutOfBounds> {
        if index >= self.records.len() {
            return Err(IndexOutOfBounds {
                index,
                len: self.records.len(),
            });
        }

        let record = self.records.remove(index);
        self.active = if self.records.is_empty() {
            None
        } else {
            Some(index.saturating_sub(1).min(self.records.len() - 1))
        };
        self.bump_revision();
        Ok(record)
    }

    /// Renames the record at `index`.
    pub fn rename(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<(), IndexOutOfBounds> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(IndexOutOfBounds { index, len })?;

        let name = name.into();
        if record.name != name {
            record.name = name;
            self.bump_revision();
        }
        Ok(())
    }

    /// Moves the cursor to `index`.
    ///
    /// This is how the list widget reports a row selection.
    pub fn set_active(&mut self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.records.len() {
            return Err(IndexOutOfBounds {
                index,
                len: self.records.len(),
            });
        }

        if self.active != Some(index) {
            self.active = Some(index);
            self.bump_revision();
        }
        Ok(())
    }

    /// Clears the cursor, leaving the records untouched.
    pub fn clear_active(&mut self) {
        if self.active.is_some() {
            self.active = None;
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Mirror of the persisted fields, so loading can validate the cursor.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BorderStoreRepr {
    records: Vec<BorderRecord>,
    #[serde(default)]
    active: Option<usize>,
}

#[cfg(feature = "serde")]
impl From<BorderStoreRepr> for BorderStore {
    fn from(repr: BorderStoreRepr) -> Self {
        // A persisted cursor that no longer points inside the collection is
        // cleared rather than trusted: widgets reading a freshly loaded
        // store must never see an out-of-range index.
        let active = repr.active.filter(|&idx| idx < repr.records.len());
        Self {
            records: repr.records,
            active,
            revision: 0,
        }
    }
}

impl<'a> IntoIterator for &'a BorderStore {
    type Item = &'a BorderRecord;
    type IntoIter = core::slice::Iter<'a, BorderRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
