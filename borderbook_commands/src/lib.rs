// Copyright 2025 the Borderbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Borderbook Commands: capture, apply, and delete saved render borders.
//!
//! This crate is the command surface over
//! [`borderbook_store`](borderbook_store): three synchronous operations that
//! a host application's property panel exposes as buttons, plus the boundary
//! traits the host implements. It does no drawing and owns no widgets; the
//! presentation layer re-renders from the store after each invocation.
//!
//! - [`RenderHost`] abstracts the host's live render border (enable flag +
//!   normalized X/Y spans). [`LiveBorder`] is an in-memory implementation.
//! - [`SceneContext`] bundles one scene's store, host state, and [`History`]
//!   journal for one invocation; no global state is involved.
//! - [`CaptureBorder`], [`ApplyBorder`], and [`DeleteBorder`] implement the
//!   [`Command`] interface (`applicable` to poll, `execute` to run).
//! - [`CommandTable`] is the id-keyed registry the presentation layer looks
//!   commands up in; every successful invocation is committed to the host's
//!   undo journal as one coarse-grained transaction.
//!
//! ## Minimal example
//!
//! ```rust
//! use borderbook_commands::{CommandArgs, CommandTable, LiveBorder, Outcome, SceneContext};
//! use borderbook_store::BorderStore;
//!
//! // Host state: an enabled render border covering the frame's center.
//! let mut render = LiveBorder {
//!     enabled: true,
//!     x_range: [0.2, 0.8],
//!     y_range: [0.1, 0.9],
//! };
//! let mut store = BorderStore::new();
//! let mut history = (); // no undo stack in this example
//!
//! let table = CommandTable::<LiveBorder>::with_builtin_commands();
//! let mut cx = SceneContext::new(&mut store, &mut render, &mut history);
//!
//! // "Save" button: capture the live border under a name.
//! let outcome = table
//!     .invoke("border.capture", &mut cx, &CommandArgs::named("Close-up"))
//!     .unwrap();
//! assert_eq!(outcome, Outcome::Captured { index: 0 });
//!
//! // The user fiddles with the live border, then hits "Set" on row 0.
//! table
//!     .invoke("border.apply", &mut cx, &CommandArgs::at(0))
//!     .unwrap();
//!
//! // "Remove" button on row 0.
//! table
//!     .invoke("border.delete", &mut cx, &CommandArgs::at(0))
//!     .unwrap();
//!
//! drop(cx);
//! assert!(store.is_empty());
//! assert_eq!(render.x_range, [0.2, 0.8]);
//! assert!(render.enabled);
//! ```
//!
//! ## Applicability
//!
//! Each command carries its own precondition, surfaced twice: the
//! presentation layer polls [`Command::applicable`] (or the `can_*` methods
//! on [`SceneContext`]) to disable buttons, and `execute` re-checks it so a
//! programmatic call fails with [`CommandError::Inapplicable`] instead of
//! corrupting state. Capture requires the live border to be enabled; Delete
//! requires a non-empty store; Apply is always offered and relies on index
//! validation alone.
//!
//! Out-of-range indices are presentation-contract violations and fail loudly
//! with [`CommandError::OutOfRange`] before anything is mutated. The only
//! silent index adjustment anywhere is the store's documented cursor
//! re-clamp after a deletion.
//!
//! ## Undo
//!
//! Undo/redo is delegated to the host. [`CommandTable::invoke`] commits one
//! [`History`] transaction per successful command, labelled with the command
//! id, so hosts that record their own snapshots get exactly one undo step
//! per user action.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;
mod context;
mod host;
mod table;

pub use command::{
    ApplyBorder, CaptureBorder, Command, CommandArgs, CommandError, DeleteBorder, Outcome,
};
pub use context::{History, SceneContext};
pub use host::{LiveBorder, RenderHost};
pub use table::CommandTable;
