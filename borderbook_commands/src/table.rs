// Copyright 2025 the Borderbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Name-keyed command registration and dispatch.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::command::{
    ApplyBorder, CaptureBorder, Command, CommandArgs, CommandError, DeleteBorder, Outcome,
};
use crate::context::SceneContext;
use crate::host::RenderHost;

/// A registry of [`Command`]s, looked up by id.
///
/// The presentation layer holds one table per host integration and drives it
/// in two steps: [`applicable`](CommandTable::applicable) when drawing a
/// button, [`invoke`](CommandTable::invoke) when it is pressed. `invoke`
/// commits exactly one [`History`](crate::History) transaction per
/// successful command, so each invocation is one host undo step.
///
/// Commands live in a small `Vec` scanned by id; registration order is
/// preserved and re-registering an id replaces the earlier command.
pub struct CommandTable<H> {
    commands: Vec<Box<dyn Command<H>>>,
}

impl<H> fmt::Debug for CommandTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandTable")
            .field("len", &self.commands.len())
            .finish_non_exhaustive()
    }
}

impl<H: RenderHost> CommandTable<H> {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Creates a table with [`CaptureBorder`], [`ApplyBorder`], and
    /// [`DeleteBorder`] registered.
    #[must_use]
    pub fn with_builtin_commands() -> Self {
        let mut table = Self::new();
        table.register(Box::new(CaptureBorder));
        table.register(Box::new(ApplyBorder));
        table.register(Box::new(DeleteBorder));
        table
    }

    /// Registers `command` under its own id.
    ///
    /// If a command with the same id is already present, it is replaced in
    /// place; otherwise the command is appended.
    pub fn register(&mut self, command: Box<dyn Command<H>>) {
        let id = command.id();
        if let Some(slot) = self.commands.iter_mut().find(|c| c.id() == id) {
            *slot = command;
        } else {
            self.commands.push(command);
        }
    }

    /// Returns the command registered under `id`, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Command<H>> {
        self.commands
            .iter()
            .find(|c| c.id() == id)
            .map(|boxed| &**boxed)
    }

    /// Returns the registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.id())
    }

    /// Returns `true` if `id` is registered and its preconditions hold.
    ///
    /// Unknown ids are simply not applicable; the presentation layer draws
    /// the button disabled either way.
    #[must_use]
    pub fn applicable(&self, id: &str, cx: &SceneContext<'_, H>) -> bool {
        self.get(id).is_some_and(|c| c.applicable(cx))
    }

    /// Executes the command registered under `id`.
    ///
    /// On success, commits one undo transaction labelled with the command's
    /// id. On any failure — unknown id, missing argument, precondition, or
    /// out-of-range index — nothing is committed and neither the store nor
    /// the live border has changed.
    pub fn invoke(
        &self,
        id: &str,
        cx: &mut SceneContext<'_, H>,
        args: &CommandArgs,
    ) -> Result<Outcome, CommandError> {
        let command = self
            .get(id)
            .ok_or_else(|| CommandError::UnknownCommand { id: String::from(id) })?;

        let outcome = command.execute(cx, args)?;
        cx.commit(command.id());
        Ok(outcome)
    }
}

impl<H: RenderHost> Default for CommandTable<H> {
    /// Equivalent to [`CommandTable::with_builtin_commands`].
    fn default() -> Self {
        Self::with_builtin_commands()
    }
}
