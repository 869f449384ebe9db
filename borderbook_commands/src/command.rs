// Copyright 2025 the Borderbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The command interface and the three built-in commands.

use alloc::string::String;
use core::fmt;

use borderbook_store::{DEFAULT_NAME, IndexOutOfBounds};

use crate::context::SceneContext;
use crate::host::RenderHost;

/// A command the presentation layer can poll and invoke.
///
/// Implementations are registered into a [`CommandTable`](crate::CommandTable)
/// and looked up by [`id`](Command::id). The presentation layer calls
/// [`applicable`](Command::applicable) to enable or disable its button, then
/// [`execute`](Command::execute) with whatever arguments the widget supplies.
///
/// `execute` must be all-or-nothing over the context: on error, neither the
/// store nor the host's live border may have changed.
pub trait Command<H: RenderHost> {
    /// Stable identifier this command is registered under.
    fn id(&self) -> &'static str;

    /// Returns `true` if the command's preconditions currently hold.
    fn applicable(&self, cx: &SceneContext<'_, H>) -> bool;

    /// Runs the command. Fails with [`CommandError::Inapplicable`] if
    /// [`applicable`](Command::applicable) would return `false`.
    fn execute(
        &self,
        cx: &mut SceneContext<'_, H>,
        args: &CommandArgs,
    ) -> Result<Outcome, CommandError>;
}

/// Arguments supplied at invocation time.
///
/// This mirrors the property bag a host UI attaches to a command invocation:
/// every field is optional, and each command reads only what it needs.
/// A missing `name` falls back to [`DEFAULT_NAME`]; a missing `index` for a
/// command that requires one is a presentation-layer contract violation and
/// fails with [`CommandError::MissingArgument`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandArgs {
    /// Label for a newly captured border.
    pub name: Option<String>,
    /// Store index to operate on, typically the widget's selected row.
    pub index: Option<usize>,
}

impl CommandArgs {
    /// Arguments carrying only a capture name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            index: None,
        }
    }

    /// Arguments carrying only a store index.
    #[must_use]
    pub fn at(index: usize) -> Self {
        Self {
            name: None,
            index: Some(index),
        }
    }
}

/// What a successful command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Capture appended a record at this index.
    Captured {
        /// Index of the new record.
        index: usize,
    },
    /// Apply wrote the live border.
    Applied,
    /// Delete removed a record and re-clamped the cursor.
    Deleted,
}

/// Error returned by command execution or dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The command's precondition does not hold (for example, Capture with
    /// the live border disabled). The presentation layer should have
    /// disabled the button; a programmatic call fails here instead.
    Inapplicable {
        /// Id of the refused command.
        command: &'static str,
    },
    /// An index was outside the store's current bounds.
    OutOfRange(IndexOutOfBounds),
    /// A required argument was not supplied.
    MissingArgument {
        /// Id of the refused command.
        command: &'static str,
        /// Name of the missing argument.
        argument: &'static str,
    },
    /// No command is registered under the given id.
    UnknownCommand {
        /// The id that was looked up.
        id: String,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inapplicable { command } => {
                write!(f, "command `{command}` is not applicable in this scene")
            }
            Self::OutOfRange(inner) => write!(f, "{inner}"),
            Self::MissingArgument { command, argument } => {
                write!(f, "command `{command}` requires the `{argument}` argument")
            }
            Self::UnknownCommand { id } => write!(f, "no command is registered as `{id}`"),
        }
    }
}

impl core::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::OutOfRange(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<IndexOutOfBounds> for CommandError {
    fn from(inner: IndexOutOfBounds) -> Self {
        Self::OutOfRange(inner)
    }
}

/// Saves the host's current render border into the scene's store.
///
/// Applicable only while the live border is enabled. The record name comes
/// from [`CommandArgs::name`], defaulting to [`DEFAULT_NAME`].
#[derive(Clone, Copy, Debug, Default)]
pub struct CaptureBorder;

impl CaptureBorder {
    /// Registered id of this command.
    pub const ID: &'static str = "border.capture";
}

impl<H: RenderHost> Command<H> for CaptureBorder {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn applicable(&self, cx: &SceneContext<'_, H>) -> bool {
        cx.can_capture()
    }

    fn execute(
        &self,
        cx: &mut SceneContext<'_, H>,
        args: &CommandArgs,
    ) -> Result<Outcome, CommandError> {
        let name = args.name.as_deref().unwrap_or(DEFAULT_NAME);
        let index = cx.capture(name)?;
        Ok(Outcome::Captured { index })
    }
}

/// Writes a saved border back to the host's live render border.
///
/// Always offered; an out-of-range [`CommandArgs::index`] fails loudly
/// without touching host state.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApplyBorder;

impl ApplyBorder {
    /// Registered id of this command.
    pub const ID: &'static str = "border.apply";
}

impl<H: RenderHost> Command<H> for ApplyBorder {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn applicable(&self, _cx: &SceneContext<'_, H>) -> bool {
        true
    }

    fn execute(
        &self,
        cx: &mut SceneContext<'_, H>,
        args: &CommandArgs,
    ) -> Result<Outcome, CommandError> {
        let index = args.index.ok_or(CommandError::MissingArgument {
            command: Self::ID,
            argument: "index",
        })?;
        cx.apply(index)?;
        Ok(Outcome::Applied)
    }
}

/// Deletes a saved border, re-clamping the store's cursor.
///
/// Applicable only while the store is non-empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct DeleteBorder;

impl DeleteBorder {
    /// Registered id of this command.
    pub const ID: &'static str = "border.delete";
}

impl<H: RenderHost> Command<H> for DeleteBorder {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn applicable(&self, cx: &SceneContext<'_, H>) -> bool {
        cx.can_delete()
    }

    fn execute(
        &self,
        cx: &mut SceneContext<'_, H>,
        args: &CommandArgs,
    ) -> Result<Outcome, CommandError> {
        let index = args.index.ok_or(CommandError::MissingArgument {
            command: Self::ID,
            argument: "index",
        })?;
        cx.delete(index)?;
        Ok(Outcome::Deleted)
    }
}
