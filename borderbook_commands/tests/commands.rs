// Copyright 2025 the Borderbook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `borderbook_commands` crate.
//!
//! These exercise the three built-in commands end to end against the
//! in-memory `LiveBorder` host, plus the table's dispatch and undo-journal
//! behavior.

use borderbook_commands::{
    ApplyBorder, CaptureBorder, Command, CommandArgs, CommandError, CommandTable, DeleteBorder,
    History, LiveBorder, Outcome, SceneContext,
};
use borderbook_store::{BorderRecord, BorderStore, DEFAULT_NAME, IndexOutOfBounds};

/// Journal that records every committed label, for assertions.
#[derive(Default)]
struct RecordingHistory {
    labels: Vec<&'static str>,
}

impl History for RecordingHistory {
    fn commit(&mut self, label: &'static str) {
        self.labels.push(label);
    }
}

fn enabled_border(x_range: [f64; 2], y_range: [f64; 2]) -> LiveBorder {
    LiveBorder {
        enabled: true,
        x_range,
        y_range,
    }
}

#[test]
fn capture_appends_exactly_one_matching_record() {
    let mut store = BorderStore::new();
    store.append(BorderRecord::new("existing", [0.0, 0.5], [0.0, 0.5]));
    let mut render = enabled_border([0.2, 0.8], [0.1, 0.9]);
    let mut history = ();
    let mut cx = SceneContext::new(&mut store, &mut render, &mut history);

    let index = cx.capture("A").unwrap();
    assert_eq!(index, 1);
    assert_eq!(cx.store().len(), 2);
    assert_eq!(
        cx.store().get(1).unwrap(),
        &BorderRecord::new("A", [0.2, 0.8], [0.1, 0.9])
    );

    // The pre-existing record and the cursor are untouched.
    assert_eq!(cx.store().get(0).unwrap().name, "existing");
    assert_eq!(cx.store().active_index(), None);
}

#[test]
fn capture_requires_enabled_live_border() {
    let mut store = BorderStore::new();
    let mut render = LiveBorder::default();
    let mut history = ();
    let mut cx = SceneContext::new(&mut store, &mut render, &mut history);

    assert!(!cx.can_capture());
    assert_eq!(
        cx.capture("A"),
        Err(CommandError::Inapplicable {
            command: CaptureBorder::ID
        })
    );
    assert!(cx.store().is_empty());
}

#[test]
fn capture_command_defaults_the_name() {
    let mut store = BorderStore::new();
    let mut render = enabled_border([0.2, 0.8], [0.1, 0.9]);
    let mut history = ();
    let mut cx = SceneContext::new(&mut store, &mut render, &mut history);

    let outcome = CaptureBorder
        .execute(&mut cx, &CommandArgs::default())
        .unwrap();
    assert_eq!(outcome, Outcome::Captured { index: 0 });
    assert_eq!(cx.store().get(0).unwrap().name, DEFAULT_NAME);
}

#[test]
fn apply_copies_stored_bounds_and_enables_the_border() {
    let mut store = BorderStore::new();
    store.append(BorderRecord::new("A", [0.2, 0.8], [0.1, 0.9]));
    store.append(BorderRecord::new("B", [0.0, 0.4], [0.6, 1.0]));
    let mut render = LiveBorder::default();
    let mut history = ();
    let mut cx = SceneContext::new(&mut store, &mut render, &mut history);

    for (index, x_range, y_range) in [(0, [0.2, 0.8], [0.1, 0.9]), (1, [0.0, 0.4], [0.6, 1.0])] {
        cx.apply(index).unwrap();
        assert!(cx.host().enabled);
        assert_eq!(cx.host().x_range, x_range);
        assert_eq!(cx.host().y_range, y_range);
    }

    // The store itself is never mutated by Apply.
    drop(cx);
    assert_eq!(store.len(), 2);
    assert_eq!(store.active_index(), None);
}

#[test]
fn apply_out_of_range_mutates_nothing() {
    let mut store = BorderStore::new();
    store.append(BorderRecord::new("A", [0.2, 0.8], [0.1, 0.9]));
    let mut render = LiveBorder::default();
    let mut history = ();
    let mut cx = SceneContext::new(&mut store, &mut render, &mut history);

    assert_eq!(
        cx.apply(1),
        Err(CommandError::OutOfRange(IndexOutOfBounds {
            index: 1,
            len: 1
        }))
    );
    assert_eq!(cx.host(), &LiveBorder::default());
}

#[test]
fn apply_command_requires_an_index() {
    let mut store = BorderStore::new();
    let mut render = LiveBorder::default();
    let mut history = ();
    let mut cx = SceneContext::new(&mut store, &mut render, &mut history);

    assert_eq!(
        ApplyBorder.execute(&mut cx, &CommandArgs::default()),
        Err(CommandError::MissingArgument {
            command: ApplyBorder::ID,
            argument: "index",
        })
    );
}

#[test]
fn capture_then_apply_round_trips_the_bounds() {
    let mut store = BorderStore::new();
    let mut render = enabled_border([0.25, 0.75], [0.33, 0.66]);
    let mut history = ();
    let mut cx = SceneContext::new(&mut store, &mut render, &mut history);

    let index = cx.capture("snapshot").unwrap();

    // The user moves the live border elsewhere and disables it.
    drop(cx);
    render.x_range = [0.0, 1.0];
    render.y_range = [0.0, 1.0];
    render.enabled = false;

    let mut history = ();
    let mut cx = SceneContext::new(&mut store, &mut render, &mut history);
    cx.apply(index).unwrap();
    assert!(cx.host().enabled);
    assert_eq!(cx.host().x_range, [0.25, 0.75]);
    assert_eq!(cx.host().y_range, [0.33, 0.66]);
}

#[test]
fn delete_requires_a_non_empty_store() {
    let mut store = BorderStore::new();
    let mut render = LiveBorder::default();
    let mut history = ();
    let mut cx = SceneContext::new(&mut store, &mut render, &mut history);

    assert!(!cx.can_delete());
    assert_eq!(
        cx.delete(0),
        Err(CommandError::Inapplicable {
            command: DeleteBorder::ID
        })
    );
}

#[test]
fn delete_reclamps_the_cursor() {
    let mut store = BorderStore::new();
    for name in ["A", "B", "C"] {
        store.append(BorderRecord::new(name, [0.2, 0.8], [0.1, 0.9]));
    }
    store.set_active(2).unwrap();
    let mut render = LiveBorder::default();
    let mut history = ();
    let mut cx = SceneContext::new(&mut store, &mut render, &mut history);

    cx.delete(2).unwrap();
    assert_eq!(cx.store().active_index(), Some(1));

    cx.delete(0).unwrap();
    assert_eq!(cx.store().active_index(), Some(0));
    assert_eq!(cx.store().get(0).unwrap().name, "B");

    cx.delete(0).unwrap();
    assert!(cx.store().is_empty());
    assert_eq!(cx.store().active_index(), None);
}

#[test]
fn sequence_capture_capture_delete_first() {
    let mut store = BorderStore::new();
    let mut render = enabled_border([0.2, 0.8], [0.1, 0.9]);
    let mut history = ();
    let mut cx = SceneContext::new(&mut store, &mut render, &mut history);

    cx.capture("X").unwrap();
    cx.capture("Y").unwrap();
    cx.delete(0).unwrap();

    let names: Vec<&str> = cx.store().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Y"]);
    assert_eq!(cx.store().active_index(), Some(0));
}

#[test]
fn table_registers_the_three_builtin_commands() {
    let table = CommandTable::<LiveBorder>::with_builtin_commands();
    let ids: Vec<&str> = table.ids().collect();
    assert_eq!(ids, ["border.capture", "border.apply", "border.delete"]);

    assert!(table.get(CaptureBorder::ID).is_some());
    assert!(table.get("border.nope").is_none());
}

#[test]
fn table_polls_preconditions_per_command() {
    let mut store = BorderStore::new();
    let mut render = LiveBorder::default();
    let mut history = ();
    let cx = SceneContext::new(&mut store, &mut render, &mut history);
    let table = CommandTable::<LiveBorder>::with_builtin_commands();

    // Disabled border, empty store: only Apply is offered.
    assert!(!table.applicable(CaptureBorder::ID, &cx));
    assert!(table.applicable(ApplyBorder::ID, &cx));
    assert!(!table.applicable(DeleteBorder::ID, &cx));
    assert!(!table.applicable("border.nope", &cx));
}

#[test]
fn invoke_commits_one_undo_step_per_success_and_none_on_failure() {
    let mut store = BorderStore::new();
    let mut render = enabled_border([0.2, 0.8], [0.1, 0.9]);
    let mut history = RecordingHistory::default();
    let table = CommandTable::<LiveBorder>::with_builtin_commands();
    let mut cx = SceneContext::new(&mut store, &mut render, &mut history);

    table
        .invoke(CaptureBorder::ID, &mut cx, &CommandArgs::named("A"))
        .unwrap();
    table
        .invoke(ApplyBorder::ID, &mut cx, &CommandArgs::at(0))
        .unwrap();

    // Failures must not reach the journal.
    assert!(table.invoke(ApplyBorder::ID, &mut cx, &CommandArgs::at(9)).is_err());
    assert!(
        table
            .invoke("border.nope", &mut cx, &CommandArgs::default())
            .is_err()
    );

    table
        .invoke(DeleteBorder::ID, &mut cx, &CommandArgs::at(0))
        .unwrap();

    drop(cx);
    assert_eq!(
        history.labels,
        ["border.capture", "border.apply", "border.delete"]
    );
}

#[test]
fn invoke_rejects_unknown_ids() {
    let mut store = BorderStore::new();
    let mut render = LiveBorder::default();
    let mut history = ();
    let table = CommandTable::<LiveBorder>::with_builtin_commands();
    let mut cx = SceneContext::new(&mut store, &mut render, &mut history);

    assert_eq!(
        table.invoke("border.nope", &mut cx, &CommandArgs::default()),
        Err(CommandError::UnknownCommand {
            id: "border.nope".into()
        })
    );
}

#[test]
fn register_replaces_commands_with_the_same_id() {
    /// Capture that refuses everything, standing in for a host override.
    #[derive(Clone, Copy, Debug)]
    struct StubbornCapture;

    impl Command<LiveBorder> for StubbornCapture {
        fn id(&self) -> &'static str {
            CaptureBorder::ID
        }

        fn applicable(&self, _cx: &SceneContext<'_, LiveBorder>) -> bool {
            false
        }

        fn execute(
            &self,
            _cx: &mut SceneContext<'_, LiveBorder>,
            _args: &CommandArgs,
        ) -> Result<Outcome, CommandError> {
            Err(CommandError::Inapplicable {
                command: CaptureBorder::ID,
            })
        }
    }

    let mut table = CommandTable::<LiveBorder>::with_builtin_commands();
    table.register(Box::new(StubbornCapture));

    // Still three commands, in the original order.
    assert_eq!(table.ids().count(), 3);
    assert_eq!(table.ids().next(), Some(CaptureBorder::ID));

    let mut store = BorderStore::new();
    let mut render = enabled_border([0.2, 0.8], [0.1, 0.9]);
    let mut history = ();
    let cx = SceneContext::new(&mut store, &mut render, &mut history);
    assert!(!table.applicable(CaptureBorder::ID, &cx));
}
