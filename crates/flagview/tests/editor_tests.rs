//! Tests for live re-formatting and observer notification order.

use std::cell::RefCell;
use std::rc::Rc;

use flagscan::{FormatOptions, FormattedText, Markers, MarkupKind, RangeGuard, StyledRange};
use flagview::{EditError, EditObserver, FormattingEditor, TextEdit};

type Log = Rc<RefCell<Vec<String>>>;

/// Records every hook it receives, tagged with its name.
struct Recorder {
    name: &'static str,
    log: Log,
}

impl Recorder {
    fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: log.clone(),
        }
    }
}

impl EditObserver for Recorder {
    fn on_text_changing(&mut self, old_text: &str, start: usize, removed: usize, inserted: usize) {
        self.log.borrow_mut().push(format!(
            "{} changing {:?} @{} -{} +{}",
            self.name, old_text, start, removed, inserted
        ));
    }

    fn on_text_changed(&mut self, new_text: &str, start: usize, removed: usize, inserted: usize) {
        self.log.borrow_mut().push(format!(
            "{} changed {:?} @{} -{} +{}",
            self.name, new_text, start, removed, inserted
        ));
    }

    fn on_text_finalized(&mut self, formatted: &FormattedText) {
        self.log.borrow_mut().push(format!(
            "{} finalized {:?} ranges={}",
            self.name,
            formatted.text(),
            formatted.ranges().len()
        ));
    }
}

fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

// ============================================================================
// Re-formatting
// ============================================================================

#[test]
fn typing_a_closing_delimiter_formats_the_span() {
    let mut editor = FormattingEditor::new("", FormatOptions::default());
    for (at, ch) in "*hey".chars().enumerate() {
        editor.insert(at, &ch.to_string()).unwrap();
    }
    assert_eq!(editor.text(), "*hey");
    assert!(editor.formatted().is_plain());

    editor.insert(4, "*").unwrap();
    assert_eq!(editor.text(), "hey");

    // The strict guard drops a range that reaches the end of the text
    assert!(editor.formatted().is_plain());
}

#[test]
fn delimiters_typed_mid_text_format_immediately() {
    let mut editor = FormattingEditor::new("say hi now", FormatOptions::default());
    editor.insert(4, "_").unwrap();
    assert_eq!(editor.text(), "say _hi now");

    editor.insert(7, "_").unwrap();
    assert_eq!(editor.text(), "say hi now");
    assert_eq!(
        editor.formatted().ranges(),
        &[StyledRange::new(MarkupKind::Italic, 4, 6)]
    );
}

#[test]
fn styling_is_not_carried_across_reparses() {
    let mut editor = FormattingEditor::new("*hi* there", FormatOptions::default());
    assert_eq!(editor.formatted().ranges().len(), 1);

    editor.insert(8, "!").unwrap();
    assert_eq!(editor.text(), "hi there!");
    assert!(editor.formatted().is_plain());
}

#[test]
fn inclusive_guard_formats_span_at_end() {
    let options = FormatOptions::new(Markers::default(), RangeGuard::Inclusive);
    let mut editor = FormattingEditor::new("~old", options);
    editor.insert(4, "~").unwrap();
    assert_eq!(editor.text(), "old");
    assert_eq!(
        editor.formatted().ranges(),
        &[StyledRange::new(MarkupKind::Strikethrough, 0, 3)]
    );
}

#[test]
fn set_text_replaces_everything() {
    let mut editor = FormattingEditor::new("first", FormatOptions::default());
    editor.set_text("```second``` text");
    assert_eq!(editor.text(), "second text");
    assert_eq!(
        editor.formatted().ranges(),
        &[StyledRange::new(MarkupKind::Monospace, 0, 6)]
    );
}

#[test]
fn delete_reformats() {
    let mut editor = FormattingEditor::new("a *b c", FormatOptions::default());
    editor.delete(5, 1).unwrap();
    assert_eq!(editor.text(), "a *b ");
    editor.insert(4, "*").unwrap();
    assert_eq!(editor.text(), "a b ");
    assert_eq!(
        editor.formatted().ranges(),
        &[StyledRange::new(MarkupKind::Bold, 2, 3)]
    );
}

// ============================================================================
// Observer Order
// ============================================================================

#[test]
fn hooks_fire_before_during_after() {
    let log = log();
    let mut editor = FormattingEditor::new("x *y", FormatOptions::default())
        .with_observer(Recorder::new("w", &log));

    editor.apply_edit(TextEdit::insert(4, "* z")).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            r#"w changing "x *y" @4 -0 +3"#,
            r#"w changed "x *y* z" @4 -0 +3"#,
            r#"w finalized "x y z" ranges=1"#,
        ]
    );
}

#[test]
fn observers_run_in_registration_order() {
    let log = log();
    let mut editor = FormattingEditor::new("abc", FormatOptions::default());
    editor.add_observer(Recorder::new("first", &log));
    editor.add_observer(Recorder::new("second", &log));

    editor.delete(0, 1).unwrap();

    let names: Vec<String> = log
        .borrow()
        .iter()
        .map(|entry| entry.split_whitespace().take(2).collect::<Vec<_>>().join(" "))
        .collect();
    assert_eq!(
        names,
        vec![
            "first changing",
            "second changing",
            "first changed",
            "second changed",
            "first finalized",
            "second finalized",
        ]
    );
}

#[test]
fn rejected_edit_notifies_nobody() {
    let log = log();
    let mut editor = FormattingEditor::new("abc", FormatOptions::default())
        .with_observer(Recorder::new("w", &log));

    let err = editor.insert(10, "x").unwrap_err();
    assert_eq!(
        err,
        EditError::OutOfBounds {
            start: 10,
            end: 10,
            len: 3
        }
    );
    assert!(log.borrow().is_empty());
}

#[test]
fn edit_offsets_count_chars() {
    let log = log();
    let mut editor = FormattingEditor::new("日本", FormatOptions::default())
        .with_observer(Recorder::new("w", &log));

    editor.insert(2, "語").unwrap();
    assert_eq!(editor.text(), "日本語");
    assert_eq!(editor.len(), 3);
    assert_eq!(log.borrow()[0], r#"w changing "日本" @2 -0 +1"#);
}
