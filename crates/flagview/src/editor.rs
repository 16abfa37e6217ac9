//! Live-edit re-formatting.
//!
//! [`FormattingEditor`] holds the displayed text of an editable widget. Each
//! edit is spliced into the displayed text, the whole result is scanned
//! again, and the fresh plain text and ranges replace what was shown. No
//! state survives between re-parses, so delimiters consumed by an earlier
//! pass are gone from the text and their styling is not carried over.

use flagscan::{FormatOptions, FormattedText, format_with};

use crate::error::EditError;
use crate::observer::{EditObserver, ObserverChain};

/// A replacement of `removed` chars at `start` by `inserted`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    /// Char offset where the edit begins.
    pub start: usize,
    /// Number of chars removed from `start`.
    pub removed: usize,
    /// Text inserted at `start`.
    pub inserted: String,
}

impl TextEdit {
    /// Replace `removed` chars at `start` with `inserted`.
    pub fn replace(start: usize, removed: usize, inserted: impl Into<String>) -> Self {
        Self {
            start,
            removed,
            inserted: inserted.into(),
        }
    }

    /// Insert `text` at `at`.
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::replace(at, 0, text)
    }

    /// Delete `count` chars starting at `start`.
    pub fn delete(start: usize, count: usize) -> Self {
        Self::replace(start, count, String::new())
    }

    /// Char offset one past the removed region.
    pub fn end(&self) -> Option<usize> {
        self.start.checked_add(self.removed)
    }
}

/// Editable text that re-formats itself after every edit.
///
/// # Examples
///
/// ```
/// use flagscan::FormatOptions;
/// use flagview::{FormattingEditor, TextEdit};
///
/// let mut editor = FormattingEditor::new("", FormatOptions::default());
/// editor.apply_edit(TextEdit::insert(0, "_so_ fun")).unwrap();
/// assert_eq!(editor.text(), "so fun");
/// assert_eq!(editor.formatted().ranges().len(), 1);
/// ```
#[derive(Debug)]
pub struct FormattingEditor {
    formatted: FormattedText,
    options: FormatOptions,
    observers: ObserverChain,
}

impl FormattingEditor {
    /// Create an editor showing `text` formatted with `options`.
    ///
    /// Blank text is shown unchanged.
    pub fn new(text: &str, options: FormatOptions) -> Self {
        let formatted =
            format_with(text, &options).unwrap_or_else(|| FormattedText::plain(text));
        Self {
            formatted,
            options,
            observers: ObserverChain::new(),
        }
    }

    /// Register an observer, builder style.
    pub fn with_observer(mut self, observer: impl EditObserver + 'static) -> Self {
        self.add_observer(observer);
        self
    }

    /// Register an observer after the ones already registered.
    pub fn add_observer(&mut self, observer: impl EditObserver + 'static) {
        self.observers.push(observer);
    }

    /// The displayed plain text.
    pub fn text(&self) -> &str {
        self.formatted.text()
    }

    /// The displayed text with its applied ranges.
    pub fn formatted(&self) -> &FormattedText {
        &self.formatted
    }

    /// Options used for every re-format.
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Length of the displayed text in chars.
    pub fn len(&self) -> usize {
        self.formatted.len()
    }

    /// Returns true if nothing is displayed.
    pub fn is_empty(&self) -> bool {
        self.formatted.is_empty()
    }

    /// Apply an edit, re-format the whole text and notify observers.
    ///
    /// Observers see `on_text_changing`, `on_text_changed` and
    /// `on_text_finalized`, in that order. An edit outside the text is
    /// rejected before any observer is notified.
    pub fn apply_edit(&mut self, edit: TextEdit) -> Result<(), EditError> {
        let len = self.formatted.len();
        let end = match edit.end() {
            Some(end) if end <= len => end,
            _ => {
                return Err(EditError::OutOfBounds {
                    start: edit.start,
                    end: edit.start.saturating_add(edit.removed),
                    len,
                });
            }
        };
        self.replace_range(edit.start, end, &edit.inserted);
        Ok(())
    }

    /// Insert `text` at char offset `at`.
    pub fn insert(&mut self, at: usize, text: &str) -> Result<(), EditError> {
        self.apply_edit(TextEdit::insert(at, text))
    }

    /// Delete `count` chars starting at `start`.
    pub fn delete(&mut self, start: usize, count: usize) -> Result<(), EditError> {
        self.apply_edit(TextEdit::delete(start, count))
    }

    /// Replace the whole text.
    pub fn set_text(&mut self, text: &str) {
        let len = self.len();
        self.replace_range(0, len, text);
    }

    /// Splice `inserted` over chars `start..end`, which must lie inside the
    /// text, then re-format and notify.
    fn replace_range(&mut self, start: usize, end: usize, inserted: &str) {
        let removed = end - start;
        let inserted_len = inserted.chars().count();

        self.observers
            .text_changing(self.formatted.text(), start, removed, inserted_len);

        let raw = splice(self.formatted.text(), start, end, inserted);
        self.observers.text_changed(&raw, start, removed, inserted_len);

        self.formatted = self.options.formatted(&raw);
        log::debug!(
            "re-formatted {} chars into {} with {} ranges",
            raw.chars().count(),
            self.formatted.len(),
            self.formatted.ranges().len()
        );

        self.observers.text_finalized(&self.formatted);
    }
}

/// Replace chars `start..end` of `text` with `inserted`.
fn splice(text: &str, start: usize, end: usize, inserted: &str) -> String {
    let byte_at = |offset: usize| {
        text.char_indices()
            .nth(offset)
            .map(|(idx, _)| idx)
            .unwrap_or(text.len())
    };
    let (head, tail) = (byte_at(start), byte_at(end));

    let mut out = String::with_capacity(text.len() + inserted.len());
    out.push_str(&text[..head]);
    out.push_str(inserted);
    out.push_str(&text[tail..]);
    out
}
