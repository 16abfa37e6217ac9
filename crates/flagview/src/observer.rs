//! Edit observers notified around each re-format.

use flagscan::FormattedText;

/// Receives notifications while an editor applies an edit.
///
/// Hooks fire in a fixed order for every edit: [`on_text_changing`] with
/// the text before the edit, [`on_text_changed`] with the spliced text
/// before it is re-parsed, then [`on_text_finalized`] with the formatted
/// value that was installed. Offsets and counts are in chars.
///
/// Every hook defaults to a no-op, so observers implement only what they
/// need.
///
/// [`on_text_changing`]: EditObserver::on_text_changing
/// [`on_text_changed`]: EditObserver::on_text_changed
/// [`on_text_finalized`]: EditObserver::on_text_finalized
pub trait EditObserver {
    /// Called before the edit is applied.
    fn on_text_changing(
        &mut self,
        _old_text: &str,
        _start: usize,
        _removed: usize,
        _inserted: usize,
    ) {
    }

    /// Called after the edit is spliced in, before re-parsing.
    fn on_text_changed(
        &mut self,
        _new_text: &str,
        _start: usize,
        _removed: usize,
        _inserted: usize,
    ) {
    }

    /// Called once the re-formatted value has been installed.
    fn on_text_finalized(&mut self, _formatted: &FormattedText) {}
}

/// Ordered list of observers, notified in registration order.
#[derive(Default)]
pub struct ObserverChain {
    observers: Vec<Box<dyn EditObserver>>,
}

impl ObserverChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an observer to the end of the chain.
    pub fn push(&mut self, observer: impl EditObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Number of registered observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if no observer is registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub(crate) fn text_changing(
        &mut self,
        old_text: &str,
        start: usize,
        removed: usize,
        inserted: usize,
    ) {
        for observer in &mut self.observers {
            observer.on_text_changing(old_text, start, removed, inserted);
        }
    }

    pub(crate) fn text_changed(
        &mut self,
        new_text: &str,
        start: usize,
        removed: usize,
        inserted: usize,
    ) {
        for observer in &mut self.observers {
            observer.on_text_changed(new_text, start, removed, inserted);
        }
    }

    pub(crate) fn text_finalized(&mut self, formatted: &FormattedText) {
        for observer in &mut self.observers {
            observer.on_text_finalized(formatted);
        }
    }
}

impl std::fmt::Debug for ObserverChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverChain")
            .field("observers", &self.observers.len())
            .finish()
    }
}
