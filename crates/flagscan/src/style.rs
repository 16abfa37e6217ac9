//! Visual decorations applied over styled ranges.

use bitflags::bitflags;

bitflags! {
    /// Set of decorations a renderer applies to a slice of plain text.
    ///
    /// Ranges of different kinds may overlap, so a single character can
    /// carry several decorations at once.
    ///
    /// # Example
    ///
    /// ```
    /// use flagscan::Decorations;
    ///
    /// let mut decorations = Decorations::empty();
    /// decorations |= Decorations::BOLD;
    /// decorations |= Decorations::ITALIC;
    ///
    /// assert!(decorations.contains(Decorations::BOLD));
    /// assert!(!decorations.contains(Decorations::MONOSPACE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Decorations: u8 {
        /// Strong/bold weight
        const BOLD          = 0b0000_0001;
        /// Oblique/italic slant
        const ITALIC        = 0b0000_0010;
        /// Strikethrough line
        const STRIKETHROUGH = 0b0000_0100;
        /// Fixed-width font substitution
        const MONOSPACE     = 0b0000_1000;
    }
}

impl Decorations {
    /// Returns true if the text is rendered in a fixed-width font.
    pub fn is_monospace(self) -> bool {
        self.contains(Decorations::MONOSPACE)
    }
}
