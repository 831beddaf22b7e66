use std::fmt;

const ANSI_BOLD_RED: &str = "\x1b[1;31m";
const ANSI_RESET: &str = "\x1b[0m";

/// A `^` marker placed under a character offset.
///
/// Renders as `index` spaces followed by `^`, optionally wrapped in ANSI
/// bold red. Intended for monospace output directly under the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caret {
    pub index: usize,
    pub color: bool,
}

impl Caret {
    /// Create a plain caret at `index`.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            color: false,
        }
    }

    /// Enable ANSI highlighting of the marker.
    pub fn colored(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl fmt::Display for Caret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:width$}", "", width = self.index)?;
        if self.color {
            write!(f, "{ANSI_BOLD_RED}^{ANSI_RESET}")
        } else {
            write!(f, "^")
        }
    }
}
