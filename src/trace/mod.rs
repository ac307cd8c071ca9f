//! Trace model for the bracket-matching algorithm
//!
//! A [`Trace`] is the full, immutable sequence of [`Step`]s recorded while
//! matching one input string. Each step is a snapshot of the algorithm after
//! one input position: which character was looked at, what the stack holds,
//! and what the algorithm did.
//!
//! Traces are produced by [`generate`] and never modified afterwards; a new
//! input gets a new trace.
//!
//! All positions are character indices (`char`s), not byte offsets.

pub mod brackets;
mod generate;

pub use generate::generate;

use std::fmt;

/// What the algorithm did at a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Bookkeeping only: the initial state, a non-bracket character, or a
    /// balanced finish
    None,
    Push,
    Pop,
    /// Unmatched or mismatched closer, or openers left over at the end
    Error,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::None => "none",
            Action::Push => "push",
            Action::Pop => "pop",
            Action::Error => "error",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Where in the input a step sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Before the first character
    Initial,
    /// At the character with this index
    At(usize),
    /// Past the last character; carries the input length
    End(usize),
}

impl Cursor {
    /// Signed position: -1 for [`Cursor::Initial`], the input length for
    /// [`Cursor::End`].
    pub fn signed(self) -> isize {
        match self {
            Cursor::Initial => -1,
            Cursor::At(i) | Cursor::End(i) => i as isize,
        }
    }

    /// The character index, if the step refers to one
    pub fn char_index(self) -> Option<usize> {
        match self {
            Cursor::At(i) => Some(i),
            _ => None,
        }
    }
}

/// One recorded state of the matching algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub cursor: Cursor,
    pub character: Option<char>,
    /// Unmatched openers, bottom to top
    pub stack: Vec<char>,
    pub action: Action,
    /// Index of the opener this step matched, or failed to match against
    pub match_index: Option<usize>,
    /// Set only on the last step of a trace
    pub final_result: Option<bool>,
}

impl Step {
    pub fn is_terminal(&self) -> bool {
        self.final_result.is_some()
    }

    /// Top of the stack snapshot
    pub fn top(&self) -> Option<char> {
        self.stack.last().copied()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4} {:<5}", self.cursor.signed(), self.action)?;
        match self.character {
            Some(c) => write!(f, " {:?}", c)?,
            None => f.write_str("    ")?,
        }
        if let Some(m) = self.match_index {
            write!(f, " match {:<3}", m)?;
        } else {
            f.write_str("          ")?;
        }
        let stack: String = self.stack.iter().collect();
        write!(f, " stack [{}]", stack)?;
        if let Some(ok) = self.final_result {
            write!(f, " => {}", if ok { "valid" } else { "invalid" })?;
        }
        Ok(())
    }
}

/// The complete step sequence for one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    input: String,
    steps: Vec<Step>,
}

impl Trace {
    pub(crate) fn new(input: String, steps: Vec<Step>) -> Self {
        debug_assert!(steps.len() >= 2, "a trace has an initial and a final step");
        debug_assert!(steps.last().is_some_and(Step::is_terminal));
        Trace { input, steps }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Number of steps (always at least 2)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Never true for a generated trace
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the last step
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn terminal(&self) -> &Step {
        &self.steps[self.last_index()]
    }

    /// Whether the input is balanced
    pub fn is_valid(&self) -> bool {
        self.terminal().final_result.unwrap_or(false)
    }

    /// True when generation stopped on a bad closer before consuming all input
    pub fn short_circuited(&self) -> bool {
        matches!(self.terminal().cursor, Cursor::At(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_signed_positions() {
        assert_eq!(Cursor::Initial.signed(), -1);
        assert_eq!(Cursor::At(3).signed(), 3);
        assert_eq!(Cursor::End(6).signed(), 6);
        assert_eq!(Cursor::End(6).char_index(), None);
        assert_eq!(Cursor::At(2).char_index(), Some(2));
    }

    #[test]
    fn test_step_display() {
        let trace = generate("(]");
        let lines: Vec<String> = trace.steps().iter().map(|s| s.to_string()).collect();
        assert!(lines[0].starts_with("  -1 none"));
        assert!(lines[1].contains("push  '('"));
        assert!(lines[2].contains("error ']' match 0"));
        assert!(lines[2].ends_with("stack [(] => invalid"));
    }

    #[test]
    fn test_short_circuit_flag() {
        assert!(generate("(]").short_circuited());
        assert!(!generate("((").short_circuited());
        assert!(!generate("()").short_circuited());
    }
}
