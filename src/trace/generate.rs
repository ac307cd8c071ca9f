// Step generation for the stack-matching algorithm

use super::brackets::{classify, BracketKind};
use super::{Action, Cursor, Step, Trace};
use tracing::debug;

/// An opener waiting on the stack, with the index it was read at
#[derive(Debug, Clone, Copy)]
struct OpenBracket {
    ch: char,
    index: usize,
}

/// Working stack used while generating a trace
#[derive(Debug, Default)]
struct MatchStack {
    items: Vec<OpenBracket>,
}

impl MatchStack {
    fn push(&mut self, ch: char, index: usize) {
        self.items.push(OpenBracket { ch, index });
    }

    fn pop(&mut self) -> Option<OpenBracket> {
        self.items.pop()
    }

    fn top(&self) -> Option<OpenBracket> {
        self.items.last().copied()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn snapshot(&self) -> Vec<char> {
        self.items.iter().map(|b| b.ch).collect()
    }
}

/// Run the matching algorithm over `input` and record every state.
///
/// The first step is the initial state and the last step always carries
/// `final_result`. Generation stops at the first closer that has no opener
/// or meets the wrong one; that error step is then the last step.
pub fn generate(input: &str) -> Trace {
    let mut stack = MatchStack::default();
    let mut steps = vec![Step {
        cursor: Cursor::Initial,
        character: None,
        stack: Vec::new(),
        action: Action::None,
        match_index: None,
        final_result: None,
    }];

    let mut len = 0;
    for (i, ch) in input.chars().enumerate() {
        len = i + 1;
        match classify(ch) {
            BracketKind::Open => {
                stack.push(ch, i);
                steps.push(Step {
                    cursor: Cursor::At(i),
                    character: Some(ch),
                    stack: stack.snapshot(),
                    action: Action::Push,
                    match_index: None,
                    final_result: None,
                });
            }
            BracketKind::Close(expected) => match stack.top() {
                Some(top) if top.ch == expected => {
                    stack.pop();
                    steps.push(Step {
                        cursor: Cursor::At(i),
                        character: Some(ch),
                        stack: stack.snapshot(),
                        action: Action::Pop,
                        match_index: Some(top.index),
                        final_result: None,
                    });
                }
                top => {
                    steps.push(Step {
                        cursor: Cursor::At(i),
                        character: Some(ch),
                        stack: stack.snapshot(),
                        action: Action::Error,
                        match_index: top.map(|b| b.index),
                        final_result: Some(false),
                    });
                    debug!(
                        position = i,
                        closer = %ch,
                        steps = steps.len(),
                        "trace short-circuited on unmatched closer"
                    );
                    return Trace::new(input.to_string(), steps);
                }
            },
            BracketKind::Other => {
                steps.push(Step {
                    cursor: Cursor::At(i),
                    character: Some(ch),
                    stack: stack.snapshot(),
                    action: Action::None,
                    match_index: None,
                    final_result: None,
                });
            }
        }
    }

    let balanced = stack.is_empty();
    steps.push(Step {
        cursor: Cursor::End(len),
        character: None,
        stack: stack.snapshot(),
        action: if balanced { Action::None } else { Action::Error },
        match_index: None,
        final_result: Some(balanced),
    });
    debug!(
        chars = len,
        steps = steps.len(),
        valid = balanced,
        "trace generated"
    );
    Trace::new(input.to_string(), steps)
}
