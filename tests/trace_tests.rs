// Integration tests for trace generation

use parentrace::trace::{generate, Action, Cursor, Step};

fn stack(step: &Step) -> String {
    step.stack.iter().collect()
}

#[test]
fn test_empty_input() {
    let trace = generate("");
    assert_eq!(trace.len(), 2);

    let first = &trace.steps()[0];
    assert_eq!(first.cursor, Cursor::Initial);
    assert_eq!(first.action, Action::None);
    assert!(first.stack.is_empty());

    let last = &trace.steps()[1];
    assert_eq!(last.cursor, Cursor::End(0));
    assert_eq!(last.final_result, Some(true));
    assert!(last.stack.is_empty());
    assert!(trace.is_valid());
}

#[test]
fn test_single_pair() {
    let trace = generate("()");
    let steps = trace.steps();
    assert_eq!(steps.len(), 4);

    assert_eq!(steps[0].cursor.signed(), -1);
    assert_eq!(stack(&steps[0]), "");

    assert_eq!(steps[1].action, Action::Push);
    assert_eq!(steps[1].character, Some('('));
    assert_eq!(stack(&steps[1]), "(");

    assert_eq!(steps[2].action, Action::Pop);
    assert_eq!(steps[2].character, Some(')'));
    assert_eq!(stack(&steps[2]), "");
    assert_eq!(steps[2].match_index, Some(0));

    assert_eq!(steps[3].cursor.signed(), 2);
    assert_eq!(steps[3].final_result, Some(true));
}

#[test]
fn test_mismatched_pair_stops_at_error() {
    let trace = generate("(]");
    let steps = trace.steps();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[1].action, Action::Push);
    assert_eq!(stack(&steps[1]), "(");

    let err = &steps[2];
    assert_eq!(err.action, Action::Error);
    assert_eq!(err.character, Some(']'));
    assert_eq!(err.match_index, Some(0));
    assert_eq!(err.final_result, Some(false));
    assert!(!trace.is_valid());
}

#[test]
fn test_closer_on_empty_stack() {
    let trace = generate("]");
    let steps = trace.steps();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1].action, Action::Error);
    assert_eq!(steps[1].cursor, Cursor::At(0));
    assert_eq!(steps[1].match_index, None);
    assert!(steps[1].stack.is_empty());
    assert_eq!(steps[1].final_result, Some(false));
}

#[test]
fn test_nested_brackets() {
    let trace = generate("([{}])");
    assert_eq!(trace.len(), 8);
    let actions: Vec<Action> = trace.steps()[1..7].iter().map(|s| s.action).collect();
    assert_eq!(
        actions,
        vec![
            Action::Push,
            Action::Push,
            Action::Push,
            Action::Pop,
            Action::Pop,
            Action::Pop
        ]
    );
    let matches: Vec<Option<usize>> = trace.steps()[4..7].iter().map(|s| s.match_index).collect();
    assert_eq!(matches, vec![Some(2), Some(1), Some(0)]);
    assert!(trace.terminal().stack.is_empty());
    assert!(trace.is_valid());
}

#[test]
fn test_non_bracket_input_is_valid() {
    let trace = generate("abc");
    assert_eq!(trace.len(), 5);
    assert!(trace.steps()[1..4].iter().all(|s| s.action == Action::None && s.stack.is_empty()));
    assert!(trace.is_valid());
}

#[test]
fn test_unclosed_openers_are_invalid() {
    let trace = generate("((())");
    assert_eq!(trace.len(), 7);
    let last = trace.terminal();
    assert_eq!(last.cursor, Cursor::End(5));
    assert_eq!(stack(last), "(");
    assert_eq!(last.final_result, Some(false));
}

#[test]
fn test_step_count_matches_processed_chars() {
    let cases = [
        ("", 0, false),
        ("()", 2, false),
        ("{[()]}", 6, false),
        ("(){[({})]}", 10, false),
        ("([}}])", 3, true),
        ("([)]", 3, true),
        ("]]]]", 1, true),
        ("a(b)c]d", 6, true),
    ];
    for (input, processed, errored) in cases {
        let trace = generate(input);
        let expected = if errored { 1 + processed } else { 1 + processed + 1 };
        assert_eq!(trace.len(), expected, "input {input:?}");
        assert_eq!(trace.short_circuited(), errored, "input {input:?}");
    }
}

#[test]
fn test_stack_snapshot_tracks_unmatched_openers() {
    let input = "{[(x)]}(";
    let trace = generate(input);
    let chars: Vec<char> = input.chars().collect();
    let mut expected: Vec<char> = Vec::new();
    for step in trace.steps() {
        if let Cursor::At(i) = step.cursor {
            match chars[i] {
                '(' | '[' | '{' => expected.push(chars[i]),
                ')' | ']' | '}' => {
                    expected.pop();
                }
                _ => {}
            }
        }
        assert_eq!(step.stack, expected, "at {:?}", step.cursor);
    }
}

#[test]
fn test_generation_is_deterministic() {
    for input in ["", "([])", "([)]", "{[()]}", "((())", "(){[]}", "([}}])", "x{y}z"] {
        assert_eq!(generate(input), generate(input), "input {input:?}");
    }
}
