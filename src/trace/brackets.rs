// Bracket classification for the matching algorithm

/// Role a character plays in the matching algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    Open,
    /// Carries the opener this closer must meet on top of the stack
    Close(char),
    Other,
}

/// Classify a character against the fixed pair table:
/// `)`↔`(`, `]`↔`[`, `}`↔`{`.
pub fn classify(c: char) -> BracketKind {
    match c {
        '(' | '[' | '{' => BracketKind::Open,
        ')' => BracketKind::Close('('),
        ']' => BracketKind::Close('['),
        '}' => BracketKind::Close('{'),
        _ => BracketKind::Other,
    }
}

pub fn is_bracket(c: char) -> bool {
    classify(c) != BracketKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_table() {
        for (open, close) in [('(', ')'), ('[', ']'), ('{', '}')] {
            assert_eq!(classify(open), BracketKind::Open);
            assert_eq!(classify(close), BracketKind::Close(open));
        }
    }

    #[test]
    fn test_lookalikes_do_not_participate() {
        for c in ['<', '>', '«', '»', '（', '）', 'a', ' '] {
            assert_eq!(classify(c), BracketKind::Other, "{c:?}");
            assert!(!is_bracket(c));
        }
    }
}
