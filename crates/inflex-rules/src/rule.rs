// Affix-change rules

use std::fmt;

use inflex_core::symbol::{self, Symbol};

/// A rewrite `input -> output` over marked-up words.
///
/// Suffix rules end in `Symbol::End`, prefix rules begin with
/// `Symbol::Start`. Patterns never contain gaps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rule {
    input: Vec<Symbol>,
    output: Vec<Symbol>,
}

impl Rule {
    /// Build a rule from aligned material; gaps are removed from both sides.
    pub fn new(input: &[Symbol], output: &[Symbol]) -> Self {
        Self {
            input: symbol::strip_gaps(input),
            output: symbol::strip_gaps(output),
        }
    }

    /// Build a rule from printable patterns where `<` and `>` stand for the
    /// word-start and word-end markers.
    ///
    /// ```
    /// use inflex_rules::Rule;
    /// let rule = Rule::from_patterns("k>", "ked>");
    /// assert_eq!(rule.to_string(), "k> -> ked>");
    /// ```
    pub fn from_patterns(input: &str, output: &str) -> Self {
        fn parse(pattern: &str) -> Vec<Symbol> {
            pattern
                .chars()
                .map(|c| match c {
                    '<' => Symbol::Start,
                    '>' => Symbol::End,
                    c => Symbol::Char(c),
                })
                .collect()
        }
        Self {
            input: parse(input),
            output: parse(output),
        }
    }

    pub fn input(&self) -> &[Symbol] {
        &self.input
    }

    pub fn output(&self) -> &[Symbol] {
        &self.output
    }

    /// A rule that leaves its context unchanged.
    pub fn is_identity(&self) -> bool {
        self.input == self.output
    }

    /// Position of the first occurrence of the input pattern in `word`.
    pub fn find_in(&self, word: &[Symbol]) -> Option<usize> {
        if self.input.is_empty() {
            return Some(0);
        }
        word.windows(self.input.len()).position(|w| w == self.input.as_slice())
    }

    /// Replace the first occurrence of the input pattern with the output
    /// pattern. Returns `false` (and leaves `word` untouched) if there is none.
    pub fn apply_first(&self, word: &mut Vec<Symbol>) -> bool {
        match self.find_in(word) {
            Some(pos) => {
                word.splice(pos..pos + self.input.len(), self.output.iter().copied());
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            symbol::render(&self.input),
            symbol::render(&self.output)
        )
    }
}
