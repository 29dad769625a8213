// Alignment symbols and helpers over symbol sequences

use std::fmt;

/// One position of an aligned or marked-up word.
///
/// `Gap`, `Start` and `End` are distinct variants rather than reserved
/// characters, so corpus data may contain any character (including `_`,
/// `<` and `>`) without colliding with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// Word-start marker, anchors prefix rules.
    Start,
    /// Word-end marker, anchors suffix rules.
    End,
    /// Alignment gap (insertion or deletion on the other side).
    Gap,
    Char(char),
}

impl Symbol {
    #[inline]
    pub fn is_gap(self) -> bool {
        self == Symbol::Gap
    }

    /// The underlying character, if this is a plain character.
    #[inline]
    pub fn as_char(self) -> Option<char> {
        match self {
            Symbol::Char(c) => Some(c),
            _ => None,
        }
    }

    /// Printable form used for diagnostics: `<`, `>`, `_` or the character.
    pub fn display_char(self) -> char {
        match self {
            Symbol::Start => '<',
            Symbol::End => '>',
            Symbol::Gap => '_',
            Symbol::Char(c) => c,
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_char())
    }
}

/// Convert a word into a sequence of `Symbol::Char`.
pub fn symbols(word: &str) -> Vec<Symbol> {
    word.chars().map(Symbol::Char).collect()
}

/// Wrap a word in word-start and word-end markers.
pub fn marked(word: &str) -> Vec<Symbol> {
    let mut seq = Vec::with_capacity(word.len() + 2);
    seq.push(Symbol::Start);
    seq.extend(word.chars().map(Symbol::Char));
    seq.push(Symbol::End);
    seq
}

/// Remove gap symbols, keeping characters and markers.
pub fn strip_gaps(seq: &[Symbol]) -> Vec<Symbol> {
    seq.iter().copied().filter(|s| !s.is_gap()).collect()
}

/// Collect the plain characters of a sequence, dropping gaps and markers.
pub fn to_word(seq: &[Symbol]) -> String {
    seq.iter().filter_map(|s| s.as_char()).collect()
}

/// Render a sequence with printable stand-ins for gaps and markers.
pub fn render(seq: &[Symbol]) -> String {
    seq.iter().map(|s| s.display_char()).collect()
}

/// Number of consecutive gaps at the start of a sequence.
pub fn leading_gaps(seq: &[Symbol]) -> usize {
    seq.iter().take_while(|s| s.is_gap()).count()
}

/// Number of consecutive gaps at the end of a sequence.
pub fn trailing_gaps(seq: &[Symbol]) -> usize {
    seq.iter().rev().take_while(|s| s.is_gap()).count()
}

/// Reverse a word character by character.
pub fn reverse_word(word: &str) -> String {
    word.chars().rev().collect()
}
