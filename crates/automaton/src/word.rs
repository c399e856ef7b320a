use std::fmt;

/// A finite sequence of symbols.
///
/// Words are ordered lexicographically symbol by symbol, a proper prefix
/// comes before its extensions so the empty word is the least word.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(Vec<String>);

impl Word {
    /// Returns the empty word.
    pub fn empty() -> Word {
        Word(Vec::new())
    }

    pub fn new(symbols: Vec<String>) -> Word {
        Word(symbols)
    }

    /// Splits the given text into a word. Without a delimiter every character
    /// is a symbol. The texts "", "ε" and "epsilon" denote the empty word.
    pub fn parse(text: &str, delimiter: Option<char>) -> Word {
        let text = text.trim();
        if text.is_empty() || text == "ε" || text.eq_ignore_ascii_case("epsilon") {
            return Word::empty();
        }

        match delimiter {
            Some(delimiter) => text
                .split(delimiter)
                .map(str::trim)
                .filter(|symbol| !symbol.is_empty())
                .collect(),
            None => text.chars().map(String::from).collect(),
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Word {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Word(iter.into_iter().map(Into::into).collect())
    }
}

impl AsRef<[String]> for Word {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "ε");
        }

        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
