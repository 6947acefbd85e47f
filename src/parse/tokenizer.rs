use super::ParseError;

/// Selects how [`tokenize`] splits its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// Any character in the C-locale whitespace class.
    Whitespace,
    /// One specific literal character.
    Char(char),
}

impl Delimiter {
    pub fn matches(self, c: char) -> bool {
        match self {
            Delimiter::Whitespace => is_space(c),
            Delimiter::Char(d) => c == d,
        }
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        if is_space(c) {
            Delimiter::Whitespace
        } else {
            Delimiter::Char(c)
        }
    }
}

/// Whitespace as `isspace` sees it in the C locale. `char::is_ascii_whitespace`
/// leaves out vertical tab.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Trims both ends and collapses every interior whitespace run to a single space.
pub fn normalize_whitespace(input: &str) -> String {
    let trimmed = input.trim_matches(is_space);
    let mut result = String::with_capacity(trimmed.len());
    let mut prev_space = false;

    for c in trimmed.chars() {
        if is_space(c) {
            if !prev_space {
                result.push(' ');
                prev_space = true;
            }
        } else {
            result.push(c);
            prev_space = false;
        }
    }

    result
}

/// Number of tokens `delim` should produce over an already normalized string.
pub fn count_tokens(normalized: &str, delim: Delimiter) -> usize {
    1 + normalized.chars().filter(|&c| delim.matches(c)).count()
}

/// Splits `input` into owned tokens.
///
/// Whitespace is normalized first regardless of the delimiter, so `"a b : c"`
/// split on `':'` gives `"a b "` and `" c"`. The walk is checked against the
/// pre-count and any disagreement is reported instead of returning a short
/// vector.
pub fn tokenize(input: &str, delim: Delimiter) -> Result<Vec<String>, ParseError> {
    let normalized = normalize_whitespace(input);
    if normalized.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let expected = count_tokens(&normalized, delim);
    let tokens: Vec<String> = normalized
        .split(|c: char| delim.matches(c))
        .map(str::to_owned)
        .collect();

    if tokens.len() != expected {
        return Err(ParseError::CountMismatch {
            expected,
            actual: tokens.len(),
        });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_spaces() -> Result<(), ParseError> {
        let tokens = tokenize("  a   b  c ", Delimiter::from(' '))?;
        assert_eq!(tokens, vec!["a", "b", "c"]);
        Ok(())
    }

    #[test]
    fn test_split_path() -> Result<(), ParseError> {
        let tokens = tokenize("/usr/bin:/bin", Delimiter::Char(':'))?;
        assert_eq!(tokens, vec!["/usr/bin", "/bin"]);
        Ok(())
    }

    #[test]
    fn test_mixed_whitespace() -> Result<(), ParseError> {
        let tokens = tokenize("\tls \u{0B}-l\r\n", Delimiter::Whitespace)?;
        assert_eq!(tokens, vec!["ls", "-l"]);
        Ok(())
    }

    #[test]
    fn test_normalizes_before_literal_split() -> Result<(), ParseError> {
        let tokens = tokenize("  /opt/my   tools:/bin  ", Delimiter::Char(':'))?;
        assert_eq!(tokens, vec!["/opt/my tools", "/bin"]);
        Ok(())
    }

    #[test]
    fn test_adjacent_literal_delimiters_keep_empty_segment() -> Result<(), ParseError> {
        let tokens = tokenize("/a::/b:", Delimiter::Char(':'))?;
        assert_eq!(tokens, vec!["/a", "", "/b", ""]);
        Ok(())
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("", Delimiter::Whitespace), Err(ParseError::EmptyInput));
        assert_eq!(
            tokenize(" \t \n", Delimiter::Char(':')),
            Err(ParseError::EmptyInput)
        );
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace(" a \t\t b\n"), "a b");
        assert_eq!(normalize_whitespace("   "), "");
    }

    #[test]
    fn test_count_tokens() {
        assert_eq!(count_tokens("a b c", Delimiter::Whitespace), 3);
        assert_eq!(count_tokens("a b c", Delimiter::Char(':')), 1);
        assert_eq!(count_tokens("x::y", Delimiter::Char(':')), 3);
    }

    #[test]
    fn test_whitespace_char_becomes_class() {
        assert_eq!(Delimiter::from('\t'), Delimiter::Whitespace);
        assert_eq!(Delimiter::from(':'), Delimiter::Char(':'));
    }
}
