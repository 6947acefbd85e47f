use std::env;

use super::tokenizer::is_space;
use super::ExpandError;

/// What [`expand_first`] did to the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    Unchanged,
    Replaced { name: String, truncated: bool },
}

/// Expands the first `$NAME` reference in `line` from the process environment.
pub fn expand_env(line: &mut String, max_len: usize) -> Result<Expansion, ExpandError> {
    expand_first(line, max_len, |name| {
        env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    })
}

/// Expands at most one `$NAME` reference in place.
///
/// The name runs from the character after `$` up to the next whitespace or the
/// end of the line. Everything after the reference is kept as is, so a second
/// `$OTHER` stays literal. The rebuilt line is cut to `max_len` characters
/// without complaint.
pub fn expand_first<F>(line: &mut String, max_len: usize, lookup: F) -> Result<Expansion, ExpandError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(dollar) = line.find('$') else {
        return Ok(Expansion::Unchanged);
    };

    let name_start = dollar + 1;
    let name_end = line[name_start..]
        .find(is_space)
        .map_or(line.len(), |pos| name_start + pos);
    let name = &line[name_start..name_end];

    let value = if name.is_empty() {
        None
    } else {
        lookup(name)
    };
    let Some(value) = value else {
        return Err(ExpandError::Unset(name.to_string()));
    };

    let mut rebuilt = String::with_capacity(dollar + value.len() + line.len() - name_end);
    rebuilt.push_str(&line[..dollar]);
    rebuilt.push_str(&value);
    rebuilt.push_str(&line[name_end..]);

    let truncated = truncate_chars(&mut rebuilt, max_len);
    let name = name.to_string();
    *line = rebuilt;

    Ok(Expansion::Replaced { name, truncated })
}

fn truncate_chars(s: &mut String, max_chars: usize) -> bool {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => {
            s.truncate(idx);
            true
        }
        None => false,
    }
}
