//! Lightweight SQL scanner used by the paging strategies.
//!
//! Not a parser: it only tracks nesting, string literals, quoted
//! identifiers and comments well enough to find top-level keywords.

/// A base query with the positions the paging strategies care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Scanned<'q> {
    /// Query up to its last significant token.
    pub query: &'q str,
    /// Byte offset just past a leading top-level `SELECT`.
    pub select_end: Option<usize>,
    /// End of the last significant token before the last top-level
    /// `ORDER BY`.
    pub order_by: Option<usize>,
    /// Byte offset just past the `BY` of that clause.
    pub order_keys: Option<usize>,
}

impl<'q> Scanned<'q> {
    /// The query up to its top-level ORDER BY, without comments in
    /// between.
    pub fn body(&self) -> &'q str {
        match self.order_by {
            Some(at) => self.query[..at].trim_end(),
            None => self.query,
        }
    }

    /// The sort keys of the top-level ORDER BY clause.
    pub fn sort_keys(&self) -> Option<&'q str> {
        self.order_keys.map(|at| self.query[at..].trim())
    }
}

/// Scans `sql` for its leading SELECT and last top-level ORDER BY.
///
/// The scanned query ends at the last significant token, so trailing
/// semicolons, whitespace and comments are cut off.
pub(super) fn scan(sql: &str) -> Scanned<'_> {
    let sql = sql.trim_start();
    let bytes = sql.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    let mut end = 0;
    let mut first_word = true;
    let mut select_end = None;
    let mut order_by = None;
    let mut order_keys = None;
    // Body end before the previous top-level word when it was ORDER.
    let mut pending_order: Option<usize> = None;

    while i < bytes.len() {
        let b = bytes[i];
        let significant = match b {
            b'\'' | b'"' | b'`' => {
                i = skip_quoted(bytes, i, b);
                pending_order = None;
                first_word = false;
                true
            }
            b'[' => {
                i = skip_quoted(bytes, i, b']');
                pending_order = None;
                first_word = false;
                true
            }
            b'-' if bytes.get(i + 1) == Some(&b'-') => {
                i = bytes[i..]
                    .iter()
                    .position(|&c| c == b'\n')
                    .map_or(bytes.len(), |p| i + p + 1);
                false
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i = sql[i + 2..]
                    .find("*/")
                    .map_or(bytes.len(), |p| i + 2 + p + 2);
                false
            }
            b'(' => {
                depth += 1;
                i += 1;
                pending_order = None;
                first_word = false;
                true
            }
            b')' => {
                depth = depth.saturating_sub(1);
                i += 1;
                true
            }
            c if is_word_byte(c) => {
                let start = i;
                while i < bytes.len() && is_word_byte(bytes[i]) {
                    i += 1;
                }
                let word = &sql[start..i];
                if depth == 0 {
                    if first_word && word.eq_ignore_ascii_case("SELECT") {
                        select_end = Some(i);
                    }
                    if word.eq_ignore_ascii_case("BY") {
                        if let Some(at) = pending_order {
                            order_by = Some(at);
                            order_keys = Some(i);
                        }
                    }
                    pending_order = word.eq_ignore_ascii_case("ORDER").then_some(end);
                }
                first_word = false;
                true
            }
            c if c.is_ascii_whitespace() => {
                i += 1;
                false
            }
            b';' => {
                i += 1;
                pending_order = None;
                false
            }
            _ => {
                i += 1;
                pending_order = None;
                first_word = false;
                true
            }
        };
        if significant {
            end = i;
        }
    }

    Scanned {
        query: &sql[..end],
        select_end,
        order_by,
        order_keys,
    }
}

const fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Skips a quoted run starting at `start`; a doubled closing delimiter is
/// an escaped delimiter. Returns the offset after the closing delimiter.
fn skip_quoted(bytes: &[u8], start: usize, close: u8) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        if bytes[i] == close {
            if bytes.get(i + 1) == Some(&close) {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}
