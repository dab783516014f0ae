//! Placeholder templates used by dialect descriptors.
//!
//! A template is literal SQL with `$x` placeholders, where `x` is a single
//! ASCII letter. Text inside `[...]` is an optional segment: it is kept
//! only when every placeholder inside it has a value. Substitution is a
//! single pass, so substituted values are never rescanned.

/// Fills `template`, asking `lookup` for each placeholder letter.
///
/// A placeholder without a value outside an optional segment renders as
/// the empty string. A `$` not followed by a letter is literal.
pub(crate) fn fill<F>(template: &str, lookup: F) -> String
where
    F: Fn(char) -> Option<String>,
{
    let mut out = String::with_capacity(template.len() + 16);
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '[' => {
                let mut segment = String::new();
                let mut complete = true;
                while let Some(inner) = chars.next() {
                    match inner {
                        ']' => break,
                        '$' => match chars.peek().copied() {
                            Some(key) if key.is_ascii_alphabetic() => {
                                chars.next();
                                match lookup(key) {
                                    Some(value) => segment.push_str(&value),
                                    None => complete = false,
                                }
                            }
                            _ => segment.push('$'),
                        },
                        other => segment.push(other),
                    }
                }
                if complete {
                    out.push_str(&segment);
                }
            }
            '$' => match chars.peek().copied() {
                Some(key) if key.is_ascii_alphabetic() => {
                    chars.next();
                    if let Some(value) = lookup(key) {
                        out.push_str(&value);
                    }
                }
                _ => out.push('$'),
            },
            other => out.push(other),
        }
    }
    out
}

/// Fills a statement template from `(letter, value)` pairs.
pub(crate) fn fill_pairs(template: &str, pairs: &[(char, &str)]) -> String {
    fill(template, |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
    })
}

/// Reduces a type template or native type name to its bare words:
/// upper case, parenthesised and bracketed parts removed, whitespace
/// collapsed. `"VARCHAR2($l)"` and `"varchar2 ( 20 )"` both give
/// `"VARCHAR2"`.
pub(crate) fn type_key(text: &str) -> String {
    let mut bare = String::with_capacity(text.len());
    let mut depth = 0usize;
    for ch in text.chars() {
        match ch {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            _ if depth == 0 => bare.push(ch.to_ascii_uppercase()),
            _ => {}
        }
    }
    bare.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Numeric arguments found in the first parenthesised group of `text`,
/// e.g. `[12, 2]` for `"NUMBER(12,2)"`. Non-numeric arguments (`MAX`,
/// placeholders) are skipped.
pub(crate) fn literal_args(text: &str) -> Vec<u32> {
    let Some(open) = text.find('(') else {
        return Vec::new();
    };
    let rest = &text[open + 1..];
    let close = rest.find(')').unwrap_or(rest.len());
    rest[..close]
        .split(',')
        .filter_map(|arg| arg.trim().parse::<u32>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_optional_segment() {
        let with_scale = fill("DECIMAL($p[,$s])", |k| match k {
            'p' => Some("10".into()),
            's' => Some("2".into()),
            _ => None,
        });
        assert_eq!(with_scale, "DECIMAL(10,2)");

        let without_scale = fill("DECIMAL($p[,$s])", |k| (k == 'p').then(|| "10".into()));
        assert_eq!(without_scale, "DECIMAL(10)");

        let bare_float = fill("FLOAT[($p)]", |_| None);
        assert_eq!(bare_float, "FLOAT");
    }

    #[test]
    fn test_fill_is_single_pass() {
        let sql = fill_pairs("DEFAULT $v FOR $c", &[('v', "'$c'"), ('c', "name")]);
        assert_eq!(sql, "DEFAULT '$c' FOR name");
    }

    #[test]
    fn test_fill_literal_dollar() {
        assert_eq!(fill_pairs("a $ b $1", &[]), "a $ b $1");
    }

    #[test]
    fn test_type_key() {
        assert_eq!(type_key("VARCHAR2($l)"), "VARCHAR2");
        assert_eq!(type_key("varchar2 ( 20 )"), "VARCHAR2");
        assert_eq!(type_key("CHAR($l) FOR BIT DATA"), "CHAR FOR BIT DATA");
        assert_eq!(type_key("FLOAT[($p)]"), "FLOAT");
        assert_eq!(type_key("double  precision"), "DOUBLE PRECISION");
    }

    #[test]
    fn test_literal_args() {
        assert_eq!(literal_args("NUMBER(12,2)"), vec![12, 2]);
        assert_eq!(literal_args("NUMBER(19)"), vec![19]);
        assert_eq!(literal_args("VARCHAR($l)"), Vec::<u32>::new());
        assert_eq!(literal_args("VARCHAR(MAX)"), Vec::<u32>::new());
        assert_eq!(literal_args("INTEGER"), Vec::<u32>::new());
    }
}
