use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("invalid selector: '{selector}'; can't understand '{term}'")]
    InvalidTerm { selector: String, term: String },

    #[error("invalid field selector: invalid escape sequence: {0}")]
    InvalidEscape(String),

    #[error("invalid field selector: unescaped character in value: {0}")]
    UnescapedRune(char),
}

/// Comparison applied by a single selector term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `=` or `==`.
    Equals,
    /// `!=`.
    NotEquals,
}

/// Operators in matching priority. At a given position `!=` and `==` win over `=`.
const OPERATORS: &[(&str, Operator)] = &[
    ("!=", Operator::NotEquals),
    ("==", Operator::Equals),
    ("=", Operator::Equals),
];

/// One `field<op>value` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub field: String,
    pub op: Operator,
    pub value: String,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.op {
            Operator::Equals => "=",
            Operator::NotEquals => "!=",
        };
        write!(f, "{}{}{}", self.field, op, escape_value(&self.value))
    }
}

/// Parsed field selector, a conjunction of [`Requirement`]s.
///
/// `Display` renders the canonical form understood by the store's query layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelector {
    terms: Vec<Requirement>,
}

impl FieldSelector {
    /// Parse a comma separated selector.
    ///
    /// Raw terms are sorted before parsing so that equivalent selectors render identically.
    /// Empty terms are skipped; whitespace is kept as part of fields and values.
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let mut parts = split_terms(selector);
        parts.sort_unstable();

        let mut terms = Vec::with_capacity(parts.len());
        for part in parts.into_iter().filter(|p| !p.is_empty()) {
            let (field, op, raw) =
                split_term(part).ok_or_else(|| SelectorError::InvalidTerm {
                    selector: selector.to_string(),
                    term: part.to_string(),
                })?;
            terms.push(Requirement {
                field: field.to_string(),
                op,
                value: unescape_value(raw)?,
            });
        }
        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[Requirement] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Value an equality term requires for `field`, if any.
    pub fn exact_match(&self, field: &str) -> Option<&str> {
        self.terms
            .iter()
            .find(|t| t.op == Operator::Equals && t.field == field)
            .map(|t| t.value.as_str())
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

/// Escape the characters that carry meaning in selector values.
pub fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ',' | '=') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Reverse of [`escape_value`]. Bare `,`/`=` and unknown escapes are rejected.
pub fn unescape_value(raw: &str) -> Result<String, SelectorError> {
    if !raw.contains(['\\', ',', '=']) {
        return Ok(raw.to_string());
    }
    let mut out = String::with_capacity(raw.len());
    let mut in_slash = false;
    for c in raw.chars() {
        if in_slash {
            match c {
                '\\' | ',' | '=' => out.push(c),
                other => return Err(SelectorError::InvalidEscape(format!("\\{other}"))),
            }
            in_slash = false;
            continue;
        }
        match c {
            '\\' => in_slash = true,
            ',' | '=' => return Err(SelectorError::UnescapedRune(c)),
            other => out.push(other),
        }
    }
    if in_slash {
        return Err(SelectorError::InvalidEscape("\\".to_string()));
    }
    Ok(out)
}

/// Split on commas that are not escaped with a backslash.
fn split_terms(selector: &str) -> Vec<&str> {
    if selector.is_empty() {
        return Vec::new();
    }
    let mut terms = Vec::with_capacity(1);
    let mut start = 0;
    let mut in_slash = false;
    for (i, c) in selector.char_indices() {
        if in_slash {
            in_slash = false;
        } else if c == '\\' {
            in_slash = true;
        } else if c == ',' {
            terms.push(&selector[start..i]);
            start = i + 1;
        }
    }
    terms.push(&selector[start..]);
    terms
}

/// Split a term at the first operator occurrence.
fn split_term(term: &str) -> Option<(&str, Operator, &str)> {
    for (i, _) in term.char_indices() {
        let rest = &term[i..];
        for (token, op) in OPERATORS {
            if rest.starts_with(token) {
                return Some((&term[..i], *op, &rest[token.len()..]));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_sorts_terms() {
        let sel = FieldSelector::parse("status.phase!=Running,metadata.name==wf-1").unwrap();
        assert_eq!(sel.terms().len(), 2);
        assert_eq!(sel.to_string(), "metadata.name=wf-1,status.phase!=Running");
        assert_eq!(sel.exact_match("metadata.name"), Some("wf-1"));
        assert_eq!(sel.exact_match("status.phase"), None);
    }

    #[test]
    fn escaped_comma_does_not_split() {
        let sel = FieldSelector::parse(r"metadata.name=a\,b").unwrap();
        assert_eq!(sel.terms().len(), 1);
        assert_eq!(sel.exact_match("metadata.name"), Some("a,b"));
        assert_eq!(sel.to_string(), r"metadata.name=a\,b");
    }

    #[test]
    fn empty_selector_has_no_terms() {
        let sel = FieldSelector::parse("").unwrap();
        assert!(sel.is_empty());
        assert_eq!(sel.to_string(), "");

        let sel = FieldSelector::parse("metadata.name=x,").unwrap();
        assert_eq!(sel.terms().len(), 1);
    }

    #[test]
    fn term_without_operator_is_rejected() {
        let err = FieldSelector::parse("metadata.name=a,b").unwrap_err();
        assert_eq!(
            err,
            SelectorError::InvalidTerm {
                selector: "metadata.name=a,b".into(),
                term: "b".into(),
            }
        );
    }

    #[test]
    fn bare_equals_in_value_is_rejected() {
        let err = FieldSelector::parse("metadata.name=a=b").unwrap_err();
        assert_eq!(err, SelectorError::UnescapedRune('='));
    }

    #[test]
    fn unknown_escape_is_rejected() {
        assert_eq!(
            unescape_value(r"a\b").unwrap_err(),
            SelectorError::InvalidEscape(r"\b".into())
        );
        assert_eq!(
            unescape_value("trailing\\").unwrap_err(),
            SelectorError::InvalidEscape("\\".into())
        );
    }

    #[test]
    fn escape_and_unescape_are_inverse() {
        let raw = r"a\b,c=d";
        let escaped = escape_value(raw);
        assert_eq!(escaped, r"a\\b\,c\=d");
        assert_eq!(unescape_value(&escaped).unwrap(), raw);
    }

    #[test]
    fn whitespace_is_kept() {
        let sel = FieldSelector::parse("metadata.name= wf ").unwrap();
        assert_eq!(sel.exact_match("metadata.name"), Some(" wf "));
    }
}
