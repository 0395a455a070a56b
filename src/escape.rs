//! Escaping of Lucene query-syntax special characters.
//!
//! Solr query and filter clauses use the Lucene query syntax, where a fixed
//! set of characters has structural meaning. Untrusted text that should match
//! literally must be passed through [`escape`] before it is interpolated into
//! a clause. Filter builders in this crate never escape automatically; calling
//! [`escape`] is the caller's responsibility.

/// Characters with structural meaning in the Lucene query syntax.
const SPECIAL_CHARS: &[char] = &[
    '+', '-', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '\\', '/',
];

/// Escape Lucene query-syntax special characters in `input`.
///
/// Every occurrence of `+ - ! ( ) { } [ ] ^ " ~ * ? : \ /` is prefixed with a
/// backslash, and the two-character operators `&&` and `||` become `\&\&` and
/// `\|\|`. A lone `&` or `|` has no special meaning and passes through
/// unchanged.
///
/// # Examples
///
/// ```
/// use solrkit::escape::escape;
///
/// assert_eq!(escape("a:b"), "a\\:b");
/// assert_eq!(escape("this && that"), "this \\&\\& that");
/// ```
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if SPECIAL_CHARS.contains(&c) {
            out.push('\\');
            out.push(c);
        } else if (c == '&' || c == '|') && chars.peek() == Some(&c) {
            chars.next();
            out.push('\\');
            out.push(c);
            out.push('\\');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out
}

/// Remove the backslashes introduced by [`escape`].
///
/// The inverse of [`escape`]: a backslash followed by an escapable character
/// is dropped, everything else passes through. For any input,
/// `unescape(&escape(input)) == input`.
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(&next) if SPECIAL_CHARS.contains(&next) || next == '&' || next == '|' => {
                    chars.next();
                    out.push(next);
                }
                _ => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_single_characters() {
        assert_eq!(escape("1+1"), "1\\+1");
        assert_eq!(escape("a-b"), "a\\-b");
        assert_eq!(escape("what?"), "what\\?");
        assert_eq!(escape("path/to/file"), "path\\/to\\/file");
        assert_eq!(escape("field:value"), "field\\:value");
        assert_eq!(escape("[1 TO 2]"), "\\[1 TO 2\\]");
        assert_eq!(escape("\"quoted\""), "\\\"quoted\\\"");
        assert_eq!(escape("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_escape_boolean_operators() {
        assert_eq!(escape("a && b"), "a \\&\\& b");
        assert_eq!(escape("a || b"), "a \\|\\| b");
        // A single & or | is not special.
        assert_eq!(escape("a & b"), "a & b");
        assert_eq!(escape("a | b"), "a | b");
        // Three in a row: the pair escapes, the trailing one does not.
        assert_eq!(escape("&&&"), "\\&\\&&");
    }

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape("hello world"), "hello world");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_unescape_round_trip() {
        let inputs = [
            "1+1:2",
            "(a && b) || !c",
            "wild*card?",
            "plain text",
            "\\already\\escaped",
            "~fuzzy^2",
        ];
        for input in inputs {
            assert_eq!(unescape(&escape(input)), input, "round trip for {input:?}");
        }
    }
}
