//! Query text normalization for stable fingerprinting.
//!
//! Turns raw SQL into a canonical, literal-masked form so that
//! semantically identical queries differing only in literal values,
//! whitespace, comments, or keyword case compare equal. The step
//! order is load-bearing: comments are stripped before literal
//! masking so a quote inside a comment cannot corrupt it, and every
//! masking step only ever shrinks the text, which makes the whole
//! function idempotent.

use std::sync::LazyLock;

use regex::Regex;

static RE_LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)--.*$").unwrap());

static RE_BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Single-quoted string literal, with doubled-quote escapes.
static RE_SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'(?:[^']|'')*'").unwrap());

/// Double-quoted string literal, with doubled-quote escapes.
static RE_DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:[^"]|"")*""#).unwrap());

static RE_BOOLEAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:TRUE|FALSE)\b").unwrap());

/// The fixed keyword vocabulary lowered during normalization.
/// Identifiers merely containing a keyword substring are untouched
/// (the alternation is word-bounded).
static RE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:SELECT|FROM|WHERE|JOIN|INNER|LEFT|RIGHT|FULL|OUTER|ON|AND|OR|NOT|IN|EXISTS|BETWEEN|LIKE|ILIKE|GROUP|BY|HAVING|ORDER|LIMIT|OFFSET|INSERT|INTO|VALUES|UPDATE|SET|DELETE|CREATE|DROP|ALTER|TABLE|VIEW|INDEX|UNION|INTERSECT|EXCEPT|ALL|AS|IS|NULL)\b",
    )
    .unwrap()
});

static RE_INNER_JOIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\binner\s+join\b").unwrap());

/// Normalize SQL text for stable comparison.
///
/// Total and pure: empty input yields empty output, and
/// `normalize_query(normalize_query(x)) == normalize_query(x)`.
///
/// ```
/// use coldstore_analysis::normalize_query;
/// assert_eq!(
///     normalize_query("SELECT * FROM users WHERE id = 123"),
///     "select * from users where id = ?"
/// );
/// ```
pub fn normalize_query(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Step 1: strip comments.
    let text = RE_LINE_COMMENT.replace_all(text, "");
    let text = RE_BLOCK_COMMENT.replace_all(&text, "");

    // Step 2: collapse whitespace.
    let text = RE_WHITESPACE.replace_all(&text, " ");
    let text = text.trim();

    // Step 3: mask string literals.
    let text = RE_SINGLE_QUOTED.replace_all(text, "?");
    let text = RE_DOUBLE_QUOTED.replace_all(&text, "?");

    // Step 4: mask numeric literals (boundary-checked scanner).
    let text = mask_numbers(&text);

    // Step 5: mask boolean literals.
    let text = RE_BOOLEAN.replace_all(&text, "?");

    // Step 6: lowercase the keyword vocabulary.
    let text = RE_KEYWORD.replace_all(&text, |caps: &regex::Captures<'_>| {
        caps[0].to_ascii_lowercase()
    });

    // Step 7: canonicalize INNER JOIN.
    let text = RE_INNER_JOIN.replace_all(&text, "join");

    // Step 8: final whitespace collapse.
    RE_WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Whether a byte extends an identifier (letters, digits, `_`, `$`).
/// Digits adjacent to these are part of an identifier like `col123`
/// and must not be masked.
fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}

/// Mask standalone numeric literals (`-?\d+\.?\d*`) to `?`.
///
/// The regex crate has no look-around, so the identifier-boundary
/// checks on both sides of the token are done with a linear scan.
fn mask_numbers(text: &str) -> String {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut out = String::with_capacity(len);
    // Everything before this index has been copied to `out`.
    let mut copied = 0;
    let mut i = 0;

    while i < len {
        let b = bytes[i];
        let prev_is_ident = i > 0 && is_ident_byte(bytes[i - 1]);

        if b.is_ascii_digit() {
            if prev_is_ident {
                // Digits inside an identifier like col123; skip the
                // whole run so they are never reconsidered alone.
                while i < len && is_ident_byte(bytes[i]) {
                    i += 1;
                }
                continue;
            }
        } else if b == b'-' && i + 1 < len && bytes[i + 1].is_ascii_digit() && !prev_is_ident {
            // Signed literal: the minus sign is swallowed with it.
        } else {
            i += 1;
            continue;
        }

        // Consume -?\d+\.?\d*
        let start = i;
        let mut j = if b == b'-' { i + 1 } else { i };
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j < len && bytes[j] == b'.' {
            j += 1;
            while j < len && bytes[j].is_ascii_digit() {
                j += 1;
            }
        }

        // Trailing boundary: a following identifier byte means this
        // was the head of an identifier-like token, not a literal.
        if j < len && is_ident_byte(bytes[j]) {
            while j < len && is_ident_byte(bytes[j]) {
                j += 1;
            }
            i = j;
            continue;
        }

        out.push_str(&text[copied..start]);
        out.push('?');
        copied = j;
        i = j;
    }

    out.push_str(&text[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_standalone_numbers() {
        assert_eq!(mask_numbers("id = 123"), "id = ?");
        assert_eq!(mask_numbers("price > 19.99"), "price > ?");
        assert_eq!(mask_numbers("delta = -5"), "delta = ?");
    }

    #[test]
    fn keeps_digits_inside_identifiers() {
        assert_eq!(mask_numbers("col123"), "col123");
        assert_eq!(mask_numbers("t2.col"), "t2.col");
        assert_eq!(mask_numbers("a_1 = 1"), "a_1 = ?");
        assert_eq!(mask_numbers("$5x"), "$5x");
    }

    #[test]
    fn adjacent_numbers_all_masked() {
        assert_eq!(mask_numbers("in (1, 2, 3)"), "in (?, ?, ?)");
        assert_eq!(mask_numbers("1,2"), "?,?");
    }

    #[test]
    fn leading_identifier_head_untouched() {
        // "123abc" reads as an identifier-like token, not a literal.
        assert_eq!(mask_numbers("x = 123abc"), "x = 123abc");
    }
}
