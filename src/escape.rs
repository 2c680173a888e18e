const SPECIAL: &[char] = &[
    '|', '\\', '{', '}', '(', ')', '[', ']', '^', '$', '+', '*', '?', '.',
];

/// Escapes `input` so it matches itself literally inside a regex.
///
/// Hyphens become `\x2d` rather than `\-` so the result stays literal even
/// when spliced into a character class.
pub fn escape_regex(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        if SPECIAL.contains(&ch) {
            escaped.push('\\');
            escaped.push(ch);
        } else if ch == '-' {
            escaped.push_str("\\x2d");
        } else {
            escaped.push(ch);
        }
    }
    escaped
}
