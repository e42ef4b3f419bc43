//! Lexical pre-pass over the JSON-with-comments dialect
//!
//! Both passes are small scanners that track "inside string literal" state
//! (respecting backslash-escaped quotes) and are otherwise ignorant of JSON
//! structure. Comment markers inside quoted strings are data, not comments.

/// Remove `//` line comments and `/* ... */` block comments.
///
/// Line structure is preserved: a line comment is dropped up to its newline,
/// and the newlines inside a block comment are re-emitted, so decode errors
/// reported downstream still point at the original line. An unterminated
/// block comment consumes to end of input; the decode step then reports the
/// malformed document.
///
/// Stripping is idempotent, and a comment-free document passes through
/// unchanged.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    chars.next();
                    while chars.next_if(|&next| next != '\n').is_some() {}
                }
                Some('*') => {
                    chars.next();
                    let mut prev_star = false;
                    for next in chars.by_ref() {
                        if next == '\n' {
                            out.push('\n');
                        }
                        if prev_star && next == '/' {
                            break;
                        }
                        prev_star = next == '*';
                    }
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }

    out
}

/// Elide commas whose next significant character is `}` or `]`.
///
/// Covers both commas exposed by comment removal (a comment between the last
/// property and the closing brace) and commas the toolchain emitted
/// directly. Whitespace between the comma and the closer is kept.
pub fn strip_trailing_commas(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in source.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '}' | ']' => {
                let significant_len = out.trim_end().len();
                if out[..significant_len].ends_with(',') {
                    out.remove(significant_len - 1);
                }
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}
