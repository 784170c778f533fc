//! Text-manipulation filters available inside templates.
//!
//! These mirror the cosmetic filters of the original tool: line wrapping
//! for plain text and commented source, soft-break unwrapping, block
//! indentation, and slug generation.

use minijinja::Environment;

const WRAP_WIDTH: usize = 76;

/// Register every docsmith filter on a template environment.
pub fn register(env: &mut Environment<'_>) {
    env.add_filter("plainwrap", plainwrap);
    env.add_filter("commentwrap", commentwrap);
    env.add_filter("unwrap", unwrap_soft_breaks);
    env.add_filter("indent", indent);
    env.add_filter("slugify", slugify);
}

/// Wrap long lines at 76 columns.
fn plainwrap(input: String) -> String {
    wrap(&input, WRAP_WIDTH, "")
}

/// Wrap long lines at 76 columns, continuing each wrapped line with a
/// `# ` comment marker.
fn commentwrap(input: String) -> String {
    wrap(&input, WRAP_WIDTH, "# ")
}

fn wrap(input: &str, width: usize, continuation: &str) -> String {
    let joiner = format!("\n{}", continuation);
    let mut lines = Vec::new();
    for line in input.trim().split('\n') {
        for wrapped in wrap_line(line.trim(), width).split('\n') {
            lines.push(wrapped.to_string());
        }
    }
    lines.join(&joiner)
}

fn wrap_line(line: &str, width: usize) -> String {
    if line.len() <= width {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + 8);
    let mut current = String::new();
    for word in line.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            out.push_str(&current);
            out.push('\n');
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    out.push_str(&current);
    out
}

/// Join soft line breaks into spaces while keeping paragraph breaks.
fn unwrap_soft_breaks(input: String) -> String {
    // placeholder that cannot appear in template text
    const TOKEN: char = '\u{1}';
    input
        .replace("\n\n", &TOKEN.to_string())
        .replace('\n', " ")
        .replace(TOKEN, "\n\n")
}

/// Indent every non-blank line by `spaces` (default 4).
fn indent(input: String, spaces: Option<usize>) -> String {
    let pad = " ".repeat(spaces.unwrap_or(4));
    input
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reduce a string to a filesystem- and URL-safe slug: runs of characters
/// outside `[A-Za-z0-9-_+/]` become a single underscore, and leading or
/// trailing slashes are dropped.
fn slugify(input: String) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_sep = false;
    for c in input.trim().chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '/') {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(c);
        } else {
            pending_sep = true;
        }
    }
    slug.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plainwrap_short_text_untouched() {
        assert_eq!(plainwrap("short line".to_string()), "short line");
    }

    #[test]
    fn test_plainwrap_breaks_long_lines() {
        let long = "word ".repeat(30);
        let wrapped = plainwrap(long);
        assert!(wrapped.lines().all(|line| line.len() <= WRAP_WIDTH));
        assert!(wrapped.lines().count() > 1);
    }

    #[test]
    fn test_commentwrap_continues_with_marker() {
        let long = "word ".repeat(30);
        let wrapped = commentwrap(long);
        for line in wrapped.lines().skip(1) {
            assert!(line.starts_with("# "));
        }
    }

    #[test]
    fn test_unwrap_keeps_paragraph_breaks() {
        let input = "one\ntwo\n\nthree\nfour".to_string();
        assert_eq!(unwrap_soft_breaks(input), "one two\n\nthree four");
    }

    #[test]
    fn test_indent_default_four_spaces() {
        let input = "a\n\nb".to_string();
        assert_eq!(indent(input, None), "    a\n\n    b");
    }

    #[test]
    fn test_indent_custom_width() {
        assert_eq!(indent("a".to_string(), Some(2)), "  a");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!".to_string()), "Hello_World");
        assert_eq!(slugify("  a/b//c  ".to_string()), "a/b//c");
        assert_eq!(slugify("/leading/".to_string()), "leading");
        assert_eq!(slugify("keep-these_chars+ok".to_string()), "keep-these_chars+ok");
    }
}
