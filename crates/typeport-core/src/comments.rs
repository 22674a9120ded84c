//! Comment groups attached to declarations and fields.

use serde::{Deserialize, Serialize};

/// Adjacent comments, kept exactly as written (`// text`, `/* text */`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentGroup {
    pub comments: Vec<String>,
}

impl CommentGroup {
    pub fn new(comments: Vec<String>) -> Self {
        Self { comments }
    }

    /// Build a group from bare text, one `//` comment per line.
    pub fn from_text(text: &str) -> Self {
        Self {
            comments: text.lines().map(|line| format!("// {line}")).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Comment text with markers removed.
    ///
    /// Leading and trailing blank lines are dropped, runs of blank lines are
    /// collapsed to one, trailing whitespace is trimmed and tool directives
    /// (`//go:generate`, `//line`, ...) are skipped.
    pub fn lines(&self) -> Vec<String> {
        let mut raw: Vec<&str> = Vec::new();
        for comment in &self.comments {
            if let Some(body) = comment.strip_prefix("//") {
                if is_directive(body) {
                    continue;
                }
                raw.push(body.strip_prefix(' ').unwrap_or(body));
            } else if let Some(body) = comment.strip_prefix("/*") {
                let body = body.strip_suffix("*/").unwrap_or(body);
                raw.extend(body.split('\n'));
            } else {
                raw.extend(comment.split('\n'));
            }
        }

        let mut lines: Vec<String> = Vec::with_capacity(raw.len());
        for line in raw {
            let line = line.trim_end();
            if line.is_empty() && lines.last().is_none_or(|prev: &String| prev.is_empty()) {
                continue;
            }
            lines.push(line.to_string());
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines
    }

    /// [`lines`](Self::lines) joined with `\n`, without a trailing newline.
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

/// `//line ...`, `//export ...`, `//extern ...` and `//tool:directive` forms.
fn is_directive(body: &str) -> bool {
    if ["line ", "extern ", "export "]
        .iter()
        .any(|prefix| body.starts_with(prefix))
    {
        return true;
    }

    let Some((tool, rest)) = body.split_once(':') else {
        return false;
    };
    let is_word = |s: &str| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    };
    is_word(tool) && rest.chars().next().is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(comments: &[&str]) -> CommentGroup {
        CommentGroup::new(comments.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn strips_line_markers() {
        let g = group(&["// Hello", "//world"]);
        assert_eq!(g.lines(), vec!["Hello", "world"]);
    }

    #[test]
    fn strips_block_markers() {
        let g = group(&["/* first\n   second */"]);
        assert_eq!(g.text(), " first\n   second");
    }

    #[test]
    fn collapses_blank_lines() {
        let g = group(&["//", "// a", "//", "//", "// b", "//"]);
        assert_eq!(g.lines(), vec!["a", "", "b"]);
    }

    #[test]
    fn skips_directives() {
        let g = group(&["// Doc line.", "//go:generate stringer -type=Kind", "//line foo.go:1"]);
        assert_eq!(g.text(), "Doc line.");
    }

    #[test]
    fn keeps_colon_prose() {
        let g = group(&["// Note: spaces matter"]);
        assert_eq!(g.text(), "Note: spaces matter");
    }

    #[test]
    fn from_text_round_trips_lines() {
        let g = CommentGroup::from_text("one\ntwo");
        assert_eq!(g.comments, vec!["// one", "// two"]);
        assert_eq!(g.text(), "one\ntwo");
    }
}
