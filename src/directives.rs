//! Directive-line parsing for schema comments.
//!
//! A comment attached to a schema element mixes prose with machine-readable
//! directive lines:
//! - `@mcp` / `@mcp Enable this endpoint` - marker tag, expose the element
//! - `@ignore-comment some other tag` - any other `@tag` line
//! - `buf:lint:ignore` - literal directive prefixes from configuration
//!
//! Detection and cleaning both go through [`parse_tag`], so a line that
//! [`DirectiveSet::has_tag`] reports is always stripped by
//! [`DirectiveSet::clean`].

use serde::Serialize;

/// Marker tag looked up by [`has_tag`].
pub const DEFAULT_TAG: &str = "mcp";

/// Literal (non-`@`) directive prefixes recognized out of the box.
pub const DEFAULT_LITERAL_PREFIXES: &[&str] = &["buf:lint:ignore"];

/// Classification of a single comment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineKind<'a> {
    /// Documentation text.
    Text,
    /// `@name args...`
    Tag { name: &'a str, args: &'a str },
    /// Line starting with a configured literal prefix.
    Literal { prefix: &'a str },
}

impl LineKind<'_> {
    pub fn is_directive(&self) -> bool {
        !matches!(self, Self::Text)
    }
}

/// A comment line together with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLine<'a> {
    /// 1-based line number.
    pub line: usize,
    /// Untrimmed line text.
    pub text: &'a str,
    #[serde(flatten)]
    pub kind: LineKind<'a>,
}

/// Split an `@tag` line into its tag name and trimmed arguments.
///
/// `line` must already be trimmed. Returns `None` when the line does not start
/// with `@` or when `@` is not immediately followed by a tag name.
pub fn parse_tag(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('@')?;
    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest, ""),
    };
    if name.is_empty() {
        return None;
    }
    Some((name, args))
}

/// The set of recognized literal directive prefixes.
///
/// `@tag` lines are always directives; the literal prefixes extend that with
/// tool-specific markers such as `buf:lint:ignore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSet {
    literal_prefixes: Vec<String>,
}

impl Default for DirectiveSet {
    fn default() -> Self {
        Self::new(DEFAULT_LITERAL_PREFIXES.iter().copied())
    }
}

impl DirectiveSet {
    /// Build a directive set from literal prefixes.
    ///
    /// Prefixes are trimmed; blank ones are dropped since they would match
    /// every line.
    pub fn new<I, S>(literal_prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let literal_prefixes = literal_prefixes
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        Self { literal_prefixes }
    }

    pub fn literal_prefixes(&self) -> &[String] {
        &self.literal_prefixes
    }

    /// Classify one line. Leading and trailing whitespace is ignored.
    pub fn classify<'a>(&'a self, line: &'a str) -> LineKind<'a> {
        let trimmed = line.trim();

        // Tags take precedence over literal prefixes
        if let Some((name, args)) = parse_tag(trimmed) {
            return LineKind::Tag { name, args };
        }
        if let Some(prefix) = self
            .literal_prefixes
            .iter()
            .find(|prefix| trimmed.starts_with(prefix.as_str()))
        {
            return LineKind::Literal {
                prefix: prefix.as_str(),
            };
        }

        LineKind::Text
    }

    pub fn is_directive(&self, line: &str) -> bool {
        self.classify(line).is_directive()
    }

    /// Check whether any line of `comment` carries `@<tag>`.
    ///
    /// Only `@tag` lines can carry a marker, so the literal prefixes of this
    /// set play no part in detection.
    pub fn has_tag(&self, comment: &str, tag: &str) -> bool {
        comment
            .split('\n')
            .filter_map(|line| parse_tag(line.trim()))
            .any(|(name, _)| name == tag)
    }

    /// Remove every directive line from `comment`.
    ///
    /// Kept lines are returned verbatim and in order, joined with `\n`.
    pub fn clean(&self, comment: &str) -> String {
        comment
            .split('\n')
            .filter(|line| !self.is_directive(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Classify every line of `comment`.
    pub fn lines<'a>(&'a self, comment: &'a str) -> Vec<ClassifiedLine<'a>> {
        comment
            .split('\n')
            .enumerate()
            .map(|(idx, text)| ClassifiedLine {
                line: idx + 1,
                text,
                kind: self.classify(text),
            })
            .collect()
    }
}

/// Check whether `comment` carries the `@mcp` marker.
pub fn has_tag(comment: &str) -> bool {
    DirectiveSet::default().has_tag(comment, DEFAULT_TAG)
}

/// Strip all directive lines from `comment` using the default directive set.
pub fn clean_comment(comment: &str) -> String {
    DirectiveSet::default().clean(comment)
}
