use std::cmp::Ordering;
use std::fmt;

/// One line of an import block, plus the comment lines above it
///
/// Ordering and equality look at the quoted path only.
#[derive(Debug, Clone)]
pub struct ImportSpec {
    prefix: String,
    alias: Option<String>,
    path: String,
    comment: Option<String>,
}

impl ImportSpec {
    /// Parse a line such as `\tkafka "github.com/acme/kafka"`
    pub fn parse(line: &str) -> Self {
        let prefix = whitespace_prefix(line).to_string();
        let trimmed = line.trim();

        let (alias, path) = if trimmed.starts_with('"') || trimmed.starts_with('`') {
            (None, trimmed.to_string())
        } else {
            match trimmed.split_once(char::is_whitespace) {
                Some((alias, rest)) => (Some(alias.to_string()), rest.trim_start().to_string()),
                None => (None, trimmed.to_string()),
            }
        };

        Self {
            prefix,
            alias,
            path,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: Option<String>) -> Self {
        self.comment = comment;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The path as written, quotes included
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path between its quotes, without any trailing comment
    pub fn package(&self) -> &str {
        match self.path.chars().next() {
            Some(quote @ ('"' | '`')) => {
                let rest = &self.path[1..];
                match rest.find(quote) {
                    Some(end) => &rest[..end],
                    None => rest,
                }
            }
            _ => self.path.as_str(),
        }
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl fmt::Display for ImportSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.comment {
            writeln!(f, "{}", comment)?;
        }
        write!(f, "{}", self.prefix)?;
        if let Some(alias) = &self.alias {
            write!(f, "{} ", alias)?;
        }
        write!(f, "{}", self.path)
    }
}

impl PartialEq for ImportSpec {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for ImportSpec {}

impl Ord for ImportSpec {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(&other.path)
    }
}

impl PartialOrd for ImportSpec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Leading spaces and tabs of a line
pub(crate) fn whitespace_prefix(line: &str) -> &str {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    &line[..end]
}
