use super::import_spec::ImportSpec;
use super::matcher::{Matcher, PackageKind};

/// Opening line of a grouped import declaration
const BLOCK_OPEN: &str = "import (";
const BLOCK_CLOSE: &str = ")";

/// A parsed `import` declaration, grouped for output
#[derive(Debug, Default)]
pub struct ImportBlock {
    standard: Vec<ImportSpec>,
    local: Vec<ImportSpec>,
    external: Vec<ImportSpec>,
    /// `import "os"` style declarations are kept verbatim
    single: Option<String>,
    /// Comment lines not yet attached to an import
    pending_comment: Option<String>,
    /// Comment lines left over right before `)`
    trailing_comment: Option<String>,
    /// Blank and comment lines inside the block
    other_lines: usize,
    /// Lines read, including `import (` and `)` when present
    consumed: usize,
    closed: bool,
}

impl ImportBlock {
    /// Parse starting at the `import` line (`lines[0]`)
    pub fn parse(lines: &[&str], matcher: &Matcher) -> Self {
        let mut block = Self::default();

        let Some(first) = lines.first() else {
            return block;
        };

        if !is_block_open(first) {
            block.single = Some(first.to_string());
            block.consumed = 1;
            block.closed = true;
            return block;
        }

        block.consumed = 1;
        for line in &lines[1..] {
            block.consumed += 1;
            if line.trim() == BLOCK_CLOSE {
                block.closed = true;
                break;
            }
            block.parse_line(line, matcher);
        }

        block.trailing_comment = block.pending_comment.take();
        block
    }

    fn parse_line(&mut self, line: &str, matcher: &Matcher) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            self.other_lines += 1;
        } else if trimmed.starts_with("//") {
            self.push_comment(line);
        } else {
            self.push_import(line, matcher);
        }
    }

    fn push_comment(&mut self, line: &str) {
        self.other_lines += 1;
        self.pending_comment = Some(match self.pending_comment.take() {
            Some(existing) => format!("{}\n{}", existing, line),
            None => line.to_string(),
        });
    }

    fn push_import(&mut self, line: &str, matcher: &Matcher) {
        let spec = ImportSpec::parse(line).with_comment(self.pending_comment.take());
        match matcher.classify(spec.package()) {
            PackageKind::Standard => self.standard.push(spec),
            PackageKind::Local => self.local.push(spec),
            PackageKind::External => self.external.push(spec),
        }
    }

    /// Whether the closing `)` was found
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_single(&self) -> bool {
        self.single.is_some()
    }

    /// Number of imports in the declaration
    pub fn import_count(&self) -> usize {
        if self.single.is_some() {
            return 1;
        }
        self.standard.len() + self.local.len() + self.external.len()
    }

    /// How many source lines this declaration spans
    pub fn consumed_lines(&self) -> usize {
        self.consumed
    }

    pub fn other_lines(&self) -> usize {
        self.other_lines
    }

    /// Render the declaration: standard, local, then external imports
    pub fn render(&self) -> String {
        if let Some(single) = &self.single {
            return single.clone();
        }

        let mut out = String::from(BLOCK_OPEN);
        out.push('\n');

        let mut previous = false;
        for group in [&self.standard, &self.local, &self.external] {
            if group.is_empty() {
                continue;
            }
            if previous {
                out.push('\n');
            }

            let mut sorted: Vec<&ImportSpec> = group.iter().collect();
            sorted.sort();
            for spec in sorted {
                out.push_str(&spec.to_string());
                out.push('\n');
            }
            previous = true;
        }

        if let Some(comment) = &self.trailing_comment {
            out.push_str(comment);
            out.push('\n');
        }

        out.push_str(BLOCK_CLOSE);
        out
    }
}

/// `import (` or `import(`, with any trailing whitespace
fn is_block_open(line: &str) -> bool {
    line.trim_end()
        .strip_prefix("import")
        .map(|rest| rest.trim_start() == "(")
        .unwrap_or(false)
}
