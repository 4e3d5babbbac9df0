//! Go import block formatting
//!
//! Regroups the first import declaration of a Go file into three groups,
//! separated by blank lines and sorted by path within each group:
//!
//! 1. standard library (`fmt`, `net/http`)
//! 2. the project's own packages
//! 3. third-party packages
//!
//! Comment lines stay attached to the import that follows them. Single-line
//! declarations (`import "os"`) and unterminated blocks are left alone.
//!
//! # Example
//!
//! ```
//! use required::imports::{rewrite_source, Matcher};
//!
//! let matcher = Matcher::new("github.com/acme/api")?;
//! let source = "package main\n\nimport (\n\t\"github.com/acme/api/db\"\n\t\"os\"\n)\n";
//! let output = rewrite_source(source, &matcher).unwrap();
//! assert_eq!(
//!     output,
//!     "package main\n\nimport (\n\t\"os\"\n\n\t\"github.com/acme/api/db\"\n)\n"
//! );
//! # Ok::<(), required::Error>(())
//! ```

mod block;
mod formatter;
mod import_spec;
mod matcher;

pub use block::ImportBlock;
pub use formatter::{FileOutcome, FormatReport, Formatter};
pub use import_spec::ImportSpec;
pub use matcher::{Matcher, PackageKind};

/// Rewrite the first import declaration of a Go source file
///
/// Returns `None` when there is no import declaration or its block is
/// never closed.
pub fn rewrite_source(source: &str, matcher: &Matcher) -> Option<String> {
    let lines: Vec<&str> = source.lines().collect();
    let start = lines.iter().position(|line| is_import_line(line))?;

    let block = ImportBlock::parse(&lines[start..], matcher);
    if !block.is_closed() {
        return None;
    }

    let end = (start + block.consumed_lines()).min(lines.len());
    let newline = line_ending(source);
    let rendered = block.render().replace('\n', newline);

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    out.extend_from_slice(&lines[..start]);
    out.push(&rendered);
    out.extend_from_slice(&lines[end..]);

    let mut output = out.join(newline);
    output.push_str(newline);
    Some(output)
}

/// Line ending of the file, taken from its first line
fn line_ending(source: &str) -> &'static str {
    match source.find('\n') {
        Some(i) if source[..i].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

fn is_import_line(line: &str) -> bool {
    line.len() > 6 && (line.starts_with("import ") || line.starts_with("import("))
}
