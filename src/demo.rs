//! The person demo: marshal a record, echo the arguments, print the JSON
//!
//! Marshaling happens before any output, so a failure leaves the writer
//! untouched.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io::Write;

use crate::json;
use crate::person::Person;

/// Render arguments the way Go prints a string slice: `[a b c]`
///
/// Arguments are copied byte for byte, so non-UTF-8 input is echoed as given.
pub fn render_args(args: &[OsString]) -> Vec<u8> {
    let mut line = vec![b'['];
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            line.push(b' ');
        }
        line.extend_from_slice(&arg_bytes(arg));
    }
    line.push(b']');
    line
}

#[cfg(unix)]
fn arg_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(arg.as_bytes())
}

#[cfg(not(unix))]
fn arg_bytes(arg: &OsStr) -> Cow<'_, [u8]> {
    match arg.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

pub fn run<W: Write>(args: &[OsString], person: &Person, out: &mut W) -> Result<()> {
    let data = json::marshal(person).context("Failed to marshal person")?;

    out.write_all(&render_args(args))?;
    out.write_all(b"\n")?;
    writeln!(out, "{}", data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_args() {
        assert_eq!(render_args(&[]), b"[]");
        assert_eq!(
            render_args(&[OsString::from("a"), OsString::from("b c")]),
            b"[a b c]"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_render_args_keeps_invalid_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let arg = OsString::from_vec(b"caf\xe9".to_vec());
        assert_eq!(render_args(&[arg]), b"[caf\xe9]");
    }

    #[test]
    fn test_run_prints_args_then_json() {
        let mut out = Vec::new();
        run(&[], &Person::named("Lasse"), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[]");
        assert!(lines[1].contains(r#""name":"Lasse""#));
    }

    #[test]
    fn test_run_writes_nothing_on_failure() {
        let mut out = Vec::new();
        let err = run(&[OsString::from("x")], &Person::default(), &mut out).unwrap_err();

        assert!(out.is_empty());
        assert!(format!("{:#}", err).contains("`name`"));
    }
}
