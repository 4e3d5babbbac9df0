use anyhow::Result;
use std::ffi::OsString;

use required::{demo, Person};

fn main() -> Result<()> {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let person = Person::named("Lasse");

    demo::run(&args, &person, &mut std::io::stdout().lock())
}
