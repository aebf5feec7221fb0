use std::io::{self, Write};

pub(crate) fn write_runtime_errors<W: Write>(out: &mut W, errors: &[String]) -> io::Result<()> {
    writeln!(out, "Runtime errors:")?;
    for error in errors {
        writeln!(out, "- {}", error)?;
    }
    Ok(())
}
