use std::io::{self, Write};

use crate::error::AppResult;

pub fn print_lines(lines: &[String]) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}
