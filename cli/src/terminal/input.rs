use std::io::{self, Write};

use colored::*;

use nukr_common::target::Target;

/// Prompts the operator for the scan target.
///
/// One line of cooked input. The string is taken as-is apart from
/// trimming; the scanner is the authority on what it accepts.
pub fn read_target() -> anyhow::Result<Target> {
    println!(
        "{}",
        "Do not include a scheme (https://) or a trailing slash.".bright_black()
    );
    print!("Target (domain or IP, e.g. example.com): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    Ok(Target::new(line))
}
