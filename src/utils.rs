use std::io::Write;

use crate::cli::{Command, DbmsCli, Result};

// Run one-off commands, separated by semicolons, and write their output to a writer
pub async fn run_one_off_command<W>(
    cli: &mut DbmsCli,
    commands: &str,
    mut output: W,
) -> Result<()>
where
    W: Write,
{
    // TODO: split on unquoted semicolons only, so row data like `'a;b'` survives
    for s in commands.split(';') {
        let s = s.trim();
        if s.is_empty() {
            continue;
        }

        match s.strip_prefix('\\').unwrap_or(s).parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => cli.handle_command(&command, &mut output).await?,
            Err(_) => writeln!(output, "Error: '{s}' is not a valid command")?,
        }
    }
    Ok(())
}
