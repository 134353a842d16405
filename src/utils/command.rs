use std::io;
use std::process::{Command, Output};

/// Execute a command and return its output.
pub fn execute_command(program: &str, args: &[&str]) -> io::Result<Output> {
    log::debug!("Executing: {} {}", program, args.join(" "));

    Command::new(program).args(args).output()
}

/// Execute a command and check if it succeeds.
pub fn execute_command_success(program: &str, args: &[&str]) -> io::Result<bool> {
    let output = execute_command(program, args)?;
    Ok(output.status.success())
}

/// Check if a command exists in PATH.
pub fn command_exists(command: &str) -> bool {
    which::which(command).is_ok()
}
