//! syscage runs a command line under a default-deny seccomp allow-list.
//!
//! The pipeline is strictly linear: harden the process, build the policy
//! from the syscall names, install it, then spawn the command through the
//! shell and relay its combined output. Installing before the spawn means
//! the filter is inherited by the child (and restricts the launcher itself);
//! installing after the spawn would leave the child briefly unrestricted.

mod exec;

use log::info;
use std::{io::Write, os::unix::process::ExitStatusExt, process::ExitStatus};
use syscage_sandbox::{harden::harden_process, policy::PolicyBuilder};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    IO(#[from] std::io::Error),
    #[error("bad syscall list: {0}")]
    Config(#[source] syscage_sandbox::Error),
    #[error("hardening failed: {0}")]
    Harden(#[source] syscage_sandbox::Error),
    #[error("filter install failed: {0}")]
    Install(#[source] syscage_sandbox::Error),
    #[error("couldn't spawn command: {0}")]
    Spawn(#[source] std::io::Error),
}
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code for a launcher-stage failure (bad name, hardening or install
/// error), distinct from anything the child is likely to return.
pub const EXIT_LAUNCHER_FAILURE: i32 = 125;
/// Exit code when the shell itself couldn't be spawned.
pub const EXIT_SPAWN_FAILURE: i32 = 127;

/// Hardens the process, installs the filter if any syscall names were given,
/// then runs `command` and relays its combined output to `out`.
///
/// With an empty `syscalls` list no filter is installed at all and the
/// command runs unsandboxed. That is the documented single-argument escape
/// hatch, never a fallback: a build or install failure aborts before the
/// command is spawned.
pub fn run(command: &str, syscalls: &[String], out: &mut impl Write) -> Result<ExitStatus> {
    harden_process().map_err(Error::Harden)?;

    if syscalls.is_empty() {
        info!("no syscall names given, running unsandboxed");
    } else {
        let mut builder = PolicyBuilder::new();
        for name in syscalls {
            builder = builder.allow_name(name).map_err(Error::Config)?;
        }
        let policy = builder.build().map_err(Error::Config)?;
        info!(
            "installing default-deny filter ({} allowed syscalls)",
            policy.rule_count()
        );
        policy.install().map_err(Error::Install)?;
    }

    exec::run_shell_command(command, out)
}

/// Translates the child's wait status into the launcher's exit code: the
/// child's own code when it exited, 128+signo when a signal killed it (the
/// usual shell convention, also what a seccomp SIGSYS kill looks like).
pub fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => 128 + status.signal().unwrap_or(0),
    }
}

pub fn failure_exit_code(err: &Error) -> i32 {
    match err {
        Error::Spawn(_) => EXIT_SPAWN_FAILURE,
        _ => EXIT_LAUNCHER_FAILURE,
    }
}
