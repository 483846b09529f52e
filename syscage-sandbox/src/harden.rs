//! Hardening applied before any seccomp context exists.

use crate::Result;
use nix::sys::{
    prctl,
    resource::{setrlimit, Resource},
};

/// Disables core dumps, ptrace attachment and privilege gain through exec.
///
/// Must run before the seccomp policy is built: a debugger attached to an
/// unhardened process could bypass or inspect the filter, and NO_NEW_PRIVS
/// is a precondition for loading an unprivileged filter at all.
pub fn harden_process() -> Result<()> {
    setrlimit(Resource::RLIMIT_CORE, 0, 0)?;
    prctl::set_dumpable(false)?;
    prctl::set_no_new_privs()?;
    Ok(())
}
