//! Sandboxing helpers for syscage: process hardening and the default-deny
//! seccomp policy built from syscall names.

pub mod harden;
pub mod policy;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("syscallz error: {0}")]
    Syscallz(#[from] syscallz::Error),
    #[error("errno error: {0}")]
    Errno(#[from] nix::errno::Errno),
    #[error("unknown syscall \"{0}\"")]
    UnknownSyscall(String),
}
type Result<T> = std::result::Result<T, Error>;
