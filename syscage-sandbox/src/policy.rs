//! Default-deny seccomp policy built from syscall names.

use crate::{Error, Result};
use log::debug;
use syscallz::{Action, Context, Syscall};

/// Accumulates the allow-list. Names are resolved against the running
/// kernel's syscall table as they are added; an unresolvable name fails the
/// whole build (partial policies are never installed).
pub struct PolicyBuilder {
    allowed: Vec<Syscall>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        PolicyBuilder {
            allowed: Vec::new(),
        }
    }

    /// Resolves `name` and adds it to the allow-list. Duplicates are
    /// harmless, the list keeps set semantics.
    pub fn allow_name(mut self, name: &str) -> Result<Self> {
        let syscall =
            Syscall::from_name(name).ok_or_else(|| Error::UnknownSyscall(name.to_string()))?;
        if !self.allowed.contains(&syscall) {
            self.allowed.push(syscall);
        }
        Ok(self)
    }

    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }

    /// Creates the seccomp context. The deny-and-terminate default is set
    /// when the context is initialized, before any allow rule is added.
    pub fn build(self) -> Result<FilterPolicy> {
        let mut ctx = Context::init_with_action(Action::KillProcess)?;
        let rules = self.allowed.len();
        for syscall in self.allowed {
            ctx.allow_syscall(syscall)?;
        }
        Ok(FilterPolicy { ctx, rules })
    }
}

impl Default for PolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A built but not yet installed policy. Installing consumes it: once loaded
/// in the kernel the filter cannot be revoked or amended for the lifetime of
/// the process, and children inherit it.
pub struct FilterPolicy {
    ctx: Context,
    rules: usize,
}

impl FilterPolicy {
    /// Number of allow entries (the default deny rule is not counted).
    pub fn rule_count(&self) -> usize {
        self.rules
    }

    pub fn install(self) -> Result<()> {
        debug!("loading seccomp context ({} allow rules)", self.rules);
        self.ctx.load()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_names_are_deduplicated() {
        let builder = PolicyBuilder::new()
            .allow_name("read")
            .unwrap()
            .allow_name("write")
            .unwrap()
            .allow_name("read")
            .unwrap();
        assert_eq!(builder.allowed_count(), 2);
    }

    #[test]
    fn entry_count_is_order_independent() {
        let names = ["write", "close", "read"];
        let mut forward = PolicyBuilder::new();
        for name in names {
            forward = forward.allow_name(name).unwrap();
        }
        let mut backward = PolicyBuilder::new();
        for name in names.iter().rev() {
            backward = backward.allow_name(name).unwrap();
        }
        assert_eq!(forward.allowed_count(), names.len());
        assert_eq!(backward.allowed_count(), names.len());
    }

    #[test]
    fn unknown_name_fails_the_build() {
        let res = PolicyBuilder::new()
            .allow_name("read")
            .unwrap()
            .allow_name("not_a_syscall");
        assert!(matches!(res, Err(Error::UnknownSyscall(ref name)) if name == "not_a_syscall"));
    }

    #[test]
    fn built_policy_keeps_the_rule_count() {
        let policy = PolicyBuilder::new()
            .allow_name("read")
            .unwrap()
            .allow_name("write")
            .unwrap()
            .allow_name("exit_group")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(policy.rule_count(), 3);
    }

    #[test]
    fn empty_builder_builds_an_empty_policy() {
        let policy = PolicyBuilder::new().build().unwrap();
        assert_eq!(policy.rule_count(), 0);
    }
}
