use nix::sys::{
    prctl,
    resource::{getrlimit, Resource},
};
use syscage_sandbox::harden::harden_process;

#[test]
fn hardening_is_observable() {
    harden_process().expect("hardening failed");

    assert!(prctl::get_no_new_privs().expect("couldn't read NO_NEW_PRIVS"));
    assert!(!prctl::get_dumpable().expect("couldn't read dumpable"));

    let (soft, hard) = getrlimit(Resource::RLIMIT_CORE).expect("couldn't read RLIMIT_CORE");
    assert_eq!(soft, 0);
    assert_eq!(hard, 0);
}
