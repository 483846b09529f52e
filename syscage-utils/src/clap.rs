pub trait SyscageClap {
    fn add_command_arg(self) -> Self;
    fn add_syscall_names_arg(self) -> Self;
}

impl SyscageClap for clap::Command {
    fn add_command_arg(self) -> Self {
        self.arg(
            clap::Arg::new("command")
                .value_name("COMMAND")
                .help("Command line to execute (passed to the shell)")
                .num_args(1)
                .required(true),
        )
    }

    fn add_syscall_names_arg(self) -> Self {
        self.arg(
            clap::Arg::new("syscalls")
                .value_name("SYSCALL")
                .help(
                    "Syscall names the command is allowed to make (default deny). \
                     If none are given, the command runs unsandboxed",
                )
                .num_args(0..)
                .required(false),
        )
    }
}

pub fn new_syscage_cmd(name: impl Into<clap::builder::Str>) -> clap::Command {
    clap::Command::new(name)
        .version(crate::SYSCAGE_VERSION)
        .about("Run a command under a default-deny seccomp allow-list")
}
