use std::{env, io, process};
use syscage_utils::clap::SyscageClap;

fn main() {
    syscage_utils::log::init_logger();

    let mut cmd = syscage_utils::clap::new_syscage_cmd("syscage")
        .add_command_arg()
        .add_syscall_names_arg();

    // Bare invocation prints usage and is not an error.
    if env::args().nth(1).is_none() {
        let _ = cmd.print_help();
        return;
    }
    let matches = cmd.get_matches();
    let command = matches.get_one::<String>("command").unwrap().to_owned();
    let syscalls: Vec<String> = matches
        .get_many::<String>("syscalls")
        .unwrap_or_default()
        .cloned()
        .collect();

    log::info!("start ({}): {}", process::id(), command);
    let code = match syscage::run(&command, &syscalls, &mut io::stdout().lock()) {
        Ok(status) => {
            let code = syscage::exit_code(status);
            if code == 0 {
                log::debug!("exit");
            } else {
                log::error!("command failed: {status}");
            }
            code
        }
        Err(err) => {
            log::error!("{err}");
            syscage::failure_exit_code(&err)
        }
    };
    process::exit(code);
}
