//! Child spawning and combined-output relay.

use crate::{Error, Result};
use log::trace;
use nix::unistd;
use std::{
    fs::File,
    io::{ErrorKind, Read, Write},
    process::{Child, Command, ExitStatus, Stdio},
};
use syscage_utils::{OUTPUT_CHUNK_SIZE, SHELL_BIN};

struct ShellChild {
    child: Child,
    // Read end of the pipe carrying the child's stdout and stderr.
    output: File,
}

/// Runs `command` through the shell and streams its combined stdout+stderr
/// to `out` as it arrives, then returns the child's exit status.
pub(crate) fn run_shell_command(command: &str, out: &mut impl Write) -> Result<ExitStatus> {
    let mut shell_child = spawn_shell(command)?;
    let relayed = relay(&mut shell_child.output, out);
    // Close our read end before reaping so a child still writing after a
    // relay error doesn't block in the pipe forever.
    drop(shell_child.output);
    let status = shell_child.child.wait()?;
    relayed?;
    trace!("child reaped: {status}");
    Ok(status)
}

/// Spawns `sh -c <command>` with stdout and stderr attached to the write end
/// of a single pipe, so the launcher observes one ordered byte stream. The
/// parent's copies of the write end die with the `Command` at the end of this
/// function, which is what lets `relay` see EOF when the child exits.
fn spawn_shell(command: &str) -> Result<ShellChild> {
    let (pipe_rd, pipe_wr) = unistd::pipe().map_err(|err| Error::Spawn(err.into()))?;
    let pipe_wr_err = pipe_wr.try_clone().map_err(Error::Spawn)?;

    let child = Command::new(SHELL_BIN)
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::from(pipe_wr))
        .stderr(Stdio::from(pipe_wr_err))
        .spawn()
        .map_err(Error::Spawn)?;

    Ok(ShellChild {
        child,
        output: File::from(pipe_rd),
    })
}

/// Copies `input` to `output` in bounded chunks until end-of-stream. A line
/// may span multiple reads; nothing is buffered beyond one chunk.
fn relay(input: &mut impl Read, output: &mut impl Write) -> Result<()> {
    let mut buf = [0u8; OUTPUT_CHUNK_SIZE];
    loop {
        let count = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(count) => count,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        output.write_all(&buf[..count])?;
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn relay_copies_everything() {
        let data = b"combined output\n".to_vec();
        let mut out = Vec::new();
        relay(&mut Cursor::new(data.clone()), &mut out).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn relay_handles_input_larger_than_one_chunk() {
        let data = vec![0xabu8; OUTPUT_CHUNK_SIZE * 3 + 17];
        let mut out = Vec::new();
        relay(&mut Cursor::new(data.clone()), &mut out).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn relay_of_empty_stream_writes_nothing() {
        let mut out = Vec::new();
        relay(&mut Cursor::new(Vec::new()), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
