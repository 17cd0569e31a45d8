//! Background process management for long-running commands.
//!
//! Provides utilities for:
//! - Starting `trustctl wait` in the background
//! - Waiting for a readiness line on stdout
//! - Delivering an interrupt and collecting the exit status

use std::io::{BufRead, BufReader};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::time::Duration;

/// A background process handle.
pub struct BackgroundProcess {
    child: Child,
}

impl BackgroundProcess {
    /// Spawn a new background process with piped stdout and stderr.
    pub fn spawn_piped(mut command: Command) -> std::io::Result<Self> {
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());
        let child = command.spawn()?;
        Ok(Self { child })
    }

    /// Block until a stdout line contains `needle`, or give up after `timeout`.
    ///
    /// Lines are read on a helper thread so a silent process cannot hang the test.
    /// Stdout is handed to that thread; call this at most once.
    pub fn wait_for_stdout_line(&mut self, needle: &str, timeout: Duration) -> bool {
        let Some(stdout) = self.child.stdout.take() else {
            return false;
        };

        let (tx, rx) = mpsc::channel();
        let needle = needle.to_string();
        std::thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if line.contains(&needle) {
                    let _ = tx.send(());
                    break;
                }
            }
        });

        rx.recv_timeout(timeout).is_ok()
    }

    /// Send SIGINT, as Ctrl+C in a terminal would.
    #[cfg(unix)]
    pub fn interrupt(&self) -> std::io::Result<()> {
        let pid = libc::pid_t::try_from(self.child.id())
            .map_err(|_| std::io::Error::other("pid out of range"))?;
        let rc = unsafe { libc::kill(pid, libc::SIGINT) };
        if rc == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }

    /// Wait for the process to exit with a timeout.
    pub fn wait_timeout(
        &mut self,
        timeout: Duration,
    ) -> std::io::Result<Option<std::process::ExitStatus>> {
        // Simple polling implementation
        let start = std::time::Instant::now();
        loop {
            match self.child.try_wait()? {
                Some(status) => return Ok(Some(status)),
                None => {
                    if start.elapsed() > timeout {
                        return Ok(None);
                    }
                    std::thread::sleep(Duration::from_millis(50));
                }
            }
        }
    }
}

impl Drop for BackgroundProcess {
    fn drop(&mut self) {
        // Ensure process is killed when dropped
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
