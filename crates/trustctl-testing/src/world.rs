//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated HOME and working directory
//! - Controlling the variables trustctl reads (HOME, TRUST_HOME, TRUSTCTL_LOG)
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables removed from every command so the host environment never leaks in.
const SCRUBBED_VARS: [&str; 4] = ["HOME", "TRUST_HOME", "TRUSTCTL_LOG", "TRUSTCTL_LOG_FORMAT"];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use trustctl_testing::TestWorld;
///
/// let world = TestWorld::new().with_env("TRUST_HOME", "/srv/trust");
///
/// let result = world.run(&["config", "show"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    cwd: PathBuf,
    home: PathBuf,
    env_vars: HashMap<String, OsString>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let home = base_path.join("home");
        let cwd = base_path.join("work");

        std::fs::create_dir_all(&home).expect("Failed to create home dir");
        std::fs::create_dir_all(&cwd).expect("Failed to create work dir");

        Self {
            temp_dir,
            cwd,
            home,
            env_vars: HashMap::new(),
        }
    }

    /// Get the HOME directory handed to the CLI.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Trust home trustctl resolves by default in this world.
    pub fn default_trust_home(&self) -> PathBuf {
        self.home.join(".trustctl")
    }

    /// Repo-local trust home used under `--testing`, relative to the cwd.
    pub fn testing_trust_home(&self) -> PathBuf {
        self.cwd.join(".trustctl-test")
    }

    /// Set an environment variable for CLI execution. The value may be any
    /// OS string, including one that is not valid UTF-8.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Run commands from `path` instead of `work/`. Relative paths are taken
    /// from the sandbox root; the directory is created on demand.
    pub fn enter_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        let cwd = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.temp_dir.path().join(path)
        };
        std::fs::create_dir_all(&cwd).expect("Failed to create working directory");
        self.cwd = cwd;
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("trustctl")`).
    /// Host variables are scrubbed, HOME points at the sandbox and the cwd is
    /// set. No arguments are added.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        for key in SCRUBBED_VARS {
            cmd.env_remove(key);
        }
        cmd.env("HOME", &self.home);

        // Set CWD for the command
        cmd.current_dir(&self.cwd);

        // Apply environment variables
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Same configuration applied to a plain `std::process::Command`, for
    /// processes that must outlive a single assertion (see `process`).
    pub fn configure_std_command<'a>(
        &self,
        cmd: &'a mut std::process::Command,
    ) -> &'a mut std::process::Command {
        for key in SCRUBBED_VARS {
            cmd.env_remove(key);
        }
        cmd.env("HOME", &self.home);
        cmd.current_dir(&self.cwd);
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built and the `CARGO_BIN_EXE_` environment variable to be set (which
    /// cargo test does automatically).
    #[allow(deprecated)]
    pub fn run<S: AsRef<OsStr>>(&self, args: &[S]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("trustctl")
            .map_err(|e| anyhow::anyhow!("Failed to find trustctl binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit code, or `None` when the process was killed by a signal.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
