use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};
use trustctl_core::{CommandHandler, ExitStatus, HandlerContext, Result};

/// Subdirectories created under the trust home.
pub const LAYOUT: [&str; 3] = ["logs", "store", "keys"];

/// Directory holding key material; owner-only on Unix.
pub const KEYS_DIR: &str = "keys";

/// `init`: create the trust home layout. Safe to run repeatedly.
pub struct Init;

impl CommandHandler for Init {
    fn name(&self) -> &'static str {
        "init"
    }

    fn execute(&self, ctx: &HandlerContext<'_>, out: &mut dyn Write) -> Result<ExitStatus> {
        let root = Path::new(&ctx.trust_home.value);

        for dir in LAYOUT {
            let path = root.join(dir);
            if path.is_dir() {
                debug!(path = %path.display(), "already present");
            } else {
                fs::create_dir_all(&path)?;
                info!(path = %path.display(), "created directory");
            }
        }

        restrict_keys_dir(&root.join(KEYS_DIR))?;

        writeln!(out, "initialized {}", root.display())?;
        Ok(ExitStatus::Ok)
    }
}

#[cfg(unix)]
fn restrict_keys_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o700))
}

#[cfg(not(unix))]
fn restrict_keys_dir(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
