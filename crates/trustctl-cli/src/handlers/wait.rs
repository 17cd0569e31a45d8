use std::io::Write;
use std::sync::mpsc;
use tracing::info;
use trustctl_core::{CommandHandler, Error, ExitStatus, HandlerContext, Result};

pub const READY_MESSAGE: &str = "waiting for interrupt (Ctrl+C to exit)";

/// `wait`: block until Ctrl+C, then exit with the interrupted status.
///
/// The interrupt handler is process-wide and can only be installed once, so
/// this handler is meant to run at most once per process.
pub struct Wait;

impl CommandHandler for Wait {
    fn name(&self) -> &'static str {
        "wait"
    }

    fn execute(&self, _ctx: &HandlerContext<'_>, out: &mut dyn Write) -> Result<ExitStatus> {
        let (tx, rx) = mpsc::channel();
        ctrlc::set_handler(move || {
            let _ = tx.send(());
        })
        .map_err(|e| Error::SignalHandler(e.to_string()))?;

        // Only announce readiness once the handler is live.
        writeln!(out, "{}", READY_MESSAGE)?;
        out.flush()?;

        rx.recv()
            .map_err(|_| Error::SignalHandler("interrupt channel closed".to_string()))?;

        info!("interrupted");
        Ok(ExitStatus::Interrupted)
    }
}
