use crate::views;
use std::io::Write;
use tracing::{debug, info};
use trustctl_core::{CommandHandler, ExitStatus, HandlerContext, Result};

/// `config show`: print the resolved trust home and where it came from.
pub struct ConfigShow;

impl CommandHandler for ConfigShow {
    fn name(&self) -> &'static str {
        "config show"
    }

    fn execute(&self, ctx: &HandlerContext<'_>, out: &mut dyn Write) -> Result<ExitStatus> {
        if !ctx.args.is_empty() {
            debug!(args = ?ctx.args, "ignoring extra arguments");
        }

        views::print_trust_home(out, ctx.trust_home)?;
        info!(
            trust_home = %ctx.trust_home.value,
            source = %ctx.trust_home.source,
            "config show"
        );
        Ok(ExitStatus::Ok)
    }
}
