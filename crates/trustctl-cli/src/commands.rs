use super::context::Streams;
use super::handlers;
use super::views;
use std::ffi::OsString;
use std::io::Write;
use tracing::debug;
use trustctl_core::{
    EnvSnapshot, ExitStatus, GlobalOptions, HandlerContext, HandlerRegistry, Result,
    check_tokens, extract_command, resolve_trust_home, route,
};

/// Run one invocation with the built-in handlers.
pub fn run(args: &[OsString], env: &EnvSnapshot, streams: &mut Streams<'_>) -> ExitStatus {
    run_with(&handlers::registry(), args, env, streams)
}

/// Run one invocation against an explicit handler set.
///
/// Every failure is rendered here and mapped to its exit status; nothing
/// below this point prints errors.
pub fn run_with(
    registry: &HandlerRegistry,
    args: &[OsString],
    env: &EnvSnapshot,
    streams: &mut Streams<'_>,
) -> ExitStatus {
    let outcome = execute(registry, args, env, streams.out);
    let status = match outcome {
        Ok(status) => status,
        Err(error) => {
            debug!(%error, "invocation failed");
            let color = streams.color && !args.iter().any(|a| a == "--testing");
            let _ = views::print_error(streams.err, &error, color);
            error.exit_status()
        }
    };
    let _ = streams.out.flush();
    let _ = streams.err.flush();
    status
}

fn execute(
    registry: &HandlerRegistry,
    args: &[OsString],
    env: &EnvSnapshot,
    out: &mut dyn Write,
) -> Result<ExitStatus> {
    check_tokens(args)?;

    let opts = GlobalOptions::parse(args);
    if opts.wants_early_exit() {
        // Help wins when both are present.
        if opts.help {
            views::print_help(out)?;
        } else {
            views::print_version(out)?;
        }
        return Ok(ExitStatus::Ok);
    }
    opts.validate()?;

    // Command words and handler args are matched as text.
    let tokens: Vec<String> = args
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    let command = extract_command(&tokens);
    let trust_home = resolve_trust_home(&opts, env)?;
    debug!(
        trust_home = %trust_home.value,
        source = %trust_home.source,
        testing = opts.testing,
        "resolved trust home"
    );

    let routed = route(&command)?;
    debug!(
        command = %routed.capability,
        handler = registry.handler_name(routed.capability),
        args = ?routed.args,
        "dispatching"
    );

    let ctx = HandlerContext {
        trust_home: &trust_home,
        args: &routed.args,
        testing: opts.testing,
    };
    registry.dispatch(&routed, &ctx, out)
}
