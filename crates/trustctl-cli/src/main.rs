use is_terminal::IsTerminal;
use std::ffi::OsString;
use std::io;
use trustctl::{Streams, logging, run};
use trustctl_core::EnvSnapshot;

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    let env = EnvSnapshot::capture();
    logging::init(&env);

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let color = io::stderr().is_terminal();

    let status = {
        let mut out = io::stdout().lock();
        let mut err = io::stderr().lock();
        let mut streams = Streams::new(&mut out, &mut err, color);
        run(&args, &env, &mut streams)
    };

    std::process::exit(status.code());
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
