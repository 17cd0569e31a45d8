// NOTE: trustctl bootstrap rationale
//
// Why a hand-written two-pass scan (not a derive-based argument parser)?
// - The size guard must see every raw token before anything interprets it
// - Global flags are recognized anywhere, unknown flags before the command are tolerated
// - Repeated --trust-home resolves to the first occurrence, not the last
// - Usage errors must exit 64 with a fixed "hint" line
//
// Why an environment snapshot?
// - The resolver stays a pure function of (options, snapshot)
// - Tests build snapshots from literal pairs instead of mutating process env
//
// Why a handler registry keyed by capability?
// - The router only decides *what* was asked for
// - Unbuilt handlers are a placeholder entry, not a special case in the router

pub mod env;
pub mod error;
pub mod exit;
pub mod guard;
pub mod handler;
pub mod options;
pub mod router;
pub mod trust_home;

pub use env::EnvSnapshot;
pub use error::{Error, Result};
pub use exit::ExitStatus;
pub use guard::{MAX_TOKEN_BYTES, check_tokens};
pub use handler::{CommandHandler, HandlerContext, HandlerRegistry, NotImplemented};
pub use options::{GlobalOptions, TrustHomeArg};
pub use router::{Capability, ParsedCommand, Route, extract_command, route};
pub use trust_home::{TrustHome, TrustHomeSource, resolve_trust_home};
