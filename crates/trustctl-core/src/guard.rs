use crate::{Error, Result};
use std::ffi::OsString;

/// Largest accepted argument, in bytes.
pub const MAX_TOKEN_BYTES: usize = 1024;

/// Reject the invocation if any raw argument is larger than [`MAX_TOKEN_BYTES`].
///
/// Runs on the OS-level arguments so the byte count is exact even for
/// non-UTF-8 input. Positions are 1-based, matching `argv[1..]`.
pub fn check_tokens(tokens: &[OsString]) -> Result<()> {
    for (idx, token) in tokens.iter().enumerate() {
        let len = token.as_encoded_bytes().len();
        if len > MAX_TOKEN_BYTES {
            return Err(Error::OversizedToken {
                position: idx + 1,
                len,
                limit: MAX_TOKEN_BYTES,
            });
        }
    }
    Ok(())
}
