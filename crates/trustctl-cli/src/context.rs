use std::io::Write;

/// Output sinks for one invocation.
pub struct Streams<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    /// Colorize the `error:` prefix. Only set when stderr is a terminal.
    pub color: bool,
}

impl<'a> Streams<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write, color: bool) -> Self {
        Self { out, err, color }
    }

    /// Plain sinks, as used by tests capturing into buffers.
    pub fn captured(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self::new(out, err, false)
    }
}
