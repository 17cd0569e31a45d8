use std::fmt;

/// Process outcome of a single invocation.
///
/// Codes follow sysexits(3) where one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitStatus {
    Ok,
    Usage,
    Software,
    IoError,
    /// Terminated by an interrupt (128 + SIGINT).
    Interrupted,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Ok => 0,
            ExitStatus::Usage => 64,
            ExitStatus::Software => 70,
            ExitStatus::IoError => 74,
            ExitStatus::Interrupted => 130,
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_sysexits() {
        assert_eq!(ExitStatus::Ok.code(), 0);
        assert_eq!(ExitStatus::Usage.code(), 64);
        assert_eq!(ExitStatus::Software.code(), 70);
        assert_eq!(ExitStatus::IoError.code(), 74);
        assert_eq!(ExitStatus::Interrupted.code(), 130);
    }
}
