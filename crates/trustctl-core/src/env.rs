use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

pub const HOME_VAR: &str = "HOME";
pub const TRUST_HOME_VAR: &str = "TRUST_HOME";
pub const LOG_VAR: &str = "TRUSTCTL_LOG";
pub const LOG_FORMAT_VAR: &str = "TRUSTCTL_LOG_FORMAT";

const CAPTURED: [&str; 4] = [HOME_VAR, TRUST_HOME_VAR, LOG_VAR, LOG_FORMAT_VAR];

/// Read-only view of the environment, captured once per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, OsString>,
    home: Option<PathBuf>,
}

impl EnvSnapshot {
    /// Capture the variables trustctl reads from the current process.
    ///
    /// Values are kept as raw OS strings. The home directory comes from
    /// `HOME` when it is set and non-empty, otherwise from the platform lookup.
    pub fn capture() -> Self {
        let vars = CAPTURED
            .iter()
            .filter_map(|key| std::env::var_os(key).map(|v| (key.to_string(), v)))
            .collect::<BTreeMap<_, _>>();

        let home = home_from(&vars).or_else(dirs::home_dir);

        Self { vars, home }
    }

    /// Build a snapshot from literal pairs. `HOME` doubles as the home directory.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OsString>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<BTreeMap<_, _>>();
        let home = home_from(&vars);
        Self { vars, home }
    }

    /// Raw value, whether or not it is valid UTF-8.
    pub fn get_os(&self, key: &str) -> Option<&OsStr> {
        self.vars.get(key).map(OsString::as_os_str)
    }

    /// Value as text. Unset and non-UTF-8 values both read as `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_os(key).and_then(OsStr::to_str)
    }

    /// Like [`EnvSnapshot::get`], but empty values count as unset.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn home_dir(&self) -> Option<&PathBuf> {
        self.home.as_ref()
    }
}

fn home_from(vars: &BTreeMap<String, OsString>) -> Option<PathBuf> {
    vars.get(HOME_VAR)
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_uses_home_var() {
        let env = EnvSnapshot::from_pairs([("HOME", "/home/op"), ("TRUST_HOME", "/t")]);
        assert_eq!(env.home_dir(), Some(&PathBuf::from("/home/op")));
        assert_eq!(env.get("TRUST_HOME"), Some("/t"));
        assert_eq!(env.get("MISSING"), None);
    }

    #[test]
    fn test_empty_values() {
        let env = EnvSnapshot::from_pairs([("HOME", ""), ("TRUST_HOME", "")]);
        assert_eq!(env.home_dir(), None);
        assert_eq!(env.get("TRUST_HOME"), Some(""));
        assert_eq!(env.get_non_empty("TRUST_HOME"), None);
    }

    #[test]
    fn test_default_is_empty() {
        let env = EnvSnapshot::default();
        assert_eq!(env.home_dir(), None);
        assert_eq!(env.get(TRUST_HOME_VAR), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_value_is_kept_raw() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"/srv/tr\xffust".to_vec());
        let env = EnvSnapshot::from_pairs([("TRUST_HOME", raw.clone())]);
        assert_eq!(env.get_os("TRUST_HOME"), Some(raw.as_os_str()));
        assert_eq!(env.get("TRUST_HOME"), None);
    }
}
