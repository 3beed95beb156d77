//! Location of the telemetry files

use std::path::PathBuf;

/// Overrides the `~/.goolabs` data directory
pub const HOME_VAR: &str = "GOOLABS_HOME";

#[derive(Debug, Clone)]
pub struct Paths {
    pub home: PathBuf,
}

impl Paths {
    /// `$GOOLABS_HOME` when set, otherwise `~/.goolabs`
    pub fn new() -> std::io::Result<Self> {
        if let Some(home) = std::env::var_os(HOME_VAR).filter(|v| !v.is_empty()) {
            return Ok(Self::at(home));
        }
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;
        Ok(Self::at(home.join(".goolabs")))
    }

    pub fn at(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    pub fn telemetry_dir(&self) -> PathBuf {
        self.home.join("telemetry")
    }

    pub fn calls_file(&self) -> PathBuf {
        self.telemetry_dir().join("calls.jsonl")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_home_override() {
        std::env::set_var(HOME_VAR, "/tmp/goolabs-home");
        let paths = Paths::new().unwrap();
        std::env::remove_var(HOME_VAR);

        assert_eq!(paths.home, PathBuf::from("/tmp/goolabs-home"));
        assert_eq!(
            paths.calls_file(),
            PathBuf::from("/tmp/goolabs-home/telemetry/calls.jsonl")
        );
    }

    #[test]
    #[serial]
    fn test_default_home() {
        std::env::remove_var(HOME_VAR);
        if let Ok(paths) = Paths::new() {
            assert!(paths.home.ends_with(".goolabs"));
            assert!(paths.telemetry_dir().ends_with(".goolabs/telemetry"));
        }
    }
}
