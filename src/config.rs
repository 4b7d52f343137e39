//! Emission context and its layered loading.
//!
//! Later layers win: built-in defaults, then a YAML file, then `.env`, then
//! `MOCKSCRIBE_*` environment variables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ports::FileSystem;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "mockscribe.yaml";

/// Prefix for environment overrides, e.g. `MOCKSCRIBE_MOCK_DIR`.
pub const ENV_PREFIX: &str = "MOCKSCRIBE_";

/// Values substituted into generated test boilerplate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmitContext {
    /// Directory holding recorded mocks, bound per test at setup.
    pub mock_dir: String,
    /// Directory served when no mock matches.
    pub fallback_dir: String,
    /// Start URL for buckets without a navigation event.
    pub app_url: String,
    /// Base URL for replayed API calls.
    pub api_url: String,
    /// Package (or resource) providing the mock setup helpers.
    pub helper_package: String,
}

impl Default for EmitContext {
    fn default() -> Self {
        Self {
            mock_dir: "./ftmocks".to_string(),
            fallback_dir: "./public".to_string(),
            app_url: "http://your-app-url".to_string(),
            api_url: "http://localhost:5000".to_string(),
            helper_package: "ftmocks-utils".to_string(),
        }
    }
}

impl EmitContext {
    /// Reads a YAML config file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_yaml_file(fs: &dyn FileSystem, path: &Path) -> Result<Self, ConfigError> {
        let text = fs
            .read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::from_yaml_str(&text, path)
    }

    fn from_yaml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Applies `MOCKSCRIBE_*` overrides resolved through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let fields: [(&str, &mut String); 5] = [
            ("MOCK_DIR", &mut self.mock_dir),
            ("FALLBACK_DIR", &mut self.fallback_dir),
            ("APP_URL", &mut self.app_url),
            ("API_URL", &mut self.api_url),
            ("HELPER_PACKAGE", &mut self.helper_package),
        ];
        for (suffix, field) in fields {
            if let Some(value) = lookup(&format!("{ENV_PREFIX}{suffix}")) {
                tracing::debug!(key = suffix, %value, "config override from environment");
                *field = value;
            }
        }
    }

    /// Loads the full layered context. Config files are read through `fs`.
    ///
    /// `explicit` must exist; the default config file is optional.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a config file or `.env` is present but
    /// unreadable or invalid.
    pub fn load(fs: &dyn FileSystem, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let file = explicit
            .map(Path::to_path_buf)
            .or_else(|| Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| fs.exists(p)));
        let mut ctx = match file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::from_yaml_file(fs, &path)?
            }
            None => Self::default(),
        };

        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }
        ctx.apply_env(|key| std::env::var(key).ok());
        Ok(ctx)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::adapters::MemoryFileSystem;

    #[test]
    fn defaults_match_documented_values() {
        let ctx = EmitContext::default();
        assert_eq!(ctx.mock_dir, "./ftmocks");
        assert_eq!(ctx.fallback_dir, "./public");
        assert_eq!(ctx.app_url, "http://your-app-url");
        assert_eq!(ctx.api_url, "http://localhost:5000");
        assert_eq!(ctx.helper_package, "ftmocks-utils");
    }

    #[test]
    fn yaml_overrides_only_given_keys() {
        let ctx = EmitContext::from_yaml_str(
            "mock_dir: ./fixtures/mocks\napp_url: http://localhost:3000\n",
            Path::new("mockscribe.yaml"),
        )
        .unwrap();
        assert_eq!(ctx.mock_dir, "./fixtures/mocks");
        assert_eq!(ctx.app_url, "http://localhost:3000");
        assert_eq!(ctx.fallback_dir, "./public");
    }

    #[test]
    fn empty_yaml_is_default() {
        let ctx = EmitContext::from_yaml_str("\n", Path::new("x.yaml")).unwrap();
        assert_eq!(ctx, EmitContext::default());
    }

    #[test]
    fn unknown_yaml_key_is_rejected() {
        let err = EmitContext::from_yaml_str("mockdir: x\n", Path::new("bad.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn env_overrides_win() {
        let env: HashMap<&str, &str> =
            [("MOCKSCRIBE_API_URL", "http://api:9000"), ("MOCK_DIR", "ignored")].into();
        let mut ctx = EmitContext::default();
        ctx.apply_env(|key| env.get(key).map(ToString::to_string));
        assert_eq!(ctx.api_url, "http://api:9000");
        assert_eq!(ctx.mock_dir, "./ftmocks");
    }

    #[test]
    fn yaml_file_through_filesystem_port() {
        let fs = MemoryFileSystem::new()
            .with_file("/project/mockscribe.yaml", "helper_package: '@acme/mocks'\n");

        let ctx = EmitContext::from_yaml_file(&fs, Path::new("/project/mockscribe.yaml")).unwrap();
        assert_eq!(ctx.helper_package, "@acme/mocks");

        let missing = Path::new("/project/nope.yaml");
        let missing = EmitContext::from_yaml_file(&fs, missing).unwrap_err();
        assert!(matches!(missing, ConfigError::Read { .. }));
    }

    #[test]
    fn explicit_config_is_loaded_from_port() {
        let fs = MemoryFileSystem::new().with_file("/cfg/e2e.yaml", "fallback_dir: ./static\n");
        let ctx = EmitContext::load(&fs, Some(Path::new("/cfg/e2e.yaml"))).unwrap();
        assert_eq!(ctx.fallback_dir, "./static");

        let err = EmitContext::load(&fs, Some(Path::new("/cfg/missing.yaml"))).unwrap_err();
        assert!(err.to_string().contains("/cfg/missing.yaml"));
    }
}
