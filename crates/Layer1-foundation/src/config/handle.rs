//! Handle Config - 핸들러 레지스트리 설정
//!
//! TOML 파일이나 문자열에서 로드할 수 있습니다.
//!
//! ```toml
//! label = "ui"
//! debug_mode = true
//! initial_capacity = 32
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// 기본 레이블
pub const DEFAULT_HANDLE_LABEL: &str = "handle";

/// Handle 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleConfig {
    /// 로그 레코드에 붙는 이름 (여러 레지스트리 구분용)
    pub label: String,

    /// 디버그 모드 (핸들러 호출마다 trace 로깅)
    pub debug_mode: bool,

    /// plain 이벤트 맵의 초기 용량
    pub initial_capacity: usize,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_HANDLE_LABEL.to_string(),
            debug_mode: false,
            initial_capacity: 16,
        }
    }
}

impl HandleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 레이블 설정
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// 디버그 모드 설정
    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    /// 초기 용량 설정
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// TOML 문자열에서 파싱
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), label = %config.label, "Loaded handle config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(Error::Config("label must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = HandleConfig::default();
        assert_eq!(config.label, "handle");
        assert!(!config.debug_mode);
        assert_eq!(config.initial_capacity, 16);
    }

    #[test]
    fn test_builder() {
        let config = HandleConfig::new()
            .with_label("ui")
            .with_debug_mode(true)
            .with_initial_capacity(4);

        assert_eq!(config.label, "ui");
        assert!(config.debug_mode);
        assert_eq!(config.initial_capacity, 4);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = HandleConfig::from_toml_str("debug_mode = true").unwrap();
        assert!(config.debug_mode);
        assert_eq!(config.label, DEFAULT_HANDLE_LABEL);
        assert_eq!(config.initial_capacity, 16);
    }

    #[test]
    fn test_empty_label_rejected() {
        let err = HandleConfig::from_toml_str("label = \"  \"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = HandleConfig::from_toml_str("debug_mode = \"yes\"").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "label = \"modal\"").unwrap();
        writeln!(file, "initial_capacity = 8").unwrap();

        let config = HandleConfig::load(file.path()).unwrap();
        assert_eq!(config.label, "modal");
        assert_eq!(config.initial_capacity, 8);
        assert!(!config.debug_mode);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = HandleConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
