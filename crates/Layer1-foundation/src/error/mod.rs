//! Error types for hook
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// hook 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 핸들러 관련
    // ========================================================================
    /// 핸들러 실행 실패. 같은 trigger 호출의 나머지 핸들러는 실행되지 않음
    #[error("Handler failed for '{event}': {message}")]
    Handler { event: String, message: String },

    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 핸들러 에러 생성 헬퍼
    pub fn handler(event: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Handler {
            event: event.into(),
            message: message.into(),
        }
    }

    /// 핸들러가 반환한 에러인지 확인
    pub fn is_handler_failure(&self) -> bool {
        matches!(self, Error::Handler { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_display() {
        let err = Error::handler("click.ui", "boom");
        assert!(err.is_handler_failure());
        assert_eq!(err.to_string(), "Handler failed for 'click.ui': boom");
    }

    #[test]
    fn test_config_error_is_not_handler_failure() {
        let err = Error::Config("bad".into());
        assert!(!err.is_handler_failure());
        assert_eq!(err.to_string(), "Configuration error: bad");
    }
}
