//! # hook-foundation
//!
//! Foundation layer for hook:
//! - Error: 중앙 에러 타입 (Error, Result)
//! - Config: 레지스트리 설정 (HandleConfig)
//! - Event: 이벤트 디스크립터 (이름 파싱, 플래그, payload)
//!
//! ## 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  hook-core: Handle (add / remove / trigger)  │
//! │       │                                      │
//! │       ▼                                      │
//! │  NamespacedHandler (subset 매칭)             │
//! │       │                                      │
//! │       ▼                                      │
//! │  hook-foundation: Event (이름 파싱)          │
//! └──────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod event;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{HandleConfig, DEFAULT_HANDLE_LABEL};

// ============================================================================
// Event (이벤트 디스크립터)
// ============================================================================
pub use event::{Event, EventOptions, NAMESPACE_SEPARATOR, SUB_EVENT_SEPARATOR};
