//! hook-core: Core Runtime for hook
//!
//! Layer2 - 핸들러 등록, namespace 매칭, 동기 dispatch
//!
//! # 주요 모듈
//!
//! - `handle`: Handle 레지스트리, Handler 콜백, NamespacedHandler 바인딩
//!
//! Layer1 타입(`Event`, `EventOptions`, `HandleConfig`, `Error`)도 함께 re-export 합니다.

pub mod handle;

// Re-exports: Handle
pub use handle::{Handle, Handler, HandlerFn, NamespacedHandler};

// Re-exports: Layer1
pub use hook_foundation::{Error, Event, EventOptions, HandleConfig, Result};
