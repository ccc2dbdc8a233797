//! Config - 설정 관리
//!
//! - `handle.rs` - HandleConfig (레지스트리 동작 설정)

mod handle;

pub use handle::{HandleConfig, DEFAULT_HANDLE_LABEL};
