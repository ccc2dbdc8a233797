//! # Handle
//!
//! 이름 기반 핸들러 레지스트리
//!
//! ## 개요
//!
//! 핸들러는 두 곳에 저장됩니다.
//!
//! - plain 핸들러: namespace 없는 이름 → 등록 순서대로의 핸들러 목록
//! - namespaced 핸들러: `이름.ns1.ns2` 형태로 등록된 바인딩 목록 (등록 순서 유지)
//!
//! trigger 시 namespace 없는 이벤트는 plain 목록을 호출하고, 이름이 비어 있거나
//! namespaced 등록이 있는 이름이면 매칭되는 namespaced 바인딩도 호출합니다.
//!
//! ## 예시
//!
//! ```ignore
//! use hook_core::{Event, Handle, Handler};
//! use serde_json::json;
//!
//! let mut handle: Handle<Vec<String>> = Handle::new();
//! let log = Handler::new(|ctx: &mut Vec<String>, event: &mut Event, _data: &[_]| {
//!     ctx.push(event.raw_name().to_string());
//!     Ok(())
//! });
//!
//! handle.add_handler(&Event::new("click.ui focus"), log.clone());
//!
//! let mut seen = Vec::new();
//! handle.trigger_handlers(&mut seen, &mut Event::new("click"), vec![json!(1)])?;
//! handle.trigger(&mut seen, &mut Event::new(".ui"))?;
//!
//! // namespace "ui"로 등록된 모든 바인딩 제거
//! handle.remove_handler(&Event::new(".ui"), None);
//! ```

mod registry;
mod types;

pub use registry::Handle;
pub use types::{Handler, HandlerFn, NamespacedHandler};
