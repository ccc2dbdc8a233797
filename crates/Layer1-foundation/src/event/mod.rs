//! Event - 이벤트 디스크립터
//!
//! 이벤트 이름 문자열을 primary name과 namespace 토큰으로 파싱합니다.
//!
//! ## 이름 형식
//!
//! ```text
//! "click"              → name: "click",  namespaces: []
//! "click.ui.modal"     → name: "click",  namespaces: ["ui", "modal"]
//! ".ui"                → name: "",       namespaces: ["ui"]
//! "click.ui focus.ui"  → 두 개의 sub-event ("click.ui", "focus.ui")
//! ```
//!
//! ## 사용법
//!
//! ```ignore
//! use hook_foundation::event::{Event, EventOptions};
//!
//! let mut event = Event::new("click.ui.modal");
//! assert_eq!(event.event_name(), "click");
//! assert_eq!(event.namespaces(), vec!["ui", "modal"]);
//!
//! event.prevent_default();
//! assert!(event.is_default_prevented());
//!
//! let event = Event::from_options(EventOptions::new().with_event_name("submit").cancelled());
//! assert!(event.is_cancelled());
//! ```

pub mod types;

pub use types::{Event, EventOptions, NAMESPACE_SEPARATOR, SUB_EVENT_SEPARATOR};
