//! Handle 타입 정의
//!
//! 콜백 참조(`Handler`)와 namespace 바인딩(`NamespacedHandler`)

use hook_foundation::{Event, Result};
use serde_json::Value;
use std::sync::Arc;

// ============================================================================
// Handler - 콜백 참조
// ============================================================================

/// 핸들러 함수 시그니처: `(context, event, data)`
pub type HandlerFn<C> = dyn Fn(&mut C, &mut Event, &[Value]) -> Result<()> + Send + Sync;

/// 콜백 참조
///
/// 동일성은 참조 기준입니다. 같은 `Handler`의 clone끼리는 같고,
/// 따로 생성한 두 핸들러는 클로저 내용이 같아도 다릅니다.
pub struct Handler<C> {
    inner: Arc<HandlerFn<C>>,
}

impl<C> Handler<C> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&mut C, &mut Event, &[Value]) -> Result<()> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// 콜백 호출
    pub fn call(&self, context: &mut C, event: &mut Event, data: &[Value]) -> Result<()> {
        (self.inner)(context, event, data)
    }

    /// 같은 콜백을 가리키는지 확인
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C> Clone for Handler<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> PartialEq for Handler<C> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<C> Eq for Handler<C> {}

impl<C> std::fmt::Debug for Handler<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Handler")
            .field(&Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

// ============================================================================
// NamespacedHandler - namespace 바인딩
// ============================================================================

/// namespace가 있는 이름으로 등록된 핸들러
///
/// 이름과 namespace는 등록 시점의 스냅샷입니다.
pub struct NamespacedHandler<C> {
    event_name: String,
    namespaces: Vec<String>,
    handler: Handler<C>,
}

impl<C> NamespacedHandler<C> {
    pub fn new(event: &Event, handler: Handler<C>) -> Self {
        Self {
            event_name: event.event_name().to_string(),
            namespaces: event.namespaces(),
            handler,
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    pub fn handler(&self) -> &Handler<C> {
        &self.handler
    }

    /// 후보 이벤트가 이 바인딩에 매칭되는지 확인
    ///
    /// 이름이 같거나 후보 이름이 비어 있어야 하고, 후보의 namespace는
    /// 모두 이 바인딩의 namespace에 포함되어야 합니다 (subset).
    pub fn matches(&self, event: &Event) -> bool {
        let name = event.event_name();
        if !(name == self.event_name || name.is_empty()) {
            return false;
        }

        event
            .namespaces()
            .iter()
            .all(|namespace| self.namespaces.contains(namespace))
    }
}

impl<C> Clone for NamespacedHandler<C> {
    fn clone(&self) -> Self {
        Self {
            event_name: self.event_name.clone(),
            namespaces: self.namespaces.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<C> PartialEq for NamespacedHandler<C> {
    fn eq(&self, other: &Self) -> bool {
        self.event_name == other.event_name
            && self.namespaces == other.namespaces
            && self.handler == other.handler
    }
}

impl<C> std::fmt::Debug for NamespacedHandler<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NamespacedHandler")
            .field("event_name", &self.event_name)
            .field("namespaces", &self.namespaces)
            .field("handler", &self.handler)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Handler<()> {
        Handler::new(|_: &mut (), _: &mut Event, _: &[Value]| Ok(()))
    }

    #[test]
    fn test_handler_identity() {
        let a = noop();
        let b = noop();

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_handler_call() {
        let handler = Handler::new(|ctx: &mut usize, event: &mut Event, data: &[Value]| {
            *ctx += data.len();
            event.cancel();
            Ok(())
        });

        let mut count = 0;
        let mut event = Event::new("x");
        handler
            .call(&mut count, &mut event, &[Value::Null, Value::Bool(true)])
            .unwrap();

        assert_eq!(count, 2);
        assert!(event.is_cancelled());
    }

    #[test]
    fn test_snapshot_on_construction() {
        let binding = NamespacedHandler::new(&Event::new("event.a.b"), noop());
        assert_eq!(binding.event_name(), "event");
        assert_eq!(binding.namespaces(), ["a", "b"]);
    }

    #[test]
    fn test_matches() {
        let binding = NamespacedHandler::new(&Event::new("event.namespace"), noop());

        assert!(binding.matches(&Event::new("event")));
        assert!(binding.matches(&Event::new(".namespace")));
        assert!(binding.matches(&Event::new("event.namespace")));

        assert!(!binding.matches(&Event::new(".nonamespace")));
        assert!(!binding.matches(&Event::new("event.nonamespace")));
        assert!(!binding.matches(&Event::new("event.namespace.namespace2")));
        assert!(!binding.matches(&Event::new("other")));
        assert!(!binding.matches(&Event::new("other.namespace")));
    }

    #[test]
    fn test_matches_is_unordered_subset() {
        let binding = NamespacedHandler::new(&Event::new("click.ui.modal"), noop());

        assert!(binding.matches(&Event::new("click.modal.ui")));
        assert!(binding.matches(&Event::new(".modal")));
        assert!(binding.matches(&Event::new("")));
    }

    #[test]
    fn test_equality() {
        let handler = noop();
        let a = NamespacedHandler::new(&Event::new("e.ns"), handler.clone());
        let b = NamespacedHandler::new(&Event::new("e.ns"), handler);
        let c = NamespacedHandler::new(&Event::new("e.ns"), noop());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
