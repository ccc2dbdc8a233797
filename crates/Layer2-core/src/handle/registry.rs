//! Handle Registry - 핸들러 등록/제거/dispatch

use super::types::{Handler, NamespacedHandler};
use hook_foundation::{Event, HandleConfig, Result};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, trace, warn};

// ============================================================================
// Handle
// ============================================================================

/// 핸들러 레지스트리
///
/// `C`는 dispatch 시 모든 핸들러에 첫 인자로 전달되는 호스트 컨텍스트 타입입니다.
///
/// dispatch는 동기적이며 등록 순서대로 호출합니다. `trigger_handlers`는 레지스트리를
/// 불변으로 빌리므로 dispatch 도중 같은 Handle에 등록/제거할 수 없습니다.
pub struct Handle<C> {
    /// 설정
    config: HandleConfig,

    /// plain 이벤트 이름 → 핸들러 목록
    events: HashMap<String, Vec<Handler<C>>>,

    /// namespaced 바인딩 (등록 순서)
    namespaced_handlers: Vec<NamespacedHandler<C>>,

    /// namespaced 등록이 있는 이름 (중복 허용, 존재 여부만 확인)
    namespaced_events: Vec<String>,
}

impl<C> Handle<C> {
    /// 기본 설정으로 생성
    pub fn new() -> Self {
        Self::with_config(HandleConfig::default())
    }

    /// 커스텀 설정으로 생성
    pub fn with_config(config: HandleConfig) -> Self {
        Self {
            events: HashMap::with_capacity(config.initial_capacity),
            namespaced_handlers: Vec::new(),
            namespaced_events: Vec::new(),
            config,
        }
    }

    // ========================================================================
    // 등록
    // ========================================================================

    /// 핸들러 등록
    ///
    /// `"a b"`처럼 공백이 있으면 각 이름에 같은 핸들러를 등록합니다.
    pub fn add_handler(&mut self, event: &Event, handler: Handler<C>) {
        if event.is_multi() {
            for name in event.sub_events() {
                self.add_single(&event.with_event_name(name), handler.clone());
            }
            return;
        }

        self.add_single(event, handler);
    }

    fn add_single(&mut self, event: &Event, handler: Handler<C>) {
        if !event.has_namespaces() {
            debug!(
                handle = %self.config.label,
                event_name = event.event_name(),
                "Registering handler"
            );

            self.events
                .entry(event.event_name().to_string())
                .or_default()
                .push(handler);
            return;
        }

        if event.has_event_name() {
            self.namespaced_events.push(event.event_name().to_string());
        }

        let binding = NamespacedHandler::new(event, handler);
        debug!(
            handle = %self.config.label,
            event_name = binding.event_name(),
            namespaces = ?binding.namespaces(),
            "Registering namespaced handler"
        );
        self.namespaced_handlers.push(binding);
    }

    // ========================================================================
    // 제거
    // ========================================================================

    /// 모든 핸들러 제거
    ///
    /// plain 목록은 비우기만 하고 키는 남깁니다. `namespaced_events`는 그대로 둡니다.
    pub fn remove_all_handlers(&mut self) {
        for handlers in self.events.values_mut() {
            handlers.clear();
        }
        self.namespaced_handlers.clear();

        debug!(handle = %self.config.label, "Removed all handlers");
    }

    /// 이벤트 기준 핸들러 제거
    ///
    /// | 이벤트 | handler | 동작 |
    /// |---|---|---|
    /// | plain | `Some` | 목록에서 해당 핸들러의 첫 번째 항목 제거 |
    /// | plain | `None` | 해당 이름의 목록을 비움 (키 유지) |
    /// | namespaced | `Some` | 해당 핸들러를 가진 모든 바인딩 제거 |
    /// | namespaced | `None` | 이벤트에 매칭되는 모든 바인딩 제거 |
    pub fn remove_handler(&mut self, event: &Event, handler: Option<&Handler<C>>) {
        if event.is_multi() {
            for name in event.sub_events() {
                self.remove_single(&event.with_event_name(name), handler);
            }
            return;
        }

        self.remove_single(event, handler);
    }

    fn remove_single(&mut self, event: &Event, handler: Option<&Handler<C>>) {
        match (event.has_namespaces(), handler) {
            (false, Some(handler)) => {
                let Some(handlers) = self.events.get_mut(event.event_name()) else {
                    return;
                };
                if let Some(pos) = handlers.iter().position(|h| h == handler) {
                    handlers.remove(pos);
                    debug!(
                        handle = %self.config.label,
                        event_name = event.event_name(),
                        "Removed handler"
                    );
                }
            }
            (false, None) => {
                self.events.insert(event.event_name().to_string(), Vec::new());
                debug!(
                    handle = %self.config.label,
                    event_name = event.event_name(),
                    "Cleared handlers"
                );
            }
            (true, Some(handler)) => {
                let before = self.namespaced_handlers.len();
                self.namespaced_handlers.retain(|b| b.handler() != handler);
                debug!(
                    handle = %self.config.label,
                    removed = before - self.namespaced_handlers.len(),
                    "Removed namespaced handler"
                );
            }
            (true, None) => {
                let before = self.namespaced_handlers.len();
                self.namespaced_handlers.retain(|b| !b.matches(event));
                debug!(
                    handle = %self.config.label,
                    event_name = event.event_name(),
                    namespaces = ?event.namespaces(),
                    removed = before - self.namespaced_handlers.len(),
                    "Removed matching namespaced handlers"
                );
            }
        }
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// payload 없이 trigger
    pub fn trigger(&self, context: &mut C, event: &mut Event) -> Result<()> {
        self.trigger_handlers(context, event, Vec::new())
    }

    /// 이벤트 발생
    ///
    /// payload는 이벤트에 저장되고 각 핸들러에 `(context, event, data)`로 전달됩니다.
    /// 핸들러가 에러를 반환하면 남은 핸들러는 호출하지 않고 에러를 그대로 반환합니다.
    /// `is_propagation_stopped`는 핸들러끼리 확인하는 용도이며 여기서 강제하지 않습니다.
    pub fn trigger_handlers(
        &self,
        context: &mut C,
        event: &mut Event,
        data: Vec<Value>,
    ) -> Result<()> {
        if event.is_multi() {
            for name in event.sub_events() {
                let mut sub_event = event.with_event_name(name);
                self.trigger_single(context, &mut sub_event, data.clone())?;
            }
            return Ok(());
        }

        self.trigger_single(context, event, data)
    }

    fn trigger_single(&self, context: &mut C, event: &mut Event, data: Vec<Value>) -> Result<()> {
        event.set_data(data.clone());

        if !event.has_namespaces() {
            if let Some(handlers) = self.events.get(event.event_name()) {
                for handler in handlers {
                    self.invoke(handler, context, event, &data)?;
                }
            }
        }

        if !event.has_event_name() || self.has_namespaced_event(event.event_name()) {
            for binding in &self.namespaced_handlers {
                if binding.matches(event) {
                    self.invoke(binding.handler(), context, event, &data)?;
                }
            }
        }

        Ok(())
    }

    fn invoke(
        &self,
        handler: &Handler<C>,
        context: &mut C,
        event: &mut Event,
        data: &[Value],
    ) -> Result<()> {
        if self.config.debug_mode {
            trace!(
                handle = %self.config.label,
                event_name = event.raw_name(),
                args = data.len(),
                "Delivering event to handler"
            );
        }

        handler.call(context, event, data).map_err(|e| {
            warn!(
                handle = %self.config.label,
                event_name = event.raw_name(),
                error = %e,
                "Handler failed"
            );
            e
        })
    }

    fn has_namespaced_event(&self, name: &str) -> bool {
        self.namespaced_events.iter().any(|n| n == name)
    }

    // ========================================================================
    // 조회
    // ========================================================================

    pub fn config(&self) -> &HandleConfig {
        &self.config
    }

    /// plain 이벤트 맵
    pub fn events(&self) -> &HashMap<String, Vec<Handler<C>>> {
        &self.events
    }

    /// 이름으로 plain 핸들러 목록 조회
    pub fn handlers(&self, name: &str) -> Option<&[Handler<C>]> {
        self.events.get(name).map(Vec::as_slice)
    }

    pub fn namespaced_handlers(&self) -> &[NamespacedHandler<C>] {
        &self.namespaced_handlers
    }

    pub fn namespaced_events(&self) -> &[String] {
        &self.namespaced_events
    }

    /// 등록된 핸들러 수 (plain + namespaced)
    pub fn handler_count(&self) -> usize {
        self.events.values().map(Vec::len).sum::<usize>() + self.namespaced_handlers.len()
    }
}

impl<C> Default for Handle<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for Handle<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handle")
            .field("config", &self.config)
            .field("events", &self.events)
            .field("namespaced_handlers", &self.namespaced_handlers)
            .field("namespaced_events", &self.namespaced_events)
            .finish()
    }
}

// ============================================================================
// 테스트
// ============================================================================
