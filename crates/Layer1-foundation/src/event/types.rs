//! Event Types - 이벤트 디스크립터와 옵션 레코드

use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// sub-event 구분자 (`"a b"` → `"a"`, `"b"`)
pub const SUB_EVENT_SEPARATOR: char = ' ';

/// namespace 구분자 (`"a.ns"` → name `"a"`, namespace `"ns"`)
pub const NAMESPACE_SEPARATOR: char = '.';

// ============================================================================
// EventOptions - 옵션 레코드
// ============================================================================

/// 이벤트 생성 옵션
///
/// 지정하지 않은 필드는 디스크립터 기본값(빈 이름, 모든 플래그 false)을 사용합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default_prevented: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_cancelled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_propagation_stopped: Option<bool>,
}

impl EventOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON 문자열에서 파싱 (`{"eventName": "submit", "isCancelled": true}`)
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 이벤트 이름 설정
    pub fn with_event_name(mut self, name: impl Into<String>) -> Self {
        self.event_name = Some(name.into());
        self
    }

    pub fn default_prevented(mut self) -> Self {
        self.is_default_prevented = Some(true);
        self
    }

    pub fn cancelled(mut self) -> Self {
        self.is_cancelled = Some(true);
        self
    }

    pub fn propagation_stopped(mut self) -> Self {
        self.is_propagation_stopped = Some(true);
        self
    }
}

// ============================================================================
// Event - 이벤트 디스크립터
// ============================================================================

/// 이벤트 디스크립터
///
/// 원본 이름 문자열, 단방향 플래그 3개, trigger 시 저장되는 payload를 가집니다.
/// 플래그는 true로만 바뀌며 dispatcher는 이를 강제하지 않습니다 (핸들러가 협조적으로 확인).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// 원본 이름 (sub-event, namespace 포함)
    #[serde(default)]
    event_name: String,

    #[serde(default)]
    is_default_prevented: bool,

    #[serde(default)]
    is_cancelled: bool,

    #[serde(default)]
    is_propagation_stopped: bool,

    /// trigger 호출 시 저장되는 payload
    #[serde(default)]
    data: Vec<Value>,
}

impl Event {
    /// 이름으로 이벤트 생성
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            event_name: name.into(),
            ..Self::default()
        }
    }

    /// 옵션 레코드로 이벤트 생성
    pub fn from_options(options: EventOptions) -> Self {
        Self {
            event_name: options.event_name.unwrap_or_default(),
            is_default_prevented: options.is_default_prevented.unwrap_or(false),
            is_cancelled: options.is_cancelled.unwrap_or(false),
            is_propagation_stopped: options.is_propagation_stopped.unwrap_or(false),
            data: Vec::new(),
        }
    }

    /// 같은 플래그를 가진 파생 이벤트 (이름만 교체, payload는 비움)
    pub fn with_event_name(&self, name: impl Into<String>) -> Self {
        Self {
            event_name: name.into(),
            is_default_prevented: self.is_default_prevented,
            is_cancelled: self.is_cancelled,
            is_propagation_stopped: self.is_propagation_stopped,
            data: Vec::new(),
        }
    }

    // ========================================================================
    // 플래그
    // ========================================================================

    pub fn prevent_default(&mut self) {
        self.is_default_prevented = true;
    }

    pub fn cancel(&mut self) {
        self.is_cancelled = true;
    }

    pub fn stop_propagation(&mut self) {
        self.is_propagation_stopped = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.is_default_prevented
    }

    pub fn is_cancelled(&self) -> bool {
        self.is_cancelled
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.is_propagation_stopped
    }

    // ========================================================================
    // Payload
    // ========================================================================

    pub fn data(&self) -> &[Value] {
        &self.data
    }

    pub fn set_data(&mut self, data: Vec<Value>) {
        self.data = data;
    }

    // ========================================================================
    // 이름 파싱
    // ========================================================================

    /// 원본 이름 그대로
    pub fn raw_name(&self) -> &str {
        &self.event_name
    }

    /// 공백으로 구분된 여러 이벤트 이름을 가지는지 확인
    pub fn is_multi(&self) -> bool {
        self.event_name.contains(SUB_EVENT_SEPARATOR)
    }

    /// 공백 기준 sub-event 이름들
    ///
    /// 연속된 공백은 빈 이름을 만듭니다 (`"a  b"` → `"a"`, `""`, `"b"`).
    pub fn sub_events(&self) -> impl Iterator<Item = &str> {
        self.event_name.split(SUB_EVENT_SEPARATOR)
    }

    /// 이름 어딘가에 `.`이 있으면 true
    pub fn has_namespaces(&self) -> bool {
        self.event_name.contains(NAMESPACE_SEPARATOR)
    }

    /// 모든 sub-event의 namespace 토큰 (순서 유지, 중복 허용)
    ///
    /// 각 sub-event의 첫 세그먼트는 비어 있더라도 primary name으로 보고 버립니다.
    pub fn namespaces(&self) -> Vec<String> {
        self.sub_events()
            .flat_map(|sub| sub.split(NAMESPACE_SEPARATOR).skip(1))
            .map(str::to_string)
            .collect()
    }

    pub fn has_event_name(&self) -> bool {
        !self.event_name().is_empty()
    }

    /// 첫 sub-event에서 첫 `.` 앞부분
    pub fn event_name(&self) -> &str {
        let first = self.sub_events().next().unwrap_or_default();
        first.split(NAMESPACE_SEPARATOR).next().unwrap_or_default()
    }
}

impl From<&str> for Event {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Event {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<EventOptions> for Event {
    fn from(options: EventOptions) -> Self {
        Self::from_options(options)
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.event_name)
    }
}

// ============================================================================
// 테스트
// ============================================================================
