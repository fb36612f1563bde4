use std::fmt;

use serde::Deserialize;
use serde_json::Value;

// =========================================================
// 错误状态枚举
// =========================================================

/// 请求失败的语义分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorStatus {
    /// 请求未到达服务端（断网、CORS、DNS 等）
    Network,
    /// 响应体无法解析为期望的类型
    Decode,
    /// 400: 业务校验失败 / 资源冲突
    BadRequest,
    /// 401 / 403: 未登录或 token 失效
    Unauthorized,
    /// 404: 资源未找到
    NotFound,
    /// 422: 服务端 schema 校验失败
    Validation,
    /// 5xx
    Server,
    /// 其他非 2xx 状态码
    Unexpected(u16),
}

impl ApiErrorStatus {
    pub fn from_status_code(code: u16) -> Self {
        match code {
            400 | 409 => ApiErrorStatus::BadRequest,
            401 | 403 => ApiErrorStatus::Unauthorized,
            404 => ApiErrorStatus::NotFound,
            422 => ApiErrorStatus::Validation,
            500..=599 => ApiErrorStatus::Server,
            other => ApiErrorStatus::Unexpected(other),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiErrorStatus::Network => "NETWORK_ERROR",
            ApiErrorStatus::Decode => "DECODE_ERROR",
            ApiErrorStatus::BadRequest => "BAD_REQUEST",
            ApiErrorStatus::Unauthorized => "UNAUTHORIZED",
            ApiErrorStatus::NotFound => "RESOURCE_NOT_FOUND",
            ApiErrorStatus::Validation => "VALIDATION_ERROR",
            ApiErrorStatus::Server => "SERVER_ERROR",
            ApiErrorStatus::Unexpected(_) => "UNEXPECTED_STATUS",
        }
    }
}

// =========================================================
// 核心错误类型
// =========================================================

/// 前端请求错误
///
/// - status: 错误语义
/// - message: 面向开发者的描述（写入控制台）
/// - detail: 服务端返回的可展示消息（如果能提取到）
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: ApiErrorStatus,
    pub message: String,
    detail: Option<String>,
}

impl ApiError {
    pub fn new(status: ApiErrorStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            detail: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorStatus::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorStatus::Decode, message)
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// 根据非 2xx 响应构造错误，尽量从响应体中提取服务端消息
    pub fn from_response(code: u16, body: &str) -> Self {
        let status = ApiErrorStatus::from_status_code(code);
        let error = Self::new(status, format!("HTTP {}", code));
        match extract_detail(body) {
            Some(detail) => error.with_detail(detail),
            None => error,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// 面向用户的提示：优先使用服务端消息，否则使用调用方给出的兜底文案
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status.error_code(), self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

// =========================================================
// 服务端错误体解析
// =========================================================

#[derive(Deserialize)]
struct ErrorBody {
    detail: Value,
}

/// 提取 FastAPI 风格的 `detail` 字段
///
/// 支持 `{"detail": "..."}` 与 `{"detail": [{"msg": "..."}]}` 两种形式。
pub fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Array(entries) => entries
            .iter()
            .filter_map(|e| e.get("msg").and_then(Value::as_str))
            .next()
            .map(str::to_string),
        _ => None,
    }
}
