//! 传输层错误
//!
//! 访问层只有这一种失败：网络、HTTP 状态、业务码或编解码失败都归为 `TransportError`，
//! 访问函数原样向上传递，不做本地恢复。

use thiserror::Error;

/// 传输协作方抛出的错误
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// 请求没有拿到响应（连接失败、超时等）
    #[error("请求失败: {0}")]
    Network(String),

    /// 非 2xx 的 HTTP 状态
    #[error("HTTP 错误 {status}: {message}")]
    Status { status: u16, message: String },

    /// HTTP 成功但业务码不是成功码
    #[error("服务器错误 {code}: {message}")]
    Business { code: String, message: String },

    /// 请求体序列化或响应体反序列化失败
    #[error("序列化失败: {0}")]
    Serialization(String),
}

impl TransportError {
    /// HTTP 状态码（仅 `Status` 变体携带）
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 是否为“资源不存在”类错误
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => TransportError::Status {
                status: status.as_u16(),
                message: e.to_string(),
            },
            None => TransportError::Network(e.to_string()),
        }
    }
}
