//! 传输协作方
//!
//! 访问层只依赖 [`Transport`] trait；[`HttpTransport`] 是基于 reqwest 的默认实现，
//! 负责鉴权头、请求 ID、超时和后端响应信封的解析。

use crate::admin::client::ClientConfig;
use crate::admin::error::TransportError;
use crate::admin::types::ApiResponse;
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, info};
use uuid::Uuid;

/// HTTP 方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// 一次请求的描述：路径相对于 API 基础地址
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub data: Option<Value>,
    /// 覆盖传输层默认超时（长耗时接口用）
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            data: None,
            timeout: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    pub fn patch(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, url)
    }

    /// 附带 JSON 请求体
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, TransportError> {
        self.data = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// 传输协作方：发出请求并返回解码后的响应数据
///
/// 实现方决定鉴权、请求头和序列化格式；访问层只负责拼装 [`ApiRequest`]。
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, req: ApiRequest) -> Result<Value, TransportError>;
}

/// 基于 reqwest 的 HTTP 传输
pub struct HttpTransport {
    client: reqwest::Client,
    api_base_url: String,
    success_code: String,
}

impl HttpTransport {
    /// 创建 HTTP 传输
    ///
    /// token 通过 default_headers 自动添加到每个请求
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token))
                    .context("无效的 token")?,
            );
        }

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .context("创建 HTTP 客户端失败")?;

        Ok(Self::with_client(
            client,
            config.api_base_url.clone(),
            config.success_code.clone(),
        ))
    }

    /// 使用外部已配置好的 reqwest 客户端
    pub fn with_client(client: reqwest::Client, api_base_url: String, success_code: String) -> Self {
        Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            success_code,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, req: ApiRequest) -> Result<Value, TransportError> {
        let request_id = Uuid::new_v4().to_string();
        let url = format!("{}{}", self.api_base_url, req.url);
        let operation = format!("{} {}", req.method, req.url);

        debug!("[HTTP] 📡 {} {}", req.method, url);
        debug!("[HTTP]   X-Request-ID: {}", request_id);

        let mut builder = self
            .client
            .request(req.method.into(), &url)
            .header("X-Request-ID", &request_id);
        if let Some(data) = &req.data {
            builder = builder.json(data);
        }
        if let Some(timeout) = req.timeout {
            debug!("[HTTP]   超时: {:?}", timeout);
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            error!("[HTTP] {} 请求失败: {}", operation, e);
            TransportError::from(e)
        })?;

        let status = response.status().as_u16();
        // 读取 body bytes（只能读取一次）
        let body_bytes = response.bytes().await.map_err(|e| {
            error!("[HTTP] {} 读取响应 body 失败: {}", operation, e);
            TransportError::Network(format!("读取响应 body 失败: {}", e))
        })?;

        decode_http_body(status, &body_bytes, &self.success_code, &operation)
    }
}

/// 把 HTTP 状态和响应体解析为响应数据
///
/// - 非 2xx：`Status` 错误，消息优先取 FastAPI 的 `detail` 字段
/// - `{code, msg, data}` 信封：业务码不等于成功码时返回 `Business` 错误，否则返回 `data`
/// - 其它 JSON（直接返回 response_model 的接口）：原样返回
/// - 空 body：`null`
pub fn decode_http_body(
    status: u16,
    body_bytes: &[u8],
    success_code: &str,
    operation: &str,
) -> Result<Value, TransportError> {
    let body_str = String::from_utf8_lossy(body_bytes);
    info!("[HTTP] {} 响应 Body: {}", operation, body_str);

    if !(200..300).contains(&status) {
        error!(
            "[HTTP] {} 请求失败，HTTP状态: {}, 响应: {}",
            operation, status, body_str
        );
        let message = serde_json::from_slice::<Value>(body_bytes)
            .ok()
            .and_then(|v| v.get("detail").map(detail_to_message))
            .unwrap_or_else(|| body_str.to_string());
        return Err(TransportError::Status { status, message });
    }
    debug!("[HTTP] {} 请求成功，HTTP状态: {}", operation, status);

    if body_bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    let body: Value = serde_json::from_slice(body_bytes).map_err(|e| {
        error!(
            "[HTTP] {} 反序列化失败: {:?}\n原始响应: {}",
            operation, e, body_str
        );
        TransportError::Serialization(format!("反序列化响应失败: {}", e))
    })?;

    if !is_envelope(&body) {
        return Ok(body);
    }

    let api_resp: ApiResponse<Value> = serde_json::from_value(body)?;
    if api_resp.code != success_code {
        let message = api_resp.msg.unwrap_or_default();
        error!(
            "[HTTP] {} 服务器错误，错误码: {}, 错误信息: {}",
            operation, api_resp.code, message
        );
        return Err(TransportError::Business {
            code: api_resp.code,
            message,
        });
    }

    Ok(api_resp.data.unwrap_or(Value::Null))
}

/// 后端统一信封：code 为字符串或数字，且带 msg 或 data
fn is_envelope(body: &Value) -> bool {
    body.as_object().is_some_and(|obj| {
        obj.get("code")
            .is_some_and(|code| code.is_string() || code.is_number())
            && (obj.contains_key("msg") || obj.contains_key("data"))
    })
}

fn detail_to_message(detail: &Value) -> String {
    match detail {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
