//! 管理后台客户端入口
//!
//! [`AdminClient`] 持有共享的传输协作方，按资源分发访问器。访问器本身无状态，
//! 可以随意克隆并在多个任务中并发使用。

use crate::admin::agent::AgentApi;
use crate::admin::apis::ApiEndpointApi;
use crate::admin::logs::LogApi;
use crate::admin::medical::DiagnosisApi;
use crate::admin::menu::MenuApi;
use crate::admin::resource::ResourceApi;
use crate::admin::role::RoleApi;
use crate::admin::transport::{HttpTransport, Transport};
use crate::admin::user::UserApi;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// 默认每页条数（与后端搜索参数的默认值一致）
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// 诊断测试启动请求的超时：后端跑完整场多轮对话才返回
pub const DEFAULT_RUN_TIMEOUT: Duration = Duration::from_secs(600);

/// 后端成功业务码
pub const DEFAULT_SUCCESS_CODE: &str = "0000";

/// 客户端配置
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// HTTP API 基础地址，例如 `http://localhost:9999/api/v1`
    pub api_base_url: String,
    /// 认证 token（以 Bearer 方式发送），为空时不带鉴权头
    pub token: Option<String>,
    /// 单次请求超时（普通接口）
    ///
    /// 诊断测试启动接口会同步等待整场测试结束，单独使用 `run_timeout`
    pub timeout: Duration,
    /// 诊断测试启动请求的超时
    pub run_timeout: Duration,
    /// 分页列表未指定 size 时使用的每页条数
    pub default_page_size: u32,
    /// 响应信封中表示成功的 code
    pub success_code: String,
}

impl ClientConfig {
    /// 创建默认配置
    pub fn new(api_base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            token,
            timeout: Duration::from_secs(30),
            run_timeout: DEFAULT_RUN_TIMEOUT,
            default_page_size: DEFAULT_PAGE_SIZE,
            success_code: DEFAULT_SUCCESS_CODE.to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:9999/api/v1", None)
    }
}

/// 管理后台客户端
#[derive(Clone)]
pub struct AdminClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl AdminClient {
    /// 使用默认的 HTTP 传输创建客户端
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        info!("[Client] 创建管理后台客户端，API地址: {}", config.api_base_url);
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// 注入自定义传输（测试替身、带拦截器的实现等）
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn resource<R: crate::admin::resource::Resource>(&self) -> ResourceApi<R> {
        ResourceApi::new(self.transport.clone(), self.config.default_page_size)
    }

    pub fn agents(&self) -> AgentApi {
        self.resource()
    }

    pub fn users(&self) -> UserApi {
        self.resource()
    }

    pub fn roles(&self) -> RoleApi {
        self.resource()
    }

    pub fn apis(&self) -> ApiEndpointApi {
        self.resource()
    }

    pub fn logs(&self) -> LogApi {
        self.resource()
    }

    pub fn menus(&self) -> MenuApi {
        self.resource()
    }

    pub fn diagnosis(&self) -> DiagnosisApi {
        DiagnosisApi::new(self.transport.clone()).with_run_timeout(self.config.run_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::mock::MockTransport;
    use crate::admin::transport::HttpMethod;
    use serde_json::json;

    #[test]
    fn default_config_matches_backend_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.success_code, "0000");
        assert!(config.token.is_none());
        assert!(config.run_timeout > config.timeout);
    }

    #[test]
    fn http_transport_builds_with_token() {
        let config = ClientConfig::new("http://localhost:9999/api/v1/", Some("abc".to_string()));
        assert!(AdminClient::new(config).is_ok());
    }

    #[tokio::test]
    async fn accessors_share_the_injected_transport() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"records": [], "total": 0, "current": 1, "size": 10}));
        mock.push_ok(json!([]));

        let client = AdminClient::with_transport(ClientConfig::default(), mock.clone());
        client.users().list(None).await.unwrap();
        client.diagnosis().get_diseases().await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].url, "/system-manage/users/all/");
        assert_eq!(requests[1].url, "/medical/diagnosis/diseases");
    }

    #[tokio::test]
    async fn diagnosis_start_uses_the_run_timeout() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"execution_id": "exec-1", "disease_name": "d", "status": "running"}));
        mock.push_ok(json!([]));

        let mut config = ClientConfig::default();
        config.run_timeout = Duration::from_secs(900);
        let client = AdminClient::with_transport(config, mock.clone());
        client
            .diagnosis()
            .start_test(&crate::admin::medical::StartTestRequest::new(7))
            .await
            .unwrap();
        client.diagnosis().get_diseases().await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].timeout, Some(Duration::from_secs(900)));
        assert_eq!(requests[1].timeout, None);
    }
}
