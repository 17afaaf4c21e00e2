//! 通用资源访问器
//!
//! 每个资源只需声明路径和四种形状（记录、新增参数、更新参数、搜索参数），
//! 由 [`ResourceApi`] 统一实现 list / detail / create / update / delete / batch_delete：
//!
//! | 操作 | 方法 | 路径 |
//! |---|---|---|
//! | list | POST | `{base}/all/` |
//! | detail | GET | `{base}/{id}` |
//! | create | POST | `{base}` |
//! | update | PATCH | `{base}/{id}` |
//! | delete | DELETE | `{base}/{id}` |
//! | batch_delete | DELETE | `{base}` |
//!
//! 列表用 POST 携带搜索体而不是 GET 查询串，与后端约定保持一致。
//! 每次调用恰好发出一个请求，不重试、不缓存、不做客户端校验。

use crate::admin::error::TransportError;
use crate::admin::transport::{ApiRequest, Transport};
use crate::admin::types::{
    to_search_params, BatchDeleteParams, MutationReceipt, PaginatedResult, Paginated, RecordId,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info};

/// 资源声明
pub trait Resource: Send + Sync + 'static {
    /// 日志前缀中的资源名
    const NAME: &'static str;
    /// 资源根路径，例如 `/system-manage/agents`
    const BASE_PATH: &'static str;

    type Record: DeserializeOwned + Send;
    type AddParams: Serialize + Send + Sync;
    type UpdateParams: Serialize + Send + Sync;
    type SearchParams: Serialize + Paginated + Default + Send + Sync;
}

/// 按资源实例化的访问器
pub struct ResourceApi<R: Resource> {
    transport: Arc<dyn Transport>,
    default_page_size: u32,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceApi<R> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            default_page_size: self.default_page_size,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceApi<R> {
    pub fn new(transport: Arc<dyn Transport>, default_page_size: u32) -> Self {
        Self {
            transport,
            default_page_size,
            _resource: PhantomData,
        }
    }

    pub(crate) fn item_path(id: RecordId) -> String {
        format!("{}/{}", R::BASE_PATH, id)
    }

    /// 发出请求并把响应数据解码为目标类型
    pub(crate) async fn call<T: DeserializeOwned>(&self, req: ApiRequest) -> Result<T, TransportError> {
        debug!("[{}API]   {} {}", R::NAME, req.method, req.url);
        let data = self.transport.request(req).await?;
        decode_data(data)
    }

    /// 写操作：data 为空时返回空回执，形状不符时报错
    pub(crate) async fn mutate(&self, req: ApiRequest) -> Result<MutationReceipt, TransportError> {
        debug!("[{}API]   {} {}", R::NAME, req.method, req.url);
        let data = self.transport.request(req).await?;
        MutationReceipt::from_data(data)
    }

    /// 查询列表
    ///
    /// 补齐调用方未给出的 `current`（1）与 `size`（默认每页条数），
    /// 过滤条件原样交给服务端解释。
    pub async fn list(
        &self,
        search: Option<R::SearchParams>,
    ) -> Result<PaginatedResult<R::Record>, TransportError> {
        let mut search = search.unwrap_or_default();
        search.page_mut().fill_defaults(self.default_page_size);
        info!("[{}API] 📡 请求列表，分页: {:?}", R::NAME, search.page());

        let mut req = ApiRequest::post(format!("{}/all/", R::BASE_PATH));
        req.data = Some(to_search_params(&search)?);
        let page: PaginatedResult<R::Record> = self.call(req).await?;

        info!(
            "[{}API] ✅ 列表响应，本页条数: {}, 总数: {}",
            R::NAME,
            page.records.len(),
            page.total
        );
        Ok(page)
    }

    /// 查询详情，ID 不存在时由传输层返回错误
    pub async fn detail(&self, id: RecordId) -> Result<R::Record, TransportError> {
        info!("[{}API] 📡 请求详情，ID: {}", R::NAME, id);
        self.call(ApiRequest::get(Self::item_path(id))).await
    }

    /// 新增记录
    pub async fn create(&self, params: &R::AddParams) -> Result<MutationReceipt, TransportError> {
        info!("[{}API] 📡 新增记录", R::NAME);
        let req = ApiRequest::post(R::BASE_PATH).with_json(params)?;
        let receipt = self.mutate(req).await?;
        info!("[{}API] ✅ 新增完成: {:?}", R::NAME, receipt.created_id);
        Ok(receipt)
    }

    /// 部分更新：缺省字段不动，`null` 字段清空，有值字段覆盖
    ///
    /// 路径上的 `id` 与请求体中的 `id` 不做一致性校验。
    pub async fn update(
        &self,
        id: RecordId,
        params: &R::UpdateParams,
    ) -> Result<MutationReceipt, TransportError> {
        info!("[{}API] 📡 更新记录，ID: {}", R::NAME, id);
        let req = ApiRequest::patch(Self::item_path(id)).with_json(params)?;
        self.mutate(req).await
    }

    /// 删除单条记录
    pub async fn delete(&self, id: RecordId) -> Result<MutationReceipt, TransportError> {
        info!("[{}API] 📡 删除记录，ID: {}", R::NAME, id);
        self.mutate(ApiRequest::delete(Self::item_path(id))).await
    }

    /// 批量删除，整批只有一个成功或失败结果
    pub async fn batch_delete(
        &self,
        params: &BatchDeleteParams,
    ) -> Result<MutationReceipt, TransportError> {
        info!("[{}API] 📡 批量删除，条目数: {}", R::NAME, params.ids.len());
        let req = ApiRequest::delete(R::BASE_PATH).with_json(params)?;
        self.mutate(req).await
    }
}

pub(crate) fn decode_data<T: DeserializeOwned>(data: Value) -> Result<T, TransportError> {
    serde_json::from_value(data).map_err(|e| TransportError::Serialization(format!("反序列化响应失败: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::agent::{AgentAddParams, AgentResource, AgentSearchParams, AgentType, AgentUpdateParams};
    use crate::admin::mock::{init_test_logger, FakeBackend, MockTransport};
    use crate::admin::patch::Patch;
    use crate::admin::transport::HttpMethod;
    use crate::admin::types::{PageQuery, StatusType};
    use serde_json::json;

    fn agents(transport: Arc<dyn Transport>) -> ResourceApi<AgentResource> {
        ResourceApi::new(transport, 10)
    }

    fn triage_bot() -> AgentAddParams {
        AgentAddParams {
            name: "triage-bot".to_string(),
            agent_type: AgentType::Function,
            description: None,
            version: Some("1.0".to_string()),
            config: None,
            status_type: Some(StatusType::Enabled),
        }
    }

    #[tokio::test]
    async fn endpoints_follow_the_crud_convention() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"records": [], "total": 0, "current": 1, "size": 10}));
        mock.push_ok(json!({"id": 42, "name": "a", "agentType": "business", "version": "1"}));
        for _ in 0..4 {
            mock.push_ok(json!(null));
        }
        let api = agents(mock.clone());

        api.list(None).await.unwrap();
        api.detail(42).await.unwrap();
        api.create(&triage_bot()).await.unwrap();
        api.update(42, &AgentUpdateParams::default()).await.unwrap();
        api.delete(42).await.unwrap();
        api.batch_delete(&BatchDeleteParams::from_ids([1, 2])).await.unwrap();

        let seen: Vec<(HttpMethod, String)> = mock
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url))
            .collect();
        assert_eq!(
            seen,
            vec![
                (HttpMethod::Post, "/system-manage/agents/all/".to_string()),
                (HttpMethod::Get, "/system-manage/agents/42".to_string()),
                (HttpMethod::Post, "/system-manage/agents".to_string()),
                (HttpMethod::Patch, "/system-manage/agents/42".to_string()),
                (HttpMethod::Delete, "/system-manage/agents/42".to_string()),
                (HttpMethod::Delete, "/system-manage/agents".to_string()),
            ]
        );
        assert_eq!(mock.requests()[5].data, Some(json!({"ids": ["1", "2"]})));
        assert_eq!(mock.requests()[3].data, Some(json!({})));
    }

    #[tokio::test]
    async fn list_merges_page_defaults_without_overriding_caller() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"records": [], "total": 0, "current": 1, "size": 10}));
        mock.push_ok(json!({"records": [], "total": 0, "current": 3, "size": 5}));
        let api = agents(mock.clone());

        api.list(None).await.unwrap();
        api.list(Some(AgentSearchParams {
            name: Some("bot".to_string()),
            page: PageQuery::new(3, 5),
            ..Default::default()
        }))
        .await
        .unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].data, Some(json!({"current": 1, "size": 10})));
        assert_eq!(
            requests[1].data,
            Some(json!({"name": "bot", "current": 3, "size": 5}))
        );
    }

    #[tokio::test]
    async fn transport_errors_propagate_unchanged() {
        let mock = Arc::new(MockTransport::new());
        let failure = TransportError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        mock.push_err(failure.clone());
        let api = agents(mock.clone());

        assert_eq!(api.detail(1).await.unwrap_err(), failure);
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn shape_mismatch_is_a_serialization_error() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"unexpected": true}));
        let err = agents(mock).detail(1).await.unwrap_err();
        assert!(matches!(err, TransportError::Serialization(_)));
    }

    #[tokio::test]
    async fn unrecognised_mutation_body_is_not_a_success() {
        let mock = Arc::new(MockTransport::new());
        mock.push_ok(json!({"detail": "whatever", "unexpected": 1}));
        mock.push_ok(json!({"code": 4090, "msg": "Agent名称已存在"}));
        let api = agents(mock.clone());

        let err = api.delete(1).await.unwrap_err();
        assert!(matches!(err, TransportError::Serialization(_)));
        let err = api.create(&triage_bot()).await.unwrap_err();
        assert!(matches!(err, TransportError::Serialization(_)));
        assert_eq!(mock.requests().len(), 2);
    }

    #[tokio::test]
    async fn empty_batch_delete_is_still_one_call_and_a_noop() {
        let backend = Arc::new(FakeBackend::new());
        let api = agents(backend.clone());
        api.create(&triage_bot()).await.unwrap();

        let receipt = api.batch_delete(&BatchDeleteParams::default()).await.unwrap();
        assert_eq!(receipt.deleted_ids, Some(vec![]));
        assert_eq!(api.list(None).await.unwrap().total, 1);
        assert_eq!(backend.calls(), 3);
    }

    #[tokio::test]
    async fn create_then_list_and_detail() {
        init_test_logger();
        let backend = Arc::new(FakeBackend::with_next_id(42));
        let api = agents(backend);

        let receipt = api.create(&triage_bot()).await.unwrap();
        assert_eq!(receipt.created_id, Some(42));

        let page = api.list(None).await.unwrap();
        assert!(page.records.iter().any(|a| a.name == "triage-bot"));

        let agent = api.detail(42).await.unwrap();
        assert_eq!(agent.id, 42);
        assert_eq!(agent.name, "triage-bot");
        assert_eq!(agent.agent_type, AgentType::Function);
        assert_eq!(agent.description, None);
        assert_eq!(agent.status_type, Some(StatusType::Enabled));
    }

    #[tokio::test]
    async fn update_obeys_three_state_law() {
        let backend = Arc::new(FakeBackend::with_next_id(42));
        let api = agents(backend);
        let mut add = triage_bot();
        add.config = Some(json!({"temperature": 0.2}));
        api.create(&add).await.unwrap();
        let before = api.detail(42).await.unwrap();

        api.update(
            42,
            &AgentUpdateParams {
                description: Patch::Value("updated".to_string()),
                config: Patch::Null,
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let after = api.detail(42).await.unwrap();
        assert_eq!(after.description.as_deref(), Some("updated"));
        assert_eq!(after.config, None);
        assert_eq!(after.name, before.name);
        assert_eq!(after.version, before.version);
        assert_eq!(after.status_type, before.status_type);
        assert!(after.audit_times_consistent());
    }

    #[tokio::test]
    async fn page_never_exceeds_requested_size() {
        let backend = Arc::new(FakeBackend::new());
        let api = agents(backend);
        for i in 0..7 {
            let mut add = triage_bot();
            add.name = format!("bot-{}", i);
            api.create(&add).await.unwrap();
        }

        for (current, size) in [(1, 3), (2, 3), (3, 3), (1, 10), (4, 2)] {
            let page = api
                .list(Some(AgentSearchParams {
                    page: PageQuery::new(current, size),
                    ..Default::default()
                }))
                .await
                .unwrap();
            assert!(page.records.len() <= size as usize);
            assert_eq!(page.total, 7);
        }
    }

    #[tokio::test]
    async fn delete_then_detail_is_not_found() {
        let backend = Arc::new(FakeBackend::with_next_id(42));
        let api = agents(backend);
        api.create(&triage_bot()).await.unwrap();

        let receipt = api.delete(42).await.unwrap();
        assert_eq!(receipt.deleted_id, Some(42));
        assert!(api.detail(42).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn concurrent_calls_do_not_interfere() {
        let backend = Arc::new(FakeBackend::new());
        let api = agents(backend.clone());
        let mut handles = Vec::new();
        for i in 0..8 {
            let api = api.clone();
            handles.push(tokio::spawn(async move {
                let mut add = triage_bot();
                add.name = format!("bot-{}", i);
                api.create(&add).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        assert_eq!(api.list(None).await.unwrap().total, 8);
        assert_eq!(backend.calls(), 9);
    }
}
