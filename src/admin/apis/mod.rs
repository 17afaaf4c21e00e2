//! 接口（API 路由）管理
//!
//! 记录后端暴露的每个路由，供角色授权使用。

pub mod models;
pub mod types;

pub use models::{ApiEndpoint, ApiEndpointFields};
pub use types::{ApiEndpointAddParams, ApiEndpointSearchParams, ApiEndpointUpdateParams};

use crate::admin::error::TransportError;
use crate::admin::resource::{Resource, ResourceApi};
use crate::admin::transport::ApiRequest;
use crate::admin::types::MutationReceipt;
use tracing::info;

pub struct ApiEndpointResource;

impl Resource for ApiEndpointResource {
    const NAME: &'static str = "Api";
    const BASE_PATH: &'static str = "/system-manage/apis";

    type Record = ApiEndpoint;
    type AddParams = ApiEndpointAddParams;
    type UpdateParams = ApiEndpointUpdateParams;
    type SearchParams = ApiEndpointSearchParams;
}

pub type ApiEndpointApi = ResourceApi<ApiEndpointResource>;

impl ResourceApi<ApiEndpointResource> {
    /// 让后端重新扫描路由表并同步接口记录
    pub async fn refresh(&self) -> Result<MutationReceipt, TransportError> {
        info!("[ApiAPI] 📡 刷新接口列表");
        self.mutate(ApiRequest::post(format!("{}/refresh/", ApiEndpointResource::BASE_PATH)))
            .await
    }
}
