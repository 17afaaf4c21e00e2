//! 角色授权接口
//!
//! | 操作 | 方法 | 路径 |
//! |---|---|---|
//! | 菜单授权 | GET / PATCH | `/system-manage/roles/{id}/menus` |
//! | 按钮授权 | GET / PATCH | `/system-manage/roles/{id}/buttons` |
//! | 接口授权 | GET / PATCH | `/system-manage/roles/{id}/apis` |

use crate::admin::error::TransportError;
use crate::admin::resource::ResourceApi;
use crate::admin::role::types::{RoleApiAuthorization, RoleButtonAuthorization, RoleMenuAuthorization};
use crate::admin::role::RoleResource;
use crate::admin::transport::ApiRequest;
use crate::admin::types::{MutationReceipt, RecordId};
use tracing::info;

impl ResourceApi<RoleResource> {
    fn authorization_path(id: RecordId, kind: &str) -> String {
        format!("{}/{}", Self::item_path(id), kind)
    }

    pub async fn menu_authorization(&self, id: RecordId) -> Result<RoleMenuAuthorization, TransportError> {
        info!("[RoleAPI] 📡 查询菜单授权，角色ID: {}", id);
        self.call(ApiRequest::get(Self::authorization_path(id, "menus"))).await
    }

    /// 用给定集合整体替换角色的菜单授权
    pub async fn set_menu_authorization(
        &self,
        id: RecordId,
        authorization: &RoleMenuAuthorization,
    ) -> Result<MutationReceipt, TransportError> {
        info!(
            "[RoleAPI] 📡 替换菜单授权，角色ID: {}, 菜单数: {}",
            id,
            authorization.by_role_menu_ids.len()
        );
        let req = ApiRequest::patch(Self::authorization_path(id, "menus")).with_json(authorization)?;
        self.mutate(req).await
    }

    pub async fn button_authorization(&self, id: RecordId) -> Result<RoleButtonAuthorization, TransportError> {
        info!("[RoleAPI] 📡 查询按钮授权，角色ID: {}", id);
        self.call(ApiRequest::get(Self::authorization_path(id, "buttons"))).await
    }

    pub async fn set_button_authorization(
        &self,
        id: RecordId,
        authorization: &RoleButtonAuthorization,
    ) -> Result<MutationReceipt, TransportError> {
        info!(
            "[RoleAPI] 📡 替换按钮授权，角色ID: {}, 按钮数: {}",
            id,
            authorization.by_role_button_ids.len()
        );
        let req = ApiRequest::patch(Self::authorization_path(id, "buttons")).with_json(authorization)?;
        self.mutate(req).await
    }

    pub async fn api_authorization(&self, id: RecordId) -> Result<RoleApiAuthorization, TransportError> {
        info!("[RoleAPI] 📡 查询接口授权，角色ID: {}", id);
        self.call(ApiRequest::get(Self::authorization_path(id, "apis"))).await
    }

    pub async fn set_api_authorization(
        &self,
        id: RecordId,
        authorization: &RoleApiAuthorization,
    ) -> Result<MutationReceipt, TransportError> {
        info!(
            "[RoleAPI] 📡 替换接口授权，角色ID: {}, 接口数: {}",
            id,
            authorization.by_role_api_ids.len()
        );
        let req = ApiRequest::patch(Self::authorization_path(id, "apis")).with_json(authorization)?;
        self.mutate(req).await
    }
}
