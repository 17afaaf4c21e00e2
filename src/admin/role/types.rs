use crate::admin::patch::Patch;
use crate::admin::types::{deserialize_vec_or_null, PageQuery, Paginated, RecordId, StatusType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAddParams {
    pub role_name: String,
    pub role_code: String,
    pub role_desc: String,
    pub by_role_home_id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<StatusType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdateParams {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub id: Patch<RecordId>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub role_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub role_code: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub role_desc: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub by_role_home_id: Patch<RecordId>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub status_type: Patch<StatusType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<StatusType>,
    #[serde(flatten)]
    pub page: PageQuery,
}

impl Paginated for RoleSearchParams {
    fn page(&self) -> &PageQuery {
        &self.page
    }

    fn page_mut(&mut self) -> &mut PageQuery {
        &mut self.page
    }
}

/// 角色菜单授权（首页 + 菜单集合）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMenuAuthorization {
    #[serde(default)]
    pub by_role_home_id: Option<RecordId>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub by_role_menu_ids: Vec<RecordId>,
}

/// 角色按钮授权
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleButtonAuthorization {
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub by_role_button_ids: Vec<RecordId>,
}

/// 角色接口授权
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleApiAuthorization {
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub by_role_api_ids: Vec<RecordId>,
}
