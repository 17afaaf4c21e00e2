use crate::admin::patch::Patch;
use crate::admin::types::{PageQuery, Paginated, RecordId, StatusType};
use crate::admin::user::models::UserGender;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAddParams {
    pub user_name: String,
    pub password: String,
    pub user_gender: Option<UserGender>,
    pub nick_name: String,
    pub user_phone: String,
    pub user_email: String,
    pub by_user_role_code_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<StatusType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateParams {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub id: Patch<RecordId>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub user_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub password: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub user_gender: Patch<UserGender>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub nick_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub user_phone: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub user_email: Patch<String>,
    /// 整体替换角色编码集合
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub by_user_role_code_list: Patch<Vec<String>>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub status_type: Patch<StatusType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_gender: Option<UserGender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<StatusType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_user_role_code_list: Option<Vec<String>>,
    #[serde(flatten)]
    pub page: PageQuery,
}

impl Paginated for UserSearchParams {
    fn page(&self) -> &PageQuery {
        &self.page
    }

    fn page_mut(&mut self) -> &mut PageQuery {
        &mut self.page
    }
}
