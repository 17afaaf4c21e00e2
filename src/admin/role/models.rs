use crate::admin::types::{CommonRecord, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleFields {
    pub role_name: String,
    pub role_code: String,
    #[serde(default)]
    pub role_desc: String,
    /// 角色首页菜单
    #[serde(default)]
    pub by_role_home_id: Option<RecordId>,
}

pub type Role = CommonRecord<RoleFields>;
