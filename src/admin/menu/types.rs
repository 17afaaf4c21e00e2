use crate::admin::menu::models::{IconType, MenuButton, MenuQuery, MenuType};
use crate::admin::patch::Patch;
use crate::admin::types::{PageQuery, Paginated, RecordId, StatusType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuAddParams {
    pub menu_type: MenuType,
    pub menu_name: String,
    pub route_name: String,
    pub route_path: String,
    pub component: Option<String>,
    pub order: Option<i32>,
    pub i18n_key: Option<String>,
    pub icon: String,
    pub icon_type: IconType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<StatusType>,
    pub parent_id: RecordId,
    pub keep_alive: Option<bool>,
    pub constant: Option<bool>,
    pub href: Option<String>,
    pub hide_in_menu: Option<bool>,
    pub active_menu: Option<String>,
    pub multi_tab: Option<bool>,
    pub fixed_index_in_tab: Option<i32>,
    pub query: Vec<MenuQuery>,
    pub buttons: Vec<MenuButton>,
    /// 布局组件名，如 "base"
    pub layout: String,
    /// 页面组件名
    pub page: String,
    /// 路径参数
    pub path_param: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuUpdateParams {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub id: Patch<RecordId>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub menu_type: Patch<MenuType>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub menu_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub route_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub route_path: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub component: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub order: Patch<i32>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub i18n_key: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub icon: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub icon_type: Patch<IconType>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub status_type: Patch<StatusType>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub parent_id: Patch<RecordId>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub keep_alive: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub constant: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub href: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub hide_in_menu: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub active_menu: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub multi_tab: Patch<bool>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub fixed_index_in_tab: Patch<i32>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub query: Patch<Vec<MenuQuery>>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub buttons: Patch<Vec<MenuButton>>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub layout: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub page: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub path_param: Patch<String>,
}

/// 菜单搜索参数：后端返回全量树，只保留分页游标以满足通用约定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<StatusType>,
    #[serde(flatten)]
    pub page: PageQuery,
}

impl Paginated for MenuSearchParams {
    fn page(&self) -> &PageQuery {
        &self.page
    }

    fn page_mut(&mut self) -> &mut PageQuery {
        &mut self.page
    }
}
