use crate::admin::types::{CommonRecord, RecordId};
use serde::{Deserialize, Serialize};

/// 菜单类型
///
/// - "1": 目录
/// - "2": 菜单
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuType {
    #[serde(rename = "1")]
    Directory,
    #[serde(rename = "2")]
    Menu,
}

/// 图标类型
///
/// - "1": iconify 图标
/// - "2": 本地图标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconType {
    #[serde(rename = "1")]
    Iconify,
    #[serde(rename = "2")]
    Local,
}

/// 菜单上的按钮，按钮编码用于按钮级权限控制
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuButton {
    pub button_code: String,
    #[serde(default)]
    pub button_desc: String,
}

/// 路由 query 参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuQuery {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuFields {
    /// 顶层菜单为 0
    #[serde(default)]
    pub parent_id: RecordId,
    pub menu_type: MenuType,
    pub menu_name: String,
    pub route_name: String,
    pub route_path: String,
    #[serde(default)]
    pub component: Option<String>,
    #[serde(default)]
    pub icon: String,
    pub icon_type: IconType,
    #[serde(default)]
    pub buttons: Option<Vec<MenuButton>>,
    #[serde(default)]
    pub children: Option<Vec<Menu>>,

    #[serde(default)]
    pub i18n_key: Option<String>,
    #[serde(default)]
    pub keep_alive: Option<bool>,
    #[serde(default)]
    pub constant: Option<bool>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub hide_in_menu: Option<bool>,
    #[serde(default)]
    pub active_menu: Option<String>,
    #[serde(default)]
    pub multi_tab: Option<bool>,
    #[serde(default)]
    pub fixed_index_in_tab: Option<i32>,
    #[serde(default)]
    pub query: Option<Vec<MenuQuery>>,
}

pub type Menu = CommonRecord<MenuFields>;
