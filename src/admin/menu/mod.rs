//! 菜单管理
//!
//! 菜单是以 `parentId` / `children` 自引用的树。列表接口与其它资源一样分页；
//! 收到的树可以用 [`MenuArena`] 展平成按 ID 索引的节点表。

pub mod models;
pub mod tree;
pub mod types;

pub use models::{IconType, Menu, MenuButton, MenuFields, MenuQuery, MenuType};
pub use tree::{ButtonTree, MenuArena, MenuNode, MenuTree};
pub use types::{MenuAddParams, MenuSearchParams, MenuUpdateParams};

use crate::admin::error::TransportError;
use crate::admin::resource::{Resource, ResourceApi};
use crate::admin::transport::ApiRequest;
use crate::admin::types::PageQuery;
use tracing::{info, warn};

pub struct MenuResource;

impl Resource for MenuResource {
    const NAME: &'static str = "Menu";
    const BASE_PATH: &'static str = "/system-manage/menus";

    type Record = Menu;
    type AddParams = MenuAddParams;
    type UpdateParams = MenuUpdateParams;
    type SearchParams = MenuSearchParams;
}

pub type MenuApi = ResourceApi<MenuResource>;

impl ResourceApi<MenuResource> {
    /// 菜单树（用于角色授权的勾选树）
    pub async fn tree(&self) -> Result<Vec<MenuTree>, TransportError> {
        info!("[MenuAPI] 📡 请求菜单树");
        self.call(ApiRequest::get(format!("{}/tree/", MenuResource::BASE_PATH)))
            .await
    }

    /// 按钮树
    pub async fn button_tree(&self) -> Result<Vec<ButtonTree>, TransportError> {
        info!("[MenuAPI] 📡 请求按钮树");
        self.call(ApiRequest::get(format!("{}/buttons/tree/", MenuResource::BASE_PATH)))
            .await
    }

    /// 所有可作为首页的页面路由名
    pub async fn pages(&self) -> Result<Vec<String>, TransportError> {
        info!("[MenuAPI] 📡 请求页面列表");
        self.call(ApiRequest::get(format!("{}/pages/", MenuResource::BASE_PATH)))
            .await
    }

    /// 逐页拉取全部菜单并展平为节点表
    pub async fn arena(&self) -> Result<MenuArena, TransportError> {
        let mut records: Vec<Menu> = Vec::new();
        let mut current = 1;
        loop {
            let search = MenuSearchParams {
                page: PageQuery {
                    current: Some(current),
                    size: None,
                },
                ..Default::default()
            };
            let page = self.list(Some(search)).await?;
            let total = page.total;
            let fetched = page.records.len();
            records.extend(page.records);

            if records.len() as u64 >= total {
                break;
            }
            // 服务端在 total 之前就给了空页，不再继续翻页
            if fetched == 0 {
                warn!(
                    "[MenuAPI] ⚠️ 菜单总数 {}，实际只取到 {} 条",
                    total,
                    records.len()
                );
                break;
            }
            current += 1;
        }
        info!("[MenuAPI] ✅ 菜单拉取完成，共 {} 条", records.len());
        Ok(MenuArena::from_records(records))
    }
}
