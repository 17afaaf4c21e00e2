//! 角色管理
//!
//! 除通用增删改查外，角色还维护菜单、按钮、接口三类授权。授权以完整 ID 集合整体替换，
//! 不存在增量授予。

pub mod api;
pub mod models;
pub mod types;

pub use models::{Role, RoleFields};
pub use types::{
    RoleAddParams, RoleApiAuthorization, RoleButtonAuthorization, RoleMenuAuthorization,
    RoleSearchParams, RoleUpdateParams,
};

use crate::admin::resource::{Resource, ResourceApi};

pub struct RoleResource;

impl Resource for RoleResource {
    const NAME: &'static str = "Role";
    const BASE_PATH: &'static str = "/system-manage/roles";

    type Record = Role;
    type AddParams = RoleAddParams;
    type UpdateParams = RoleUpdateParams;
    type SearchParams = RoleSearchParams;
}

pub type RoleApi = ResourceApi<RoleResource>;
