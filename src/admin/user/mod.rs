//! 用户管理

pub mod models;
pub mod types;

pub use models::{User, UserFields, UserGender};
pub use types::{UserAddParams, UserSearchParams, UserUpdateParams};

use crate::admin::resource::{Resource, ResourceApi};

/// 用户资源声明
pub struct UserResource;

impl Resource for UserResource {
    const NAME: &'static str = "User";
    const BASE_PATH: &'static str = "/system-manage/users";

    type Record = User;
    type AddParams = UserAddParams;
    type UpdateParams = UserUpdateParams;
    type SearchParams = UserSearchParams;
}

pub type UserApi = ResourceApi<UserResource>;
