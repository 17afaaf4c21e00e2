//! 日志查询
//!
//! 日志通过 `byUser` / `byUserInfo` 冗余关联用户。

pub mod models;
pub mod types;

pub use models::{Log, LogFields, LogType};
pub use types::{LogAddParams, LogSearchParams, LogUpdateParams};

use crate::admin::resource::{Resource, ResourceApi};

pub struct LogResource;

impl Resource for LogResource {
    const NAME: &'static str = "Log";
    const BASE_PATH: &'static str = "/system-manage/logs";

    type Record = Log;
    type AddParams = LogAddParams;
    type UpdateParams = LogUpdateParams;
    type SearchParams = LogSearchParams;
}

pub type LogApi = ResourceApi<LogResource>;
