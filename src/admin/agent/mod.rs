//! Agent 管理
//!
//! 路径前缀 `/system-manage/agents`，完整的增删改查约定。

pub mod models;
pub mod types;

pub use models::{Agent, AgentFields, AgentType};
pub use types::{AgentAddParams, AgentSearchParams, AgentUpdateParams};

use crate::admin::resource::{Resource, ResourceApi};

/// Agent 资源声明
pub struct AgentResource;

impl Resource for AgentResource {
    const NAME: &'static str = "Agent";
    const BASE_PATH: &'static str = "/system-manage/agents";

    type Record = Agent;
    type AddParams = AgentAddParams;
    type UpdateParams = AgentUpdateParams;
    type SearchParams = AgentSearchParams;
}

/// Agent 访问器
pub type AgentApi = ResourceApi<AgentResource>;
