//! Agent 请求参数

use crate::admin::agent::models::AgentType;
use crate::admin::patch::Patch;
use crate::admin::types::{PageQuery, Paginated, RecordId, StatusType};
use serde::{Deserialize, Serialize};

/// 新增 Agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAddParams {
    pub name: String,
    pub agent_type: AgentType,
    pub description: Option<String>,
    /// 缺省时由服务端填默认版本号
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub config: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<StatusType>,
}

/// 更新 Agent（三态字段）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentUpdateParams {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub id: Patch<RecordId>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub agent_type: Patch<AgentType>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub version: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub config: Patch<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub status_type: Patch<StatusType>,
}

/// 搜索 Agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSearchParams {
    /// 名称模糊匹配
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_type: Option<AgentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<StatusType>,
    #[serde(flatten)]
    pub page: PageQuery,
}

impl Paginated for AgentSearchParams {
    fn page(&self) -> &PageQuery {
        &self.page
    }

    fn page_mut(&mut self) -> &mut PageQuery {
        &mut self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_params_keep_nullable_fields_explicit() {
        let params = AgentAddParams {
            name: "triage-bot".to_string(),
            agent_type: AgentType::Function,
            description: None,
            version: Some("1.0".to_string()),
            config: None,
            status_type: Some(StatusType::Enabled),
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "name": "triage-bot",
                "agentType": "function",
                "description": null,
                "version": "1.0",
                "config": null,
                "statusType": "1"
            })
        );
    }

    #[test]
    fn update_params_only_carry_touched_fields() {
        let params = AgentUpdateParams {
            description: Patch::Value("updated".to_string()),
            config: Patch::Null,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"description": "updated", "config": null})
        );
    }
}
