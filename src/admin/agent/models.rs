//! Agent 记录模型

use crate::admin::types::CommonRecord;
use serde::{Deserialize, Serialize};

/// Agent 类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    /// 业务场景类 Agent
    Business,
    /// 功能类 Agent
    Function,
}

/// Agent 自身字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentFields {
    pub name: String,
    pub agent_type: AgentType,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// 配置结构由后端定义，按不透明 JSON 处理
    #[serde(default)]
    pub config: Option<serde_json::Value>,
}

/// Agent 记录
pub type Agent = CommonRecord<AgentFields>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::types::StatusType;
    use serde_json::json;

    #[test]
    fn agent_reads_backend_dict() {
        let agent: Agent = serde_json::from_value(json!({
            "id": 42,
            "name": "triage-bot",
            "agentType": "function",
            "description": null,
            "statusType": "1",
            "version": "1.0",
            "config": {"prompt": "你是分诊助手", "tools": ["search"]},
            "createTime": 1_730_000_000_000i64,
            "updateTime": 1_730_000_000_000i64
        }))
        .unwrap();

        assert_eq!(agent.id, 42);
        assert_eq!(agent.agent_type, AgentType::Function);
        assert_eq!(agent.status_type, Some(StatusType::Enabled));
        assert_eq!(agent.config.as_ref().unwrap()["tools"][0], "search");
    }
}
