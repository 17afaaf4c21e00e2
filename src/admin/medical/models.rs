//! 诊断测试的响应结构（字段名与后端 snake_case 保持一致）

use crate::admin::types::{deserialize_vec_or_null, RecordId};
use serde::{Deserialize, Serialize};

/// 执行状态，步骤状态取值相同
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Pending,
    Running,
    Success,
    Failed,
    Error,
}

impl ExecutionStatus {
    /// 是否已到终态，调用方据此停止轮询
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ExecutionStatus::Success | ExecutionStatus::Failed | ExecutionStatus::Error
        )
    }
}

/// 可选的测试疾病
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub symptoms_count: u32,
}

/// 启动测试后返回的会话句柄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestExecutionHandle {
    pub execution_id: String,
    pub disease_name: String,
    pub status: ExecutionStatus,
}

/// 执行步骤
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionStep {
    pub step_name: String,
    pub step_order: i32,
    pub status: ExecutionStatus,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub output_data: Option<serde_json::Value>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// 医患对话中的一条消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub round: i32,
    /// doctor / patient
    pub role: String,
    pub message: String,
    pub timestamp: String,
}

/// 执行详情（当前或终态）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionDetail {
    pub execution_id: String,
    /// 部分后端版本不返回疾病 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease_id: Option<RecordId>,
    pub disease_name: String,
    pub status: ExecutionStatus,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub steps: Vec<ExecutionStep>,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub conversations: Vec<ConversationTurn>,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
}

impl ExecutionDetail {
    pub fn is_finished(&self) -> bool {
        self.status.is_terminal()
    }

    /// 最后一轮对话的轮次
    pub fn rounds(&self) -> i32 {
        self.conversations.iter().map(|c| c.round).max().unwrap_or(0)
    }
}
