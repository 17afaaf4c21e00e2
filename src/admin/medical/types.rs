use crate::admin::types::RecordId;
use serde::{Deserialize, Serialize};

/// 启动诊断测试
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartTestRequest {
    pub disease_id: RecordId,
    /// 最大对话轮数，缺省时由服务端决定（默认 10）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rounds: Option<u32>,
}

impl StartTestRequest {
    pub fn new(disease_id: RecordId) -> Self {
        Self {
            disease_id,
            max_rounds: None,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }
}

/// 更新疾病描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDiseaseRequest {
    pub description: String,
}
