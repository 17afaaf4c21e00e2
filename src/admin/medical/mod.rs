//! 医疗诊断测试
//!
//! 只有“启动 + 轮询”两步：会话的推进（多轮对话、结束判定）完全由后端完成，
//! 客户端只负责启动测试、读取执行状态以及维护疾病描述。

pub mod api;
pub mod models;
pub mod types;

pub use api::DiagnosisApi;
pub use models::{ConversationTurn, Disease, ExecutionDetail, ExecutionStatus, ExecutionStep, TestExecutionHandle};
pub use types::{StartTestRequest, UpdateDiseaseRequest};
