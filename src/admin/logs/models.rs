use crate::admin::types::CommonRecord;
use crate::admin::user::User;
use serde::{Deserialize, Serialize};

/// 日志类型
///
/// - "1": 接口日志
/// - "2": 用户日志
/// - "3": 管理日志
/// - "4": 系统日志
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogType {
    #[serde(rename = "1")]
    ApiLog,
    #[serde(rename = "2")]
    UserLog,
    #[serde(rename = "3")]
    AdminLog,
    #[serde(rename = "4")]
    SystemLog,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFields {
    pub log_type: LogType,
    /// 明细类型编码（如 "1701"），取值集合随后端增长，按字符串保留
    #[serde(default)]
    pub log_detail_type: Option<String>,
    #[serde(default)]
    pub request_domain: String,
    #[serde(default)]
    pub request_path: String,
    #[serde(default)]
    pub response_code: String,
    #[serde(default)]
    pub x_request_id: String,
    #[serde(default)]
    pub request_params: String,
    #[serde(default)]
    pub response_data: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default)]
    pub process_time: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub by_user: String,
    #[serde(default)]
    pub by_user_info: Option<User>,
}

pub type Log = CommonRecord<LogFields>;
