use crate::admin::logs::models::LogType;
use crate::admin::patch::Patch;
use crate::admin::types::{PageQuery, Paginated, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogAddParams {
    pub log_type: LogType,
    pub log_detail_type: Option<String>,
    pub create_time: i64,
    pub by_user: String,
    pub request_domain: String,
    pub request_path: String,
    pub response_code: String,
    pub x_request_id: String,
    pub request_params: String,
    pub response_data: String,
    pub user_agent: String,
    pub process_time: String,
    pub ip_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogUpdateParams {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub id: Patch<RecordId>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub log_type: Patch<LogType>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub log_detail_type: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub create_time: Patch<i64>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub by_user: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub request_domain: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub request_path: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub response_code: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub x_request_id: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub request_params: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub response_data: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub user_agent: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub process_time: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub ip_address: Patch<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_type: Option<LogType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_detail_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_request_id: Option<String>,
    /// 创建时间区间 [开始, 结束]（毫秒时间戳）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_range: Option<(i64, i64)>,
    #[serde(flatten)]
    pub page: PageQuery,
}

impl Paginated for LogSearchParams {
    fn page(&self) -> &PageQuery {
        &self.page
    }

    fn page_mut(&mut self) -> &mut PageQuery {
        &mut self.page
    }
}
