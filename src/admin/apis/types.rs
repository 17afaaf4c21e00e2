use crate::admin::patch::Patch;
use crate::admin::transport::HttpMethod;
use crate::admin::types::{PageQuery, Paginated, RecordId, StatusType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpointAddParams {
    pub api_path: String,
    pub api_method: HttpMethod,
    pub summary: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<StatusType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpointUpdateParams {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub id: Patch<RecordId>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub api_path: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub api_method: Patch<HttpMethod>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub summary: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub tags: Patch<Vec<String>>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub status_type: Patch<StatusType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpointSearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_method: Option<HttpMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_type: Option<StatusType>,
    #[serde(flatten)]
    pub page: PageQuery,
}

impl Paginated for ApiEndpointSearchParams {
    fn page(&self) -> &PageQuery {
        &self.page
    }

    fn page_mut(&mut self) -> &mut PageQuery {
        &mut self.page
    }
}
