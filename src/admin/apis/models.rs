use crate::admin::transport::HttpMethod;
use crate::admin::types::{deserialize_vec_or_null, CommonRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEndpointFields {
    pub api_path: String,
    pub api_method: HttpMethod,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub tags: Vec<String>,
}

pub type ApiEndpoint = CommonRecord<ApiEndpointFields>;
