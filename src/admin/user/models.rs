use crate::admin::types::{deserialize_vec_or_null, CommonRecord};
use serde::{Deserialize, Serialize};

/// 用户性别
///
/// - "1": 男
/// - "2": 女
/// - "3": 未知
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserGender {
    #[serde(rename = "1")]
    Male,
    #[serde(rename = "2")]
    Female,
    #[serde(rename = "3")]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    pub user_name: String,
    /// 列表接口通常不返回密码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub user_gender: Option<UserGender>,
    #[serde(default)]
    pub nick_name: String,
    #[serde(default)]
    pub user_phone: String,
    #[serde(default)]
    pub user_email: String,
    /// 用户拥有的角色编码
    #[serde(default, deserialize_with = "deserialize_vec_or_null")]
    pub by_user_role_code_list: Vec<String>,
}

pub type User = CommonRecord<UserFields>;
