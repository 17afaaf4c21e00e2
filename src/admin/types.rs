//! 公共信封与记录结构
//!
//! 所有资源共享的分页包装、通用记录字段、搜索分页参数以及批量删除参数。

use crate::admin::error::TransportError;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::{Deref, DerefMut};

/// 记录主键
pub type RecordId = i64;

/// 反序列化数组字段，处理 null 值
pub(crate) fn deserialize_vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// 统一的 API 响应包装结构体（包含 code、msg、data）
///
/// data 字段可能为 null 或缺失，因此使用 `Option<T>`
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    /// 后端一般返回字符串业务码，部分异常处理器返回数字
    #[serde(deserialize_with = "deserialize_code")]
    pub code: String,
    #[serde(default)]
    pub msg: Option<String>,
    pub data: Option<T>,
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(code) => Ok(code),
        serde_json::Value::Number(code) => Ok(code.to_string()),
        other => Err(serde::de::Error::custom(format!("无效的业务码: {}", other))),
    }
}

/// 启用状态
///
/// - "1": 启用
/// - "2": 禁用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusType {
    #[serde(rename = "1")]
    Enabled,
    #[serde(rename = "2")]
    Disabled,
}

/// 通用记录：系统字段 + 实体自身字段（扁平展开）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonRecord<T> {
    /// 记录 ID，分配后不可变
    pub id: RecordId,
    #[serde(default)]
    pub create_by: Option<String>,
    /// 创建时间（毫秒时间戳）
    #[serde(default)]
    pub create_time: Option<i64>,
    #[serde(default)]
    pub update_by: Option<String>,
    /// 更新时间（毫秒时间戳）
    #[serde(default)]
    pub update_time: Option<i64>,
    #[serde(default)]
    pub status_type: Option<StatusType>,
    #[serde(default)]
    pub fmt_create_time: Option<String>,
    #[serde(default)]
    pub fmt_update_time: Option<String>,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> CommonRecord<T> {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.create_time.and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.update_time.and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }

    /// createTime ≤ updateTime；缺少任一时间戳时不做判断
    pub fn audit_times_consistent(&self) -> bool {
        match (self.create_time, self.update_time) {
            (Some(created), Some(updated)) => created <= updated,
            _ => true,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.status_type == Some(StatusType::Enabled)
    }
}

impl<T> Deref for CommonRecord<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.fields
    }
}

impl<T> DerefMut for CommonRecord<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.fields
    }
}

/// 分页游标
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl PageQuery {
    pub fn new(current: u32, size: u32) -> Self {
        Self {
            current: Some(current),
            size: Some(size),
        }
    }

    /// 调用方未给出的 current/size 用默认值补齐，已给出的保持不变
    pub fn fill_defaults(&mut self, default_size: u32) {
        self.current.get_or_insert(1);
        self.size.get_or_insert(default_size);
    }
}

/// 带分页游标的搜索参数
pub trait Paginated {
    fn page(&self) -> &PageQuery;
    fn page_mut(&mut self) -> &mut PageQuery;
}

/// 搜索参数原样序列化为请求体，这里不做任何默认值填充
pub fn to_search_params<S: Serialize>(filter: &S) -> Result<serde_json::Value, TransportError> {
    Ok(serde_json::to_value(filter)?)
}

/// 分页查询结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedResult<T> {
    pub current: u32,
    pub size: u32,
    /// 服务端报告的匹配总数，与 records 长度无关
    pub total: u64,
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 是否还有下一页
    pub fn has_next(&self) -> bool {
        (self.current as u64) * (self.size as u64) < self.total
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct PageEnvelope<T> {
    #[serde(default)]
    current: Option<u32>,
    #[serde(default)]
    size: Option<u32>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(deserialize_with = "deserialize_vec_or_null")]
    records: Vec<T>,
}

/// 列表接口可能返回分页信封，也可能直接返回数组（不分页的全量列表）
#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload<T> {
    Page(PageEnvelope<T>),
    All(Vec<T>),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PaginatedResult<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ListPayload::<T>::deserialize(deserializer)? {
            ListPayload::Page(page) => {
                let len = page.records.len();
                PaginatedResult {
                    current: page.current.unwrap_or(1),
                    size: page.size.unwrap_or(len as u32),
                    total: page.total.unwrap_or(len as u64),
                    records: page.records,
                }
            }
            ListPayload::All(records) => PaginatedResult {
                current: 1,
                size: records.len() as u32,
                total: records.len() as u64,
                records,
            },
        })
    }
}

/// 批量删除参数，顺序无关，重复 ID 原样透传
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchDeleteParams {
    pub ids: Vec<String>,
}

impl BatchDeleteParams {
    pub fn from_ids<I, V>(ids: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        Self {
            ids: ids.into_iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// 写操作的回执，服务端按操作返回其中一个字段
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_ids: Option<Vec<RecordId>>,
    /// 部分接口（如疾病更新）只返回 id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
}

impl MutationReceipt {
    const KEYS: [&'static str; 5] = ["created_id", "updated_id", "deleted_id", "deleted_ids", "id"];

    /// 从响应数据解码回执
    ///
    /// `null` 视为空回执；非空数据必须至少带一个回执字段，否则按响应形状不符处理
    pub fn from_data(data: serde_json::Value) -> Result<Self, TransportError> {
        if data.is_null() {
            return Ok(Self::default());
        }
        let recognised = data
            .as_object()
            .is_some_and(|obj| Self::KEYS.iter().any(|key| obj.contains_key(*key)));
        if !recognised {
            return Err(TransportError::Serialization(format!(
                "无法识别的写操作回执: {}",
                data
            )));
        }
        Ok(serde_json::from_value(data)?)
    }
}
