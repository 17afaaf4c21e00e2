//! 三态更新字段
//!
//! 更新参数中的每个字段都有三种状态：缺省（不修改）、显式 `null`（清空）、有值（覆盖）。
//! 普通 `Option<T>` 只能表达两种，所以单独定义 `Patch<T>`。
//!
//! 字段上需要同时加 `#[serde(default, skip_serializing_if = "Patch::is_absent")]`：
//! 缺省字段不进入请求体，反序列化时缺失字段回到 `Absent`。

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 更新请求中的单个字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// 不出现在请求体中，服务端保持原值
    Absent,
    /// 以 `null` 出现，服务端清空该字段
    Null,
    /// 以具体值出现，服务端覆盖该字段
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Patch::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Patch<U> {
        match self {
            Patch::Absent => Patch::Absent,
            Patch::Null => Patch::Null,
            Patch::Value(v) => Patch::Value(f(v)),
        }
    }

    /// 把本字段应用到当前值上，得到更新后的值
    pub fn apply_to(self, current: Option<T>) -> Option<T> {
        match self {
            Patch::Absent => current,
            Patch::Null => None,
            Patch::Value(v) => Some(v),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    /// `None` 视为显式清空
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Value(v),
            None => Patch::Null,
        }
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // 字段上未加 skip_serializing_if 时退化为 null
            Patch::Absent | Patch::Null => serializer.serialize_none(),
            Patch::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // 字段缺失时不会走到这里，由 #[serde(default)] 给出 Absent
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}
