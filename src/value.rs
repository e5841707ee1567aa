//! 模型实例中保存的字段值。

use std::borrow::Cow;

/// 实例字段值（`dataValues` 中的一项）。
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    String(Cow<'static, str>),
    Bytes(Vec<u8>),
    DateTime(time::OffsetDateTime),
}

impl DataValue {
    /// `None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<DataValue>>(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<()> for DataValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for DataValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for DataValue {
    fn from(v: i32) -> Self {
        Self::I64(v.into())
    }
}

impl From<i64> for DataValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u32> for DataValue {
    fn from(v: u32) -> Self {
        Self::I64(v.into())
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for DataValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for DataValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<Vec<u8>> for DataValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<time::OffsetDateTime> for DataValue {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}
