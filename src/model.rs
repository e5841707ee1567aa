//! ORM 模型侧的只读视图：属性元数据、表名与实例值。
//!
//! 本 crate 不实现 ORM，只通过 [`Model`] / [`Instance`] 读取调用方提供的状态。

use crate::value::DataValue;
use std::collections::HashMap;
use std::fmt;

/// 单个属性的描述：逻辑字段名对应的物理列名。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attribute {
    /// 数据库中的列名。
    pub field: String,
}

impl Attribute {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

/// 逻辑字段名 -> 属性描述。
pub type AttributeMap = HashMap<String, Attribute>;

/// 模型的表名：普通表名，或带 schema 的限定名。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableName {
    Plain(String),
    Qualified {
        schema: String,
        table: String,
        delimiter: String,
    },
}

impl TableName {
    pub fn plain(table: impl Into<String>) -> Self {
        Self::Plain(table.into())
    }

    /// 使用默认分隔符 `.` 的 schema 限定名。
    pub fn qualified(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self::Qualified {
            schema: schema.into(),
            table: table.into(),
            delimiter: ".".to_string(),
        }
    }

    pub fn with_delimiter(self, delimiter: impl Into<String>) -> Self {
        match self {
            Self::Qualified { schema, table, .. } => Self::Qualified {
                schema,
                table,
                delimiter: delimiter.into(),
            },
            plain => plain,
        }
    }

    pub fn schema(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Qualified { schema, .. } => Some(schema),
        }
    }

    pub fn table(&self) -> &str {
        match self {
            Self::Plain(table) | Self::Qualified { table, .. } => table,
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(table) => f.write_str(table),
            Self::Qualified {
                schema,
                table,
                delimiter,
            } => write!(f, "{schema}{delimiter}{table}"),
        }
    }
}

/// 模型级选项（只读取本 crate 关心的部分）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelOptions {
    /// 模型自身的 `underscored` 设置；`None` 表示沿用全局配置。
    pub underscored: Option<bool>,
}

/// ORM 模型。
///
/// `attributes` 为旧版本（< 5）暴露的属性表，`raw_attributes` 为 5+ 版本的属性表；
/// 两者不同时由实现方覆盖 `raw_attributes`。
pub trait Model {
    fn name(&self) -> &str;

    fn attributes(&self) -> &AttributeMap;

    fn raw_attributes(&self) -> &AttributeMap {
        self.attributes()
    }

    fn table_name(&self) -> TableName;

    fn options(&self) -> &ModelOptions;
}

impl<T: Model + ?Sized> Model for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn attributes(&self) -> &AttributeMap {
        (**self).attributes()
    }

    fn raw_attributes(&self) -> &AttributeMap {
        (**self).raw_attributes()
    }

    fn table_name(&self) -> TableName {
        (**self).table_name()
    }

    fn options(&self) -> &ModelOptions {
        (**self).options()
    }
}

/// 模型实例：按逻辑字段名读取已保存的值。
pub trait Instance {
    fn data_value(&self, field: &str) -> Option<&DataValue>;
}

impl Instance for HashMap<String, DataValue> {
    fn data_value(&self, field: &str) -> Option<&DataValue> {
        self.get(field)
    }
}
