//! 测试用的最小模型实现。

use crate::model::{Attribute, AttributeMap, Model, ModelOptions, TableName};

#[derive(Debug, Clone)]
pub(crate) struct TestModel {
    pub(crate) name: String,
    pub(crate) attributes: AttributeMap,
    pub(crate) raw_attributes: AttributeMap,
    pub(crate) table: TableName,
    pub(crate) options: ModelOptions,
}

impl TestModel {
    pub(crate) fn new(name: &str, table: TableName) -> Self {
        Self {
            name: name.to_string(),
            attributes: AttributeMap::new(),
            raw_attributes: AttributeMap::new(),
            table,
            options: ModelOptions::default(),
        }
    }

    /// 同时登记到新旧两张属性表。
    pub(crate) fn attr(mut self, logical: &str, column: &str) -> Self {
        self.attributes
            .insert(logical.to_string(), Attribute::new(column));
        self.raw_attributes
            .insert(logical.to_string(), Attribute::new(column));
        self
    }

    pub(crate) fn legacy_attr(mut self, logical: &str, column: &str) -> Self {
        self.attributes
            .insert(logical.to_string(), Attribute::new(column));
        self
    }

    pub(crate) fn raw_attr(mut self, logical: &str, column: &str) -> Self {
        self.raw_attributes
            .insert(logical.to_string(), Attribute::new(column));
        self
    }

    pub(crate) fn underscored(mut self, v: bool) -> Self {
        self.options.underscored = Some(v);
        self
    }
}

impl Model for TestModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    fn raw_attributes(&self) -> &AttributeMap {
        &self.raw_attributes
    }

    fn table_name(&self) -> TableName {
        self.table.clone()
    }

    fn options(&self) -> &ModelOptions {
        &self.options
    }
}

/// 测试 SQL 里常用的反引号 Quote。
pub(crate) fn backtick(name: &str) -> String {
    format!("`{name}`")
}
