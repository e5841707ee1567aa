//! halo-orm-compat：ORM 版本兼容与 SQL 片段处理的小工具集。
//!
//! - 按 semver 范围选择行为（[`VersionSelector`]）
//! - `*placeholder` 形式的字段名 / 表名替换（[`replace_field_names`]、[`replace_table_names`]）
//! - 查询选项辅助（[`in_fields`]、[`add_to_fields`] 等）与 [`humanize`]

pub mod flavor;
pub mod identifiers;
pub mod model;
pub mod naming;
pub mod options;
#[cfg(test)]
mod options_tests;
pub mod orm;
#[cfg(test)]
mod test_support;
pub mod value;
pub mod version;

pub use crate::flavor::{Flavor, QuoteIdentifier};
pub use crate::identifiers::{
    LookupError, ReplaceError, replace_field_names, replace_model_field_names,
    replace_model_table_names, replace_table_names,
};
pub use crate::model::{Attribute, AttributeMap, Instance, Model, ModelOptions, TableName};
pub use crate::naming::humanize;
pub use crate::options::{
    Logging, LoggingFunc, QueryOptions, TransactionHandle, add_options, add_to_fields, in_fields,
    value_filtered_by_fields,
};
pub use crate::orm::{
    GlobalOptions, MODERN_RANGE, Orm, determine_underscored_all, get_model_attributes,
};
pub use crate::value::DataValue;
pub use crate::version::{
    BASELINE_VERSION, VersionError, VersionRange, VersionSelector, parse_version,
};
