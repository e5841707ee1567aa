//! SQL 片段中的标识符占位符替换。
//!
//! 占位符写作 `*name`（`name` 匹配 `[A-Za-z0-9_]+`），例如：
//!
//! ```text
//! SELECT *field FROM `Tasks`   with {field: "name"}
//! -> SELECT `name` FROM `Tasks`
//! ```
//!
//! 只有紧跟的完整标识符与占位符名相等时才会替换，`*fieldExtra` 不会被 `field` 命中；
//! 未登记的占位符原样保留。替换为单遍扫描，替换结果不会被再次扫描。

use crate::flavor::QuoteIdentifier;
use crate::model::{AttributeMap, Model, TableName};
use crate::orm::{Orm, get_model_attributes};
use crate::version::VersionError;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([A-Za-z0-9_]+)").expect("placeholder pattern is valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r\n]+").expect("whitespace pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("placeholder `*{placeholder}` refers to unknown field `{field}`")]
    UnknownField { placeholder: String, field: String },
}

/// 基于模型的替换可能遇到的错误。
#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Version(#[from] VersionError),
}

/// 对 `sql` 做一次占位符替换；`resolved` 中没有的占位符保持原样。
fn substitute<'s>(sql: &'s str, resolved: &HashMap<String, String>) -> Cow<'s, str> {
    if resolved.is_empty() {
        return Cow::Borrowed(sql);
    }
    PLACEHOLDER.replace_all(sql, |caps: &Captures<'_>| match resolved.get(&caps[1]) {
        Some(text) => text.clone(),
        None => caps[0].to_string(),
    })
}

/// 把 `*placeholder` 替换为逻辑字段对应的物理列名（已 Quote），并把连续空白折叠为单个空格。
///
/// `identifiers` 为 `(占位符, 逻辑字段名)` 对；任一逻辑字段在 `attributes` 中不存在时返回
/// [`LookupError`]，且不做任何替换。
pub fn replace_field_names<I, K, V, Q>(
    sql: &str,
    identifiers: I,
    attributes: &AttributeMap,
    quoter: &Q,
) -> Result<String, LookupError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
    Q: QuoteIdentifier + ?Sized,
{
    let mut resolved = HashMap::new();
    for (placeholder, field) in identifiers {
        let (placeholder, field) = (placeholder.as_ref(), field.as_ref());
        let attribute = attributes
            .get(field)
            .ok_or_else(|| LookupError::UnknownField {
                placeholder: placeholder.to_string(),
                field: field.to_string(),
            })?;
        let quoted = quoter.quote_identifier(&attribute.field);
        tracing::trace!(placeholder, field, column = %quoted, "resolved field placeholder");
        resolved.insert(placeholder.to_string(), quoted);
    }

    let replaced = substitute(sql, &resolved);
    tracing::debug!(placeholders = resolved.len(), "replaced field names");
    Ok(WHITESPACE.replace_all(&replaced, " ").into_owned())
}

/// 把 `*placeholder` 替换为模型的表名。
///
/// 带 schema 的表名以其完整字符串形式（不加引号）代入，否则代入 Quote 后的表名。
/// 与 [`replace_field_names`] 不同，这里不折叠空白。
pub fn replace_table_names<'m, I, K, M, Q>(sql: &str, identifiers: I, quoter: &Q) -> String
where
    I: IntoIterator<Item = (K, &'m M)>,
    K: AsRef<str>,
    M: Model + ?Sized + 'm,
    Q: QuoteIdentifier + ?Sized,
{
    let resolved: HashMap<String, String> = identifiers
        .into_iter()
        .map(|(placeholder, model)| {
            let table = match model.table_name() {
                qualified @ TableName::Qualified { .. } => qualified.to_string(),
                TableName::Plain(name) => quoter.quote_identifier(&name),
            };
            tracing::trace!(
                placeholder = placeholder.as_ref(),
                model = model.name(),
                %table,
                "resolved table placeholder"
            );
            (placeholder.as_ref().to_string(), table)
        })
        .collect();

    tracing::debug!(placeholders = resolved.len(), "replaced table names");
    substitute(sql, &resolved).into_owned()
}

/// [`replace_field_names`] 的模型版本：属性表按 ORM 版本选取，Quote 使用 ORM 方言。
pub fn replace_model_field_names<I, K, V, M>(
    sql: &str,
    identifiers: I,
    model: &M,
    orm: &Orm,
) -> Result<String, ReplaceError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
    M: Model + ?Sized,
{
    let attributes = get_model_attributes(model, orm)?;
    Ok(replace_field_names(sql, identifiers, attributes, orm)?)
}

/// [`replace_table_names`] 的 ORM 版本：Quote 使用 ORM 方言。
pub fn replace_model_table_names<'m, I, K, M>(sql: &str, identifiers: I, orm: &Orm) -> String
where
    I: IntoIterator<Item = (K, &'m M)>,
    K: AsRef<str>,
    M: Model + ?Sized + 'm,
{
    replace_table_names(sql, identifiers, orm)
}
