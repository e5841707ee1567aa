//! 查询选项：`fields` 白名单与透传的执行设置（事务、日志、search path）。

use crate::model::Instance;
use crate::value::DataValue;
use std::fmt;
use std::sync::Arc;

/// 调用方持有的事务句柄；本 crate 只复制，不解释。
pub trait TransactionHandle: dyn_clone::DynClone + fmt::Debug + Send + Sync {
    fn id(&self) -> &str;
}

dyn_clone::clone_trait_object!(TransactionHandle);

/// 自定义 SQL 日志函数。
pub type LoggingFunc = Arc<dyn Fn(&str) + Send + Sync + 'static>;

/// 查询日志设置；本 crate 只在选项间复制，由 ORM 负责执行。
#[derive(Clone, Default)]
pub enum Logging {
    /// 沿用 ORM 默认行为。
    #[default]
    Inherit,
    Disabled,
    Custom(LoggingFunc),
}

impl Logging {
    pub fn custom(f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// 自定义日志函数（如有）。
    pub fn func(&self) -> Option<&LoggingFunc> {
        match self {
            Self::Custom(f) => Some(f),
            Self::Inherit | Self::Disabled => None,
        }
    }
}

impl fmt::Debug for Logging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inherit => f.write_str("Inherit"),
            Self::Disabled => f.write_str("Disabled"),
            Self::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

/// 查询选项。
///
/// `fields` 以 `Arc` 共享，[`add_to_fields`] 追加时总是生成新序列，其他持有者看到的内容不变。
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// `None` 表示不限制字段。
    pub fields: Option<Arc<[String]>>,
    pub transaction: Option<Box<dyn TransactionHandle>>,
    pub logging: Logging,
    pub search_path: Option<String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_transaction(mut self, transaction: impl TransactionHandle + 'static) -> Self {
        self.transaction = Some(Box::new(transaction));
        self
    }

    pub fn with_logging(mut self, logging: Logging) -> Self {
        self.logging = logging;
        self
    }

    pub fn with_search_path(mut self, search_path: impl Into<String>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }
}

/// 把 `source` 的事务、日志与 search path 覆盖到 `target`（包括空值）；`fields` 不动。
pub fn add_options<'t>(
    target: &'t mut QueryOptions,
    source: &QueryOptions,
) -> &'t mut QueryOptions {
    target.transaction = source.transaction.clone();
    target.logging = source.logging.clone();
    target.search_path = source.search_path.clone();
    target
}

/// 字段是否在 `fields` 白名单内；未设置白名单时总是 `true`。
pub fn in_fields(field: &str, options: &QueryOptions) -> bool {
    match options.fields() {
        None => true,
        Some(fields) => fields.iter().any(|f| f == field),
    }
}

/// 字段在白名单内时返回实例中保存的值（缺失视为 `Null`），否则返回 `None`。
pub fn value_filtered_by_fields<I>(
    field: &str,
    item: &I,
    options: &QueryOptions,
) -> Option<DataValue>
where
    I: Instance + ?Sized,
{
    if !in_fields(field, options) {
        return None;
    }
    Some(item.data_value(field).cloned().unwrap_or(DataValue::Null))
}

/// 把字段追加到 `fields` 白名单；已包含（或未设置白名单）时不做任何事。
pub fn add_to_fields(field: &str, options: &mut QueryOptions) {
    if in_fields(field, options) {
        return;
    }
    let old = options.fields.as_deref().unwrap_or_default();
    let fields: Arc<[String]> = old
        .iter()
        .cloned()
        .chain(std::iter::once(field.to_string()))
        .collect();
    tracing::trace!(field, count = fields.len(), "added field to options");
    options.fields = Some(fields);
}
