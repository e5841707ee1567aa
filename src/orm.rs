//! ORM 句柄与按版本分派的模型访问。

use crate::flavor::Flavor;
use crate::model::{AttributeMap, Model};
use crate::version::{VersionError, VersionSelector};

/// 5.x 起模型属性改由 `rawAttributes` 暴露，`underscored` 语义也随之变化。
pub const MODERN_RANGE: &str = ">=5.0.0 || >=5.0.0-beta";

/// 调用方持有的 ORM 句柄：版本号与方言。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Orm {
    /// ORM 版本号；`None` 时按基线版本处理。
    pub version: Option<String>,
    pub flavor: Flavor,
}

impl Orm {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            version: None,
            flavor,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// ORM 全局定义选项中与命名相关的部分。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    pub underscored: Option<bool>,
    pub underscored_all: Option<bool>,
}

/// 读取模型属性表：5+ 版本使用 `raw_attributes`，更早版本使用 `attributes`。
pub fn get_model_attributes<'m, M>(
    model: &'m M,
    orm: &Orm,
) -> Result<&'m AttributeMap, VersionError>
where
    M: Model + ?Sized,
{
    VersionSelector::new(move || model.attributes())
        .when(MODERN_RANGE, move || model.raw_attributes())?
        .select(orm.version())
}

/// 计算是否对表名/外键统一使用下划线命名。
///
/// 5+ 版本：模型自身的 `underscored` 优先，否则取全局 `underscored`；
/// 更早版本：取全局 `underscored_all`。
pub fn determine_underscored_all<M>(
    model: &M,
    global: &GlobalOptions,
    orm: &Orm,
) -> Result<Option<bool>, VersionError>
where
    M: Model + ?Sized,
{
    VersionSelector::new(|| global.underscored_all)
        .when(MODERN_RANGE, || model.options().underscored.or(global.underscored))?
        .select(orm.version())
}
