//! 按 semver 版本范围选择行为（对应 `semver-select` 的用法）。
//!
//! 表项按声明顺序匹配，第一个命中的行为被调用；全部未命中时调用构造时给出的 fallback（即 `*` 项）。

use semver::{Version, VersionReq};

/// 调用方未给出版本时使用的基线版本。
pub const BASELINE_VERSION: &str = "3.0.0";

#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    #[error("invalid version `{input}`: {source}")]
    InvalidVersion {
        input: String,
        #[source]
        source: semver::Error,
    },
    #[error("invalid version range `{input}`: {source}")]
    InvalidRange {
        input: String,
        #[source]
        source: semver::Error,
    },
}

/// 解析后的版本范围：若干个以 `||` 连接的备选项。
#[derive(Debug, Clone)]
pub struct VersionRange {
    source: String,
    any: bool,
    alternatives: Vec<VersionReq>,
}

impl VersionRange {
    /// 解析范围表达式，例如 `">=5.0.0 || >=5.0.0-beta"`、`">=1.2.0 <2.0.0"`、
    /// `"1.0.0 - 2.0.0"`、`"*"`。
    ///
    /// 语义与 npm 的 semver 范围一致：不带运算符的版本为精确匹配，而不是 Cargo 的 `^`。
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let mut any = false;
        let mut alternatives = Vec::new();
        for alt in input.split("||") {
            let alt = alt.trim();
            if alt == "*" || alt.is_empty() {
                any = true;
                continue;
            }
            let req = parse_alternative(alt).map_err(|source| VersionError::InvalidRange {
                input: input.to_string(),
                source,
            })?;
            alternatives.push(req);
        }
        Ok(Self {
            source: input.to_string(),
            any,
            alternatives,
        })
    }

    /// `*` 备选项匹配任何版本（包括预发布版本）。
    pub fn matches(&self, version: &Version) -> bool {
        self.any || self.alternatives.iter().any(|req| req.matches(version))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

fn is_operator(token: &str) -> bool {
    token.chars().all(|c| matches!(c, '<' | '>' | '=' | '~' | '^'))
}

fn is_wildcard(part: &str) -> bool {
    part.split('.').any(|p| matches!(p, "x" | "X" | "*"))
}

/// 规范化单个比较式：去掉版本前的 `v`，无运算符的完整/部分版本视为精确匹配（`3.0.0` -> `=3.0.0`），
/// `3.x` 之类的通配保持原样。
fn normalize_comparator(comparator: &str) -> String {
    let split = comparator
        .find(|c: char| !matches!(c, '<' | '>' | '=' | '~' | '^'))
        .unwrap_or(comparator.len());
    let (op, version) = comparator.split_at(split);
    let version = version.trim_start_matches(['v', 'V']);
    if op.is_empty() && !is_wildcard(version) {
        format!("={version}")
    } else {
        format!("{op}{version}")
    }
}

/// 把单个备选项改写为 `semver` 接受的逗号分隔形式：
/// `">= 1.0.0 <2"` -> `">=1.0.0, <2"`，`"1.2.3 - 2.3"` -> `">=1.2.3, <=2.3"`。
fn parse_alternative(alt: &str) -> Result<VersionReq, semver::Error> {
    let mut tokens: Vec<String> = Vec::new();
    let mut pending_op = String::new();
    for token in alt
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        if is_operator(token) {
            pending_op.push_str(token);
            continue;
        }
        tokens.push(format!("{pending_op}{token}"));
        pending_op.clear();
    }
    if !pending_op.is_empty() {
        tokens.push(pending_op);
    }

    let mut comparators = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if tokens.get(i + 1).is_some_and(|t| t == "-") && i + 2 < tokens.len() {
            comparators.push(format!(">={}", tokens[i].trim_start_matches(['v', 'V'])));
            comparators.push(format!("<={}", tokens[i + 2].trim_start_matches(['v', 'V'])));
            i += 3;
            continue;
        }
        comparators.push(normalize_comparator(&tokens[i]));
        i += 1;
    }
    VersionReq::parse(&comparators.join(", "))
}

/// 解析版本号，容忍 `v` / `=` 前缀。
pub fn parse_version(input: &str) -> Result<Version, VersionError> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix('=')
        .unwrap_or(trimmed)
        .trim_start_matches(['v', 'V']);
    Version::parse(trimmed).map_err(|source| VersionError::InvalidVersion {
        input: input.to_string(),
        source,
    })
}

type Behavior<'a, T> = Box<dyn Fn() -> T + 'a>;

/// 有序的（版本范围, 行为）表，fallback 必填。
pub struct VersionSelector<'a, T> {
    branches: Vec<(VersionRange, Behavior<'a, T>)>,
    fallback: Behavior<'a, T>,
}

impl<'a, T> VersionSelector<'a, T> {
    pub fn new(fallback: impl Fn() -> T + 'a) -> Self {
        Self {
            branches: Vec::new(),
            fallback: Box::new(fallback),
        }
    }

    /// 追加一个分支；范围表达式在此处解析，格式错误直接返回。
    pub fn when(
        mut self,
        range: &str,
        behavior: impl Fn() -> T + 'a,
    ) -> Result<Self, VersionError> {
        let range = VersionRange::parse(range)?;
        self.branches.push((range, Box::new(behavior)));
        Ok(self)
    }

    /// 以 `version`（缺省为 [`BASELINE_VERSION`]）选择并调用行为。
    pub fn select(&self, version: Option<&str>) -> Result<T, VersionError> {
        let input = version.unwrap_or(BASELINE_VERSION);
        let version = parse_version(input)?;
        for (range, behavior) in &self.branches {
            if range.matches(&version) {
                tracing::debug!(%version, range = range.as_str(), "version branch selected");
                return Ok(behavior());
            }
        }
        tracing::debug!(%version, "version fallback selected");
        Ok((self.fallback)())
    }
}
