//! 命名转换：把 `camelCase` / `snake_case` / `kebab-case` 转为便于阅读的形式。

fn is_delimiter(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

/// 去掉分隔符（`-`、`_`、空白），并把分隔符后的第一个字符转为大写（`foo_bar` -> `fooBar`）。
fn camelize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut after_delimiter = false;
    for c in s.chars() {
        if is_delimiter(c) {
            after_delimiter = true;
            continue;
        }
        if after_delimiter {
            out.extend(c.to_uppercase());
            after_delimiter = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Humanize：`"fooBar"` / `"foo_bar"` -> `"Foo Bar"`。
///
/// - 空串或 `None` 返回空串
/// - 首字符转大写，其后每个 ASCII 大写字母前插入一个空格
pub fn humanize<'a>(input: impl Into<Option<&'a str>>) -> String {
    let Some(s) = input.into().filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let camel = camelize(s);
    let mut chars = camel.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(camel.len() + 4);
    out.extend(first.to_uppercase());
    for c in chars {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
