//! SQL Flavor（方言）：决定标识符如何 Quote。

use crate::orm::Orm;
use std::fmt;

/// ORM 支持的 SQL 方言。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    MySQL,
    MariaDB,
    PostgreSQL,
    SQLite,
    SQLServer,
    Oracle,
    Snowflake,
    DB2,
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MySQL => "MySQL",
            Self::MariaDB => "MariaDB",
            Self::PostgreSQL => "PostgreSQL",
            Self::SQLite => "SQLite",
            Self::SQLServer => "SQLServer",
            Self::Oracle => "Oracle",
            Self::Snowflake => "Snowflake",
            Self::DB2 => "DB2",
        };
        f.write_str(s)
    }
}

impl Flavor {
    /// 标识符的起止引号。
    fn quote_chars(self) -> (char, char) {
        match self {
            Self::MySQL | Self::MariaDB => ('`', '`'),
            Self::SQLServer => ('[', ']'),
            Self::PostgreSQL | Self::SQLite | Self::Oracle | Self::Snowflake | Self::DB2 => {
                ('"', '"')
            }
        }
    }

    /// 为标识符加引号；标识符内出现的结束引号会被双写转义。
    pub fn quote(self, name: &str) -> String {
        let (open, close) = self.quote_chars();
        let mut out = String::with_capacity(name.len() + 2);
        out.push(open);
        for c in name.chars() {
            if c == close {
                out.push(close);
            }
            out.push(c);
        }
        out.push(close);
        out
    }
}

/// 标识符 Quote 函数的抽象：方言、ORM 句柄或任意闭包都可以充当。
pub trait QuoteIdentifier {
    fn quote_identifier(&self, name: &str) -> String;
}

impl QuoteIdentifier for Flavor {
    fn quote_identifier(&self, name: &str) -> String {
        self.quote(name)
    }
}

impl QuoteIdentifier for Orm {
    fn quote_identifier(&self, name: &str) -> String {
        self.flavor.quote(name)
    }
}

impl<F> QuoteIdentifier for F
where
    F: Fn(&str) -> String,
{
    fn quote_identifier(&self, name: &str) -> String {
        self(name)
    }
}
