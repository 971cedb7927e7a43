//! 日期解析工具
//! 训练记录的 startDate 格式不统一，统一换算为 UTC 日期

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// 日期解析工具
pub struct DateParser;

impl DateParser {
    /// 解析 startDate，返回所属日期
    ///
    /// 支持：
    /// - RFC3339（带时区，换算为 UTC）
    /// - `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM:SS`（视为 UTC）
    /// - `YYYY-MM-DD`
    pub fn to_utc_date(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc).date_naive());
        }
        Self::parse_naive_datetime(raw)
            .map(|dt| dt.date())
            .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }

    /// 解析不带时区的日期时间
    pub fn parse_naive_datetime(raw: &str) -> Option<NaiveDateTime> {
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw.trim(), fmt).ok())
    }
}
