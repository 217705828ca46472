//! 时间工具函数 — 面向人工阅读的日期/时间格式
//!
//! 管理页面和邮件使用 `M/D/YYYY` 日期与服务器本地时间的接收时间。

use chrono::{DateTime, Local, NaiveDate, Utc};

/// 预订日期显示: `2099-01-01` → `1/1/2099`
///
/// 无法按 `YYYY-MM-DD` 解析时原样返回
pub fn format_display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(d) => d.format("%-m/%-d/%Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// 接收时间显示 (服务器本地时区): `1/1/2099, 6:00:00 PM`
pub fn format_received_at(created_at: &DateTime<Utc>) -> String {
    created_at
        .with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}
