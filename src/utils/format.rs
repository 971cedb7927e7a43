//! 显示格式化工具

/// 移除时长前导的 "00:"（HH:MM:SS -> MM:SS）
pub fn format_time(time: &str) -> &str {
    time.strip_prefix("00:").unwrap_or(time)
}

/// 距离保留一位小数
pub fn format_distance(distance: f64) -> String {
    format!("{:.1}", distance)
}
