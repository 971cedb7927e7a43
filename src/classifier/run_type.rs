//! 训练类型代码 -> 中文名称
//! 训练记录自带 runType / parentRunType 代码，直接查内置分类表

use super::category::FALLBACK_LABEL;
use super::table::DEFAULT_CATEGORY_TABLE;

/// 训练记录 runType 可用的具体类型代码
const RUN_TYPE_CODES: &[&str] = &[
    "PROG", "Slope", "FARTLEK", "I-S", "I-L", "PYRAMID", "T", "E", "REC", "LR", "RACE", "TRAIL",
];

/// 具体训练类型名称，未知或缺失时返回「其他」
pub fn run_type_name(run_type: Option<&str>) -> &'static str {
    let table = &**DEFAULT_CATEGORY_TABLE;
    run_type
        .filter(|code| RUN_TYPE_CODES.contains(code))
        .and_then(|code| table.get(code))
        .map(|category| category.localized_name.as_str())
        .unwrap_or(FALLBACK_LABEL)
}

/// 父类别名称，未知或缺失时返回空字符串
pub fn parent_run_type_name(parent_run_type: Option<&str>) -> &'static str {
    let table = &**DEFAULT_CATEGORY_TABLE;
    parent_run_type
        .filter(|code| table.is_umbrella(code))
        .and_then(|code| table.get(code))
        .map(|category| category.localized_name.as_str())
        .unwrap_or("")
}
