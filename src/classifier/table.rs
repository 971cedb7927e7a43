//! 内置训练类型分类表
//! 进程内唯一、首次访问时构建，之后只读

use std::sync::Arc;
use once_cell::sync::Lazy;

use super::category::CategoryTable;

/// 内置分类表单例
pub static DEFAULT_CATEGORY_TABLE: Lazy<Arc<CategoryTable>> = Lazy::new(|| {
    let table = default_table_builder().build().unwrap_or_else(|e| {
        panic!("内置训练类型分类表构建失败：{}", e);
    });
    tracing::debug!(
        "内置训练类型分类表构建完成，分类数：{}，优先关键字数：{}",
        table.len(),
        table.priority_keywords().count()
    );
    Arc::new(table)
});

/// 内置分类与优先关键字定义
fn default_table_builder() -> super::category::CategoryTableBuilder {
    CategoryTable::builder()
        // 伞状分类
        .category("INT", "Intensity", "強度訓練")
        .category("SW", "Jog", "慢跑")
        // 强度训练子分类
        .child("PROG", "Progression", "漸速跑", "INT")
        .child("Slope", "Hill", "坡度訓練", "INT")
        .child("FARTLEK", "Fartlek", "法特雷克", "INT")
        .child("I-S", "Short Interval", "短間歇", "INT")
        .child("I-L", "Long Interval", "長間歇", "INT")
        .child("PYRAMID", "Pyramid", "金字塔", "INT")
        .child("T", "Tempo", "節奏跑", "INT")
        // 慢跑子分类
        .child("E", "Easy Run", "輕鬆跑", "SW")
        .child("REC", "Recovery", "恢復跑", "SW")
        .child("LR", "Long Run", "長距離", "SW")
        // 独立分类
        .category("RACE", "Race", "賽事")
        .category("TRAIL", "Trail", "越野跑")
        .category("WT", "Weight Training", "重量訓練")
        .category("YOGA", "Yoga", "瑜珈")
        // 优先关键字：整词在前，泛化词在后
        .priority("easy run", "E")
        .priority("recovery run", "REC")
        .priority("recovery", "REC")
        .priority("long run", "LR")
        .priority("tempo", "T")
        .priority("progression", "PROG")
        .priority("fartlek", "FARTLEK")
        .priority("pyramid", "PYRAMID")
        .priority("hill", "Slope")
        .priority("trail", "TRAIL")
        .priority("race", "RACE")
        .priority("weight training", "WT")
        .priority("strength", "WT")
        .priority("gym", "WT")
        .priority("yoga", "YOGA")
        .priority("short interval", "I-S")
        .priority("long interval", "I-L")
        .priority("interval", "INT")
        .priority("intensity", "INT")
        .priority("marathon pace", "INT")
        .priority("jog", "SW")
        .priority("輕鬆跑", "E")
        .priority("恢復跑", "REC")
        .priority("長距離", "LR")
        .priority("長跑", "LR")
        .priority("節奏", "T")
        .priority("漸速", "PROG")
        .priority("坡度", "Slope")
        .priority("爬坡", "Slope")
        .priority("法特雷克", "FARTLEK")
        .priority("短間歇", "I-S")
        .priority("長間歇", "I-L")
        .priority("間歇", "INT")
        .priority("金字塔", "PYRAMID")
        .priority("越野", "TRAIL")
        .priority("賽事", "RACE")
        .priority("比賽", "RACE")
        .priority("重訓", "WT")
        .priority("重量訓練", "WT")
        .priority("瑜珈", "YOGA")
        .priority("瑜伽", "YOGA")
        .priority("慢跑", "SW")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_two_level_forest() {
        let table = &*DEFAULT_CATEGORY_TABLE;
        for category in table.categories() {
            if let Some(parent) = &category.parent_code {
                let parent = table.get(parent).expect("父分类必须存在");
                assert!(parent.parent_code.is_none(), "{} 的父分类不能再有父分类", category.code);
            }
        }
    }

    #[test]
    fn test_default_codes_are_unique() {
        let table = &*DEFAULT_CATEGORY_TABLE;
        let mut codes: Vec<_> = table.categories().iter().map(|c| c.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), table.len());
    }

    #[test]
    fn test_english_category_names_hit_priority_keywords() {
        let classifier = crate::classifier::TrainingTypeClassifier::new(Arc::clone(&DEFAULT_CATEGORY_TABLE));
        for category in DEFAULT_CATEGORY_TABLE.categories() {
            let best = classifier.best_match(&category.name).map(|c| c.code.as_str());
            assert_eq!(best, Some(category.code.as_str()), "英文名称 {} 分类错误", category.name);
        }
    }

    #[test]
    fn test_default_fallback_label() {
        assert_eq!(DEFAULT_CATEGORY_TABLE.fallback_label(), "其他");
    }
}
