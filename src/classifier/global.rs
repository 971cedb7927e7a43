//! 全局分类器单例
//! 基于内置分类表，首次使用时初始化，进程内共享

use once_cell::sync::Lazy;

use super::category::TrainingTypeCategory;
use super::classifier::TrainingTypeClassifier;

/// 全局分类器实例
static GLOBAL_CLASSIFIER: Lazy<TrainingTypeClassifier> = Lazy::new(TrainingTypeClassifier::with_default_table);

/// 获取全局分类器
pub fn global_classifier() -> &'static TrainingTypeClassifier {
    &GLOBAL_CLASSIFIER
}

/// 使用内置分类表分类
pub fn classify_training_type(text: &str) -> Vec<&'static TrainingTypeCategory> {
    GLOBAL_CLASSIFIER.classify(text)
}

/// 使用内置分类表取显示名称
pub fn training_type_label(text: &str) -> &'static str {
    GLOBAL_CLASSIFIER.display_label(text)
}
