//! 分类模块：训练名称 -> 训练类型
pub mod category;
pub mod table;
pub mod classifier;
pub mod global;
pub mod run_type;

// 导出核心接口
pub use self::category::{
    CategoryTable, CategoryTableBuilder, CategoryTableDef, PriorityKeywordDef, TrainingTypeCategory,
    FALLBACK_LABEL,
};
pub use self::table::DEFAULT_CATEGORY_TABLE;
pub use self::classifier::TrainingTypeClassifier;
pub use self::global::{classify_training_type, global_classifier, training_type_label};
pub use self::run_type::{parent_run_type_name, run_type_name};
