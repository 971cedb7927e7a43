//! training-record - 马拉松训练纪录整理与训练类型分类

// 导出全局错误类型
pub use self::error::{TrainingRecordError, TrResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出分类模块核心接口
pub use self::classifier::{
    CategoryTable, CategoryTableBuilder, CategoryTableDef, TrainingTypeCategory, TrainingTypeClassifier,
    DEFAULT_CATEGORY_TABLE, FALLBACK_LABEL,
    classify_training_type, global_classifier, training_type_label,
    run_type_name, parent_run_type_name,
};

// 导出训练数据模块核心接口
pub use self::record::{
    TrainingRecord, MonthlyTrainingData, WeeklyTrainingData, TrainingResponseData, TrainingSummary,
    ChartDataPoint, WeeklyTrainingTypeStats, RecordLoader, ProbeResult,
};

// 导出看板模块核心接口
pub use self::dashboard::{TrainingDashboard, TypeBucket};

// 导出工具模块核心接口
pub use self::utils::{format_time, format_distance, DateParser};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod classifier;
pub mod record;
pub mod dashboard;
pub mod profile;
pub mod utils;
