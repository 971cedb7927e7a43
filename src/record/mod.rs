//! 训练数据模块：负责训练数据的加载、数据模型定义
pub mod model;
pub mod loader;

// 导出核心接口
pub use self::model::{
    ChartDataPoint, MonthlyTrainingData, TrainingApiResponse, TrainingRecord, TrainingResponseData,
    TrainingSummary, WeeklyTrainingData, WeeklyTrainingTypeStats,
};
pub use self::loader::{ProbeResult, RecordLoader};
