//! 训练数据模型定义
//! 仅存储数据，无业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 单笔训练记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecord {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub plan_week: u32,
    pub start_date: String,
    #[serde(default)]
    pub sport_type: String,
    #[serde(default)]
    pub run_type: Option<String>,
    #[serde(default)]
    pub parent_run_type: Option<String>,
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub moving_time: String,
    #[serde(default)]
    pub elevation_gain: f64,
    #[serde(default)]
    pub pace: String,
    #[serde(default)]
    pub average_heart_rate: Option<f64>,
    #[serde(default)]
    pub max_heart_rate: Option<f64>,
    #[serde(default)]
    pub is_main_training: bool,
    #[serde(default)]
    pub description: String,
}

// ======== 为 TrainingRecord 实现 Display trait（用于 CLI 输出） ========
impl fmt::Display for TrainingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:.1}km", self.start_date, self.name, self.distance)
    }
}

/// 月份训练数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrainingData {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub month_distance: f64,
    #[serde(default)]
    pub month_moving_time: String,
    #[serde(default)]
    pub month_main_training_count: u32,
    #[serde(default)]
    pub month_elevation_gain: f64,
    #[serde(default)]
    pub training_records: Vec<TrainingRecord>,
}

/// 周训练数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTrainingData {
    pub plan_week: u32,
    #[serde(default)]
    pub week_start_date: String,
    #[serde(default)]
    pub week_end_date: String,
    #[serde(default)]
    pub week_distance: f64,
    #[serde(default)]
    pub week_moving_time: String,
    #[serde(default)]
    pub week_main_training_count: u32,
    #[serde(default)]
    pub week_elevation_gain: f64,
    #[serde(default)]
    pub training_records: Vec<TrainingRecord>,
}

/// 整理后的训练数据
///
/// 月份列表在不同来源中字段名不同：`monthlyData`、`monthlyTrainingRecords`、
/// `trainingRecords`，统一读入 `monthly_data`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingResponseData {
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub total_distance: f64,
    #[serde(default)]
    pub total_moving_time: String,
    #[serde(default)]
    pub main_training_count: u32,
    #[serde(default)]
    pub total_elevation_gain: f64,
    #[serde(default, alias = "monthlyTrainingRecords", alias = "trainingRecords")]
    pub monthly_data: Vec<MonthlyTrainingData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_training_records: Option<Vec<WeeklyTrainingData>>,
}

/// 接口回应外层
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingApiResponse {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<TrainingResponseData>,
}

/// 总结
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSummary {
    pub total_distance: f64,
    pub total_moving_time: String,
    pub main_training_count: u32,
    pub total_elevation_gain: f64,
}

impl From<&TrainingResponseData> for TrainingSummary {
    fn from(data: &TrainingResponseData) -> Self {
        Self {
            total_distance: data.total_distance,
            total_moving_time: data.total_moving_time.clone(),
            main_training_count: data.main_training_count,
            total_elevation_gain: data.total_elevation_gain,
        }
    }
}

/// 图表资料点（每日距离）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub date: String,
    pub distance: f64,
}

/// 周训练类型统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTrainingTypeStats {
    pub long_run: u32,
    pub tempo: u32,
    pub intensity: u32,
    pub recovery: u32,
    pub weight_training: u32,
    pub trail: u32,
    pub race: u32,
    pub yoga: u32,
    pub other: u32,
}

impl WeeklyTrainingTypeStats {
    pub fn total(&self) -> u32 {
        self.long_run
            + self.tempo
            + self.intensity
            + self.recovery
            + self.weight_training
            + self.trail
            + self.race
            + self.yoga
            + self.other
    }
}
