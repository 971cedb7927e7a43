//! 训练看板视图模型
//! 整合训练数据与分类器，输出总结、分组与图表数据

use std::collections::BTreeMap;
use tracing::warn;

use super::type_stats::count_types;
use crate::classifier::TrainingTypeClassifier;
use crate::record::{
    ChartDataPoint, MonthlyTrainingData, TrainingRecord, TrainingResponseData, TrainingSummary,
    WeeklyTrainingData, WeeklyTrainingTypeStats,
};
use crate::utils::{DateParser, DistanceAccumulator};

/// 训练看板
#[derive(Debug, Clone)]
pub struct TrainingDashboard {
    data: TrainingResponseData,
}

impl From<TrainingResponseData> for TrainingDashboard {
    fn from(data: TrainingResponseData) -> Self {
        Self::new(data)
    }
}

impl TrainingDashboard {
    /// 创建看板（周数据按 planWeek 升序整理一次）
    pub fn new(mut data: TrainingResponseData) -> Self {
        if let Some(weeks) = data.weekly_training_records.as_mut() {
            weeks.sort_by_key(|w| w.plan_week);
        }
        Self { data }
    }

    pub fn data(&self) -> &TrainingResponseData {
        &self.data
    }

    pub fn target(&self) -> &str {
        &self.data.target
    }

    pub fn summary(&self) -> TrainingSummary {
        TrainingSummary::from(&self.data)
    }

    /// 全部记录（按月份顺序展开）
    pub fn all_records(&self) -> impl Iterator<Item = &TrainingRecord> {
        self.data
            .monthly_data
            .iter()
            .flat_map(|month| month.training_records.iter())
    }

    pub fn monthly_data(&self) -> &[MonthlyTrainingData] {
        &self.data.monthly_data
    }

    /// 周数据（无周数据时为空）
    pub fn weekly_data(&self) -> &[WeeklyTrainingData] {
        self.data.weekly_training_records.as_deref().unwrap_or(&[])
    }

    /// 每日距离（UTC 日期，升序）
    pub fn chart_data(&self) -> Vec<ChartDataPoint> {
        let mut acc = DistanceAccumulator::new();
        for record in self.all_records() {
            match DateParser::to_utc_date(&record.start_date) {
                Some(date) => acc.add(date, record.distance),
                None => warn!("无法解析训练日期，已跳过：id={}，startDate={}", record.id, record.start_date),
            }
        }
        acc.into_chart_points()
    }

    /// 按 planWeek 统计训练类型
    ///
    /// 有周数据时使用周数据中的记录，否则按记录自身的 planWeek 分组。
    pub fn weekly_type_stats(&self, classifier: &TrainingTypeClassifier) -> BTreeMap<u32, WeeklyTrainingTypeStats> {
        let weeks = self.weekly_data();
        if !weeks.is_empty() {
            return weeks
                .iter()
                .map(|week| (week.plan_week, count_types(classifier, &week.training_records)))
                .collect();
        }

        let mut grouped: BTreeMap<u32, Vec<&TrainingRecord>> = BTreeMap::new();
        for record in self.all_records() {
            grouped.entry(record.plan_week).or_default().push(record);
        }
        grouped
            .into_iter()
            .map(|(week, records)| (week, count_types(classifier, records)))
            .collect()
    }
}
