//! 每日距离累加工具

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use chrono::NaiveDate;

use crate::record::ChartDataPoint;

/// 每日距离累加器（按日期升序）
#[derive(Debug, Default, Clone)]
pub struct DistanceAccumulator {
    daily: BTreeMap<NaiveDate, f64>,
}

impl DistanceAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 累加某日距离
    pub fn add(&mut self, date: NaiveDate, distance: f64) {
        match self.daily.entry(date) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += distance;
            }
            Entry::Vacant(entry) => {
                entry.insert(distance);
            }
        }
    }

    /// 转换为图表资料点
    pub fn into_chart_points(self) -> Vec<ChartDataPoint> {
        self.daily
            .into_iter()
            .map(|(date, distance)| ChartDataPoint {
                date: date.format("%Y-%m-%d").to_string(),
                distance,
            })
            .collect()
    }
}
