//! 周训练类型统计
//! 每笔记录按分类结果归入一个统计桶

use crate::classifier::{TrainingTypeCategory, TrainingTypeClassifier};
use crate::record::{TrainingRecord, WeeklyTrainingTypeStats};

/// 统计桶
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeBucket {
    LongRun,
    Tempo,
    Intensity,
    Recovery,
    WeightTraining,
    Trail,
    Race,
    Yoga,
    Other,
}

impl TypeBucket {
    /// 分类 -> 统计桶（先看自身代码，再看父分类）
    pub fn from_category(category: Option<&TrainingTypeCategory>) -> Self {
        let Some(category) = category else {
            return TypeBucket::Other;
        };
        match category.code.as_str() {
            "LR" => TypeBucket::LongRun,
            "T" => TypeBucket::Tempo,
            "INT" => TypeBucket::Intensity,
            "REC" => TypeBucket::Recovery,
            "WT" => TypeBucket::WeightTraining,
            "TRAIL" => TypeBucket::Trail,
            "RACE" => TypeBucket::Race,
            "YOGA" => TypeBucket::Yoga,
            _ if category.parent_code.as_deref() == Some("INT") => TypeBucket::Intensity,
            _ => TypeBucket::Other,
        }
    }
}

/// 对单笔记录分类：先用 name，未命中再用 description
///
/// ```
/// use training_record::dashboard::classify_record;
/// use training_record::{TrainingRecord, TrainingTypeClassifier, TypeBucket};
///
/// let record: TrainingRecord = serde_json::from_str(
///     r#"{"id": 7, "name": "zzz", "startDate": "2025-06-01", "description": "週日長距離 30K"}"#,
/// ).unwrap();
/// let classifier = TrainingTypeClassifier::with_default_table();
/// let category = classify_record(&classifier, &record);
/// assert_eq!(category.map(|c| c.code.as_str()), Some("LR"));
/// assert_eq!(TypeBucket::from_category(category), TypeBucket::LongRun);
/// ```
pub fn classify_record<'a>(classifier: &'a TrainingTypeClassifier, record: &TrainingRecord) -> Option<&'a TrainingTypeCategory> {
    classifier
        .best_match(&record.name)
        .or_else(|| classifier.best_match(&record.description))
}

/// 统计一组记录
pub fn count_types<'r>(
    classifier: &TrainingTypeClassifier,
    records: impl IntoIterator<Item = &'r TrainingRecord>,
) -> WeeklyTrainingTypeStats {
    let mut stats = WeeklyTrainingTypeStats::default();
    for record in records {
        let bucket = TypeBucket::from_category(classify_record(classifier, record));
        let slot = match bucket {
            TypeBucket::LongRun => &mut stats.long_run,
            TypeBucket::Tempo => &mut stats.tempo,
            TypeBucket::Intensity => &mut stats.intensity,
            TypeBucket::Recovery => &mut stats.recovery,
            TypeBucket::WeightTraining => &mut stats.weight_training,
            TypeBucket::Trail => &mut stats.trail,
            TypeBucket::Race => &mut stats.race,
            TypeBucket::Yoga => &mut stats.yoga,
            TypeBucket::Other => &mut stats.other,
        };
        *slot += 1;
    }
    stats
}
