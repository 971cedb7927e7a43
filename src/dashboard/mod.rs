//! 看板模块：训练数据视图与类型统计
pub mod view;
pub mod type_stats;

pub use self::view::TrainingDashboard;
pub use self::type_stats::{classify_record, count_types, TypeBucket};
