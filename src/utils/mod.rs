//! 通用工具模块
pub mod format;
pub mod date_parser;
pub mod distance_accumulator;

pub use self::format::{format_distance, format_time};
pub use self::date_parser::DateParser;
pub use self::distance_accumulator::DistanceAccumulator;
