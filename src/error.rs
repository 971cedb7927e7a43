//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use url::ParseError as UrlParseError;

#[derive(Error, Debug)]
pub enum TrainingRecordError {
    // 数据加载相关错误
    #[error("训练数据加载失败：{0}")]
    RecordLoadError(String),
    #[error("URL {url} 返回状态码 {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("训练数据缺少 data 字段")]
    MissingData,

    // 分类表相关错误
    #[error("未知训练类型代码：{0}")]
    UnknownCategory(String),

    // 人员/目标相关错误
    #[error("未知人员：{0}")]
    UnknownPerson(String),
    #[error("人员 {person} 没有目标 {target}")]
    UnknownTarget { person: String, target: String },

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),

    // 基础错误
    #[error("IO操作失败：{0}")]
    IoError(#[from] IoError),
    #[error("URL解析失败：{0}")]
    UrlError(#[from] UrlParseError),
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

// 全局Result类型
pub type TrResult<T> = Result<T, TrainingRecordError>;
