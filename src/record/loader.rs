//! 训练数据加载管理器
//! 负责从本地数据目录或远程站点读取训练 JSON，并整理为统一结构

use std::path::PathBuf;
use std::time::Duration;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::model::{TrainingApiResponse, TrainingResponseData};
use crate::config::GlobalConfig;
use crate::error::{TrResult, TrainingRecordError};

/// 路径探测结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeResult {
    pub success: bool,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 训练数据加载管理器
pub struct RecordLoader;

impl RecordLoader {
    /// 加载训练数据（优先本地数据目录，失败则拉取远程）
    pub async fn load(config: &GlobalConfig, person: &str, target: &str) -> TrResult<TrainingResponseData> {
        // 本地路径与远程地址共用同一组路径段
        Self::validate_segment(person)?;
        Self::validate_segment(target)?;

        // 1. 优先读取本地数据目录
        if let Some(path) = Self::local_path(config, person, target) {
            match Self::load_local(&path).await {
                Ok(data) => {
                    debug!("从本地文件加载训练数据成功：{}", path.display());
                    return Ok(data);
                }
                Err(e) => {
                    warn!("本地训练数据读取失败：{}，{}，将拉取远程数据", path.display(), e);
                }
            }
        }

        // 2. 拉取远程数据
        let client = Self::build_client(config)?;
        let url = Self::remote_url(config, person, target)?;
        Self::fetch_remote(&client, &url).await
    }

    /// 读取本地 JSON 文件
    pub async fn load_local(path: &std::path::Path) -> TrResult<TrainingResponseData> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse(&content)
    }

    /// 拉取远程 JSON
    pub async fn fetch_remote(client: &Client, url: &Url) -> TrResult<TrainingResponseData> {
        debug!("开始拉取训练数据，URL：{}", url);
        let response = client
            .get(url.clone())
            .header("User-Agent", concat!("training-record/", env!("CARGO_PKG_VERSION")))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrainingRecordError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let data = Self::parse(&body)?;
        debug!("训练数据拉取成功，月份数：{}", data.monthly_data.len());
        Ok(data)
    }

    /// 解析训练 JSON（兼容多种字段命名）
    pub fn parse(json: &str) -> TrResult<TrainingResponseData> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.is_null() {
            return Err(TrainingRecordError::RecordLoadError("返回结果为 null".to_string()));
        }

        let response: TrainingApiResponse = serde_json::from_value(value)?;
        if !response.success && !response.message.is_empty() {
            debug!("训练数据回应标记失败：code={}，message={}", response.code, response.message);
        }
        response.data.ok_or(TrainingRecordError::MissingData)
    }

    /// 探测数据路径是否可用，不返回错误
    pub async fn probe(config: &GlobalConfig, person: &str, target: &str) -> ProbeResult {
        let url = match Self::remote_url(config, person, target) {
            Ok(url) => url,
            Err(e) => {
                return ProbeResult {
                    success: false,
                    url: format!("{}mock/{}/{}.json", config.base_url, person, target),
                    error: Some(e.to_string()),
                };
            }
        };

        let result = match Self::build_client(config) {
            Ok(client) => Self::fetch_remote(&client, &url).await.map(|_| ()),
            Err(e) => Err(e),
        };

        ProbeResult {
            success: result.is_ok(),
            url: url.to_string(),
            error: result.err().map(|e| e.to_string()),
        }
    }

    /// 远程数据地址：{base_url}/mock/{person}/{target}.json
    pub fn remote_url(config: &GlobalConfig, person: &str, target: &str) -> TrResult<Url> {
        Self::validate_segment(person)?;
        Self::validate_segment(target)?;

        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let url = Url::parse(&base)?.join(&format!("mock/{}/{}.json", person, target))?;
        Ok(url)
    }

    fn local_path(config: &GlobalConfig, person: &str, target: &str) -> Option<PathBuf> {
        config
            .data_dir
            .as_ref()
            .map(|dir| dir.join(person).join(format!("{}.json", target)))
    }

    fn build_client(config: &GlobalConfig) -> TrResult<Client> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout))
            .build()?;
        Ok(client)
    }

    // 人员/目标只允许作为单个路径段
    fn validate_segment(segment: &str) -> TrResult<()> {
        if segment.is_empty() || segment.contains(['/', '\\', ':']) || segment == "." || segment == ".." {
            return Err(TrainingRecordError::InvalidInput(format!("无效路径段：{}", segment)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const SYDNEY_SHAPE: &str = r#"{
        "code": "0000",
        "message": "ok",
        "success": true,
        "data": {
            "target": "2025sydney",
            "totalDistance": 21.5,
            "totalMovingTime": "02:01:30",
            "mainTrainingCount": 1,
            "totalElevationGain": 120,
            "trainingRecords": [
                {
                    "year": 2025,
                    "month": 6,
                    "monthDistance": 21.5,
                    "monthMovingTime": "02:01:30",
                    "monthMainTrainingCount": 1,
                    "monthElevationGain": 120,
                    "trainingRecords": [
                        {
                            "id": 1,
                            "name": "Tempo 8x1km",
                            "planWeek": 3,
                            "startDate": "2025-06-01T06:00:00Z",
                            "sportType": "Run",
                            "runType": "T",
                            "parentRunType": "INT",
                            "distance": 12.0,
                            "movingTime": "01:02:00",
                            "elevationGain": 60,
                            "pace": "5:10",
                            "averageHeartRate": 160,
                            "maxHeartRate": null,
                            "isMainTraining": true,
                            "description": ""
                        }
                    ]
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_sydney_shape() {
        let data = RecordLoader::parse(SYDNEY_SHAPE).unwrap();
        assert_eq!(data.target, "2025sydney");
        assert_eq!(data.monthly_data.len(), 1);
        let record = &data.monthly_data[0].training_records[0];
        assert_eq!(record.run_type.as_deref(), Some("T"));
        assert_eq!(record.average_heart_rate, Some(160.0));
        assert_eq!(record.max_heart_rate, None);
        assert!(data.weekly_training_records.is_none());
    }

    #[test]
    fn test_parse_monthly_training_records_shape() {
        let json = r#"{"data": {"target": "2025taipei", "monthlyTrainingRecords": [
            {"year": 2025, "month": 9, "trainingRecords": []},
            {"year": 2025, "month": 10, "trainingRecords": []}
        ]}}"#;
        let data = RecordLoader::parse(json).unwrap();
        assert_eq!(data.monthly_data.len(), 2);
        assert_eq!(data.monthly_data[1].month, 10);
    }

    #[test]
    fn test_parse_native_shape() {
        let json = r#"{"data": {"target": "2026tokyo", "monthlyData": [
            {"year": 2026, "month": 1, "trainingRecords": []}
        ]}}"#;
        let data = RecordLoader::parse(json).unwrap();
        assert_eq!(data.monthly_data[0].year, 2026);
    }

    #[test]
    fn test_parse_missing_data_and_null() {
        let err = RecordLoader::parse(r#"{"code": "0000", "success": true}"#).unwrap_err();
        assert!(matches!(err, TrainingRecordError::MissingData));

        let err = RecordLoader::parse("null").unwrap_err();
        assert!(matches!(err, TrainingRecordError::RecordLoadError(_)));

        let err = RecordLoader::parse("{not json").unwrap_err();
        assert!(matches!(err, TrainingRecordError::JsonError(_)));
    }

    #[test]
    fn test_remote_url() {
        let config = ConfigManager::custom().base_url("https://example.org/training-record").build();
        let url = RecordLoader::remote_url(&config, "pan", "2025sydney").unwrap();
        assert_eq!(url.as_str(), "https://example.org/training-record/mock/pan/2025sydney.json");

        assert!(RecordLoader::remote_url(&config, "../etc", "x").is_err());
        assert!(RecordLoader::remote_url(&config, "pan", "").is_err());
    }

    #[tokio::test]
    async fn test_load_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let person_dir = dir.path().join("pan");
        std::fs::create_dir_all(&person_dir).unwrap();
        std::fs::write(person_dir.join("2025sydney.json"), SYDNEY_SHAPE).unwrap();

        let config = ConfigManager::custom().data_dir(dir.path()).build();
        let data = RecordLoader::load(&config, "pan", "2025sydney").await.unwrap();
        assert_eq!(data.total_distance, 21.5);
    }

    /// 单次回应的本地 HTTP 服务，返回站点根路径
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });
        format!("http://{}/training-record/", addr)
    }

    #[tokio::test]
    async fn test_load_rejects_path_escape() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::write(dir.path().join("secret.json"), SYDNEY_SHAPE).unwrap();

        let config = ConfigManager::custom()
            .data_dir(&data_dir)
            .base_url("http://127.0.0.1:9/training-record/")
            .http_timeout(1)
            .build();
        for (person, target) in [("..", "secret"), ("pan", "../../secret"), ("/tmp", "secret"), (".", "secret")] {
            let err = RecordLoader::load(&config, person, target).await.unwrap_err();
            assert!(matches!(err, TrainingRecordError::InvalidInput(_)), "{} / {} 未被拒绝", person, target);
        }
    }

    #[tokio::test]
    async fn test_fetch_remote_non_success_status() {
        let base_url = serve_once("HTTP/1.1 404 Not Found", "not found").await;
        let config = ConfigManager::custom().base_url(base_url).http_timeout(5).build();
        let client = RecordLoader::build_client(&config).unwrap();
        let url = RecordLoader::remote_url(&config, "pan", "2025sydney").unwrap();

        let err = RecordLoader::fetch_remote(&client, &url).await.unwrap_err();
        match err {
            TrainingRecordError::HttpStatus { url: failed, status } => {
                assert_eq!(status, 404);
                assert!(failed.ends_with("/training-record/mock/pan/2025sydney.json"));
            }
            other => panic!("应为 HttpStatus，实际为 {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_remote_parses_body() {
        let base_url = serve_once("HTTP/1.1 200 OK", SYDNEY_SHAPE).await;
        let config = ConfigManager::custom().base_url(base_url).http_timeout(5).build();
        let client = RecordLoader::build_client(&config).unwrap();
        let url = RecordLoader::remote_url(&config, "pan", "2025sydney").unwrap();

        let data = RecordLoader::fetch_remote(&client, &url).await.unwrap();
        assert_eq!(data.target, "2025sydney");
        assert_eq!(data.monthly_data[0].training_records[0].name, "Tempo 8x1km");
    }

    #[tokio::test]
    async fn test_load_falls_back_to_remote_when_local_missing() {
        let dir = tempfile::tempdir().unwrap();
        let base_url = serve_once("HTTP/1.1 200 OK", SYDNEY_SHAPE).await;
        let config = ConfigManager::custom()
            .data_dir(dir.path())
            .base_url(base_url)
            .http_timeout(5)
            .build();

        let data = RecordLoader::load(&config, "pan", "2025sydney").await.unwrap();
        assert_eq!(data.target, "2025sydney");
        assert_eq!(data.total_distance, 21.5);
    }

    #[tokio::test]
    async fn test_probe_reports_failure_without_error() {
        let config = ConfigManager::custom()
            .base_url("http://127.0.0.1:9/training-record/")
            .http_timeout(1)
            .build();
        let result = RecordLoader::probe(&config, "pan", "2025sydney").await;
        assert!(!result.success);
        assert_eq!(result.url, "http://127.0.0.1:9/training-record/mock/pan/2025sydney.json");
        assert!(result.error.is_some());
    }
}
