//! 人员与目标赛事设定
//! 静态只读表，首次访问时构建

use std::collections::HashMap;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{TrResult, TrainingRecordError};
use crate::utils::DateParser;

/// 人员设定
#[derive(Debug, Clone, Serialize)]
pub struct PersonConfig {
    pub display_name: &'static str,
    pub emoji: &'static str,
    pub nick_name: Option<&'static str>,
    pub targets: Vec<&'static str>,
    pub race_links: HashMap<&'static str, &'static str>,
    pub race_time: HashMap<&'static str, &'static str>,
    pub pics: HashMap<&'static str, Vec<&'static str>>,
}

/// 目标赛事设定
#[derive(Debug, Clone, Serialize)]
pub struct TargetConfig {
    pub display_name: &'static str,
    pub race_date: &'static str,
    pub link: Option<&'static str>,
}

/// 人员设定表
pub static PERSON_CONFIG: Lazy<HashMap<&'static str, PersonConfig>> = Lazy::new(|| {
    let mut persons = HashMap::new();
    persons.insert(
        "pan",
        PersonConfig {
            display_name: "Pan",
            emoji: "👨",
            nick_name: None,
            targets: vec!["2025taipei", "2025sydney", "2026tokyo"],
            race_links: HashMap::from([(
                "2025sydney",
                "https://www.instagram.com/p/DOTegmfE5CU/?igsh=MWd6bzlsbDV3ZXBrag==",
            )]),
            race_time: HashMap::from([("2025taipei", "3:34:12"), ("2025sydney", "3:19:47")]),
            pics: HashMap::from([
                ("2025sydney", vec!["/training-record/pic/pan1.jpg"]),
                ("2025taipei", vec!["/training-record/pic/pan2.jpg"]),
            ]),
        },
    );
    persons.insert(
        "sung",
        PersonConfig {
            display_name: "Sung",
            emoji: "👩",
            nick_name: None,
            targets: vec!["2025taipei", "2026wanginshi"],
            race_links: HashMap::from([(
                "2025taipei",
                "https://www.instagram.com/p/DSwlD30Ei5c/?igsh=MTRmd2lzdXRoNXQ2Zg==",
            )]),
            race_time: HashMap::from([("2025taipei", "3:34:15")]),
            pics: HashMap::from([(
                "2025taipei",
                vec![
                    "/training-record/pic/sung1.jpg",
                    "/training-record/pic/sung2.jpg",
                    "/training-record/pic/sung3.jpg",
                    "/training-record/pic/sung4.jpg",
                    "/training-record/pic/sung5.jpg",
                    "/training-record/pic/sung6.jpg",
                ],
            )]),
        },
    );
    persons
});

/// 目标赛事设定表
pub static TARGET_CONFIG: Lazy<HashMap<&'static str, TargetConfig>> = Lazy::new(|| {
    HashMap::from([
        ("2025taipei", TargetConfig { display_name: "2025 臺北", race_date: "2025-12-21T06:30:00", link: None }),
        ("2025sydney", TargetConfig { display_name: "2025 雪梨", race_date: "2025-08-31T04:30:00", link: None }),
        ("2026tokyo", TargetConfig { display_name: "2026 東京", race_date: "2026-03-01T08:10:00", link: None }),
        ("2026wanginshi", TargetConfig { display_name: "2026 萬金石", race_date: "2026-03-15T06:00:00", link: None }),
    ])
});

/// 人员的可用目标
pub fn available_targets(person: &str) -> &'static [&'static str] {
    PERSON_CONFIG
        .get(person)
        .map(|p| p.targets.as_slice())
        .unwrap_or(&[])
}

/// 目标显示名称（前置空格），未知目标返回原值
pub fn target_display_name(target: &str) -> String {
    match TARGET_CONFIG.get(target) {
        Some(config) => format!(" {}", config.display_name),
        None => target.to_string(),
    }
}

/// 人员显示名称，未知人员返回原值
pub fn person_display_name(person: &str) -> &str {
    PERSON_CONFIG
        .get(person)
        .map(|p| p.display_name)
        .unwrap_or(person)
}

pub fn has_target(person: &str, target: &str) -> bool {
    available_targets(person).iter().any(|t| *t == target)
}

pub fn person_race_link(person: &str, target: &str) -> Option<&'static str> {
    PERSON_CONFIG
        .get(person)
        .and_then(|p| p.race_links.get(target).copied())
}

/// 赛事开跑时间（当地时间，无时区）
pub fn race_date(target: &str) -> Option<NaiveDateTime> {
    TARGET_CONFIG
        .get(target)
        .and_then(|t| DateParser::parse_naive_datetime(t.race_date))
}

pub fn person_race_time(person: &str, target: &str) -> Option<&'static str> {
    PERSON_CONFIG
        .get(person)
        .and_then(|p| p.race_time.get(target).copied())
}

/// 人员昵称，空字符串视为无
pub fn person_nick_name(person: &str) -> Option<&'static str> {
    PERSON_CONFIG
        .get(person)
        .and_then(|p| p.nick_name)
        .filter(|n| !n.is_empty())
}

pub fn person_pics(person: &str, target: &str) -> Option<&'static [&'static str]> {
    PERSON_CONFIG
        .get(person)
        .and_then(|p| p.pics.get(target))
        .map(|pics| pics.as_slice())
}

/// 校验人员与目标组合
pub fn ensure_target(person: &str, target: &str) -> TrResult<()> {
    if !PERSON_CONFIG.contains_key(person) {
        return Err(TrainingRecordError::UnknownPerson(person.to_string()));
    }
    if !has_target(person, target) {
        return Err(TrainingRecordError::UnknownTarget {
            person: person.to_string(),
            target: target.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_person_lookups() {
        assert_eq!(available_targets("pan"), &["2025taipei", "2025sydney", "2026tokyo"]);
        assert!(available_targets("nobody").is_empty());
        assert_eq!(person_display_name("sung"), "Sung");
        assert_eq!(person_display_name("nobody"), "nobody");
        assert!(has_target("sung", "2026wanginshi"));
        assert!(!has_target("sung", "2026tokyo"));
        assert_eq!(person_nick_name("pan"), None);
    }

    #[test]
    fn test_race_lookups() {
        assert_eq!(person_race_time("pan", "2025sydney"), Some("3:19:47"));
        assert_eq!(person_race_time("pan", "2026tokyo"), None);
        assert!(person_race_link("sung", "2025taipei").unwrap().starts_with("https://"));
        assert_eq!(person_pics("sung", "2025taipei").map(|p| p.len()), Some(6));
        assert_eq!(person_pics("sung", "2025taipei").unwrap()[5], "/training-record/pic/sung6.jpg");

        let date = race_date("2025taipei").unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2025, 12, 21).unwrap());
        assert_eq!(race_date("unknown"), None);
    }

    #[test]
    fn test_target_display_name() {
        assert_eq!(target_display_name("2025sydney"), " 2025 雪梨");
        assert_eq!(target_display_name("unknown"), "unknown");
    }

    #[test]
    fn test_ensure_target() {
        assert!(ensure_target("pan", "2025taipei").is_ok());
        assert!(matches!(ensure_target("nobody", "x"), Err(TrainingRecordError::UnknownPerson(_))));
        assert!(matches!(
            ensure_target("pan", "2026wanginshi"),
            Err(TrainingRecordError::UnknownTarget { .. })
        ));
    }
}
