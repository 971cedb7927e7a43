//! training-record 命令行入口
//! 训练名称分类、训练数据总结与数据路径探测

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use training_record::profile;
use training_record::{
    ConfigManager, RecordLoader, TrainingDashboard, classify_training_type, format_distance, format_time,
    global_classifier, training_type_label,
};

#[derive(Debug, Parser)]
#[command(name = "training-record", version, about = "训练纪录整理与训练类型分类")]
struct Cli {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 列出训练名称命中的全部分类
    Classify {
        text: String,
    },
    /// 输出训练名称的显示分类
    Label {
        text: String,
    },
    /// 加载训练数据并输出总结
    Summary {
        #[arg(short, long, default_value = "pan")]
        person: String,
        #[arg(short, long, default_value = "2025taipei")]
        target: String,
        /// 站点根路径
        #[arg(long)]
        base_url: Option<String>,
        /// 本地数据目录（{dir}/{person}/{target}.json）
        #[arg(long)]
        data_dir: Option<std::path::PathBuf>,
        /// 以 JSON 输出
        #[arg(long)]
        json: bool,
    },
    /// 探测远程数据路径是否可用
    Probe {
        #[arg(short, long, default_value = "pan")]
        person: String,
        #[arg(short, long, default_value = "2025taipei")]
        target: String,
        #[arg(long)]
        base_url: Option<String>,
        #[arg(long, default_value_t = 30)]
        timeout: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Classify { text } => {
            let categories = classify_training_type(&text);
            if categories.is_empty() {
                println!("{}", global_classifier().table().fallback_label());
            }
            for category in categories {
                match &category.parent_code {
                    Some(parent) => println!("{}\t{}\t{}\t{}", category.code, category.name, category.localized_name, parent),
                    None => println!("{}\t{}\t{}", category.code, category.name, category.localized_name),
                }
            }
        }
        Command::Label { text } => {
            println!("{}", training_type_label(&text));
        }
        Command::Summary { person, target, base_url, data_dir, json } => {
            profile::ensure_target(&person, &target)?;

            let mut builder = ConfigManager::custom().verbose(cli.verbose);
            if let Some(url) = base_url {
                builder = builder.base_url(url);
            }
            if let Some(dir) = data_dir {
                builder = builder.data_dir(dir);
            }
            let config = builder.build();

            info!("加载训练数据：{} / {}", person, target);
            let data = RecordLoader::load(&config, &person, &target)
                .await
                .with_context(|| format!("无法加载 {} 的 {} 训练数据", person, target))?;
            let dashboard = TrainingDashboard::new(data);
            let stats = dashboard.weekly_type_stats(global_classifier());

            if json {
                let output = serde_json::json!({
                    "summary": dashboard.summary(),
                    "chartData": dashboard.chart_data(),
                    "weeklyTypeStats": stats,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            let person_config = profile::PERSON_CONFIG.get(person.as_str());
            let emoji = person_config.map(|p| p.emoji).unwrap_or("");
            println!("{} {}{}", emoji, profile::person_display_name(&person), profile::target_display_name(&target));
            if let Some(time) = profile::person_race_time(&person, &target) {
                println!("完賽時間：{}", time);
            }

            let summary = dashboard.summary();
            println!("總距離：{} km", format_distance(summary.total_distance));
            println!("總時間：{}", format_time(&summary.total_moving_time));
            println!("主課表：{} 次", summary.main_training_count);
            println!("總爬升：{} m", format_distance(summary.total_elevation_gain));

            for (week, week_stats) in &stats {
                println!(
                    "第 {} 週：長距離 {}，節奏跑 {}，強度 {}，恢復 {}，其他 {}",
                    week, week_stats.long_run, week_stats.tempo, week_stats.intensity, week_stats.recovery, week_stats.other
                );
            }
        }
        Command::Probe { person, target, base_url, timeout } => {
            let mut builder = ConfigManager::custom().http_timeout(timeout);
            if let Some(url) = base_url {
                builder = builder.base_url(url);
            }
            let result = RecordLoader::probe(&builder.build(), &person, &target).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
