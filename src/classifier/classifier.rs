//! 训练类型分类器
//! 优先关键字短路 + 通用分类表子串匹配

use std::sync::Arc;
use tracing::debug;

use super::category::{CategoryTable, TrainingTypeCategory};
use super::table::DEFAULT_CATEGORY_TABLE;

/// 训练类型分类器（只读共享分类表，可跨线程使用）
#[derive(Debug, Clone)]
pub struct TrainingTypeClassifier {
    table: Arc<CategoryTable>,
}

impl Default for TrainingTypeClassifier {
    fn default() -> Self {
        Self::with_default_table()
    }
}

impl TrainingTypeClassifier {
    pub fn new(table: Arc<CategoryTable>) -> Self {
        Self { table }
    }

    /// 使用内置分类表
    pub fn with_default_table() -> Self {
        Self::new(Arc::clone(&DEFAULT_CATEGORY_TABLE))
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// 对训练名称分类，返回按匹配顺序排列的分类（不重复）
    ///
    /// 1. 先按顺序扫描优先关键字表，命中即收集
    /// 2. 优先阶段有命中则直接返回，不再查通用表
    /// 3. 否则扫描全部分类，name 或 code 为子串即收集
    pub fn classify(&self, text: &str) -> Vec<&TrainingTypeCategory> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        // 中文无大小写，小写化不影响
        let lowered = text.to_lowercase();

        let mut hits: Vec<usize> = Vec::new();
        for (keyword, idx) in self.table.priority_entries() {
            if lowered.contains(keyword.as_str()) && !hits.contains(idx) {
                hits.push(*idx);
            }
        }

        if !hits.is_empty() {
            debug!("优先关键字命中：文本={}，分类数={}", text, hits.len());
            return self.resolve(&hits);
        }

        for (idx, (name, code)) in self.table.lowered_entries().iter().enumerate() {
            let name_hit = !name.is_empty() && lowered.contains(name.as_str());
            let code_hit = !code.is_empty() && lowered.contains(code.as_str());
            if name_hit || code_hit {
                hits.push(idx);
            }
        }

        debug!("通用分类表匹配：文本={}，分类数={}", text, hits.len());
        self.resolve(&hits)
    }

    /// 选出用于显示的分类：优先第一个有父分类的，否则第一个命中
    pub fn best_match(&self, text: &str) -> Option<&TrainingTypeCategory> {
        let matches = self.classify(text);
        matches
            .iter()
            .find(|c| c.has_parent())
            .or_else(|| matches.first())
            .copied()
    }

    /// 显示名称，无命中时返回兜底名称
    pub fn display_label(&self, text: &str) -> &str {
        match self.best_match(text) {
            Some(category) => category.localized_name.as_str(),
            None => self.table.fallback_label(),
        }
    }

    fn resolve(&self, hits: &[usize]) -> Vec<&TrainingTypeCategory> {
        hits.iter().map(|idx| self.table.category_at(*idx)).collect()
    }
}
