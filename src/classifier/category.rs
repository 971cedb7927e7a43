//! 训练类型分类表模型
//! 分类记录 + 优先关键字表，构建后只读

use serde::{Deserialize, Serialize};

use crate::error::{TrResult, TrainingRecordError};

/// 未命中任何分类时的显示名称
pub const FALLBACK_LABEL: &str = "其他";

/// 训练类型分类（两层森林：要么无父分类，要么父分类本身无父分类）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingTypeCategory {
    pub code: String,
    pub name: String,
    pub localized_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
}

impl TrainingTypeCategory {
    pub fn new(code: impl Into<String>, name: impl Into<String>, localized_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            localized_name: localized_name.into(),
            parent_code: None,
        }
    }

    pub fn with_parent(mut self, parent_code: impl Into<String>) -> Self {
        self.parent_code = Some(parent_code.into());
        self
    }

    /// 是否为具体子分类
    pub fn has_parent(&self) -> bool {
        self.parent_code.is_some()
    }
}

/// 优先关键字定义（交换格式）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityKeywordDef {
    pub keyword: String,
    pub code: String,
}

/// 分类表交换格式（测试夹具 / 外部配置）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTableDef {
    pub categories: Vec<TrainingTypeCategory>,
    #[serde(default)]
    pub priority_keywords: Vec<PriorityKeywordDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_label: Option<String>,
}

/// 构建完成的分类表
#[derive(Debug, Clone)]
pub struct CategoryTable {
    categories: Vec<TrainingTypeCategory>,
    // (小写 name, 小写 code)，与 categories 下标一一对应
    lowered: Vec<(String, String)>,
    // (小写关键字, 分类下标)，保持定义顺序
    priority: Vec<(String, usize)>,
    fallback_label: String,
}

impl CategoryTable {
    pub fn builder() -> CategoryTableBuilder {
        CategoryTableBuilder::new()
    }

    /// 从 JSON 交换格式构建
    pub fn from_json(json: &str) -> TrResult<Self> {
        let def: CategoryTableDef = serde_json::from_str(json)?;
        Self::try_from(def)
    }

    pub fn categories(&self) -> &[TrainingTypeCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&TrainingTypeCategory> {
        self.categories.iter().find(|c| c.code == code)
    }

    /// 是否为伞状分类（被其他分类引用为父分类）
    pub fn is_umbrella(&self, code: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.parent_code.as_deref() == Some(code))
    }

    /// 按定义顺序遍历优先关键字
    pub fn priority_keywords(&self) -> impl Iterator<Item = (&str, &TrainingTypeCategory)> {
        self.priority
            .iter()
            .map(|(keyword, idx)| (keyword.as_str(), &self.categories[*idx]))
    }

    pub fn fallback_label(&self) -> &str {
        &self.fallback_label
    }

    pub(crate) fn category_at(&self, idx: usize) -> &TrainingTypeCategory {
        &self.categories[idx]
    }

    pub(crate) fn priority_entries(&self) -> &[(String, usize)] {
        &self.priority
    }

    pub(crate) fn lowered_entries(&self) -> &[(String, String)] {
        &self.lowered
    }

    /// 导出为交换格式
    pub fn to_def(&self) -> CategoryTableDef {
        CategoryTableDef {
            categories: self.categories.clone(),
            priority_keywords: self
                .priority_keywords()
                .map(|(keyword, category)| PriorityKeywordDef {
                    keyword: keyword.to_string(),
                    code: category.code.clone(),
                })
                .collect(),
            fallback_label: Some(self.fallback_label.clone()),
        }
    }
}

impl TryFrom<CategoryTableDef> for CategoryTable {
    type Error = TrainingRecordError;

    fn try_from(def: CategoryTableDef) -> TrResult<Self> {
        let mut builder = CategoryTableBuilder::new();
        for category in def.categories {
            builder = builder.push(category);
        }
        for entry in def.priority_keywords {
            builder = builder.priority(entry.keyword, entry.code);
        }
        if let Some(label) = def.fallback_label {
            builder = builder.fallback_label(label);
        }
        builder.build()
    }
}

/// 分类表构建器
#[derive(Debug, Clone)]
pub struct CategoryTableBuilder {
    categories: Vec<TrainingTypeCategory>,
    priority: Vec<(String, String)>,
    fallback_label: String,
}

impl Default for CategoryTableBuilder {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            priority: Vec::new(),
            fallback_label: FALLBACK_LABEL.to_string(),
        }
    }
}

impl CategoryTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加无父分类（伞状或独立分类）
    pub fn category(self, code: &str, name: &str, localized_name: &str) -> Self {
        self.push(TrainingTypeCategory::new(code, name, localized_name))
    }

    /// 添加子分类
    pub fn child(self, code: &str, name: &str, localized_name: &str, parent_code: &str) -> Self {
        self.push(TrainingTypeCategory::new(code, name, localized_name).with_parent(parent_code))
    }

    pub fn push(mut self, category: TrainingTypeCategory) -> Self {
        self.categories.push(category);
        self
    }

    /// 追加优先关键字，顺序即匹配顺序
    pub fn priority(mut self, keyword: impl Into<String>, code: impl Into<String>) -> Self {
        self.priority.push((keyword.into(), code.into()));
        self
    }

    pub fn fallback_label(mut self, label: impl Into<String>) -> Self {
        self.fallback_label = label.into();
        self
    }

    pub fn build(self) -> TrResult<CategoryTable> {
        let lowered = self
            .categories
            .iter()
            .map(|c| (c.name.to_lowercase(), c.code.to_lowercase()))
            .collect();

        let mut priority = Vec::with_capacity(self.priority.len());
        for (keyword, code) in self.priority {
            if keyword.trim().is_empty() {
                return Err(TrainingRecordError::InvalidInput(format!(
                    "优先关键字不能为空（分类 {}）",
                    code
                )));
            }
            let idx = self
                .categories
                .iter()
                .position(|c| c.code == code)
                .ok_or(TrainingRecordError::UnknownCategory(code))?;
            priority.push((keyword.to_lowercase(), idx));
        }

        Ok(CategoryTable {
            categories: self.categories,
            lowered,
            priority,
            fallback_label: self.fallback_label,
        })
    }
}
