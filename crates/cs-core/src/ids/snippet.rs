use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of the built-in "General" category.
pub const GENERAL_CATEGORY_ID: &str = "general";
/// Identifier of the built-in "Code Fragments" category.
pub const CODE_CATEGORY_ID: &str = "code";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl_id!(SnippetId, CategoryId);

impl CategoryId {
    pub fn general() -> Self {
        Self::from(GENERAL_CATEGORY_ID)
    }

    pub fn code() -> Self {
        Self::from(CODE_CATEGORY_ID)
    }

    /// Built-in categories can be renamed but never deleted.
    /// 内置分类可以重命名，但不能删除。
    pub fn is_protected(&self) -> bool {
        self.0 == GENERAL_CATEGORY_ID || self.0 == CODE_CATEGORY_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_builtin_categories_are_protected() {
        assert!(CategoryId::general().is_protected());
        assert!(CategoryId::code().is_protected());
        assert!(!CategoryId::from("Docs").is_protected());
        assert!(!CategoryId::new().is_protected());
    }
}
