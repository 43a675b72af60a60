use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, SnippetId};
use crate::validation::{is_blank, ValidationError};

/// A named, reusable text or code fragment.
///
/// `category_id` is not checked against existing categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    id: SnippetId,
    name: String,
    content: String,
    category_id: CategoryId,
}

impl Snippet {
    /// Builds a full record, e.g. the result of an edit form.
    pub fn new(
        id: SnippetId,
        name: impl Into<String>,
        content: impl Into<String>,
        category_id: CategoryId,
    ) -> Result<Self, ValidationError> {
        let draft = NewSnippet::new(name, content, category_id)?;
        Ok(draft.into_snippet(id))
    }

    pub fn id(&self) -> &SnippetId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    /// Case-insensitive substring match on name or content.
    pub fn matches(&self, needle_lowercase: &str) -> bool {
        self.name.to_lowercase().contains(needle_lowercase)
            || self.content.to_lowercase().contains(needle_lowercase)
    }
}

/// A validated snippet that has not been assigned an id yet.
/// 尚未分配 id 的已校验片段。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    name: String,
    content: String,
    category_id: CategoryId,
}

impl NewSnippet {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        category_id: CategoryId,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let content = content.into();

        if is_blank(&name) {
            return Err(ValidationError::EmptySnippetName);
        }
        if is_blank(&content) {
            return Err(ValidationError::EmptySnippetContent);
        }
        if category_id.as_str().is_empty() {
            return Err(ValidationError::EmptyCategoryRef);
        }

        Ok(Self {
            name,
            content,
            category_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn into_snippet(self, id: SnippetId) -> Snippet {
        Snippet {
            id,
            name: self.name,
            content: self.content,
            category_id: self.category_id,
        }
    }
}

/// A named grouping of snippets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetCategory {
    id: CategoryId,
    name: String,
}

impl SnippetCategory {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let draft = NewCategory::new(name)?;
        Ok(draft.into_category(id))
    }

    /// Categories present on first run.
    pub fn seeded() -> Vec<SnippetCategory> {
        vec![
            SnippetCategory {
                id: CategoryId::general(),
                name: "General".to_string(),
            },
            SnippetCategory {
                id: CategoryId::code(),
                name: "Code Fragments".to_string(),
            },
        ]
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_protected(&self) -> bool {
        self.id.is_protected()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    name: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if is_blank(&name) {
            return Err(ValidationError::EmptyCategoryName);
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_category(self, id: CategoryId) -> SnippetCategory {
        SnippetCategory {
            id,
            name: self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snippet_requires_name_and_content() {
        assert_eq!(
            NewSnippet::new("  ", "body", CategoryId::general()),
            Err(ValidationError::EmptySnippetName)
        );
        assert_eq!(
            NewSnippet::new("name", "\n\t", CategoryId::general()),
            Err(ValidationError::EmptySnippetContent)
        );
        assert_eq!(
            NewSnippet::new("name", "body", CategoryId::from("")),
            Err(ValidationError::EmptyCategoryRef)
        );
        assert!(NewSnippet::new("name", "body", CategoryId::code()).is_ok());
    }

    #[test]
    fn snippet_keeps_untrimmed_text() {
        let snippet =
            Snippet::new(SnippetId::from("s1"), " fn ", "  let x = 1;\n", CategoryId::code())
                .unwrap();
        assert_eq!(snippet.name(), " fn ");
        assert_eq!(snippet.content(), "  let x = 1;\n");
    }

    #[test]
    fn snippet_serializes_category_id_in_camel_case() {
        let snippet =
            Snippet::new(SnippetId::from("s1"), "x", "y", CategoryId::from("docs")).unwrap();
        let json = serde_json::to_value(&snippet).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "s1", "name": "x", "content": "y", "categoryId": "docs"})
        );
    }

    #[test]
    fn seeded_categories_are_protected() {
        let seeded = SnippetCategory::seeded();
        assert_eq!(seeded.len(), 2);
        assert_eq!(seeded[0].name(), "General");
        assert_eq!(seeded[1].name(), "Code Fragments");
        assert!(seeded.iter().all(SnippetCategory::is_protected));
    }

    #[test]
    fn category_name_must_not_be_blank() {
        assert_eq!(
            NewCategory::new(" "),
            Err(ValidationError::EmptyCategoryName)
        );
    }

    #[test]
    fn matches_name_or_content_ignoring_case() {
        let snippet =
            Snippet::new(SnippetId::new(), "React Component", "<div/>", CategoryId::code())
                .unwrap();
        assert!(snippet.matches("react"));
        assert!(snippet.matches("div"));
        assert!(!snippet.matches("vue"));
    }
}
