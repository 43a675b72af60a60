use crate::ids::{CategoryId, SnippetId};
use crate::snippet::{NewCategory, NewSnippet, Snippet, SnippetCategory};

/// Outcome of a category deletion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRemoval {
    /// Built-in category, nothing changed.
    Protected,
    /// `category_removed` is false when no category had the id; snippets that
    /// still pointed at it are removed regardless.
    Removed {
        category_removed: bool,
        cascaded_snippets: usize,
    },
}

impl CategoryRemoval {
    pub fn changed_categories(&self) -> bool {
        matches!(
            self,
            CategoryRemoval::Removed {
                category_removed: true,
                ..
            }
        )
    }

    pub fn changed_snippets(&self) -> bool {
        matches!(self, CategoryRemoval::Removed { cascaded_snippets, .. } if *cascaded_snippets > 0)
    }
}

/// Snippets and the categories that group them, both in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetLibrary {
    snippets: Vec<Snippet>,
    categories: Vec<SnippetCategory>,
}

impl Default for SnippetLibrary {
    fn default() -> Self {
        Self {
            snippets: Vec::new(),
            categories: SnippetCategory::seeded(),
        }
    }
}

impl SnippetLibrary {
    pub fn from_parts(snippets: Vec<Snippet>, categories: Vec<SnippetCategory>) -> Self {
        Self {
            snippets,
            categories,
        }
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn categories(&self) -> &[SnippetCategory] {
        &self.categories
    }

    pub fn snippet(&self, id: &SnippetId) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.id() == id)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&SnippetCategory> {
        self.categories.iter().find(|c| c.id() == id)
    }

    pub fn add_snippet(&mut self, draft: NewSnippet) -> SnippetId {
        let id = SnippetId::new();
        self.snippets.push(draft.into_snippet(id.clone()));
        id
    }

    /// Replaces the record with the same id. Returns false if none matched.
    pub fn update_snippet(&mut self, snippet: Snippet) -> bool {
        match self.snippets.iter_mut().find(|s| s.id() == snippet.id()) {
            Some(slot) => {
                *slot = snippet;
                true
            }
            None => false,
        }
    }

    pub fn delete_snippet(&mut self, id: &SnippetId) -> bool {
        let before = self.snippets.len();
        self.snippets.retain(|s| s.id() != id);
        self.snippets.len() != before
    }

    pub fn add_category(&mut self, draft: NewCategory) -> CategoryId {
        let id = CategoryId::new();
        self.categories.push(draft.into_category(id.clone()));
        id
    }

    pub fn update_category(&mut self, category: SnippetCategory) -> bool {
        match self.categories.iter_mut().find(|c| c.id() == category.id()) {
            Some(slot) => {
                *slot = category;
                true
            }
            None => false,
        }
    }

    /// Removes a category and every snippet filed under it.
    pub fn delete_category(&mut self, id: &CategoryId) -> CategoryRemoval {
        if id.is_protected() {
            return CategoryRemoval::Protected;
        }

        let categories_before = self.categories.len();
        self.categories.retain(|c| c.id() != id);

        let snippets_before = self.snippets.len();
        self.snippets.retain(|s| s.category_id() != id);

        CategoryRemoval::Removed {
            category_removed: self.categories.len() != categories_before,
            cascaded_snippets: snippets_before - self.snippets.len(),
        }
    }

    pub fn snippets_for_category(&self, category_id: &CategoryId) -> Vec<&Snippet> {
        self.snippets
            .iter()
            .filter(|s| s.category_id() == category_id)
            .collect()
    }
}
