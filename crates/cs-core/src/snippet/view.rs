use crate::snippet::{Snippet, SnippetCategory};

/// One category with the snippets that survive the current search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub category: SnippetCategory,
    pub snippets: Vec<Snippet>,
}

/// Read model for the snippet library screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetLibraryView {
    pub sections: Vec<CategorySection>,
    /// Unfiltered number of snippets filed under an existing category.
    pub total_snippets: usize,
}

impl SnippetLibraryView {
    /// Groups snippets by category in category order.
    ///
    /// With a non-empty search term, categories without a matching snippet
    /// are left out.
    pub fn build(categories: &[SnippetCategory], snippets: &[Snippet], term: &str) -> Self {
        let needle = term.to_lowercase();
        let mut total_snippets = 0;

        let sections = categories
            .iter()
            .filter_map(|category| {
                let in_category: Vec<&Snippet> = snippets
                    .iter()
                    .filter(|s| s.category_id() == category.id())
                    .collect();
                total_snippets += in_category.len();

                let matching: Vec<Snippet> = in_category
                    .into_iter()
                    .filter(|s| needle.is_empty() || s.matches(&needle))
                    .cloned()
                    .collect();

                if !term.is_empty() && matching.is_empty() {
                    return None;
                }
                Some(CategorySection {
                    category: category.clone(),
                    snippets: matching,
                })
            })
            .collect();

        Self {
            sections,
            total_snippets,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_snippets == 0
    }
}
