use thiserror::Error;

/// Rejected user input for a snippet or category form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("snippet name must not be empty")]
    EmptySnippetName,

    #[error("snippet content must not be empty")]
    EmptySnippetContent,

    #[error("snippet category must not be empty")]
    EmptyCategoryRef,

    #[error("category name must not be empty")]
    EmptyCategoryName,
}

/// Required text fields count as empty when they are blank after trimming.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
