use thiserror::Error;

pub type PageResult<T> = Result<T, PageError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Page has no document.")]
    NoDocument,
    #[error("No element with id `{0}` on the page.")]
    MissingElement(String),
    #[error("Element `{0}` is not an input.")]
    NotAnInput(String),
}

