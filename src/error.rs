use std::fmt;

/// The poster catalog could not be read or failed validation.
#[derive(Debug)]
pub struct CatalogError;

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid poster catalog")
    }
}

impl std::error::Error for CatalogError {}

/// The host refused to navigate to the booking page.
#[derive(Debug)]
pub struct NavigationError;

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "navigation to booking page failed")
    }
}

impl std::error::Error for NavigationError {}

pub type Result<T, E> = std::result::Result<T, error_stack::Report<E>>;
