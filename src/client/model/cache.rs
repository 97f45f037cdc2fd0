use crate::client::model::error::ApiError;

/// Result of a one-shot fetch as seen by a page.
#[derive(Clone, Default)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for Cache<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(error) => Cache::Error(error),
        }
    }
}
