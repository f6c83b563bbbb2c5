//! Query State
//!
//! Lifecycle of a single fetch: pending, error or success.

use super::QueryError;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Request issued, nothing to show yet
    Pending,
    /// Request or decoding failed
    Error(QueryError),
    /// Data available
    Success(T),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T> QueryState<T> {
    pub fn from_result(result: Result<T, QueryError>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(err),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&QueryError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pending() {
        let state: QueryState<Vec<u32>> = QueryState::default();
        assert!(state.is_pending());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_from_result() {
        let ok = QueryState::from_result(Ok(vec![1, 2]));
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&vec![1, 2]));

        let err: QueryState<Vec<u32>> = QueryState::from_result(Err(QueryError::new("boom")));
        assert!(err.is_error());
        assert_eq!(err.error().map(|e| e.message()), Some("boom"));
    }
}
