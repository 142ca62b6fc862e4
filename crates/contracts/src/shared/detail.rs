//! Open/closed state of a record detail modal.

/// The modal is either closed or open on exactly one record.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<R> {
    Closed,
    Open(R),
}

impl<R> Default for DetailState<R> {
    fn default() -> Self {
        DetailState::Closed
    }
}

impl<R> DetailState<R> {
    /// Opens on `record`, replacing whatever was shown.
    pub fn open(&mut self, record: R) {
        *self = DetailState::Open(record);
    }

    pub fn close(&mut self) {
        *self = DetailState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DetailState::Open(_))
    }

    pub fn selected(&self) -> Option<&R> {
        match self {
            DetailState::Open(record) => Some(record),
            DetailState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        let mut state: DetailState<&str> = DetailState::default();
        assert!(!state.is_open());
        assert_eq!(state.selected(), None);

        state.open("BK001");
        assert!(state.is_open());
        assert_eq!(state.selected(), Some(&"BK001"));

        state.open("BK002");
        assert_eq!(state.selected(), Some(&"BK002"));

        state.close();
        assert_eq!(state, DetailState::Closed);
        state.close();
        assert_eq!(state, DetailState::Closed);
    }
}
