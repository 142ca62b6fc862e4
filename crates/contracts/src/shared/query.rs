//! Data-access seam between list pages and wherever records come from.
//!
//! Pages only talk to [`ResourceQuery`]. The in-memory [`StaticRegistry`]
//! serves the built-in records and rejects every mutation.

use super::error::RegistryError;
use super::filter::{filter_records, ListQuery, Resource};

/// Mutations offered by page buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordAction {
    Create,
    Update(String),
    Delete(String),
    Cancel(String),
    Reschedule(String),
    StartSession(String),
    PauseSession(String),
    OrderFood(String),
    Print(String),
}

impl RecordAction {
    pub fn name(&self) -> &'static str {
        match self {
            RecordAction::Create => "create",
            RecordAction::Update(_) => "update",
            RecordAction::Delete(_) => "delete",
            RecordAction::Cancel(_) => "cancel",
            RecordAction::Reschedule(_) => "reschedule",
            RecordAction::StartSession(_) => "start session",
            RecordAction::PauseSession(_) => "pause session",
            RecordAction::OrderFood(_) => "order food",
            RecordAction::Print(_) => "print",
        }
    }

    /// Id of the record the action targets, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            RecordAction::Create => None,
            RecordAction::Update(id)
            | RecordAction::Delete(id)
            | RecordAction::Cancel(id)
            | RecordAction::Reschedule(id)
            | RecordAction::StartSession(id)
            | RecordAction::PauseSession(id)
            | RecordAction::OrderFood(id)
            | RecordAction::Print(id) => Some(id),
        }
    }
}

pub trait ResourceQuery<R: Resource> {
    /// Records matching `query`, in source order.
    fn list(&self, query: &ListQuery<R>) -> Vec<R>;

    fn get_by_id(&self, id: &str) -> Result<R, RegistryError>;

    fn apply(&self, action: RecordAction) -> Result<(), RegistryError>;
}

/// Read-only registry over records built once at startup.
#[derive(Debug)]
pub struct StaticRegistry<R: 'static> {
    records: &'static [R],
}

impl<R> Clone for StaticRegistry<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for StaticRegistry<R> {}

impl<R: Resource> StaticRegistry<R> {
    pub fn new(records: &'static [R]) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &'static [R] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Resource> ResourceQuery<R> for StaticRegistry<R> {
    fn list(&self, query: &ListQuery<R>) -> Vec<R> {
        filter_records(self.records, query)
    }

    fn get_by_id(&self, id: &str) -> Result<R, RegistryError> {
        self.records
            .iter()
            .find(|r| r.record_id() == id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound {
                resource: R::RESOURCE,
                id: id.to_string(),
            })
    }

    fn apply(&self, action: RecordAction) -> Result<(), RegistryError> {
        if let Some(id) = action.target() {
            self.get_by_id(id)?;
        }
        Err(RegistryError::ReadOnly {
            resource: R::RESOURCE,
            action: action.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_room;

    #[test]
    fn test_get_by_id() {
        let rooms = a003_room::registry();
        assert_eq!(rooms.get_by_id("VIP-002").unwrap().room_id, "VIP-002");
        assert_eq!(
            rooms.get_by_id("nope"),
            Err(RegistryError::NotFound {
                resource: a003_room::Room::RESOURCE,
                id: "nope".to_string(),
            })
        );
    }

    #[test]
    fn test_apply_is_read_only() {
        let rooms = a003_room::registry();
        assert!(matches!(
            rooms.apply(RecordAction::Create),
            Err(RegistryError::ReadOnly { action: "create", .. })
        ));
        assert!(matches!(
            rooms.apply(RecordAction::Delete("VIP-002".into())),
            Err(RegistryError::ReadOnly { action: "delete", .. })
        ));
        assert!(matches!(
            rooms.apply(RecordAction::Delete("nope".into())),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_identity_list_is_whole_registry() {
        let rooms = a003_room::registry();
        assert_eq!(rooms.list(&ListQuery::default()), rooms.records().to_vec());
    }
}
