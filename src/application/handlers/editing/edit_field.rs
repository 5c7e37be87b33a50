//! EditFieldHandler - Command handler for free-text field edits.

use crate::domain::document::{DocumentStateStore, StoreError};
use crate::domain::foundation::FieldKey;

/// Command to replace a field's text.
#[derive(Debug, Clone)]
pub struct EditFieldCommand {
    pub field: FieldKey,
    pub value: String,
}

/// Result of a successful field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditFieldResult {
    pub revision: u64,
}

/// Handler for field edits.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditFieldHandler;

impl EditFieldHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        store: &mut DocumentStateStore,
        cmd: EditFieldCommand,
    ) -> Result<EditFieldResult, StoreError> {
        store.set_field(cmd.field.as_str(), cmd.value)?;

        tracing::debug!(field = %cmd.field, revision = store.revision(), "field edited");
        Ok(EditFieldResult {
            revision: store.revision(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ContentCatalog;

    fn store() -> DocumentStateStore {
        DocumentStateStore::initialize(&ContentCatalog::gawd_doc().unwrap()).unwrap()
    }

    #[test]
    fn edits_known_field() {
        let mut store = store();
        let result = EditFieldHandler::new()
            .handle(
                &mut store,
                EditFieldCommand {
                    field: "s1_1".into(),
                    value: "Grades flow from LLM to LMS".into(),
                },
            )
            .unwrap();

        assert_eq!(result.revision, 1);
        assert_eq!(store.field("s1_1"), Some("Grades flow from LLM to LMS"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut store = store();
        let err = EditFieldHandler::new()
            .handle(
                &mut store,
                EditFieldCommand {
                    field: "nope".into(),
                    value: "x".into(),
                },
            )
            .unwrap_err();

        assert_eq!(err, StoreError::UnknownField("nope".into()));
    }
}
