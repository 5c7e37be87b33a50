//! Editing command handlers over an explicit document store.

mod edit_field;
mod table_rows;

pub use edit_field::{EditFieldCommand, EditFieldHandler, EditFieldResult};
pub use table_rows::{
    AddRowCommand, AddRowHandler, SetCellCommand, SetCellHandler, TableEditResult,
};
