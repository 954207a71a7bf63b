//! Shared TUI components

pub mod modal;
pub mod table;

pub use modal::{Modal, ModalProps};
pub use table::{Cell, Column, ColumnWidth, DataTable, DataTableProps, render_rows};
