pub mod sortable_header_cell;
pub mod table_checkbox;

pub use sortable_header_cell::{next_sorting, SortableHeaderCell};
pub use table_checkbox::TableCheckbox;
