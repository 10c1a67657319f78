pub mod filter_panel;
pub mod form_field;
pub mod modal_frame;
pub mod page_header;
pub mod pagination_controls;
pub mod panel_group;
pub mod record_list;
pub mod table;
pub mod table_filter_panel;

pub use filter_panel::{FilterPanel, FilterTag};
pub use form_field::FormField;
pub use modal_frame::ModalFrame;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use panel_group::PanelGroup;
pub use record_list::{date_text, field_text, flag_text, status_text, Column, RecordList};
pub use table_filter_panel::TableFilterPanel;
