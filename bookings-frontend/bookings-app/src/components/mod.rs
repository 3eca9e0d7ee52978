pub mod event_type_filter;
pub mod filter_checkbox;
pub mod popover;
