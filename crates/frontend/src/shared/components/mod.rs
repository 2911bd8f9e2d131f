pub mod completion_bar;
pub mod field_selection_editor;
pub mod pagination_controls;
