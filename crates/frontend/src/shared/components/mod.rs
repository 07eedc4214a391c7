pub mod enum_filter;
pub mod pagination_controls;
pub mod search_input;
pub mod table;
