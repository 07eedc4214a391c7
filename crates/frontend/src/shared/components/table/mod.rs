pub mod money_cell;
pub mod sortable_header_cell;

pub use money_cell::MoneyCell;
pub use sortable_header_cell::SortableHeaderCell;
