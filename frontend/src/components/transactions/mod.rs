pub mod category_chart;
pub mod transaction_table;
pub mod transaction_view_container;

pub use transaction_table::TransactionTable;
pub use transaction_view_container::TransactionViewContainer;
