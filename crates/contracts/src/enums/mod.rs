pub mod page_size;
pub mod sales_sort;

pub use page_size::PageSize;
pub use sales_sort::{SalesSort, SortDirection, SortKey};
