use crate::shared::date_utils::format_sale_date;
use contracts::dashboards::d410_retail_sales::SaleRecordDto;

pub const NO_DATA_LABEL: &str = "No data found";

/// Number of table columns, for the placeholder row's span
pub const COLUMN_COUNT: usize = 6;

/// One sale, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRow {
    pub customer: String,
    pub product: String,
    pub category: String,
    pub region: String,
    pub quantity: String,
    pub date: String,
}

impl From<&SaleRecordDto> for SaleRow {
    fn from(record: &SaleRecordDto) -> Self {
        Self {
            customer: record.customer_name.clone(),
            product: record.product_name.clone(),
            category: record.product_category.clone(),
            region: record.customer_region.clone(),
            quantity: record
                .quantity
                .map(|q| q.to_string())
                .unwrap_or_else(|| "-".to_string()),
            date: format_sale_date(record.date.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Sale(SaleRow),
    /// Single placeholder row spanning all columns
    NoData,
}

/// Rows of the table body; an empty page yields exactly one `NoData` row.
pub fn project_rows(records: &[SaleRecordDto]) -> Vec<TableRow> {
    if records.is_empty() {
        return vec![TableRow::NoData];
    }
    records
        .iter()
        .map(|record| TableRow::Sale(SaleRow::from(record)))
        .collect()
}
