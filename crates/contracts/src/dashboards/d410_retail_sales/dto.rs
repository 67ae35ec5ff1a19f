use crate::enums::SalesSort;
use serde::{Deserialize, Deserializer, Serialize};

/// Query string for `GET /api/sales`
///
/// Empty filters are left out entirely; `sort`, `page` and `page_size`
/// are always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesQueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Comma-joined region names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<String>,
    /// Comma-joined category names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    pub sort: SalesSort,
    pub page: u32,
    #[serde(alias = "limit")]
    pub page_size: u32,
}

/// One page of sales as returned by the backend
///
/// Accepts both the current shape (`items` / `total_pages`) and the
/// legacy one (`data` / `totalPages`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesPageResponse {
    #[serde(default, alias = "data", deserialize_with = "null_as_default")]
    pub items: Vec<SaleRecordDto>,
    #[serde(default, alias = "totalPages")]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl SalesPageResponse {
    /// Page count reported by the backend, or derived from `total` when the
    /// backend left it out. Never less than 1.
    pub fn resolved_total_pages(&self, page_size: u32) -> u32 {
        match (self.total_pages, self.total) {
            (Some(pages), _) => pages.max(1),
            (None, Some(total)) if page_size > 0 => {
                let pages = total.div_ceil(u64::from(page_size)).max(1);
                u32::try_from(pages).unwrap_or(u32::MAX)
            }
            _ => 1,
        }
    }

    pub fn total_items(&self) -> u64 {
        self.total.unwrap_or(self.items.len() as u64)
    }
}

/// Raw sale record, field names as the dataset spells them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleRecordDto {
    #[serde(rename = "Customer Name", default, deserialize_with = "lenient_text")]
    pub customer_name: String,
    #[serde(rename = "Product Name", default, deserialize_with = "lenient_text")]
    pub product_name: String,
    #[serde(rename = "Product Category", default, deserialize_with = "lenient_text")]
    pub product_category: String,
    #[serde(rename = "Customer Region", default, deserialize_with = "lenient_text")]
    pub customer_region: String,
    #[serde(rename = "Quantity", default, deserialize_with = "lenient_quantity")]
    pub quantity: Option<i64>,
    /// Day-month-year, e.g. `05-03-2024`
    #[serde(rename = "Date", default, deserialize_with = "lenient_date")]
    pub date: Option<String>,
}

/// Selectable values for the category and region filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub regions: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// A record with one odd field still decodes; the table shows a fallback for it.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

// Quantity arrives as a number in the main dataset and as a string in CSV imports.
// Fractional values are not quantities and count as missing.
fn lenient_quantity<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{SortDirection, SortKey};

    #[test]
    fn test_decodes_current_shape() {
        let body = r#"{
            "items": [{
                "Customer Name": "Neha Shah",
                "Product Name": "Headphones",
                "Product Category": "Electronics",
                "Customer Region": "North",
                "Quantity": 3,
                "Date": "05-03-2024"
            }],
            "total_pages": 7,
            "total": 64
        }"#;
        let page: SalesPageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].customer_name, "Neha Shah");
        assert_eq!(page.items[0].quantity, Some(3));
        assert_eq!(page.items[0].date.as_deref(), Some("05-03-2024"));
        assert_eq!(page.resolved_total_pages(10), 7);
        assert_eq!(page.total_items(), 64);
    }

    #[test]
    fn test_decodes_legacy_shape() {
        let body = r#"{ "data": [{ "Customer Name": "A" }, { "Customer Name": "B" }], "totalPages": 3 }"#;
        let page: SalesPageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.resolved_total_pages(10), 3);
        assert_eq!(page.total_items(), 2);
    }

    #[test]
    fn test_missing_fields_degrade_to_empty_page() {
        let page: SalesPageResponse = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.resolved_total_pages(10), 1);

        let page: SalesPageResponse = serde_json::from_str(r#"{ "items": null }"#).unwrap();
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_total_pages_derived_from_total() {
        let page = SalesPageResponse {
            items: Vec::new(),
            total_pages: None,
            total: Some(41),
        };
        assert_eq!(page.resolved_total_pages(20), 3);
        assert_eq!(page.resolved_total_pages(50), 1);

        let zero = SalesPageResponse {
            total_pages: Some(0),
            ..Default::default()
        };
        assert_eq!(zero.resolved_total_pages(10), 1);
    }

    #[test]
    fn test_quantity_accepts_strings() {
        let record: SaleRecordDto =
            serde_json::from_str(r#"{ "Quantity": " 12 ", "Customer Name": null }"#).unwrap();
        assert_eq!(record.quantity, Some(12));
        assert_eq!(record.customer_name, "");

        let record: SaleRecordDto = serde_json::from_str(r#"{ "Quantity": "many" }"#).unwrap();
        assert_eq!(record.quantity, None);
    }

    #[test]
    fn test_wrong_typed_fields_do_not_fail_the_page() {
        let body = r#"{
            "items": [
                { "Customer Name": "A", "Date": 20240305 },
                { "Customer Name": 42, "Product Name": ["x"], "Date": "05-03-2024" }
            ],
            "total_pages": 1,
            "total": 2
        }"#;
        let page: SalesPageResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].customer_name, "A");
        assert_eq!(page.items[0].date, None);
        assert_eq!(page.items[1].customer_name, "");
        assert_eq!(page.items[1].product_name, "");
        assert_eq!(page.items[1].date.as_deref(), Some("05-03-2024"));
    }

    #[test]
    fn test_fractional_quantity_is_missing() {
        let record: SaleRecordDto = serde_json::from_str(r#"{ "Quantity": 2.7 }"#).unwrap();
        assert_eq!(record.quantity, None);

        let record: SaleRecordDto = serde_json::from_str(r#"{ "Quantity": 4.0 }"#).unwrap();
        assert_eq!(record.quantity, Some(4));
    }

    #[test]
    fn test_query_params_skip_empty_filters() {
        let params = SalesQueryParams {
            q: None,
            regions: Some("North,East".to_string()),
            categories: None,
            sort: SalesSort::new(SortKey::Customer, SortDirection::Asc),
            page: 2,
            page_size: 20,
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "regions": "North,East",
                "sort": "customer_asc",
                "page": 2,
                "page_size": 20
            })
        );
    }

    #[test]
    fn test_filter_options() {
        let options: FilterOptionsResponse =
            serde_json::from_str(r#"{ "categories": ["Books"], "regions": null }"#).unwrap();
        assert_eq!(options.categories, vec!["Books".to_string()]);
        assert!(options.regions.is_empty());
    }
}
