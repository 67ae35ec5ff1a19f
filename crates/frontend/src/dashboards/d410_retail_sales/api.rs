use super::error::FetchError;
use crate::shared::api_utils::{api_url, api_url_with_query};
use contracts::dashboards::d410_retail_sales::{
    FilterOptionsResponse, SalesPageResponse, SalesQueryParams,
};
use gloo_net::http::Request;
use web_sys::AbortSignal;

const SALES_PATH: &str = "/api/sales";
const FILTER_OPTIONS_PATH: &str = "/api/sales/";

/// URL of one sales page for the given parameters
pub fn sales_url(base: &str, params: &SalesQueryParams) -> Result<String, FetchError> {
    Ok(api_url_with_query(base, SALES_PATH, params)?)
}

/// Fetch one page of sales
///
/// `signal` aborts the underlying fetch when the request is superseded.
pub async fn fetch_sales(
    base: &str,
    params: &SalesQueryParams,
    signal: Option<&AbortSignal>,
) -> Result<SalesPageResponse, FetchError> {
    let url = sales_url(base, params)?;
    log::debug!("GET {}", url);

    let response = Request::get(&url).abort_signal(signal).send().await?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch the values offered by the category and region filters
pub async fn fetch_filter_options(base: &str) -> Result<FilterOptionsResponse, FetchError> {
    let url = api_url(base, FILTER_OPTIONS_PATH);

    let response = Request::get(&url).send().await?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let data: FilterOptionsResponse = response.json().await?;
    Ok(data)
}
