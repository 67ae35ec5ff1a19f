//! Request lifecycle for the sales table
//!
//! Turns a [`QueryState`] snapshot into request parameters, keeps at most
//! one request live, and reconciles responses back into the displayed page.
//! Every request carries the generation it was issued under; a response is
//! applied only while that generation is still the current one, so a slow
//! superseded request can never overwrite fresher results.

use super::error::{FetchError, LOAD_ERROR_MESSAGE};
use super::state::QueryState;
use contracts::dashboards::d410_retail_sales::{SaleRecordDto, SalesPageResponse, SalesQueryParams};

/// Transport-level cancellation for an in-flight request
pub trait CancelHandle {
    fn cancel(&self);
}

impl<H: CancelHandle> CancelHandle for Option<H> {
    fn cancel(&self) {
        if let Some(handle) = self {
            handle.cancel();
        }
    }
}

impl CancelHandle for web_sys::AbortController {
    fn cancel(&self) {
        self.abort();
    }
}

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    generation: u64,
}

impl RequestToken {
    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedRequest {
    pub token: RequestToken,
    pub params: SalesQueryParams,
}

/// What happened to a settled request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied { total_pages: u32 },
    Failed,
    Discarded,
}

/// Last successfully received page
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPage {
    pub records: Vec<SaleRecordDto>,
    pub total_pages: u32,
    pub total_items: u64,
}

impl Default for ResultPage {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            total_pages: 1,
            total_items: 0,
        }
    }
}

impl ResultPage {
    fn from_response(response: SalesPageResponse, page_size: u32) -> Self {
        Self {
            total_pages: response.resolved_total_pages(page_size),
            total_items: response.total_items(),
            records: response.items,
        }
    }
}

struct LiveRequest<H> {
    token: RequestToken,
    scope: SalesQueryParams,
    handle: H,
}

/// Everything a page count depends on: the parameters without the page.
fn scope_of(params: &SalesQueryParams) -> SalesQueryParams {
    SalesQueryParams {
        page: 1,
        ..params.clone()
    }
}

pub struct RequestLifecycle<H> {
    generation: u64,
    live: Option<LiveRequest<H>>,
    result: ResultPage,
    /// Query the current `result` answers, page aside
    applied_scope: Option<SalesQueryParams>,
    loading: bool,
    error: Option<String>,
}

impl<H> Default for RequestLifecycle<H> {
    fn default() -> Self {
        Self {
            generation: 0,
            live: None,
            result: ResultPage::default(),
            applied_scope: None,
            loading: false,
            error: None,
        }
    }
}

impl<H: CancelHandle> RequestLifecycle<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> &ResultPage {
        &self.result
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Page count to bound navigation for `query`.
    ///
    /// The displayed page count belongs to the query that produced it; until
    /// a response for `query`'s filters, sort and page size arrives there is
    /// only one known page.
    pub fn total_pages_for(&self, query: &QueryState) -> u32 {
        match &self.applied_scope {
            Some(scope) if *scope == scope_of(&serialize_query(query)) => self.result.total_pages,
            _ => 1,
        }
    }

    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub fn has_live_request(&self) -> bool {
        self.live.is_some()
    }

    /// Cancels the live request, if any, and registers a new one for `query`.
    pub fn issue(&mut self, query: &QueryState, handle: H) -> IssuedRequest {
        self.cancel_live();
        self.generation += 1;

        let token = RequestToken {
            generation: self.generation,
        };
        let params = serialize_query(query);
        self.live = Some(LiveRequest {
            token,
            scope: scope_of(&params),
            handle,
        });
        self.loading = true;

        log::debug!(
            "issued sales request #{} (page {}, sort {})",
            token.generation,
            params.page,
            params.sort
        );
        IssuedRequest { token, params }
    }

    /// Reconciles the outcome of the request identified by `token`.
    ///
    /// Outcomes of anything but the live request are dropped untouched.
    pub fn settle(
        &mut self,
        token: RequestToken,
        outcome: Result<SalesPageResponse, FetchError>,
    ) -> Settlement {
        let live = match self.live.take() {
            Some(live) if live.token == token => live,
            other => {
                self.live = other;
                log::debug!(
                    "discarded stale sales response #{} (current #{})",
                    token.generation,
                    self.generation
                );
                return Settlement::Discarded;
            }
        };
        self.loading = false;

        match outcome {
            Ok(response) => {
                self.result = ResultPage::from_response(response, live.scope.page_size);
                self.applied_scope = Some(live.scope);
                self.error = None;
                log::debug!(
                    "applied sales response #{}: {} rows, {} pages",
                    token.generation,
                    self.result.records.len(),
                    self.result.total_pages
                );
                Settlement::Applied {
                    total_pages: self.result.total_pages,
                }
            }
            Err(err) if err.is_cancelled() => Settlement::Discarded,
            Err(err) => {
                log::error!("sales request #{} failed: {}", token.generation, err);
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
                Settlement::Failed
            }
        }
    }

    /// Aborts the live request without replacing it, e.g. on unmount.
    pub fn cancel_live(&mut self) {
        if let Some(live) = self.live.take() {
            log::debug!("cancelling sales request #{}", live.token.generation);
            live.handle.cancel();
            self.loading = false;
        }
    }
}

/// Follow-up to an applied response: a page past the new page count is
/// pulled back to the last page.
///
/// Returns `true` when `query` changed, i.e. exactly one more request is due.
pub fn reconcile_page(query: &mut QueryState, settlement: Settlement) -> bool {
    match settlement {
        Settlement::Applied { total_pages } => query.clamp_page(total_pages),
        Settlement::Failed | Settlement::Discarded => false,
    }
}

/// Request parameters for a query snapshot; empty filters are omitted.
pub fn serialize_query(query: &QueryState) -> SalesQueryParams {
    SalesQueryParams {
        q: Some(query.search_text())
            .filter(|q| !q.is_empty())
            .map(str::to_string),
        regions: join_non_empty(query.selected_regions()),
        categories: join_non_empty(query.selected_categories()),
        sort: query.sort(),
        page: query.page(),
        page_size: query.page_size().value(),
    }
}

fn join_non_empty<'a>(values: impl IntoIterator<Item = &'a String>) -> Option<String> {
    let joined = values
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",");
    (!joined.is_empty()).then_some(joined)
}
