//! Paginated fetching of decoded record pages.
//!
//! The fetcher drives the offset/limit cursor over the upstream archive
//! and exposes the run as a lazy iterator of decoded pages: each pull
//! issues one request, decodes it and then sleeps the configured delay.
//! The consumer controls backpressure by pulling when ready.

use std::thread;

use crate::config::{date_filter, HarvestConfig};
use crate::decode::decode_page;
use crate::error::{HarvestError, Result};
use crate::http::{HttpTransport, PageTransport};
use crate::types::ProductionRecord;

/// Fetcher over some [`PageTransport`], configured once per run.
pub struct PageFetcher<T: PageTransport> {
    transport: T,
    config: HarvestConfig,
}

impl PageFetcher<HttpTransport> {
    /// Create a fetcher talking HTTP to the configured base URL.
    pub fn over_http(config: HarvestConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.base_url.clone())?;
        Ok(Self::new(transport, config))
    }
}

impl<T: PageTransport> PageFetcher<T> {
    pub fn new(transport: T, config: HarvestConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Access the underlying transport, mainly for test assertions.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Lazily iterate the pages of records starting after `since`,
    /// optionally bounded by `until` (inclusive).
    ///
    /// The boundaries should be validated with
    /// [`crate::config::validate_date`] first.
    pub fn pages(&self, since: &str, until: Option<&str>) -> HarvestPages<'_, T> {
        HarvestPages {
            fetcher: self,
            filter: date_filter(since, until),
            offset: 0,
            done: false,
        }
    }
}

/// Iterator over decoded pages of a harvest run.
///
/// Yields `Ok(records)` per page, in upstream order. The run ends after
/// the first page holding fewer records than the page size; a page that
/// is exactly full is assumed non-final and triggers another request.
/// Any transport or parse error is yielded once and ends the iteration.
///
/// Note that a page truncated by the decoder's bad-date policy is
/// indistinguishable here from a genuinely short final page, so such a
/// page also ends the run. See [`decode_page`] for why that policy is
/// kept.
pub struct HarvestPages<'a, T: PageTransport> {
    fetcher: &'a PageFetcher<T>,
    filter: String,
    offset: u32,
    done: bool,
}

impl<T: PageTransport> Iterator for HarvestPages<'_, T> {
    type Item = Result<Vec<ProductionRecord>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let config = self.fetcher.config();
        // A zero page size would keep the end-of-results check
        // (`records.len() < page_size`) false forever and never advance
        // the offset, so refuse it before touching the upstream.
        if config.page_size == 0 {
            self.done = true;
            return Some(Err(HarvestError::InvalidPageSize));
        }
        let page = self
            .fetcher
            .transport
            .fetch_page(&self.filter, config.page_size, self.offset)
            .and_then(|body| decode_page(&body, &config.excluded_producers));

        match page {
            Ok(records) => {
                tracing::debug!(
                    offset = self.offset,
                    records = records.len(),
                    "decoded page"
                );
                if (records.len() as u32) < config.page_size {
                    self.done = true;
                }
                self.offset += config.page_size;
                // The delay applies after every request, final page
                // included; the simpler loop is worth the one idle wait.
                thread::sleep(config.request_delay);
                Some(Ok(records))
            }
            Err(e) => {
                tracing::error!(offset = self.offset, error = %e, "page failed, aborting run");
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
