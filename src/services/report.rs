// src/services/report.rs

//! Report assembly across a date range.
//!
//! Drives link discovery over the paginated listing, then fetches each
//! discovered detail page and extracts one record per award paragraph. The
//! pipeline is strictly sequential: fetch, parse, extract, page by page.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::{AwardRecord, SourceConfig};
use crate::services::dates::canonical;
use crate::services::extract::FieldExtractor;
use crate::services::link_index::build_link_index;
use crate::services::segment::{annotate, segment};
use crate::utils::http::PageFetcher;
use crate::utils::log;

/// Summary of a report run.
#[derive(Debug, Default)]
pub struct ReportOutcome {
    pub records: Vec<AwardRecord>,
    pub listing_pages: usize,
    pub detail_pages: usize,
}

/// Assembles award records for a date range.
///
/// Owns the page fetcher for the whole run, so the underlying fetch session
/// is released on every exit path when the assembler drops.
pub struct ReportAssembler<F: PageFetcher> {
    source: SourceConfig,
    link_pattern: Regex,
    fetcher: F,
    extractor: FieldExtractor,
}

impl<F: PageFetcher> ReportAssembler<F> {
    /// Create an assembler over the given source configuration and fetcher.
    pub fn new(source: SourceConfig, fetcher: F) -> Result<Self> {
        let link_pattern = Regex::new(&source.article_link_pattern)
            .map_err(|e| AppError::config(format!("bad article link pattern: {e}")))?;
        Ok(Self {
            source,
            link_pattern,
            fetcher,
            extractor: FieldExtractor::new(),
        })
    }

    /// Generate all award records in `[start, end]` (`end` defaults to
    /// today), in the order their source pages are processed.
    pub async fn generate(
        &mut self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<ReportOutcome> {
        let end = end.unwrap_or_else(|| Local::now().date_naive());
        let mut outcome = ReportOutcome::default();

        let links = self.collect_link_index(start, end, &mut outcome).await?;
        log::info(&format!("Discovered {} announcement page(s)", links.len()));

        for (date, link) in &links {
            log::info(&format!("Parsing announcements for {}: {}", canonical(*date), link));
            let markup = self.fetcher.fetch(link).await?;
            outcome.detail_pages += 1;

            let blocks = segment(&markup, &self.source.body_selector)?;
            for announcement in annotate(&blocks) {
                outcome.records.push(self.extractor.extract(
                    &announcement.text,
                    &announcement.service,
                    link,
                    &canonical(*date),
                ));
            }
        }

        Ok(outcome)
    }

    /// Walk the paginated listing, merging each page's link index until a
    /// page yields zero links (the pagination stop signal). Later pages
    /// overwrite earlier entries for the same date.
    async fn collect_link_index(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
        outcome: &mut ReportOutcome,
    ) -> Result<BTreeMap<NaiveDate, String>> {
        let mut links = BTreeMap::new();
        let mut page_num: u32 = 1;

        loop {
            let url = self.listing_url(start, end, page_num);
            log::info(&format!("Scanning listing page: {url}"));

            let markup = self.fetcher.fetch(&url).await?;
            outcome.listing_pages += 1;

            let page_links =
                build_link_index(&markup, &self.link_pattern, &self.source.boilerplate_phrase);
            if page_links.is_empty() {
                log::info(&format!("No links found, listing exhausted: {url}"));
                break;
            }

            links.extend(page_links);
            page_num += 1;
        }

        Ok(links)
    }

    fn listing_url(&self, start: NaiveDate, end: NaiveDate, page_num: u32) -> String {
        format!(
            "{}/StartDate/{}/EndDate/{}/?page={}",
            self.source.listing_base_url.trim_end_matches('/'),
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
            page_num
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use async_trait::async_trait;

    /// Deterministic fetcher serving canned markup; unknown URLs return an
    /// empty page (zero links, zero blocks).
    struct StubFetcher {
        pages: HashMap<String, String>,
    }

    #[async_trait]
    impl PageFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            Ok(self
                .pages
                .get(url)
                .cloned()
                .unwrap_or_else(|| "<html><body></body></html>".to_string()))
        }
    }

    fn assembler(pages: HashMap<String, String>) -> ReportAssembler<StubFetcher> {
        ReportAssembler::new(SourceConfig::default(), StubFetcher { pages }).unwrap()
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
    }

    fn end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 3, 31).unwrap()
    }

    const ARTICLE: &str = "https://www.defense.gov/News/Contracts/Contract/Article/111/";

    fn listing_page(anchors: &str) -> String {
        format!("<html><body>{anchors}</body></html>")
    }

    fn two_page_fixture() -> HashMap<String, String> {
        let mut pages = HashMap::new();
        pages.insert(
            "https://www.defense.gov/News/Contracts/StartDate/2023-03-01/EndDate/2023-03-31/?page=1"
                .to_string(),
            listing_page(&format!(
                "<a href=\"{ARTICLE}\">Contracts For March 3rd, 2023</a>"
            )),
        );
        // Page 2 served as empty by the stub's default.
        pages.insert(
            ARTICLE.to_string(),
            "<html><body><div class=\"body\">\
             <p>NAVY</p>\
             <p>Acme Corp., Arlington, Va., is awarded a $1,000,000 contract for widget parts.</p>\
             </div></body></html>"
                .to_string(),
        );
        pages
    }

    #[tokio::test]
    async fn test_two_page_listing_fetches_one_detail_page() {
        let mut assembler = assembler(two_page_fixture());
        let outcome = assembler.generate(start(), Some(end())).await.unwrap();

        // Page 1 had one link, page 2 had none: two listing fetches, one
        // detail fetch, run stops.
        assert_eq!(outcome.listing_pages, 2);
        assert_eq!(outcome.detail_pages, 1);
        assert_eq!(outcome.records.len(), 1);

        let record = &outcome.records[0];
        assert_eq!(record.award_date, "03/03/2023");
        assert_eq!(record.service, "NAVY");
        assert_eq!(record.contractor, "Acme Corp.");
        assert_eq!(record.source_link, ARTICLE);
    }

    #[tokio::test]
    async fn test_empty_first_page_yields_empty_report() {
        let mut assembler = assembler(HashMap::new());
        let outcome = assembler.generate(start(), Some(end())).await.unwrap();
        assert_eq!(outcome.listing_pages, 1);
        assert_eq!(outcome.detail_pages, 0);
        assert!(outcome.records.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_runs_differ_only_in_id() {
        let outcome_a = assembler(two_page_fixture())
            .generate(start(), Some(end()))
            .await
            .unwrap();
        let outcome_b = assembler(two_page_fixture())
            .generate(start(), Some(end()))
            .await
            .unwrap();

        assert_eq!(outcome_a.records.len(), outcome_b.records.len());
        for (a, b) in outcome_a.records.iter().zip(outcome_b.records.iter()) {
            let mut b = b.clone();
            b.id = a.id.clone();
            assert_eq!(*a, b);
        }
    }
}
