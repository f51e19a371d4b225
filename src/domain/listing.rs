use chrono::NaiveDate;
use itertools::Itertools;

pub const LINK_DELIMITER: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub captured_on: NaiveDate,
    pub search_term: String,
    pub rank: usize,
    pub blog_name: String,
    pub title: String,
    pub description: String,
    pub posted_on: String, // free-form: "3일 전", "2024. 1. 2."
    pub is_ad: bool,
    pub links: Vec<String>,
}

impl Listing {
    pub fn joined_links(&self) -> String {
        self.links.iter().join(LINK_DELIMITER)
    }

    pub fn ad_mark(&self) -> &'static str {
        if self.is_ad {
            "Y"
        } else {
            "N"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub term: String,
    pub listings: Vec<Listing>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingFilter {
    #[default]
    All,
    OrganicOnly,
    AdsOnly,
}

impl ListingFilter {
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            ListingFilter::All => true,
            ListingFilter::OrganicOnly => !listing.is_ad,
            ListingFilter::AdsOnly => listing.is_ad,
        }
    }
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.listings.len()
    }

    pub fn ad_count(&self) -> usize {
        self.listings.iter().filter(|listing| listing.is_ad).count()
    }

    pub fn organic_count(&self) -> usize {
        self.total() - self.ad_count()
    }

    // Share of ads in percent, rounded to one decimal
    pub fn ad_ratio(&self) -> f64 {
        if self.listings.is_empty() {
            return 0.0;
        }
        let raw = self.ad_count() as f64 / self.total() as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }

    pub fn filtered(&self, filter: ListingFilter) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| filter.matches(listing))
            .collect()
    }

    pub fn preview(&self, count: usize) -> &[Listing] {
        &self.listings[..self.total().min(count)]
    }
}
