use anyhow::Context;
use chrono::NaiveDateTime;

use crate::domain::SearchResults;

// Excel needs the BOM to open the Korean text as UTF-8
pub const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

pub const CSV_HEADERS: [&str; 9] = [
    "날짜",
    "검색어",
    "노출순위",
    "블로그명",
    "타이틀",
    "디스크립션",
    "게시일",
    "광고여부",
    "링크",
];

pub fn results_to_csv(results: &SearchResults) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    writer
        .write_record(CSV_HEADERS)
        .context("failed to write the CSV header row")?;

    for listing in &results.listings {
        writer
            .write_record([
                listing.captured_on.format("%Y-%m-%d").to_string(),
                listing.search_term.clone(),
                listing.rank.to_string(),
                listing.blog_name.clone(),
                listing.title.clone(),
                listing.description.clone(),
                listing.posted_on.clone(),
                listing.ad_mark().to_string(),
                listing.joined_links(),
            ])
            .with_context(|| format!("failed to write CSV row for rank {}", listing.rank))?;
    }

    Ok(writer.into_inner()?)
}

pub fn export_filename(term: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "naver_blog_search_{}_{}.csv",
        term,
        timestamp.format("%Y%m%d_%H%M%S")
    )
}
