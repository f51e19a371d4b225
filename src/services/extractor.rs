use chrono::Local;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::{domain::Listing, services::SearchPage};

// Paid listings route their clicks through this tracker
pub const AD_REDIRECT_PREFIX: &str = "https://ader.naver.com/";

const CONTAINER_SELECTOR: &str = ".user_info";
const SUB_INFO_SELECTOR: &str = ".sub";
const TITLE_SELECTOR: &str = ".title_area";
const DESCRIPTION_SELECTOR: &str = ".dsc_area";
const AUTHOR_NAME_SELECTOR: &str = ".name";
const LINK_SELECTOR: &str = "a[href]";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("page body is not valid UTF-8: {0}")]
    InvalidMarkup(#[from] std::str::Utf8Error),
}

pub fn extract_listings(
    page: &SearchPage,
    term: &str,
    cap: usize,
) -> Result<Vec<Listing>, ExtractError> {
    let markup = std::str::from_utf8(&page.body)?;
    let document = Html::parse_document(markup);

    let container_selector = Selector::parse(CONTAINER_SELECTOR).unwrap();
    let sub_info_selector = Selector::parse(SUB_INFO_SELECTOR).unwrap();
    let title_selector = Selector::parse(TITLE_SELECTOR).unwrap();
    let description_selector = Selector::parse(DESCRIPTION_SELECTOR).unwrap();
    let author_name_selector = Selector::parse(AUTHOR_NAME_SELECTOR).unwrap();
    let link_selector = Selector::parse(LINK_SELECTOR).unwrap();

    let containers: Vec<ElementRef> = document.select(&container_selector).take(cap).collect();
    // Runs shorter than containers whenever one lacks a .sub, shifting
    // every later date up a slot. The markup has no per-item key to join on.
    let sub_infos: Vec<ElementRef> = containers
        .iter()
        .filter_map(|container| container.select(&sub_info_selector).next())
        .collect();
    let titles: Vec<ElementRef> = document.select(&title_selector).take(cap).collect();
    let descriptions: Vec<ElementRef> = document
        .select(&description_selector)
        .take(cap)
        .collect();

    let longest = containers
        .len()
        .max(sub_infos.len())
        .max(titles.len())
        .max(descriptions.len());
    let count = cap.min(longest);

    let captured_on = Local::now().date_naive();
    let mut listings = Vec::with_capacity(count);

    for index in 0..count {
        let author_name = containers
            .get(index)
            .and_then(|container| container.select(&author_name_selector).next());
        let blog_name = author_name.map(element_text).unwrap_or_default();
        let posted_on = sub_infos
            .get(index)
            .copied()
            .map(element_text)
            .unwrap_or_default();
        let title = titles
            .get(index)
            .copied()
            .map(element_text)
            .unwrap_or_default();

        let description_node = descriptions.get(index).copied();
        let description = description_node.map(element_text).unwrap_or_default();
        let links: Vec<String> = description_node
            .map(|node| {
                node.select(&link_selector)
                    .filter_map(|anchor| anchor.value().attr("href").map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        let ad_link = links.iter().any(|link| link.starts_with(AD_REDIRECT_PREFIX));
        let ad_author = author_name
            .and_then(|name| name.value().attr("href"))
            .map_or(false, |href| href.starts_with(AD_REDIRECT_PREFIX));

        listings.push(Listing {
            captured_on,
            search_term: term.to_string(),
            rank: index + 1,
            blog_name,
            title,
            description,
            posted_on,
            is_ad: ad_link || ad_author,
            links,
        });
    }

    log::info!(
        "Extracted {} listings ({} flagged as ads) from {}",
        listings.len(),
        listings.iter().filter(|listing| listing.is_ad).count(),
        page.url
    );

    Ok(listings)
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
