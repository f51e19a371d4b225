use actix_web::{get, http::header, web, HttpResponse};
use askama::Template;
use serde::Deserialize;

use crate::{
    domain::{Listing, ListingFilter},
    state::SearchStore,
};

const PREVIEW_COUNT: usize = 3;
const PREVIEW_SNIPPET_CHARS: usize = 100;

#[derive(Template)]
#[template(path = "results.html")]
struct ResultsTemplate {
    term: String,
    total: usize,
    ad_count: usize,
    organic_count: usize,
    ad_ratio: String,
    filter: String,
    rows: Vec<ListingRow>,
    previews: Vec<PreviewCard>,
}

struct ListingRow {
    captured_on: String,
    search_term: String,
    rank: usize,
    blog_name: String,
    title: String,
    description: String,
    posted_on: String,
    ad_mark: &'static str,
    is_ad: bool,
    links: String,
}

impl From<&Listing> for ListingRow {
    fn from(listing: &Listing) -> Self {
        Self {
            captured_on: listing.captured_on.format("%Y-%m-%d").to_string(),
            search_term: listing.search_term.clone(),
            rank: listing.rank,
            blog_name: listing.blog_name.clone(),
            title: listing.title.clone(),
            description: listing.description.clone(),
            posted_on: listing.posted_on.clone(),
            ad_mark: listing.ad_mark(),
            is_ad: listing.is_ad,
            links: listing.joined_links(),
        }
    }
}

struct PreviewCard {
    rank: usize,
    badge: &'static str,
    blog_name: String,
    title: String,
    description: String,
    posted_on: String,
    links: String,
}

impl From<&Listing> for PreviewCard {
    fn from(listing: &Listing) -> Self {
        Self {
            rank: listing.rank,
            badge: if listing.is_ad {
                "🔴 광고"
            } else {
                "🟢 일반"
            },
            blog_name: listing.blog_name.clone(),
            title: listing.title.clone(),
            description: preview_snippet(&listing.description),
            posted_on: listing.posted_on.clone(),
            links: listing.joined_links(),
        }
    }
}

// Character-based so a cut never lands inside a Hangul codepoint.
fn preview_snippet(description: &str) -> String {
    let snippet: String = description.chars().take(PREVIEW_SNIPPET_CHARS).collect();
    format!("{}...", snippet)
}

#[derive(Deserialize)]
struct ResultsQuery {
    filter: Option<String>,
}

#[get("/results")]
async fn results(query: web::Query<ResultsQuery>, store: web::Data<SearchStore>) -> HttpResponse {
    let results = match store.snapshot() {
        Some(results) => results,
        None => {
            return HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/"))
                .finish()
        }
    };

    let filter_name = match query.filter.as_deref() {
        Some("organic") => "organic",
        Some("ads") => "ads",
        _ => "all",
    };
    let filter = match filter_name {
        "organic" => ListingFilter::OrganicOnly,
        "ads" => ListingFilter::AdsOnly,
        _ => ListingFilter::All,
    };

    // Metrics and the preview reflect the full set, only rows are filtered
    let template = ResultsTemplate {
        term: results.term.clone(),
        total: results.total(),
        ad_count: results.ad_count(),
        organic_count: results.organic_count(),
        ad_ratio: format!("{:.1}", results.ad_ratio()),
        filter: filter_name.to_string(),
        rows: results
            .filtered(filter)
            .into_iter()
            .map(ListingRow::from)
            .collect(),
        previews: results
            .preview(PREVIEW_COUNT)
            .iter()
            .map(PreviewCard::from)
            .collect(),
    };

    HttpResponse::Ok().body(template.render().unwrap())
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::{header, StatusCode},
        test, web, App,
    };
    use chrono::NaiveDate;

    use super::results;
    use crate::{
        domain::{Listing, SearchResults},
        state::SearchStore,
    };

    fn listing(rank: usize, blog_name: &str, is_ad: bool) -> Listing {
        Listing {
            captured_on: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            search_term: "온리프의원".to_string(),
            rank,
            blog_name: blog_name.to_string(),
            title: format!("{}번째 글 제목", rank),
            description: "피부 상담 후기 요약".to_string(),
            posted_on: "3일 전".to_string(),
            is_ad,
            links: vec![format!("https://blog.naver.com/{}/1", blog_name)],
        }
    }

    fn seeded_store() -> web::Data<SearchStore> {
        let store = web::Data::new(SearchStore::new());
        store.replace(SearchResults {
            term: "온리프의원".to_string(),
            listings: vec![
                listing(1, "일반블로그", false),
                listing(2, "광고블로그", true),
                listing(3, "후기블로그", false),
            ],
        });
        store
    }

    #[actix_web::test]
    async fn empty_store_redirects_home() {
        let store = web::Data::new(SearchStore::new());
        let app = test::init_service(App::new().service(results).app_data(store)).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/results").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
    }

    #[actix_web::test]
    async fn results_page_shows_metrics_and_all_rows() {
        let app = test::init_service(App::new().service(results).app_data(seeded_store())).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/results").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
        assert!(body.contains("✅ 총 3개의 결과를 수집했습니다!"));
        assert!(body.contains("33.3%"));
        assert!(body.contains("일반블로그"));
        assert!(body.contains("광고블로그"));
        assert!(body.contains("상위 3개 결과 미리보기"));
    }

    #[actix_web::test]
    async fn ads_filter_hides_organic_rows() {
        let app = test::init_service(App::new().service(results).app_data(seeded_store())).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/results?filter=ads")
                .to_request(),
        )
        .await;

        let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
        let table = body.split("<tbody>").nth(1).unwrap();
        let table = table.split("</tbody>").next().unwrap();
        assert!(table.contains("광고블로그"));
        assert!(!table.contains("일반블로그"));
        assert!(!table.contains("후기블로그"));
    }

    #[actix_web::test]
    async fn zero_listings_render_the_no_results_notice() {
        let store = web::Data::new(SearchStore::new());
        store.replace(SearchResults {
            term: "아무도 안 쓰는 검색어".to_string(),
            listings: vec![],
        });
        let app = test::init_service(App::new().service(results).app_data(store)).await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/results").to_request(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
        assert!(body.contains("⚠️ 검색 결과를 찾을 수 없습니다."));
        assert!(!body.contains("<table"));
    }
}
