use actix_web::{http::header, post, web, HttpResponse};
use serde::Deserialize;

use crate::{
    domain::{InvalidSearchRequest, SearchRequest, SearchResults},
    routes::home_route::render_search_form,
    services::{extract_listings, fetch_search_page},
    state::SearchStore,
};

#[derive(Deserialize)]
struct SearchFormBody {
    term: String,
    cap: usize,
}

#[post("/search")]
async fn search(
    body: web::Form<SearchFormBody>,
    client: web::Data<reqwest::Client>,
    store: web::Data<SearchStore>,
) -> HttpResponse {
    let request = match SearchRequest::new(&body.term, body.cap) {
        Ok(request) => request,
        Err(error) => {
            let message = match &error {
                InvalidSearchRequest::EmptyTerm => "❌ 검색어를 입력해주세요!".to_string(),
                other => format!("❌ {}", other),
            };
            return HttpResponse::BadRequest()
                .body(render_search_form(Some(message), store.has_results()));
        }
    };

    let page = match fetch_search_page(&client, request.term()).await {
        Ok(page) => page,
        Err(error) => {
            log::error!("Crawl failed for term {}: {}", request.term(), error);
            return HttpResponse::BadGateway().body(render_search_form(
                Some(format!("❌ 크롤링 중 오류 발생: {}", error)),
                store.has_results(),
            ));
        }
    };

    let listings = match extract_listings(&page, request.term(), request.cap()) {
        Ok(listings) => listings,
        Err(error) => {
            log::error!("Extraction failed for term {}: {}", request.term(), error);
            return HttpResponse::BadGateway().body(render_search_form(
                Some(format!("❌ 크롤링 중 오류 발생: {}", error)),
                store.has_results(),
            ));
        }
    };

    store.replace(SearchResults {
        term: request.term().to_string(),
        listings,
    });

    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/results"))
        .finish()
}
