use actix_web::{get, web, HttpResponse};
use askama::Template;

use crate::{
    domain::{DEFAULT_RESULT_CAP, RESULT_CAP_CHOICES},
    state::SearchStore,
};

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    cap_choices: Vec<CapChoice>,
    error: Option<String>,
    has_results: bool,
}

struct CapChoice {
    value: usize,
    selected: bool,
}

// The search route reuses this to show validation and crawl errors in place
pub(crate) fn render_search_form(error: Option<String>, has_results: bool) -> String {
    HomeTemplate {
        cap_choices: RESULT_CAP_CHOICES
            .iter()
            .map(|&value| CapChoice {
                value,
                selected: value == DEFAULT_RESULT_CAP,
            })
            .collect(),
        error,
        has_results,
    }
    .render()
    .unwrap()
}

#[get("/")]
async fn home(store: web::Data<SearchStore>) -> HttpResponse {
    HttpResponse::Ok().body(render_search_form(None, store.has_results()))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};

    use super::home;
    use crate::{domain::SearchResults, state::SearchStore};

    #[actix_web::test]
    async fn home_renders_the_search_form() {
        let store = web::Data::new(SearchStore::new());
        let app = test::init_service(App::new().service(home).app_data(store)).await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
        assert!(body.contains("🚀 크롤링 시작"));
        assert!(body.contains(r#"<option value="20" selected>"#));
        assert!(!body.contains("지난 검색 결과 보기"));
    }

    #[actix_web::test]
    async fn home_links_to_previous_results_when_present() {
        let store = web::Data::new(SearchStore::new());
        store.replace(SearchResults {
            term: "온리프의원".to_string(),
            listings: vec![],
        });
        let app = test::init_service(App::new().service(home).app_data(store)).await;

        let response =
            test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        let body = String::from_utf8(test::read_body(response).await.to_vec()).unwrap();
        assert!(body.contains("지난 검색 결과 보기"));
    }
}
