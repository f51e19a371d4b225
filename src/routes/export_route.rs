use actix_web::{
    get,
    http::header::{
        self, Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
    },
    web, HttpResponse,
};
use chrono::Local;

use crate::{
    services::{export_filename, results_to_csv},
    state::SearchStore,
};

#[get("/export")]
async fn export(store: web::Data<SearchStore>) -> HttpResponse {
    let results = match store.snapshot() {
        Some(results) => results,
        None => {
            return HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/"))
                .finish()
        }
    };

    let body = match results_to_csv(&results) {
        Ok(body) => body,
        Err(error) => {
            log::error!("CSV serialization failed: {:#}", error);
            return HttpResponse::InternalServerError().body("CSV 파일을 만들지 못했습니다.");
        }
    };

    // Stamped at download time, repeated exports get distinct names
    let stamp = Local::now().naive_local();
    let filename = export_filename(&results.term, stamp);
    // Korean name in the RFC 5987 parameter, plain ASCII fallback beside it
    let content_disposition = ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![
            DispositionParam::FilenameExt(ExtendedValue {
                charset: Charset::Ext("UTF-8".to_string()),
                language_tag: None,
                value: filename.into_bytes(),
            }),
            DispositionParam::Filename(format!(
                "naver_blog_search_{}.csv",
                stamp.format("%Y%m%d_%H%M%S")
            )),
        ],
    };

    HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header(content_disposition)
        .body(body)
}
