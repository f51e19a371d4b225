use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{export_route, home_route, results_route, search_route},
    state::SearchStore,
};

pub fn run(listener: TcpListener, http_client: reqwest::Client) -> Result<Server, std::io::Error> {
    let http_client = web::Data::new(http_client);
    let search_store = web::Data::new(SearchStore::new());

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(home_route::home)
            .service(search_route::search)
            .service(results_route::results)
            .service(export_route::export)
            .app_data(http_client.clone())
            .app_data(search_store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
