use std::net::TcpListener;

use bloglens::{configuration::get_configuration, services::build_http_client, startup::run};
use env_logger::Env;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let http_client = build_http_client().expect("Failed to build the HTTP client.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;
    log::info!("Serving blog search crawler on {}", listener.local_addr()?);

    run(listener, http_client)?.await
}
