//! Local preview server for the generated output

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::services::ServeDir;

use crate::Site;

/// Serve the output directory over HTTP
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let serve_dir = ServeDir::new(&site.output_dir).append_index_html_on_directories(true);
    let app = Router::new().fallback_service(serve_dir);

    // "localhost" is not a valid SocketAddr host
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
