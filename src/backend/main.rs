/**
 * Battle Server Entry Point
 *
 * Serves the battle turn stub over HTTP on `SERVER_PORT` (default 3000).
 */

#[cfg(feature = "ssr")]
const DEFAULT_PORT: u16 = 3000;

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pantheon::egui_app::logging::init("debug");

    let port = match std::env::var("SERVER_PORT") {
        Ok(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid SERVER_PORT {:?}", raw);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    };
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Battle server listening on {}", addr);
    axum::serve(listener, pantheon::backend::create_app()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("battle-server was built without the 'ssr' feature.");
    eprintln!("Run with: cargo run --bin battle-server --features ssr");
    std::process::exit(1);
}
