mod split;
mod state;
mod utils;
mod views;

use views::App;

#[cfg(feature = "server")]
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to serve the interface on
    #[arg(long, default_value_t = String::from("127.0.0.1"))]
    ip: String,
    /// Port to serve on, 0 defers to the Dioxus CLI environment
    #[arg(long, default_value_t = 0)]
    port: u16,
}

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;
    use dioxus::prelude::*;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    env_logger::init();

    let args = Args::parse();

    let addr: SocketAddr = if args.port == 0 {
        dioxus_cli_config::fullstack_address_or_localhost()
    } else {
        format!("{}:{}", args.ip, args.port).parse()?
    };

    let router =
        axum::Router::new().serve_dioxus_application(ServeConfigBuilder::default(), App);

    let listener = TcpListener::bind(addr).await?;
    log::info!(
        "Welcome on Ardoise, access the web interface at http://{}",
        addr
    );
    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}
