use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!(
        "Listening on {}, serving {}",
        cfg.server.listen_addr,
        cfg.site.document_root.display()
    );

    let site = Arc::new(cfg.site.clone());

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let site = site.clone();
        tokio::spawn(async move {
            if let Err(e) = Connection::new(socket, site).run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}
