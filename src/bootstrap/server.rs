use crate::app::Application;

pub async fn init_server(app: Application) -> anyhow::Result<()> {
    let addr = app.config().server_addr();

    // Build the router
    let router = app.router();

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|err| anyhow::anyhow!("cannot bind to {}: {}", addr, err))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("cannot listen for ctrl-c: {:?}", err);
        return;
    }

    tracing::info!("shutdown requested");
}
