use admin_smoke::{app::App, config, telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // telemetry
    let subscriber = telemetry::get_subscriber("admin_smoke", "info", std::io::stdout);
    telemetry::init_subscriber(subscriber);

    // config
    let config = config::get().map_err(|e| anyhow::anyhow!("Failed to read configuration: {e}"))?;

    let app = App::build(&config).await?;
    tracing::info!(addr = %app.addr(), "Admin smoke harness listening");
    app.run_until_stopped().await
}
