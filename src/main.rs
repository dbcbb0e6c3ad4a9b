use crewstats_service::api;
use crewstats_service::common::init;
use crewstats_service::settings::AppSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::get();
    init::initialize_logging(settings);
    match settings.app_component.as_str() {
        "api" => api::serve(settings).await,
        other => anyhow::bail!("Unknown app component: {other}"),
    }
}
