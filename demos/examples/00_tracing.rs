use mix_demos::common::get_connector;
use mixenergetico::Mix;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,mixenergetico=trace,mix=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Create connector (mock in CI when MIX_USE_MOCK is set) and build the orchestrator
    let connector = get_connector()?;
    let mix = Mix::builder().with_connector(connector).build()?;

    // Explicit year, then the latest available day
    let _ = mix.national("2019").await?;
    let _ = mix.latest_available_date().await?;

    Ok(())
}
