use mix_demos::common::{get_connector, init_tracing};
use mixenergetico::Mix;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let connector = get_connector()?;
    let mix = Mix::builder()
        .with_connector(connector)
        .probe_max_days(10)
        .build()?;

    // Walks back from today until the primary region has data.
    println!("Probing from {}...", mix.today());
    let window = mix.latest_available_date().await?;
    println!(
        "Latest available day: {} ({} .. {})",
        window.label(),
        window.start_param(),
        window.end_param()
    );

    // A mention without a date uses that day.
    println!("{}", mix.reply("@MixEnergetico hola").await);

    Ok(())
}
