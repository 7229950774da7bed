use mix_demos::common::{get_connector, init_tracing, provider_timeout};
use mixenergetico::Mix;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 1. Create connector (mock in CI when MIX_USE_MOCK is set).
    let connector = get_connector()?;

    // 2. Build the orchestrator with the bot's defaults.
    let mut builder = Mix::builder().with_connector(connector);
    if let Some(timeout) = provider_timeout() {
        builder = builder.provider_timeout(timeout);
    }
    let mix = builder.build()?;

    // 3. Reply to a few mentions, as the bot would.
    let mentions = std::env::args().skip(1).collect::<Vec<_>>();
    let mentions = if mentions.is_empty() {
        vec![
            "@MixEnergetico 8/6/2020".to_string(),
            "@MixEnergetico ¿y en 6/2020?".to_string(),
            "@MixEnergetico 2010".to_string(),
        ]
    } else {
        mentions
    };

    for text in &mentions {
        println!("> {text}");
        println!("{}", mix.reply(text).await);
    }

    Ok(())
}
