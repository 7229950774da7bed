use mix_demos::common::{get_connector, init_tracing};
use mixenergetico::{Mix, summary};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let connector = get_connector()?;
    let mix = Mix::builder().with_connector(connector).build()?;

    let report = mix.national("@MixEnergetico 2019").await?;

    println!("Window: {} .. {}", report.window.start_param(), report.window.end_param());
    for region in &report.contributors {
        println!("  included {} (id {})", region.scope, region.id);
    }
    if let Some(err) = &report.error {
        println!("Stopped early: {err}");
        return Ok(());
    }

    // Every source, including those folded into "other" in the reply.
    for (key, sv) in report.totals.iter() {
        println!("  {key:<24} {:>10.1} GWh {:>6.1}%", sv.value, sv.percentage);
    }
    let folded = summary::fold(&report.totals, mix.catalog());
    println!("Folded into {} display rows", folded.len());

    println!();
    println!("{}", mix.summarize(&report));
    Ok(())
}
