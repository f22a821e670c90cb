/// Example comparing selected scenarios from a workbook.
///
/// Usage: compare_scenarios <file.xlsx> [name...]
///
/// Without names, the available scenarios are listed. With names, the
/// chart spec for that selection is printed as JSON.
use scenario_compare::{Dashboard, DashboardConfig, SelectionEvent};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: compare_scenarios <file.xlsx> [name...]");
        std::process::exit(2);
    };
    let names: Vec<String> = args.collect();

    let start = Instant::now();
    let dashboard = Dashboard::open(&path, DashboardConfig::default())?;
    eprintln!("Loaded {} scenarios in {:?}", dashboard.table().len(), start.elapsed());

    if names.is_empty() {
        for record in dashboard.table() {
            println!(
                "{:<24} {}  revenue={:<12} cost={:<12} profit={:<12} {:.2}%",
                record.name,
                record.created_date,
                record.revenue,
                record.cost,
                record.profit,
                record.profit_percent
            );
        }
        return Ok(());
    }

    match dashboard.on_selection_changed(&SelectionEvent::from_ids(names))? {
        Some(chart) => println!("{}", chart.to_json()?),
        None => eprintln!("No known scenario selected"),
    }
    Ok(())
}
