use chrono::Duration;
use clap::Parser;
use tray_track::utils::{logger, validation::Validate};
use tray_track::{
    list_progress, CliConfig, Clock, FulfillmentTracker, SeedConfig, SlotStatus, SystemClock,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting tray-track");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let seed = match SeedConfig::from_file(&config.seed) {
        Ok(seed) => seed,
        Err(e) => {
            tracing::error!("❌ Failed to load seed file '{}': {}", config.seed, e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let catalog = seed.build_catalog();
    let trays = seed.build_trays(&catalog)?;
    let lists = seed.build_shopping_lists(&catalog)?;
    tracing::info!(
        "Loaded {} catalog entries, {} trays, {} shopping lists",
        catalog.len(),
        trays.len(),
        lists.len()
    );

    // Physical scans are ground truth: every tray gets a full resync.
    let mut tracker = FulfillmentTracker::new();
    for tray in &trays {
        tracker.sync_from_tray(tray);
    }

    let clock = SystemClock;
    let now = clock.now();
    let window = Duration::hours(config.warning_window_hours);

    if !config.json {
        for tray in &trays {
            println!("Tray {} ({} slots):", tray.id, tray.capacity());
            for (index, slot) in tray.slots().iter().enumerate() {
                let status = slot.status_at(now, window);
                if status == SlotStatus::Empty && !config.verbose {
                    continue;
                }
                let name = slot
                    .holding
                    .as_ref()
                    .map(|item| item.name.as_str())
                    .unwrap_or("-");
                println!("  slot {:>2}: {:<20} {:?}", index, name, status);
            }
        }
    }

    let tray_for = |owner: &str| {
        seed.trays
            .iter()
            .find(|t| t.recipient.as_deref() == Some(owner))
            .map(|t| t.id.clone())
    };

    let mut all_complete = true;
    for list in &lists {
        let Some(tray_id) = tray_for(&list.owner) else {
            tracing::warn!("No tray assigned to recipient {}", list.owner);
            all_complete = false;
            continue;
        };
        let progress = list_progress(&tracker, &tray_id, list);
        all_complete &= progress.complete;

        if config.json {
            println!("{}", serde_json::to_string_pretty(&progress)?);
        } else {
            println!(
                "Shopping list for {} (tray {}): {}",
                progress.owner,
                progress.tray_id,
                if progress.complete { "complete ✅" } else { "incomplete" }
            );
            for listing in &progress.listings {
                println!(
                    "  {:<20} {}/{} {}",
                    listing.name,
                    listing.placed,
                    listing.required,
                    if listing.satisfied { "✓" } else { "✗" }
                );
            }
        }
    }

    if all_complete {
        tracing::info!("✅ All shopping lists satisfied");
    } else {
        tracing::info!("Some shopping lists still need items");
    }

    Ok(())
}
