//! UMLS CUI code-mapping binary.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use umls_mapper::{run, Args};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    tracing::info!("Loading UMLS data from: {}", args.umls_dir.display());

    let saved = match run(args) {
        Ok(saved) => saved,
        Err(e) => {
            tracing::error!("Mapping generation failed: {}", e);
            return Err(e.into());
        }
    };

    let extract = &saved.report.extract;
    tracing::info!(
        "Concept rows: {} read, {} + {} mapped, {} duplicates, {} other vocabularies",
        extract.total_records,
        extract.primary_records,
        extract.secondary_records,
        extract.duplicate_records,
        extract.skipped_records
    );

    let propagate = &saved.report.propagate;
    if propagate.total_records > 0 {
        tracing::info!(
            "Relationship rows: {} read, {} selected, {} merged",
            propagate.total_records,
            propagate.matched_records,
            propagate.merged_records
        );
    }

    tracing::info!(
        "Wrote {} and {}",
        saved.primary_path.display(),
        saved.secondary_path.display()
    );

    Ok(())
}
