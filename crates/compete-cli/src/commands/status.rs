//! Status command handler

use anyhow::Result;

use compete_core::AppContext;

use crate::output::{Output, OutputFormat};

/// Show registry counters, theme, and configuration at a glance
pub fn show(ctx: &AppContext, output: &Output) -> Result<()> {
    let store = ctx.store()?;
    let summary = store.summary();
    let dangling = store.dangling_references();
    let config = ctx.config();

    match output.format {
        OutputFormat::Json => output.print_json(&serde_json::json!({
            "summary": summary,
            "danglingReferences": dangling.len(),
            "revision": store.revision(),
            "theme": ctx.theme().theme(),
            "seed": config.seed,
            "dataDir": config.data_dir,
        })),
        OutputFormat::Quiet => println!("{}", summary.students),
        OutputFormat::Human => {
            println!("Compete Status");
            println!("==============");
            println!();
            println!("Registry (seed {}):", config.seed);
            println!("  Students:      {}", summary.students);
            println!(
                "    pending {}  approved {}  rejected {}",
                summary.pending, summary.approved, summary.rejected
            );
            println!(
                "    passed {}  failed {}",
                summary.passed, summary.failed
            );
            println!("  Competitions:  {}", summary.competitions);
            println!("  Submissions:   {}", summary.submissions);
            println!("  Certificates:  {}", summary.certificates);
            println!("  Achievements:  {}", summary.achievements);
            println!("  Notifications: {}", summary.notifications);
            if !dangling.is_empty() {
                println!();
                println!("⚠ {} dangling reference(s):", dangling.len());
                for reference in &dangling {
                    println!(
                        "  {}.{} → {}",
                        reference.source_id, reference.field, reference.target_id
                    );
                }
            }
            println!();
            println!("Theme:    {}", ctx.theme().theme());
            println!("Data dir: {}", config.data_dir.display());
        }
    }

    Ok(())
}
