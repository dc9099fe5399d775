//! Theme command handlers

use anyhow::Result;

use compete_core::ThemePreference;

use crate::output::{Output, OutputFormat};

/// Show the current theme
pub fn show(theme: &ThemePreference, output: &Output) -> Result<()> {
    match output.format {
        OutputFormat::Json => output.print_json(&serde_json::json!({
            "theme": theme.theme(),
            "path": theme.path(),
        })),
        OutputFormat::Quiet => println!("{}", theme.theme()),
        OutputFormat::Human => {
            println!("Theme: {}", theme.theme());
            if let Some(path) = theme.path() {
                println!("Stored in: {}", path.display());
            }
        }
    }
    Ok(())
}

/// Switch between light and dark
pub fn toggle(theme: &mut ThemePreference, output: &Output) -> Result<()> {
    let next = theme.toggle()?;
    match output.format {
        OutputFormat::Quiet => println!("{}", next),
        _ => output.success(&format!("Theme set to {}", next)),
    }
    Ok(())
}
