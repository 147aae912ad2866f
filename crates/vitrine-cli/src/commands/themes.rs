use anyhow::Result;

use vitrine_core::AppConfig;
use vitrine_tui::available_themes;

pub fn run(config: &AppConfig) -> Result<()> {
    println!("Available themes:");
    for name in available_themes() {
        if name == config.theme.name {
            println!("  {name} (active)");
        } else {
            println!("  {name}");
        }
    }
    Ok(())
}
