use anyhow::Result;
use log::info;

use purine_merge::merge;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting purine data merge");

    merge::run()?;

    Ok(())
}
