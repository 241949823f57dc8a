use anyhow::Context;

use crate::commands::convert::print_summary;
use crate::terminal::spinner;
use ouisql_common::config::Config;
use ouisql_common::{success, warn};
use ouisql_core::converter::ConversionService;
use ouisql_core::registry;

/// Same pipeline as `convert` minus the write. Skipped rows are warned about
/// as they are found.
pub fn check(cfg: &Config) -> anyhow::Result<()> {
    let source = registry::from_config(cfg)?;
    let location = source.location();
    let service = ConversionService::new(source);

    let summary = spinner::with_spinner("Checking vendor registry...", || service.check())
        .with_context(|| format!("could not check registry from {location}"))?;

    match summary.skipped {
        0 => success!("Every rule in the registry is usable"),
        n => warn!("{n} rules would be skipped"),
    }

    print_summary(&summary, cfg);
    Ok(())
}
