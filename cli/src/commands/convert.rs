use anyhow::Context;
use colored::*;

use crate::terminal::{colors, print, spinner};
use ouisql_common::config::Config;
use ouisql_common::success;
use ouisql_core::converter::{ConversionService, Summary};
use ouisql_core::registry;

pub fn convert(cfg: &Config) -> anyhow::Result<()> {
    let source = registry::from_config(cfg)?;
    let location = source.location();
    let service = ConversionService::new(source);

    let summary: Summary = spinner::with_spinner("Converting vendor registry...", || {
        service.convert(&cfg.output)
    })
    .with_context(|| format!("could not convert registry from {location}"))?;

    print_summary(&summary, cfg);
    Ok(())
}

pub fn print_summary(summary: &Summary, cfg: &Config) {
    let elapsed: ColoredString = format!("{:.2}s", summary.elapsed.as_secs_f64()).bold().yellow();
    let rows: ColoredString = format!("{} vendor rows", summary.entries).bold().green();

    if cfg.quiet > 0 {
        success!("{rows} in {elapsed}");
        return;
    }

    print::header("Summary", cfg.quiet);
    print::set_key_width(["Rules parsed", "Vendor rows", "OUIs overridden", "Rows skipped", "Output"]);
    print::aligned_line("Rules parsed", summary.rules.to_string());
    print::aligned_line("Vendor rows", summary.entries.to_string());
    print::aligned_line("OUIs overridden", summary.overridden.to_string());

    let skipped: ColoredString = match summary.skipped {
        0 => "0".green(),
        n => n.to_string().color(colors::ACCENT).bold(),
    };
    print::aligned_line("Rows skipped", skipped);

    if let Some(bytes) = summary.bytes_written {
        print::aligned_line("Output", format!("{} ({bytes} bytes)", cfg.output.display()));
    }

    print::fat_separator();
    print::centerln(&format!("Finished: {rows} in {elapsed}"));
}
