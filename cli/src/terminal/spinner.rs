use indicatif::ProgressStyle;
use tracing::info_span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// Runs `work` while a spinner with `message` is shown on stderr.
///
/// The spinner belongs to an `info` span, so `-q` hides it along with the
/// rest of the informational output.
pub fn with_spinner<T>(message: &str, work: impl FnOnce() -> T) -> T {
    let span = info_span!("work", indicatif.pb_show = true);
    span.pb_set_style(&spinner_style());
    span.pb_set_message(message);

    let _guard = span.enter();
    work()
}
