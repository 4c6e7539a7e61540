use super::SystemSource;
use crate::config::ProbeConfig;

pub const NETWORK_ERROR: &str = "Error getting network info";

/// Non-blank lines of the interface listing, trailing whitespace removed.
pub fn parse_interfaces(out: &str) -> Vec<String> {
    out.lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// One line per interface; a single error line when the listing is unavailable.
pub fn interfaces(src: &dyn SystemSource, cfg: &ProbeConfig) -> Vec<String> {
    let lines = src.run_command(&cfg.network_command)
        .map(|out| parse_interfaces(&out))
        .unwrap_or_default();
    if lines.is_empty() {
        tracing::debug!("`{}` listed no interfaces", cfg.network_command);
        return vec![NETWORK_ERROR.to_string()];
    }
    lines
}
