use super::SystemSource;
use crate::config::ProbeConfig;
use crate::util::human::{format_size, Unit};
use std::path::Path;

fn open_error(path: &Path) -> String {
    format!("Error opening {}", path.display())
}

fn read(src: &dyn SystemSource, path: &Path) -> Option<String> {
    match src.read_file(path) {
        Ok(text) => Some(text),
        Err(e)   => {
            tracing::debug!("cannot read {}: {e}", path.display());
            None
        }
    }
}

// ── Uptime ────────────────────────────────────────────────────────────

/// First field of /proc/uptime in seconds; 0 when malformed.
pub fn parse_uptime(text: &str) -> f64 {
    text.split_whitespace()
        .next()
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// "<days> days, HH:MM:SS" with whole seconds.
pub fn fmt_uptime(secs: f64) -> String {
    let total = secs as u64;
    let days = total / 86_400;
    let hrs  = (total % 86_400) / 3_600;
    let mins = (total % 3_600) / 60;
    let s    = total % 60;
    format!("{days} days, {hrs:02}:{mins:02}:{s:02}")
}

pub fn uptime(src: &dyn SystemSource, cfg: &ProbeConfig) -> String {
    match read(src, &cfg.uptime_path) {
        Some(text) => fmt_uptime(parse_uptime(&text)),
        None       => open_error(&cfg.uptime_path),
    }
}

// ── Load average ──────────────────────────────────────────────────────

/// 1/5/15 minute load; all zeros unless all three parse.
pub fn parse_loadavg(text: &str) -> [f64; 3] {
    let vals: Vec<f64> = text.split_whitespace()
        .take(3)
        .map_while(|v| v.parse().ok())
        .collect();
    match vals.as_slice() {
        [a, b, c] => [*a, *b, *c],
        _         => [0.0; 3],
    }
}

pub fn load(src: &dyn SystemSource, cfg: &ProbeConfig) -> String {
    match read(src, &cfg.loadavg_path) {
        Some(text) => {
            let [l1, l5, l15] = parse_loadavg(&text);
            format!("1min: {l1:.2}, 5min: {l5:.2}, 15min: {l15:.2}")
        }
        None => open_error(&cfg.loadavg_path),
    }
}

// ── CPU ───────────────────────────────────────────────────────────────

/// Value of the first "model name" line.
pub fn parse_cpu_model(text: &str) -> Option<String> {
    text.lines()
        .filter(|l| l.starts_with("model name"))
        .find_map(|l| l.split_once(':'))
        .map(|(_, v)| v.trim_start_matches([':', ' ', '\t']).trim_end_matches(['\n', '\r']).to_string())
}

pub fn cpu(src: &dyn SystemSource, cfg: &ProbeConfig) -> String {
    match read(src, &cfg.cpuinfo_path) {
        Some(text) => parse_cpu_model(&text).unwrap_or_else(|| "CPU info not found".to_string()),
        None       => open_error(&cfg.cpuinfo_path),
    }
}

// ── Memory ────────────────────────────────────────────────────────────

/// (MemTotal, MemAvailable) in kB; a missing or malformed field is 0.
pub fn parse_meminfo(text: &str) -> (u64, u64) {
    let mut total = 0;
    let mut avail = 0;
    for line in text.lines() {
        let mut parts = line.split_whitespace();
        let key = parts.next().unwrap_or("");
        let val = parts.next().and_then(|v| v.parse().ok()).unwrap_or(0);
        match key {
            "MemTotal:"     => total = val,
            "MemAvailable:" => avail = val,
            _               => {}
        }
    }
    (total, avail)
}

pub fn memory(src: &dyn SystemSource, cfg: &ProbeConfig, unit: &Unit) -> String {
    let Some(text) = read(src, &cfg.meminfo_path) else {
        return open_error(&cfg.meminfo_path);
    };
    let (total_kb, avail_kb) = parse_meminfo(&text);
    let used_kb = total_kb.saturating_sub(avail_kb);
    format!(
        "Used: {}, Available: {}",
        format_size(used_kb.saturating_mul(1024), unit),
        format_size(avail_kb.saturating_mul(1024), unit),
    )
}
