use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub probes: ProbeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where each probe gets its raw data from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Shell command printing one kernel identity line
    pub os_command: String,
    /// Shell command listing interface addresses, one per line
    pub network_command: String,
    /// Kill external commands after this many milliseconds (0 = wait forever)
    pub command_timeout_ms: u64,
    pub cpuinfo_path: PathBuf,
    pub meminfo_path: PathBuf,
    pub uptime_path:  PathBuf,
    pub loadavg_path: PathBuf,
    /// Mount point whose filesystem statistics are shown
    pub disk_path:    PathBuf,
    /// Package databases, queried in order; the first non-zero count wins
    pub package_managers: Vec<PackageManager>,
}

/// A package database query whose stdout starts with the package count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageManager {
    pub label:   String,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing filter directive used when RUST_LOG is unset
    pub level: String,
    /// Log file; None = <cache_dir>/sysview/sysview.log
    pub file:  Option<PathBuf>,
}

// ── Defaults ─────────────────────────────────────────────────────────

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            os_command:      "uname -a".into(),
            network_command: "ip -brief address".into(),
            command_timeout_ms: 5000,
            cpuinfo_path: "/proc/cpuinfo".into(),
            meminfo_path: "/proc/meminfo".into(),
            uptime_path:  "/proc/uptime".into(),
            loadavg_path: "/proc/loadavg".into(),
            disk_path:    "/".into(),
            package_managers: vec![
                PackageManager { label: "dpkg".into(), command: "dpkg -l 2>/dev/null | wc -l".into() },
                PackageManager { label: "rpm".into(),  command: "rpm -qa 2>/dev/null | wc -l".into() },
            ],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".into(), file: None }
    }
}

// ── Load / Save ───────────────────────────────────────────────────────

impl Config {
    /// Load the user's config file. A missing file gets defaults written to
    /// it; an unreadable one is an error and the caller decides the fallback.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => load_or_create(&path),
            None       => Ok(Config::default()),
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sysview").join("sysview.toml"))
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.logging.file.clone()
            .or_else(|| dirs::cache_dir().map(|p| p.join("sysview").join("sysview.log")))
    }
}

pub fn load_or_create(path: &Path) -> Result<Config> {
    if !path.exists() {
        // Write defaults on first run (best-effort)
        let _ = write_defaults(path);
        return Ok(Config::default());
    }
    load_from(path).with_context(|| format!("unreadable config {}", path.display()))
}

pub fn load_from(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    let cfg: Config = toml::from_str(&text)?;
    Ok(cfg)
}

pub fn write_defaults(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(&Config::default())?;
    fs::write(path, format!("# sysview configuration\n# Generated on first run, edit freely\n\n{}", text))?;
    Ok(())
}
