mod app;
mod cli;
mod collectors;
mod config;
mod input;
mod models;
mod options;
mod ui;
mod util;

use anyhow::{Context, Result};
use app::App;
use clap::{CommandFactory, Parser};
use cli::Cli;
use collectors::host::HostSource;
use collectors::SystemSource;
use config::{Config, ProbeConfig};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use options::Options;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use std::panic;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "sysview", &mut io::stdout());
        return Ok(());
    }

    let (cfg, cfg_err) = match Config::load() {
        Ok(cfg) => (cfg, None),
        Err(e)  => (Config::default(), Some(e)),
    };
    if let Err(e) = util::logging::init(&cfg) {
        // Logging is optional; the dashboard works without it
        eprintln!("sysview: logging disabled: {e:#}");
    }
    if let Some(e) = cfg_err {
        tracing::warn!("using default config: {e:#}");
        eprintln!("sysview: using default config: {e:#}");
    }

    if cli.print_config {
        return run_print_config(&cfg);
    }

    let options = Options::from_cli(&cli);
    tracing::info!(
        "starting: categories={:?} unit={} color={:?}",
        options.enabled().map(|c| c.name()).collect::<Vec<_>>(),
        options.unit,
        options.theme_color(),
    );
    let source = HostSource::new(cfg.probes.command_timeout_ms);

    if cli.json {
        return run_json_snapshot(&options, &source, &cfg);
    }
    if cli.once {
        return run_once(&options, &source, &cfg);
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let result = run(App::new(options, cfg.probes, source));
    restore_terminal()?;
    result
}

fn run_once(options: &Options, source: &HostSource, cfg: &Config) -> Result<()> {
    write_once(&mut io::stdout().lock(), options, source, &cfg.probes)
}

/// One refresh cycle as plain text, one screen row per line.
fn write_once(out: &mut impl Write, options: &Options, source: &dyn SystemSource, probes: &ProbeConfig) -> Result<()> {
    let screen = ui::dashboard::build_screen(options, source, probes);
    for line in screen.to_lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn run_json_snapshot(options: &Options, source: &HostSource, cfg: &Config) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&snapshot(options, source, &cfg.probes))?);
    Ok(())
}

fn snapshot(options: &Options, source: &dyn SystemSource, probes: &ProbeConfig) -> serde_json::Value {
    use serde_json::json;

    let metrics: Vec<_> = ui::dashboard::sample_all(options, source, probes)
        .into_iter()
        .map(|(cat, reading)| json!({ "category": cat, "value": reading }))
        .collect();

    json!({
        "sysview_version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Local::now().to_rfc3339(),
        "unit":      options.unit.label(),
        "color":     options.theme_color(),
        "metrics":   metrics,
    })
}

fn run_print_config(cfg: &Config) -> Result<()> {
    let path = Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    let log = cfg.log_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(disabled)".to_string());
    let p = &cfg.probes;
    println!("Config: {}", path);
    println!();
    println!("[probes]");
    println!("  os_command         = {}", p.os_command);
    println!("  network_command    = {}", p.network_command);
    for pm in &p.package_managers {
        println!("  package manager    = {} ({})", pm.label, pm.command);
    }
    println!("  command_timeout_ms = {}", p.command_timeout_ms);
    println!("  cpuinfo_path       = {}", p.cpuinfo_path.display());
    println!("  meminfo_path       = {}", p.meminfo_path.display());
    println!("  uptime_path        = {}", p.uptime_path.display());
    println!("  loadavg_path       = {}", p.loadavg_path.display());
    println!("  disk_path          = {}", p.disk_path.display());
    println!();
    println!("[logging]");
    println!("  level = {}", cfg.logging.level);
    println!("  file  = {}", log);
    Ok(())
}

fn run(mut app: App<HostSource>) -> Result<()> {
    enable_raw_mode().context("cannot put terminal in raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;
    term.hide_cursor()?;

    app.run(&mut term)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show)?;
    Ok(())
}
