pub mod disk;
pub mod host;
pub mod identity;
pub mod network;
pub mod packages;
pub mod procfs;
pub mod terminal;

#[cfg(test)]
pub mod fake;

use crate::config::ProbeConfig;
use crate::models::category::Category;
use crate::models::reading::Reading;
use crate::util::human::Unit;
use std::io;
use std::path::Path;

/// Usage of one mounted filesystem, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FsStats {
    pub total_bytes: u64,
    pub free_bytes:  u64,
}

/// Raw access to the live host. Probes read everything through this so
/// tests can swap in a scripted host.
pub trait SystemSource {
    fn read_file(&self, path: &Path) -> io::Result<String>;

    /// Stdout of a shell command; None if it could not run, timed out or
    /// printed nothing.
    fn run_command(&self, command: &str) -> Option<String>;

    fn env_var(&self, name: &str) -> Option<String>;

    fn login_name(&self) -> Option<String>;

    fn hostname(&self) -> Option<String>;

    fn fs_stats(&self, path: &Path) -> io::Result<FsStats>;

    /// (cols, rows) of the text surface.
    fn terminal_size(&self) -> (u16, u16);
}

/// Run the one probe behind `cat`. Never fails: unavailable data comes
/// back as that probe's placeholder text.
pub fn sample(cat: Category, src: &dyn SystemSource, cfg: &ProbeConfig, unit: &Unit) -> Reading {
    match cat {
        Category::Os         => Reading::Line(identity::os(src, cfg)),
        Category::User       => Reading::Line(identity::user_host(src)),
        Category::Shell      => Reading::Line(identity::shell(src)),
        Category::Packages   => Reading::Line(packages::packages(src, cfg)),
        Category::Resolution => Reading::Line(terminal::resolution(src)),
        Category::Uptime     => Reading::Line(procfs::uptime(src, cfg)),
        Category::Load       => Reading::Line(procfs::load(src, cfg)),
        Category::Cpu        => Reading::Line(procfs::cpu(src, cfg)),
        Category::Memory     => Reading::Line(procfs::memory(src, cfg, unit)),
        Category::Disk       => Reading::Line(disk::disk(src, cfg, unit)),
        Category::Network    => Reading::Lines(network::interfaces(src, cfg)),
    }
}
