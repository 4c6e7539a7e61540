use super::{FsStats, SystemSource};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Scripted host used in tests. Unknown files, commands and variables
/// behave as missing; every access is recorded.
#[derive(Default)]
pub struct FakeSource {
    files:    HashMap<PathBuf, String>,
    commands: HashMap<String, String>,
    env:      HashMap<String, String>,
    login:    Option<String>,
    host:     Option<String>,
    fs:       Option<FsStats>,
    size:     (u16, u16),
    accesses: RefCell<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self { size: (80, 24), ..Self::default() }
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn with_command(mut self, command: &str, stdout: &str) -> Self {
        self.commands.insert(command.to_string(), stdout.to_string());
        self
    }

    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_identity(mut self, login: Option<&str>, host: Option<&str>) -> Self {
        self.login = login.map(str::to_string);
        self.host  = host.map(str::to_string);
        self
    }

    pub fn with_fs(mut self, total_bytes: u64, free_bytes: u64) -> Self {
        self.fs = Some(FsStats { total_bytes, free_bytes });
        self
    }

    pub fn with_size(mut self, cols: u16, rows: u16) -> Self {
        self.size = (cols, rows);
        self
    }

    /// Everything probes touched, in order ("file:/proc/uptime", "cmd:uname -a", ...).
    pub fn accesses(&self) -> Vec<String> {
        self.accesses.borrow().clone()
    }

    fn record(&self, what: String) {
        self.accesses.borrow_mut().push(what);
    }
}

impl SystemSource for FakeSource {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        self.record(format!("file:{}", path.display()));
        self.files.get(path).cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    fn run_command(&self, command: &str) -> Option<String> {
        self.record(format!("cmd:{command}"));
        self.commands.get(command).filter(|s| !s.is_empty()).cloned()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        self.record(format!("env:{name}"));
        self.env.get(name).cloned()
    }

    fn login_name(&self) -> Option<String> {
        self.record("login".into());
        self.login.clone()
    }

    fn hostname(&self) -> Option<String> {
        self.record("hostname".into());
        self.host.clone()
    }

    fn fs_stats(&self, path: &Path) -> io::Result<FsStats> {
        self.record(format!("statvfs:{}", path.display()));
        self.fs.ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no filesystem"))
    }

    fn terminal_size(&self) -> (u16, u16) {
        self.record("termsize".into());
        self.size
    }
}
