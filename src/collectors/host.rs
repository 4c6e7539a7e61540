use super::{FsStats, SystemSource};
use std::ffi::CStr;
use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const WAIT_STEP: Duration = Duration::from_millis(10);

/// The live machine: procfs, `sh -c` commands, libc identity calls, statvfs.
pub struct HostSource {
    command_timeout: Option<Duration>,
}

impl HostSource {
    /// `timeout_ms == 0` lets external commands run for as long as they like.
    pub fn new(timeout_ms: u64) -> Self {
        let command_timeout = (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms));
        Self { command_timeout }
    }

    fn spawn_and_wait(&self, command: &str) -> io::Result<Option<Vec<u8>>> {
        let mut child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // Drain stdout while waiting so a chatty command cannot stall on a full pipe
        let stdout = child.stdout.take();
        let reader = thread::spawn(move || -> io::Result<Vec<u8>> {
            let mut out = Vec::new();
            if let Some(mut stdout) = stdout {
                stdout.read_to_end(&mut out)?;
            }
            Ok(out)
        });

        if let Some(limit) = self.command_timeout {
            let deadline = Instant::now() + limit;
            while child.try_wait()?.is_none() {
                if Instant::now() >= deadline {
                    warn!("command timed out after {}ms: {command}", limit.as_millis());
                    let _ = child.kill();
                    let _ = child.wait();
                    // Not joined: a grandchild may still hold the pipe open
                    return Ok(None);
                }
                thread::sleep(WAIT_STEP);
            }
        }

        child.wait()?;
        let out = reader
            .join()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "stdout reader panicked"))??;
        Ok(Some(out))
    }
}

impl SystemSource for HostSource {
    fn read_file(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn run_command(&self, command: &str) -> Option<String> {
        let started = Instant::now();
        let out = match self.spawn_and_wait(command) {
            Ok(out) => out?,
            Err(e)  => {
                warn!("failed to run `{command}`: {e}");
                return None;
            }
        };
        debug!("`{command}` finished in {:?}", started.elapsed());
        let text = String::from_utf8_lossy(&out).into_owned();
        if text.trim().is_empty() { None } else { Some(text) }
    }

    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn login_name(&self) -> Option<String> {
        // SAFETY: getlogin returns NULL or a pointer to a NUL-terminated
        // static buffer; it is copied out before any other libc call.
        unsafe {
            let ptr = libc::getlogin();
            if ptr.is_null() {
                return None;
            }
            Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
        }
    }

    fn hostname(&self) -> Option<String> {
        nix::unistd::gethostname().ok()?.into_string().ok()
    }

    fn fs_stats(&self, path: &Path) -> io::Result<FsStats> {
        use nix::sys::statvfs::statvfs;
        let stat = statvfs(path)?;

        let frsize = stat.fragment_size() as u64;
        Ok(FsStats {
            total_bytes: (stat.blocks() as u64).saturating_mul(frsize),
            free_bytes:  (stat.blocks_free() as u64).saturating_mul(frsize),
        })
    }

    fn terminal_size(&self) -> (u16, u16) {
        crossterm::terminal::size().unwrap_or((80, 24))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_stdout_is_captured() {
        let host = HostSource::new(2000);
        assert_eq!(host.run_command("echo hello").as_deref(), Some("hello\n"));
    }

    #[test]
    fn test_silent_or_missing_command_is_none() {
        let host = HostSource::new(2000);
        assert_eq!(host.run_command("true"), None);
        assert_eq!(host.run_command("definitely-not-a-real-binary-xyz 2>/dev/null"), None);
    }

    #[test]
    fn test_slow_command_times_out() {
        let host = HostSource::new(50);
        let started = Instant::now();
        assert_eq!(host.run_command("sleep 5; echo late"), None);
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_large_output_is_not_a_timeout() {
        let host = HostSource::new(2000);
        let out = host.run_command("head -c 100000 /dev/zero | tr '\\0' a; echo");
        let out = out.expect("large output should be captured");
        assert_eq!(out.len(), 100_001);
        assert!(out.starts_with("aaaa"));
    }

    #[test]
    fn test_large_output_without_timeout() {
        let host = HostSource::new(0);
        let out = host.run_command("head -c 200000 /dev/zero | tr '\\0' b").unwrap();
        assert_eq!(out.len(), 200_000);
    }

    #[test]
    fn test_root_filesystem_has_size() {
        let stats = HostSource::new(0).fs_stats(Path::new("/")).unwrap();
        assert!(stats.total_bytes >= stats.free_bytes);
    }
}
