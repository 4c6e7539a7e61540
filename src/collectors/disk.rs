use super::SystemSource;
use crate::config::ProbeConfig;
use crate::util::human::{format_size, Unit};

/// "Total: <fmt>, Free: <fmt>" for the configured mount (root by default).
pub fn disk(src: &dyn SystemSource, cfg: &ProbeConfig, unit: &Unit) -> String {
    match src.fs_stats(&cfg.disk_path) {
        Ok(st) => format!(
            "Total: {}, Free: {}",
            format_size(st.total_bytes, unit),
            format_size(st.free_bytes, unit),
        ),
        Err(e) => {
            tracing::warn!("statvfs {} failed: {e}", cfg.disk_path.display());
            "Error getting disk info".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::fake::FakeSource;

    #[test]
    fn test_disk_totals() {
        let gib = 1_073_741_824;
        let src = FakeSource::new().with_fs(500 * gib, 123 * gib + gib / 2);
        assert_eq!(
            disk(&src, &ProbeConfig::default(), &Unit::GB),
            "Total: 500.00 GB, Free: 123.50 GB",
        );
        assert_eq!(src.accesses(), vec!["statvfs:/"]);
    }

    #[test]
    fn test_disk_error() {
        assert_eq!(
            disk(&FakeSource::new(), &ProbeConfig::default(), &Unit::GB),
            "Error getting disk info",
        );
    }
}
