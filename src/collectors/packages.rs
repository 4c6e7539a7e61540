use super::SystemSource;
use crate::config::ProbeConfig;

/// Leading unsigned integer of a command's output; anything else is 0.
pub fn parse_count(out: &str) -> u64 {
    out.split_whitespace()
        .next()
        .and_then(|tok| tok.parse().ok())
        .unwrap_or(0)
}

/// "Packages (<manager>): <count>" from the first database with a non-zero
/// count. When every database reports zero, the last one is named.
pub fn packages(src: &dyn SystemSource, cfg: &ProbeConfig) -> String {
    let mut label: &str = "unknown";
    for pm in &cfg.package_managers {
        label = pm.label.as_str();
        let count = src.run_command(&pm.command).map(|o| parse_count(&o)).unwrap_or(0);
        tracing::debug!("{} reports {} packages", pm.label, count);
        if count > 0 {
            return format!("Packages ({}): {}", pm.label, count);
        }
    }
    format!("Packages ({label}): 0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::fake::FakeSource;

    const DPKG: &str = "dpkg -l 2>/dev/null | wc -l";
    const RPM:  &str = "rpm -qa 2>/dev/null | wc -l";

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1834\n"), 1834);
        assert_eq!(parse_count("   12 "), 12);
        assert_eq!(parse_count("abc"), 0);
        assert_eq!(parse_count(""), 0);
    }

    #[test]
    fn test_primary_wins_when_non_zero() {
        let src = FakeSource::new().with_command(DPKG, "1834\n").with_command(RPM, "99\n");
        assert_eq!(packages(&src, &ProbeConfig::default()), "Packages (dpkg): 1834");
        assert!(!src.accesses().contains(&format!("cmd:{RPM}")));
    }

    #[test]
    fn test_zero_primary_falls_back() {
        let src = FakeSource::new().with_command(DPKG, "0\n").with_command(RPM, "512\n");
        assert_eq!(packages(&src, &ProbeConfig::default()), "Packages (rpm): 512");
    }

    #[test]
    fn test_both_zero_reports_fallback_label() {
        let src = FakeSource::new();
        assert_eq!(packages(&src, &ProbeConfig::default()), "Packages (rpm): 0");
    }

    #[test]
    fn test_no_managers_configured() {
        let cfg = ProbeConfig { package_managers: Vec::new(), ..ProbeConfig::default() };
        assert_eq!(packages(&FakeSource::new(), &cfg), "Packages (unknown): 0");
    }
}
