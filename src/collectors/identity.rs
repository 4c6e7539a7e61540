use super::SystemSource;
use crate::config::ProbeConfig;

/// "OS: <first line of the identity command>"
pub fn os(src: &dyn SystemSource, cfg: &ProbeConfig) -> String {
    let line = src.run_command(&cfg.os_command)
        .and_then(|out| out.lines().next().map(|l| l.trim_end().to_string()))
        .filter(|l| !l.is_empty());
    match line {
        Some(l) => format!("OS: {l}"),
        None    => {
            tracing::debug!("os identity command produced nothing");
            "OS: unknown".to_string()
        }
    }
}

pub fn user_host(src: &dyn SystemSource) -> String {
    let user = src.login_name().unwrap_or_else(|| "unknown".into());
    let host = src.hostname().unwrap_or_else(|| "unknown".into());
    format!("User: {user}, Host: {host}")
}

pub fn shell(src: &dyn SystemSource) -> String {
    format!("Shell: {}", src.env_var("SHELL").unwrap_or_else(|| "unknown".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collectors::fake::FakeSource;

    #[test]
    fn test_os_takes_first_line() {
        let src = FakeSource::new().with_command("uname -a", "Linux box 6.1.0 x86_64\nextra\n");
        assert_eq!(os(&src, &ProbeConfig::default()), "OS: Linux box 6.1.0 x86_64");
    }

    #[test]
    fn test_os_unknown_without_output() {
        assert_eq!(os(&FakeSource::new(), &ProbeConfig::default()), "OS: unknown");
    }

    #[test]
    fn test_user_host_substitutes_missing_parts() {
        let src = FakeSource::new().with_identity(Some("alice"), Some("db01"));
        assert_eq!(user_host(&src), "User: alice, Host: db01");

        let src = FakeSource::new().with_identity(None, Some("db01"));
        assert_eq!(user_host(&src), "User: unknown, Host: db01");

        let src = FakeSource::new().with_identity(Some("alice"), None);
        assert_eq!(user_host(&src), "User: alice, Host: unknown");
    }

    #[test]
    fn test_shell() {
        let src = FakeSource::new().with_env("SHELL", "/bin/zsh");
        assert_eq!(shell(&src), "Shell: /bin/zsh");
        assert_eq!(shell(&FakeSource::new()), "Shell: unknown");
    }
}
