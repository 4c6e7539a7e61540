use clap::Parser;
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "sysview",
    about = "Keyboard-driven terminal dashboard for host system information",
    version,
    args_override_self = true
)]
pub struct Cli {
    /// Show every category and enable color
    #[arg(short, long)]
    pub all: bool,

    /// Kernel / OS identity
    #[arg(short, long)]
    pub os: bool,

    /// Login name and hostname
    #[arg(short, long)]
    pub user: bool,

    /// Login shell
    #[arg(short, long)]
    pub shell: bool,

    /// Installed package count
    #[arg(short, long)]
    pub pkgs: bool,

    /// Terminal size
    #[arg(short, long)]
    pub res: bool,

    /// Time since boot
    #[arg(short = 't', long)]
    pub uptime: bool,

    /// 1 / 5 / 15 minute load averages
    #[arg(short, long)]
    pub load: bool,

    /// CPU model
    #[arg(short, long)]
    pub cpu: bool,

    /// Memory used / available
    #[arg(short, long)]
    pub mem: bool,

    /// Root filesystem total / free
    #[arg(short, long)]
    pub disk: bool,

    /// Network interface addresses
    #[arg(short, long)]
    pub net: bool,

    /// Text color: black, red, green, yellow, blue, magenta, cyan, white
    #[arg(short = 'C', long, value_name = "NAME")]
    pub color: Option<String>,

    /// Byte unit: B, KB, MB, GB, TB
    #[arg(short = 'U', long, value_name = "UNIT")]
    pub unit: Option<String>,

    /// Print one frame as plain text and exit
    #[arg(long)]
    pub once: bool,

    /// Print a JSON snapshot of the enabled categories and exit
    #[arg(long)]
    pub json: bool,

    /// Print config file path and current values, then exit
    #[arg(long)]
    pub print_config: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// True if any display flag was given; suppresses the show-everything default.
    pub fn any_display_flag(&self) -> bool {
        self.all
            || self.os || self.user || self.shell || self.pkgs || self.res
            || self.uptime || self.load || self.cpu || self.mem || self.disk || self.net
            || self.color.is_some()
            || self.unit.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_long_forms() {
        let cli = Cli::try_parse_from(["sysview", "-o", "--mem", "-C", "red", "--unit=mb"]).unwrap();
        assert!(cli.os && cli.mem && !cli.cpu);
        assert_eq!(cli.color.as_deref(), Some("red"));
        assert_eq!(cli.unit.as_deref(), Some("mb"));
        assert!(cli.any_display_flag());
    }

    #[test]
    fn test_bundled_short_flags() {
        let cli = Cli::try_parse_from(["sysview", "-tlc"]).unwrap();
        assert!(cli.uptime && cli.load && cli.cpu);
    }

    #[test]
    fn test_repeated_flags_accepted() {
        let cli = Cli::try_parse_from(["sysview", "-o", "-o", "-U", "kb", "-U", "tb"]).unwrap();
        assert!(cli.os);
        assert_eq!(cli.unit.as_deref(), Some("tb"));
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["sysview"]).unwrap();
        assert!(!cli.any_display_flag());
        let cli = Cli::try_parse_from(["sysview", "--once"]).unwrap();
        assert!(!cli.any_display_flag());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["sysview", "--bogus"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
