use crate::cli::Cli;
use crate::models::category::Category;
use crate::ui::theme::ColorId;
use crate::util::human::Unit;
use std::collections::BTreeSet;

/// What to sample and how to show it. Built once at startup, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    enabled: BTreeSet<Category>,
    pub color_enabled: bool,
    pub color: ColorId,
    pub unit: Unit,
}

impl Default for Options {
    /// The no-flags configuration: everything on, no color, GB.
    fn default() -> Self {
        Self {
            enabled:       Category::ALL.into_iter().collect(),
            color_enabled: false,
            color:         ColorId::White,
            unit:          Unit::GB,
        }
    }
}

impl Options {
    /// Nothing enabled, no color, GB.
    pub fn empty() -> Self {
        Self { enabled: BTreeSet::new(), ..Self::default() }
    }

    #[cfg(test)]
    pub fn with(mut self, cat: Category) -> Self {
        self.enabled.insert(cat);
        self
    }

    #[cfg(test)]
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn from_cli(cli: &Cli) -> Self {
        if !cli.any_display_flag() {
            return Self::default();
        }

        let mut opts = Self::empty();
        if cli.all {
            opts.enabled.extend(Category::ALL);
            opts.color_enabled = true;
        }

        let flags = [
            (cli.os,     Category::Os),
            (cli.user,   Category::User),
            (cli.shell,  Category::Shell),
            (cli.pkgs,   Category::Packages),
            (cli.res,    Category::Resolution),
            (cli.uptime, Category::Uptime),
            (cli.load,   Category::Load),
            (cli.cpu,    Category::Cpu),
            (cli.mem,    Category::Memory),
            (cli.disk,   Category::Disk),
            (cli.net,    Category::Network),
        ];
        opts.enabled.extend(flags.into_iter().filter(|(on, _)| *on).map(|(_, c)| c));

        if let Some(name) = &cli.color {
            match ColorId::parse(name) {
                Some(c) => {
                    opts.color_enabled = true;
                    opts.color = c;
                }
                None => tracing::warn!("ignoring unknown color {name:?}"),
            }
        }
        if let Some(u) = &cli.unit {
            opts.unit = Unit::parse(u);
        }
        opts
    }

    #[cfg(test)]
    pub fn is_enabled(&self, cat: Category) -> bool {
        self.enabled.contains(&cat)
    }

    /// Enabled categories in on-screen order.
    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        self.enabled.iter().copied()
    }

    /// The display color, if color output is on.
    pub fn theme_color(&self) -> Option<ColorId> {
        self.color_enabled.then_some(self.color)
    }
}
