use serde::Serialize;

/// One toggleable information group on the dashboard.
///
/// Variant order is the on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Os,
    User,
    Shell,
    Packages,
    Resolution,
    Uptime,
    Load,
    Cpu,
    Memory,
    Disk,
    Network,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Os,
        Category::User,
        Category::Shell,
        Category::Packages,
        Category::Resolution,
        Category::Uptime,
        Category::Load,
        Category::Cpu,
        Category::Memory,
        Category::Disk,
        Category::Network,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Os         => "os",
            Category::User       => "user",
            Category::Shell      => "shell",
            Category::Packages   => "packages",
            Category::Resolution => "resolution",
            Category::Uptime     => "uptime",
            Category::Load       => "load",
            Category::Cpu        => "cpu",
            Category::Memory     => "memory",
            Category::Disk       => "disk",
            Category::Network    => "network",
        }
    }
}
