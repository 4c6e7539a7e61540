use std::fmt;

/// Display unit for byte counts.
///
/// Anything outside B/KB/MB/GB/TB is kept verbatim in `Other` and printed as
/// raw bytes under that label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    B,
    KB,
    MB,
    GB,
    TB,
    Other(String),
}

impl Unit {
    /// Normalize a user-supplied unit: first 3 characters, ASCII-uppercased.
    pub fn parse(raw: &str) -> Self {
        let norm: String = raw.chars().take(3).collect::<String>().to_ascii_uppercase();
        match norm.as_str() {
            "B"  => Unit::B,
            "KB" => Unit::KB,
            "MB" => Unit::MB,
            "GB" => Unit::GB,
            "TB" => Unit::TB,
            _    => Unit::Other(norm),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Unit::B        => "B",
            Unit::KB       => "KB",
            Unit::MB       => "MB",
            Unit::GB       => "GB",
            Unit::TB       => "TB",
            Unit::Other(s) => s,
        }
    }

    fn scale(&self) -> f64 {
        const KB: f64 = 1_024.0;
        const MB: f64 = 1_048_576.0;
        const GB: f64 = 1_073_741_824.0;
        const TB: f64 = 1_099_511_627_776.0;
        match self {
            Unit::KB => KB,
            Unit::MB => MB,
            Unit::GB => GB,
            Unit::TB => TB,
            Unit::B | Unit::Other(_) => 1.0,
        }
    }
}

impl Default for Unit {
    fn default() -> Self { Unit::GB }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Format a raw byte count at a fixed unit: "1.50 KB"
pub fn format_size(bytes: u64, unit: &Unit) -> String {
    format!("{:.2} {}", bytes as f64 / unit.scale(), unit.label())
}
