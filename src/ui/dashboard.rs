use crate::collectors::{self, SystemSource};
use crate::config::ProbeConfig;
use crate::models::category::Category;
use crate::models::reading::Reading;
use crate::models::screen::Screen;
use crate::options::Options;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};
use std::time::Instant;

pub const SEPARATOR: &str = "-------------------";
pub const FOOTER: &str = "Press ':' to refresh, 'q' to exit...";

const MARGIN:     u16 = 2;
const METRIC_COL: u16 = 4;
const NESTED_COL: u16 = 6;

/// Sample every enabled category, in on-screen order.
pub fn sample_all(opts: &Options, src: &dyn SystemSource, cfg: &ProbeConfig) -> Vec<(Category, Reading)> {
    opts.enabled()
        .map(|cat| {
            let started = Instant::now();
            let reading = collectors::sample(cat, src, cfg, &opts.unit);
            tracing::debug!("sampled {} in {:?}", cat.name(), started.elapsed());
            (cat, reading)
        })
        .collect()
}

/// One refresh cycle's frame: header, one row per enabled category, footer.
pub fn build_screen(opts: &Options, src: &dyn SystemSource, cfg: &ProbeConfig) -> Screen {
    layout(opts, &sample_all(opts, src, cfg))
}

/// Lay readings out top to bottom. Rows are numbered sequentially, so a
/// disabled category shifts everything below it up.
pub fn layout(opts: &Options, readings: &[(Category, Reading)]) -> Screen {
    let mut screen = Screen::new();
    let mut row = 1;
    screen.put_bold(row, MARGIN, format!("System Information (unit={})", opts.unit));
    row += 1;
    screen.put(row, MARGIN, SEPARATOR);
    row += 1;

    for (cat, reading) in readings {
        if *cat == Category::Network {
            screen.put(row, METRIC_COL, "Network Interfaces:");
            row += 1;
            for line in reading.lines() {
                screen.put(row, NESTED_COL, line.as_str());
                row += 1;
            }
            continue;
        }
        for line in reading.lines() {
            screen.put(row, METRIC_COL, format!("{}{}", label(*cat), line));
            row += 1;
        }
    }

    screen.put(row + 1, MARGIN, FOOTER);
    screen
}

fn label(cat: Category) -> &'static str {
    match cat {
        Category::Uptime => "Uptime: ",
        Category::Load   => "Load Average: ",
        Category::Cpu    => "CPU: ",
        Category::Disk   => "Disk: ",
        _                => "",
    }
}

/// Paint a screen onto the whole surface. Rows past the bottom edge are clipped.
pub fn render(f: &mut Frame, screen: &Screen, theme: &Theme) {
    let area = f.area();
    f.render_widget(Block::default().style(theme.text), area);

    for r in &screen.rows {
        if r.row >= area.height || r.col >= area.width {
            continue;
        }
        let style = if r.bold { theme.title } else { theme.text };
        let rect = Rect {
            x:      area.x + r.col,
            y:      area.y + r.row,
            width:  area.width - r.col,
            height: 1,
        };
        f.render_widget(Paragraph::new(Span::styled(r.text.as_str(), style)), rect);
    }
}
