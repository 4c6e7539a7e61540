use crate::collectors::SystemSource;
use crate::config::ProbeConfig;
use crate::input::{handle_key, Action};
use crate::models::screen::Screen;
use crate::options::Options;
use crate::ui::theme::Theme;
use crate::ui::{dashboard, help};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardState {
    Instructions,
    Active,
}

// ── App ───────────────────────────────────────────────────────────────

pub struct App<S: SystemSource> {
    options: Options,
    probes:  ProbeConfig,
    source:  S,
    theme:   Theme,

    pub state:  DashboardState,
    /// Last frame drawn; only replaced by a refresh cycle.
    pub screen: Screen,
    pub refresh_count: u64,

    pub should_quit: bool,
}

impl<S: SystemSource> App<S> {
    pub fn new(options: Options, probes: ProbeConfig, source: S) -> Self {
        let theme = Theme::new(options.theme_color());
        Self {
            options,
            probes,
            source,
            theme,
            state:         DashboardState::Instructions,
            screen:        help::instructions(),
            refresh_count: 0,
            should_quit:   false,
        }
    }

    #[cfg(test)]
    pub fn source(&self) -> &S {
        &self.source
    }

    // ── Main event loop ───────────────────────────────────────────────

    /// Block on the keyboard until quit. There is no timer: the screen only
    /// changes when a key asks for it.
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<()> {
        self.draw(terminal)?;
        while !self.should_quit {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_action(handle_key(key)) {
                        self.draw(terminal)?;
                    }
                }
                // Same frame at the new size; resizing does not re-sample
                Event::Resize(_, _) => self.draw(terminal)?,
                _ => {}
            }
        }
        Ok(())
    }

    pub fn draw<B: ratatui::backend::Backend>(
        &self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> Result<()> {
        terminal.draw(|f| dashboard::render(f, &self.screen, &self.theme))?;
        Ok(())
    }

    // ── Input dispatch ────────────────────────────────────────────────

    /// Apply one action. Returns true when the screen changed.
    pub fn handle_action(&mut self, action: Action) -> bool {
        if action == Action::Interrupt {
            self.should_quit = true;
            return false;
        }

        match (self.state, action) {
            (DashboardState::Instructions, Action::Start) => {
                info!("dashboard started");
                self.state = DashboardState::Active;
                self.refresh();
                true
            }
            (DashboardState::Active, Action::Refresh) => {
                self.refresh();
                true
            }
            (DashboardState::Active, Action::Quit) => {
                info!("quit after {} refresh cycles", self.refresh_count);
                self.should_quit = true;
                false
            }
            _ => false,
        }
    }

    /// One refresh cycle: sample every enabled category and rebuild the frame.
    pub fn refresh(&mut self) {
        let started = Instant::now();
        self.screen = dashboard::build_screen(&self.options, &self.source, &self.probes);
        self.refresh_count += 1;
        debug!("refresh #{} took {:?}", self.refresh_count, started.elapsed());
    }
}
