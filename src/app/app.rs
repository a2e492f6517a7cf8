use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Position, Rect},
    widgets::TableState,
};
use tracing::{info, warn};

use crate::{
    api::HoldingsApi,
    app::{
        HoldingsScreen,
        loader::{HoldingsLoader, LoadPoll},
        ui::{self, UiSettings},
    },
};

const TICK: Duration = Duration::from_millis(100);

pub struct App {
    screen: HoldingsScreen,
    settings: UiSettings,
    table_state: TableState,
    summary_area: Rect,
    loader: Option<HoldingsLoader>,
}

impl App {
    pub fn new(screen: HoldingsScreen, settings: UiSettings) -> Self {
        Self {
            screen,
            settings,
            table_state: TableState::default(),
            summary_area: Rect::default(),
            loader: None,
        }
    }

    pub fn screen(&self) -> &HoldingsScreen {
        &self.screen
    }

    pub async fn run(&mut self, api: HoldingsApi) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.start_loading(api);
        let result = self.run_app(&mut terminal);
        // Tear down the fetch with the screen so a late result has nowhere to go.
        self.loader = None;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.poll_loader();
            self.draw(terminal)?;

            if !event::poll(TICK)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        info!("closing holdings screen");
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    /// Renders one frame and remembers where the summary panel landed.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| {
            self.summary_area =
                ui::render(frame, &self.screen, &self.settings, &mut self.table_state);
        })?;

        Ok(())
    }

    /// Returns `true` when the key closes the screen.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') => {
                self.screen.toggle_summary();
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            _ => {}
        }

        false
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        if self
            .summary_area
            .contains(Position::new(mouse.column, mouse.row))
        {
            self.screen.toggle_summary();
        }
    }

    pub fn start_loading(&mut self, api: HoldingsApi) {
        self.loader = Some(HoldingsLoader::spawn(api));
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Picks up the fetch result once it is available. The loader is released
    /// after the first result, so at most one fetch is ever applied.
    pub fn poll_loader(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };

        match loader.poll() {
            LoadPoll::Pending => {}
            LoadPoll::Ready(result) => {
                self.screen.apply_load_result(result);
                self.table_state.select(None);
                self.loader = None;
            }
            LoadPoll::Closed => {
                warn!("holdings fetch ended without a result");
                self.loader = None;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn is_loading(&self) -> bool {
        self.loader.is_some()
    }

    fn select_next(&mut self) {
        let len = self.screen.holdings().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn select_previous(&mut self) {
        let len = self.screen.holdings().len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }
}
