//! Main TUI application state and logic

use crate::collection::Applied;
use crate::input::{FieldKind, OperandField};
use crate::sequencer::{Sequencer, Visualizer};
use crate::settings::{Settings, StructureKind};
use crate::snippet::Language;
use crate::structures::{LinkedList, Operands, Queue, Vector};
use crate::ui::panes::{
    render_code_pane, render_controls_pane, render_phase_pane, render_status_bar,
    render_structure_pane, ControlsRenderData, StatusRenderData,
};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Structure,
    Controls,
    Code,
}

impl FocusedPane {
    /// Move focus to the next pane (structure -> controls -> code)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Structure => FocusedPane::Controls,
            FocusedPane::Controls => FocusedPane::Code,
            FocusedPane::Code => FocusedPane::Structure,
        }
    }
}

/// The main application state
pub struct App {
    /// One sequencer per visualized structure, in tab order
    pub pages: Vec<Box<dyn Visualizer>>,

    /// Index of the visible page
    pub active: usize,

    /// Language of the code pane
    pub language: Language,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Operand inputs of the visible page
    pub value_field: OperandField,
    pub position_field: OperandField,

    /// Field receiving keystrokes, if any
    pub editing: Option<FieldKind>,

    pub code_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create the app with one page per structure
    pub fn new(settings: &Settings) -> Self {
        let interval = settings.interval();
        let pages: Vec<Box<dyn Visualizer>> = vec![
            Box::new(Sequencer::new(
                LinkedList::new(settings.linked_list.seed.clone()),
                interval,
            )),
            Box::new(Sequencer::new(
                Queue::new(settings.queue.seed.clone(), settings.queue.capacity),
                interval,
            )),
            Box::new(Sequencer::new(
                Vector::new(settings.vector.seed.clone(), settings.vector.capacity),
                interval,
            )),
        ];
        let active = match settings.structure {
            StructureKind::LinkedList => 0,
            StructureKind::Queue => 1,
            StructureKind::Vector => 2,
        };

        let operands = pages[active].operands();

        App {
            pages,
            active,
            language: settings.language,
            focused_pane: FocusedPane::Structure,
            value_field: OperandField::new(operands.value),
            position_field: OperandField::new(operands.position),
            editing: None,
            code_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    pub fn page(&self) -> &dyn Visualizer {
        self.pages[self.active].as_ref()
    }

    pub fn page_mut(&mut self) -> &mut dyn Visualizer {
        self.pages[self.active].as_mut()
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let result = self.event_loop(terminal);
        self.shutdown();
        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.on_tick(Instant::now());

            // Use poll with timeout so due animation steps are not delayed by input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Deliver due animation steps of the visible page
    pub fn on_tick(&mut self, now: Instant) {
        let page = self.page_mut();
        let was_running = page.is_running();
        if page.pump(now) > 0 && was_running && !page.is_running() {
            let frame = page.frame();
            self.status_message = format!("Done: {}", frame.status);
        }
    }

    /// Cancel every live tick source
    pub fn shutdown(&mut self) {
        for page in &mut self.pages {
            page.stop();
        }
        log::info!("shutting down");
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[1]);

        // Left column: Structure (top) | Phase (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(columns[0]);

        // Right column: Controls (top) | Code (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(columns[1]);

        let titles: Vec<&str> = self.pages.iter().map(|p| p.title()).collect();
        let tabs = Tabs::new(titles)
            .select(self.active)
            .block(
                Block::default()
                    .title(" dsviz ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
            )
            .style(Style::default().fg(DEFAULT_THEME.fg))
            .highlight_style(
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, main_chunks[0]);

        let page = self.pages[self.active].as_ref();
        let step = page.frame();
        let operations = page.operation_names();
        let code = page.snippet(self.language);

        render_structure_pane(
            frame,
            left_rows[0],
            page.title(),
            &step,
            self.focused_pane == FocusedPane::Structure,
        );

        render_phase_pane(frame, left_rows[1], &step);

        render_controls_pane(
            frame,
            right_rows[0],
            ControlsRenderData {
                operations: &operations,
                selected: page.operation_index(),
                operand_use: page.operand_use(),
                value: &self.value_field,
                position: &self.position_field,
                editing: self.editing,
                can_start: page.can_start(),
                is_running: page.is_running(),
                capacity_commands: page.has_growable_capacity(),
            },
            self.focused_pane == FocusedPane::Controls,
        );

        render_code_pane(
            frame,
            right_rows[1],
            &code,
            self.language,
            self.focused_pane == FocusedPane::Code,
            &mut self.code_scroll,
        );

        render_status_bar(
            frame,
            main_chunks[2],
            StatusRenderData {
                message: &self.status_message,
                step: step.step,
                step_count: step.step_count,
                is_running: step.running,
                is_editing: self.editing.is_some(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(kind) = self.editing {
            self.handle_edit_key(kind, key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.switch_page(1),
            KeyCode::BackTab => self.switch_page(-1),
            KeyCode::Left => self.cycle_operation(-1),
            KeyCode::Right => self.cycle_operation(1),
            KeyCode::Char(' ') => {
                // Toggle play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play(Instant::now());
                }
            }
            KeyCode::Char('r') => {
                self.page_mut().reset_step();
                self.status_message = "Rewound to step 0".to_string();
            }
            KeyCode::Char('R') => {
                self.page_mut().reset_all();
                self.status_message = "Reset to default values".to_string();
            }
            KeyCode::Char('v') => self.begin_edit(FieldKind::Value),
            KeyCode::Char('p') => self.begin_edit(FieldKind::Position),
            KeyCode::Char('l') => {
                self.language = self.language.toggle();
                self.code_scroll = 0;
                self.status_message = format!("Showing {} code", self.language);
            }
            KeyCode::Char('+') => self.reserve(),
            KeyCode::Char('s') => self.shrink_to_fit(),
            KeyCode::Char('f') => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => {
                if self.focused_pane == FocusedPane::Code {
                    self.code_scroll = self.code_scroll.saturating_sub(1);
                }
            }
            KeyCode::Down => {
                if self.focused_pane == FocusedPane::Code {
                    self.code_scroll = self.code_scroll.saturating_add(1);
                }
            }
            _ => {}
        }
    }

    /// Start or pause the visible page
    pub fn toggle_play(&mut self, now: Instant) {
        if self.page().is_running() {
            self.page_mut().stop();
            self.status_message = "Paused".to_string();
        } else if self.page().can_start() {
            self.page_mut().start_at(now);
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Start disabled for these operands".to_string();
        }
    }

    fn handle_edit_key(&mut self, kind: FieldKind, key: KeyEvent) {
        let field = match kind {
            FieldKind::Value => &mut self.value_field,
            FieldKind::Position => &mut self.position_field,
        };
        match key.code {
            KeyCode::Char(c) => {
                field.push(c);
            }
            KeyCode::Backspace => field.backspace(),
            KeyCode::Enter | KeyCode::Esc => {
                self.editing = None;
                self.status_message = "Ready!".to_string();
            }
            _ => {}
        }
        self.store_fields();
    }

    fn begin_edit(&mut self, kind: FieldKind) {
        if self.page().is_running() {
            self.status_message = "Pause before editing operands".to_string();
            return;
        }
        self.editing = Some(kind);
        match kind {
            FieldKind::Value => self.value_field.clear(),
            FieldKind::Position => self.position_field.clear(),
        }
        self.store_fields();
        self.status_message = "Type a number, Enter to finish".to_string();
    }

    /// Leave the visible page the way a page unload would, then show another
    pub fn switch_page(&mut self, offset: isize) {
        self.editing = None;
        self.page_mut().stop();
        let len = self.pages.len() as isize;
        self.active = (self.active as isize + offset).rem_euclid(len) as usize;
        self.code_scroll = 0;
        self.load_fields();
        log::info!("showing {}", self.page().title());
        self.status_message = format!("{} selected", self.page().title());
    }

    fn cycle_operation(&mut self, offset: isize) {
        self.page_mut().cycle_operation(offset);
        let page = self.page();
        let name = page
            .operation_names()
            .get(page.operation_index())
            .cloned()
            .unwrap_or_default();
        self.status_message = format!("Operation: {}", name);
    }

    fn reserve(&mut self) {
        if !self.page().has_growable_capacity() {
            return;
        }
        let requested = self.value_field.value();
        let applied = usize::try_from(requested)
            .ok()
            .map(|n| self.page_mut().reserve(n));
        self.status_message = match applied {
            Some(Applied::Changed) => format!("Reserved capacity {}", requested),
            _ => format!("Cannot reserve {}: below current size", requested),
        };
    }

    fn shrink_to_fit(&mut self) {
        if !self.page().has_growable_capacity() {
            return;
        }
        self.page_mut().shrink_to_fit();
        self.status_message = "Capacity shrunk to size".to_string();
    }

    fn load_fields(&mut self) {
        let operands = self.page().operands();
        self.value_field.set(operands.value);
        self.position_field.set(operands.position);
    }

    fn store_fields(&mut self) {
        let operands = Operands::new(self.value_field.value(), self.position_field.value());
        self.page_mut().set_operands(operands);
    }
}
