//! Tickets screen: the full list, a modal editor, and delete confirmation.

use super::confirm::ConfirmDialog;
use super::form::Input;
use crate::output::CONFIRM_DELETE;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};
use ticketflow_core::model::{Priority, Status, Ticket, TicketDraft};
use ticketflow_core::validate::{FieldErrors, TicketForm};

/// What the screen wants the app to do against the store.
pub enum TicketAction {
    Create(TicketDraft),
    Update(u64, TicketDraft),
    Delete(u64),
    /// Esc/q: back to the dashboard.
    Back,
}

// ---------------------------------------------------------------------------
// Editor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
    Status,
    Priority,
}

impl Field {
    const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Status,
            Self::Status => Self::Priority,
            Self::Priority => Self::Title,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Priority,
            Self::Description => Self::Title,
            Self::Status => Self::Description,
            Self::Priority => Self::Status,
        }
    }
}

enum EditorAction {
    Save(Option<u64>, TicketDraft),
    Cancel,
}

/// Modal form over the list. `ticket_id` is `None` for a new ticket.
pub struct TicketEditor {
    ticket_id: Option<u64>,
    title: Input,
    description: Input,
    status: Status,
    priority: Priority,
    pub(crate) errors: FieldErrors,
    focus: Field,
}

impl TicketEditor {
    fn create() -> Self {
        Self {
            ticket_id: None,
            title: Input::default(),
            description: Input::default(),
            status: Status::default(),
            priority: Priority::default(),
            errors: FieldErrors::new(),
            focus: Field::Title,
        }
    }

    fn edit(ticket: &Ticket) -> Self {
        Self {
            ticket_id: Some(ticket.id),
            title: Input {
                value: ticket.title.clone(),
                masked: false,
            },
            description: Input {
                value: ticket.description.clone().unwrap_or_default(),
                masked: false,
            },
            status: ticket.status,
            priority: ticket.priority,
            errors: FieldErrors::new(),
            focus: Field::Title,
        }
    }

    fn form(&self) -> TicketForm {
        TicketForm {
            title: self.title.value.clone(),
            description: self.description.value.clone(),
            status: self.status,
            priority: self.priority,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<EditorAction> {
        match key.code {
            KeyCode::Esc => Some(EditorAction::Cancel),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Enter => {
                let form = self.form();
                self.errors = form.validate();
                if self.errors.is_empty() {
                    Some(EditorAction::Save(self.ticket_id, form.into_draft()))
                } else {
                    None
                }
            }
            KeyCode::Right => {
                self.cycle_selected(1);
                None
            }
            KeyCode::Left => {
                // Three-value cycles, so two steps forward is one step back.
                self.cycle_selected(2);
                None
            }
            _ => {
                match self.focus {
                    Field::Title => {
                        if self.title.handle_key(key) {
                            self.errors.remove("title");
                        }
                    }
                    Field::Description => {
                        if self.description.handle_key(key) {
                            self.errors.remove("description");
                        }
                    }
                    Field::Status | Field::Priority => {
                        if key.code == KeyCode::Char(' ') {
                            self.cycle_selected(1);
                        }
                    }
                }
                None
            }
        }
    }

    fn cycle_selected(&mut self, steps: u8) {
        for _ in 0..steps {
            match self.focus {
                Field::Status => {
                    self.status = self.status.next();
                    self.errors.remove("status");
                }
                Field::Priority => self.priority = self.priority.next(),
                Field::Title | Field::Description => {}
            }
        }
    }

    fn render_select(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        value: &str,
        focused: bool,
        error: Option<&str>,
    ) {
        let border = if error.is_some() {
            Style::default().fg(Color::Red)
        } else if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = error.map_or_else(|| format!(" {label} "), |msg| format!(" {label} — {msg} "));
        let para = Paragraph::new(format!("< {value} >")).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border),
        );
        frame.render_widget(para, area);
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 60u16.min(area.width.saturating_sub(4));
        let height = 17u16.min(area.height.saturating_sub(2));
        let dialog = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, dialog);
        let heading = if self.ticket_id.is_some() {
            " Edit Ticket "
        } else {
            " New Ticket "
        };
        let block = Block::default().borders(Borders::ALL).title(heading).title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
        let inner = block.inner(dialog);
        frame.render_widget(block, dialog);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let err = |field: &str| self.errors.get(field).map(String::as_str);
        self.title.render(
            frame,
            chunks[0],
            "Title",
            self.focus == Field::Title,
            err("title"),
        );
        self.description.render(
            frame,
            chunks[1],
            "Description",
            self.focus == Field::Description,
            err("description"),
        );
        self.render_select(
            frame,
            chunks[2],
            "Status",
            self.status.label(),
            self.focus == Field::Status,
            err("status"),
        );
        self.render_select(
            frame,
            chunks[3],
            "Priority",
            self.priority.as_str(),
            self.focus == Field::Priority,
            None,
        );

        let hints = Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" save  "),
            Span::styled("←/→", Style::default().fg(Color::Yellow)),
            Span::raw(" change value  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" cancel"),
        ]);
        frame.render_widget(Paragraph::new(hints), chunks[5]);
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct TicketsScreen {
    table: TableState,
    pub(crate) editor: Option<TicketEditor>,
    pub(crate) pending_delete: Option<u64>,
}

impl TicketsScreen {
    fn selected<'a>(&self, tickets: &'a [Ticket]) -> Option<&'a Ticket> {
        tickets.get(self.table.selected()?)
    }

    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self
            .table
            .selected()
            .map_or(0, |i| if i + 1 >= len { 0 } else { i + 1 });
        self.table.select(Some(i));
    }

    fn select_prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = self
            .table
            .selected()
            .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
        self.table.select(Some(i));
    }

    pub fn handle_key(&mut self, key: KeyEvent, tickets: &[Ticket]) -> Option<TicketAction> {
        if let Some(id) = self.pending_delete {
            if let Some(accepted) = ConfirmDialog::new(CONFIRM_DELETE).handle_key(key) {
                self.pending_delete = None;
                if accepted {
                    return Some(TicketAction::Delete(id));
                }
            }
            return None;
        }

        if let Some(editor) = self.editor.as_mut() {
            return match editor.handle_key(key) {
                Some(EditorAction::Save(id, draft)) => {
                    self.editor = None;
                    match id {
                        Some(id) => Some(TicketAction::Update(id, draft)),
                        None => Some(TicketAction::Create(draft)),
                    }
                }
                Some(EditorAction::Cancel) => {
                    self.editor = None;
                    None
                }
                None => None,
            };
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(TicketAction::Back),
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next(tickets.len());
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev(tickets.len());
                None
            }
            KeyCode::Char('n') => {
                self.editor = Some(TicketEditor::create());
                None
            }
            KeyCode::Char('e') => {
                if let Some(ticket) = self.selected(tickets) {
                    self.editor = Some(TicketEditor::edit(ticket));
                }
                None
            }
            KeyCode::Char('d') => {
                self.pending_delete = self.selected(tickets).map(|t| t.id);
                None
            }
            _ => None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, tickets: &[Ticket]) {
        // Selection can go stale after a delete.
        if let Some(i) = self.table.selected() {
            if i >= tickets.len() {
                self.table
                    .select(if tickets.is_empty() { None } else { Some(tickets.len() - 1) });
            }
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let header = Row::new(vec!["ID", "STATUS", "PRIORITY", "TITLE"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let body = tickets.iter().map(|t| {
            Row::new(vec![
                Cell::from(t.id.to_string()),
                Cell::from(t.status.label()),
                Cell::from(t.priority.as_str()),
                Cell::from(t.title.clone()),
            ])
        });
        let table = Table::new(
            body,
            [
                Constraint::Length(5),
                Constraint::Length(12),
                Constraint::Length(9),
                Constraint::Min(10),
            ],
        )
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Tickets "))
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");
        frame.render_stateful_widget(table, rows[0], &mut self.table);

        let hints = Line::from(vec![
            Span::styled("n", Style::default().fg(Color::Yellow)),
            Span::raw(" new  "),
            Span::styled("e", Style::default().fg(Color::Yellow)),
            Span::raw(" edit  "),
            Span::styled("d", Style::default().fg(Color::Yellow)),
            Span::raw(" delete  "),
            Span::styled("L", Style::default().fg(Color::Yellow)),
            Span::raw(" logout  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" back"),
        ]);
        frame.render_widget(Paragraph::new(hints), rows[1]);

        if let Some(editor) = &self.editor {
            editor.render(frame, area);
        }
        if self.pending_delete.is_some() {
            ConfirmDialog::new(CONFIRM_DELETE).render(frame, area);
        }
    }
}
