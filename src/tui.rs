use anyhow::{Result, anyhow};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::stdout;

use crate::api::{ApiClient, ApiError};
use crate::models::{ApplicationPatch, JobApplication, NewApplication, STATUS_ORDER, Status};
use crate::render::{
    ChartView, EMPTY_CHART_MESSAGE, EMPTY_TABLE_MESSAGE, chart_view, count_statuses, format_date,
    segment_widths, truncate,
};
use crate::store::{ActiveFilter, RecordStore, filter};
use crate::theme::Theme;

struct EditForm {
    id: i64,
    status: Status,
    notes: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum AddField {
    Company,
    Role,
    Date,
    Status,
    Notes,
}

struct AddForm {
    company: String,
    role: String,
    date: String,
    status: Status,
    notes: String,
    field: AddField,
}

impl AddForm {
    fn new() -> Self {
        Self {
            company: String::new(),
            role: String::new(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            status: Status::Applied,
            notes: String::new(),
            field: AddField::Company,
        }
    }

    fn next_field(&mut self) {
        self.field = match self.field {
            AddField::Company => AddField::Role,
            AddField::Role => AddField::Date,
            AddField::Date => AddField::Status,
            AddField::Status => AddField::Notes,
            AddField::Notes => AddField::Company,
        };
    }

    fn prev_field(&mut self) {
        self.field = match self.field {
            AddField::Company => AddField::Notes,
            AddField::Role => AddField::Company,
            AddField::Date => AddField::Role,
            AddField::Status => AddField::Date,
            AddField::Notes => AddField::Status,
        };
    }

    /// The text buffer behind the focused field, if it has one.
    fn current_mut(&mut self) -> Option<&mut String> {
        match self.field {
            AddField::Company => Some(&mut self.company),
            AddField::Role => Some(&mut self.role),
            AddField::Date => Some(&mut self.date),
            AddField::Status => None,
            AddField::Notes => Some(&mut self.notes),
        }
    }

    fn to_new_application(&self) -> NewApplication {
        NewApplication {
            company: self.company.trim().to_string(),
            role: self.role.trim().to_string(),
            date_applied: self.date.trim().to_string(),
            status: self.status,
            notes: self.notes.trim().to_string(),
        }
    }
}

enum Mode {
    Normal,
    Search,
    Add(AddForm),
    Edit(EditForm),
    ConfirmDelete { id: i64, company: String },
}

struct App {
    store: RecordStore,
    /// Filtered snapshot every panel renders from, so the table, counters
    /// and chart never disagree.
    visible: Vec<JobApplication>,
    selected: usize,
    filter: ActiveFilter,
    mode: Mode,
    toast: Option<String>,
    theme: Theme,
    username: String,
}

impl App {
    fn new(records: Vec<JobApplication>, theme: Theme, username: String) -> Self {
        let mut app = Self {
            store: RecordStore::new(),
            visible: Vec::new(),
            selected: 0,
            filter: ActiveFilter::default(),
            mode: Mode::Normal,
            toast: None,
            theme,
            username,
        };
        app.store.replace(records);
        app.resync();
        app
    }

    fn resync(&mut self) {
        self.visible = filter(self.store.records(), &self.filter.search, self.filter.status);
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }

    fn selected_record(&self) -> Option<&JobApplication> {
        self.visible.get(self.selected)
    }

    fn next(&mut self) {
        if !self.visible.is_empty() && self.selected < self.visible.len() - 1 {
            self.selected += 1;
        }
    }

    fn prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn cycle_status_filter(&mut self) {
        self.filter.status = match self.filter.status {
            None => Some(Status::Applied),
            Some(Status::Rejected) => None,
            Some(s) => Some(s.next()),
        };
        self.selected = 0;
        self.resync();
    }

    /// Re-fetches the authoritative list and re-renders unfiltered. The
    /// active filter is not reapplied after a mutation. A failed fetch
    /// leaves the previous snapshot untouched and shows a warning.
    fn reload(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        match client.list() {
            Ok(records) => {
                self.store.replace(records);
                self.filter.clear();
                self.selected = 0;
                self.resync();
                Ok(())
            }
            Err(ApiError::Unauthorized) => Err(ApiError::Unauthorized),
            Err(ApiError::Unreachable(_)) => {
                self.toast = Some("Could not connect to the server".to_string());
                Ok(())
            }
        }
    }
}

pub fn run(client: &ApiClient, username: String) -> Result<()> {
    let records = match client.list() {
        Ok(records) => records,
        Err(ApiError::Unauthorized) => return Err(session_expired()),
        Err(e) => return Err(anyhow::Error::new(e).context("Could not reach the server")),
    };
    let mut app = App::new(records, Theme::load(), username);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_loop(&mut terminal, &mut app, client);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn session_expired() -> anyhow::Error {
    anyhow!("Session expired. Run 'apptrack login' again.")
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    client: &ApiClient,
) -> Result<()> {
    let mut list_state = ListState::default();

    loop {
        terminal.draw(|frame| draw(frame, app, &mut list_state))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        // Notifications are transient: any keypress dismisses the last one.
        app.toast = None;

        let mode = std::mem::replace(&mut app.mode, Mode::Normal);
        match mode {
            Mode::Normal => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.prev(),
                KeyCode::Char('/') => app.mode = Mode::Search,
                KeyCode::Char('f') => app.cycle_status_filter(),
                KeyCode::Char('r') => app.reload(client).map_err(|_| session_expired())?,
                KeyCode::Char('t') => {
                    app.theme = app.theme.toggle();
                    if app.theme.save().is_err() {
                        app.toast = Some("Could not save theme preference".to_string());
                    }
                }
                KeyCode::Char('a') => app.mode = Mode::Add(AddForm::new()),
                KeyCode::Char('e') => {
                    if let Some(record) = app.selected_record().cloned() {
                        app.mode = Mode::Edit(EditForm {
                            id: record.id,
                            status: record.status,
                            // absent notes populate the field as empty text
                            notes: record.notes.unwrap_or_default(),
                        });
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(record) = app.selected_record().cloned() {
                        app.mode = Mode::ConfirmDelete {
                            id: record.id,
                            company: record.company,
                        };
                    }
                }
                _ => {}
            },

            Mode::Search => match key.code {
                KeyCode::Enter => {}
                KeyCode::Esc => {
                    app.filter.search.clear();
                    app.resync();
                }
                KeyCode::Backspace => {
                    app.filter.search.pop();
                    app.resync();
                    app.mode = Mode::Search;
                }
                KeyCode::Char(c) => {
                    app.filter.search.push(c);
                    app.resync();
                    app.mode = Mode::Search;
                }
                _ => app.mode = Mode::Search,
            },

            Mode::ConfirmDelete { id, company } => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    let result = client.delete(id);
                    finish_mutation(app, client, result, "Application deleted")?;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {}
                _ => app.mode = Mode::ConfirmDelete { id, company },
            },

            Mode::Edit(mut form) => match key.code {
                KeyCode::Esc => {}
                KeyCode::Enter => {
                    let patch = ApplicationPatch {
                        status: form.status,
                        notes: form.notes.trim().to_string(),
                    };
                    let result = client.update(form.id, &patch);
                    finish_mutation(app, client, result, "Application updated")?;
                }
                KeyCode::Right | KeyCode::Tab => {
                    form.status = form.status.next();
                    app.mode = Mode::Edit(form);
                }
                KeyCode::Left | KeyCode::BackTab => {
                    form.status = form.status.prev();
                    app.mode = Mode::Edit(form);
                }
                KeyCode::Backspace => {
                    form.notes.pop();
                    app.mode = Mode::Edit(form);
                }
                KeyCode::Char(c) => {
                    form.notes.push(c);
                    app.mode = Mode::Edit(form);
                }
                _ => app.mode = Mode::Edit(form),
            },

            Mode::Add(mut form) => match key.code {
                KeyCode::Esc => {}
                KeyCode::Enter => {
                    let new = form.to_new_application();
                    match new.validate() {
                        Err(err) => {
                            app.toast = Some(err.to_string());
                            app.mode = Mode::Add(form);
                        }
                        Ok(()) => {
                            let result = client.create(&new);
                            finish_mutation(app, client, result, "Application added")?;
                        }
                    }
                }
                KeyCode::Tab | KeyCode::Down => {
                    form.next_field();
                    app.mode = Mode::Add(form);
                }
                KeyCode::BackTab | KeyCode::Up => {
                    form.prev_field();
                    app.mode = Mode::Add(form);
                }
                KeyCode::Right if form.field == AddField::Status => {
                    form.status = form.status.next();
                    app.mode = Mode::Add(form);
                }
                KeyCode::Left if form.field == AddField::Status => {
                    form.status = form.status.prev();
                    app.mode = Mode::Add(form);
                }
                KeyCode::Backspace => {
                    if let Some(buf) = form.current_mut() {
                        buf.pop();
                    }
                    app.mode = Mode::Add(form);
                }
                KeyCode::Char(c) => {
                    match form.current_mut() {
                        Some(buf) => buf.push(c),
                        None => form.status = form.status.next(),
                    }
                    app.mode = Mode::Add(form);
                }
                _ => app.mode = Mode::Add(form),
            },
        }
    }
    Ok(())
}

/// Mutations are fire-and-forget: a sent request reports success and
/// triggers the reload; only a transport failure downgrades the
/// notification to a connectivity warning.
fn finish_mutation(
    app: &mut App,
    client: &ApiClient,
    result: Result<(), ApiError>,
    success: &str,
) -> Result<()> {
    match result {
        Ok(()) => {
            app.toast = Some(success.to_string());
            app.reload(client).map_err(|_| session_expired())
        }
        Err(_) => {
            app.toast = Some("Could not connect to the server".to_string());
            Ok(())
        }
    }
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Applied => Color::Rgb(0x7c, 0x6b, 0xff),
        Status::Interview => Color::Rgb(0xf5, 0xa6, 0x23),
        Status::Offer => Color::Rgb(0x2e, 0xcc, 0x71),
        Status::Rejected => Color::Rgb(0xe7, 0x4c, 0x3c),
    }
}

fn muted(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::DarkGray,
        Theme::Light => Color::Gray,
    }
}

fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Dark => Color::Cyan,
        Theme::Light => Color::Blue,
    }
}

fn draw(frame: &mut Frame, app: &App, list_state: &mut ListState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, app, rows[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    draw_list(frame, app, panels[0], list_state);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(panels[1]);

    draw_stats(frame, app, side[0]);
    draw_chart(frame, app, side[1]);
    draw_detail(frame, app, side[2]);

    draw_footer(frame, app, rows[2]);

    match &app.mode {
        Mode::Edit(form) => draw_edit_modal(frame, app, form),
        Mode::Add(form) => draw_add_modal(frame, app, form),
        _ => {}
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Job Applications ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {} · {} theme", app.username, app.theme.as_str()),
            Style::default().fg(muted(app.theme)),
        ),
    ]));
    frame.render_widget(header, area);
}

fn draw_list(frame: &mut Frame, app: &App, area: Rect, list_state: &mut ListState) {
    let mut title = format!(" Applications ({}/{}) ", app.visible.len(), app.store.len());
    if !app.filter.search.is_empty() {
        title.push_str(&format!("search:{} ", app.filter.search));
    }
    if let Some(status) = app.filter.status {
        title.push_str(&format!("status:{} ", status));
    }
    let block = Block::default().borders(Borders::ALL).title(title);

    if app.visible.is_empty() {
        let message = if app.store.is_empty() {
            EMPTY_TABLE_MESSAGE
        } else {
            "No applications match the current filter."
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(muted(app.theme)))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .visible
        .iter()
        .map(|record| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<18} ", truncate(&record.company, 16)),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:<20} ", truncate(&record.role, 18))),
                Span::styled(
                    format!("{:<12} ", format_date(&record.date_applied)),
                    Style::default().fg(muted(app.theme)),
                ),
                Span::styled(
                    record.status.as_str(),
                    Style::default().fg(status_color(record.status)),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    list_state.select(Some(app.selected));
    frame.render_stateful_widget(list, area, list_state);
}

fn draw_stats(frame: &mut Frame, app: &App, area: Rect) {
    let counts = count_statuses(&app.visible);
    let line = Line::from(vec![
        Span::raw(format!("Total {}   ", counts.total)),
        Span::styled(
            format!("Interviews {}   ", counts.interview),
            Style::default().fg(status_color(Status::Interview)),
        ),
        Span::styled(
            format!("Offers {}   ", counts.offer),
            Style::default().fg(status_color(Status::Offer)),
        ),
        Span::styled(
            format!("Rejected {}", counts.rejected),
            Style::default().fg(status_color(Status::Rejected)),
        ),
    ]);
    let stats = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(" Stats "));
    frame.render_widget(stats, area);
}

fn draw_chart(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();

    match chart_view(&app.visible) {
        ChartView::Placeholder => {
            lines.push(Line::from(Span::styled(
                "░".repeat(width),
                Style::default().fg(muted(app.theme)),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                EMPTY_CHART_MESSAGE,
                Style::default().fg(muted(app.theme)),
            )));
        }
        ChartView::Segments(segments) => {
            let widths = segment_widths(&segments, width);
            let bar: Vec<Span> = segments
                .iter()
                .zip(&widths)
                .map(|(segment, w)| {
                    Span::styled(
                        "█".repeat(*w),
                        Style::default().fg(status_color(segment.status)),
                    )
                })
                .collect();
            lines.push(Line::from(bar));
            lines.push(Line::from(""));
            for segment in &segments {
                lines.push(Line::from(vec![
                    Span::styled("● ", Style::default().fg(status_color(segment.status))),
                    Span::raw(format!(
                        "{:<10} {:>3} ({}%)",
                        segment.status, segment.count, segment.percent
                    )),
                ]));
            }
        }
    }

    let chart =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(chart, area);
}

fn draw_detail(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(record) = app.selected_record() {
        lines.push(Line::from(Span::styled(
            record.company.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(record.role.clone()));
        lines.push(Line::from(Span::styled(
            format!("Applied: {}", format_date(&record.date_applied)),
            Style::default().fg(muted(app.theme)),
        )));
        lines.push(Line::from(Span::styled(
            format!("Status: {}", record.status),
            Style::default().fg(status_color(record.status)),
        )));
        lines.push(Line::from(""));
        match record.notes.as_deref() {
            Some(notes) if !notes.trim().is_empty() => {
                for line in textwrap::fill(notes.trim(), 60).lines() {
                    lines.push(Line::from(line.to_string()));
                }
            }
            _ => lines.push(Line::from(Span::styled(
                "(no notes)",
                Style::default().fg(muted(app.theme)),
            ))),
        }
    } else {
        lines.push(Line::from(Span::styled(
            "No application selected",
            Style::default().fg(muted(app.theme)),
        )));
    }

    let detail = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Detail "))
        .wrap(Wrap { trim: false });
    frame.render_widget(detail, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if let Some(toast) = &app.toast {
        (
            format!(" {}", toast),
            Style::default().fg(accent(app.theme)),
        )
    } else {
        let help = match &app.mode {
            Mode::Normal => {
                " j/k:navigate  /:search  f:filter  a:add  e:edit  d:delete  r:reload  t:theme  q:quit"
                    .to_string()
            }
            Mode::Search => format!(
                " search: {}_  (Enter to keep, Esc to clear)",
                app.filter.search
            ),
            Mode::ConfirmDelete { company, .. } => {
                format!(" Delete the application for {}? (y/n)", company)
            }
            Mode::Edit(_) => {
                " Left/Right:status  type:notes  Enter:save  Esc:cancel".to_string()
            }
            Mode::Add(_) => {
                " Tab:next field  Left/Right:status  Enter:save  Esc:cancel".to_string()
            }
        };
        (help, Style::default().fg(muted(app.theme)))
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn draw_edit_modal(frame: &mut Frame, app: &App, form: &EditForm) {
    let area = centered_rect(56, 8, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(vec![
            Span::raw("Status:  "),
            Span::styled(
                format!("< {} >", form.status),
                Style::default().fg(status_color(form.status)),
            ),
        ]),
        Line::from(""),
        Line::from(format!("Notes:   {}_", form.notes)),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to save, Esc to cancel",
            Style::default().fg(muted(app.theme)),
        )),
    ];

    let modal = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Edit Application "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(modal, area);
}

fn draw_add_modal(frame: &mut Frame, app: &App, form: &AddForm) {
    let area = centered_rect(56, 11, frame.area());
    frame.render_widget(Clear, area);

    let field_line = |label: &str, value: &str, field: AddField| {
        let marker = if form.field == field { "> " } else { "  " };
        let cursor = if form.field == field { "_" } else { "" };
        Line::from(vec![
            Span::styled(
                marker.to_string(),
                Style::default().fg(accent(app.theme)),
            ),
            Span::raw(format!("{:<9} {}{}", label, value, cursor)),
        ])
    };

    let status_marker = if form.field == AddField::Status {
        "> "
    } else {
        "  "
    };
    let lines = vec![
        field_line("Company", &form.company, AddField::Company),
        field_line("Role", &form.role, AddField::Role),
        field_line("Date", &form.date, AddField::Date),
        Line::from(vec![
            Span::styled(
                status_marker.to_string(),
                Style::default().fg(accent(app.theme)),
            ),
            Span::raw(format!("{:<9} ", "Status")),
            Span::styled(
                format!("< {} >", form.status),
                Style::default().fg(status_color(form.status)),
            ),
        ]),
        field_line("Notes", &form.notes, AddField::Notes),
        Line::from(""),
        Line::from(Span::styled(
            "Company, role and date are required",
            Style::default().fg(muted(app.theme)),
        )),
    ];

    let modal = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Add Application "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(modal, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_trims_fields_on_submit() {
        let mut form = AddForm::new();
        form.company = "  Acme  ".to_string();
        form.role = " Engineer ".to_string();
        form.date = " 2026-03-05 ".to_string();
        form.notes = "  referral  ".to_string();
        let new = form.to_new_application();
        assert_eq!(new.company, "Acme");
        assert_eq!(new.role, "Engineer");
        assert_eq!(new.date_applied, "2026-03-05");
        assert_eq!(new.notes, "referral");
        assert!(new.validate().is_ok());
    }

    #[test]
    fn add_form_field_cycle_round_trips() {
        let mut form = AddForm::new();
        for _ in 0..5 {
            form.next_field();
        }
        assert!(form.field == AddField::Company);
        form.prev_field();
        assert!(form.field == AddField::Notes);
    }

    #[test]
    fn status_filter_cycles_back_to_all() {
        let mut app = App::new(Vec::new(), Theme::Dark, "test".to_string());
        assert!(app.filter.status.is_none());
        let mut seen = Vec::new();
        for _ in 0..4 {
            app.cycle_status_filter();
            seen.push(app.filter.status);
        }
        assert_eq!(
            seen,
            vec![
                Some(Status::Applied),
                Some(Status::Interview),
                Some(Status::Offer),
                Some(Status::Rejected),
            ]
        );
        app.cycle_status_filter();
        assert!(app.filter.status.is_none());
    }

    #[test]
    fn resync_clamps_selection() {
        let records = vec![
            JobApplication {
                id: 1,
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                date_applied: "2026-01-01".to_string(),
                status: Status::Applied,
                notes: None,
            },
            JobApplication {
                id: 2,
                company: "Globex".to_string(),
                role: "Manager".to_string(),
                date_applied: "2026-01-02".to_string(),
                status: Status::Offer,
                notes: None,
            },
        ];
        let mut app = App::new(records, Theme::Dark, "test".to_string());
        app.selected = 1;
        app.filter.search = "acme".to_string();
        app.resync();
        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_record().map(|r| r.id), Some(1));
    }
}
