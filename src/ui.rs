//! Terminal UI rendering with ratatui

use crate::game::Game;
use crate::menu::{Menu, MenuAction, MenuItem, MenuItemType, MenuScreen};
use crate::piece::Piece;
use crate::session::{Phase, Session, Tone};
use crate::stats::SessionStats;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Session screen size
const SESSION_WIDTH: u16 = 72;
const SESSION_HEIGHT: u16 = 25;

/// Render the main menu
pub fn render_menu(frame: &mut Frame, menu: &Menu) {
    let area = frame.area();
    let (menu_width, menu_height) = match menu.screen {
        MenuScreen::Main | MenuScreen::ModeSelect => (48u16, 16u16),
        MenuScreen::Settings => (48u16, 20u16),
    };
    let menu_area = center_rect(area, menu_width, menu_height);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(menu_area);

    let screen_title = match menu.screen {
        MenuScreen::Main => "TETRIS STACK",
        MenuScreen::ModeSelect => "SELECT MODE",
        MenuScreen::Settings => "SETTINGS",
    };
    let title_lines = vec![
        Line::raw(""),
        Line::styled(screen_title, Style::default().fg(Color::Cyan).bold()),
    ];
    frame.render_widget(
        Paragraph::new(title_lines).alignment(Alignment::Center),
        layout[0],
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(layout[1]);
    frame.render_widget(block, layout[1]);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    for (i, item) in menu.items.iter().enumerate() {
        lines.push(render_menu_item(item, i == menu.selected));
        lines.push(Line::raw(""));
    }

    if let Some(MenuAction::StartGame(mode)) = menu.select() {
        lines.push(Line::styled(mode.description(), Style::default().fg(Color::Gray)));
    }

    if let Some(notice) = &menu.notice {
        lines.push(Line::styled(notice.clone(), Style::default().fg(Color::Green)));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        get_controls_hint(menu),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Render a single menu item based on its type
fn render_menu_item(item: &MenuItem, is_selected: bool) -> Line<'static> {
    let prefix = if is_selected { "▶ " } else { "  " };

    let base_style = if is_selected {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    };

    match &item.item_type {
        MenuItemType::Button(_) => Line::styled(format!("{}{}", prefix, item.label), base_style),
        MenuItemType::Cycle { options, current, .. } => Line::from(vec![
            Span::styled(format!("{}{}: ", prefix, item.label), base_style),
            Span::styled(
                format!("< {} >", options[*current]),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        MenuItemType::Number { value, .. } => Line::from(vec![
            Span::styled(format!("{}{}: ", prefix, item.label), base_style),
            Span::styled(format!("< {} >", value), Style::default().fg(Color::Cyan)),
        ]),
    }
}

/// Get the controls hint based on current menu state
fn get_controls_hint(menu: &Menu) -> String {
    match menu.items.get(menu.selected).map(|item| &item.item_type) {
        Some(MenuItemType::Cycle { .. }) | Some(MenuItemType::Number { .. }) => {
            "↑↓ Select  ←→ Adjust  Esc Back".to_string()
        }
        _ => "↑↓ Select  Enter Confirm  Esc Back".to_string(),
    }
}

/// Render a running session: containers, action menu, prompt
pub fn render_session(frame: &mut Frame, session: &Session) {
    let area = center_rect(frame.area(), SESSION_WIDTH, SESSION_HEIGHT);
    let game = session.game();

    let outer = Block::default()
        .title(format!(" TETRIS STACK - {} ", game.mode().name()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    // Queue panel grows with the number of wrapped lines
    let queue = queue_lines(session, inner.width.saturating_sub(2));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(queue.len() as u16 + 2), // Queue
            Constraint::Length(4), // Reserve
            Constraint::Min(8),    // Actions + stats
            Constraint::Length(4), // Message + prompt
        ])
        .split(inner);

    render_queue(frame, rows[0], game, queue);
    render_reserve(frame, rows[1], session);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);

    render_actions(frame, columns[0], game);
    render_stats(frame, columns[1], game, session.stats());
    render_prompt(frame, rows[3], session);
}

/// Center a rect within another rect
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// `[T 4]` colored by kind; pieces touched by the last action are underlined
fn piece_span(piece: &Piece, session: &Session) -> Span<'static> {
    let mut style = Style::default().fg(piece.kind().color()).bold();
    if let Some(outcome) = session.last_outcome() {
        let recent = [outcome.piece(), outcome.refill()];
        if recent.iter().flatten().any(|p| p.id() == piece.id()) {
            style = style.underlined();
        }
    }
    Span::styled(piece.to_string(), style)
}

fn render_queue(frame: &mut Frame, area: Rect, game: &Game, lines: Vec<Line<'static>>) {
    let queue = game.queue();
    let block = Block::default()
        .title(format!(" QUEUE ({}/{}) ", queue.len(), queue.capacity()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Lay the queue out front to back, breaking lines between pieces so no
/// piece label is split
fn queue_lines(session: &Session, width: u16) -> Vec<Line<'static>> {
    let game = session.game();
    let muted = Style::default().fg(Color::DarkGray);

    let mut tokens = vec![("", Span::styled("[FRONT]", muted))];
    if game.queue().is_empty() {
        tokens.push((" ", Span::styled("empty", muted)));
    }
    for (i, piece) in game.snapshot_queue().iter().enumerate() {
        let sep = if i == 0 { " " } else { " -> " };
        tokens.push((sep, piece_span(piece, session)));
    }
    tokens.push((" ", Span::styled("[BACK]", muted)));

    let width = usize::from(width.max(1));
    let mut lines = Vec::new();
    let mut spans = Vec::new();
    let mut used = 0;
    for (sep, span) in tokens {
        if used > 0 && used + sep.len() + span.width() > width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        let sep = if used == 0 { sep.trim_start() } else { sep };
        if !sep.is_empty() {
            spans.push(Span::styled(sep, muted));
            used += sep.len();
        }
        used += span.width();
        spans.push(span);
    }
    lines.push(Line::from(spans));
    lines
}

fn render_reserve(frame: &mut Frame, area: Rect, session: &Session) {
    let game = session.game();
    let Some(stack) = game.reserve() else {
        let block = Block::default()
            .title(" RESERVE ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new("not available in this mode").fg(Color::DarkGray),
            inner,
        );
        return;
    };

    let block = Block::default()
        .title(format!(" RESERVE ({}/{}) top -> base ", stack.len(), stack.capacity()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if stack.is_empty() {
        Line::styled("empty", Style::default().fg(Color::DarkGray))
    } else {
        let mut spans = Vec::new();
        for (i, piece) in game.snapshot_reserve().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(piece_span(piece, session));
        }
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_actions(frame: &mut Frame, area: Rect, game: &Game) {
    let block = Block::default()
        .title(" ACTIONS ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = game
        .mode()
        .commands()
        .iter()
        .map(|command| {
            Line::from(vec![
                Span::styled(format!("{}  ", command.code()), Style::default().fg(Color::Yellow).bold()),
                Span::raw(command.label()),
                Span::styled(format!(" ({})", command.detail()), Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_stats(frame: &mut Frame, area: Rect, game: &Game, stats: &SessionStats) {
    let block = Block::default()
        .title(" STATS ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White).bold();
    let or_dash = |piece: Option<&Piece>| piece.map_or_else(|| "-".to_string(), Piece::to_string);
    let mut rows = vec![
        ("Next", or_dash(game.queue().peek_front())),
        ("Issued", game.pieces_issued().to_string()),
        ("Played", stats.played.to_string()),
    ];
    match game.reserve() {
        Some(stack) => {
            rows.insert(1, ("Top", or_dash(stack.peek_top())));
            rows.push(("Reserved", stats.reserved.to_string()));
            rows.push(("Used", stats.used.to_string()));
        }
        None => rows.push(("Inserted", stats.inserted.to_string())),
    }
    rows.push(("Rejected", stats.rejected.to_string()));
    rows.push(("Seed", format!("{:x}", game.seed())));

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(name, text)| {
            Line::from(vec![
                Span::styled(format!("{:<9}", name), label),
                Span::styled(text, value),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_prompt(frame: &mut Frame, area: Rect, session: &Session) {
    let mut lines = Vec::new();

    match session.message() {
        Some(message) => {
            let color = match message.tone {
                Tone::Success => Color::Green,
                Tone::Warning => Color::Red,
            };
            lines.push(Line::styled(message.text.clone(), Style::default().fg(color)));
        }
        None => lines.push(Line::raw("")),
    }

    match session.phase() {
        Phase::AwaitingCode => lines.push(Line::from(vec![
            Span::styled("Enter action code: ", Style::default().fg(Color::White)),
            Span::styled(session.input().text().to_string(), Style::default().fg(Color::Green)),
            Span::styled("_", Style::default().fg(Color::Yellow)),
        ])),
        Phase::AwaitingContinue => lines.push(Line::styled(
            "Press ENTER to continue...",
            Style::default().fg(Color::DarkGray),
        )),
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
