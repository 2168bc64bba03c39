//! Rendering for the interactive browser. Every frame is drawn from scratch
//! off the current `App` state.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use souk_core::registry::RegistryItem;
use souk_core::types::{CategoryFilter, Kind};
use souk_core::view;

use super::app::{App, Focus, InputMode};

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // category tabs
            Constraint::Min(0),    // catalog and selected panel
            Constraint::Length(1), // key hints / search input
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_body(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);

    if app.show_help {
        draw_help(frame, area);
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let selected = CategoryFilter::all()
        .iter()
        .position(|c| *c == app.view.category)
        .unwrap_or(0);

    let titles: Vec<Line> = CategoryFilter::all()
        .iter()
        .enumerate()
        .map(|(i, c)| Line::from(format!(" {} {} ", i + 1, c.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(Span::styled(
            format!(" souk · {} ", app.source_label),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .select(selected);

    frame.render_widget(tabs, area);
}

fn draw_body(frame: &mut Frame, app: &App, area: Rect) {
    // Narrow terminals drop the selected panel rather than squeeze both.
    if area.width < 80 {
        draw_catalog(frame, app, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_catalog(frame, app, chunks[0]);
    draw_selected(frame, app, chunks[1]);
}

fn draw_catalog(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible();
    let title = format!(
        " {} · {} · sort: {} ",
        app.view.category.title(),
        view::result_label(visible.len()),
        app.view.sort
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(app.focus == Focus::Catalog))
        .title(title);

    if visible.is_empty() {
        let message = if app.view.search().is_empty() {
            "The registry has nothing under this category."
        } else {
            "No matching items. Backspace in search to widen it."
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // One flat list with a header row per kind. The cursor indexes items
    // only, so map it onto its display row while building.
    let mut rows: Vec<ListItem> = Vec::new();
    let mut cursor_row = 0;
    let mut last_kind: Option<Kind> = None;
    for (i, (kind, item)) in visible.iter().enumerate() {
        if last_kind != Some(*kind) {
            let count = visible.iter().filter(|(k, _)| k == kind).count();
            rows.push(ListItem::new(Line::from(Span::styled(
                format!(" {} ({})", kind.title(), count),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ))));
            last_kind = Some(*kind);
        }
        if i == app.cursor {
            cursor_row = rows.len();
        }
        rows.push(catalog_row(app, *kind, item));
    }

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(cursor_row));

    // Keep the cursor row near the middle of the pane.
    let inner_height = area.height.saturating_sub(2) as usize;
    if inner_height > 0 {
        *state.offset_mut() = cursor_row.saturating_sub(inner_height / 2);
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn catalog_row(app: &App, kind: Kind, item: &RegistryItem) -> ListItem<'static> {
    let selected = app.selection.contains(kind, &item.name);
    let mark = if selected { "[x]" } else { "[ ]" };
    let mark_style = if selected {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let name_style = if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut top = vec![
        Span::styled(format!("   {mark} "), mark_style),
        Span::raw(format!("{} ", item.display_icon(kind))),
        Span::styled(item.name.clone(), name_style),
    ];
    if !item.description.is_empty() {
        top.push(Span::styled(
            format!("  {}", item.description),
            Style::default().fg(Color::DarkGray),
        ));
    }

    // Tags (first three) and plugin bundle counts go on a second line.
    let mut detail = Vec::new();
    if !item.tags.is_empty() {
        detail.push(item.tag_line());
    }
    if let Some(components) = &item.components {
        detail.push(components.summary());
    }
    if detail.is_empty() {
        return ListItem::new(Line::from(top));
    }
    ListItem::new(vec![
        Line::from(top),
        Line::from(Span::styled(
            format!("         {}", detail.join(" · ")),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

fn draw_selected(frame: &mut Frame, app: &App, area: Rect) {
    // An empty selection shows only the panel's hint; the command box
    // appears once something is picked.
    if app.selection.is_empty() {
        draw_selected_list(frame, app, area);
        return;
    }

    // Below six rows there is no room for the command box; the list keeps
    // the whole pane.
    let max_box = area.height / 2;
    if max_box < 3 {
        draw_selected_list(frame, app, area);
        return;
    }

    let text = app.commands_text();
    let wanted = text.lines().count() as u16 + 2;
    let commands_height = wanted.clamp(3, max_box);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(commands_height)])
        .split(area);

    draw_selected_list(frame, app, chunks[0]);
    draw_commands(frame, app, &text, chunks[1]);
}

fn draw_selected_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(app.focus == Focus::Selected))
        .title(format!(" Selected ({}) ", app.selection.len()));

    if app.selection.is_empty() {
        let hint = Paragraph::new("Space marks the item under the cursor.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let rows: Vec<ListItem> = app
        .selection
        .iter()
        .map(|key| {
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {} ", key.kind.glyph())),
                Span::raw(key.id.clone()),
                Span::styled(
                    format!("  ({})", key.kind),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if app.focus == Focus::Selected {
        state.select(Some(app.selected_cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_commands(frame: &mut Frame, app: &App, text: &str, area: Rect) {
    let title = if app.copied_badge() {
        Span::styled(
            " Install commands · copied ✓ ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw(" Install commands · y to copy ")
    };

    let commands = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    frame.render_widget(commands, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.input_mode {
        InputMode::Search => Line::from(vec![
            Span::styled(" /", Style::default().fg(Color::Yellow)),
            Span::raw(app.view.search().to_string()),
            Span::styled("▌", Style::default().fg(Color::Yellow)),
            Span::styled(
                "  Enter keep · Esc clear",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        InputMode::Normal => {
            let mut spans = vec![Span::styled(
                " ↑↓ move · Space select · Tab category · / search · s sort · y copy · ? help · q quit",
                Style::default().fg(Color::DarkGray),
            )];
            if !app.view.search().is_empty() {
                spans.push(Span::styled("  /", Style::default().fg(Color::Yellow)));
                spans.push(Span::raw(app.view.search().to_string()));
            }
            Line::from(spans)
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 60, area);

    let rows = [
        ("j/k ↑↓", "move"),
        ("g/G", "jump to top / bottom"),
        ("Space/Enter", "select or deselect"),
        ("Tab / 1-5", "switch category"),
        ("/", "search; Enter keeps it, Esc clears it"),
        ("s", "cycle sort (none, name, category)"),
        ("p", "jump to the selected panel"),
        ("x", "clear the selection"),
        ("y", "copy install commands"),
        ("q", "quit"),
    ];

    let mut lines = vec![
        Line::from(Span::styled(
            "Keys",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (keys, what) in rows {
        lines.push(Line::from(vec![
            Span::styled(format!("  {keys:<12}"), Style::default().fg(Color::Yellow)),
            Span::raw(what),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "? closes this overlay",
        Style::default().fg(Color::DarkGray),
    )));

    let help = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
