use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(if app.view.error().is_some() { 2 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);

    if let Some(err) = app.view.error() {
        let banner = Paragraph::new(Line::from(vec![
            Span::styled("error: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(err, Style::default().fg(Color::Red)),
            Span::styled("  (Esc to dismiss)", Style::default().fg(Color::Gray)),
        ]))
        .wrap(Wrap { trim: true });
        frame.render_widget(banner, chunks[1]);
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(50),
            Constraint::Min(0),
        ])
        .split(body[0]);

    draw_form(frame, app, left[0]);
    draw_packs(frame, app, left[1]);
    draw_learning(frame, app, left[2]);
    draw_checklist(frame, app, body[1]);

    // Status / last result
    {
        let line = match &app.last_result {
            Some(r) => {
                let style = match r.kind {
                    EntryKind::Output => Style::default().fg(Color::White),
                    EntryKind::Error => Style::default().fg(Color::Red),
                };
                Line::from(vec![
                    Span::styled(
                        format!("{} ", fmt_ts_ui(&r.ts)),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::styled(r.text.as_str(), style),
                ])
            }
            None => Line::from(""),
        };
        frame.render_widget(
            Paragraph::new(line).block(Block::default().borders(Borders::TOP)),
            chunks[3],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            key_hints(app.focus),
            Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
        ))),
        chunks[4],
    );

    if let Some(m) = &app.modal {
        modal::draw_modal(frame, m);
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let view = &app.view;
    let mut spans = vec![
        Span::styled(
            "TrustStack",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(
            view.display_name().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(p) = view.project() {
        spans.push(Span::raw(format!(
            "  use case: {}  packs: {}",
            p.inputs.use_case_id,
            view.selection().len()
        )));
        if let Some(updated) = p.project.updated_at.as_deref() {
            let when = fmt_since(updated, OffsetDateTime::now_utc())
                .unwrap_or_else(|| fmt_ts_ui(updated));
            spans.push(Span::styled(
                format!("  updated {}", when),
                Style::default().fg(Color::Gray),
            ));
        }
    } else {
        spans.push(Span::styled("  loading...", Style::default().fg(Color::Gray)));
    }
    if view.is_saving() {
        spans.push(Span::styled("  saving...", Style::default().fg(Color::Yellow)));
    }
    let pending = app.worker.pending();
    if pending > 0 {
        spans.push(Span::styled(
            format!("  [{} request(s)]", pending),
            Style::default().fg(Color::Gray),
        ));
    }
    if view.is_deleting() {
        spans.push(Span::styled("  deleting...", Style::default().fg(Color::Red)));
    }

    let mut second = Vec::new();
    if let Some(checklist) = view.checklist() {
        let progress = view.progress();
        second.push(Span::styled(
            format!(
                "{}% implemented ({}/{})",
                progress.percent, progress.implemented, progress.total
            ),
            Style::default().fg(Color::Green),
        ));
        let domains = domain_counts(checklist)
            .into_iter()
            .map(|(d, n)| format!("{} {}", d, n))
            .collect::<Vec<_>>()
            .join("  ");
        if !domains.is_empty() {
            second.push(Span::raw("  "));
            second.push(Span::raw(domains));
        }
    }

    let header = Paragraph::new(vec![Line::from(spans), Line::from(second)])
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn pane(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title)
}

fn draw_form(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Form;
    let field = |label: &'static str, value: &str, which: FormField| {
        let marker = if focused && app.form_field == which { "> " } else { "  " };
        let style = locked(Style::default(), app.view.controls_locked());
        Line::from(vec![
            Span::raw(marker),
            Span::styled(label, Style::default().fg(Color::Gray)),
            Span::styled(value.to_string(), style),
        ])
    };
    let lines = vec![
        field("name: ", app.view.edit_name(), FormField::Name),
        field("description: ", app.view.edit_description(), FormField::Description),
    ];
    let title = if app.view.can_save() {
        "Project (unsaved; s to save)"
    } else {
        "Project"
    };
    frame.render_widget(Paragraph::new(lines).block(pane(title, focused)), area);
}

fn draw_packs(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Packs;
    let is_locked = app.view.controls_locked();
    let rows = app.pack_rows();

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match row {
            PackRow::Catalog(entry) => catalog_row(app, entry, is_locked),
            PackRow::Unavailable(p) => ListItem::new(Line::from(vec![
                Span::styled("[x] ", Style::default().fg(Color::Red)),
                Span::styled(
                    format!("{} (unavailable; x to remove)", p),
                    locked(Style::default().fg(Color::Red), is_locked),
                ),
            ])),
        })
        .collect();

    let mut state = ListState::default();
    if focused && !rows.is_empty() {
        state.select(Some(app.pack_row.min(rows.len() - 1)));
    }

    let block = if items.is_empty() {
        pane("Packs (none in registry)", focused)
    } else {
        pane("Packs", focused)
    };
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, area, &mut state);
}

fn catalog_row<'a>(app: &App, entry: &'a PackCatalogEntry, is_locked: bool) -> ListItem<'a> {
    let key: PackKey = entry.key();
    let selected = app.view.selection().get(&key);
    let mark = if selected.is_some() { "[x] " } else { "[ ] " };
    let versions = entry
        .versions
        .iter()
        .map(|v| {
            if selected.is_some_and(|p| &p.version == v) {
                format!("*{}", v)
            } else {
                v.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let style = if selected.is_some() {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    ListItem::new(Line::from(vec![
        Span::styled(mark, locked(style, is_locked)),
        Span::styled(key.to_string(), locked(style, is_locked)),
        Span::styled(
            format!("  {}", versions),
            locked(Style::default().fg(Color::Gray), is_locked),
        ),
    ]))
}

fn draw_learning(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for group in app.view.learning_center() {
        lines.push(Line::from(Span::styled(
            group.title,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            group.intro,
            Style::default().fg(Color::Gray),
        )));
        if group.items.is_empty() {
            lines.push(Line::from(format!("  {}", group.empty_hint())));
        }
        for entry in &group.items {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(entry.title().to_string(), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(" v{}", entry.version),
                    Style::default().fg(Color::Gray),
                ),
            ]));
            lines.push(Line::from(format!("    {}", entry.description())));
            lines.push(Line::from(Span::styled(
                format!("    {}", entry.source_line()),
                Style::default().fg(Color::Gray),
            )));
            let url = entry.source_url().unwrap_or(NO_SOURCE_URL);
            lines.push(Line::from(Span::styled(
                format!("    {}", url),
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            )));
        }
        lines.push(Line::from(""));
    }
    let scroll = app.learn_scroll.min(lines.len().saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(pane("Learning center", app.focus == Focus::Learning)),
        area,
    );
}

fn draw_checklist(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Checklist;
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    if app.view.checklist().is_some() && app.items().is_empty() {
        frame.render_widget(
            Paragraph::new(EMPTY_CHECKLIST_HINT)
                .wrap(Wrap { trim: true })
                .block(pane("Checklist", focused)),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .items()
        .iter()
        .map(|it| checklist_row(it, app.view.is_item_busy(&it.item_id)))
        .collect();

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(app.item_row.min(items.len() - 1)));
    }
    let list = List::new(items)
        .block(pane("Checklist", focused))
        .highlight_style(Style::default().bg(Color::DarkGray));
    frame.render_stateful_widget(list, parts[0], &mut state);

    let mut lines = Vec::new();
    if let Some(it) = app.selected_item() {
        if let Some(owner) = it.owner.as_deref().filter(|s| !s.is_empty()) {
            lines.push(Line::from(format!("owner: {}", owner)));
        }
        if let Some(notes) = it.notes.as_deref().filter(|s| !s.is_empty()) {
            lines.push(Line::from(format!("notes: {}", notes)));
        }
        lines.push(Line::from(format!("evidence: {} file(s)", it.evidence.len())));
        for p in evidence_preview(it) {
            lines.push(Line::from(Span::styled(
                format!("  {}", p),
                Style::default().fg(Color::Gray),
            )));
        }
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)),
        parts[1],
    );
}

fn checklist_row(it: &ChecklistItem, busy: bool) -> ListItem<'_> {
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<9}", it.severity.to_string()),
            locked(severity_style(&it.severity), busy),
        ),
        Span::styled(
            format!("{:<16}", it.status.as_str()),
            locked(status_style(it.status), busy),
        ),
        Span::styled(it.item_id.as_str(), locked(Style::default().fg(Color::Gray), busy)),
        Span::raw("  "),
        Span::styled(it.title.as_str(), locked(Style::default(), busy)),
        Span::styled(
            if busy { "  (updating)" } else { "" },
            Style::default().fg(Color::Yellow),
        ),
    ]))
}

fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Form => "Enter/e edit  Up/Down field  s save  r refresh  D delete  Tab next pane  q quit",
        Focus::Packs => {
            "Enter toggle  v version  x remove unavailable  s save  h/c/p report  Tab next pane  q quit"
        }
        Focus::Learning => "Up/Down scroll  Tab next pane  q quit",
        Focus::Checklist => {
            "Enter detail  S status  o owner  n notes  u upload  h/c/p report  Tab next pane  q quit"
        }
    }
}
