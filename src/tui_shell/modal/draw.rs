use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::{Modal, ModalKind};

pub(in crate::tui_shell) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 90);
    let h = area.height.saturating_sub(6).clamp(8, 22);
    let box_area = Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    };

    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal_title(modal));
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    let lines: Vec<Line> = modal
        .lines
        .iter()
        .map(|s| {
            if s.starts_with("error:") {
                Line::from(Span::styled(s.as_str(), Style::default().fg(Color::Red)))
            } else {
                Line::from(s.as_str())
            }
        })
        .collect();
    let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    match &modal.kind {
        ModalKind::Viewer | ModalKind::ConfirmAction { .. } => {
            frame.render_widget(body, inner);
        }

        ModalKind::TextInput { prompt, .. } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(inner);
            frame.render_widget(body, parts[0]);

            let input_line = Line::from(vec![
                Span::styled(prompt.as_str(), Style::default().fg(Color::Yellow)),
                Span::raw(modal.input.buf.as_str()),
            ]);
            frame.render_widget(
                Paragraph::new(input_line)
                    .block(Block::default().borders(Borders::ALL).title("Edit")),
                parts[1],
            );

            let x = (prompt.chars().count() + modal.input.cursor) as u16;
            frame.set_cursor_position((parts[1].x + 1 + x, parts[1].y + 1));
        }
    }
}

fn modal_title(modal: &Modal) -> Line<'static> {
    let mut spans = vec![
        Span::styled(modal.title.clone(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled("Esc", Style::default().fg(Color::Gray)),
    ];
    match &modal.kind {
        ModalKind::ConfirmAction { .. } => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("Enter/y confirm", Style::default().fg(Color::Gray)));
        }
        ModalKind::TextInput { .. } => {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("Enter", Style::default().fg(Color::Gray)));
        }
        ModalKind::Viewer => {}
    }
    Line::from(spans)
}
