//! Operation selector and operand fields

use crate::input::{FieldKind, OperandField};
use crate::structures::OperandUse;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the controls pane
pub struct ControlsRenderData<'a> {
    pub operations: &'a [String],
    pub selected: usize,
    pub operand_use: OperandUse,
    pub value: &'a OperandField,
    pub position: &'a OperandField,
    pub editing: Option<FieldKind>,
    pub can_start: bool,
    pub is_running: bool,
    pub capacity_commands: bool,
}

fn field_line(
    key: &'static str,
    name: &'static str,
    field: &OperandField,
    used: bool,
    editing: bool,
) -> Line<'static> {
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let name_style = if used {
        Style::default().fg(DEFAULT_THEME.fg)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };
    let value_style = if editing {
        Style::default()
            .bg(DEFAULT_THEME.current_line_bg)
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else if used {
        Style::default().fg(DEFAULT_THEME.number)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    };
    let cursor = if editing { "▏" } else { "" };

    Line::from(vec![
        Span::styled(format!(" {} ", key), key_style),
        Span::styled(format!(" {:<9}", name), name_style),
        Span::styled(format!(" {}{} ", field.text(), cursor), value_style),
    ])
}

/// Render the controls pane
pub fn render_controls_pane(frame: &mut Frame, area: Rect, data: ControlsRenderData, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Operation ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut lines = Vec::new();

    let mut ops = vec![Span::raw(" ")];
    for (i, name) in data.operations.iter().enumerate() {
        let style = if i == data.selected {
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        ops.push(Span::styled(format!(" {} ", name), style));
        ops.push(Span::raw(" "));
    }
    lines.push(Line::from(ops));
    lines.push(Line::default());

    lines.push(field_line(
        "v",
        "Value",
        data.value,
        data.operand_use.value,
        data.editing == Some(FieldKind::Value),
    ));
    lines.push(field_line(
        "p",
        "Position",
        data.position,
        data.operand_use.position,
        data.editing == Some(FieldKind::Position),
    ));
    lines.push(Line::default());

    let (state, style) = if data.is_running {
        ("▶ running", Style::default().fg(DEFAULT_THEME.secondary))
    } else if data.can_start {
        ("⎵ ready to start", Style::default().fg(DEFAULT_THEME.success))
    } else {
        ("✕ start disabled", Style::default().fg(DEFAULT_THEME.error))
    };
    lines.push(Line::from(Span::styled(
        format!(" {}", state),
        style.add_modifier(Modifier::BOLD),
    )));

    if data.capacity_commands {
        let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
        let desc_style = Style::default().fg(DEFAULT_THEME.fg);
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(" + ", key_style),
            Span::styled(" reserve(value) ", desc_style),
            Span::styled(" s ", key_style),
            Span::styled(" shrink_to_fit ", desc_style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
