//! Structure pane rendering
//!
//! Draws the collection of the current animation frame as a row of boxed
//! cells. The drawing style follows the collection's capacity policy:
//!
//! - **Unbounded**: linked nodes ending in `NULL`
//! - **Fixed**: queue slots from front to rear
//! - **Growable**: vector cells followed by unused capacity slots

use crate::collection::Capacity;
use crate::projection::Frame as StepFrame;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Unused vector slots drawn before collapsing the rest into a count
const MAX_UNUSED_SLOTS: usize = 8;

struct Cell {
    value: String,
    label: String,
    style: Style,
}

impl Cell {
    fn new(value: impl Into<String>, label: impl Into<String>, style: Style) -> Self {
        Cell {
            value: value.into(),
            label: label.into(),
            style,
        }
    }
}

/// Lay out `cells` as four text rows, joined by `connector` when given
fn cell_rows(cells: &[Cell], connector: Option<&str>, link: Option<usize>) -> Vec<Line<'static>> {
    let mut rows: [Vec<Span<'static>>; 4] = Default::default();
    let label_style = Style::default().fg(DEFAULT_THEME.comment);

    for (i, cell) in cells.iter().enumerate() {
        let w = cell
            .value
            .chars()
            .count()
            .max(cell.label.chars().count())
            .max(2)
            + 2;
        rows[0].push(Span::styled(format!("┌{}┐", "─".repeat(w)), cell.style));
        rows[1].push(Span::styled(
            format!("│{:^w$}│", cell.value, w = w),
            cell.style.add_modifier(Modifier::BOLD),
        ));
        rows[2].push(Span::styled(format!("└{}┘", "─".repeat(w)), cell.style));
        rows[3].push(Span::styled(format!(" {:^w$} ", cell.label, w = w), label_style));

        if let Some(arrow) = connector.filter(|_| i + 1 < cells.len()) {
            let pad = " ".repeat(arrow.chars().count());
            let arrow_style = if link == Some(i) {
                Style::default()
                    .fg(DEFAULT_THEME.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.node)
            };
            rows[0].push(Span::raw(pad.clone()));
            rows[1].push(Span::styled(arrow.to_string(), arrow_style));
            rows[2].push(Span::raw(pad.clone()));
            rows[3].push(Span::raw(pad));
        }
    }

    rows.into_iter().map(Line::from).collect()
}

fn node_style(highlighted: bool) -> Style {
    if highlighted {
        Style::default().fg(DEFAULT_THEME.highlight)
    } else {
        Style::default().fg(DEFAULT_THEME.node)
    }
}

/// Build all lines for one frame
pub(crate) fn structure_lines(step: &StepFrame) -> Vec<Line<'static>> {
    let values = step.display.values();
    let capacity = step.display.capacity();
    let mut lines = Vec::new();

    if let Some(value) = step.pending {
        let (label, caption) = match capacity {
            Capacity::Unbounded => ("New Node", "Ready to be inserted"),
            Capacity::Fixed(_) => ("New Element", "Ready to enqueue"),
            Capacity::Growable(_) => ("New Element", "Ready to be placed"),
        };
        let pending = [Cell::new(
            value.to_string(),
            label,
            Style::default().fg(DEFAULT_THEME.pending),
        )];
        let mut rows = cell_rows(&pending, None, None);
        rows[1].spans.push(Span::styled(
            format!("  → {}", caption),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
        lines.extend(rows);
        lines.push(Line::default());
    }

    let mut cells: Vec<Cell> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let label = match capacity {
                Capacity::Unbounded => format!("Node {}", i),
                Capacity::Fixed(_) => format!("Pos {}", i),
                Capacity::Growable(_) => format!("idx {}", i),
            };
            Cell::new(v.to_string(), label, node_style(step.highlighted.contains(&i)))
        })
        .collect();

    let muted = Style::default().fg(DEFAULT_THEME.comment);
    let (header, connector) = match capacity {
        Capacity::Unbounded => {
            cells.push(Cell::new("NULL", "", muted));
            (
                Line::from(Span::styled("head", muted)),
                Some(" ──► "),
            )
        }
        Capacity::Fixed(cap) => {
            if cells.is_empty() {
                cells.push(Cell::new("Empty", "", muted));
            }
            (
                Line::from(vec![
                    Span::styled("front → rear", muted),
                    Span::styled(
                        format!("   size {}/{}", values.len(), cap),
                        Style::default().fg(DEFAULT_THEME.primary),
                    ),
                ]),
                Some(" ── "),
            )
        }
        Capacity::Growable(cap) => {
            let unused = cap.saturating_sub(values.len());
            cells.extend(
                (0..unused.min(MAX_UNUSED_SLOTS)).map(|_| Cell::new("-", "unused", muted)),
            );
            if unused > MAX_UNUSED_SLOTS {
                cells.push(Cell::new(
                    format!("+{}", unused - MAX_UNUSED_SLOTS),
                    "unused",
                    muted,
                ));
            }
            (
                Line::from(Span::styled(
                    format!("size: {}, capacity: {}", values.len(), cap),
                    Style::default().fg(DEFAULT_THEME.primary),
                )),
                Some(" "),
            )
        }
    };

    lines.push(header);
    lines.extend(cell_rows(&cells, connector, step.link));
    lines
}

/// Render the structure pane
pub fn render_structure_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    step: &StepFrame,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(structure_lines(step)).block(block);
    frame.render_widget(paragraph, area);
}

/// Render the phase description under the structure
pub fn render_phase_pane(frame: &mut Frame, area: Rect, step: &StepFrame) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let style = if step.running {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(step.status.clone(), style)))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use crate::structures::{LinkedList, ListOp, Operands, Queue, QueueOp, Structure};

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn list_ends_in_null() {
        let list = LinkedList::default();
        let step = project(&list, &list.seed(), ListOp::Traverse, 0, Operands::default(), false);
        let drawn = text(&structure_lines(&step));
        assert!(drawn.contains("NULL"));
        assert!(drawn.contains("Node 2"));
    }

    #[test]
    fn pending_node_is_drawn_above() {
        let list = LinkedList::default();
        let step = project(&list, &list.seed(), ListOp::Insert, 1, Operands::new(15, 1), true);
        let drawn = text(&structure_lines(&step));
        assert!(drawn.contains("Ready to be inserted"));
        assert!(drawn.find("15") < drawn.find("Node 0"));
    }

    #[test]
    fn empty_queue_shows_placeholder() {
        let q = Queue::new(vec![], 5);
        let step = project(&q, &q.seed(), QueueOp::Dequeue, 0, Operands::default(), false);
        let drawn = text(&structure_lines(&step));
        assert!(drawn.contains("Empty"));
        assert!(drawn.contains("size 0/5"));
    }
}
