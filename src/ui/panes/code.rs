//! "Current state as code" pane
//!
//! Shows the collection rebuilt as a C++ or Java snippet, with the same
//! lightweight word-level highlighting for both languages.

use crate::snippet::Language;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Word-level highlighting for C++/Java snippet lines
pub(crate) fn highlight_code_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    for (i, c) in line.char_indices() {
        // Comments run to end of line
        if line[i..].starts_with("//") {
            if !current_word.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut current_word)));
            }
            spans.push(Span::styled(
                line[i..].to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            return Line::from(spans);
        }

        if c.is_alphanumeric() || c == '_' {
            current_word.push(c);
            continue;
        }

        if !current_word.is_empty() {
            let style = word_style(&current_word, c == '(');
            spans.push(Span::styled(std::mem::take(&mut current_word), style));
        }

        let style = match c {
            '{' | '}' | '(' | ')' | '[' | ']' | '<' | '>' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
    }

    if !current_word.is_empty() {
        let style = word_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn word_style(word: &str, is_function: bool) -> Style {
    match word {
        "int" | "Integer" | "vector" | "ArrayList" | "LinkedList" | "Queue" | "Arrays" => {
            Style::default().fg(DEFAULT_THEME.type_name)
        }
        "new" | "return" | "class" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "NULL" | "null" => Style::default().fg(DEFAULT_THEME.number),
        w if w.chars().all(|c| c.is_ascii_digit()) => Style::default().fg(DEFAULT_THEME.number),
        _ if is_function => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the code pane
pub fn render_code_pane(
    frame: &mut Frame,
    area: Rect,
    code: &str,
    language: Language,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Current State ({}) ", language))
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = code.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:3} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_code_line(line).spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_swallows_rest_of_line() {
        let line = highlight_code_line("queue.enqueue(10); // tail");
        let last = line.spans.last().unwrap();
        assert_eq!(last.content, "// tail");
        assert_eq!(last.style.fg, Some(DEFAULT_THEME.comment));
    }

    #[test]
    fn call_names_use_function_color() {
        let line = highlight_code_line("list.insertAtTail(20);");
        let call = line
            .spans
            .iter()
            .find(|s| s.content == "insertAtTail")
            .unwrap();
        assert_eq!(call.style.fg, Some(DEFAULT_THEME.function));
    }

    #[test]
    fn text_is_preserved() {
        let src = "vector<int> vec = {1, 2};";
        let line = highlight_code_line(src);
        let joined: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(joined, src);
    }
}
