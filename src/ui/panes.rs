//! Pane rendering for the tape visualizer
//!
//! Each pane is a stateless render function over the interpreter's
//! currently restored snapshot:
//! - [`render_program_pane`]: the instruction strip with the cursor
//!   highlighted
//! - [`render_tape_pane`]: the cell grid with the data pointer highlighted
//! - [`render_output_pane`]: the accumulated output buffer
//! - [`render_status_bar`]: step position, current action, keybindings

use crate::lexer::Instruction;
use crate::memory::Tape;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Render the program pane: every instruction as one symbol, wrapped to the
/// pane width, with the instruction at `cursor` highlighted. `cursor` is
/// the next instruction to execute; past the end of the program nothing is
/// highlighted (the run is over).
pub fn render_program_pane(
    frame: &mut Frame,
    area: Rect,
    program: &[Instruction],
    cursor: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block("Program", is_focused);

    if program.is_empty() {
        let paragraph = Paragraph::new("(empty program)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    let mut lines: Vec<Line> = Vec::new();
    for row_start in (0..program.len()).step_by(inner_width) {
        let row_end = (row_start + inner_width).min(program.len());
        let spans: Vec<Span> = (row_start..row_end)
            .map(|i| {
                let symbol = program[i].symbol().to_string();
                if i == cursor {
                    Span::styled(
                        symbol,
                        Style::default()
                            .bg(DEFAULT_THEME.pointer_cell)
                            .fg(Color::Black)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    let fg = match program[i] {
                        Instruction::LoopStart | Instruction::LoopEnd => DEFAULT_THEME.primary,
                        Instruction::OutputCell | Instruction::InputCell => {
                            DEFAULT_THEME.secondary
                        }
                        _ => DEFAULT_THEME.fg,
                    };
                    Span::styled(symbol, Style::default().fg(fg))
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    clamp_scroll(scroll_offset, lines.len(), visible_height);
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

/// Render the tape pane: one fixed-width field per cell in a wrapped grid,
/// each row prefixed with the index of its first cell, the cell under the
/// data pointer highlighted.
pub fn render_tape_pane(
    frame: &mut Frame,
    area: Rect,
    tape: &Tape,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block("Tape", is_focused);

    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Each cell takes 6 columns ("  255 "), plus a 5-column row prefix.
    let cell_width = 6;
    let prefix_width = 5;
    let cells_per_row = ((inner_width.saturating_sub(prefix_width)) / cell_width).max(1);

    let cells = tape.cells();
    let mut lines: Vec<Line> = Vec::new();
    for row_start in (0..cells.len()).step_by(cells_per_row) {
        let row_end = (row_start + cells_per_row).min(cells.len());
        let mut spans = vec![Span::styled(
            format!("{:4}│", row_start),
            Style::default().fg(DEFAULT_THEME.comment),
        )];
        for (i, cell) in cells.iter().enumerate().take(row_end).skip(row_start) {
            if i == tape.pointer() {
                spans.push(Span::styled(
                    format!(" {:4} ", cell),
                    Style::default()
                        .bg(DEFAULT_THEME.pointer_cell)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                let fg = if *cell == 0 {
                    DEFAULT_THEME.comment
                } else {
                    DEFAULT_THEME.fg
                };
                spans.push(Span::styled(
                    format!(" {:4} ", cell),
                    Style::default().fg(fg),
                ));
            }
        }
        lines.push(Line::from(spans));
    }

    clamp_scroll(scroll_offset, lines.len(), visible_height);
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

/// Render the output pane with the bytes emitted so far, decoded as text.
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block("Output", is_focused);

    if output.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let lines: Vec<Line> = output
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(DEFAULT_THEME.fg))))
        .collect();

    clamp_scroll(scroll_offset, lines.len(), visible_height);
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    current_step: usize,
    total_steps: usize,
    is_playing: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left side: step info and current action
    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", current_step + 1, total_steps.max(1)),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds and state indicator
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↵ / ⌫ ", key_style),
        Span::styled(" end/start ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let is_at_start = current_step == 0;
    let is_at_end = current_step + 1 >= total_steps;

    if is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_end {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " END ",
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_start {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " START ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}

/// Clamp a scroll offset so the visible window stays inside the content.
fn clamp_scroll(scroll_offset: &mut usize, total_lines: usize, visible_height: usize) {
    if total_lines > visible_height {
        let max_scroll = total_lines - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
}
