use crate::annotate::{annotate, compose, scroll_to_line, CellContent, LayoutMode, LayoutRow};
use crate::app::{AppMode, RenderState, StatusMessage};
use crate::stress::StressTable;
use crate::ui::theme::colors;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Word shown in the header to demonstrate the override syntax.
pub const OVERRIDE_EXAMPLE: &str = "Cimorene\\'_`";

fn code(text: &str) -> Span<'static> {
    Span::styled(
        text.to_string(),
        Style::default().fg(colors::accent()).add_modifier(Modifier::BOLD),
    )
}

fn plain(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(colors::text()))
}

/// Convert composed rows into styled lines, glyphs coloured by stress.
pub fn render_layout_rows(rows: &[LayoutRow]) -> Vec<Line<'static>> {
    rows.iter()
        .map(|row| {
            let mut spans = Vec::new();
            let mut cursor = 0;
            for cell in &row.cells {
                if cell.column > cursor {
                    spans.push(Span::raw(" ".repeat(cell.column - cursor)));
                    cursor = cell.column;
                }
                match &cell.content {
                    CellContent::Glyphs(glyphs) => {
                        for (i, glyph) in glyphs.iter().enumerate() {
                            if i > 0 {
                                spans.push(Span::raw(" "));
                            }
                            spans.push(Span::styled(
                                glyph.symbol().to_string(),
                                Style::default().fg(colors::glyph(*glyph)),
                            ));
                        }
                    }
                    CellContent::Text(text) => spans.push(plain(text)),
                }
                cursor += cell.width;
            }
            Line::from(spans)
        })
        .collect()
}

/// Legend explaining the override syntax, followed by a rendered example.
pub fn render_header() -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(vec![
            plain("Words missing from the dictionary show "),
            Span::styled("✕", Style::default().fg(colors::warning())),
            plain(". Override with "),
            code("word\\code"),
            plain(": "),
            code("_"),
            plain(" unstressed, "),
            code("'"),
            plain(" primary, "),
            code("`"),
            plain(" secondary."),
        ]),
        Line::from(vec![
            plain("For instance, typing "),
            code(OVERRIDE_EXAMPLE),
            plain(" renders:"),
        ]),
    ];

    // Overrides never consult the table
    let example = annotate(OVERRIDE_EXAMPLE, &StressTable::default());
    lines.extend(render_layout_rows(&compose(
        &example,
        LayoutMode::WordAligned,
        usize::MAX,
    )));

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(colors::background()))
}

/// `(row, column)` offset that keeps `cursor` inside a text area of the
/// given inner size.
pub fn input_scroll(cursor: (usize, usize), width: u16, height: u16) -> (usize, usize) {
    let (row, column) = cursor;
    (
        row.saturating_sub(usize::from(height).saturating_sub(1)),
        column.saturating_sub(usize::from(width).saturating_sub(1)),
    )
}

fn to_offset(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Input box for an area `width` x `height`, borders included.
pub fn render_input(state: &RenderState, width: u16, height: u16) -> Paragraph<'static> {
    let (row, column) = input_scroll(
        state.cursor,
        width.saturating_sub(2),
        height.saturating_sub(2),
    );

    let border = if state.mode == AppMode::Editing {
        colors::accent()
    } else {
        colors::dimmed()
    };

    Paragraph::new(state.input.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Text ")
                .border_style(Style::default().fg(border)),
        )
        .scroll((to_offset(row), to_offset(column)))
        .style(Style::default().fg(colors::text()).bg(colors::background()))
}

pub fn render_toggle(layout_mode: LayoutMode) -> Line<'static> {
    let mark = if layout_mode.is_word_aligned() { "[x]" } else { "[ ]" };
    Line::from(vec![
        code(mark),
        plain(" Align to words"),
        Span::styled("  (Ctrl+T)", Style::default().fg(colors::dimmed())),
    ])
}

/// Annotation output scrolled so the rows of the cursor's line are visible.
pub fn render_annotations(state: &RenderState, width: u16, height: u16) -> Paragraph<'static> {
    let rows = compose(&state.lines, state.layout_mode, usize::from(width));
    let offset = scroll_to_line(&rows, state.cursor.0, usize::from(height));
    Paragraph::new(render_layout_rows(&rows))
        .scroll((to_offset(offset), 0))
        .style(Style::default().bg(colors::background()))
}

pub fn render_help() -> Paragraph<'static> {
    let text = vec![
        Line::from(code("Editing")),
        Line::from(plain("  type or paste text; Enter for a new line")),
        Line::from(plain("  Ctrl+T  toggle word/line alignment")),
        Line::from(plain("  Ctrl+V  paste from the clipboard")),
        Line::from(plain("  Esc     open the command deck")),
        Line::from(plain("  Ctrl+C  quit")),
        Line::from(""),
        Line::from(code("Commands")),
        Line::from(plain("  @file   load a text file")),
        Line::from(plain("  @@      load the clipboard")),
        Line::from(plain("  :align  toggle alignment")),
        Line::from(plain("  :clear  empty the text")),
        Line::from(plain("  :q      quit")),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(colors::dimmed()),
        )),
    ];
    Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Style::default().fg(colors::accent())),
        )
        .style(Style::default().bg(colors::background()))
}

pub fn render_command_deck(frame: &mut Frame, area: Rect, state: &RenderState) {
    frame.render_widget(Clear, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let accent_bar = Paragraph::new("▌").style(Style::default().fg(colors::accent()));
    frame.render_widget(accent_bar, layout[0]);

    let mut spans = vec![Span::styled(
        state.mode.label(),
        Style::default()
            .fg(colors::background())
            .bg(colors::accent()),
    )];
    spans.push(Span::raw(" "));

    match (&state.mode, &state.status) {
        (AppMode::Command, _) => spans.push(plain(&state.command_line)),
        (_, Some(StatusMessage::Warning(text))) => spans.push(Span::styled(
            text.clone(),
            Style::default().fg(colors::warning()),
        )),
        (_, Some(status)) => spans.push(plain(status.text())),
        (_, None) => spans.push(Span::styled(
            "Esc for commands, :h for help",
            Style::default().fg(colors::dimmed()),
        )),
    }

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(Style::default().bg(colors::background()));
    frame.render_widget(widget, layout[1]);
}
