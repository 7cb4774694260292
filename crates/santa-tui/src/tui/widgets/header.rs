// Header widget: decorative Santa art above the title.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const SANTA_ART: [&str; 4] = [
    r"   __*  ",
    r"  /__\  ",
    r" (o_o ) ",
    r"  \=_/  ",
];

/// Art and title lines, top to bottom.
pub fn header_lines(title: &str) -> Vec<Line<'static>> {
    let art_style = Style::default().fg(Color::Red);
    let mut lines: Vec<Line<'static>> = SANTA_ART
        .iter()
        .map(|row| Line::from(Span::styled(*row, art_style)))
        .collect();
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    lines
}

/// Render the header centered in `area`.
pub fn render(frame: &mut Frame, area: Rect, title: &str) {
    let paragraph = Paragraph::new(header_lines(title)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
