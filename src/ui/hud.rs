use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::GameState;

const HUD_MARGIN_X: u16 = 1;
const HUD_SEPARATOR: &str = "  ";

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    let status_area = inset_horizontal(status_area, HUD_MARGIN_X);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(status_area);

    frame.render_widget(
        Paragraph::new(status_line(state, theme)).alignment(Alignment::Left),
        left,
    );
    frame.render_widget(
        Paragraph::new(Line::from("arrows/WASD move  q quit"))
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.hud_muted)),
        right,
    );

    play_area
}

fn status_line<'a>(state: &GameState, theme: &Theme) -> Line<'a> {
    let value_style = Style::default()
        .fg(theme.hud_score)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(theme.hud_muted);

    Line::from(vec![
        Span::styled("Score: ", label_style),
        Span::styled(state.score().to_string(), value_style),
        Span::raw(HUD_SEPARATOR),
        Span::styled("Length: ", label_style),
        Span::styled(state.snake.len().to_string(), value_style),
        Span::raw(HUD_SEPARATOR),
        Span::styled("Apples: ", label_style),
        Span::styled(
            format!("{}/{}", state.apples.len(), state.apples.capacity()),
            Style::default().fg(theme.apple),
        ),
    ])
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    let total_margin = margin.saturating_mul(2);
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(total_margin),
        height: area.height,
    }
}
