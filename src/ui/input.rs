//! Input section: keywords, style selector and the generate action.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use super::components::{render_status_indicator, render_tab_selector, StatusIndicatorType};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};
use crate::app::{App, Focus};
use crate::prompt::STYLE_PRESETS;
use crate::widgets::InputBoxWidget;

/// Rows used by [`render_input_section`].
pub const INPUT_SECTION_HEIGHT: u16 = 7;

pub const KEYWORDS_TITLE: &str = "关键词（用逗号分隔）";
pub const KEYWORDS_PLACEHOLDER: &str = "例如：猫，周一，咖啡";
pub const GENERATE_LABEL: &str = "[ 生成笑话 ]";
pub const LOADING_MESSAGE: &str = "正在生成笑话…";

pub fn render_input_section(frame: &mut Frame, area: Rect, app: &App) {
    let [keywords_area, style_area, action_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        InputBoxWidget::new(&app.keywords, KEYWORDS_TITLE, app.focus == Focus::Keywords)
            .placeholder(KEYWORDS_PLACEHOLDER),
        keywords_area,
    );

    let style_focused = app.focus == Focus::Style;
    let style_block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if style_focused {
            COLOR_ACCENT
        } else {
            COLOR_BORDER
        }))
        .title(" 风格 ");
    frame.render_widget(
        Paragraph::new(render_tab_selector(
            STYLE_PRESETS,
            app.style_index % STYLE_PRESETS.len(),
            style_focused,
        ))
        .block(style_block),
        style_area,
    );

    frame.render_widget(Paragraph::new(action_line(app)), action_area);
}

/// The generate button, or a spinner with the button disabled while a
/// request is in flight.
pub fn action_line(app: &App) -> Line<'static> {
    if app.is_loading() {
        let mut spans = vec![Span::styled(
            format!(" {} ", GENERATE_LABEL),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::DIM),
        )];
        spans.extend(
            render_status_indicator(&StatusIndicatorType::spinner(LOADING_MESSAGE, app.tick_count))
                .spans,
        );
        Line::from(spans)
    } else {
        Line::from(vec![
            Span::styled(
                format!(" {}", GENERATE_LABEL),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter / Ctrl+G", Style::default().fg(COLOR_DIM)),
        ])
    }
}
