//! UI rendering for jokecard.
//!
//! One screen, top to bottom: header, input section, results (candidate list
//! and share card side by side, stacked on narrow terminals), status bar.
//! An alert is drawn over everything while present.

mod alert;
mod candidates;
pub mod components;
mod input;
mod share;
pub mod theme;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Focus};
use crate::share_card::card_size;
use theme::{COLOR_ACCENT, COLOR_DIM, COLOR_TEXT};

pub use alert::{ALERT_CONFIRM, ALERT_TITLE};
pub use candidates::{candidate_header, SELECTED_LABEL, SELECT_LABEL};
pub use input::{GENERATE_LABEL, LOADING_MESSAGE};
pub use share::SHARE_TITLE;

pub const APP_TITLE: &str = "冷笑话生成器";
pub const EMPTY_HINT: &str = "输入关键词，选择风格，按 Enter 生成笑话";

/// Side-by-side results need at least this many columns.
const WIDE_LAYOUT_MIN_WIDTH: u16 = 80;

/// Draw the whole screen.
///
/// Takes `&mut App` to record whether the share card was drawn, which the
/// main loop uses to fire the pending export.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.share_card_drawn = false;
    let area = frame.area();

    let [header_area, input_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(input::INPUT_SECTION_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )))
        .centered(),
        header_area,
    );
    input::render_input_section(frame, input_area, app);
    render_body(frame, body_area, app);
    frame.render_widget(Paragraph::new(status_line(app)), status_area);

    if let Some(current) = &app.alert {
        alert::render_alert(frame, area, current);
    }
}

fn render_body(frame: &mut Frame, area: Rect, app: &mut App) {
    if area.height == 0 {
        return;
    }
    let show_results = app.session.results_visible();
    let show_share = app.session.share_visible();

    match (show_results, show_share) {
        (false, false) => {
            frame.render_widget(
                Paragraph::new(Span::styled(EMPTY_HINT, Style::default().fg(COLOR_DIM)))
                    .centered(),
                Rect { height: 1, ..area },
            );
        }
        (true, false) => candidates::render_candidates(frame, area, app),
        (false, true) => share::render_share_section(frame, area, app),
        (true, true) => {
            let [list_area, share_area] = if area.width >= WIDE_LAYOUT_MIN_WIDTH {
                Layout::horizontal([
                    Constraint::Min(20),
                    Constraint::Length(share::share_section_width()),
                ])
                .areas(area)
            } else {
                // Card height plus section border and hint row.
                let share_height = card_size(app.session.share_card()).height + 3;
                Layout::vertical([Constraint::Min(4), Constraint::Length(share_height)])
                    .areas(area)
            };
            candidates::render_candidates(frame, list_area, app);
            share::render_share_section(frame, share_area, app);
        }
    }
}

/// Status text when there is one, otherwise key hints for the focus.
fn status_line(app: &App) -> Line<'static> {
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            format!(" {}", status),
            Style::default().fg(COLOR_TEXT),
        ));
    }
    Line::from(Span::styled(keybind_hints(app), Style::default().fg(COLOR_DIM)))
}

pub fn keybind_hints(app: &App) -> String {
    let focus_hint = match app.focus {
        Focus::Keywords => "[Enter] 生成",
        Focus::Style => "[←/→] 切换风格",
        Focus::Candidates => "[↑/↓] 移动 [Enter] 选择",
    };
    let mut hints = format!(" {}  [Tab] 切换", focus_hint);
    if app.session.selected_id().is_some() {
        hints.push_str("  [Ctrl+S] 保存  [Ctrl+Y] 复制");
    }
    hints.push_str("  [Esc] 退出");
    hints
}
