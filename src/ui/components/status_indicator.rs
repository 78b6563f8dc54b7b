//! Status Indicator Component
//!
//! Spinner line for the action row.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::COLOR_LOADING;

const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Ticks per spinner frame at the 16 ms loop tick.
const TICKS_PER_FRAME: u64 = 6;

#[derive(Debug, Clone)]
pub enum StatusIndicatorType {
    Spinner { message: String, frame: usize },
}

impl StatusIndicatorType {
    /// Spinner whose frame follows the app tick counter.
    pub fn spinner(message: impl Into<String>, tick: u64) -> Self {
        Self::Spinner {
            message: message.into(),
            frame: (tick / TICKS_PER_FRAME) as usize,
        }
    }
}

pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    let (icon, message, color) = match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            (get_spinner_char(*frame), message, COLOR_LOADING)
        }
    };

    Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(color)),
        Span::styled(
            message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}
