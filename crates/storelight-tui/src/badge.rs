//! Status badge — ●/○/◐ icon plus label, colored by connectivity state.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use storelight_core::{BackendStatus, ConnectivityState};

use crate::theme;

/// Badge label text. Pure function of the status; the icon is added
/// separately by [`badge_line`].
pub fn badge_label(status: &BackendStatus) -> String {
    match status.state {
        ConnectivityState::Checking => "Connecting...".into(),
        ConnectivityState::Connected => {
            format!("Firebase Connected ({} products)", status.product_count)
        }
        ConnectivityState::Error => {
            format!(
                "Firebase Error - Demo Mode ({} products)",
                status.product_count
            )
        }
        ConnectivityState::Demo => {
            format!("Demo Mode ({} products)", status.product_count)
        }
    }
}

/// Status icon character without styling (for raw output).
pub fn badge_char(state: ConnectivityState) -> &'static str {
    match state {
        ConnectivityState::Checking => "◌",
        ConnectivityState::Connected => "●",
        ConnectivityState::Error => "◐",
        ConnectivityState::Demo => "○",
    }
}

fn badge_style(state: ConnectivityState) -> Style {
    let color = match state {
        ConnectivityState::Checking => theme::DIM_WHITE,
        ConnectivityState::Connected => theme::SUCCESS_GREEN,
        ConnectivityState::Error => theme::WARNING_YELLOW,
        ConnectivityState::Demo => theme::DEMO_BLUE,
    };
    Style::default().fg(color)
}

/// The full badge: styled icon and label as a renderable line.
pub fn badge_line(status: &BackendStatus) -> Line<'static> {
    let style = badge_style(status.state);
    Line::from(vec![
        Span::styled(badge_char(status.state).to_string(), style),
        Span::raw(" "),
        Span::styled(badge_label(status), style),
    ])
}
