//! Layout and rendering for the dashboard.
//!
//! - **Header**: title, crop selector and pause indicator
//! - **Gauges**: humidity, temperature and sunlight
//! - **Suggestion**: current suggestion and pressure
//! - **Charts**: last readings per metric
//! - **Status bar**: key help and transient messages

pub mod colors;
pub mod widgets;

mod dashboard;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app::App;

/// Draw the complete dashboard.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Gauges
            Constraint::Length(3), // Suggestion
            Constraint::Min(6),    // Charts
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, layout[0], app);
    dashboard::draw_gauges(frame, layout[1], app);
    dashboard::draw_suggestion(frame, layout[2], app);
    dashboard::draw_charts(frame, layout[3], app);
    draw_status_bar(frame, layout[4], app);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " CropSense ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Crop: "),
        Span::styled(
            format!("< {} >", app.selected_crop()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  readings: {}", app.updates()),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if app.is_paused() {
        spans.push(Span::styled(
            "  PAUSED ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let help = " q quit  </> crop  p pause  c clear charts ";
    let mut spans = vec![Span::styled(help, Style::default().fg(Color::DarkGray))];
    if let Some(message) = app.status_message() {
        spans.push(Span::styled(
            format!(" {} ", message),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropsense_core::{CropSelection, Reading, Snapshot, Suggestion};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_before_first_reading() {
        let app = App::new(vec!["Tomato".to_string()], "Tomato", CropSelection::default());
        let screen = render(&app);
        assert!(screen.contains("Tomato"));
        assert!(screen.contains("Waiting for readings"));
    }

    #[test]
    fn test_draw_with_reading() {
        let mut app = App::new(vec!["Rice".to_string()], "Rice", CropSelection::default());
        app.on_snapshot(Snapshot::new(
            Reading::new("Rice", 40.0, 50.0, 500.0, 1010.0),
            Suggestion::TooHot,
        ));
        let screen = render(&app);
        assert!(screen.contains(Suggestion::TooHot.as_str()));
        assert!(screen.contains("50%"));
        assert!(screen.contains("40.0°C"));
    }
}
