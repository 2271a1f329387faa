//! Gauges, suggestion panel and history charts.

use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph};

use cropsense_core::Metric;

use super::colors::{metric_color, suggestion_color};
use super::widgets::{
    chart_bounds, format_humidity, format_pressure, format_sunlight, format_temperature,
    humidity_percent, sunlight_percent, temperature_percent,
};
use crate::tui::app::App;

fn gauge(title: &str, percent: u16, label: String, color: Color) -> Gauge<'static> {
    Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(label)
}

/// Draw one gauge per metric.
pub(super) fn draw_gauges(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let (humidity, temperature, sunlight) = match app.latest() {
        Some(s) => (s.humidity, s.temperature, s.sunlight),
        None => (0.0, 0.0, 0.0),
    };
    let has_data = app.latest().is_some();
    let text = |formatted: String| if has_data { formatted } else { "--".to_string() };

    frame.render_widget(
        gauge(
            Metric::Humidity.label(),
            humidity_percent(humidity),
            text(format_humidity(humidity)),
            metric_color(Metric::Humidity),
        ),
        columns[0],
    );
    frame.render_widget(
        gauge(
            Metric::Temperature.label(),
            temperature_percent(temperature),
            text(format_temperature(temperature)),
            metric_color(Metric::Temperature),
        ),
        columns[1],
    );
    frame.render_widget(
        gauge(
            Metric::Sunlight.label(),
            sunlight_percent(sunlight),
            text(format_sunlight(sunlight)),
            metric_color(Metric::Sunlight),
        ),
        columns[2],
    );
}

/// Draw the current suggestion, colored by its wording.
pub(super) fn draw_suggestion(frame: &mut Frame, area: Rect, app: &App) {
    let line = match app.latest() {
        Some(snapshot) => {
            let text = snapshot.suggestion.as_str();
            Line::from(vec![
                Span::styled(
                    text,
                    Style::default()
                        .fg(suggestion_color(text))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("   {}", format_pressure(snapshot.pressure)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        None => Line::from(Span::styled(
            "Waiting for readings...",
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Suggestion "),
        ),
        area,
    );
}

/// Draw a line chart per metric, side by side.
pub(super) fn draw_charts(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (metric, column) in Metric::ALL.into_iter().zip(columns.iter()) {
        draw_chart(frame, *column, app, metric);
    }
}

fn draw_chart(frame: &mut Frame, area: Rect, app: &App, metric: Metric) {
    let series = app.history().series(metric);
    let data = series.chart_data();
    let [y_min, y_max] = chart_bounds(series.bounds());
    let x_max = (series.capacity().saturating_sub(1)) as f64;

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(metric_color(metric)))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", metric.label())),
        )
        .x_axis(Axis::default().bounds([0.0, x_max]))
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels([format!("{:.0}", y_min), format!("{:.0}", y_max)])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
