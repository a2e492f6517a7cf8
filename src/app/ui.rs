use derive_getters::Getters;
use derive_new::new;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use rust_decimal::Decimal;

use crate::app::{
    screen::HoldingsScreen,
    utils::{pnl_color, with_currency},
};

#[derive(Clone, Debug, Getters, new)]
pub struct UiSettings {
    title: String,
    currency: String,
}

/// Draws the whole screen and returns the area of the summary panel, which
/// the caller uses to hit-test mouse clicks.
pub fn render(
    frame: &mut Frame,
    screen: &HoldingsScreen,
    settings: &UiSettings,
    table_state: &mut TableState,
) -> Rect {
    let summary_height = if screen.summary_panel().is_expanded() {
        6
    } else {
        3
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(summary_height),
        ])
        .split(frame.area());

    render_header(frame, screen, settings, chunks[0]);
    render_holdings(frame, screen, settings, table_state, chunks[1]);
    render_summary(frame, screen, settings, chunks[2]);

    chunks[2]
}

fn render_header(frame: &mut Frame, screen: &HoldingsScreen, settings: &UiSettings, area: Rect) {
    let mut spans = vec![Span::styled(
        settings.title().clone(),
        Style::default()
            .fg(Color::White)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(updated) = screen.last_updated() {
        spans.push(Span::styled(
            format!("  updated {}", updated.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn render_holdings(
    frame: &mut Frame,
    screen: &HoldingsScreen,
    settings: &UiSettings,
    table_state: &mut TableState,
    area: Rect,
) {
    let rows = screen.rows();

    if rows.is_empty() {
        let empty_message = Paragraph::new("No holdings to display.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().title("Holdings").borders(Borders::ALL));
        frame.render_widget(empty_message, area);
        return;
    }

    let header_cells = ["Symbol", "Quantity", "LTP", "P&L"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let currency = settings.currency();
    let table_rows = rows.iter().map(|row| {
        let cells = [
            Cell::from(row.symbol().clone()).style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from(row.quantity().clone()),
            Cell::from(with_currency(currency, row.ltp())),
            Cell::from(with_currency(currency, row.pnl()))
                .style(Style::default().fg(pnl_color(*row.pnl_value()))),
        ];

        Row::new(cells).height(1)
    });

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(20),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ];

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(Block::default().title("Holdings").borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, area, table_state);
}

fn render_summary(frame: &mut Frame, screen: &HoldingsScreen, settings: &UiSettings, area: Rect) {
    let metrics = screen.metrics();
    let formatted = metrics.formatted();
    let panel = screen.summary_panel();
    let currency = settings.currency();

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", panel.indicator()),
            Style::default().fg(Color::Magenta),
        ),
        Span::styled("Profit & Loss: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            with_currency(currency, formatted.total_pnl()),
            Style::default().fg(pnl_color(*metrics.total_pnl())),
        ),
    ])];

    if panel.is_expanded() {
        lines.push(summary_line(
            "Current Value: ",
            &with_currency(currency, formatted.total_current_value()),
            None,
        ));
        lines.push(summary_line(
            "Total Investment: ",
            &with_currency(currency, formatted.total_investment()),
            None,
        ));
        lines.push(summary_line(
            "Today's Profit & Loss: ",
            &with_currency(currency, formatted.todays_pnl()),
            Some(*metrics.todays_pnl()),
        ));
    }

    let summary = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));

    frame.render_widget(summary, area);
}

fn summary_line<'a>(label: &'a str, value: &str, signed: Option<Decimal>) -> Line<'a> {
    let value_style = match signed {
        Some(amount) => Style::default().fg(pnl_color(amount)),
        None => Style::default(),
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(value.to_string(), value_style),
    ])
}

