use crate::logic::Assessment;
use crate::models::{month_name, Trend, MONSOON_MONTHS};
use crate::report::format_indian;
use crate::ui::screens::{render_nav, render_status_message};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Widget},
};

pub struct RainfallScreen<'a> {
    pub assessment: &'a Assessment,
    pub status_message: Option<&'a str>,
}

impl<'a> RainfallScreen<'a> {
    pub fn new(assessment: &'a Assessment) -> Self {
        Self {
            assessment,
            status_message: None,
        }
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for RainfallScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(10),   // Monthly chart
                Constraint::Length(8), // Prediction and harvest
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let rainfall = &self.assessment.rainfall;
        let title = Line::from(vec![
            Span::styled("Rainfall", Theme::title()),
            Span::styled(" - ", Theme::dim()),
            Span::styled(&rainfall.source, Theme::normal()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_chart(chunks[1], buf);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        self.render_prediction(bottom[0], buf);
        self.render_harvest(bottom[1], buf);

        render_status_message(self.status_message, chunks[3], buf);
        render_nav(chunks[4], buf);
    }
}

impl RainfallScreen<'_> {
    fn render_chart(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Monthly Rainfall (mm)", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let bars: Vec<Bar> = self
            .assessment
            .rainfall
            .monthly_rainfall
            .iter()
            .enumerate()
            .map(|(i, mm)| {
                let color = if MONSOON_MONTHS.contains(&i) {
                    Theme::MONSOON
                } else {
                    Theme::RAIN
                };
                let value = mm.max(0.0).round() as u64;
                Bar::default()
                    .value(value)
                    .label(Line::from(month_name(i)))
                    .text_value(value.to_string())
                    .style(Style::default().fg(color))
            })
            .collect();

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(5)
            .bar_gap(1);
        chart.render(area, buf);
    }

    fn render_prediction(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Outlook")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let rainfall = &self.assessment.rainfall;
        let prediction = &rainfall.prediction;
        let trend_style = match prediction.trend {
            Trend::Increasing => Theme::success(),
            Trend::Decreasing => Theme::warning(),
            Trend::Stable => Theme::normal(),
        };
        let (peak, peak_mm) = rainfall.peak_month();

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{:<18}", "Annual"), Theme::dim()),
                Span::styled(format!("{:.0} mm", rainfall.annual_rainfall), Theme::normal()),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<18}", "Monsoon average"), Theme::dim()),
                Span::styled(
                    format!("{:.0} mm/month", rainfall.monsoon_average()),
                    Theme::normal(),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<18}", "Wettest month"), Theme::dim()),
                Span::styled(
                    format!("{} ({:.0} mm)", month_name(peak), peak_mm),
                    Theme::normal(),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<18}", "Next year"), Theme::dim()),
                Span::styled(format!("~{:.0} mm ", prediction.next_year), Theme::normal()),
                Span::styled(
                    format!("{} {}", prediction.trend.symbol(), prediction.trend),
                    trend_style,
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<18}", "Confidence"), Theme::dim()),
                Span::styled(format!("{:.0}%", prediction.confidence), Theme::normal()),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<18}", "Updated"), Theme::dim()),
                Span::styled(rainfall.last_updated.to_string(), Theme::normal()),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_harvest(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Monthly Harvest (L)")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let potential = &self.assessment.result.potential;

        // Two columns of six months each
        let lines: Vec<Line> = (0..6)
            .map(|row| {
                let cell = |i: usize| {
                    let style = if i == potential.peak_month {
                        Theme::highlight()
                    } else {
                        Theme::normal()
                    };
                    vec![
                        Span::styled(format!("{} ", month_name(i)), Theme::dim()),
                        Span::styled(format!("{:>10}", format_indian(potential.monthly_harvest[i])), style),
                        Span::raw("   "),
                    ]
                };
                let mut spans = cell(row);
                spans.extend(cell(row + 6));
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
