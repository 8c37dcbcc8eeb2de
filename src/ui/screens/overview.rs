use crate::logic::Assessment;
use crate::models::month_name;
use crate::report::format_indian;
use crate::ui::components::{percent_gauge, rainfall_gauge, score_gauge};
use crate::ui::screens::{render_nav, render_status_message};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct OverviewScreen<'a> {
    pub assessment: &'a Assessment,
    pub status_message: Option<&'a str>,
}

impl<'a> OverviewScreen<'a> {
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

impl Widget for OverviewScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(4), // Gauges row
                Constraint::Min(10),   // Feasibility/potential and economics
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);
        self.render_gauges(chunks[1], buf);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        self.render_feasibility(middle[0], buf);
        self.render_economics(middle[1], buf);

        render_status_message(self.status_message, chunks[3], buf);
        render_nav(chunks[4], buf);
    }
}

impl OverviewScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let location = &self.assessment.location;
        let property = &self.assessment.property;
        let title = if property.name.is_empty() {
            format!("Raincatch - {}", location.district)
        } else {
            format!("Raincatch - {} ({})", property.name, location.district)
        };

        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let info = format!(
            "{} | {} | Assessed {}",
            location.address,
            location.coordinates_label(),
            self.assessment.generated_at.format("%Y-%m-%d %H:%M")
        );
        Paragraph::new(Span::styled(info, Theme::dim()))
            .block(block)
            .render(area, buf);
    }

    fn render_gauges(&self, area: Rect, buf: &mut Buffer) {
        let gauge_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let result = &self.assessment.result;
        score_gauge("Feasibility", result.feasibility.score).render(gauge_chunks[0], buf);
        percent_gauge("Efficiency", result.potential.efficiency)
            .render(gauge_chunks[1], buf);
        percent_gauge("Flood Reduction", result.environmental.flood_reduction)
            .render(gauge_chunks[2], buf);
        rainfall_gauge("Annual Rainfall", Some(self.assessment.rainfall.annual_rainfall))
            .render(gauge_chunks[3], buf);
    }

    fn render_feasibility(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Feasibility & Potential", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let feasibility = &self.assessment.result.feasibility;
        let potential = &self.assessment.result.potential;
        let status_style = Style::default()
            .fg(Theme::status_color(feasibility.status))
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(vec![
            Span::styled("Status: ", Theme::dim()),
            Span::styled(feasibility.status.as_str().to_uppercase(), status_style),
            Span::styled(format!("  ({}%)", feasibility.score), Theme::normal()),
        ])];
        for reason in &feasibility.reasons {
            lines.push(Line::from(Span::styled(format!("  {}", reason), Theme::dim())));
        }
        lines.push(Line::from(""));

        let rows = [
            ("Annual harvest", format_indian(potential.annual_harvest)),
            ("Monthly average", format_indian(potential.monthly_average)),
            ("Daily average", format_indian(potential.daily_average)),
            (
                "Peak month",
                format!(
                    "{} ({})",
                    format_indian(potential.peak_month_harvest),
                    month_name(potential.peak_month)
                ),
            ),
        ];
        for (label, value) in rows {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<16}", label), Theme::dim()),
                Span::styled(format!("{} L", value), Theme::normal()),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn render_economics(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Economics & Impact", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let econ = &self.assessment.result.economics;
        let env = &self.assessment.result.environmental;

        let payback_style = if econ.payback_period.years().is_some() {
            Theme::normal()
        } else {
            Theme::warning()
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{:<18}", "Total cost"), Theme::dim()),
                Span::styled(format!("₹{}", format_indian(econ.total_cost)), Theme::normal()),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<18}", "Annual savings"), Theme::dim()),
                Span::styled(
                    format!("₹{}", format_indian(econ.annual_savings)),
                    Theme::success(),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<18}", "Payback"), Theme::dim()),
                Span::styled(econ.payback_period.to_string(), payback_style),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<18}", "ROI"), Theme::dim()),
                Span::styled(format!("{}% per year", econ.roi), Theme::normal()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("{:<18}", "CO₂ reduction"), Theme::dim()),
                Span::styled(format!("{} kg/year", env.carbon_reduction), Theme::normal()),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<18}", "Recharge"), Theme::dim()),
                Span::styled(
                    format!("{} L/year", format_indian(env.groundwater_recharge)),
                    Style::default().fg(Theme::HARVEST),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<18}", "Flood reduction"), Theme::dim()),
                Span::styled(format!("{}%", env.flood_reduction), Theme::normal()),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::screens::{buffer_text, sample_assessment};

    #[test]
    fn renders_status_and_economics() {
        let assessment = sample_assessment();
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);
        OverviewScreen::new(&assessment)
            .with_status(Some("Report exported"))
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Raincatch - Asha Patel (Mumbai)"));
        assert!(text.contains("EXCELLENT"));
        assert!(text.contains("2,16,155 L"));
        assert!(text.contains("Report exported"));
        assert!(text.contains("[1]Overview"));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let assessment = sample_assessment();
        let area = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(area);
        OverviewScreen::new(&assessment).render(area, &mut buf);
    }
}
