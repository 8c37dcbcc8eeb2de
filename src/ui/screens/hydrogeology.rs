use crate::models::AquiferProfile;
use crate::ui::screens::{render_nav, render_status_message};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Widget, Wrap},
};

pub struct HydrogeologyScreen<'a> {
    pub aquifer: &'a AquiferProfile,
    pub status_message: Option<&'a str>,
}

impl<'a> HydrogeologyScreen<'a> {
    pub fn new(aquifer: &'a AquiferProfile) -> Self {
        Self {
            aquifer,
            status_message: None,
        }
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for HydrogeologyScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(9), // Aquifer table
                Constraint::Min(6),    // Methods, warnings, recommendations
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Hydrogeology", Theme::title()),
            Span::styled(" - ", Theme::dim()),
            Span::styled(&self.aquifer.aquifer_name, Theme::normal()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_profile(chunks[1], buf);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);

        self.render_methods(bottom[0], buf);
        self.render_advisories(bottom[1], buf);

        render_status_message(self.status_message, chunks[3], buf);
        render_nav(chunks[4], buf);
    }
}

impl HydrogeologyScreen<'_> {
    fn render_profile(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Aquifer")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let aquifer = self.aquifer;
        let suitability = aquifer.suitability_tier();

        let header = Row::new(vec![Cell::from("Property"), Cell::from("Value")])
            .style(Theme::header());

        let rows = vec![
            Row::new(vec![
                Cell::from("Name"),
                Cell::from(aquifer.aquifer_name.as_str()),
            ]),
            Row::new(vec![
                Cell::from("Type"),
                Cell::from(aquifer.aquifer_type.as_str()),
            ]),
            Row::new(vec![
                Cell::from("Depth to water"),
                Cell::from(aquifer.depth_to_water.to_string()),
            ]),
            Row::new(vec![
                Cell::from("Permeability"),
                Cell::from(aquifer.permeability.as_str()),
            ]),
            Row::new(vec![
                Cell::from("Water quality"),
                Cell::from(aquifer.quality.as_str())
                    .style(Style::default().fg(Theme::quality_color(aquifer.quality))),
            ]),
            Row::new(vec![
                Cell::from("Harvesting suitability"),
                Cell::from(suitability.as_str())
                    .style(Style::default().fg(Theme::suitability_color(suitability))),
            ]),
        ];

        let widths = [Constraint::Length(24), Constraint::Min(20)];
        Table::new(rows, widths).header(header).render(inner, buf);
    }

    fn render_methods(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Recharge Methods", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .aquifer
            .suitability
            .recharge_method
            .iter()
            .map(|m| {
                ListItem::new(Line::from(vec![
                    Span::styled("• ", Theme::dim()),
                    Span::styled(m.as_str(), Theme::normal()),
                ]))
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_advisories(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Advisories", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for warning in &self.aquifer.warnings {
            lines.push(Line::from(vec![
                Span::styled("⚠ ", Theme::warning()),
                Span::styled(warning.as_str(), Theme::warning()),
            ]));
        }
        for rec in &self.aquifer.recommendations {
            lines.push(Line::from(vec![
                Span::styled("→ ", Theme::dim()),
                Span::styled(rec.as_str(), Theme::normal()),
            ]));
        }

        if lines.is_empty() {
            lines.push(Line::from(Span::styled("No advisories", Theme::dim())));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::screens::{buffer_text, sample_assessment};

    #[test]
    fn renders_coastal_aquifer() {
        let assessment = sample_assessment();
        let area = Rect::new(0, 0, 120, 24);
        let mut buf = Buffer::empty(area);
        HydrogeologyScreen::new(&assessment.aquifer).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Coastal Alluvial"));
        assert!(text.contains("Saltwater intrusion risk"));
        assert!(text.contains("Harvesting suitability"));
        assert!(text.contains("Good"));
    }
}
