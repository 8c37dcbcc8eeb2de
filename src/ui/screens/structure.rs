use crate::logic::Assessment;
use crate::report::format_indian;
use crate::ui::screens::{render_nav, render_status_message};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub struct StructureScreen<'a> {
    pub assessment: &'a Assessment,
    pub status_message: Option<&'a str>,
}

impl<'a> StructureScreen<'a> {
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

impl Widget for StructureScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(8), // Primary structure and property
                Constraint::Min(5),    // Supporting components and notes
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let rec = &self.assessment.result.recommendation;
        let title = Line::from(vec![
            Span::styled("Recommended Structure", Theme::title()),
            Span::styled(" - ", Theme::dim()),
            Span::styled(rec.primary_structure.as_str(), Theme::highlight()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.render_dimensions(top[0], buf);
        self.render_property(top[1], buf);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        self.render_components(bottom[0], buf);
        self.render_notices(bottom[1], buf);

        render_status_message(self.status_message, chunks[3], buf);
        render_nav(chunks[4], buf);
    }
}

impl StructureScreen<'_> {
    fn render_dimensions(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Sizing", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let rec = &self.assessment.result.recommendation;
        let dims = &rec.dimensions;
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{:<14}", "Structure"), Theme::dim()),
                Span::styled(rec.primary_structure.as_str(), Theme::normal()),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<14}", "Dimensions"), Theme::dim()),
                Span::styled(
                    format!("{}m × {}m × {}m", dims.length, dims.width, dims.depth),
                    Theme::normal(),
                ),
            ]),
            Line::from(vec![
                Span::styled(format!("{:<14}", "Capacity"), Theme::dim()),
                Span::styled(format!("{} L", format_indian(dims.capacity)), Theme::normal()),
            ]),
        ];

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_property(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Property", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let property = &self.assessment.property;
        let rows = [
            ("Residents", property.dwellers.to_string()),
            (
                "Roof",
                format!("{} m² {}", property.roof_area, property.roof_type),
            ),
            ("Soil", property.soil_type.to_string()),
            ("Land", format!("{} m²", property.land_area)),
            ("Building", property.building_type.to_string()),
        ];
        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{:<12}", label), Theme::dim()),
                    Span::styled(value, Theme::normal()),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_components(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Supporting Components", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .assessment
            .result
            .recommendation
            .secondary_structures
            .iter()
            .map(|s| {
                ListItem::new(Line::from(vec![
                    Span::styled("• ", Theme::dim()),
                    Span::styled(s.as_str(), Theme::normal()),
                ]))
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_notices(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Notes", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let notices = &self.assessment.result.notices;
        if notices.is_empty() {
            Paragraph::new(Span::styled("No calculation notes", Theme::dim())).render(inner, buf);
            return;
        }

        let lines: Vec<Line> = notices
            .iter()
            .map(|n| Line::from(Span::styled(n.describe(), Theme::warning())))
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
