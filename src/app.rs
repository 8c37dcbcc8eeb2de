use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::logic::{Assessment, AssessmentService};
use crate::report;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Overview,
    Rainfall,
    Hydrogeology,
    Structure,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Overview),
            '2' => Some(Screen::Rainfall),
            '3' => Some(Screen::Hydrogeology),
            '4' => Some(Screen::Structure),
            _ => None,
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,
    pub assessment: Assessment,
    service: AssessmentService,

    // UI state
    pub status_message: Option<String>,
    pub needs_refresh: bool,
}

impl App {
    /// Runs the first assessment for the configured location and property.
    pub fn new(config: Config, mut service: AssessmentService) -> Result<Self> {
        let assessment = service.assess(&config.location.address, config.property.clone())?;

        Ok(Self {
            screen: Screen::Overview,
            should_quit: false,
            config,
            assessment,
            service,
            status_message: None,
            needs_refresh: false,
        })
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn request_refresh(&mut self) {
        self.needs_refresh = true;
        self.set_status("Re-estimating site data...");
    }

    /// Draw fresh estimates for the same location and property.
    pub fn refresh(&mut self) -> Result<()> {
        self.needs_refresh = false;
        let location = self.assessment.location.clone();
        let property = self.assessment.property.clone();
        self.assessment = self.service.assess_location(location, property)?;
        Ok(())
    }

    pub fn export_report(&self) -> Result<PathBuf> {
        report::export(&self.assessment, &self.config.output_dir(), OutputFormat::Text)
    }
}
