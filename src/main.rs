mod app;
mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod report;
mod rng;
mod ui;

use anyhow::Context;
use app::{App, Screen};
use clap::Parser;
use cli::{AssessArgs, Cli, Commands, OutputFormat};
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use datasources::Geocoder;
use logic::AssessmentService;
use ratatui::{backend::CrosstermBackend, Terminal};
use rng::EstimatorRng;
use std::io::{self, IsTerminal};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::screens::{HydrogeologyScreen, OverviewScreen, RainfallScreen, StructureScreen};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Init) => run_init(&cli),
        Some(Commands::Check) => run_check(&cli),
        Some(Commands::Assess(args)) => run_assess(&cli, args),
        None => run_dashboard(&cli),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_init(cli: &Cli) -> anyhow::Result<()> {
    let (config, path) = Config::setup_interactive(cli.config.as_ref())
        .context("Interactive setup failed")?;
    println!("Config written to {}", path.display());
    println!(
        "Run `raincatch` for the dashboard or `raincatch assess` for a report on {}.",
        config.location.address
    );
    Ok(())
}

fn run_check(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_ref())?;
    config.validate()?;
    let seed = config.resolve_seed(cli.seed)?;

    let geocoder = Geocoder::new();
    let property = &config.property;

    println!("Config OK");
    println!();
    println!("Address:        {}", config.location.address);
    if geocoder.is_known(&config.location.address) {
        println!("                (known city)");
    } else {
        let known: Vec<&str> = geocoder.known_cities().collect();
        println!(
            "                (not a known city, coordinates will be approximate; known: {})",
            known.join(", ")
        );
    }
    println!("Owner:          {}", property.name);
    println!("Residents:      {}", property.dwellers);
    println!(
        "Roof:           {} m² {} (runoff {:.2})",
        property.roof_area,
        property.roof_type,
        property.roof_type.runoff_coefficient()
    );
    println!("Soil:           {}", property.soil_type);
    println!("Land:           {} m²", property.land_area);
    println!("Building:       {}", property.building_type);
    match seed {
        Some(s) => println!("Seed:           {}", s),
        None => println!("Seed:           (entropy)"),
    }
    println!("Report dir:     {}", config.output_dir().display());
    Ok(())
}

fn run_assess(cli: &Cli, args: &AssessArgs) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(cli.config.as_ref())?;
    if let Some(address) = &args.address {
        config.location.address = address.clone();
    }
    args.apply_to(&mut config.property)
        .map_err(anyhow::Error::msg)?;
    config.validate()?;

    let seed = config.resolve_seed(cli.seed)?;
    let mut service = AssessmentService::new(EstimatorRng::from_optional_seed(seed));
    let assessment = service
        .assess(&config.location.address, config.property.clone())
        .with_context(|| format!("Assessment failed for '{}'", config.location.address))?;

    if args.export {
        let path = report::export(&assessment, &config.output_dir(), args.format)?;
        println!("Report written to {}", path.display());
    } else if let Some(path) = &args.output {
        report::write_to(&assessment, path, args.format)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Report written to {}", path.display());
    } else {
        let color = args.format == OutputFormat::Text && io::stdout().is_terminal();
        print!("{}", report::render(&assessment, args.format, color)?);
    }

    Ok(())
}

fn run_dashboard(cli: &Cli) -> anyhow::Result<()> {
    let had_config = Config::exists(cli.config.as_ref());
    let config = match Config::load_or_default(cli.config.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run `raincatch init` or copy config/config.yaml.example to config/config.yaml");
            std::process::exit(1);
        }
    };
    config.validate()?;

    let seed = config.resolve_seed(cli.seed)?;
    let service = AssessmentService::new(EstimatorRng::from_optional_seed(seed));
    let mut app = App::new(config, service)?;
    if !had_config {
        app.set_status("No config found, using defaults - run `raincatch init` to set up");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();
            let status = app.status_message.as_deref();

            match app.screen {
                Screen::Overview => {
                    let screen = OverviewScreen::new(&app.assessment).with_status(status);
                    f.render_widget(screen, area);
                }
                Screen::Rainfall => {
                    let screen = RainfallScreen::new(&app.assessment).with_status(status);
                    f.render_widget(screen, area);
                }
                Screen::Hydrogeology => {
                    let screen =
                        HydrogeologyScreen::new(&app.assessment.aquifer).with_status(status);
                    f.render_widget(screen, area);
                }
                Screen::Structure => {
                    let screen = StructureScreen::new(&app.assessment).with_status(status);
                    f.render_widget(screen, area);
                }
            }
        })?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.code, key.modifiers);
                }
            }
        }

        // Handle refresh request
        if app.needs_refresh {
            match app.refresh() {
                Ok(()) => app.set_status("Site data re-estimated"),
                Err(e) => app.set_status(&format!("Re-estimate failed: {}", e)),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Char('e') => match app.export_report() {
            Ok(path) => app.set_status(&format!("Report exported to {}", path.display())),
            Err(e) => app.set_status(&format!("Export failed: {}", e)),
        },
        KeyCode::Char(c) => {
            if let Some(screen) = Screen::from_key(c) {
                app.switch_screen(screen);
                app.clear_status();
            }
        }
        _ => {}
    }
}
