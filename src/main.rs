use clap::{Parser, Subcommand};
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use serde::Serialize;
use std::io::stdout;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use srm::api::{JobDraft, JobsClient};
use srm::app::{App, JobsLoader};
use srm::config::{self, Config, ConfigResult};
use srm::error::SrmError;
use srm::notification::{NotificationOptions, NotificationQueue};
use srm::readiness;
use srm::suggestion::SuggestionCatalog;

/// Search and notification console for the B2B Plastics SRM
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Search materials, machines, jobs and moulds, and manage sourcing jobs"
)]
struct Args {
    /// Backend origin, overriding API_BASE_URL and the config file
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive search with suggestions (default)
    Search {
        /// JSON file with the suggestion catalog
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
    },
    /// Exit non-zero unless the backend answers GET /readyz with 2xx
    Readyz,
    /// Jobs REST API
    #[command(subcommand)]
    Jobs(JobsCommand),
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// GET /jobs
    List,
    /// GET /jobs/:id (prints null when missing)
    Get { id: String },
    /// GET /users/:uid/jobs
    User { user_id: String },
    /// POST /jobs with a JSON body
    Create { json: String },
    /// PUT /jobs/:id with a JSON body
    Update { id: String, json: String },
    /// DELETE /jobs/:id
    Delete { id: String },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let interactive = !matches!(
        args.command,
        Some(Command::Readyz) | Some(Command::Jobs(_))
    );
    init_logging(interactive);

    color_eyre::install()?;

    let mut config_result = config::load_config();
    config_result.config = config_result
        .config
        .with_base_url_override(args.base_url.clone());

    let code = match args.command {
        None => run_search(config_result, None)?,
        Some(Command::Search { catalog }) => run_search(config_result, catalog)?,
        Some(Command::Readyz) => {
            log_config_warning(&config_result);
            run_readyz(&config_result.config)?
        }
        Some(Command::Jobs(command)) => {
            log_config_warning(&config_result);
            run_jobs(&config_result.config, command)?
        }
    };

    #[cfg(debug_assertions)]
    log::debug!("=== SRM DEBUG SESSION ENDED ===");

    Ok(code)
}

/// Debug builds write to /tmp/srm-debug.log; release builds log to stderr
/// for the one-shot commands only, since the TUI owns the terminal.
fn init_logging(interactive: bool) {
    if cfg!(debug_assertions) {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/srm-debug.log");
        if let Ok(log_file) = log_file {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(log_format)
                .init();
            log::debug!("=== SRM DEBUG SESSION STARTED ===");
            return;
        }
    }

    if !interactive {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .format(log_format)
            .init();
    }
}

fn log_format(buf: &mut env_logger::fmt::Formatter, record: &log::Record) -> std::io::Result<()> {
    use std::io::Write;
    use std::time::SystemTime;

    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
    writeln!(
        buf,
        "[{}] [{}] {}",
        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}

fn log_config_warning(config_result: &ConfigResult) {
    if let Some(warning) = &config_result.warning {
        log::warn!("{}", warning);
    }
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

fn base_url(config: &Config) -> Result<&str, SrmError> {
    config.base_url().ok_or(SrmError::ApiNotConfigured)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_readyz(config: &Config) -> Result<ExitCode> {
    let base_url = base_url(config)?;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.api.timeout_secs))
        .build()?;

    match runtime()?.block_on(readiness::check_ready(&client, base_url)) {
        Ok(status) => {
            println!("ready ({})", status);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_jobs(config: &Config, command: JobsCommand) -> Result<ExitCode> {
    let client = JobsClient::new(
        base_url(config)?,
        Duration::from_secs(config.api.timeout_secs),
    );
    let rt = runtime()?;

    let mutation = match command {
        JobsCommand::List => {
            print_json(&rt.block_on(client.list_jobs()))?;
            return Ok(ExitCode::SUCCESS);
        }
        JobsCommand::Get { id } => {
            print_json(&rt.block_on(client.get_job(&id)))?;
            return Ok(ExitCode::SUCCESS);
        }
        JobsCommand::User { user_id } => {
            print_json(&rt.block_on(client.user_jobs(&user_id)))?;
            return Ok(ExitCode::SUCCESS);
        }
        JobsCommand::Create { json } => {
            let draft = parse_draft(&json)?;
            rt.block_on(client.create_job(&draft))
        }
        JobsCommand::Update { id, json } => {
            let draft = parse_draft(&json)?;
            rt.block_on(client.update_job(&id, &draft))
        }
        JobsCommand::Delete { id } => rt.block_on(client.delete_job(&id)),
    };

    print_json(&mutation.to_json())?;
    Ok(if mutation.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn parse_draft(json: &str) -> Result<JobDraft, SrmError> {
    Ok(serde_json::from_str(json)?)
}

fn run_search(config_result: ConfigResult, catalog: Option<PathBuf>) -> Result<ExitCode> {
    let ConfigResult { config, warning } = config_result;

    // Catalog errors are reported before the terminal is taken over
    let catalog_path = catalog.or_else(|| config.search.catalog.clone());
    let catalog = match &catalog_path {
        Some(path) => SuggestionCatalog::load(path)?,
        None => SuggestionCatalog::new(Vec::new()),
    };

    let notifications = NotificationQueue::new();
    if let Some(warning) = warning {
        notifications.warning(&warning, NotificationOptions::new());
    }
    if catalog_path.is_none() {
        notifications.info(
            "No catalog configured; only jobs are searchable",
            NotificationOptions::new().title("Catalog"),
        );
    }

    let mut app = App::new(catalog, notifications, &config.search);
    if let Some(base_url) = config.base_url() {
        let client = JobsClient::new(base_url, Duration::from_secs(config.api.timeout_secs));
        app = app.with_jobs_loader(JobsLoader::spawn(client));
    }

    let terminal = init_terminal()?;
    app.enable_mouse_capture();
    let result = run(terminal, app);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption
    if let Some(route) = app.route() {
        println!("{}", route);
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    let result = event_loop(&mut terminal, &mut app);
    // Release mouse capture on every exit path, including errors
    app.release_interaction();
    result.map(|_| app)
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            return Ok(());
        }
    }
}
