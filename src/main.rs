use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use penalty_keeper::config::{self, Config};
use penalty_keeper::game_modes::{self, SessionExit};
use penalty_keeper::menu::{self, AppState, MenuAction, MenuState};
use penalty_keeper::{debug, leaderboard};

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    debug: bool,
    player_name: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args)?;

    debug::init(cli.debug)?;
    tracing::info!("penalty keeper starting");

    let config = config::load_config()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config, cli.player_name);

    // Restore terminal before reporting any error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!("game loop failed: {}", e);
    }
    tracing::info!("penalty keeper exiting");
    result.map_err(Into::into)
}

fn parse_args(args: &[String]) -> anyhow::Result<CliArgs> {
    let mut cli = CliArgs::default();
    let program = args.first().map(String::as_str).unwrap_or("penalty-keeper");
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--debug" | "-d" => cli.debug = true,
            "--name" | "-n" => match rest.next() {
                Some(name) => cli.player_name = Some(leaderboard::normalize_player_name(name)),
                None => anyhow::bail!("--name requires a player name"),
            },
            "--help" | "-h" => {
                print_usage(program);
                std::process::exit(0);
            }
            other => {
                print_usage(program);
                anyhow::bail!("unknown argument: {}", other);
            }
        }
    }

    Ok(cli)
}

fn print_usage(program: &str) {
    println!("Penalty Keeper - terminal goalkeeper shootout");
    println!();
    println!("Usage:");
    println!("  {}                    # Main menu", program);
    println!("  {} --name <NAME>      # Skip the menu and play as NAME", program);
    println!(
        "  {} --debug            # Log to {}",
        program,
        debug::log_file_path().display()
    );
    println!();
    println!("Settings live in {}", config::loader::get_config_path().display());
}

/// Top-level state machine: menu ⇄ shootout until the player quits
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    player_name: Option<String>,
) -> Result<(), io::Error> {
    let mut app_state = match player_name {
        Some(name) => AppState::Game(name),
        None => AppState::Menu,
    };
    let mut menu_state = MenuState::new();

    loop {
        app_state = match app_state {
            AppState::Menu => {
                terminal.draw(|f| menu::render_menu(f, &menu_state))?;
                match menu::handle_menu_input(&mut menu_state)? {
                    MenuAction::None => AppState::Menu,
                    MenuAction::StartGame(name) => AppState::Game(name),
                    MenuAction::Quit => AppState::Exiting,
                }
            }
            AppState::Game(name) => {
                menu_state.name_input = name.clone();
                match game_modes::run_shootout(terminal, config, &name)? {
                    SessionExit::Menu => AppState::Menu,
                    SessionExit::Quit => AppState::Exiting,
                }
            }
            AppState::Exiting => return Ok(()),
        };
    }
}
