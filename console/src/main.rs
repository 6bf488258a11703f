mod command;
mod config;
mod renderer;

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use common::tictactoe::{GameController, GameMode};
use common::log;
use common::logger::{self, LogOutput};

use command::{ConsoleCommand, HELP_TEXT, parse_command};
use config::get_config_manager;
use renderer::ConsoleRenderer;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Human,
    Ai,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Human => GameMode::HumanVsHuman,
            ModeArg::Ai => GameMode::HumanVsAi,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    /// Overrides the mode from the config file.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    #[arg(long)]
    config: Option<String>,
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone())
    } else {
        None
    };
    logger::init_logger_with_output(prefix, LogOutput::Stderr);

    let mode = args.mode.map(GameMode::from).unwrap_or(config.default_mode);
    log!("Starting in {} mode", mode);

    let renderer = ConsoleRenderer::new(io::stdout(), config.show_move_list);
    let mut controller = GameController::new(mode, renderer);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let result = match command {
            ConsoleCommand::Place(index) => controller.handle_cell(index),
            ConsoleCommand::Jump(move_index) => controller.jump_to(move_index),
            ConsoleCommand::Reset => {
                controller.reset();
                Ok(())
            }
            ConsoleCommand::Mode(mode) => {
                controller.change_mode(mode);
                Ok(())
            }
            ConsoleCommand::Help => {
                println!("{}", HELP_TEXT);
                Ok(())
            }
            ConsoleCommand::Quit => break,
        };

        if let Err(e) = result {
            println!("{}", e);
        }
    }

    log!("Console closed");
    Ok(())
}
