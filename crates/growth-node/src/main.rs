use std::path::Path;
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use growth_consensus::ChainError;
use growth_node::config::{resolve, CliSelection, NodeConfig};
use growth_node::logger::{init_logger, LOG_LEVELS};
use growth_node::startup::{exit_code, render_genesis, render_summary, start, EXIT_OK};

pub const START: &str = "start";
pub const SHOW_GENESIS: &str = "show-genesis";
pub const CONFIG: &str = "config";
pub const NETWORK: &str = "network";
pub const TESTNET: &str = "testnet";
pub const REGTEST: &str = "regtest";
pub const LOG_LEVEL: &str = "log-level";

fn app() -> Command {
    Command::new("growth-node")
        .about("Selects, verifies and reports the chain parameters of a Growth network")
        .arg(
            Arg::new(CONFIG)
                .long(CONFIG)
                .value_name("PATH_TO_CONFIG")
                .help("Path to a JSON configuration file")
                .global(true),
        )
        .arg(
            Arg::new(NETWORK)
                .long(NETWORK)
                .value_name("NETWORK")
                .help("Network to run: main, test or regtest")
                .global(true),
        )
        .arg(
            Arg::new(TESTNET)
                .long(TESTNET)
                .help("Shorthand for --network test")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new(REGTEST)
                .long(REGTEST)
                .help("Shorthand for --network regtest")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new(LOG_LEVEL)
                .long(LOG_LEVEL)
                .value_name("LEVEL")
                .value_parser(LOG_LEVELS)
                .help("Log verbosity")
                .global(true),
        )
        .subcommand(Command::new(START).about("Initialise the chain and print a summary (default)"))
        .subcommand(Command::new(SHOW_GENESIS).about("Print the verified genesis block"))
}

fn run(matches: &ArgMatches) -> Result<(), ChainError> {
    let file = match matches.get_one::<String>(CONFIG) {
        Some(path) => Some(NodeConfig::load_from_file(Path::new(path))?),
        None => None,
    };
    let cli = CliSelection {
        network: matches.get_one::<String>(NETWORK).cloned(),
        testnet: matches.get_flag(TESTNET),
        regtest: matches.get_flag(REGTEST),
        log_level: matches.get_one::<String>(LOG_LEVEL).cloned(),
    };
    let resolved = resolve(&cli, file.as_ref())?;

    init_logger(resolved.log_level);

    let params = start(resolved.network)?;
    match matches.subcommand_name() {
        Some(SHOW_GENESIS) => print!("{}", render_genesis(&params)),
        _ => print!("{}", render_summary(&params)),
    }
    Ok(())
}

fn main() {
    let matches = app().get_matches();
    let code = match run(&matches) {
        Ok(()) => EXIT_OK,
        Err(err) => {
            eprintln!("growth-node: {err}");
            exit_code(&err)
        }
    };
    process::exit(code);
}
