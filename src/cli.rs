use clap::ArgMatches;

use crate::config::{self, ColorChoice};
use crate::database::{DeleteMode, SqliteCatalog};
use crate::filesystem::fs;

mod args;
mod assign;
mod print;
mod program;
mod subcommands;
mod typo;

pub fn run() -> i32 {
    let matches = args::build().get_matches();
    print::init(ColorChoice::Auto, matches.is_present("verbose"));

    match dispatch(&matches) {
        Ok(()) => 0,
        Err(msg) => {
            print::error(&msg);
            1
        }
    }
}

fn dispatch(matches: &ArgMatches) -> Result<(), String> {
    // init has no database to discover yet.
    if let ("init", Some(sub)) = matches.subcommand() {
        return subcommands::init::run(sub);
    }

    let db_path = fs::resolve_database(matches.value_of("db"))
        .map_err(|e| format!("could not inspect the working directory: {}", e))?
        .ok_or_else(|| {
            format!(
                "no {} found here or in any parent directory; run '{} init' first",
                fs::DB_NAME,
                program::program_name()
            )
        })?;

    let config = config::load(&db_path.with_file_name(fs::CONFIG_NAME))?;
    print::init(config.output.color, matches.is_present("verbose"));
    print::verbose(&format!("using database {}", db_path.display()));

    let mode = if config.store.cascade_delete {
        DeleteMode::Cascade
    } else {
        DeleteMode::Restrict
    };

    let db_str = db_path
        .to_str()
        .ok_or_else(|| format!("database path {:?} is not valid UTF-8", db_path))?;
    let catalog = SqliteCatalog::open(db_str, mode).map_err(|e| e.to_string())?;

    match matches.subcommand() {
        ("mkdir", Some(sub)) => subcommands::mkdir::run(&catalog, sub),
        ("add", Some(sub)) => subcommands::add::run(&catalog, sub),
        ("get", Some(sub)) => subcommands::get::run(&catalog, sub),
        ("set", Some(sub)) => subcommands::set::run(&catalog, sub),
        ("remove", Some(sub)) => subcommands::remove::run(&catalog, sub),
        ("rm", Some(sub)) => subcommands::rm::run(&catalog, sub),
        ("ls", Some(sub)) => subcommands::ls::run(&catalog, sub),
        ("dupes", Some(sub)) => subcommands::dupes::run(&catalog, sub),
        (other, _) => Err(format!("unknown subcommand '{}'", other)),
    }
}
