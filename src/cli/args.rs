use clap::{App, AppSettings, Arg, ArgGroup, SubCommand};

use super::program;

pub fn build() -> App<'static, 'static> {
    App::new(program::program_name())
        .version(program::version())
        .about(program::description())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands)
        .arg(
            Arg::with_name("db")
                .long("db")
                .value_name("PATH")
                .takes_value(true)
                .global(true)
                .help("Path to the catalog database (skips discovery)"),
        )
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .global(true)
                .help("Print diagnostics to stderr"),
        )
        .subcommand(
            SubCommand::with_name("init")
                .about("Creates an empty catalog in the current directory"),
        )
        .subcommand(
            SubCommand::with_name("mkdir")
                .about("Catalogs a directory, with any missing ancestors")
                .arg(Arg::with_name("path").required(true).help("Logical directory path")),
        )
        .subcommand(
            SubCommand::with_name("add")
                .about("Catalogs a file under its parent directory")
                .arg(Arg::with_name("path").required(true).help("Logical file path"))
                .arg(
                    Arg::with_name("hash")
                        .required(true)
                        .help("Content hash of the file, hex-encoded"),
                ),
        )
        .subcommand(
            SubCommand::with_name("get")
                .about("Prints metadata attached to an entry")
                .arg(Arg::with_name("path").required(true))
                .arg(
                    Arg::with_name("keys")
                        .multiple(true)
                        .help("Keys to print (all of them when omitted)"),
                ),
        )
        .subcommand(
            SubCommand::with_name("set")
                .about("Attaches key=value metadata to an entry")
                .arg(Arg::with_name("path").required(true))
                .arg(
                    Arg::with_name("assignments")
                        .value_name("KEY=VALUE")
                        .required(true)
                        .multiple(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("remove")
                .about("Removes metadata keys from an entry")
                .arg(Arg::with_name("path").required(true))
                .arg(Arg::with_name("keys").multiple(true))
                .arg(
                    Arg::with_name("all")
                        .long("all")
                        .short("a")
                        .help("Remove every key"),
                )
                .group(
                    ArgGroup::with_name("selection")
                        .args(&["keys", "all"])
                        .required(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("rm")
                .about("Deletes an entry from the catalog")
                .arg(Arg::with_name("path").required(true)),
        )
        .subcommand(
            SubCommand::with_name("ls")
                .about("Lists the entries in a directory")
                .arg(Arg::with_name("path").default_value("/"))
                .arg(Arg::with_name("json").long("json").help("Emit JSON")),
        )
        .subcommand(
            SubCommand::with_name("dupes")
                .about("Reports files that share a content hash")
                .arg(Arg::with_name("json").long("json").help("Emit JSON")),
        )
}

#[test]
fn test_set_requires_an_assignment() {
    assert!(build()
        .get_matches_from_safe(vec!["cardex", "set", "/a"])
        .is_err());
}

#[test]
fn test_remove_requires_keys_or_all() {
    assert!(build()
        .get_matches_from_safe(vec!["cardex", "remove", "/a"])
        .is_err());
    assert!(build()
        .get_matches_from_safe(vec!["cardex", "remove", "/a", "--all"])
        .is_ok());
}

#[test]
fn test_ls_defaults_to_the_root() {
    let matches = build()
        .get_matches_from_safe(vec!["cardex", "ls"])
        .unwrap();
    let (_, sub) = matches.subcommand();
    assert_eq!(sub.unwrap().value_of("path"), Some("/"));
}
