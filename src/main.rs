#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;

mod cli;
mod config;
mod database;
mod filesystem;
mod format;

use std::process;

fn main() {
    process::exit(cli::run());
}
