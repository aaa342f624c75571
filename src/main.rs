//! groupsync CLI - reconcile a project group's file references with a
//! directory on disk.
//!
//! Usage: groupsync [PROJECT] [OPTIONS]
//!
//! Without a project path, groupsync looks for a .codeproj container in
//! the current directory and asks before using it.

mod cli;
mod commands;
mod ui;

use clap::Parser;

fn main() {
    let args = cli::Cli::parse();

    if let Err(err) = commands::sync::run(&args) {
        ui::error::print_error(&err);
        std::process::exit(1);
    }
}
