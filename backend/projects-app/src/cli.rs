use clap::Parser;

/// Interactive data entry for projects.
///
/// Takes no options; all input is read from the menu prompts.
#[derive(Parser)]
#[command(name = "projects")]
#[command(about = "Interactive menu for creating project records")]
#[command(version)]
pub struct Cli {}
