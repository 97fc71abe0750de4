pub mod cli;
pub mod dispatch;
pub mod model;
pub mod panel;
pub mod runtime;
pub mod selection;
pub mod session;
pub mod store;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
