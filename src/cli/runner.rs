use clap::Parser;

use crate::runtime::{AppContext, PanelActions};

use super::types::{Cli, Commands};

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(|error| error.to_string())?
    );
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    let app = AppContext::new();

    match cli.command {
        Commands::Parse { text, start, stop } => {
            let parsed = app
                .frame_service()
                .parse(&text, start, stop)
                .map_err(|error| error.to_string())?;
            print_json(&parsed)?;
        }
        Commands::Resolve { session, label } => {
            let state = app
                .session_service()
                .load(&session)
                .map_err(|error| error.to_string())?;
            let config = app
                .label_service()
                .resolve(&state, label)
                .map_err(|error| error.to_string())?;
            print_json(&config)?;
        }
        Commands::Trace { session } => {
            let state = app
                .session_service()
                .load(&session)
                .map_err(|error| error.to_string())?;
            print_json(&app.label_service().trace(&state))?;
        }
        Commands::Apply {
            session,
            trace_label,
            clear,
            add,
            remove,
            output,
        } => {
            let state = app
                .session_service()
                .load(&session)
                .map_err(|error| error.to_string())?;
            let actions = PanelActions {
                trace_label,
                clear,
                add,
                remove,
            };
            let result = app
                .session_service()
                .apply(state, &actions)
                .map_err(|error| error.to_string())?;
            if let Some(output_path) = output {
                app.session_service()
                    .save(output_path, &result)
                    .map_err(|error| error.to_string())?;
            }
            print_json(&result)?;
        }
    }

    Ok(())
}
