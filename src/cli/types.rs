use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::{Frame, LabelId};

#[derive(Debug, Parser)]
#[command(
    name = "selected-frames",
    version,
    about = "Selected-frame parsing and trace-label dispatch for annotation sessions"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Parses frame text (e.g. "1, 5 20") against a frame range.
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
        #[arg(long, default_value_t = 0)]
        start: Frame,
        #[arg(long)]
        stop: Frame,
    },
    /// Prints the drawing configuration that choosing a trace label produces.
    Resolve {
        #[arg(long)]
        session: PathBuf,
        #[arg(long)]
        label: LabelId,
    },
    /// Prints the trace-label picker selection and options.
    Trace {
        #[arg(long)]
        session: PathBuf,
    },
    /// Replays panel events against a session.
    /// Order: trace label, clear, each --add, each --remove.
    Apply {
        #[arg(long)]
        session: PathBuf,
        #[arg(long)]
        trace_label: Option<LabelId>,
        #[arg(long)]
        clear: bool,
        #[arg(long, allow_hyphen_values = true)]
        add: Vec<String>,
        #[arg(long)]
        remove: Vec<Frame>,
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
