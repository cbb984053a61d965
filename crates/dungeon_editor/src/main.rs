#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::too_many_lines, clippy::missing_errors_doc, clippy::module_name_repetitions)]

mod options;
mod script;
mod validator;

pub use options::*;

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use dungeon_editor_engine::{render, EditSession, LevelData, ViewMode};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

#[derive(Parser, Debug)]
#[command(version, about = "Replays level editor sessions and produces the map submission payload", long_about = None)]
pub struct Args {
    /// Level JSON as the server renders it into the editor
    #[arg(value_name = "LEVEL")]
    level: PathBuf,

    /// Edit script to replay against the level
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the form payload here instead of stdout
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print the level as text after replaying
    #[clap(long, default_value_t = false)]
    render: bool,

    /// Start with only the current z-index visible
    #[clap(long, default_value_t = false)]
    only_current_layer: bool,

    /// Options file to use instead of the one in the config directory
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level spec, e.g. `debug` or `info, dungeon_editor_engine=trace`
    #[arg(long, value_name = "SPEC")]
    log_spec: Option<String>,
}

fn get_log_dir() -> Option<PathBuf> {
    let dir = Options::get_config_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

fn start_logger(spec: &str) -> Option<LoggerHandle> {
    let Some(log_dir) = get_log_dir() else {
        eprintln!("Failed to create log file");
        return None;
    };
    let result = Logger::try_with_env_or_str(spec).and_then(|logger| {
        logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("dungeon_editor").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .create_symlink(log_dir.join("dungeon_editor.log"))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
            .start()
    });
    match result {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn run(args: &Args, options: &Options) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.level).with_context(|| format!("reading level {}", args.level.display()))?;
    let level = LevelData::from_json(&text).with_context(|| format!("parsing level {}", args.level.display()))?;
    let (width, height) = (level.width, level.height);
    let mut session = EditSession::from_level(level)?;
    session.set_view_mode(if args.only_current_layer {
        ViewMode::OnlyCurrent
    } else {
        options.default_view_mode
    });

    if let Some(path) = &args.script {
        let commands = script::load_script(path)?;
        let edges = validator::LevelFileEdges {
            dir: args.level.parent().map(PathBuf::from).unwrap_or_default(),
            width,
            height,
        };
        let collaborators = script::Collaborators {
            validator: &validator::OfflineValidator,
            edges: &edges,
        };
        script::run(&mut session, &commands, &collaborators)?;
    }

    if args.render {
        print!("{}", render::render_text(&session, options.render_edges));
    }

    let payload = session.submit()?;
    let json = if options.pretty_payload {
        serde_json::to_string_pretty(&payload)?
    } else {
        serde_json::to_string(&payload)?
    };
    match &args.output {
        Some(path) => fs::write(path, json).with_context(|| format!("writing {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let options = Options::load_options(args.config.as_deref());
    let spec = args.log_spec.clone().unwrap_or_else(|| options.log_spec.clone());
    let logger = start_logger(&spec);

    log::info!("Starting dungeon_editor {}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run(&args, &options) {
        log::error!("{err:#}");
        match &logger {
            Some(handle) => handle.flush(),
            None => eprintln!("{err:#}"),
        }
        std::process::exit(1);
    }
}
