mod build;
mod schema;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bindscope",
    version,
    about = "Builds the binding hierarchy of a platform API description",
    long_about = "Bindscope reads a raw API description (a JSON forest of namespaces, types and \
                  members), nests types, generates managed names, synthesizes interface invokers \
                  and resolves base types. The resulting hierarchy can be dumped for inspection."
)]
pub struct Cli {
    /// Also write logs to a daily-rolling file in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the hierarchy from a raw API description
    #[command(
        long_about = "Builds the hierarchy and prints a per-kind summary. With --dump the tree is \
                            written one element per line, by default next to the input as \
                            <INPUT>.hierarchy."
    )]
    Build {
        /// Raw API description (JSON element forest)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Write the hierarchy dump, optionally to the given path
        #[arg(long, value_name = "PATH")]
        dump: Option<Option<PathBuf>>,

        /// Builder configuration file (JSON)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Fail on index collisions between different kinds of elements
        #[arg(long)]
        strict: bool,
    },
    /// Print the JSON schema of the raw API description
    Schema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = bindscope_core::logging::init_logging("bindscope", "info", cli.log_dir.as_deref());

    match cli.command {
        Commands::Build {
            input,
            dump,
            config,
            strict,
        } => build::run(build::BuildArgs {
            input,
            dump,
            config,
            strict,
        }),
        Commands::Schema { output } => schema::run(output),
    }
}
