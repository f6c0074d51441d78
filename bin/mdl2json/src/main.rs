use std::io::BufReader;

use idpo_mdl::read::MdlReader;
use idpo_mdl::write::{SceneWriter, SceneWriterSettings};
use tracing::info;

use crate::prelude::*;

#[allow(unused_imports)]
mod prelude {
    pub use std::path::{Path, PathBuf};

    pub use anyhow::{Context, Result as AnyResult, bail};
}

mod util;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Convert Quake MDL models into JSON scene files.")]
struct Cli {
    #[command(flatten)]
    paths: InOutPaths,
}

#[derive(clap::Args, Debug)]
struct InOutPaths {
    /// Path to the input MDL file
    in_file: PathBuf,
    /// Path to the output file (if unspecified, `<model name>.json` in the
    /// current directory)
    out_file: Option<PathBuf>,
}

fn run_command(cli: &Cli) -> AnyResult<()> {
    let in_file = &cli.paths.in_file;
    let model_name = util::model_name(in_file)?;
    let out_file = cli
        .paths
        .out_file
        .clone()
        .unwrap_or_else(|| util::default_output_path(&model_name));

    let infile = std::fs::File::open(in_file)
        .context("Could not open input file")?;
    let reader = MdlReader::init(BufReader::new(infile))
        .context("Cannot decode MDL header")?;
    let model = reader.read_model()
        .context("Cannot decode MDL model data")?;

    // Encode fully before touching the output path, so a bad model never
    // leaves a file behind.
    let json = SceneWriter::new_with_settings(
        SceneWriterSettings::default(),
        &model_name,
    )
    .write_to_vec(&model)
    .context("Cannot encode scene")?;
    util::write_output(&out_file, &json)?;

    info!(path = %out_file.display(), "wrote scene");
    Ok(())
}

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    use clap::Parser;
    let cli = Cli::parse();

    setup_logging();

    if let Err(e) = run_command(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(2);
    }
}
