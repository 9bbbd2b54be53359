use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result as EyreResult;
use gl4_registry::{emit, Api, Profile, Selection, Version};

/// Regenerates the gl4_bind entry point table from the Khronos registry.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Path to gl.xml
    #[arg(long)]
    registry: PathBuf,

    #[arg(long, default_value = "gl")]
    api: Api,

    /// Highest feature level to include, as MAJOR.MINOR
    #[arg(long, default_value = "4.6")]
    version: Version,

    #[arg(long, default_value = "core")]
    profile: Profile,

    /// Extension whose commands and enums are added, may be repeated
    #[arg(long = "extension")]
    extensions: Vec<String>,

    /// Also write `pub const GL_*` values for the selected enums
    #[arg(long)]
    constants: bool,

    /// Write here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Args::parse();
    let source = fs::read_to_string(&args.registry)
        .wrap_err_with(|| format!("reading {}", args.registry.display()))?;
    let registry = gl4_registry::load(&source)?;

    let selection = Selection {
        api: args.api,
        version: args.version,
        profile: args.profile,
        extensions: args.extensions,
    };
    let selected = selection.resolve(&registry)?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).wrap_err_with(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    emit::write_entry_points(&mut out, &selection, &selected)?;
    if args.constants {
        emit::write_constants(&mut out, &selected)?;
    }
    out.flush()?;
    Ok(())
}
