use std::{
    io::{self, Write},
    process,
    str::FromStr,
};
use log::LevelFilter;

pub use cpath::{
    Options, Result, LogNotifier, IncludePathList, SearchPathConfig,
    PATH_LIST_SEPARATOR, extract_include_paths,
};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Lines,
    Isystem,
    Cpath,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "lines" => Format::Lines,
            "isystem" => Format::Isystem,
            "cpath" => Format::Cpath,
            _ => return Err(format!("Unknown format `{}`, expected lines, isystem or cpath", s)),
        })
    }
}

/// Command-line arguments
#[derive(Debug, structopt::StructOpt)]
#[structopt(about)]
struct Args {
    /// Print version number
    #[structopt(short = "V", long)]
    version: bool,

    /// C compiler to query
    #[structopt(short, long, env = "CPATH_COMPILER", default_value = "gcc")]
    compiler: String,

    /// Output format: lines, isystem or cpath
    #[structopt(short, long, parse(try_from_str), default_value = "lines")]
    format: Format,

    /// Log level
    #[structopt(short, long, env, parse(try_from_str), default_value = "warn")]
    log_level: LevelFilter,
}

fn render_paths(paths: &IncludePathList, format: Format) -> String {
    match format {
        Format::Lines => paths.to_string(),
        Format::Isystem => paths.iter()
            .map(|path| format!("-isystem{}\n", path))
            .collect(),
        Format::Cpath => format!("{}\n", paths.iter().collect::<Vec<_>>()
                                 .join(&PATH_LIST_SEPARATOR.to_string())),
    }
}

fn run(args: Args) -> Result<()> {
    let options = Options::with_program(args.compiler);
    let mut config = SearchPathConfig::new();

    extract_include_paths(&options, &mut config, LogNotifier)?;

    if let Some(paths) = config.include_paths() {
        io::stdout().write_all(render_paths(paths, args.format).as_bytes())?;
    }

    Ok(())
}

#[paw::main]
fn main(args: Args) {
    if args.version {
        println!("Version: {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    {
        std::env::set_var("__LOG_LEVEL_FILTER__", args.log_level.to_string());
        pretty_env_logger::init_custom_env("__LOG_LEVEL_FILTER__");
    }

    if let Err(e) = run(args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
