//!
//! memesh -- Captions in the shell
//!

             extern crate clap;
             extern crate exitcode;
             extern crate image;
             extern crate isatty;
#[macro_use] extern crate lazy_static;
             extern crate memestudio;
             extern crate slog;
             extern crate slog_envlogger;
             extern crate slog_scope;
             extern crate slog_stdlog;
             extern crate slog_term;
             extern crate thiserror;
#[macro_use] extern crate log;


mod args;
mod logging;


use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::exit;

use image::{DynamicImage, ImageError};
use memestudio::{CaptionError, CaptionOutput, Engine, EngineBuilder};

use crate::args::{ArgsError, Options};


lazy_static! {
    /// Application / package name, as filled out by Cargo.
    static ref NAME: &'static str = option_env!("CARGO_PKG_NAME").unwrap_or("memesh");

    /// Application description, as filled out by Cargo.
    static ref ABOUT: &'static str = option_env!("CARGO_PKG_DESCRIPTION").unwrap_or("");

    /// Application version, including the Git revision it was built from (if known).
    static ref VERSION: String = {
        let version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown");
        match REVISION.trim() {
            "" => version.to_owned(),
            rev => format!("{} (rev. {})", version, rev),
        }
    };
}

/// Git revision of the source, as written out by the build script.
const REVISION: &str = include_str!(concat!(env!("OUT_DIR"), "/revision"));


fn main() {
    let opts = args::parse().unwrap_or_else(|e| {
        let code = print_args_error(e).unwrap_or(exitcode::USAGE);
        exit(code);
    });

    let _guard = logging::init(opts.verbosity).unwrap_or_else(|e| {
        eprintln!("Failed to initialize logging: {}", e);
        exit(exitcode::SOFTWARE);
    });
    if cfg!(debug_assertions) {
        warn!("Debug mode! The program will likely be much slower.");
    }
    for (i, arg) in env::args().enumerate() {
        debug!("argv[{}] = {:?}", i, arg);
    }
    trace!("Options parsed from argv:\n{:#?}", opts);

    let engine = create_engine(&opts).unwrap_or_else(|e| {
        error!("Invalid configuration: {}", e);
        exit(exitcode::USAGE);
    });

    let img = load_image(&opts.input_path).unwrap_or_else(|e| {
        error!("Failed to load image {}: {}", opts.input_path.display(), e);
        exit(match e {
            ImageError::IoError(ref e) if e.kind() == io::ErrorKind::NotFound => exitcode::NOINPUT,
            ImageError::IoError(_) => exitcode::IOERR,
            _ => exitcode::DATAERR,
        });
    });

    let output = render(&engine, &img, &opts).unwrap_or_else(|e| {
        error!("Error while captioning the image: {}", e);
        exit(match e {
            CaptionError::EmptyImage{..} => exitcode::DATAERR,
            CaptionError::Encode(_) => exitcode::SOFTWARE,
        });
    });

    match opts.output_path.as_ref() {
        Some(path) => {
            trace!("Opening --output file {}...", path.display());
            let file = fs::File::create(path).unwrap_or_else(|e| {
                error!("Failed to open output file {} for writing: {}", path.display(), e);
                exit(exitcode::CANTCREAT);
            });
            debug!("File {} opened successfully", path.display());
            write_output(&output, file)
        }
        None => {
            trace!("No --output given, using standard output");
            if isatty::stdout_isatty() {
                warn!("Standard output is a terminal.");
                // TODO: ask for confirmation since this can screw user's terminal
            }
            write_output(&output, io::stdout())
        }
    }.unwrap_or_else(|e| {
        error!("Failed to write the image: {}", e);
        exit(exitcode::IOERR);
    });
}

/// Print an error that may occur while parsing arguments.
/// Returns the exit code that the program should terminate with.
fn print_args_error(e: ArgsError) -> io::Result<exitcode::ExitCode> {
    match e {
        // Generic parse errors are formatted by clap, together with the usage string.
        // This also covers --help and --version.
        ArgsError::Parse(ref e) => {
            e.print()?;
            Ok(if e.use_stderr() { exitcode::USAGE } else { exitcode::OK })
        }
        e => {
            writeln!(&mut io::stderr(), "Failed to parse arguments: {}", e)?;
            Ok(exitcode::USAGE)
        }
    }
}


/// Create the captioning `Engine` configured according to the options.
fn create_engine(opts: &Options) -> Result<Engine, memestudio::EngineBuildError> {
    let mut builder = EngineBuilder::new();
    if !opts.font_paths.is_empty() {
        builder = builder.font_paths(opts.font_paths.iter().cloned());
    }
    if let Some(quality) = opts.sticker_quality {
        builder = builder.sticker_quality(quality);
    }
    builder.build()
}

/// Load the image that's going to be captioned.
fn load_image(path: &Path) -> Result<DynamicImage, ImageError> {
    trace!("Loading image from {}...", path.display());
    let img = image::open(path)?;
    debug!("Loaded {}x{} image from {}", img.width(), img.height(), path.display());
    Ok(img)
}

/// Caption the image as requested by the options.
fn render(engine: &Engine, img: &DynamicImage,
          opts: &Options) -> Result<CaptionOutput, CaptionError> {
    if opts.sticker {
        engine.pack(img, &opts.captions)
    } else {
        engine.render_meme(img, &opts.captions)
    }
}

/// Write the rendered image to the output.
fn write_output<W: Write>(output: &CaptionOutput, mut writer: W) -> io::Result<()> {
    trace!("Writing {} bytes of {}...", output.len(),
        output.mime_type().map(|m| m.to_string()).unwrap_or_else(|| "data".into()));
    writer.write_all(output.bytes())?;
    writer.flush()
}
