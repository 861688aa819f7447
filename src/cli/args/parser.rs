//! Module defining the command line argument parser.

use std::path::PathBuf;

use clap::{crate_authors, value_parser, Arg, ArgAction, ArgMatches, Command};
use memestudio::Captions;

use crate::{ABOUT, NAME, VERSION};
use super::model::{ArgsError, Options};


impl TryFrom<ArgMatches> for Options {
    type Error = ArgsError;

    fn try_from(matches: ArgMatches) -> Result<Self, Self::Error> {
        let verbose_count = matches.get_count(OPT_VERBOSE) as isize;
        let quiet_count = matches.get_count(OPT_QUIET) as isize;
        let verbosity = verbose_count - quiet_count;

        let input_path = matches.get_one::<PathBuf>(ARG_INPUT).cloned().unwrap_or_default();

        let captions = {
            let top = matches.get_one::<String>(OPT_TOP).map(|s| s.as_str()).unwrap_or("");
            let bottom = matches.get_one::<String>(OPT_BOTTOM).map(|s| s.as_str()).unwrap_or("");
            Captions::new(top, bottom)?
        };
        let sticker = matches.get_flag(OPT_STICKER);
        let sticker_quality = matches.get_one::<u8>(OPT_QUALITY).copied();

        let font_paths = matches.get_many::<PathBuf>(OPT_FONT)
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default();

        // Output path can be set explicit to stdout via `-`.
        let output_path = matches.get_one::<String>(OPT_OUTPUT)
            .map(|p| p.trim())
            .and_then(|p| if p == "-" { None } else { Some(p) })
            .map(PathBuf::from);

        Ok(Options{
            verbosity, input_path, captions, sticker, sticker_quality, font_paths, output_path,
        })
    }
}


// Parser definition

const ARG_INPUT: &str = "input";
const OPT_TOP: &str = "top";
const OPT_BOTTOM: &str = "bottom";
const OPT_STICKER: &str = "sticker";
const OPT_QUALITY: &str = "quality";
const OPT_FONT: &str = "font";
const OPT_OUTPUT: &str = "output";
const OPT_VERBOSE: &str = "verbose";
const OPT_QUIET: &str = "quiet";


/// Create the parser for application's command line.
pub fn create_parser() -> Command {
    Command::new(*NAME)
        .version(VERSION.as_str())
        .about(*ABOUT)
        .author(crate_authors!(", "))

        // Input image.
        .arg(Arg::new(ARG_INPUT)
            .value_name("INPUT")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("Image file to caption"))

        // Captions.
        .arg(Arg::new(OPT_TOP)
            .long("top").short('t')
            .value_name("TEXT")
            .help("Caption at the top of the image"))
        .arg(Arg::new(OPT_BOTTOM)
            .long("bottom").short('b')
            .value_name("TEXT")
            .help("Caption at the bottom of the image"))

        // Rendering flags.
        .arg(Arg::new(OPT_STICKER)
            .long("sticker").short('s')
            .action(ArgAction::SetTrue)
            .help("Create a 512x512 WebP sticker instead of a PNG image"))
        .arg(Arg::new(OPT_QUALITY)
            .long("quality").short('Q')
            .value_name("PERCENT")
            .value_parser(value_parser!(u8).range(1..=100))
            .requires(OPT_STICKER)
            .help("Quality of the sticker (1-100)"))
        .arg(Arg::new(OPT_FONT)
            .long("font").short('f')
            .value_name("PATH")
            .action(ArgAction::Append)
            .value_parser(value_parser!(PathBuf))
            .help("TrueType font to use (can be given multiple times)")
            .long_help(concat!(
                "TrueType font file to render the captions with.\n\n",
                "When given multiple times, the first font that can be loaded is used. ",
                "If none of them (or none of the default system fonts) can be loaded, ",
                "a built-in bitmap font is used.")))

        // Output flags.
        .arg(Arg::new(OPT_OUTPUT)
            .long("output").short('o')
            .value_name("PATH")
            .help("File to write the rendered image to")
            .long_help(concat!(
                "What file should the final image be written to.\n\n",
                "By default, or when this flag is set to `-` (single dash), the image is written ",
                "to standard output so it can be e.g. piped to the ImageMagick `display` program.")))

        // Verbosity flags.
        .arg(Arg::new(OPT_VERBOSE)
            .long("verbose").short('v')
            .action(ArgAction::Count)
            .conflicts_with(OPT_QUIET)
            .help("Increase logging verbosity"))
        .arg(Arg::new(OPT_QUIET)
            .long("quiet").short('q')
            .action(ArgAction::Count)
            .conflicts_with(OPT_VERBOSE)
            .help("Decrease logging verbosity"))
}
