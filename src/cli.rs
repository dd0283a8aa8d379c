use crate::config::ResolvedConfig;
use crate::errors::{AppError, AppResult};
use crate::index::{write_index, IndexSettings};
use crate::models::RecordSet;
use crate::render::XmlMode;
use crate::writer::write_sitemap;
use clap::{Arg, ArgAction, ArgMatches, Command};
use flate2::Compression;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Builds the command-line definition.
///
/// Two subcommands are available:
/// - `sitemap`: render a TOML list of URL records into a gzip-compressed sitemap
/// - `index`: scan a directory of sitemaps and write a sitemap index
///
/// Both accept `--config` pointing to a TOML file with [`ResolvedConfig`] keys.
pub fn build_command() -> Command<'static> {
    let config_arg = Arg::new("config")
        .short('c')
        .long("config")
        .help("Path to a TOML configuration file")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set);

    Command::new("sitemap-gen")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("sitemap")
                .about("Render URL records into a gzip-compressed sitemap")
                .after_help("Example:\n  sitemap-gen sitemap -i urls.toml -o public/sitemap-1.xml.gz")
                .arg(
                    Arg::new("input")
                        .short('i')
                        .long("input")
                        .help("TOML file with [[url]] records")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Destination sitemap file (.xml.gz)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("legacy")
                        .long("legacy")
                        .help("Write values unescaped using the legacy text template")
                        .action(ArgAction::SetTrue),
                )
                .arg(config_arg.clone()),
        )
        .subcommand(
            Command::new("index")
                .about("Write a sitemap index for the sitemaps found in a directory")
                .after_help("Example:\n  sitemap-gen index -d public -o public/sitemap.xml -b https://example.com/")
                .arg(
                    Arg::new("dir")
                        .short('d')
                        .long("dir")
                        .help("Directory holding the sitemap files")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Destination index file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("base_url")
                        .short('b')
                        .long("base-url")
                        .help("URL prefix joined directly with each file name (include the trailing '/')")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(config_arg),
        )
}

/// Parses the process arguments and runs the selected subcommand.
pub fn cli() -> AppResult<()> {
    let mut cmd_for_help = build_command();
    let matches = build_command().get_matches();
    dispatch(&matches, &mut cmd_for_help)
}

/// Runs the CLI against an explicit argument list.
///
/// Argument errors are returned as `InvalidInput` instead of exiting the process.
pub fn run_from<I, T>(args: I) -> AppResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cmd_for_help = build_command();
    let matches = build_command()
        .try_get_matches_from(args)
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;
    dispatch(&matches, &mut cmd_for_help)
}

fn dispatch(matches: &ArgMatches, cmd_for_help: &mut Command<'static>) -> AppResult<()> {
    match matches.subcommand() {
        Some(("sitemap", sub)) => {
            let input = sub.get_one::<PathBuf>("input").expect("input is required");
            let output = sub.get_one::<PathBuf>("output").expect("output is required");
            let config = load_config(sub.get_one::<PathBuf>("config"))?;
            run_sitemap(input, output, &config, sub.get_flag("legacy"))
        }
        Some(("index", sub)) => {
            let dir = sub.get_one::<PathBuf>("dir").expect("dir is required");
            let output = sub.get_one::<PathBuf>("output").expect("output is required");
            let base_url = sub
                .get_one::<String>("base_url")
                .expect("base_url is required");
            let config = load_config(sub.get_one::<PathBuf>("config"))?;
            run_index(dir, output, base_url, &config)
        }
        _ => cmd_for_help
            .print_help()
            .map_err(|e| AppError::InvalidInput(format!("Failed to print help: {e}"))),
    }
}

fn load_config(path: Option<&PathBuf>) -> AppResult<ResolvedConfig> {
    match path {
        Some(path) => {
            info!(config = %path.display(), "Loading configuration");
            ResolvedConfig::from_toml_file(path)
        }
        None => Ok(ResolvedConfig::default()),
    }
}

fn run_sitemap(input: &Path, output: &Path, config: &ResolvedConfig, legacy: bool) -> AppResult<()> {
    let records = RecordSet::from_toml_file(input)?;
    let mut options = config.render_options()?;
    if legacy {
        options.mode = XmlMode::Legacy;
    }

    info!(
        input = %input.display(),
        records = records.urls.len(),
        "Generating sitemap"
    );
    write_sitemap(
        output,
        &records.urls,
        &options,
        Compression::new(config.compression_level),
    )
}

fn run_index(dir: &Path, output: &Path, base_url: &str, config: &ResolvedConfig) -> AppResult<()> {
    let settings = IndexSettings::from_config(config)?;
    write_index(dir, output, base_url, &settings)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn sitemap_command_requires_input_and_output() {
        let result = build_command().try_get_matches_from(vec!["sitemap-gen", "sitemap", "-i", "urls.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn index_command_parses_arguments() {
        let matches = build_command()
            .try_get_matches_from(vec![
                "sitemap-gen",
                "index",
                "--dir",
                "public",
                "--output",
                "public/sitemap.xml",
                "--base-url",
                "https://example.com/",
            ])
            .unwrap();
        let sub = matches.subcommand_matches("index").unwrap();
        assert_eq!(sub.get_one::<PathBuf>("dir").unwrap(), &PathBuf::from("public"));
        assert_eq!(
            sub.get_one::<String>("base_url").unwrap(),
            "https://example.com/"
        );
        assert!(sub.get_one::<PathBuf>("config").is_none());
    }

    #[test]
    fn legacy_flag_defaults_to_false() {
        let matches = build_command()
            .try_get_matches_from(vec!["sitemap-gen", "sitemap", "-i", "a.toml", "-o", "a.xml.gz"])
            .unwrap();
        let sub = matches.subcommand_matches("sitemap").unwrap();
        assert!(!sub.get_flag("legacy"));
    }

    #[test]
    fn run_from_reports_argument_errors() {
        let result = run_from(vec!["sitemap-gen", "index", "--dir", "x"]);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn load_config_without_path_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.compression_level, 6);
    }
}
