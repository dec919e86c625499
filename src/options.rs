//! Parsing Options.
//! `--input {file}` / `-i`, `--output {file}` / `-o`, `--format {json|ron}` / `-f`

use clap::{Arg, ArgAction, Command};
use std::error::Error;

use crate::io::OutputFormat;

pub const DEFAULT_CONFIG: &str = "mst-repair.toml";

fn make_options_parser() -> clap::Command {
    let parser = Command::new("mst-repair")
        .no_binary_name(true)
        .args_override_self(true)
        .version("v0.1.0")
        .about("Minimum spanning tree with heaviest-edge replacement")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .help("Path to the input graphs [default: inputs.json]"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the result will be stored [default: output.json]"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format [default: json]")
                .value_parser(["json", "ron"]),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value(DEFAULT_CONFIG),
        )
        .arg(
            Arg::new("dot")
                .long("dot")
                .value_name("FILE")
                .help("Also write a Graphviz rendering of the graph and both trees"),
        )
        .arg(
            Arg::new("exclude-removed")
                .long("exclude-removed")
                .action(ArgAction::SetTrue)
                .help("Do not let the removed edge be chosen as its own replacement"),
        );
    parser
}

/// Command line values. `None` means "not given", leaving the config file in charge.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub input: Option<String>,
    pub output: Option<String>,
    pub format: Option<OutputFormat>,
    pub config: String,
    pub dot: Option<String>,
    pub exclude_removed_edge: bool,
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self, Box<dyn Error>> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let format = match matches.get_one::<String>("format") {
            Some(name) => Some(name.parse::<OutputFormat>()?),
            None => None,
        };
        let config = matches
            .get_one::<String>("config")
            .cloned()
            .unwrap_or_else(|| DEFAULT_CONFIG.to_string());

        Ok(Options {
            input: matches.get_one::<String>("input").cloned(),
            output: matches.get_one::<String>("output").cloned(),
            format,
            config,
            dot: matches.get_one::<String>("dot").cloned(),
            exclude_removed_edge: matches.get_flag("exclude-removed"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_from_str_err() {
        let options = Options::parse_from_str("-f yaml");
        assert!(options.is_err());
    }

    #[test]
    fn test_parse_from_args_err() {
        let options = Options::parse_from_args(&["--unknown".to_owned()]);
        assert!(options.is_err());
    }

    #[test]
    fn test_defaults_leave_config_in_charge() {
        let options = Options::parse_from_args(&[]).unwrap();
        assert_eq!(
            options,
            Options {
                config: DEFAULT_CONFIG.to_string(),
                ..Options::default()
            }
        );
    }

    #[test]
    fn test_parse_all_flags() {
        let options = Options::parse_from_str(
            "-i in.json -o 'out dir/result.ron' -f ron --dot tree.dot --exclude-removed -c alt.toml",
        )
        .unwrap();
        assert_eq!(options.input.as_deref(), Some("in.json"));
        assert_eq!(options.output.as_deref(), Some("out dir/result.ron"));
        assert_eq!(options.format, Some(OutputFormat::Ron));
        assert_eq!(options.dot.as_deref(), Some("tree.dot"));
        assert_eq!(options.config, "alt.toml");
        assert!(options.exclude_removed_edge);
    }

    #[test]
    fn test_later_flags_override_earlier() {
        let options = Options::parse_from_str("-o first.json -o second.json").unwrap();
        assert_eq!(options.output.as_deref(), Some("second.json"));
    }
}
