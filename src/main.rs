use std::io::{BufRead, IsTerminal};

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing::{debug, info, Level};

use css_abbreviation::error::AbbreviationError;
use css_abbreviation::formatting::{self, Identity, Options, Render, Terminal};
use css_abbreviation::parsing;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("css-abbreviation")
        .version(VERSION)
        .propagate_version(true)
        .about("Expand compact CSS abbreviations such as bd1-s#fc0.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Log parser activity to standard error."),
        )
        .subcommand(
            Command::new("expand")
                .about("Parse the given abbreviations and print the resulting declarations")
                .arg(
                    Arg::new("short-hex")
                        .long("short-hex")
                        .action(ArgAction::SetTrue)
                        .help("Write colors in three digit form where possible."),
                )
                .arg(
                    Arg::new("keywords")
                        .long("keywords")
                        .action(ArgAction::SetTrue)
                        .help("Replace shorthand keywords like 's' with their full form 'solid'."),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the parsed tree as JSON."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("abbreviation")
                        .required(true)
                        .action(ArgAction::Append)
                        .help("The abbreviations to expand. Use '-' to read one per line from standard input."),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Check that the given abbreviations parse")
                .arg(
                    Arg::new("abbreviation")
                        .required(true)
                        .action(ArgAction::Append)
                        .help("The abbreviations to check. Use '-' to read one per line from standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let success = match matches.subcommand() {
        Some(("expand", submatches)) => {
            let options = Options {
                short_hex: submatches.get_flag("short-hex"),
                resolve_keywords: submatches.get_flag("keywords"),
            };

            let renderer: &dyn Render = if submatches.get_flag("raw-control-chars")
                || std::io::stdout().is_terminal()
            {
                &Terminal
            } else {
                &Identity
            };

            let json = submatches.get_flag("json");

            process(submatches, |content| {
                let abbreviation = parsing::parse(content)?;
                if json {
                    match serde_json::to_string_pretty(&abbreviation) {
                        Ok(text) => println!("{}", text),
                        Err(error) => eprintln!("error: {}", error),
                    }
                } else {
                    print!("{}", formatting::render(renderer, &abbreviation, &options));
                }
                Ok(())
            })
        }
        Some(("check", submatches)) => process(submatches, |content| {
            let abbreviation = parsing::parse(content)?;
            info!("{}: {} properties", content, abbreviation.len());
            Ok(())
        }),
        Some(_) => {
            println!("No valid subcommand was used");
            false
        }
        None => {
            println!("usage: css-abbreviation [COMMAND] ...");
            println!("Try '--help' for more information.");
            false
        }
    };

    if !success {
        std::process::exit(1);
    }
}

/// Run the given action over every abbreviation supplied on the command
/// line, reporting errors as they occur. Returns false if any failed.
fn process<F>(submatches: &ArgMatches, action: F) -> bool
where
    F: Fn(&str) -> Result<(), parsing::ParsingError>,
{
    let mut success = true;

    for content in collect_abbreviations(submatches) {
        debug!(abbreviation = %content);

        if let Err(error) = action(&content) {
            let renderer: &dyn Render = if std::io::stderr().is_terminal() {
                &Terminal
            } else {
                &Identity
            };
            let error = AbbreviationError::new(&error, &content, renderer);
            eprintln!("{}", error.full_details());
            success = false;
        }
    }

    success
}

fn collect_abbreviations(submatches: &ArgMatches) -> Vec<String> {
    let mut result = Vec::new();

    let values = submatches
        .get_many::<String>("abbreviation")
        .into_iter()
        .flatten();

    for value in values {
        if value == "-" {
            for line in std::io::stdin()
                .lock()
                .lines()
            {
                match line {
                    Ok(line) => {
                        let line = line.trim();
                        if !line.is_empty() {
                            result.push(line.to_string());
                        }
                    }
                    Err(error) => {
                        eprintln!("error: Failed reading standard input: {}", error);
                        break;
                    }
                }
            }
        } else {
            result.push(value.clone());
        }
    }

    result
}
