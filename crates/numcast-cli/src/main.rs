//! Numcast CLI
//!
//! Command-line interface for converting numeric token streams into
//! 64-bit integers.

use clap::{Arg, ArgAction, Command};
use numcast_array::IntegerArray;
use numcast_convert::Converter;
use std::io::Read;
use std::process;

fn main() {
    let matches = Command::new("numcast")
        .version("0.1.0")
        .about("Convert numeric string tokens to 64-bit integers")
        .arg(
            Arg::new("tokens")
                .short('c')
                .long("tokens")
                .value_name("STRING")
                .help("Convert an inline token string")
                .num_args(1)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("File of tokens to convert")
                .index(1),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit the result as a JSON array")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let json = matches.get_flag("json");

    let result = matches.get_one::<String>("tokens").map_or_else(
        || {
            matches.get_one::<String>("file").map_or_else(
                || convert_stdin(json),
                |file_path| convert_file(file_path, json),
            )
        },
        |token_str| convert_string(token_str, json),
    );

    match result {
        Ok(rendered) => {
            if !rendered.is_empty() {
                println!("{rendered}");
            }
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn convert_string(input: &str, json: bool) -> Result<String, anyhow::Error> {
    let converter = Converter::new(input)?;
    render(&converter.convert()?, json)
}

fn convert_file(file_path: &str, json: bool) -> Result<String, anyhow::Error> {
    let content = std::fs::read_to_string(file_path)?;
    let converter = Converter::new_with_filename(&content, file_path)?;
    render(&converter.convert()?, json)
}

fn convert_stdin(json: bool) -> Result<String, anyhow::Error> {
    let mut content = String::new();
    std::io::stdin().read_to_string(&mut content)?;
    let converter = Converter::new_with_filename(&content, "<stdin>")?;
    render(&converter.convert()?, json)
}

fn render(values: &IntegerArray, json: bool) -> Result<String, anyhow::Error> {
    if json {
        Ok(serde_json::to_string(values.as_slice())?)
    } else {
        Ok(values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
