use crate::{
    AxmlToXmlConverter, BinResError, DecodeOptions, LineEnding, ResourceId, ResourceTableDumper,
    Result, TextNodeHandling,
};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::io::{self, BufWriter};

pub struct Cli;

impl Cli {
    pub fn build_command() -> Command {
        Command::new("binres")
            .about("Decodes Android binary XML and resource tables")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Increase log verbosity (-v debug, -vv trace)")
                    .action(ArgAction::Count)
                    .global(true),
            )
            .subcommand(
                Command::new("xml")
                    .about("Converts compiled binary XML to human-readable XML")
                    .long_about("Converts compiled binary XML (AndroidManifest.xml, layouts) to human-readable XML.\n\nWhen invoked with the '-i' argument, the output of a successful conversion will overwrite the original input file. Input can be '-' to use stdin, and output can be '-' to use stdout.")
                    .arg(
                        Arg::new("in-place")
                            .short('i')
                            .long("in-place")
                            .help("Overwrite input file with converted output")
                            .action(ArgAction::SetTrue),
                    )
                    .arg(
                        Arg::new("input")
                            .help("Input file path (use '-' for stdin)")
                            .required(true)
                            .index(1),
                    )
                    .arg(
                        Arg::new("output")
                            .help("Output file path (use '-' for stdout)")
                            .index(2),
                    )
                    .arg(
                        Arg::new("line-ending")
                            .long("line-ending")
                            .help("Line ending of the rendered XML")
                            .value_parser(["crlf", "lf"])
                            .default_value("crlf"),
                    )
                    .arg(
                        Arg::new("text-nodes")
                            .long("text-nodes")
                            .help("How to find the end of text nodes")
                            .value_parser(["scan", "chunk"])
                            .default_value("scan"),
                    ),
            )
            .subcommand(
                Command::new("arsc")
                    .about("Dumps the resource index of a resources.arsc file")
                    .arg(
                        Arg::new("input")
                            .help("Input file path (use '-' for stdin)")
                            .required(true)
                            .index(1),
                    )
                    .arg(
                        Arg::new("id")
                            .long("id")
                            .value_name("ID")
                            .help("Only dump this resource id (hex, repeatable)")
                            .action(ArgAction::Append),
                    ),
            )
    }

    /// Number of `-v` flags, wherever they appear on the command line
    pub fn verbosity(matches: &ArgMatches) -> u8 {
        let subcommand = matches
            .subcommand()
            .map(|(_, sub)| sub.get_count("verbose"))
            .unwrap_or(0);
        matches.get_count("verbose").max(subcommand)
    }

    pub fn run_with_matches(matches: ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("xml", sub)) => Self::run_xml(sub),
            Some(("arsc", sub)) => Self::run_arsc(sub),
            _ => Err(BinResError::InvalidArgument(
                "A subcommand is required".to_string(),
            )),
        }
    }

    fn run_xml(matches: &ArgMatches) -> Result<()> {
        let input_path = required(matches, "input")?;
        let output_path = matches.get_one::<String>("output");
        let in_place = matches.get_flag("in-place");

        if in_place && input_path == "-" {
            return Err(BinResError::InvalidArgument(
                "Cannot use -i option with stdin input".to_string(),
            ));
        }

        let output_path = match output_path {
            Some(path) => path.clone(),
            None => {
                if in_place {
                    input_path.clone()
                } else {
                    "-".to_string()
                }
            }
        };

        let converter = AxmlToXmlConverter::new(Self::decode_options(matches));
        match (input_path.as_str(), output_path.as_str()) {
            ("-", "-") => converter.convert_stdin_stdout(),
            ("-", output) => converter.convert_stdin_to_file(output),
            (input, "-") => converter.convert_file_to_stdout(input),
            (input, output) => converter.convert_file(input, output),
        }
    }

    fn decode_options(matches: &ArgMatches) -> DecodeOptions {
        let line_ending = match matches.get_one::<String>("line-ending").map(String::as_str) {
            Some("lf") => LineEnding::Lf,
            _ => LineEnding::CrLf,
        };
        let text_nodes = match matches.get_one::<String>("text-nodes").map(String::as_str) {
            Some("chunk") => TextNodeHandling::ChunkSize,
            _ => TextNodeHandling::SentinelScan,
        };
        DecodeOptions::default()
            .line_ending(line_ending)
            .text_nodes(text_nodes)
    }

    fn run_arsc(matches: &ArgMatches) -> Result<()> {
        let input_path = required(matches, "input")?;
        let ids = matches
            .get_many::<String>("id")
            .into_iter()
            .flatten()
            .map(|id| id.parse::<ResourceId>())
            .collect::<Result<Vec<_>>>()?;

        let stdout = io::stdout();
        ResourceTableDumper::with_ids(ids).dump_file(input_path, BufWriter::new(stdout.lock()))
    }
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| BinResError::InvalidArgument(format!("Missing argument <{}>", name)))
}
