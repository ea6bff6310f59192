//! Command-line parsing: turns the raw argument list into a [`ParsedCommand`].
//!
//! Parsing never fails. Unknown flags and stray positionals are dropped, and
//! anything that does not name a file falls back to showing help. The raw
//! arguments are first reduced to canonical tokens (`--help`, `--version`,
//! `--file=<PATH>`), which are then handed to a `clap::Command` so the parsed
//! values and the rendered help come from one definition.

use crate::VERSION;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, warn};
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

const BIN_NAME: &str = "filefeed";

const EXAMPLES_AND_EXIT_CODES: &str = "\
Examples:
  filefeed --file notes.txt
  filefeed -f ./logs/app.log
  filefeed --help

Exit Codes:
  0  Success (including --help and --version)
  1  The file could not be read";

/// What a single invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    ShowHelp,
    ShowVersion,
    ProcessFile(PathBuf),
}

/// Build the clap definition of the command line.
///
/// clap's automatic help and version flags are disabled: help and version are
/// plain boolean flags here so that they can be resolved by precedence
/// instead of exiting the process from inside the parser.
pub fn command() -> Command {
    Command::new(BIN_NAME)
        .version(VERSION)
        .about("Read a text file whole and line by line, echoing it to stdout")
        .override_usage("filefeed --file <PATH>\n       filefeed --help")
        .help_template(
            "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}{after-help}",
        )
        .after_help(EXAMPLES_AND_EXIT_CODES)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args_override_self(true)
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .help("Path of the text file to read")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .help("Print this help and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .short('V')
                .long("version")
                .help("Print the version and exit")
                .action(ArgAction::SetTrue),
        )
}

/// Rendered usage text printed for [`ParsedCommand::ShowHelp`].
pub fn help_text() -> String {
    command().render_help().to_string()
}

/// Parse the argument list (without the program name).
///
/// Precedence: help, then version, then a non-empty file path. Anything else,
/// including an empty list, yields [`ParsedCommand::ShowHelp`].
pub fn parse<I, T>(args: I) -> ParsedCommand
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let tokens = normalize_args(args);
    debug!("Normalized arguments: {:?}", tokens);

    let argv = std::iter::once(OsString::from(BIN_NAME)).chain(tokens);
    match command().try_get_matches_from(argv) {
        Ok(matches) => resolve(&matches),
        Err(err) => {
            warn!("Falling back to help after parse error: {}", err.kind());
            ParsedCommand::ShowHelp
        }
    }
}

fn resolve(matches: &ArgMatches) -> ParsedCommand {
    let flag = |id: &str| matches.get_one::<bool>(id).copied().unwrap_or(false);

    if flag("help") {
        return ParsedCommand::ShowHelp;
    }
    if flag("version") {
        return ParsedCommand::ShowVersion;
    }
    match matches.get_one::<PathBuf>("file") {
        Some(path) if !path.as_os_str().is_empty() => ParsedCommand::ProcessFile(path.clone()),
        _ => ParsedCommand::ShowHelp,
    }
}

/// Reduce raw arguments to the canonical tokens understood by [`command`].
///
/// Accepted spellings:
/// - `--help`, `-h`, `--version`, `-V`
/// - `--file <PATH>`, `--file=<PATH>`, `-f <PATH>`, `-f<PATH>`, `-f=<PATH>`
/// - grouped short flags such as `-hV` or `-Vf <PATH>`
///
/// A separate `<PATH>` argument is only taken when it does not start with
/// `-`; paths starting with a dash need the `=` form. Everything after `--`
/// is positional and dropped, as is every unknown flag. Empty file values are
/// dropped so they count as absent.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut tokens = Vec::new();
    let mut args = args.into_iter().map(Into::into).peekable();

    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else {
            debug!("Ignoring non UTF-8 argument {:?}", arg);
            continue;
        };

        if text == "--" {
            break;
        }

        if let Some(long) = text.strip_prefix("--") {
            match long.split_once('=') {
                Some(("file", value)) => push_file(&mut tokens, OsStr::new(value)),
                Some(_) => debug!("Ignoring unknown option {text}"),
                None => match long {
                    "help" => tokens.push(OsString::from("--help")),
                    "version" => tokens.push(OsString::from("--version")),
                    "file" => {
                        if let Some(value) = args.next_if(|next| takes_as_value(next)) {
                            push_file(&mut tokens, &value);
                        }
                    }
                    _ => debug!("Ignoring unknown option {text}"),
                },
            }
            continue;
        }

        let Some(group) = text.strip_prefix('-').filter(|g| !g.is_empty()) else {
            debug!("Ignoring positional argument {text}");
            continue;
        };

        for (idx, letter) in group.char_indices() {
            match letter {
                'h' => tokens.push(OsString::from("--help")),
                'V' => tokens.push(OsString::from("--version")),
                'f' => {
                    let rest = &group[idx + 1..];
                    if rest.is_empty() {
                        if let Some(value) = args.next_if(|next| takes_as_value(next)) {
                            push_file(&mut tokens, &value);
                        }
                    } else {
                        let value = rest.strip_prefix('=').unwrap_or(rest);
                        push_file(&mut tokens, OsStr::new(value));
                    }
                    break;
                }
                other => debug!("Ignoring unknown short flag -{other}"),
            }
        }
    }

    tokens
}

fn takes_as_value(next: &OsString) -> bool {
    !next.to_string_lossy().starts_with('-')
}

fn push_file(tokens: &mut Vec<OsString>, value: &OsStr) {
    if value.is_empty() {
        return;
    }
    let mut token = OsString::from("--file=");
    token.push(value);
    tokens.push(token);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(path: &str) -> ParsedCommand {
        ParsedCommand::ProcessFile(PathBuf::from(path))
    }

    #[test]
    fn test_help_forms() {
        assert_eq!(parse(["--help"]), ParsedCommand::ShowHelp);
        assert_eq!(parse(["-h"]), ParsedCommand::ShowHelp);
        assert_eq!(parse(Vec::<String>::new()), ParsedCommand::ShowHelp);
    }

    #[test]
    fn test_file_forms() {
        assert_eq!(parse(["--file", "x"]), process("x"));
        assert_eq!(parse(["-f", "x"]), process("x"));
        assert_eq!(parse(["--file=x"]), process("x"));
        assert_eq!(parse(["-fx"]), process("x"));
        assert_eq!(parse(["-f=x"]), process("x"));
    }

    #[test]
    fn test_help_takes_precedence() {
        assert_eq!(parse(["--file", "x", "--help"]), ParsedCommand::ShowHelp);
        assert_eq!(parse(["-h", "-f", "x"]), ParsedCommand::ShowHelp);
        assert_eq!(parse(["--version", "--help"]), ParsedCommand::ShowHelp);
    }

    #[test]
    fn test_version() {
        assert_eq!(parse(["--version"]), ParsedCommand::ShowVersion);
        assert_eq!(parse(["-V", "-f", "x"]), ParsedCommand::ShowVersion);
    }

    #[test]
    fn test_unknown_flags_are_ignored() {
        assert_eq!(parse(["--bogus"]), ParsedCommand::ShowHelp);
        assert_eq!(parse(["-z"]), ParsedCommand::ShowHelp);
        assert_eq!(parse(["--bogus", "--file", "x", "-q"]), process("x"));
        assert_eq!(parse(["--verbose=3", "-f", "x"]), process("x"));
        assert_eq!(parse(["stray", "-f", "x"]), process("x"));
    }

    #[test]
    fn test_missing_or_empty_file_value() {
        assert_eq!(parse(["--file"]), ParsedCommand::ShowHelp);
        assert_eq!(parse(["-f"]), ParsedCommand::ShowHelp);
        assert_eq!(parse(["--file="]), ParsedCommand::ShowHelp);
        assert_eq!(parse(["--file", "--help"]), ParsedCommand::ShowHelp);
    }

    #[test]
    fn test_last_file_wins() {
        assert_eq!(parse(["-f", "a", "--file", "b"]), process("b"));
    }

    #[test]
    fn test_dash_prefixed_path_needs_equals() {
        assert_eq!(parse(["--file=-odd.txt"]), process("-odd.txt"));
        assert_eq!(parse(["--file", "-odd.txt"]), ParsedCommand::ShowHelp);
    }

    #[test]
    fn test_grouped_short_flags() {
        assert_eq!(parse(["-hV"]), ParsedCommand::ShowHelp);
        assert_eq!(parse(["-qf", "x"]), process("x"));
    }

    #[test]
    fn test_double_dash_ends_options() {
        assert_eq!(parse(["--", "--file", "x"]), ParsedCommand::ShowHelp);
    }

    #[test]
    fn test_normalized_tokens() {
        let tokens = normalize_args(["-x", "-f", "a b.txt", "--help", "pos"]);
        assert_eq!(
            tokens,
            vec![OsString::from("--file=a b.txt"), OsString::from("--help")]
        );
    }

    #[test]
    fn test_help_text_sections() {
        let help = help_text();
        for needle in ["Usage:", "--file", "-f", "--help", "-h", "Examples:", "Exit Codes:"] {
            assert!(help.contains(needle), "help text is missing {needle}:\n{help}");
        }
        assert!(help.contains("  0  "));
        assert!(help.contains("  1  "));
    }

    #[test]
    fn test_help_sections_separated_by_one_blank_line() {
        let help = help_text();
        assert!(!help.contains("\n\n\n"), "extra blank lines in:\n{help}");
        assert!(help.contains("\n\nExamples:"));
        assert!(help.contains("\n\nExit Codes:"));
    }

    #[test]
    fn test_command_definition_is_valid() {
        command().debug_assert();
    }
}
