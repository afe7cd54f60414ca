// ABOUTME: Command-line argument parsing for the briefcase binary
// ABOUTME: Flags for help, version, verbosity, log file and backend URL

use anyhow::{Context, Result, bail};
use std::path::PathBuf;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub display_help: bool,
    pub display_version: bool,
    pub verbosity: u64,
    pub api_url: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Result<Args> {
        Self::parse_from(std::env::args().skip(1))
    }

    pub fn parse_from<I, S>(argv: I) -> Result<Args>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = Args::default();
        let mut argv = argv.into_iter().map(Into::into);

        while let Some(arg) = argv.next() {
            match arg.as_str() {
                "--help" => args.display_help = true,
                "--version" => args.display_version = true,
                "--api-url" => {
                    args.api_url = Some(argv.next().context("--api-url requires a URL")?);
                }
                "--log" => {
                    let path = argv.next().context("--log requires a file path")?;
                    args.log_file = Some(PathBuf::from(path));
                }
                long if long.starts_with("--") => bail!("unexpected argument {long}"),
                short if short.starts_with('-') && short.len() > 1 => {
                    for flag in short.chars().skip(1) {
                        match flag {
                            'v' => args.verbosity += 1,
                            'V' => args.display_version = true,
                            'h' => args.display_help = true,
                            _ => bail!("unexpected short argument -{flag}"),
                        }
                    }
                }
                other => bail!("unexpected argument {other}"),
            }
        }

        Ok(args)
    }
}
