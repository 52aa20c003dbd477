use anyhow::{bail, Context, Result};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: marquee [OPTIONS] [TEXT]...

Scrolls TEXT across the terminal as a large ASCII-art banner. Without TEXT,
each line typed on stdin becomes a banner. Press any key to dismiss a banner.

Options:
  -c, --config <PATH>    Config file (default: ~/.config/marquee/config.toml)
  -f, --font <PATH>      TrueType/OpenType font file
  -l, --language <CODE>  Language code for the text source (default: locale)
  -h, --help             Print this help";

/// Command line arguments
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub font: Option<PathBuf>,
    pub language: Option<String>,
    pub text: Vec<String>,
    pub help: bool,
}

impl Args {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-c" | "--config" => {
                    parsed.config = Some(args.next().context("--config needs a path")?.into());
                }
                "-f" | "--font" => {
                    parsed.font = Some(args.next().context("--font needs a path")?.into());
                }
                "-l" | "--language" => {
                    parsed.language = Some(args.next().context("--language needs a code")?);
                }
                "--" => {
                    parsed.text.extend(args.by_ref());
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    bail!("unknown option: {}\n\n{}", flag, USAGE);
                }
                _ => parsed.text.push(arg),
            }
        }

        Ok(parsed)
    }

    /// Positional words joined into one utterance, if any were given
    pub fn utterance(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.join(" "))
        }
    }
}

/// Language code from the locale, e.g. `en_US.UTF-8` -> `en-US`
pub fn locale_language() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| language_from_locale(&value))
}

fn language_from_locale(locale: &str) -> Option<String> {
    let tag = locale.split(['.', '@']).next()?;
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return None;
    }
    Some(tag.replace('_', "-"))
}
