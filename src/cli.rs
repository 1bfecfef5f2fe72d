//! Command line interface

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use crate::alphabet::Preset;
use crate::config::{Profile, Settings};
use crate::engine::{total_words, Engine};
use crate::error::{Result, WordgenError};
use crate::types::LengthRange;
use crate::{config_error, internal_error};

/// Log level for the application
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Generate word lists.
///
/// Every combination of the source characters is written, one word per
/// line, for each length in the requested range. By default SOURCE holds
/// ASCII letters and digits, words are 6 characters long and go to stdout.
#[derive(Parser, Debug)]
#[command(name = "wordgen", version, args_override_self = true)]
#[command(group(
    ArgGroup::new("alphabet")
        .args([
            "source", "lowercase", "uppercase", "digits", "xdigits",
            "upper_xdigits", "punct", "alpha", "alnum", "ascii",
        ])
        .multiple(false)
))]
pub struct Cli {
    /// Use SOURCE as the source string
    #[arg(short, long, value_name = "SOURCE", help_heading = "Source characters")]
    pub source: Option<String>,

    /// Use ASCII lowercase characters as SOURCE
    #[arg(long, help_heading = "Source characters")]
    pub lowercase: bool,

    /// Use ASCII uppercase characters as SOURCE
    #[arg(long, help_heading = "Source characters")]
    pub uppercase: bool,

    /// Use digits as SOURCE
    #[arg(long, help_heading = "Source characters")]
    pub digits: bool,

    /// Use lowercase hexadecimal digits as SOURCE
    #[arg(long, help_heading = "Source characters")]
    pub xdigits: bool,

    /// Use uppercase hexadecimal digits as SOURCE
    #[arg(long = "Xdigits", help_heading = "Source characters")]
    pub upper_xdigits: bool,

    /// Use ASCII punctuation marks as SOURCE
    #[arg(long, help_heading = "Source characters")]
    pub punct: bool,

    /// Use ASCII letters as SOURCE
    #[arg(long, help_heading = "Source characters")]
    pub alpha: bool,

    /// Use ASCII letters and digits as SOURCE
    #[arg(long, help_heading = "Source characters")]
    pub alnum: bool,

    /// Use all printable 7-bit ASCII characters as SOURCE
    #[arg(long, help_heading = "Source characters")]
    pub ascii: bool,

    /// Length of generated words, LEN or MIN-MAX
    #[arg(
        short,
        long,
        value_name = "LEN|MIN-MAX",
        env = "WORDGEN_LENGTH",
        help_heading = "Length control"
    )]
    pub length: Option<LengthRange>,

    /// Output filename (default: stdout)
    #[arg(short, long, value_name = "FILE", env = "WORDGEN_OUTPUT", help_heading = "Output control")]
    pub output: Option<PathBuf>,

    /// Prepend words with STR
    #[arg(short = 'P', long, value_name = "STR", env = "WORDGEN_PREFIX", help_heading = "Output control")]
    pub prefix: Option<String>,

    /// Append STR to words
    #[arg(short = 'S', long, value_name = "STR", env = "WORDGEN_SUFFIX", help_heading = "Output control")]
    pub suffix: Option<String>,

    /// Show a progress bar on stderr
    #[arg(long, help_heading = "Output control")]
    pub progress: bool,

    /// Read default settings from a JSON profile
    #[arg(short, long, value_name = "FILE", env = "WORDGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the number of words that would be generated and exit
    #[arg(long)]
    pub count: bool,

    /// Print the effective settings as a JSON profile and exit
    #[arg(long, conflicts_with = "count")]
    pub print_config: bool,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Cli {
    /// Preset selected by one of the preset flags, if any
    pub fn preset(&self) -> Option<Preset> {
        [
            (self.lowercase, Preset::Lowercase),
            (self.uppercase, Preset::Uppercase),
            (self.digits, Preset::Digits),
            (self.xdigits, Preset::Xdigits),
            (self.upper_xdigits, Preset::UpperXdigits),
            (self.punct, Preset::Punct),
            (self.alpha, Preset::Alpha),
            (self.alnum, Preset::Alnum),
            (self.ascii, Preset::Ascii),
        ]
        .into_iter()
        .find_map(|(set, preset)| set.then_some(preset))
    }

    /// Settings given on the command line (or via environment)
    pub fn to_profile(&self) -> Profile {
        Profile {
            source: self.source.clone(),
            preset: self.preset(),
            length: self.length,
            output: self.output.clone(),
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
        }
    }

    /// Profile file layered under the command line
    pub fn layered_profile(&self) -> Result<Profile> {
        let base = match &self.config {
            Some(path) => Profile::load(path)?,
            None => Profile::default(),
        };
        Ok(base.merge(self.to_profile()))
    }
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text)
        .and_then(|_| stdout.flush())
        .map_err(|e| WordgenError::sink(&e))
}

fn progress_bar(total: Option<u128>) -> Result<ProgressBar> {
    let pb = match total {
        Some(total) => ProgressBar::new(u64::try_from(total).unwrap_or(u64::MAX)),
        None => ProgressBar::new_spinner(),
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({percent}%) {per_sec} ETA {eta}")
            .map_err(|e| internal_error!("invalid progress template: {}", e))?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

/// Generate the word list described by `settings`
pub fn generate(settings: &Settings, show_progress: bool) -> Result<()> {
    // The output is not touched at all when there is nothing to write.
    if settings.generation.alphabet.is_empty() {
        tracing::info!("Empty alphabet, nothing to generate");
        return Ok(());
    }

    let mut sink = settings.output.open()?;
    tracing::info!(output = %settings.output, "Writing words");

    let mut engine = Engine::new(&settings.generation);
    let progress = if show_progress {
        let total = total_words(settings.generation.alphabet.len(), settings.generation.lengths);
        let pb = progress_bar(total)?;
        engine = engine.with_progress(pb.clone());
        Some(pb)
    } else {
        None
    };

    let result = engine.run(&mut sink);
    if let Some(pb) = progress {
        if result.is_ok() {
            pb.finish();
        } else {
            pb.abandon();
        }
    }

    let summary = result?;
    tracing::info!(
        lengths = summary.lengths,
        words = summary.words,
        "Word list written"
    );
    Ok(())
}

/// Run the application for parsed arguments
pub fn run(cli: &Cli) -> Result<()> {
    let profile = cli.layered_profile()?;

    if cli.print_config {
        let json = serde_json::to_string_pretty(&profile.with_defaults())?;
        return write_stdout(&json);
    }

    let settings = profile.resolve()?;

    if cli.count {
        let total = total_words(settings.generation.alphabet.len(), settings.generation.lengths)
            .ok_or_else(|| config_error!("word count for length {} does not fit in 128 bits", settings.generation.lengths))?;
        return write_stdout(&total.to_string());
    }

    generate(&settings, cli.progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wordgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wordgen"]).unwrap();
        assert_eq!(cli.preset(), None);
        assert!(!cli.count);
        let profile = cli.to_profile();
        assert_eq!(profile.source, None);
        assert_eq!(profile.prefix, None);
    }

    #[test]
    fn test_short_options() {
        let cli = parse(&["-s", "abc", "-l", "2-3", "-P", "<", "-S", ">", "-o", "out.txt"]);
        assert_eq!(cli.source.as_deref(), Some("abc"));
        assert_eq!(cli.length, Some(LengthRange::new(2, 3).unwrap()));
        assert_eq!(cli.prefix.as_deref(), Some("<"));
        assert_eq!(cli.suffix.as_deref(), Some(">"));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_preset_flags() {
        assert_eq!(parse(&["--Xdigits"]).preset(), Some(Preset::UpperXdigits));
        assert_eq!(parse(&["--xdigits"]).preset(), Some(Preset::Xdigits));
        assert_eq!(parse(&["--punct"]).preset(), Some(Preset::Punct));
    }

    #[test]
    fn test_alphabet_options_conflict() {
        assert!(Cli::try_parse_from(["wordgen", "--digits", "--lowercase"]).is_err());
        assert!(Cli::try_parse_from(["wordgen", "-s", "ab", "--ascii"]).is_err());
    }

    #[test]
    fn test_repeated_length_keeps_last() {
        let cli = parse(&["-l", "2", "-l", "4"]);
        assert_eq!(cli.length, Some(LengthRange::single(4).unwrap()));
    }

    #[test]
    fn test_bad_length_rejected() {
        assert!(Cli::try_parse_from(["wordgen", "-l", "0"]).is_err());
        assert!(Cli::try_parse_from(["wordgen", "-l", "3-1"]).is_err());
        assert!(Cli::try_parse_from(["wordgen", "-l", "x"]).is_err());
    }

    #[test]
    fn test_cli_overrides_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.json");
        std::fs::write(&path, r#"{ "preset": "digits", "length": "4", "prefix": "pin" }"#).unwrap();

        let cli = parse(&["-c", path.to_str().unwrap(), "--lowercase", "-l", "2"]);
        let settings = cli.layered_profile().unwrap().resolve().unwrap();
        assert_eq!(settings.generation.alphabet, Preset::Lowercase.alphabet());
        assert_eq!(settings.generation.lengths, LengthRange::single(2).unwrap());
        assert_eq!(settings.generation.decoration.prefix(), "pin");
    }

    #[test]
    fn test_generate_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let cli = parse(&["-s", "ab", "-l", "1-2", "-o", path.to_str().unwrap()]);
        let settings = cli.layered_profile().unwrap().resolve().unwrap();
        generate(&settings, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\naa\nba\nab\nbb\n");
    }
}
