use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use hanyu_pinyin::patterns::consonant_end;
use hanyu_pinyin::{PatternSet, PinyinConfig, PinyinMatcher, Span, Unit, FINALS};

#[derive(Parser)]
#[command(name = "hanyu-pinyin")]
#[command(about = "Find and validate Hanyu Pinyin syllables, words and sentences")]
#[command(version)]
struct Cli {
    /// Load matching options from a TOML file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every match in the given text (stdin lines when none given)
    Find {
        #[arg(long, value_enum, default_value_t = UnitArg::Word)]
        unit: UnitArg,
        /// Print one JSON object per input
        #[arg(long)]
        json: bool,
        text: Vec<String>,
    },
    /// Report whether each text is exactly one unit
    Check {
        #[arg(long, value_enum, default_value_t = UnitArg::Word)]
        unit: UnitArg,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Split words into syllables
    Split {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print the pattern source for a unit
    Pattern {
        #[arg(long, value_enum, default_value_t = UnitArg::Syllable)]
        unit: UnitArg,
    },
    /// Print the attested initial/final table
    Table,
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum UnitArg {
    Syllable,
    Word,
    Sentence,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Syllable => Unit::Syllable,
            UnitArg::Word => Unit::Word,
            UnitArg::Sentence => Unit::Sentence,
        }
    }
}

#[derive(Serialize)]
struct FindOutput<'a> {
    input: &'a str,
    unit: Unit,
    matches: &'a [Span],
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("HANYU_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .try_init();
}

fn load_config(path: Option<&Path>) -> Result<PinyinConfig> {
    match path {
        Some(p) => {
            let cfg = PinyinConfig::load_toml(p)
                .with_context(|| format!("failed to load config {}", p.display()))?;
            info!(path = %p.display(), "loaded config");
            Ok(cfg)
        }
        None => Ok(PinyinConfig::default()),
    }
}

fn build_matcher(cfg: &PinyinConfig) -> Result<PinyinMatcher> {
    PinyinMatcher::new(cfg).context("failed to compile pinyin patterns")
}

/// Collect the inputs for `find`: the arguments, or stdin lines when none.
fn read_inputs(text: Vec<String>) -> Result<Vec<String>> {
    if !text.is_empty() {
        return Ok(text);
    }
    debug!("reading input from stdin");
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        lines.push(line.context("error reading stdin")?);
    }
    Ok(lines)
}

fn handle_find(matcher: &PinyinMatcher, unit: Unit, json: bool, text: Vec<String>) -> Result<()> {
    for input in read_inputs(text)? {
        let matches = matcher
            .find_all(unit, &input)
            .with_context(|| format!("matching {} in '{}'", unit.name(), input))?;
        if json {
            let out = FindOutput {
                input: &input,
                unit,
                matches: &matches,
            };
            println!("{}", serde_json::to_string(&out)?);
        } else {
            for m in &matches {
                println!("{}\t{}\t{}", m.start, m.end, m.text);
            }
        }
    }
    Ok(())
}

fn handle_check(matcher: &PinyinMatcher, unit: Unit, text: &[String]) -> Result<bool> {
    let mut all_ok = true;
    for input in text {
        let ok = matcher
            .is_valid(unit, input)
            .with_context(|| format!("checking '{}'", input))?;
        println!("{}\t{}", if ok { "ok" } else { "no" }, input);
        all_ok &= ok;
    }
    Ok(all_ok)
}

fn handle_split(matcher: &PinyinMatcher, words: &[String]) -> Result<bool> {
    let mut all_ok = true;
    for word in words {
        match matcher
            .split_word(word)
            .with_context(|| format!("splitting '{}'", word))?
        {
            Some(parts) => {
                let parts: Vec<&str> = parts.iter().map(|s| s.text.as_str()).collect();
                println!("{}\t{}", word, parts.join(" "));
            }
            None => {
                println!("{}\t(not a word)", word);
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

fn handle_table() {
    let ce = consonant_end();
    for f in FINALS {
        let zero = if f.zero_initial { "0 " } else { "" };
        println!("{:<5} {}{}", f.name, zero, f.initials.join(" "));
        println!("      {}", f.pattern(&ce));
    }
}

fn run(cli: Cli) -> Result<bool> {
    let cfg = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Find { unit, json, text } => {
            let matcher = build_matcher(&cfg)?;
            handle_find(&matcher, unit.into(), json, text)?;
            Ok(true)
        }
        Commands::Check { unit, text } => {
            let matcher = build_matcher(&cfg)?;
            handle_check(&matcher, unit.into(), &text)
        }
        Commands::Split { words } => {
            let matcher = build_matcher(&cfg)?;
            handle_split(&matcher, &words)
        }
        Commands::Pattern { unit } => {
            let set = PatternSet::build(&cfg);
            let source = match Unit::from(unit) {
                Unit::Syllable => set.syllable,
                Unit::Word => set.word,
                Unit::Sentence => set.sentence,
            };
            println!("{}", source);
            Ok(true)
        }
        Commands::Table => {
            handle_table();
            Ok(true)
        }
    }
}

fn main() -> Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();
    if run(cli)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
