//! inflect CLI - Inflect words and convert casing from the command line
//!
//! Usage:
//!   inflect pluralize <word>... [--locale <locale>]
//!   inflect singularize <word>... [--locale <locale>]
//!   inflect camelize <word>...
//!   inflect slug <string>... [--replacement <str>]
//!   inflect rules <plural|singular> [--locale <locale>]
//!
//! Examples:
//!   inflect pluralize person child
//!   inflect singularize bateaux --locale fr
//!   inflect parameterize "Foo:Bar & Cie"

use clap::{Parser, Subcommand, ValueEnum};
use inflection::casing;
use inflection::config::Settings;
use inflection::{transliterate, Direction, Inflector, LocaleSource};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "inflect")]
#[command(about = "Inflect words, convert casing and transliterate text")]
#[command(version)]
struct Cli {
    /// Path to a config file (defaults to the usual search locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Extra locale bundle file to load before running the command
    #[arg(long, global = true, value_name = "LOCALE=FILE")]
    bundle: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Change words from singular to plural
    Pluralize {
        words: Vec<String>,
        /// Locale of the rules to use
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Change words from plural to singular
    Singularize {
        words: Vec<String>,
        /// Locale of the rules to use
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// under_scored or dashed words to CamelCase
    Camelize { words: Vec<String> },

    /// under_scored or dashed words to camelBack
    Camelback { words: Vec<String> },

    /// CamelCase words to under_scored
    Underscore { words: Vec<String> },

    /// under_scored words to dashed-words
    Dasherize { words: Vec<String> },

    /// Separated words to a sentence-cased label
    Humanize {
        words: Vec<String>,
        #[arg(short, long, default_value_t = '_')]
        separator: char,
    },

    /// Separated words to a title-cased label
    Titleize {
        words: Vec<String>,
        #[arg(short, long, default_value_t = '_')]
        separator: char,
    },

    /// Strings to URL slugs
    Slug {
        strings: Vec<String>,
        #[arg(short, long, default_value = "-")]
        replacement: String,
    },

    /// Strings to lowercased URL slugs
    Parameterize {
        strings: Vec<String>,
        #[arg(short, long, default_value = "-")]
        replacement: String,
    },

    /// Map Unicode text to ASCII
    Transliterate { strings: Vec<String> },

    /// List the rules of a locale in the order they are tried
    Rules {
        direction: DirectionArg,
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// List the loaded locales
    Locales,
}

#[derive(Clone, ValueEnum)]
enum DirectionArg {
    Plural,
    Singular,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Plural => Direction::Plural,
            DirectionArg::Singular => Direction::Singular,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("inflection=warn")),
        )
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let inflector = match Inflector::from_settings(&settings) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Error loading locales: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for arg in &cli.bundle {
        let Some((locale, file)) = arg.split_once('=') else {
            eprintln!("Invalid --bundle '{}': expected LOCALE=FILE", arg);
            return ExitCode::FAILURE;
        };
        if let Err(e) = inflector.load(locale, Some(LocaleSource::File(PathBuf::from(file)))) {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let default_locale = settings.default_locale.as_str();

    match cli.command {
        Commands::Pluralize { words, locale } => {
            let locale = locale.as_deref().unwrap_or(default_locale);
            cmd_inflect(&inflector, Direction::Plural, &words, locale)
        }
        Commands::Singularize { words, locale } => {
            let locale = locale.as_deref().unwrap_or(default_locale);
            cmd_inflect(&inflector, Direction::Singular, &words, locale)
        }
        Commands::Camelize { words } => print_each(&words, casing::camelize),
        Commands::Camelback { words } => print_each(&words, casing::camelback),
        Commands::Underscore { words } => print_each(&words, casing::underscore),
        Commands::Dasherize { words } => print_each(&words, casing::dasherize),
        Commands::Humanize { words, separator } => {
            print_each(&words, |w| casing::humanize_with(w, separator))
        }
        Commands::Titleize { words, separator } => {
            print_each(&words, |w| casing::titleize_with(w, separator))
        }
        Commands::Slug {
            strings,
            replacement,
        } => print_each(&strings, |s| casing::slug_with(s, &replacement)),
        Commands::Parameterize {
            strings,
            replacement,
        } => print_each(&strings, |s| casing::parameterize_with(s, &replacement)),
        Commands::Transliterate { strings } => print_each(&strings, transliterate),
        Commands::Rules { direction, locale } => {
            let locale = locale.as_deref().unwrap_or(default_locale);
            cmd_rules(&inflector, direction.into(), locale)
        }
        Commands::Locales => {
            for locale in inflector.locales() {
                println!("{}", locale);
            }
            ExitCode::SUCCESS
        }
    }
}

fn cmd_inflect(
    inflector: &Inflector,
    direction: Direction,
    words: &[String],
    locale: &str,
) -> ExitCode {
    if let Err(e) = ensure_locale(inflector, locale) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    print_each(words, |w| match direction {
        Direction::Plural => inflector.pluralize(w, locale),
        Direction::Singular => inflector.singularize(w, locale),
    })
}

fn cmd_rules(inflector: &Inflector, direction: Direction, locale: &str) -> ExitCode {
    if let Err(e) = ensure_locale(inflector, locale) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    for (index, rule) in inflector.rules(direction, locale).iter().enumerate() {
        println!("{:>3}  {}", index + 1, rule);
    }
    ExitCode::SUCCESS
}

/// Load `locale` from the built-in table or bundle dirs unless it already has rules.
fn ensure_locale(inflector: &Inflector, locale: &str) -> inflection::InflectionResult<()> {
    if inflector.locales().iter().any(|l| l == locale) {
        return Ok(());
    }
    inflector.load(locale, None)
}

fn print_each<F>(inputs: &[String], f: F) -> ExitCode
where
    F: Fn(&str) -> String,
{
    for input in inputs {
        println!("{}", f(input));
    }
    ExitCode::SUCCESS
}
