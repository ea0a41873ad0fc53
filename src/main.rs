// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{BufRead, IsTerminal, Write};
use std::path::Path;

use accent_translator::accent_client::user_message;
use accent_translator::app_config::{self, Config, ServiceMode};
use accent_translator::app_controller::Controller;
use accent_translator::language_utils;
use accent_translator::speech::ConsoleSynthesizer;
use accent_translator::translation::CountingPolicy;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for CountingPolicy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliCountingPolicy {
    Cumulative,
    LongestMatch,
}

impl From<CliCountingPolicy> for CountingPolicy {
    fn from(cli_policy: CliCountingPolicy) -> Self {
        match cli_policy {
            CliCountingPolicy::Cumulative => CountingPolicy::Cumulative,
            CliCountingPolicy::LongestMatch => CountingPolicy::LongestMatch,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text into a target accent (default command)
    Translate(TranslateArgs),

    /// List the available accents
    Accents(AccentsArgs),

    /// Generate shell completions for accent-translator
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by every command that talks to a backend
#[derive(Args, Debug, Clone)]
struct CommonArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Use the remote translation service instead of the local pipeline
    #[arg(long)]
    remote: bool,

    /// Translation service endpoint (implies --remote)
    #[arg(long)]
    endpoint: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct TranslateArgs {
    /// Text to translate; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Accent the text is written in
    #[arg(short, long)]
    source_accent: Option<String>,

    /// Accent to translate into
    #[arg(short, long)]
    target_accent: Option<String>,

    /// How overlapping punctuation markers are counted
    #[arg(long, value_enum)]
    counting_policy: Option<CliCountingPolicy>,

    /// Print the translation result as JSON
    #[arg(long)]
    json: bool,

    /// Speak the translation with the console synthesizer
    #[arg(long)]
    speak: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug, Clone)]
struct AccentsArgs {
    /// Print the accent catalog as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    common: CommonArgs,
}

/// Accent Translator - rewrite text into another English accent
///
/// Rewrites text with accent-specific vocabulary, keeps its tone and plans
/// tone-aware speech for the target accent's voice.
#[derive(Parser, Debug)]
#[command(name = "accent-translator")]
#[command(version)]
#[command(about = "Accent translation with tone-aware speech")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "Accent Translator rewrites text into a target accent and preserves its tone.

EXAMPLES:
    accent-translator \"My mom loves cookies!\" -t British
    accent-translator translate -s American -t Australian \"Thank you, friend\"
    echo \"yes, the food is good\" | accent-translator translate -t Indian --json
    accent-translator translate --speak -t British \"Wait... the elevator?\"
    accent-translator accents
    accent-translator completions bash > accent-translator.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Label and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "1;31"),
            Level::Warn => ("WARN ", "1;33"),
            Level::Info => ("INFO ", "1;32"),
            Level::Debug => ("DEBUG", "1;36"),
            Level::Trace => ("TRACE", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (label, color) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, label, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with trace so the config can lower it later
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "accent-translator", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        Some(Commands::Accents(args)) => run_accents(args).await,
        None => run_translate(cli.translate).await,
    }
}

/// Load or create the configuration and apply the shared CLI overrides
fn load_config(common: &CommonArgs) -> Result<Config> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &common.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let config_path = &common.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    if let Some(log_level) = &common.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(level_filter(&config.log_level));
    }

    if let Some(endpoint) = &common.endpoint {
        config.service.endpoint = endpoint.clone();
        config.service.mode = ServiceMode::Remote;
    }
    if common.remote {
        config.service.mode = ServiceMode::Remote;
    }

    Ok(config)
}

/// Read one line of typed input
fn read_text_from_stdin() -> Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Text to translate: ");
        let _ = std::io::stderr().flush();
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line).context("Failed to read text from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    let mut config = load_config(&options.common)?;

    if let Some(source) = &options.source_accent {
        config.source_accent = source.clone();
    }
    if let Some(target) = &options.target_accent {
        config.target_accent = target.clone();
    }
    if let Some(policy) = &options.counting_policy {
        config.tone.counting_policy = policy.clone().into();
    }

    config.ensure_valid()?;

    let text = match options.text {
        Some(text) => text,
        None => read_text_from_stdin()?,
    };

    let show_progress = !options.json && std::io::stderr().is_terminal();
    let mut controller = Controller::with_config(config)?.with_progress(show_progress);

    let result = match controller.translate(&text).await {
        Ok(result) => result,
        Err(e) => {
            let message = user_message(&e);
            error!("{}", message);
            return Err(anyhow!(message));
        }
    };

    let mut stdout = std::io::stdout();
    if options.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        writeln!(stdout, "Original Text:\n{}\n", controller.session().original_text)?;
        writeln!(stdout, "Translated Text:\n{}", controller.session().translated_text)?;
        info!(
            "Voice: {} ({}), tone: excitement={} questioning={} emphasis={} pauses={} volume={}",
            result.voice_info.voice_uri,
            result.voice_info.voice_lang,
            result.tone_info.excitement,
            result.tone_info.questioning,
            result.tone_info.emphasis,
            result.tone_info.pauses,
            result.tone_info.volume
        );
    }

    if options.speak {
        let mut synthesizer = ConsoleSynthesizer::new(std::io::stdout());
        controller.speak(&result, &mut synthesizer)?;
    }

    Ok(())
}

async fn run_accents(options: AccentsArgs) -> Result<()> {
    let config = load_config(&options.common)?;
    config.ensure_valid()?;

    let controller = Controller::with_config(config)?;
    let catalog = controller.client().available_accents().await;

    let mut stdout = std::io::stdout();
    if options.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&catalog)?)?;
        return Ok(());
    }

    for accent in catalog.descriptors() {
        let language = language_utils::get_language_name(&accent.voice_lang)
            .unwrap_or_else(|_| "unknown".to_string());
        writeln!(
            stdout,
            "{:<12} {:<20} {:<6} {:<10} {}",
            accent.id, accent.display_name, accent.voice_lang, language, accent.voice_uri
        )?;
    }

    Ok(())
}
