use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use libxiaohe::{decoder, tables, HighlightSet, XiaoheConfig, XiaoheKeyboard};

fn load_config(path: Option<&Path>) -> Result<XiaoheConfig> {
    match path {
        Some(path) => XiaoheConfig::load_toml(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(XiaoheConfig::default()),
    }
}

fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}

fn join_words(words: &[String]) -> String {
    words.join(" ")
}

fn run_repl(keyboard: &XiaoheKeyboard) -> Result<()> {
    println!("libxiaohe: type pinyin and press Enter");
    println!("Example: zhong guo ren -> vs go rf");
    println!("Ctrl-D to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print!("> ");
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let raw = line.context("error reading stdin")?;
        let input = raw.trim();
        if !input.is_empty() {
            let rendering = keyboard.render(input);
            let keys: String = rendering.highlight_set().to_key_string();
            println!("  codes: {}", rendering.codes);
            println!("  keys:  {}", keys);
        }
        print!("> ");
        stdout.flush()?;
    }
    println!();
    Ok(())
}

#[derive(Parser)]
#[command(name = "libxiaohe")]
#[command(about = "Convert pinyin to Xiaohe (小鹤双拼) keys and highlight them on a keyboard")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Single pinyin input for quick conversion
    input: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert pinyin to key codes
    Convert {
        /// Print a per-syllable breakdown as JSON
        #[arg(long)]
        json: bool,
        /// Pinyin syllables
        #[arg(required = true)]
        pinyin: Vec<String>,
    },
    /// List the keys to press for some pinyin
    Keys {
        /// Show what each key stands for
        #[arg(long)]
        legend: bool,
        /// Pinyin syllables
        #[arg(required = true)]
        pinyin: Vec<String>,
    },
    /// Decode key codes back to pinyin
    Decode {
        /// Two-key codes, e.g. `vs go`
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// Render the highlighted keyboard
    Render {
        /// Output format
        #[arg(long, value_enum, default_value_t = RenderFormat::DataUri)]
        format: RenderFormat,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pinyin syllables
        #[arg(required = true)]
        pinyin: Vec<String>,
    },
    /// Interactive mode: convert every line typed
    Repl,
    /// Print the effective configuration as TOML
    ShowConfig,
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum RenderFormat {
    Svg,
    DataUri,
    Markdown,
}

fn handle_convert(keyboard: &XiaoheKeyboard, pinyin: &str, json: bool) -> Result<()> {
    let converter = keyboard.converter();
    if json {
        let rows = converter.explain(pinyin);
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", converter.convert(pinyin));
    }
    Ok(())
}

fn handle_keys(keyboard: &XiaoheKeyboard, pinyin: &str, legend: bool) {
    let rendering = keyboard.render(pinyin);
    if !legend {
        let keys: Vec<String> = rendering.keys.iter().map(char::to_string).collect();
        println!("{}", keys.join(" "));
        return;
    }
    let set: HighlightSet = rendering.highlight_set();
    for key in set.iter() {
        match tables::key_legend(key) {
            Some(legend) => println!("{}  {}", key.to_ascii_uppercase(), legend),
            None => println!("{}", key.to_ascii_uppercase()),
        }
    }
}

fn handle_decode(codes: &str) {
    for (code, syllables) in codes.split_whitespace().zip(decoder::decode(codes)) {
        if syllables.is_empty() {
            println!("{code} -> (no syllable)");
        } else {
            println!("{code} -> {}", syllables.join(" / "));
        }
    }
}

fn handle_render(
    keyboard: &XiaoheKeyboard,
    pinyin: &str,
    format: RenderFormat,
    output: Option<&Path>,
) -> Result<()> {
    let rendering = keyboard.render(pinyin);
    let payload = match format {
        RenderFormat::Svg => rendering.svg.clone(),
        RenderFormat::DataUri => rendering.data_uri(),
        RenderFormat::Markdown => rendering.markdown(),
    };
    match output {
        Some(path) => {
            std::fs::write(path, payload)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), codes = %rendering.codes, "wrote rendering");
        }
        None => println!("{payload}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.base.log_filter);
    let keyboard = XiaoheKeyboard::from_config(&config).context("failed to load keyboard template")?;

    match cli.command {
        Some(Commands::Convert { json, pinyin }) => {
            handle_convert(&keyboard, &join_words(&pinyin), json)?;
        }
        Some(Commands::Keys { legend, pinyin }) => {
            handle_keys(&keyboard, &join_words(&pinyin), legend);
        }
        Some(Commands::Decode { codes }) => {
            handle_decode(&join_words(&codes));
        }
        Some(Commands::Render { format, output, pinyin }) => {
            handle_render(&keyboard, &join_words(&pinyin), format, output.as_deref())?;
        }
        Some(Commands::Repl) => run_repl(&keyboard)?,
        Some(Commands::ShowConfig) => print!("{}", config.to_toml_string()?),
        None => {
            // A bare argument converts it; no arguments starts the REPL.
            if let Some(input) = cli.input {
                handle_convert(&keyboard, &input, false)?;
            } else {
                run_repl(&keyboard)?;
            }
        }
    }
    Ok(())
}
