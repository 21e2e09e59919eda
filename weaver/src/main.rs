use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordweave::{
    check_grid, export_words_json, flatten_word_records, letters_of, reconstruct_preview, validate_generation_input,
    GeneratorConfig, Grid, LayoutGenerator, LetterRow, WordRecord,
};

#[derive(Parser, Debug)]
#[command(name = "weaver", version, about = "Generate and inspect 6x8 word-weave layouts")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a word list, one word per line, without generating
    Validate {
        /// Word list, or '-' for stdin
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,
    },
    /// Generate a layout for a word list
    Generate {
        /// Word list, one word per line, or '-' for stdin
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// Seed for a reproducible layout
        #[arg(short = 's', long = "seed")]
        seed: Option<u64>,

        /// Generator limits as JSON, e.g. {"attempts": 100}
        #[arg(short = 'c', long = "configFile")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "text")]
        output_format: OutputFormat,
    },
    /// Rebuild a grid from stored letter rows (JSON)
    Preview {
        /// Rows as a JSON array, or '-' for stdin
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// Input holds word records with nested letters instead of flat rows
        #[arg(long = "nested")]
        nested: bool,
    },
    /// Check a hand-made grid against a word list
    Check {
        /// Grid as 8 lines of 6 letters, '.' for blanks
        #[arg(short = 'g', long = "grid")]
        grid: PathBuf,

        /// Word list, one word per line, or '-' for stdin
        #[arg(short = 'i', long = "input")]
        input: Option<PathBuf>,

        /// Accept word lists that do not total 48 letters
        #[arg(long = "ignoreLetterCount")]
        ignore_letter_count: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum OutputFormat {
    /// The board, one line per row
    Text,
    /// The full layout
    Json,
    /// Words keyed by name with their coordinates
    Words,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Validate { input } => {
            let text = read_input(input.as_deref())?;
            let lines = text.lines().collect::<Vec<_>>();
            let validation = validate_generation_input(&lines);
            println!("{}", serde_json::to_string_pretty(&validation.parsed)?);
            if let Some(error) = validation.error {
                bail!(error);
            }
        }
        Command::Generate { input, seed, config, output_format } => {
            let text = read_input(input.as_deref())?;
            let lines = text.lines().collect::<Vec<_>>();
            let validation = validate_generation_input(&lines);
            if let Some(error) = validation.error {
                bail!(error);
            }

            let config = match config {
                Some(path) => {
                    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
                    serde_json::from_str::<GeneratorConfig>(&raw)?
                }
                None => GeneratorConfig::default(),
            };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };

            let words = validation.parsed.words;
            let layout = LayoutGenerator::new(config).generate(&words, &mut rng)?;
            info!("placed {} words", layout.paths.len());

            match output_format {
                OutputFormat::Text => print!("{}", layout.grid),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&layout)?),
                OutputFormat::Words => println!("{}", export_words_json(&layout.grid, &words)?),
            }
        }
        Command::Preview { input, nested } => {
            let text = read_input(input.as_deref())?;
            let rows: Vec<LetterRow> = match nested {
                true => flatten_word_records(&serde_json::from_str::<Vec<WordRecord>>(&text)?),
                false => serde_json::from_str(&text)?,
            };

            let preview = reconstruct_preview(&rows);
            print!("{}", preview.grid);
            for path in &preview.paths {
                let cells = path.cells.iter().map(|cell| format!("({}, {})", cell.x, cell.y)).collect::<Vec<_>>();
                println!("{}: {}", path.word, cells.join(" "));
            }
        }
        Command::Check { grid, input, ignore_letter_count } => {
            let raw = std::fs::read_to_string(&grid).with_context(|| format!("reading {}", grid.display()))?;
            let grid = parse_grid(&raw);
            let text = read_input(input.as_deref())?;
            let words = text.lines().collect::<Vec<_>>();

            let check = check_grid(&grid, &words, ignore_letter_count);
            println!("{}", serde_json::to_string_pretty(&check)?);
            if !check.valid {
                bail!("grid is not a valid puzzle for these words");
            }
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

// rows of up to six letters; '.' or a space is a blank cell
fn parse_grid(raw: &str) -> Grid {
    let cells = raw.lines()
        .take(wordweave::GRID_HEIGHT)
        .flat_map(|line| {
            let mut row = letters_of(line)
                .into_iter()
                .map(|letter| if letter.as_str() == "." { String::new() } else { letter.to_string() })
                .take(wordweave::GRID_WIDTH)
                .collect::<Vec<_>>();
            row.resize(wordweave::GRID_WIDTH, String::new());
            row
        })
        .collect::<Vec<_>>();
    Grid::from_strings(&cells)
}
