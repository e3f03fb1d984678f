use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use gumdrop::Options;
use serde::Serialize;

use triespell::dictionary::MemoryDictionary;
use triespell::speller::suggestion::Suggestion;
use triespell::speller::{EditDistance, Speller, SpellerConfig, TrieSpeller};

trait OutputWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool);
    fn write_suggestions(&mut self, word: &str, suggestions: &[Suggestion]);
    fn finish(&mut self) -> anyhow::Result<()>;
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool) {
        println!(
            "Input: {}\t\t[{}]",
            &word,
            if is_correct { "CORRECT" } else { "INCORRECT" }
        );
    }

    fn write_suggestions(&mut self, _word: &str, suggestions: &[Suggestion]) {
        for sugg in suggestions {
            println!("{}\t\t{}", sugg.value, sugg.frequency);
        }
        println!();
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Serialize)]
struct SuggestionRequest {
    word: String,
    is_correct: bool,
    suggestions: Vec<Suggestion>,
}

#[derive(Serialize)]
struct JsonWriter {
    results: Vec<SuggestionRequest>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { results: vec![] }
    }
}

impl OutputWriter for JsonWriter {
    fn write_correction(&mut self, word: &str, is_correct: bool) {
        self.results.push(SuggestionRequest {
            word: word.to_owned(),
            is_correct,
            suggestions: vec![],
        });
    }

    fn write_suggestions(&mut self, _word: &str, suggestions: &[Suggestion]) {
        if let Some(last) = self.results.last_mut() {
            last.suggestions = suggestions.to_vec();
        }
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

fn run(
    speller: Arc<dyn Speller + Send + Sync>,
    words: Vec<String>,
    writer: &mut dyn OutputWriter,
    is_suggesting: bool,
    is_always_suggesting: bool,
    suggest_cfg: &SpellerConfig,
) {
    for word in words {
        let is_correct = speller.is_correct(&word);
        writer.write_correction(&word, is_correct);

        if is_suggesting && (is_always_suggesting || !is_correct) {
            let suggestions = speller.suggest_with_config(&word, suggest_cfg);
            writer.write_suggestions(&word, &suggestions);
        }
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "get suggestions for provided input")]
    Suggest(SuggestArgs),

    #[options(help = "print input with correctness")]
    Check(CheckArgs),
}

#[derive(Debug, Options)]
struct SuggestArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "word frequency list (`word freq [tag]` per line)", required)]
    dictionary: PathBuf,

    #[options(help = "JSON speller config to start from")]
    config: Option<PathBuf>,

    #[options(short = "S", help = "always show suggestions even if word is correct")]
    always_suggest: bool,

    #[options(help = "maximum number of results")]
    nbest: Option<usize>,

    #[options(
        no_short,
        long = "max-distance",
        help = "maximum edit distance of suggestions (1 or 2)"
    )]
    max_distance: Option<EditDistance>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be processed")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct CheckArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "word frequency list (`word freq [tag]` per line)", required)]
    dictionary: PathBuf,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be processed")]
    inputs: Vec<String>,
}

fn read_words(inputs: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !inputs.is_empty() {
        return Ok(inputs);
    }

    eprintln!("Reading from stdin...");
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;

    Ok(buffer
        .lines()
        .map(|x| x.trim())
        .filter(|x| !x.is_empty())
        .map(|x| x.to_string())
        .collect())
}

fn load_speller(path: &Path) -> anyhow::Result<Arc<dyn Speller + Send + Sync>> {
    let dictionary = MemoryDictionary::open(path)
        .with_context(|| format!("loading dictionary {}", path.display()))?;
    log::info!("{} entries in {}", dictionary.len(), path.display());

    Ok(Arc::new(TrieSpeller::new(Arc::new(dictionary))))
}

fn writer_for(use_json: bool) -> Box<dyn OutputWriter> {
    if use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    }
}

fn suggest(args: SuggestArgs) -> anyhow::Result<()> {
    let mut suggest_cfg = match args.config.as_ref() {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("opening config {}", path.display()))?;
            SpellerConfig::from_json_reader(file)?
        }
        None => SpellerConfig::default(),
    };

    if let Some(v) = args.nbest {
        suggest_cfg.n_best = if v == 0 { None } else { Some(v) };
    }

    if let Some(v) = args.max_distance {
        suggest_cfg.max_edit_distance = v;
    }

    let mut writer = writer_for(args.use_json);
    let words = read_words(args.inputs)?;
    let speller = load_speller(&args.dictionary)?;

    run(
        speller,
        words,
        &mut *writer,
        true,
        args.always_suggest,
        &suggest_cfg,
    );

    writer.finish()
}

fn check(args: CheckArgs) -> anyhow::Result<()> {
    let mut writer = writer_for(args.use_json);
    let words = read_words(args.inputs)?;
    let speller = load_speller(&args.dictionary)?;

    run(
        speller,
        words,
        &mut *writer,
        false,
        false,
        &SpellerConfig::default(),
    );

    writer.finish()
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Suggest(args)) => suggest(args),
        Some(Command::Check(args)) => check(args),
    }
}
