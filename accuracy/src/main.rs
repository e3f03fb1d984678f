use chrono::prelude::*;
use std::error::Error;
use std::sync::Arc;
use std::time::Instant;

use distance::damerau_levenshtein;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;
use structopt::clap::{App, AppSettings, Arg};
use triespell::dictionary::MemoryDictionary;
use triespell::speller::suggestion::Suggestion;
use triespell::speller::{EditDistance, Speller, SpellerConfig, TrieSpeller};

static CFG: SpellerConfig = SpellerConfig {
    n_best: Some(10),
    max_edit_distance: EditDistance::Two,
};

fn load_words(
    path: &str,
    max_words: Option<usize>,
) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    Ok(rdr
        .records()
        .filter_map(Result::ok)
        .filter_map(|r| {
            r.get(0)
                .and_then(|x| r.get(1).map(|y| (x.to_string(), y.to_string())))
        })
        .take(max_words.unwrap_or(std::usize::MAX))
        .collect())
}

#[derive(Debug, Default, Serialize, PartialOrd, Ord, PartialEq, Eq, Clone, Copy)]
struct Time {
    secs: u64,
    subsec_nanos: u32,
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let ms = self.secs * 1000 + (self.subsec_nanos as u64 / 1_000_000);
        write!(f, "{}ms", ms)
    }
}

impl From<std::time::Duration> for Time {
    fn from(d: std::time::Duration) -> Time {
        Time {
            secs: d.as_secs(),
            subsec_nanos: d.subsec_nanos(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AccuracyResult<'a> {
    input: &'a str,
    expected: &'a str,
    distance: usize,
    suggestions: Vec<Suggestion>,
    position: Option<usize>,
    time: Time,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    dictionary: &'a str,
    dictionary_size: usize,
    config: &'a SpellerConfig,
    summary: Summary,
    results: Vec<AccuracyResult<'a>>,
    start_timestamp: String,
    total_time: Time,
}

#[derive(Serialize, Default, Debug, Clone)]
struct Summary {
    total_words: u32,
    first_position: u32,
    top_five: u32,
    any_position: u32,
    no_suggestions: u32,
    only_wrong: u32,
    slowest_lookup: Time,
    fastest_lookup: Time,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        let percent = |v: u32| -> String {
            if self.total_words == 0 {
                return "-".to_string();
            }
            format!("{:.2}%", v as f32 / self.total_words as f32 * 100f32)
        };

        write!(
            f,
            "[#1] {} [^5] {} [any] {} [none] {} [wrong] {} [fast] {} [slow] {}",
            percent(self.first_position),
            percent(self.top_five),
            percent(self.any_position),
            percent(self.no_suggestions),
            percent(self.only_wrong),
            self.fastest_lookup,
            self.slowest_lookup
        )
    }
}

impl Summary {
    fn new(results: &[AccuracyResult<'_>]) -> Summary {
        let mut summary = Summary::default();

        results.iter().for_each(|result| {
            summary.total_words += 1;

            if let Some(position) = result.position {
                summary.any_position += 1;

                if position == 0 {
                    summary.first_position += 1;
                }

                if position < 5 {
                    summary.top_five += 1;
                }
            } else if result.suggestions.is_empty() {
                summary.no_suggestions += 1;
            } else {
                summary.only_wrong += 1;
            }
        });

        if let Some(slowest) = results.iter().map(|x| x.time).max() {
            summary.slowest_lookup = slowest;
        }
        if let Some(fastest) = results.iter().map(|x| x.time).min() {
            summary.fastest_lookup = fastest;
        }

        summary
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let matches = App::new("triespell-accuracy")
        .setting(AppSettings::ArgRequiredElseHelp)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Accuracy testing for triespell.")
        .arg(
            Arg::with_name("config")
                .short("c")
                .takes_value(true)
                .help("Provide JSON config file to override test defaults"),
        )
        .arg(
            Arg::with_name("dictionary")
                .value_name("DICTIONARY")
                .required(true)
                .help("Word frequency list, one `word freq [tag]` entry per line"),
        )
        .arg(
            Arg::with_name("words")
                .value_name("WORDS")
                .required(true)
                .help("The 'input -> expected' list in tab-delimited value file (TSV)"),
        )
        .arg(
            Arg::with_name("json-output")
                .short("o")
                .value_name("JSON-OUTPUT")
                .help("The file path for the JSON report output"),
        )
        .arg(
            Arg::with_name("max-words")
                .short("w")
                .takes_value(true)
                .help("Truncate typos list to max number of words specified"),
        )
        .arg(
            Arg::with_name("max-distance")
                .short("m")
                .takes_value(true)
                .help("Maximum edit distance of suggestions (1 or 2)"),
        )
        .get_matches();

    let mut cfg: SpellerConfig = match matches.value_of("config") {
        Some(path) => SpellerConfig::from_json_reader(std::fs::File::open(path)?)?,
        None => CFG.clone(),
    };

    if let Some(v) = matches.value_of("max-distance") {
        cfg.max_edit_distance = v.parse::<EditDistance>()?;
    }

    let dictionary_path = matches.value_of("dictionary").unwrap_or_default();
    let dictionary = MemoryDictionary::open(dictionary_path)?;
    let dictionary_size = dictionary.len();
    let speller = TrieSpeller::new(Arc::new(dictionary));

    let words = load_words(
        matches.value_of("words").unwrap_or_default(),
        matches
            .value_of("max-words")
            .and_then(|x| x.parse::<usize>().ok()),
    )?;

    let pb = ProgressBar::new(words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{pos}/{len} [{percent}%] {wide_bar} {elapsed_precise}"),
    );

    let start_timestamp = Local::now().to_rfc3339();
    let start_time = Instant::now();
    let results = words
        .par_iter()
        .progress_with(pb)
        .map(|(input, expected)| {
            let now = Instant::now();
            let suggestions = speller.suggest_with_config(input, &cfg);
            let time = Time::from(now.elapsed());

            let position = suggestions.iter().position(|x| x.value == expected);

            let distance = damerau_levenshtein(input, expected);
            AccuracyResult {
                input,
                expected,
                distance,
                time,
                suggestions,
                position,
            }
        })
        .collect::<Vec<_>>();

    let total_time = Time::from(start_time.elapsed());

    let summary = Summary::new(&results);
    println!("{}", summary);

    if let Some(path) = matches.value_of("json-output") {
        let output = std::fs::File::create(path)?;
        let report = Report {
            dictionary: dictionary_path,
            dictionary_size,
            config: &cfg,
            summary,
            results,
            start_timestamp,
            total_time,
        };
        println!("Writing JSON report…");
        serde_json::to_writer_pretty(output, &report)?;
    }

    println!("Done!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result<'a>(position: Option<usize>, suggestions: &[&str], ms: u32) -> AccuracyResult<'a> {
        AccuracyResult {
            input: "cot",
            expected: "cat",
            distance: 1,
            suggestions: suggestions
                .iter()
                .map(|s| Suggestion::new((*s).into(), 1))
                .collect(),
            position,
            time: Time {
                secs: 0,
                subsec_nanos: ms * 1_000_000,
            },
        }
    }

    #[test]
    fn summary_buckets() {
        let results = vec![
            result(Some(0), &["cat"], 3),
            result(Some(6), &["a", "b", "c", "d", "e", "f", "cat"], 1),
            result(None, &[], 2),
            result(None, &["bat"], 5),
        ];
        let summary = Summary::new(&results);

        assert_eq!(summary.total_words, 4);
        assert_eq!(summary.first_position, 1);
        assert_eq!(summary.top_five, 1);
        assert_eq!(summary.any_position, 2);
        assert_eq!(summary.no_suggestions, 1);
        assert_eq!(summary.only_wrong, 1);
        assert_eq!(summary.fastest_lookup.to_string(), "1ms");
        assert_eq!(summary.slowest_lookup.to_string(), "5ms");
    }

    #[test]
    fn empty_summary() {
        let summary = Summary::new(&[]);
        assert_eq!(summary.total_words, 0);
        assert!(summary.to_string().starts_with("[#1] -"));
    }
}
