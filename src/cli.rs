// Command Line Interface
// Manual argument parsing for the score / analyze / review / config commands

use anyhow::{bail, Context};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::models::{FeatureVector, Verdict};
use crate::services::config_store::{AppConfig, ConfigStore};
use crate::services::detection::TextAnalyzer;
use crate::services::providers::{PrecomputedReview, StaticFeatures, StaticVerdict};
use crate::services::scan::{assess_review, build_scan_result, scan_url};
use crate::services::trust::TrustCalculator;

pub const USAGE: &str = "Usage:
  trustlens score <url> [--verdict 0|1] [--features a,b,...]
  trustlens analyze [--file <path> | <text>...]
  trustlens review --fake 0|1 --confidence <p> [--file <path> | <text>...]
  trustlens config [--show | --init]

Global options:
  --config <dir>   config directory (default: platform config dir/trustlens)
  --out <path>     also write the JSON result to a file

Notes:
  - --verdict defaults to 0 (malicious); 1 marks the URL as benign.
  - --features takes 30 comma-separated values in {-1, 0, 1}.
  - --features runs the full scan and echoes the validated vector.
  - review takes the fake-review classifier output (--fake, --confidence in [0, 1]).
  - analyze and review read stdin when neither --file nor text is given.
  - TRUSTLENS_LOG_DIR, TRUSTLENS_DISABLE_FILE_LOG and RUST_LOG control logging.";

const VALUE_FLAGS: &[&str] = &["--config", "--out", "--verdict", "--features", "--file", "--fake", "--confidence"];

#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("invalid value for {flag}: {value}")]
    InvalidValue { flag: &'static str, value: String },
    #[error("option {0} requires a value")]
    MissingValue(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TextSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    Show,
    Init,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Score {
        url: String,
        verdict: Verdict,
        features: Option<FeatureVector>,
    },
    Analyze(TextSource),
    Review {
        source: TextSource,
        is_fake: bool,
        confidence: f64,
    },
    Config(ConfigAction),
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: Command,
    pub config_dir: Option<PathBuf>,
    pub out: Option<PathBuf>,
}

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

/// Arguments that are neither flags nor flag values.
fn positionals(args: &[String]) -> Result<Vec<String>, CliError> {
    let mut out = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if VALUE_FLAGS.contains(&arg.as_str()) {
            if iter.next().is_none() {
                return Err(CliError::MissingValue(arg.clone()));
            }
        } else if !arg.starts_with("--") || arg == "--" {
            out.push(arg.clone());
        }
    }
    Ok(out)
}

fn parse_verdict(value: Option<String>) -> Result<Verdict, CliError> {
    match value {
        None => Ok(Verdict::Malicious),
        Some(v) => v
            .trim()
            .parse::<i64>()
            .map(Verdict::from_label)
            .map_err(|_| CliError::InvalidValue { flag: "--verdict", value: v }),
    }
}

fn parse_features(value: Option<String>) -> Result<Option<FeatureVector>, CliError> {
    let Some(raw) = value else {
        return Ok(None);
    };
    let invalid = || CliError::InvalidValue { flag: "--features", value: raw.clone() };

    let values = raw
        .split(',')
        .map(|s| s.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;
    FeatureVector::from_slice(&values).map(Some).map_err(|_| invalid())
}

fn parse_fake(value: Option<String>) -> Result<bool, CliError> {
    match value.as_deref().map(str::trim) {
        None => Err(CliError::Missing("--fake")),
        Some("1") | Some("true") => Ok(true),
        Some("0") | Some("false") => Ok(false),
        Some(other) => Err(CliError::InvalidValue { flag: "--fake", value: other.to_string() }),
    }
}

fn parse_confidence(value: Option<String>) -> Result<f64, CliError> {
    let raw = value.ok_or(CliError::Missing("--confidence"))?;
    match raw.trim().parse::<f64>() {
        Ok(p) if (0.0..=1.0).contains(&p) => Ok(p),
        _ => Err(CliError::InvalidValue { flag: "--confidence", value: raw }),
    }
}

fn text_source(args: &[String], rest: &[String]) -> TextSource {
    if let Some(path) = parse_arg_value(args, "--file") {
        TextSource::File(PathBuf::from(path))
    } else if rest.is_empty() {
        TextSource::Stdin
    } else {
        TextSource::Inline(rest.join(" "))
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: &[String]) -> Result<CliArgs, CliError> {
    let config_dir = parse_arg_value(args, "--config").map(PathBuf::from);
    let out = parse_arg_value(args, "--out").map(PathBuf::from);

    if args.is_empty() || has_flag(args, "--help") || has_flag(args, "-h") {
        return Ok(CliArgs { command: Command::Help, config_dir, out });
    }

    let positional = positionals(args)?;
    let (name, rest) = positional.split_first().ok_or(CliError::Missing("command"))?;

    let command = match name.as_str() {
        "score" => Command::Score {
            url: rest.first().cloned().ok_or(CliError::Missing("url"))?,
            verdict: parse_verdict(parse_arg_value(args, "--verdict"))?,
            features: parse_features(parse_arg_value(args, "--features"))?,
        },
        "analyze" => Command::Analyze(text_source(args, rest)),
        "review" => Command::Review {
            is_fake: parse_fake(parse_arg_value(args, "--fake"))?,
            confidence: parse_confidence(parse_arg_value(args, "--confidence"))?,
            source: text_source(args, rest),
        },
        "config" => {
            if has_flag(args, "--init") {
                Command::Config(ConfigAction::Init)
            } else {
                Command::Config(ConfigAction::Show)
            }
        }
        "help" => Command::Help,
        other => return Err(CliError::UnknownCommand(other.to_string())),
    };

    Ok(CliArgs { command, config_dir, out })
}

fn open_store(cli: &CliArgs) -> anyhow::Result<ConfigStore> {
    match &cli.config_dir {
        Some(dir) => Ok(ConfigStore::new(dir.clone())),
        None => Ok(ConfigStore::open_default()?),
    }
}

fn read_source(source: &TextSource) -> anyhow::Result<String> {
    match source {
        TextSource::Inline(text) => Ok(text.clone()),
        TextSource::File(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read file failed: {}", path.display())),
        TextSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("read stdin failed")?;
            Ok(buf)
        }
    }
}

fn emit<T: Serialize>(value: &T, config: &AppConfig, out: Option<&PathBuf>) -> anyhow::Result<String> {
    let json = if config.report.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    if let Some(path) = out {
        std::fs::write(path, &json).with_context(|| format!("write output failed: {}", path.display()))?;
        info!(path = %path.display(), "cli.output.written");
    }
    Ok(json)
}

/// Run a parsed command and return the text to print.
pub fn execute(cli: &CliArgs) -> anyhow::Result<String> {
    if cli.command == Command::Help {
        return Ok(USAGE.to_string());
    }

    let store = open_store(cli)?;
    let config = store.load().with_context(|| format!("load config failed: {}", store.config_file().display()))?;

    match &cli.command {
        Command::Score { url, verdict, features } => {
            if url.trim().is_empty() {
                bail!("url must not be empty");
            }
            let lexicon = config.build_lexicon();
            let calculator = TrustCalculator::new(&lexicon);
            let result = match features {
                Some(fv) => {
                    let raw = fv.to_array().iter().map(|&v| i64::from(v)).collect();
                    scan_url(url, &StaticFeatures(raw), &StaticVerdict(*verdict), &calculator)?
                }
                None => build_scan_result(url, *verdict, None, &calculator),
            };
            emit(&result, &config, cli.out.as_ref())
        }
        Command::Analyze(source) => {
            let text = read_source(source)?;
            let lexicon = config.build_lexicon();
            let report = TextAnalyzer::new(&lexicon).analyze_text(&text);
            emit(&report, &config, cli.out.as_ref())
        }
        Command::Review { source, is_fake, confidence } => {
            let text = read_source(source)?;
            let lexicon = config.build_lexicon();
            let classifier = PrecomputedReview { is_fake: *is_fake, confidence: *confidence };
            let assessment = assess_review(&text, &classifier, &TextAnalyzer::new(&lexicon))?;
            emit(&assessment, &config, cli.out.as_ref())
        }
        Command::Config(ConfigAction::Init) => {
            store.save(&config)?;
            Ok(format!("Config written to {}", store.config_file().display()))
        }
        Command::Config(ConfigAction::Show) => emit(&config, &config, cli.out.as_ref()),
        Command::Help => Ok(USAGE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FEATURE_COUNT;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_score() {
        let cli = parse_args(&args(&["--config", "/tmp/cfg", "score", "http://example.com", "--verdict", "1"])).unwrap();
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/cfg")));
        assert_eq!(
            cli.command,
            Command::Score { url: "http://example.com".to_string(), verdict: Verdict::Benign, features: None }
        );
    }

    #[test]
    fn test_parse_score_defaults_to_malicious() {
        let cli = parse_args(&args(&["score", "http://example.com"])).unwrap();
        assert!(matches!(cli.command, Command::Score { verdict: Verdict::Malicious, .. }));
    }

    #[test]
    fn test_parse_features() {
        let mut values = vec!["0"; FEATURE_COUNT];
        values[7] = "1";
        let joined = values.join(",");
        let cli = parse_args(&args(&["score", "https://a.org", "--features", &joined])).unwrap();
        match cli.command {
            Command::Score { features: Some(fv), .. } => assert_eq!(fv.to_array()[7], 1),
            other => panic!("unexpected command {:?}", other),
        }

        let err = parse_args(&args(&["score", "https://a.org", "--features", "1,0"])).unwrap_err();
        assert!(matches!(err, CliError::InvalidValue { flag: "--features", .. }));
    }

    #[test]
    fn test_parse_analyze_sources() {
        let inline = parse_args(&args(&["analyze", "great", "product", "--out", "r.json"])).unwrap();
        assert_eq!(inline.command, Command::Analyze(TextSource::Inline("great product".to_string())));
        assert_eq!(inline.out, Some(PathBuf::from("r.json")));

        let file = parse_args(&args(&["analyze", "--file", "review.txt"])).unwrap();
        assert_eq!(file.command, Command::Analyze(TextSource::File(PathBuf::from("review.txt"))));

        let stdin = parse_args(&args(&["analyze"])).unwrap();
        assert_eq!(stdin.command, Command::Analyze(TextSource::Stdin));
    }

    #[test]
    fn test_parse_review() {
        let cli = parse_args(&args(&["review", "--fake", "1", "--confidence", "0.93", "best", "buy", "ever"])).unwrap();
        assert_eq!(
            cli.command,
            Command::Review {
                source: TextSource::Inline("best buy ever".to_string()),
                is_fake: true,
                confidence: 0.93,
            }
        );

        assert_eq!(parse_args(&args(&["review", "text"])).unwrap_err(), CliError::Missing("--fake"));
        assert_eq!(
            parse_args(&args(&["review", "--fake", "0", "--confidence", "93", "text"])).unwrap_err(),
            CliError::InvalidValue { flag: "--confidence", value: "93".to_string() }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_args(&args(&["frobnicate"])).unwrap_err(), CliError::UnknownCommand("frobnicate".to_string()));
        assert_eq!(parse_args(&args(&["score"])).unwrap_err(), CliError::Missing("url"));
        assert_eq!(parse_args(&args(&["score", "x", "--verdict"])).unwrap_err(), CliError::MissingValue("--verdict".to_string()));
        assert!(matches!(
            parse_args(&args(&["score", "x", "--verdict", "yes"])).unwrap_err(),
            CliError::InvalidValue { flag: "--verdict", .. }
        ));
        assert_eq!(parse_args(&[]).unwrap().command, Command::Help);
    }

    #[test]
    fn test_execute_score_and_analyze() {
        let dir = std::env::temp_dir().join(format!("trustlens_cli_{}", std::process::id()));
        let config_dir = Some(dir.clone());

        let score = CliArgs {
            command: Command::Score { url: "http://example.com".to_string(), verdict: Verdict::Benign, features: None },
            config_dir: config_dir.clone(),
            out: None,
        };
        let json: serde_json::Value = serde_json::from_str(&execute(&score).unwrap()).unwrap();
        assert_eq!(json["trust_score"], 90);
        assert_eq!(json["label"], "Safe");

        let analyze = CliArgs {
            command: Command::Analyze(TextSource::Inline("love this product great quality best buy ever".to_string())),
            config_dir: config_dir.clone(),
            out: None,
        };
        let json: serde_json::Value = serde_json::from_str(&execute(&analyze).unwrap()).unwrap();
        assert_eq!(json["basic_metrics"]["word_count"], 8);

        let review = CliArgs {
            command: Command::Review {
                source: TextSource::Inline("love this product great quality best buy ever".to_string()),
                is_fake: true,
                confidence: 0.91234,
            },
            config_dir: config_dir.clone(),
            out: None,
        };
        let json: serde_json::Value = serde_json::from_str(&execute(&review).unwrap()).unwrap();
        assert_eq!(json["result"], "Fake / Spam Review");
        assert_eq!(json["confidence"], 91.23);

        let mut raw = vec!["0"; FEATURE_COUNT];
        raw[7] = "1";
        let scan = CliArgs {
            command: Command::Score {
                url: "http://example.com".to_string(),
                verdict: Verdict::Malicious,
                features: parse_features(Some(raw.join(","))).unwrap(),
            },
            config_dir: config_dir.clone(),
            out: None,
        };
        let json: serde_json::Value = serde_json::from_str(&execute(&scan).unwrap()).unwrap();
        assert_eq!(json["label"], "Phishing");
        assert_eq!(json["trust_score"], 35);
        assert_eq!(json["features"]["https"], 1);

        let init = CliArgs { command: Command::Config(ConfigAction::Init), config_dir, out: None };
        assert!(execute(&init).unwrap().starts_with("Config written to"));
        assert!(dir.join("config.json").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
