//! Command implementations for the numtrie CLI.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::document::field::Field;
use crate::document::{DateTimeField, NumericField};
use crate::error::{NumtrieError, Result};
use crate::numeric::config::NumericConfig;
use crate::numeric::ladder::ladder_with_config;
use crate::numeric::prefix_coded::PrefixCoded;
use crate::query::NumericRangeQuery;

/// Execute a CLI command.
pub fn execute_command(args: NumtrieArgs) -> Result<()> {
    let config = load_config(&args)?;
    match &args.command {
        Command::Encode(encode_args) => encode_value(encode_args, &args),
        Command::Decode(decode_args) => decode_term(decode_args, &args),
        Command::Ladder(ladder_args) => show_ladder(ladder_args, config, &args),
        Command::Split(split_args) => split_range(split_args, config, &args),
        Command::Analyze(analyze_args) => analyze_value(analyze_args, config, &args),
    }
}

/// Load the numeric config file, or fall back to defaults.
fn load_config(args: &NumtrieArgs) -> Result<NumericConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading numeric config from: {}", path.display());
            NumericConfig::from_file(path)
        }
        None => Ok(NumericConfig::default()),
    }
}

fn with_step(config: NumericConfig, step: Option<u32>) -> Result<NumericConfig> {
    let Some(precision_step) = step else {
        return Ok(config);
    };
    let config = NumericConfig {
        precision_step,
        ..config
    };
    config.validate()?;
    Ok(config)
}

fn term_result(term: &PrefixCoded) -> TermResult {
    TermResult {
        value: term.to_i64(),
        shift: term.shift(),
        term: term.to_string(),
    }
}

/// Encode one value at one shift.
fn encode_value(args: &EncodeArgs, cli_args: &NumtrieArgs) -> Result<()> {
    let term = PrefixCoded::new(args.value, args.shift)?;
    output_result("Encoded term", &term_result(&term), cli_args)
}

/// Decode a hex term.
fn decode_term(args: &DecodeArgs, cli_args: &NumtrieArgs) -> Result<()> {
    let result = decoded_term(&args.term)?;
    output_result("Decoded term", &result, cli_args)
}

fn decoded_term(hex: &str) -> Result<TermResult> {
    let term = PrefixCoded::try_from(parse_hex(hex)?)?;
    Ok(term_result(&term))
}

/// Print the ladder of one value.
fn show_ladder(args: &LadderArgs, config: NumericConfig, cli_args: &NumtrieArgs) -> Result<()> {
    let config = with_step(config, args.step)?;
    let terms = ladder_with_config(args.value, &config)?;
    debug!("{} expands to {} terms", args.value, terms.len());

    let result = LadderResult {
        value: args.value,
        precision_step: config.precision_step,
        terms: terms.iter().map(term_result).collect(),
    };
    output_result("Precision ladder", &result, cli_args)
}

/// Split an inclusive range into term ranges.
fn split_range(args: &SplitArgs, config: NumericConfig, cli_args: &NumtrieArgs) -> Result<()> {
    let config = with_step(config, args.step)?;
    let query =
        NumericRangeQuery::new("value", Some(args.lower), Some(args.upper)).with_config(config)?;

    let ranges = query
        .term_ranges()?
        .into_iter()
        .map(|range| {
            let (min_value, max_value) = range.value_bounds();
            TermRangeResult {
                shift: range.shift,
                lower: range.lower.to_string(),
                upper: range.upper.to_string(),
                min_value,
                max_value,
            }
        })
        .collect();

    let result = SplitResult {
        lower: args.lower,
        upper: args.upper,
        precision_step: config.precision_step,
        ranges,
    };
    output_result("Term ranges", &result, cli_args)
}

/// Build a field from the argument and print its tokens.
fn analyze_value(args: &AnalyzeArgs, config: NumericConfig, cli_args: &NumtrieArgs) -> Result<()> {
    let options = crate::document::field::DEFAULT_NUMERIC_INDEXING_OPTIONS;
    let (field, tokens) = match args.kind {
        FieldKind::Numeric => {
            let value: i64 = args.value.trim().parse().map_err(|e| {
                NumtrieError::invalid_argument(format!("{:?} is not an integer: {e}", args.value))
            })?;
            let field = NumericField::with_config(&args.name, value, options, config)?;
            let tokens = field.tokens()?;
            (Box::new(field) as Box<dyn Field>, tokens)
        }
        FieldKind::Datetime => {
            let datetime = DateTime::parse_from_rfc3339(args.value.trim())
                .map_err(|e| {
                    NumtrieError::invalid_argument(format!(
                        "{:?} is not an RFC 3339 timestamp: {e}",
                        args.value
                    ))
                })?
                .with_timezone(&Utc);
            let field = DateTimeField::with_config(&args.name, datetime, options, config)?;
            let tokens = field.tokens()?;
            (Box::new(field) as Box<dyn Field>, tokens)
        }
    };

    let (length, _) = field.analyze()?;
    let result = AnalysisResult {
        name: field.name().to_string(),
        options: field.options().to_string(),
        value: PrefixCoded::try_from(field.value())?.to_string(),
        length,
        tokens: tokens
            .iter()
            .map(|token| TokenResult {
                term: token.to_string(),
                start_offset: token.start_offset,
                end_offset: token.end_offset,
                position: token.position,
                token_type: format!("{:?}", token.token_type),
            })
            .collect(),
    };
    output_result("Field analysis", &result, cli_args)
}

/// Parse a hex string into bytes.
pub fn parse_hex(hex: &str) -> Result<Vec<u8>> {
    let hex = hex.trim();
    if hex.len() % 2 != 0 {
        return Err(NumtrieError::invalid_argument(format!(
            "hex term {hex:?} has an odd number of digits"
        )));
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| {
                    NumtrieError::invalid_argument(format!("invalid hex digits in {hex:?}"))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("5f01").unwrap(), vec![0x5F, 0x01]);
        assert_eq!(parse_hex("5F01").unwrap(), vec![0x5F, 0x01]);
        assert!(parse_hex("5f0").is_err());
        assert!(parse_hex("zz").is_err());
        assert!(parse_hex("é1").is_err());
    }

    #[test]
    fn test_parse_hex_round_trips_display() {
        let term = PrefixCoded::new(-123_456_789, 12).unwrap();
        let bytes = parse_hex(&term.to_string()).unwrap();
        assert_eq!(bytes, term.as_bytes());
    }

    #[test]
    fn test_decoded_term_reports_canonical_hex() {
        let term = PrefixCoded::new(-42, 0).unwrap();
        let padded = format!("  {}\n", term.to_string().to_ascii_uppercase());

        let result = decoded_term(&padded).unwrap();
        assert_eq!(result.term, term.to_string());
        assert_eq!(result.value, -42);
        assert_eq!(result.shift, 0);

        assert!(matches!(
            decoded_term("2001"),
            Err(NumtrieError::MalformedTerm(_))
        ));
    }

    #[test]
    fn test_with_step_overrides() {
        let config = with_step(NumericConfig::default(), Some(8)).unwrap();
        assert_eq!(config.precision_step, 8);
        assert!(with_step(NumericConfig::default(), Some(0)).is_err());
        assert_eq!(
            with_step(NumericConfig::default(), None).unwrap(),
            NumericConfig::default()
        );
    }
}
