use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use datelex_analysis::{
    DateNormalizationFilter, LineTokenizer, RawTokenizer, TokenStream, VecTokenStream,
};
use datelex_cli::config::{ConfigOverrides, load_config, resolve_config};
use datelex_cli::logging::redact_value;
use datelex_model::NormalizerConfig;

use crate::cli::{NormalizeArgs, PatternsArgs};
use crate::summary::print_patterns;
use crate::types::NormalizeResult;

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeResult> {
    let config = active_config(args.config.as_deref(), Some(args))?;
    let (source, text) = read_input(&args.input)?;
    let span = info_span!("normalize", source = %source);
    let _guard = span.enter();

    let stream: VecTokenStream = if args.raw {
        RawTokenizer.token_stream(&text)
    } else {
        LineTokenizer.token_stream(&text)
    };
    let mut filter = DateNormalizationFilter::from_config(stream, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    while filter.advance() {
        let token = filter.token();
        debug!(
            term = redact_value(&token.text),
            position = token.position,
            kind = ?token.kind,
            "emit"
        );
        writeln!(out, "{}", token.text).context("write output")?;
    }

    let stats = filter.stats();
    info!(
        tokens = stats.tokens,
        normalized = stats.normalized,
        implausible = stats.implausible,
        defaulted = stats.defaulted,
        passed_through = stats.passed_through,
        "normalization complete"
    );
    Ok(NormalizeResult {
        source,
        config,
        stats,
    })
}

pub fn run_patterns(args: &PatternsArgs) -> Result<()> {
    let config = active_config(args.config.as_deref(), None)?;
    print_patterns(&config);
    Ok(())
}

/// Resolve the active configuration: file, then flag overrides, then the
/// built-in default.
fn active_config(
    config_path: Option<&Path>,
    args: Option<&NormalizeArgs>,
) -> Result<NormalizerConfig> {
    let base = config_path.map(load_config).transpose()?;
    let overrides = match args {
        Some(args) => ConfigOverrides {
            output_pattern: args.output_pattern.clone(),
            output_locale: args.output_locale,
            default_value: args.default_value.clone(),
            input_patterns: args.input_patterns.clone(),
        },
        None => ConfigOverrides::default(),
    };
    Ok(resolve_config(base, overrides))
}

fn read_input(input: &Path) -> Result<(String, String)> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        Ok(("stdin".to_string(), text))
    } else {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("read input file {}", input.display()))?;
        Ok((input.display().to_string(), text))
    }
}
