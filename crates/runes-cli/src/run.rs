//! Turns parsed arguments into a printing run.

use std::fs::File;
use std::io::{self, Write};
use std::sync::Arc;

use runes_core::{error::Result, is_valid_rune};
use runes_export::print_runes;
use runes_unicode::{CodepointSet, RuneResolver, TerminalWidth};

use crate::cli::Cli;
use crate::input::{all_runes, expand, parse_token, Request};

pub fn run(cli: &Cli) -> Result<()> {
    let requests = collect_requests(cli)?;
    let mut sink = open_sink(cli)?;

    if cli.ranges {
        let set = accumulate(&requests)?;
        writeln!(sink, "{set}")?;
        sink.flush()?;
        return Ok(());
    }

    let format = cli.output_format();
    log::info!("printing {} requests as {format}", requests.len());

    let merged;
    let runes: Box<dyn Iterator<Item = u32> + '_> = if wants_all(cli) {
        Box::new(all_runes())
    } else if cli.merge {
        merged = accumulate(&requests)?;
        Box::new(merged.iter().filter(|&rune| is_valid_rune(rune)))
    } else {
        Box::new(expand(&requests))
    };

    let resolver = RuneResolver::with_unicode_data();
    let mut printer = format.printer(Arc::new(TerminalWidth::new()));
    let count = print_runes(printer.as_mut(), sink, runes.map(|rune| resolver.resolve(rune)))?;
    log::info!("printed {count} runes");
    Ok(())
}

/// No code point arguments and no `--string` at all. An empty string is
/// still a request, just one that yields nothing.
fn wants_all(cli: &Cli) -> bool {
    cli.codepoints.is_empty() && cli.strings.is_empty()
}

/// Positional tokens first, then the characters of each `--string`.
fn collect_requests(cli: &Cli) -> Result<Vec<Request>> {
    let mut requests = cli
        .codepoints
        .iter()
        .map(|token| parse_token(token))
        .collect::<Result<Vec<_>>>()?;
    requests.extend(
        cli.strings
            .iter()
            .flat_map(|text| text.chars())
            .map(|ch| Request::Single(u32::from(ch))),
    );
    Ok(requests)
}

/// Union of every request. Values beyond U+10FFFF are rejected.
fn accumulate(requests: &[Request]) -> Result<CodepointSet> {
    let mut set = CodepointSet::new();
    for request in requests {
        match *request {
            Request::Single(value) => set.set(&[value])?,
            Request::Range(from, to) => set.set_range(from, to)?,
        }
    }
    log::debug!("accumulated {} code points", set.len());
    Ok(set)
}

fn open_sink(cli: &Cli) -> Result<Box<dyn Write>> {
    Ok(match &cli.output_file {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use runes_core::RunesError;

    fn requests(args: &[&str]) -> Result<Vec<Request>> {
        let mut argv = vec!["runes"];
        argv.extend_from_slice(args);
        collect_requests(&Cli::parse_from(argv))
    }

    #[test]
    fn test_strings_follow_tokens() {
        let got = requests(&["-s", "hé", "0x41"]).unwrap();
        assert_eq!(
            got,
            vec![Request::Single(0x41), Request::Single(0x68), Request::Single(0xE9)]
        );
    }

    #[test]
    fn test_all_mode_follows_flags_not_requests() {
        let cli = |args: &[&str]| {
            let mut argv = vec!["runes"];
            argv.extend_from_slice(args);
            Cli::parse_from(argv)
        };
        assert!(wants_all(&cli(&[])));
        assert!(wants_all(&cli(&["--merge"])));
        assert!(!wants_all(&cli(&["-s", ""])));
        assert!(!wants_all(&cli(&["0x41"])));
        assert!(requests(&["-s", ""]).unwrap().is_empty());
    }

    #[test]
    fn test_bad_token_is_invalid_input() {
        assert!(matches!(requests(&["nope"]), Err(RunesError::InvalidInput(_))));
    }

    #[test]
    fn test_accumulate_merges_and_deduplicates() {
        let set = accumulate(&[
            Request::Single(0x43),
            Request::Range(0x41, 0x42),
            Request::Single(0x41),
        ])
        .unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0x41, 0x42, 0x43]);
        assert_eq!(set.serialize(), "[U+0041 'A'-U+0043 'C']");
    }

    #[test]
    fn test_accumulate_rejects_out_of_domain() {
        let err = accumulate(&[Request::Range(0x10FFF0, 0x110000)]).unwrap_err();
        assert!(matches!(err, RunesError::Domain(_)));
        assert!(accumulate(&[Request::Single(0x110000)]).is_err());
    }
}
