// src/cli.rs

use std::{env, error::Error, path::PathBuf};

use crate::config::SyncOptions;
use crate::csv;
use crate::progress::ConsoleProgress;
use crate::runner;
use crate::sink::CsvSink;
use crate::source::FileSource;

pub struct CliArgs {
    pub options: SyncOptions,
    pub list: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_cli(env::args().skip(1).collect())?;
    let opts = &args.options;

    let mut source = FileSource::new(opts.snapshot_dir.clone());
    let mut sink = CsvSink::new(opts.out.clone());
    let mut progress = ConsoleProgress;

    let summary = runner::run(opts, &mut source, &mut sink, Some(&mut progress));

    if args.list {
        let rows: Vec<Vec<String>> = sink
            .entries()
            .iter()
            .map(|e| {
                vec![
                    e.start.format("%Y-%m-%d %H:%M").to_string(),
                    e.end.format("%H:%M").to_string(),
                    e.name.clone(),
                    e.location.clone(),
                ]
            })
            .collect();
        print!("{}", csv::rows_to_string(&rows, &None));
    } else {
        let path = sink.write()?;
        println!("Wrote {} ({} events)", path.display(), sink.entries().len());
    }

    if summary.pages_failed > 0 {
        eprintln!(
            "{} page(s) failed, {} fragment(s) skipped",
            summary.pages_failed, summary.fragments_skipped
        );
    }
    Ok(())
}

/// Flags override anything coming from `--config`, whatever the order.
fn parse_cli(argv: Vec<String>) -> Result<CliArgs, Box<dyn Error>> {
    let mut config: Option<PathBuf> = None;
    let mut snapshots: Option<PathBuf> = None;
    let mut pages: Option<(u32, u32)> = None;
    let mut out: Option<PathBuf> = None;
    let mut list = false;

    let mut args = argv.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--config" => config = Some(PathBuf::from(args.next().ok_or("Missing value for --config")?)),
            "--snapshots" => snapshots = Some(PathBuf::from(args.next().ok_or("Missing value for --snapshots")?)),
            "--pages" => {
                let v = args.next().ok_or("Missing value for --pages")?;
                pages = Some(parse_page_range(&v)?);
            }
            "-o" | "--out" => out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--list" => list = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    let mut options = match config {
        Some(path) => SyncOptions::load(&path)?,
        None => SyncOptions::default(),
    };
    if let Some(dir) = snapshots {
        options.snapshot_dir = dir;
    }
    if let Some((first, last)) = pages {
        options.first_page = first;
        options.last_page = last;
    }
    if let Some(path) = out {
        options.out = path;
    }

    Ok(CliArgs { options, list })
}

/// "3" → (3,3); "1-7" → (1,7).
fn parse_page_range(s: &str) -> Result<(u32, u32), Box<dyn Error>> {
    let parsed = if let Some(dash) = s.find('-') {
        let a: u32 = s[..dash].trim().parse()?;
        let b: u32 = s[dash + 1..].trim().parse()?;
        (a, b)
    } else {
        let v: u32 = s.trim().parse()?;
        (v, v)
    };
    if parsed.0 == 0 || parsed.0 > parsed.1 {
        return Err(format!("Invalid page range: {}", s).into());
    }
    Ok(parsed)
}
