use std::io::{BufRead, BufReader, Write};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use tracing::{debug, info, warn};

use idxsheet::config::{SheetOptions, Thresholds, MAX_MISMATCHES};

/// idxsheet CLI
#[derive(Parser)]
#[command(name = "idxsheet")]
#[command(version)]
#[command(about = "Sample index catalog, index annotation and lane checks", long_about = None)]
struct Cli {
    /// Only errors are printed to stderr.
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Debug information is printed to stderr.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all kit families and their name prefixes
    Families {
        /// Show only this family (e.g. "rpi", "haloplex-ht")
        #[arg(long)]
        family: Option<String>,
    },

    /// Resolve index names or aliases (e.g. "i7", "RPI23") to sequences
    Lookup {
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Append matching catalog names to each line holding an index sequence
    Annotate {
        /// Input file (default: stdin)
        input: Option<String>,
        /// Highest mismatch count reported
        #[arg(
            long,
            default_value_t = Thresholds::default().max_mismatches,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(0..=MAX_MISMATCHES as u64)
        )]
        mismatches: usize,
        /// Emit a header row first
        #[arg(long)]
        header: bool,
        /// Threads (0/None = all)
        #[arg(long)]
        threads: Option<usize>,
    },

    /// Check that index sequences can share one lane
    CheckLane {
        #[arg(required = true)]
        sequences: Vec<String>,
        #[arg(long, default_value_t = Thresholds::default().min_hamming)]
        min_hamming: usize,
        #[arg(long, default_value_t = Thresholds::default().min_levenshtein)]
        min_levenshtein: usize,
    },

    /// Report catalog barcodes that are identical or 1-2 mismatches apart
    Overlaps {
        /// Emit CSV to stdout
        #[arg(long)]
        csv: bool,
    },

    /// Validate a sample sheet CSV (file name must be <FCID>.csv)
    CheckSheet {
        sheet: String,
        #[arg(long, default_value_t = Thresholds::default().min_hamming)]
        min_hamming: usize,
        #[arg(long, default_value_t = Thresholds::default().min_levenshtein)]
        min_levenshtein: usize,
        /// Sample ids map to the index sequence plus a trailing 'A'
        #[arg(long)]
        append_a: bool,
        /// Fill empty index fields from sample ids, sort, and write the sheet here
        #[arg(long)]
        sorted_out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        tracing::Level::ERROR
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match cli.command {
        Commands::Families { family } => cmd_families(family.as_deref())?,
        Commands::Lookup { names } => cmd_lookup(&names)?,
        Commands::Annotate { input, mismatches, header, threads } => cmd_annotate(input, mismatches, header, threads)?,
        Commands::CheckLane { sequences, min_hamming, min_levenshtein } => {
            if !cmd_check_lane(&sequences, min_hamming, min_levenshtein) {
                std::process::exit(1);
            }
        }
        Commands::Overlaps { csv } => cmd_overlaps(csv)?,
        Commands::CheckSheet { sheet, min_hamming, min_levenshtein, append_a, sorted_out } => {
            let thresholds = Thresholds { min_hamming, min_levenshtein, ..Default::default() };
            let opts = SheetOptions { thresholds, append_a };
            if !cmd_check_sheet(&sheet, &opts, sorted_out)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_df(df: &DataFrame) {
    // Read by the polars pretty-printer; show every row and full cell width.
    std::env::set_var("POLARS_FMT_TABLE_FORMATTING", "UTF8_FULL");
    std::env::set_var("POLARS_FMT_MAX_COLS", "100000");
    std::env::set_var("POLARS_FMT_MAX_ROWS", "1000000");
    std::env::set_var("POLARS_FMT_STR_LEN", "100000");
    std::env::set_var("POLARS_TABLE_WIDTH", "65535");
    println!("{}", df);
}

fn cmd_families(family: Option<&str>) -> Result<()> {
    let mut rows = idxsheet::list_families_rows();
    if let Some(id) = family {
        let f = idxsheet::kits::get_family(id).ok_or_else(|| anyhow!("Unknown family '{id}'. Run `idxsheet families` to list them."))?;
        rows.retain(|r| r.0 == f.id.0);
    }
    let df = df!(
        "family"      => rows.iter().map(|r| r.0.clone()).collect::<Vec<_>>(),
        "description" => rows.iter().map(|r| r.1.clone()).collect::<Vec<_>>(),
        "prefix"      => rows.iter().map(|r| r.2.clone()).collect::<Vec<_>>(),
        "aliases"     => rows.iter().map(|r| r.3.clone()).collect::<Vec<_>>(),
        "barcodes"    => rows.iter().map(|r| r.4 as u64).collect::<Vec<_>>(),
        "length"      => rows.iter().map(|r| r.5 as u64).collect::<Vec<_>>(),
    )?;
    print_df(&df);
    Ok(())
}

fn cmd_lookup(names: &[String]) -> Result<()> {
    let lookup = idxsheet::catalog::lookup()?;
    let mut unknown = Vec::new();
    for name in names {
        match lookup.get(name) {
            Some(seq) => {
                let (label, _) = idxsheet::kit::split_label(name);
                let family = idxsheet::kits::family_for_alias(label).map(|f| f.id.0).unwrap_or("-");
                println!("{name}\t{seq}\t{family}");
            }
            None => unknown.push(name.as_str()),
        }
    }
    if !unknown.is_empty() {
        bail!("Unknown index name(s): {}. Use `idxsheet families` to see the accepted prefixes.", unknown.join(", "));
    }
    Ok(())
}

fn cmd_annotate(input: Option<String>, mismatches: usize, header: bool, threads: Option<usize>) -> Result<()> {
    let reader: Box<dyn BufRead> = match input.as_deref() {
        None | Some("-") => Box::new(BufReader::new(std::io::stdin())),
        Some(p) => Box::new(BufReader::new(std::fs::File::open(p).with_context(|| format!("opening {p}"))?)),
    };
    let records = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    let catalog = idxsheet::catalog::catalog()?;
    let rows = idxsheet::annotate::annotate_records(&records, catalog, mismatches, threads)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if header {
        writeln!(out, "{}", idxsheet::annotate::header_row(mismatches))?;
    }
    let mut skipped = 0usize;
    for row in rows {
        match row {
            Some(r) => writeln!(out, "{r}")?,
            None => skipped += 1,
        }
    }
    debug!(records = records.len(), skipped, "annotation done");
    Ok(())
}

fn cmd_check_lane(sequences: &[String], min_hamming: usize, min_levenshtein: usize) -> bool {
    let upper: Vec<String> = sequences.iter().map(|s| s.to_ascii_uppercase()).collect();
    let conflicts = idxsheet::lane::check_lane(&upper, min_hamming, min_levenshtein);
    for c in &conflicts {
        println!("{}\t{}\t{}", c.a, c.b, c.reason);
    }
    if conflicts.is_empty() {
        info!(sequences = upper.len(), "lane is consistent");
    } else {
        warn!(conflicts = conflicts.len(), "lane has indexes that are too similar");
    }
    conflicts.is_empty()
}

fn cmd_overlaps(csv: bool) -> Result<()> {
    let rows = idxsheet::overlap::overlap_report(idxsheet::catalog::catalog()?);
    let mut df = idxsheet::overlap::overlap_df(&rows)?;
    if csv {
        let w = CsvWriter::new(std::io::stdout());
        w.include_header(true).finish(&mut df)?;
    } else {
        print_df(&df);
    }
    Ok(())
}

fn cmd_check_sheet(path: &str, opts: &SheetOptions, sorted_out: Option<String>) -> Result<bool> {
    let lookup = idxsheet::catalog::lookup()?;
    let mut sheet = idxsheet::sheet::SampleSheet::from_path(path).with_context(|| format!("reading sample sheet {path}"))?;
    if let Some(out) = sorted_out {
        let filled = sheet.fill_indexes(lookup, opts.append_a);
        sheet.sort();
        let file = std::fs::File::create(&out).with_context(|| format!("creating {out}"))?;
        sheet.write(file)?;
        info!(filled, path = out.as_str(), "sorted sample sheet written");
    }
    let report = sheet.validate(opts, lookup);
    for (i, (record, warnings)) in sheet.records.iter().zip(&report.warnings).enumerate() {
        if warnings.is_empty() {
            continue;
        }
        let msgs: Vec<String> = warnings.iter().map(|w| w.to_string()).collect();
        println!("{}\t{}\t{}\t{}\t{}", i + 1, record.lane, record.sample_id, record.index, msgs.join(" "));
    }
    if report.has_problems() {
        let problems: Vec<String> = report.problems().iter().map(|p| p.to_string()).collect();
        warn!("There are problems regarding records {}!", problems.join(", "));
        return Ok(false);
    }
    info!(fcid = sheet.fcid.as_str(), records = sheet.records.len(), "sample sheet has no problems");
    Ok(true)
}
