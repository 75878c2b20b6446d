//! Amplisim CLI - Command-line interface for PCR amplification simulations.

use amplisim::analysis::{fragment_stats, write_fragments};
use amplisim::base::Sequence;
use amplisim::genbank::Fasta;
use amplisim::pcr::{
    Amplification, FallOffConfig, FallOffSampling, Fragment, PcrConfig, PrimerPair,
    DEFAULT_FALL_OFF_NOISE, DEFAULT_NUM_CYCLES,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Amplisim - PCR amplification simulator
#[derive(Parser, Debug)]
#[command(name = "amplisim")]
#[command(author, version, about = "PCR amplification simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SamplingArg {
    /// Draw one fall-off rate per elongation event
    PerEvent,
    /// Draw one shared fall-off rate per cycle
    PerCycle,
}

impl From<SamplingArg> for FallOffSampling {
    fn from(arg: SamplingArg) -> Self {
        match arg {
            SamplingArg::PerEvent => FallOffSampling::PerEvent,
            SamplingArg::PerCycle => FallOffSampling::PerCycle,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Amplify a region of a FASTA record
    Run {
        /// FASTA file holding the source record
        #[arg(short, long)]
        fasta: PathBuf,

        /// First base of the target region (1-based, inclusive)
        #[arg(short, long, default_value = "1")]
        begin: usize,

        /// Last base of the target region (1-based, inclusive; record end if omitted)
        #[arg(short, long)]
        end: Option<usize>,

        /// Forward primer bases (5'->3')
        #[arg(short = 'F', long)]
        forward: String,

        /// Reverse primer bases (5'->3')
        #[arg(short = 'R', long)]
        reverse: String,

        /// Number of thermal cycles
        #[arg(short, long, default_value_t = DEFAULT_NUM_CYCLES)]
        cycles: usize,

        /// Fall-off pivot (derived from the primer distance if omitted)
        #[arg(long)]
        fall_off_pivot: Option<i64>,

        /// Fall-off noise half-width
        #[arg(long, default_value_t = DEFAULT_FALL_OFF_NOISE)]
        fall_off_noise: i64,

        /// When the fall-off rate is sampled
        #[arg(long, value_enum, default_value = "per-event")]
        sampling: SamplingArg,

        /// Random seed
        #[arg(long)]
        seed: Option<u64>,

        /// Write the final population as tab-delimited records
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show progress bar
        #[arg(long, default_value = "true")]
        progress: bool,
    },

    /// Slice a gene out of a FASTA record and translate it
    Translate {
        /// FASTA file holding the source record
        #[arg(short, long)]
        fasta: PathBuf,

        /// First base of the gene (1-based, inclusive)
        #[arg(short, long, default_value = "1")]
        begin: usize,

        /// Last base of the gene (1-based, inclusive; record end if omitted)
        #[arg(short, long)]
        end: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            fasta,
            begin,
            end,
            forward,
            reverse,
            cycles,
            fall_off_pivot,
            fall_off_noise,
            sampling,
            seed,
            output,
            progress,
        } => {
            run_amplification(
                &fasta,
                begin,
                end,
                &forward,
                &reverse,
                cycles,
                fall_off_pivot,
                fall_off_noise,
                sampling,
                seed,
                output.as_ref(),
                progress,
            )?;
        }
        Commands::Translate { fasta, begin, end } => {
            translate_gene(&fasta, begin, end)?;
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_amplification(
    fasta: &PathBuf,
    begin: usize,
    end: Option<usize>,
    forward: &str,
    reverse: &str,
    cycles: usize,
    fall_off_pivot: Option<i64>,
    fall_off_noise: i64,
    sampling: SamplingArg,
    seed: Option<u64>,
    output: Option<&PathBuf>,
    show_progress: bool,
) -> Result<()> {
    println!("🧬 Amplisim - PCR Amplification Simulator");
    println!("============================================\n");

    let record = Fasta::from_path(fasta)
        .with_context(|| format!("Failed to read FASTA file: {}", fasta.display()))?;

    let template = record.sequence().slice(begin, end);
    if template.is_empty() {
        anyhow::bail!(
            "Region {}..{} is empty (record has {} bases)",
            begin,
            end.map(|e| e.to_string()).unwrap_or_else(|| "end".into()),
            record.sequence().len()
        );
    }
    let segment = Fragment::double_stranded(template.clone(), template.complement());

    let primers = PrimerPair::new(Sequence::new(forward), Sequence::new(reverse))
        .context("Invalid primer pair")?;

    let fall_off = FallOffConfig::new(fall_off_pivot, fall_off_noise, sampling.into())
        .context("Invalid fall-off parameters")?;
    let config = PcrConfig::new(cycles, fall_off, seed);

    println!("Record: {} ({})", record.version(), record.definition());
    println!("Target region: {} bases ({}{})",
        template.len(),
        begin,
        end.map(|e| format!("..{e}")).unwrap_or_default(),
    );
    println!("Forward primer: {}", primers.forward());
    println!("Reverse primer: {}", primers.reverse());
    println!("Cycles: {cycles}");
    println!(
        "Sampling: {}",
        match sampling {
            SamplingArg::PerEvent => "per elongation event",
            SamplingArg::PerCycle => "per cycle",
        }
    );
    match seed {
        Some(s) => println!("Seed: {s}"),
        None => println!("Seed: random"),
    }

    let mut engine = Amplification::new(segment.clone(), primers.clone(), config)
        .context("Failed to set up amplification")?;
    println!(
        "Fall-off window: {} ± {}{}",
        engine.pivot(),
        fall_off_noise,
        if fall_off_pivot.is_none() {
            " (pivot derived from primer distance)"
        } else {
            ""
        },
    );

    println!("\nRunning {cycles} cycles...");

    let bar = if show_progress {
        let bar = ProgressBar::new(cycles as u64);
        bar.set_style(ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
        )?);
        Some(bar)
    } else {
        None
    };

    for _ in 0..cycles {
        engine.step();
        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }
    if let Some(bar) = bar {
        bar.finish();
    }

    let population = engine.into_population();
    println!("\n✓ Amplification complete!");
    println!("  Final cycle: {}", population.cycle());
    println!("  Fragment pairs: {}", population.size());

    match fragment_stats(&population, &segment, &primers) {
        Ok(stats) => {
            println!("\n📊 Product Summary");
            println!("{}", "=".repeat(50));
            println!("Product strands: {}", stats.count);
            println!("Length range: {}..{} bases", stats.min_len, stats.max_len);
            println!("Mean length: {:.1} bases", stats.mean_len);
            println!("Segment GC content: {:.2}%", stats.segment_gc * 100.0);
            match stats.amplicon_gc {
                Some(gc) => println!("Amplicon GC content: {:.2}%", gc * 100.0),
                None => println!("Amplicon GC content: n/a (primers do not bracket the segment)"),
            }
        }
        Err(e) => {
            println!("\n⚠️  No product statistics: {e}");
        }
    }

    if let Some(path) = output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_fragments(&mut writer, &population).context("Failed to write fragments")?;
        println!("\n✓ Fragments written to: {}", path.display());
    }

    Ok(())
}

fn translate_gene(fasta: &PathBuf, begin: usize, end: Option<usize>) -> Result<()> {
    println!("🧬 Amplisim - Gene Translation");
    println!("============================================\n");

    let record = Fasta::from_path(fasta)
        .with_context(|| format!("Failed to read FASTA file: {}", fasta.display()))?;

    let gene = record.sequence().slice(begin, end);
    if gene.is_empty() {
        anyhow::bail!("Region is empty (record has {} bases)", record.sequence().len());
    }

    println!("Record: {} ({})", record.version(), record.definition());
    println!("Gene: {}", gene.preview());
    println!("Length: {} bases ({} codons)", gene.len(), gene.len() / 3);
    println!("Complement: {}", gene.complement().preview());
    match gene.gc_content() {
        Ok(gc) => println!("GC content: {:.2}%", gc * 100.0),
        Err(e) => println!("GC content: {e}"),
    }

    println!("\nProtein:");
    println!("{}", gene.translate());

    Ok(())
}
