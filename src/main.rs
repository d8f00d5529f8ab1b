use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rayon::prelude::*;
use std::fs::File;
use std::path::Path;

use hypro_rusty::cli::{Cli, Commands, ProfileCommand, ScalesCommand, ScalesSubcommand};
use hypro_rusty::io::{FastaReader, write_profiles};
use hypro_rusty::plot;
use hypro_rusty::profile::{ProfileComputer, ProfileReport, UnknownResiduePolicy};
use hypro_rusty::scale::{ScaleTable, AMINO_ACIDS, CATALOG};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(log_file) = cli.log_file {
        let file = File::create(log_file)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    // Set up parallel processing
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to initialize thread pool")?;
    }

    match cli.command {
        Commands::Profile(profile_cmd) => handle_profile_command(profile_cmd)?,
        Commands::Scales(scales_cmd) => handle_scales_command(scales_cmd)?,
    }

    Ok(())
}

fn handle_profile_command(cmd: ProfileCommand) -> Result<()> {
    let table = load_table(&cmd.scale, cmd.normalize, cmd.scales_dir.as_deref())?;
    info!(
        "Loaded scale {} ({}), normalized={}",
        table.name(),
        table.aaindex_id(),
        table.is_normalized()
    );

    let policy: UnknownResiduePolicy = cmd.unknown_residue.into();
    let computer = if cmd.allow_even_window {
        ProfileComputer::permissive(&table, cmd.window, policy)?
    } else {
        ProfileComputer::new(&table, cmd.window, policy)?
    };

    info!("Processing input files...");
    let reader = FastaReader::new(cmd.input_files);
    let records = reader.read_all()?;
    if records.is_empty() {
        return Err(anyhow::anyhow!("No sequences found in input files"));
    }
    info!("Computing profiles for {} sequences...", records.len());

    let reports: Vec<ProfileReport> = records
        .par_iter()
        .map(|record| {
            let profile = computer
                .compute(&record.sequence)
                .with_context(|| format!("Failed to profile sequence {}", record.id))?;
            Ok(ProfileReport {
                id: record.id.clone(),
                sequence: String::from_utf8_lossy(&record.sequence).into_owned(),
                scale: table.name().to_string(),
                aaindex_id: table.aaindex_id().to_string(),
                normalized: table.is_normalized(),
                window: computer.window(),
                profile,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    write_profiles(&reports, cmd.output, cmd.format.into())?;

    if let Some(plot_dir) = cmd.plot {
        std::fs::create_dir_all(&plot_dir)
            .with_context(|| format!("Failed to create plot directory {}", plot_dir.display()))?;
        for report in &reports {
            let path = plot_dir.join(format!("{}.svg", file_stem(&report.id)));
            plot::render_profile(&path, &report.id, &report.profile, cmd.plot_raw, report.normalized)
                .with_context(|| format!("Failed to render plot for {}", report.id))?;
            info!("Wrote plot for {} to {}", report.id, path.display());
        }
    }

    Ok(())
}

fn handle_scales_command(cmd: ScalesCommand) -> Result<()> {
    match cmd.command {
        ScalesSubcommand::List { detailed } => {
            println!("name\taaindex_id\tinverted");
            for entry in &CATALOG {
                println!("{}\t{}\t{}", entry.name, entry.aaindex_id, entry.inverted);

                if detailed {
                    let table = ScaleTable::load(entry.name, false)?;
                    println!("\n# Raw values for {}", entry.name);
                    println!("residue\tvalue");
                    for &aa in AMINO_ACIDS.iter() {
                        println!("{}\t{:.6}", aa as char, table.get(aa).unwrap_or(f64::NAN));
                    }
                    println!();
                }
            }
        }

        ScalesSubcommand::Show {
            name,
            normalize,
            scales_dir,
        } => {
            let table = load_table(&name, normalize, scales_dir.as_deref())?;
            println!(
                "# Scale\t{} ({})\tnormalized={}",
                table.name(),
                table.aaindex_id(),
                table.is_normalized()
            );
            println!("residue\tvalue");
            for &aa in AMINO_ACIDS.iter() {
                println!("{}\t{:.6}", aa as char, table.get(aa).unwrap_or(f64::NAN));
            }
        }
    }

    Ok(())
}

fn load_table(name: &str, normalize: bool, scales_dir: Option<&Path>) -> Result<ScaleTable> {
    let table = match scales_dir {
        Some(dir) => ScaleTable::load_from_dir(name, normalize, dir),
        None => ScaleTable::load(name, normalize),
    }
    .with_context(|| format!("Failed to load scale {}", name))?;
    Ok(table)
}

/// Turn a FASTA identifier into a safe file stem.
fn file_stem(id: &str) -> String {
    let stem: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if stem.is_empty() {
        "sequence".to_string()
    } else {
        stem
    }
}
