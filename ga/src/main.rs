use std::fs;
use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use ga::config::GAConfig;
use ga::io;
use ga::io::cli::Cli;
use ga::io::output::{GAOutput, export_solution};
use ga::opt::ga_optimizer::GAOptimizer;
use log::{info, warn};
use optispace::io::import;
use optispace::io::svg::layout_to_svg;
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GAConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    config.validate()?;
    info!("Successfully parsed GAConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_instance(&args.input_file)?;
    let rects = import::import_instance(&ext_instance)?;

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let solution = GAOptimizer::new(rects, config, rng).solve();

    {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.svg"));
        let title = format!(
            "wasted area: {:.3} | generation: {}",
            solution.best.fitness(),
            solution.generations
        );
        let svg = layout_to_svg(solution.best.genes(), config.svg_draw_options, &title);

        io::write_svg(&svg, &svg_path)?;
    }

    {
        let output = GAOutput {
            instance: ext_instance,
            solution: export_solution(&solution),
            config,
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, &solution_path)?;
    }

    Ok(())
}
