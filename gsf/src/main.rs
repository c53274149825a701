use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use gsf::config::GsfConfig;
use gsf::io::cli::Cli;
use gsf::io::output::Output;
use gsf::{EPOCH, io};
use log::{info, warn};
use sawplan::io::svg::plan_to_svg;
use sawplan::io::{export, import};
use sawplan::pack::{Strategy, best_plan, pack};
use sawplan::report::work_order;
use thousands::Separable;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GsfConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed GsfConfig: {config:?}");

    let input_file_stem = args.input_file.file_stem().unwrap().to_str().unwrap();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).unwrap_or_else(|_| {
            panic!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        });
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let (part_list, stock) = import(&ext_instance)?;

    let strategies = match args.strategy.map(Strategy::from).or(config.strategy) {
        Some(strategy) => vec![strategy],
        None => Strategy::ALL.to_vec(),
    };

    let plans = strategies
        .iter()
        .map(|&strategy| pack(part_list.parts(), stock, strategy))
        .collect::<Vec<_>>();

    for plan in &plans {
        info!(
            "[GSF] {}: {} parts in {} rows | consumed {:.1} | remainder {:.1}{}",
            plan.strategy,
            plan.part_count().separate_with_commas(),
            plan.rows.len(),
            plan.consumed_length(),
            plan.remainder(),
            if plan.is_feasible() {
                ""
            } else {
                " (DOES NOT FIT)"
            },
        );
    }

    if plans.len() > 1
        && let Some(best) = best_plan(&plans)
    {
        info!(
            "[GSF] least consuming strategy: {} ({:.1})",
            best.strategy,
            best.consumed_length()
        );
    }

    {
        let output = Output {
            instance: ext_instance,
            plans: plans.iter().map(export).collect(),
            config,
        };

        let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    for plan in &plans {
        let svg_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}_{}.svg", plan.strategy));
        let svg = plan_to_svg(plan, config.svg_draw_options, input_file_stem);
        io::write_svg(&svg, Path::new(&svg_path))?;

        let order_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}_{}.txt", plan.strategy));
        io::write_work_order(&work_order(plan), Path::new(&order_path))?;
    }

    info!("[GSF] finished in {:?}", EPOCH.elapsed());

    Ok(())
}
