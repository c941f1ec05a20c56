use std::{env, fs, path::Path, process::ExitCode};

use poe_skilltext::{
    extract::{
        additional_observations, combine_quality_range, constant_observations,
        granted_effect_for_skill, progression_observations, quality_observations,
        skill_constants,
    },
    parsers::dataset::Dataset,
    resolver::resolve_all,
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = env::args().skip(1).collect::<Vec<_>>();
    let [dataset_path, grammar_path, skill_id] = args.as_slice() else {
        eprintln!("usage: poe_skilltext <dataset.json> <stat_descriptions.txt> <skill_id>");
        return ExitCode::FAILURE;
    };

    let dataset = match Dataset::load(Path::new(dataset_path)) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let grammar = match fs::read_to_string(grammar_path) {
        Ok(grammar) => grammar,
        Err(err) => {
            eprintln!("failed to read {grammar_path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let Some(effect) = granted_effect_for_skill(&dataset, skill_id) else {
        eprintln!("no granted effect for skill: {skill_id}");
        return ExitCode::FAILURE;
    };

    let constants = skill_constants(effect);
    if let Some(cast_time) = constants.cast_time {
        println!("cast_time = {cast_time}");
    }
    if let Some(cost_type) = &constants.cost_type {
        println!("cost_type = {cost_type}");
    }

    let mut observations = constant_observations(&dataset, &effect.Id);
    observations.extend(progression_observations(&dataset, &effect.Id));
    observations.extend(additional_observations(&dataset, &effect.Id));

    for line in resolve_all(&observations, true, &grammar) {
        println!("{line}");
    }

    let quality = quality_observations(&dataset, &effect.Id);
    if !quality.is_empty() {
        let quality_lines = resolve_all(&quality, true, &grammar);
        match combine_quality_range(&quality_lines) {
            Some(range) => println!("quality: {range}"),
            None => {
                for line in &quality_lines {
                    println!("quality: {line}");
                }
            }
        }
    }

    ExitCode::SUCCESS
}
