pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;

use crate::algo::series::{generate_array, run_all_algorithms};
use crate::algo::sorting::evaluate;
use chart::ChartOptions;
use cli::{Cli, Commands, Format};
use config::Config;
use error::Result;
use report::SortReport;
use tracing::{debug, info};

/// Runs one command and returns what should be printed on stdout.
pub fn run(cli: Cli) -> Result<String> {
    let sizes = match &cli.command {
        Commands::Compare { sizes, .. } => sizes.clone(),
        _ => None,
    };
    let config = Config::load(cli.config.as_deref())?.with_overrides(cli.seed, sizes);
    config.validate()?;
    debug!(?config, "resolved config");
    let mut rng = config.rng();

    match cli.command {
        Commands::Generate { size } => {
            let size = size.unwrap_or(config.array_size);
            let array = generate_array(&mut rng, size, config.value_bound);
            info!(size, "generated array");
            Ok(report::render_array(&array))
        }
        Commands::Sort {
            algorithm,
            size,
            values,
            format,
        } => {
            let original = match values {
                Some(raw) => cli::parse_values(&raw)?,
                None => generate_array(
                    &mut rng,
                    size.unwrap_or(config.array_size),
                    config.value_bound,
                ),
            };
            let result = evaluate(algorithm, &original);
            info!(%algorithm, len = original.len(), steps = result.steps, "sorted");
            let report = SortReport::new(algorithm, original, result);
            match format {
                Format::Text => Ok(report::render_sort(&report)),
                Format::Json => report::to_json(&report),
            }
        }
        Commands::Compare {
            format,
            width,
            no_color,
            ..
        } => {
            config.validate_sizes()?;
            let series = run_all_algorithms(&mut rng, &config.sizes, config.value_bound);
            info!(sizes = ?series.sizes, "compared all algorithms");
            match format {
                Format::Text => Ok(chart::render(
                    &series,
                    &ChartOptions {
                        width: usize::from(width),
                        color: !no_color,
                    },
                )),
                Format::Json => report::to_json(&series),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::cli::Cli;
    use crate::app::error::VisualizerError;
    use crate::app::run;
    use clap::Parser;

    fn run_args(args: &[&str]) -> Result<String, VisualizerError> {
        run(Cli::try_parse_from(args.iter().copied()).unwrap())
    }

    #[test]
    fn generate_with_seed() {
        let a = run_args(&["sortviz", "--seed", "11", "generate", "--size", "7"]).unwrap();
        let b = run_args(&["sortviz", "--seed", "11", "generate", "--size", "7"]).unwrap();
        assert_eq!(a, b);
        assert!(a.starts_with("Original Array: "));
        assert_eq!(a.trim_end().trim_start_matches("Original Array: ").split(", ").count(), 7);
    }

    #[test]
    fn bad_values() {
        let err = run_args(&["sortviz", "sort", "bubble", "--values", "1,two"]).unwrap_err();
        assert!(matches!(err, VisualizerError::InvalidValue { .. }));
    }

    #[test]
    fn config_file() {
        let dir = std::env::temp_dir().join(format!("sortviz-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let empty = dir.join("empty.toml");
        std::fs::write(&empty, "sizes = []\n").unwrap();
        let seeded = dir.join("seeded.toml");
        std::fs::write(&seeded, "seed = 4\narray_size = 3\n").unwrap();

        let err = run_args(&["sortviz", "--config", empty.to_str().unwrap(), "compare"]).unwrap_err();
        assert!(matches!(err, VisualizerError::EmptySizes));
        // --sizes replaces the empty list from the file
        assert!(run_args(&["sortviz", "--config", empty.to_str().unwrap(), "compare", "--sizes", "4"]).is_ok());
        // generate and sort never look at the sizes list
        let out = run_args(&["sortviz", "--config", empty.to_str().unwrap(), "generate", "--size", "3"]).unwrap();
        assert_eq!(out.matches(", ").count(), 2);
        let out = run_args(&["sortviz", "--config", empty.to_str().unwrap(), "sort", "bubble", "--values", "3,1"]).unwrap();
        assert!(out.contains("Steps Taken: 1\n"));

        let a = run_args(&["sortviz", "--config", seeded.to_str().unwrap(), "generate"]).unwrap();
        let b = run_args(&["sortviz", "--config", seeded.to_str().unwrap(), "generate"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.matches(", ").count(), 2);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
