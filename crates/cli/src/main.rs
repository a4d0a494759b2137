use std::{env, io, path::PathBuf, process::ExitCode};

use euler1d_cli::{Error, config::Settings, export};
use euler1d_solvers::euler::Solution;

const USAGE: &str = "\
Solve dy/dt = f(t, y) with the forward Euler method.

Usage: euler1d [CONFIG] [--plot]

Arguments:
  [CONFIG]  TOML configuration file [default: config.toml]

Options:
      --plot  Show the solution in a window (requires the `plot` feature)
  -h, --help  Print help";

/// Command line arguments.
#[derive(Debug)]
struct Args {
    config: PathBuf,
    #[cfg_attr(not(feature = "plot"), allow(dead_code))]
    plot: bool,
}

impl Args {
    /// Parses arguments, returning `Ok(None)` when help was requested.
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Option<Self>, String> {
        let mut config = None;
        let mut plot = false;

        for arg in args {
            match arg.as_str() {
                "-h" | "--help" => return Ok(None),
                "--plot" => plot = true,
                flag if flag.starts_with('-') => return Err(format!("unknown option `{flag}`")),
                _ if config.is_some() => return Err(format!("unexpected argument `{arg}`")),
                _ => config = Some(PathBuf::from(&arg)),
            }
        }

        if plot && !cfg!(feature = "plot") {
            return Err("`--plot` needs a build with the `plot` feature".into());
        }

        Ok(Some(Self {
            config: config.unwrap_or_else(|| PathBuf::from("config.toml")),
            plot,
        }))
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match Args::parse(env::args().skip(1)) {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(msg) => {
            eprintln!("error: {msg}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{} stage failed: {err:?}", err.stage());
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let settings = euler1d_cli::load(&args.config)?;

    #[cfg(feature = "plot")]
    if args.plot {
        return run_with_plot(&settings);
    }

    let solution = euler1d_cli::solve(&settings)?;
    report(&settings, &solution)
}

/// Prints the table, then writes the CSV if one is configured.
fn report(settings: &Settings, solution: &Solution) -> Result<(), Error> {
    euler1d_cli::write_table(solution, io::stdout().lock()).map_err(export::ExportError::from)?;

    if let Some(path) = &settings.csv_file {
        export::export_csv(solution, path)?;
    }
    Ok(())
}

#[cfg(feature = "plot")]
fn run_with_plot(settings: &Settings) -> Result<(), Error> {
    use euler1d_observers::{PlotObserver, ShowConfig};

    let label = format!(
        "Euler method (h = {:.4}, n = {})",
        settings.step_size(),
        settings.steps
    );
    let mut plot = PlotObserver::new(label);

    let solution = euler1d_cli::solve_observed(settings, &mut plot)?;
    report(settings, &solution)?;

    plot.show(ShowConfig::new().title("Euler Method Solution").legend().markers())
        .map_err(|err| Error::Plot(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<Args>, String> {
        Args::parse(args.iter().map(ToString::to_string))
    }

    #[test]
    fn config_defaults_to_config_toml() {
        let args = parse(&[]).unwrap().unwrap();
        assert_eq!(args.config, PathBuf::from("config.toml"));
        assert!(!args.plot);
    }

    #[test]
    fn explicit_config_path() {
        let args = parse(&["runs/decay.toml"]).unwrap().unwrap();
        assert_eq!(args.config, PathBuf::from("runs/decay.toml"));
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse(&["a.toml", "--help"]).unwrap().is_none());
        assert!(parse(&["-h"]).unwrap().is_none());
    }

    #[test]
    fn rejects_unknown_options_and_extra_paths() {
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["a.toml", "b.toml"]).is_err());
    }

    #[test]
    fn plot_flag_follows_the_feature() {
        let result = parse(&["--plot"]);
        if cfg!(feature = "plot") {
            assert!(result.unwrap().unwrap().plot);
        } else {
            assert!(result.is_err());
        }
    }
}
