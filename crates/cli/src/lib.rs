//! Configuration-driven front end for the euler1d solver.
//!
//! A run goes through four stages, each with its own error type:
//!
//! 1. **configuration**: read and validate a TOML file ([`config`]),
//! 2. **expression**: parse the right-hand side ([`euler1d_expr`]),
//! 3. **integration**: walk the mesh with forward Euler ([`euler1d_solvers`]),
//! 4. **export**: print the table and write the CSV ([`export`]).
//!
//! Every failure is reported as an [`Error`] whose message names its stage.
//!
//! # Example
//!
//! ```
//! use euler1d_cli::config::Config;
//!
//! let config = Config::from_toml_str(
//!     r#"
//!     [mesh_1d]
//!     n = 2
//!     domain_start = 0.0
//!     domain_end = 1.0
//!
//!     [initial_conditions]
//!     y_0 = 1.0
//!
//!     [ode_function]
//!     expression = "y"
//!     "#,
//! )?;
//!
//! let solution = euler1d_cli::solve(&config.validate()?)?;
//! assert_eq!(solution.values(), &[1.0, 1.5, 2.25]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod export;

mod error;

use std::{io, path::Path};

use euler1d_core::Observer;
use euler1d_expr::Expression;
use euler1d_observers::{DivergenceGuard, LogObserver};
use euler1d_solvers::{
    Mesh,
    euler::{self, Action, Event, Solution},
};

pub use error::{Error, Stage};

use config::{Config, Settings};

/// Reads and validates the configuration file at `path`.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file cannot be read, parsed or validated.
pub fn load(path: impl AsRef<Path>) -> Result<Settings, Error> {
    Ok(Config::from_path(path)?.validate()?)
}

/// Solves the configured problem.
///
/// # Errors
///
/// See [`solve_observed`].
pub fn solve(settings: &Settings) -> Result<Solution, Error> {
    solve_observed(settings, ())
}

/// Solves the configured problem, forwarding every integrator event to
/// `observer`.
///
/// Progress is logged at trace level, and the solve stops as soon as the
/// state becomes non-finite.
///
/// # Errors
///
/// - [`Error::Expression`] if the expression does not parse. Nothing is
///   integrated in that case.
/// - [`Error::Config`] if the mesh cannot be built.
/// - [`Error::Integration`] if the right-hand side fails or `observer` stops
///   the solve.
/// - [`Error::Diverged`] if the state overflows to infinity or NaN.
pub fn solve_observed<Obs>(settings: &Settings, observer: Obs) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    let rhs = Expression::parse(&settings.expression)?;
    let mesh = Mesh::new(settings.domain_start, settings.domain_end, settings.steps)?;

    log::info!(
        "solving dy/dt = {rhs} on [{}, {}] with n = {}, y0 = {}",
        settings.domain_start,
        settings.domain_end,
        settings.steps,
        settings.y0,
    );

    let mut guard = DivergenceGuard::new();
    let result = euler::solve(
        &rhs,
        mesh,
        settings.y0,
        (LogObserver::new(), (&mut guard, observer)),
    );

    result.map_err(|err| match guard.diverged_at() {
        Some(step) if matches!(err, euler::Error::StoppedEarly { .. }) => {
            Error::Diverged { step }
        }
        _ => Error::Integration(err),
    })
}

/// Writes the solution as a `t = ..., y = ...` table, one line per point.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_table(solution: &Solution, mut out: impl io::Write) -> io::Result<()> {
    for (t, y) in solution.pairs() {
        writeln!(out, "t = {t:>5.2}, y = {y:>8.5}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use euler1d_solvers::MeshError;

    fn settings(expression: &str, steps: usize, y0: f64) -> Settings {
        Settings {
            expression: expression.into(),
            domain_start: 0.0,
            domain_end: 1.0,
            steps,
            y0,
            csv_file: None,
        }
    }

    #[test]
    fn decay_is_near_the_exact_solution() {
        let solution = solve(&settings("-y", 1000, 1.0)).unwrap();
        assert_relative_eq!(solution.last(), (-1.0_f64).exp(), max_relative = 1e-3);
    }

    #[test]
    fn parse_failure_never_reaches_the_integrator() {
        let mut events = 0;
        let err = solve_observed(&settings("t + ) y", 10, 1.0), |_: &Event| {
            events += 1;
            None
        })
        .unwrap_err();

        assert_eq!(err.stage(), Stage::Expression);
        assert!(err.to_string().starts_with("expression error:"));
        assert_eq!(events, 0);
    }

    #[test]
    fn evaluation_failure_is_an_integration_error() {
        let err = solve(&settings("1 / y", 10, 0.0)).unwrap_err();

        assert_eq!(err.stage(), Stage::Integration);
        assert!(matches!(
            err,
            Error::Integration(euler::Error::Rhs { step: 0, .. })
        ));
    }

    #[test]
    fn overflow_is_reported_as_divergence() {
        let mut settings = settings("y * y", 10, 1e200);
        settings.domain_end = 10.0;

        let err = solve(&settings).unwrap_err();
        assert!(matches!(err, Error::Diverged { step: 1 }));
        assert_eq!(
            err.to_string(),
            "integration error: solution diverged at step 1"
        );
    }

    #[test]
    fn oversized_mesh_is_a_configuration_error() {
        let err = solve(&settings("-y", usize::MAX, 1.0)).unwrap_err();

        assert_eq!(err.stage(), Stage::Configuration);
        assert!(matches!(
            err,
            Error::Config(config::ConfigError::Mesh(MeshError::TooManySteps { .. }))
        ));
    }

    #[test]
    fn caller_stop_is_not_divergence() {
        let err = solve_observed(&settings("y", 10, 1.0), |event: &Event| {
            (event.step == 4).then_some(Action::StopEarly)
        })
        .unwrap_err();

        assert!(matches!(
            err,
            Error::Integration(euler::Error::StoppedEarly { step: 4 })
        ));
    }

    #[test]
    fn table_matches_the_console_format() {
        let solution = solve(&settings("y", 2, 1.0)).unwrap();

        let mut out = Vec::new();
        write_table(&solution, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "t =  0.00, y =  1.00000\n\
             t =  0.50, y =  1.50000\n\
             t =  1.00, y =  2.25000\n"
        );
    }
}
