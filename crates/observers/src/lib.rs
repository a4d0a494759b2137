//! Observers to plug into [`euler::solve`].
//!
//! They are written against the capability traits in [`traits`] rather than
//! the Euler event type itself:
//!
//! - [`LogObserver`] reports progress through the `log` facade.
//! - [`DivergenceGuard`] stops the solve at the first non-finite state.
//! - `PlotObserver` (feature `plot`) records `y(t)` for an egui window,
//!   pulling in `eframe` and `egui_plot`.
//!
//! Combine several with a tuple, e.g. `(LogObserver::new(), &mut guard)`.
//!
//! [`euler::solve`]: euler1d_solvers::euler::solve

pub mod traits;

mod guard;
mod logging;

pub use guard::DivergenceGuard;
pub use logging::LogObserver;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, ShowConfig};
