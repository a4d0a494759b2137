//! An egui window showing `y(t)` as recorded during a solve.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use euler1d_core::Observer;

use crate::traits::{HasState, HasTime};

/// Window and axis options for [`PlotObserver::show`].
///
/// ```ignore
/// let config = ShowConfig::new().title("Euler Method Solution").legend().markers();
/// ```
#[derive(Debug, Clone)]
pub struct ShowConfig {
    title: String,
    x_label: String,
    y_label: String,
    legend: bool,
    markers: bool,
}

impl ShowConfig {
    /// Axes labeled `t` and `y(t)`, untitled window, a bare line.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            x_label: "t".into(),
            y_label: "y(t)".into(),
            legend: false,
            markers: false,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Relabels both axes.
    #[must_use]
    pub fn axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    /// Shows the trace name in a legend.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Marks every mesh point on top of the line.
    #[must_use]
    pub fn markers(mut self) -> Self {
        self.markers = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Records `(t, y)` from every event and draws them as one named trace.
///
/// Non-finite points are skipped, so a diverging solve still plots the part
/// that stayed finite. Hand the solver `&mut plot` and call
/// [`show`][PlotObserver::show] afterward:
///
/// ```ignore
/// let mut plot = PlotObserver::new("Euler method (h = 0.5000, n = 10)");
/// let solution = euler::solve(&rhs, mesh, y0, &mut plot)?;
/// plot.show(ShowConfig::new().legend())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PlotObserver {
    name: String,
    points: Vec<[f64; 2]>,
}

impl PlotObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Adds a point to the trace unless either coordinate is non-finite.
    pub fn record(&mut self, t: f64, y: f64) {
        if t.is_finite() && y.is_finite() {
            self.points.push([t, y]);
        }
    }

    #[must_use]
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Opens a native window with the trace and blocks until it is closed.
    ///
    /// # Errors
    ///
    /// Returns an [`eframe::Error`] if no window can be opened, for example
    /// on a machine without a display.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 500.0]),
            ..Default::default()
        };
        let app_name = config.title.clone();

        eframe::run_native(
            &app_name,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(TraceWindow {
                    trace: self,
                    config,
                }))
            }),
        )
    }
}

impl<E, A> Observer<E, A> for PlotObserver
where
    E: HasTime + HasState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.record(event.time(), event.state());
        None
    }
}

impl<E, A> Observer<E, A> for &mut PlotObserver
where
    E: HasTime + HasState,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

struct TraceWindow {
    trace: PlotObserver,
    config: ShowConfig,
}

impl eframe::App for TraceWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Self { trace, config } = self;

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("euler1d_trace")
                .x_axis_label(config.x_label.as_str())
                .y_axis_label(config.y_label.as_str());
            if config.legend {
                plot = plot.legend(Legend::default());
            }

            plot.show(ui, |plot_ui| {
                let line = PlotPoints::from(trace.points.clone());
                plot_ui.line(Line::new(line).name(&trace.name));

                if config.markers {
                    let marks = PlotPoints::from(trace.points.clone());
                    plot_ui.points(Points::new(marks).radius(3.0).name(&trace.name));
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use euler1d_solvers::euler::{Action, Event};

    #[test]
    fn skips_non_finite_points() {
        let mut plot = PlotObserver::new("y");

        for (step, t, y) in [(0, 0.0, 1.0), (1, 1.0, f64::INFINITY), (2, 2.0, 0.5)] {
            let event = Event { step, t, y };
            let action = Observer::<Event, Action>::observe(&mut plot, &event);
            assert_eq!(action, None);
        }

        assert_eq!(plot.points(), &[[0.0, 1.0], [2.0, 0.5]]);
    }

    #[test]
    fn axes_and_markers_are_configurable() {
        let config = ShowConfig::new().axes("time", "state").markers();
        assert_eq!(config.x_label, "time");
        assert_eq!(config.y_label, "state");
        assert!(config.markers);
        assert!(!ShowConfig::default().legend);
    }
}
