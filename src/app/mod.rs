//! Orchestration of sweep runs and the reset command.
mod reset;
mod run;
mod runtime_errors;
mod settings;


pub use reset::run_reset;
pub use run::{run_axes, run_sweep};
pub use settings::{AxisPlan, CollaboratorSettings, ProgramSpec, SweepSettings};
