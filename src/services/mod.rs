pub mod color_data;
pub mod export;
pub mod observer;
pub mod record;

pub use color_data::{ColorData, ColorDataLoader};
pub use export::{export_grid, write_grid_csv};
pub use observer::{run_all, run_experiment, SimulatedObserver, TargetRun};
pub use record::{format_event, format_record, parse_record, ExperimentReport};
