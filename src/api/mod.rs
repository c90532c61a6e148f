mod axis_layout;
mod chart;
mod config;
mod scales;
mod trajectory_layout;

pub use axis_layout::{layout_competitor_axis, layout_stage_axis};
pub use chart::BumpChart;
pub use config::ChartConfig;
pub use scales::ChartScales;
pub use trajectory_layout::layout_trajectories;
