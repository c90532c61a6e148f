pub mod model;
pub mod palette;
pub mod scale;
pub mod trajectory;
pub mod types;

pub use model::{Competitor, Stage, StageRef, StageResult};
pub use palette::{CATEGORY_COLOR_COUNT, CompetitorPalette};
pub use scale::{DistanceScale, RankScale};
pub use trajectory::{TrajectoryPoint, TrajectorySegment, connect_segments, project_points};
pub use types::{Margins, Viewport};
