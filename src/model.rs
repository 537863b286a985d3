pub use cellblock_core::{CaError, Result};
pub mod artifact {
    pub use cellblock_core::artifact::*;
}
pub mod classify {
    pub use cellblock_core::classify::*;
}
pub mod config {
    pub use cellblock_core::config::*;
}
pub mod geometry {
    pub use cellblock_core::geometry::*;
}
pub mod injection {
    pub use cellblock_core::injection::*;
}
pub mod metrics {
    pub use cellblock_core::metrics::*;
}
pub mod render {
    pub use cellblock_core::render::*;
}
pub mod rule {
    pub use cellblock_core::rule::*;
}
pub mod seed {
    pub use cellblock_core::seed::*;
}
pub mod simulation {
    pub use cellblock_core::simulation::*;
}

pub mod state {
    pub use cellblock_data::*;
}
