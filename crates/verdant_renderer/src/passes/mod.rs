pub mod line_pass;
pub mod world_pass;

pub use line_pass::LinePass;
pub use world_pass::WorldPass;
