pub mod body;
pub mod errors;
pub mod freefall;
pub mod state;

pub use freefall::FallModel;
pub use state::DescentState;
