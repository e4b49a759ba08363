pub mod control;
pub mod state;

pub use control::{FitMode, ViewController};
pub use state::{ViewParams, ViewState};
