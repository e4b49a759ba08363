pub mod background;
pub mod config;
pub mod consts;
pub mod error;
pub mod point;
pub mod projection;
pub mod transform;
pub mod validation;
pub mod view;
