pub mod camera;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod hub;
pub mod logging;
pub mod model;
pub mod parser;
pub mod protocol;

pub use camera::CvmsCam;
pub use commands::*;
pub use config::DeviceConfig;
pub use error::{CvmsError, Result};
pub use hub::{CvmsHub, Device, Entity};
pub use logging::{LogCallback, LogEvent};
pub use model::{Direction, InputConfig, IoStatus, Port, Snapshot};
