mod alarm;
mod connection;
mod temperature;

pub use alarm::Alarm;
pub use connection::Connection;
pub use temperature::Temperature;
