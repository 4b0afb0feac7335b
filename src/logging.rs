use tracing::Level;

/// A diagnostic emitted by the client, handed to an injected [`LogCallback`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub level: Level,
    pub host: String,
    pub operation: &'static str,
    pub message: String,
}

pub type LogCallback = Box<dyn Fn(&LogEvent) + Send + Sync>;
