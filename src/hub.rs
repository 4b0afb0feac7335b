use crate::camera::CvmsCam;
use crate::commands::{Alarm, Connection, Temperature};
use crate::model::{IoStatus, Snapshot};
use async_trait::async_trait;
use chrono::{DateTime, Local};
use tokio::sync::RwLock;

/// What a polling host needs from a camera.
#[async_trait]
pub trait Device: Send + Sync {
    /// Poll the camera and return the new snapshot
    async fn refresh(&self) -> Snapshot;

    /// Switch the output, callers refresh afterwards to observe the new state
    async fn set_output(&self, on: bool) -> bool;

    /// Check connectivity and credentials
    async fn test_connection(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Input(u8),
    Output,
    Temperature,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Input(number) => write!(f, "Input {}", number),
            Entity::Output => f.write_str("Output"),
            Entity::Temperature => f.write_str("Temperature"),
        }
    }
}

/// Owns a camera client and the result of its last refresh.
pub struct CvmsHub {
    cam: CvmsCam,
    snapshot: RwLock<Option<Snapshot>>,
}

impl CvmsHub {
    pub fn new(cam: CvmsCam) -> Self {
        Self {
            cam,
            snapshot: RwLock::new(None),
        }
    }

    pub fn camera(&self) -> &CvmsCam {
        &self.cam
    }

    pub fn host(&self) -> &str {
        self.cam.host()
    }

    /// Display name for one of the entities this camera exposes.
    pub fn entity_name(&self, entity: Entity) -> String {
        format!("CVMS2025 {} {}", self.host(), entity)
    }

    pub async fn snapshot(&self) -> Option<Snapshot> {
        self.snapshot.read().await.clone()
    }

    pub async fn io_status(&self) -> Option<IoStatus> {
        self.snapshot
            .read()
            .await
            .as_ref()
            .and_then(|snapshot| snapshot.io_status.clone())
    }

    pub async fn temperature(&self) -> Option<f64> {
        self.snapshot
            .read()
            .await
            .as_ref()
            .and_then(|snapshot| snapshot.temperature)
    }

    pub async fn last_update(&self) -> Option<DateTime<Local>> {
        self.snapshot
            .read()
            .await
            .as_ref()
            .map(|snapshot| snapshot.last_update)
    }
}

#[async_trait]
impl Device for CvmsHub {
    async fn refresh(&self) -> Snapshot {
        let io_status = self.cam.read_io_status().await;
        let temperature = self.cam.read_temperature().await;

        let snapshot = Snapshot {
            io_status,
            temperature,
            last_update: Local::now(),
        };
        tracing::debug!(
            host = %self.host(),
            io_status = snapshot.io_status.is_some(),
            temperature = ?snapshot.temperature,
            "refreshed"
        );

        *self.snapshot.write().await = Some(snapshot.clone());
        snapshot
    }

    async fn set_output(&self, on: bool) -> bool {
        Alarm::set_output(&self.cam, on).await
    }

    async fn test_connection(&self) -> bool {
        Connection::test_connection(&self.cam).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_names() {
        let hub = CvmsHub::new(CvmsCam::new("192.168.1.20", "admin", "pw"));
        assert_eq!(
            hub.entity_name(Entity::Input(2)),
            "CVMS2025 192.168.1.20 Input 2"
        );
        assert_eq!(
            hub.entity_name(Entity::Output),
            "CVMS2025 192.168.1.20 Output"
        );
        assert_eq!(
            hub.entity_name(Entity::Temperature),
            "CVMS2025 192.168.1.20 Temperature"
        );
    }

    #[test]
    fn exposes_camera() {
        let hub = CvmsHub::new(CvmsCam::new("192.168.1.20", "admin", "pw").with_port(8080));
        assert_eq!(hub.camera().port(), 8080);
        assert_eq!(hub.camera().host(), hub.host());
    }

    #[tokio::test]
    async fn empty_before_first_refresh() {
        let hub = CvmsHub::new(CvmsCam::new("192.168.1.20", "admin", "pw"));
        assert!(hub.snapshot().await.is_none());
        assert!(hub.io_status().await.is_none());
        assert!(hub.temperature().await.is_none());
        assert!(hub.last_update().await.is_none());
    }
}
