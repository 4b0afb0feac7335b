use crate::camera::CvmsCam;
use async_trait::async_trait;

#[async_trait]
pub trait Connection: Send + Sync {
    /// Check that the camera answers a status read with these credentials
    async fn test_connection(&self) -> bool;

    /// Get the device host
    fn host(&self) -> &str;

    /// Get the device port
    fn port(&self) -> u16;
}

#[async_trait]
impl Connection for CvmsCam {
    async fn test_connection(&self) -> bool {
        match self.fetch_io_status().await {
            Ok(_) => true,
            Err(e) => {
                self.report_error("test_connection", &e);
                false
            }
        }
    }

    fn host(&self) -> &str {
        &self.target.host
    }

    fn port(&self) -> u16 {
        self.target.port
    }
}
