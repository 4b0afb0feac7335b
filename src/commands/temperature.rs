use crate::camera::CvmsCam;
use crate::error::{CvmsError, Result};
use crate::parser::parse_temperature;
use async_trait::async_trait;

#[async_trait]
pub trait Temperature: Send + Sync {
    /// Read the internal temperature in degrees Celsius
    async fn read_temperature(&self) -> Option<f64>;
}

#[async_trait]
impl Temperature for CvmsCam {
    async fn read_temperature(&self) -> Option<f64> {
        self.fetch_temperature()
            .await
            .map_err(|e| self.report_error("read_temperature", &e))
            .ok()
    }
}

impl CvmsCam {
    pub(crate) async fn fetch_temperature(&self) -> Result<f64> {
        let response = self.get_command("GetTemp").await?;
        parse_temperature(&response)
            .ok_or_else(|| CvmsError::ParseError("No temperature reading in response".to_string()))
    }
}
