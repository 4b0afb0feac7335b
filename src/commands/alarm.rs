use crate::camera::CvmsCam;
use crate::constants::{
    ALARM_SECTION, OUTPUT_OFF_CODE, OUTPUT_ON_CODE, OUTPUT_STATE_FIELD, OUTPUT_TIME_FIELD,
    SECTION_FIELD, WRITE_OK_MARKER,
};
use crate::error::Result;
use crate::model::IoStatus;
use crate::parser::parse_variables;
use async_trait::async_trait;

#[async_trait]
pub trait Alarm: Send + Sync {
    /// Read the alarm input and output states
    async fn read_io_status(&self) -> Option<IoStatus>;

    /// Switch alarm output 1 on or off
    async fn set_output(&self, on: bool) -> bool;
}

#[async_trait]
impl Alarm for CvmsCam {
    async fn read_io_status(&self) -> Option<IoStatus> {
        self.fetch_io_status()
            .await
            .map_err(|e| self.report_error("read_io_status", &e))
            .ok()
    }

    async fn set_output(&self, on: bool) -> bool {
        self.write_output(on)
            .await
            .map_err(|e| self.report_error("set_output", &e))
            .unwrap_or(false)
    }
}

impl CvmsCam {
    pub(crate) async fn fetch_io_status(&self) -> Result<IoStatus> {
        let response = self.get_command("ReadAlarm").await?;
        Ok(IoStatus::from_fields(&parse_variables(&response)))
    }

    pub(crate) async fn write_output(&self, on: bool) -> Result<bool> {
        let state = if on { OUTPUT_ON_CODE } else { OUTPUT_OFF_CODE };
        let fields = [
            (OUTPUT_STATE_FIELD, state),
            (OUTPUT_TIME_FIELD, "0"),
            (SECTION_FIELD, ALARM_SECTION),
        ];

        let response = self.set_command("WriteFile", &fields).await?;
        let accepted = response.contains(WRITE_OK_MARKER);
        if !accepted {
            tracing::warn!(
                host = %self.target.host,
                status = response.lines().next().unwrap_or_default(),
                "output write rejected"
            );
        }
        Ok(accepted)
    }
}
