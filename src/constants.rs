use phf::phf_map;
use std::time::Duration;

pub const HTTP_PORT: u16 = 80;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_secs(30);
pub const READ_CHUNK_SIZE: usize = 4096;

pub static ENDPOINTS: phf::Map<&'static str, &'static str> = phf_map! {
    "ReadAlarm" => "/cgi-bin/readfile.cgi?query=ALARM",
    "GetTemp" => "/cgi-bin/gettemp.cgi",
    "WriteFile" => "/cgi-bin/writefile.cgi",
};

pub const INPUT_COUNT: u8 = 3;
pub const OUTPUT_NUMBER: u8 = 1;

// Field names as emitted by readfile.cgi, inputs are suffixed with 1..=3
pub const INPUT_STATE_FIELD: &str = "AlarmOut_Use";
pub const INPUT_TYPE_FIELD: &str = "Alm_InputType";
pub const OUTPUT_STATE_FIELD: &str = "Alm_OutUse";

pub const TEMPERATURE_MARKER: &str = "var temp=\"";
pub const TEMPERATURE_TERMINATOR: &str = "\";";

// Undocumented device codes
pub const INPUT_ACTIVE_CODE: &str = "2";
pub const INPUT_NORMALLY_OPEN_CODE: &str = "1";
pub const OUTPUT_ON_CODE: &str = "4";
pub const OUTPUT_OFF_CODE: &str = "1";

pub const OUTPUT_TIME_FIELD: &str = "Output_Time";
pub const SECTION_FIELD: &str = "UpSectionName";
pub const ALARM_SECTION: &str = "ALARM";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const WRITE_OK_MARKER: &str = "200 OK";
