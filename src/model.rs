use crate::constants::{
    INPUT_ACTIVE_CODE, INPUT_COUNT, INPUT_NORMALLY_OPEN_CODE, INPUT_STATE_FIELD, INPUT_TYPE_FIELD,
    OUTPUT_NUMBER, OUTPUT_ON_CODE, OUTPUT_STATE_FIELD,
};
use crate::parser::RawFieldMap;
use chrono::{DateTime, Local};
use serde::Serialize;
use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr, Display)]
pub enum Direction {
    Input,
    Output,
}

/// Wiring of an alarm input contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr, Display)]
pub enum InputConfig {
    #[strum(serialize = "NO")]
    #[serde(rename = "NO")]
    NormallyOpen,
    #[strum(serialize = "NC")]
    #[serde(rename = "NC")]
    NormallyClosed,
}

/// A single alarm port as reported by one poll.
///
/// Only inputs carry an [`InputConfig`]; use [`Port::input`] and [`Port::output`] to build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Port {
    number: u8,
    direction: Direction,
    active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<InputConfig>,
}

impl Port {
    pub fn input(number: u8, active: bool, config: InputConfig) -> Self {
        Self {
            number,
            direction: Direction::Input,
            active,
            config: Some(config),
        }
    }

    pub fn output(number: u8, active: bool) -> Self {
        Self {
            number,
            direction: Direction::Output,
            active,
            config: None,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn config(&self) -> Option<InputConfig> {
        self.config
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IoStatus {
    pub ports: Vec<Port>,
}

impl IoStatus {
    /// Maps the readfile.cgi fields onto ports. Inputs come first, then the output.
    /// Unknown codes read as inactive.
    pub fn from_fields(fields: &RawFieldMap) -> Self {
        let mut ports = Vec::new();

        for number in 1..=INPUT_COUNT {
            let Some(state) = reported(fields, &format!("{}{}", INPUT_STATE_FIELD, number)) else {
                continue;
            };
            let config = match reported(fields, &format!("{}{}", INPUT_TYPE_FIELD, number)) {
                Some(INPUT_NORMALLY_OPEN_CODE) => InputConfig::NormallyOpen,
                _ => InputConfig::NormallyClosed,
            };
            ports.push(Port::input(number, state == INPUT_ACTIVE_CODE, config));
        }

        if let Some(state) = reported(fields, OUTPUT_STATE_FIELD) {
            ports.push(Port::output(OUTPUT_NUMBER, state == OUTPUT_ON_CODE));
        }

        Self { ports }
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Port> {
        self.ports
            .iter()
            .filter(|port| port.direction == Direction::Input)
    }

    pub fn input(&self, number: u8) -> Option<&Port> {
        self.inputs().find(|port| port.number == number)
    }

    pub fn output(&self) -> Option<&Port> {
        self.ports
            .iter()
            .find(|port| port.direction == Direction::Output)
    }

    /// State of a binary-sensor style input, `None` when the camera did not report it.
    pub fn input_active(&self, number: u8) -> Option<bool> {
        self.input(number).map(Port::is_active)
    }

    /// State of the switchable output, `None` when the camera did not report it.
    pub fn output_active(&self) -> Option<bool> {
        self.output().map(Port::is_active)
    }
}

// Empty values count as not reported.
fn reported<'a>(fields: &'a RawFieldMap, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

/// Everything one refresh produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub io_status: Option<IoStatus>,
    pub temperature: Option<f64>,
    pub last_update: DateTime<Local>,
}

impl Snapshot {
    pub fn input_active(&self, number: u8) -> Option<bool> {
        self.io_status.as_ref()?.input_active(number)
    }

    pub fn output_active(&self) -> Option<bool> {
        self.io_status.as_ref()?.output_active()
    }
}
