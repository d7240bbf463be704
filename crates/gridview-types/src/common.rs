// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of GridView.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::TypesError;

/// Which side of the installation the UI is talking to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Backend {
    #[serde(rename = "OpenEMS Backend")]
    Backend,
    #[serde(rename = "OpenEMS Edge")]
    Edge,
}

/// Channel ids to subscribe, grouped by component id
pub type ChannelAddresses = BTreeMap<String, Vec<String>>;

/// Manual override switch of a controllable device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ManualOnOff {
    #[serde(rename = "MANUAL_ON")]
    On,
    #[serde(rename = "MANUAL_OFF")]
    Off,
}

impl ManualOnOff {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::On => "MANUAL_ON",
            Self::Off => "MANUAL_OFF",
        }
    }
}

impl std::str::FromStr for ManualOnOff {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MANUAL_ON" => Ok(Self::On),
            "MANUAL_OFF" => Ok(Self::Off),
            other => Err(TypesError::UnknownManualOnOff(other.to_owned())),
        }
    }
}

/// Generic key-value pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyValue<T> {
    pub key: String,
    pub value: T,
}

impl<T> KeyValue<T> {
    pub fn new(key: impl Into<String>, value: T) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_wire_names() {
        assert_eq!(
            serde_json::to_string(&Backend::Edge).unwrap(),
            "\"OpenEMS Edge\""
        );
        let parsed: Backend = serde_json::from_str("\"OpenEMS Backend\"").unwrap();
        assert_eq!(parsed, Backend::Backend);
    }

    #[test]
    fn test_manual_on_off() {
        assert_eq!("MANUAL_ON".parse::<ManualOnOff>().unwrap(), ManualOnOff::On);
        assert_eq!(ManualOnOff::Off.as_str(), "MANUAL_OFF");
        assert!("ON".parse::<ManualOnOff>().is_err());
        assert_eq!(
            serde_json::to_string(&ManualOnOff::Off).unwrap(),
            "\"MANUAL_OFF\""
        );
    }

    #[test]
    fn test_key_value_shape() {
        let pair = KeyValue::new("ess0", 42_u32);
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["key"], "ess0");
        assert_eq!(json["value"], 42);
    }

    #[test]
    fn test_channel_addresses_groups_by_component() {
        let mut addresses = ChannelAddresses::new();
        addresses
            .entry("_sum".to_owned())
            .or_default()
            .push("GridActivePower".to_owned());
        let json = serde_json::to_string(&addresses).unwrap();
        assert_eq!(json, r#"{"_sum":["GridActivePower"]}"#);
    }
}
