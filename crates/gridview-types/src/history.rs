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

//! Declarative descriptors consumed by the history charts.
//!
//! A chart names the channels it needs queried ([`HistoryInputChannel`]) and
//! turns the returned series into datasets ([`HistoryDisplayValues`]).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::error::TypesError;

/// Title of the left y-axis, also the unit shown in tooltips and legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum YAxisTitle {
    Percentage,
    Energy,
}

/// Address of one channel of one component, written `component/channel`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChannelAddress {
    component_id: String,
    channel_id: String,
}

impl ChannelAddress {
    pub fn new(
        component_id: impl Into<String>,
        channel_id: impl Into<String>,
    ) -> Result<Self, TypesError> {
        let component_id = component_id.into();
        let channel_id = channel_id.into();
        if component_id.is_empty() || channel_id.is_empty() || channel_id.contains('/') {
            return Err(TypesError::InvalidChannelAddress(format!(
                "{component_id}/{channel_id}"
            )));
        }
        Ok(Self {
            component_id,
            channel_id,
        })
    }

    #[must_use]
    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    #[must_use]
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }
}

impl std::fmt::Display for ChannelAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.component_id, self.channel_id)
    }
}

impl std::str::FromStr for ChannelAddress {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (component, channel) = s
            .split_once('/')
            .ok_or_else(|| TypesError::InvalidChannelAddress(s.to_owned()))?;
        Self::new(component, channel)
    }
}

impl TryFrom<String> for ChannelAddress {
    type Error = TypesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChannelAddress> for String {
    fn from(address: ChannelAddress) -> Self {
        address.to_string()
    }
}

/// Predefined converters an input channel can apply to its raw series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueConverter {
    /// Negative values become 0, missing values stay missing
    NegativeAsZero,
    /// Keeps only the magnitude of negative values, e.g. grid sell from grid power
    PositiveAsZeroAndInvertNegative,
    /// Missing and negative values both become 0
    NonNullOrNegative,
    /// Flips the sign
    Invert,
}

impl ValueConverter {
    #[must_use]
    pub fn apply(&self, value: Option<f64>) -> Option<f64> {
        match self {
            Self::NegativeAsZero => value.map(|v| v.max(0.0)),
            Self::PositiveAsZeroAndInvertNegative => value.map(|v| v.min(0.0).abs()),
            Self::NonNullOrNegative => Some(value.map_or(0.0, |v| v.max(0.0))),
            Self::Invert => value.map(|v| -v),
        }
    }
}

/// Channel queried from the time-series database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryInputChannel {
    /// Identifier of the series in [`ChannelData`], unique within one chart
    pub name: String,
    pub power_channel: ChannelAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_channel: Option<ChannelAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converter: Option<ValueConverter>,
}

impl HistoryInputChannel {
    pub fn new(name: impl Into<String>, power_channel: ChannelAddress) -> Self {
        Self {
            name: name.into(),
            power_channel,
            energy_channel: None,
            converter: None,
        }
    }

    #[must_use]
    pub fn with_energy_channel(mut self, channel: ChannelAddress) -> Self {
        self.energy_channel = Some(channel);
        self
    }

    #[must_use]
    pub fn with_converter(mut self, converter: ValueConverter) -> Self {
        self.converter = Some(converter);
        self
    }
}

fn default_true() -> bool {
    true
}

/// One dataset drawn by the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryDisplayValues {
    pub name: String,
    /// Appended to the name, typically the period's energy total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_suffix: Option<String>,
    pub data: Vec<Option<f64>>,
    #[serde(default)]
    pub hidden_on_init: bool,
    /// Strike through the legend label while the dataset is hidden
    #[serde(default = "default_true")]
    pub no_stroke_through_legend_if_hidden: bool,
    /// Color in rgb format
    pub color: String,
    /// Stack of the bar chart
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<u32>,
}

impl HistoryDisplayValues {
    pub fn new(name: impl Into<String>, color: impl Into<String>, data: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            name_suffix: None,
            data,
            hidden_on_init: false,
            no_stroke_through_legend_if_hidden: true,
            color: color.into(),
            stack: None,
        }
    }
}

/// Series per input channel name
pub type ChannelData = BTreeMap<String, Vec<Option<f64>>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipSettings {
    /// Number format, e.g. `1.0-2`
    pub format_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_title: Option<String>,
}

type OutputFn = Box<dyn Fn(&ChannelData) -> Vec<HistoryDisplayValues> + Send + Sync>;

/// Full description of one history chart
pub struct HistoryChartData {
    input: Vec<HistoryInputChannel>,
    output: OutputFn,
    pub tooltip: TooltipSettings,
    pub unit: YAxisTitle,
}

impl std::fmt::Debug for HistoryChartData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryChartData")
            .field("input", &self.input)
            .field("output", &"<fn>")
            .field("tooltip", &self.tooltip)
            .field("unit", &self.unit)
            .finish()
    }
}

impl HistoryChartData {
    /// Build a chart description.
    ///
    /// # Errors
    ///
    /// Returns `TypesError::DuplicateChannel` if two input channels share a name.
    pub fn new<F>(
        input: Vec<HistoryInputChannel>,
        output: F,
        tooltip: TooltipSettings,
        unit: YAxisTitle,
    ) -> Result<Self, TypesError>
    where
        F: Fn(&ChannelData) -> Vec<HistoryDisplayValues> + Send + Sync + 'static,
    {
        {
            let mut seen = HashSet::with_capacity(input.len());
            for channel in &input {
                if !seen.insert(channel.name.as_str()) {
                    return Err(TypesError::DuplicateChannel(channel.name.clone()));
                }
            }
        }

        Ok(Self {
            input,
            output: Box::new(output),
            tooltip,
            unit,
        })
    }

    #[must_use]
    pub fn input(&self) -> &[HistoryInputChannel] {
        &self.input
    }

    /// Apply each input channel's converter to its raw series.
    ///
    /// Series without a matching input channel are dropped.
    #[must_use]
    pub fn convert(&self, raw: &ChannelData) -> ChannelData {
        self.input
            .iter()
            .filter_map(|channel| {
                let series = raw.get(&channel.name)?;
                let converted = match channel.converter {
                    Some(converter) => series.iter().map(|v| converter.apply(*v)).collect(),
                    None => series.clone(),
                };
                Some((channel.name.clone(), converted))
            })
            .collect()
    }

    /// Datasets to draw for the queried `raw` series
    #[must_use]
    pub fn render(&self, raw: &ChannelData) -> Vec<HistoryDisplayValues> {
        (self.output)(&self.convert(raw))
    }
}
