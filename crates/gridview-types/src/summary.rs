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

//! Live power-flow snapshot shown on the dashboard.
//!
//! Power ratios are normalized to `[-1, 1]` and describe directional
//! utilization of a subsystem's capacity; percentages use a 0-100 scale.

use serde::{Deserialize, Serialize};

use crate::error::TypesError;

/// Closed interval every power ratio lies in
pub const RATIO_RANGE: (f64, f64) = (-1.0, 1.0);

/// Closed interval every percentage lies in
pub const PERCENT_RANGE: (f64, f64) = (0.0, 100.0);

/// Ratio of `power` to `max`, clamped to `[-1, 1]`.
///
/// Returns 0 when `max` is not positive or the quotient is not finite.
#[must_use]
pub fn power_ratio(power: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    let ratio = power / max;
    if ratio.is_finite() {
        ratio.clamp(RATIO_RANGE.0, RATIO_RANGE.1)
    } else {
        0.0
    }
}

fn clamp_ratio(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(RATIO_RANGE.0, RATIO_RANGE.1)
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(PERCENT_RANGE.0, PERCENT_RANGE.1)
    }
}

fn ratio_ok(value: f64) -> bool {
    (RATIO_RANGE.0..=RATIO_RANGE.1).contains(&value)
}

fn percent_ok(value: f64) -> bool {
    (PERCENT_RANGE.0..=PERCENT_RANGE.1).contains(&value)
}

/// Overall health of the energy system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SystemState {
    #[default]
    Ok,
    Info,
    Warning,
    Fault,
}

impl TryFrom<u8> for SystemState {
    type Error = TypesError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Ok),
            1 => Ok(Self::Info),
            2 => Ok(Self::Warning),
            3 => Ok(Self::Fault),
            other => Err(TypesError::UnknownSystemState(other)),
        }
    }
}

impl From<SystemState> for u8 {
    fn from(state: SystemState) -> Self {
        match state {
            SystemState::Ok => 0,
            SystemState::Info => 1,
            SystemState::Warning => 2,
            SystemState::Fault => 3,
        }
    }
}

/// Grid connection mode reported by the meter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridMode {
    #[default]
    Undefined,
    OnGrid,
    OffGrid,
}

impl TryFrom<u8> for GridMode {
    type Error = TypesError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Undefined),
            1 => Ok(Self::OnGrid),
            2 => Ok(Self::OffGrid),
            other => Err(TypesError::UnknownGridMode(other)),
        }
    }
}

impl From<GridMode> for u8 {
    fn from(mode: GridMode) -> Self {
        match mode {
            GridMode::Undefined => 0,
            GridMode::OnGrid => 1,
            GridMode::OffGrid => 2,
        }
    }
}

/// Current power flows of the whole system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub system: SystemSummary,
    pub storage: StorageSummary,
    pub production: ProductionSummary,
    pub grid: GridSummary,
    pub consumption: ConsumptionSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSummary {
    /// Balance sheet total of all power entering (production, discharge,
    /// buy-from-grid) respectively leaving (consumption, charge, sell-to-grid)
    /// the system
    pub total_power: f64,
    /// Autarchy in percent
    pub autarchy: f64,
    /// Self consumption in percent
    pub self_consumption: f64,
    pub state: SystemState,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSummary {
    /// State of charge in percent
    pub soc: f64,
    pub active_power_l1: f64,
    pub active_power_l2: f64,
    pub active_power_l3: f64,
    pub effective_active_power_l1: f64,
    pub effective_active_power_l2: f64,
    pub effective_active_power_l3: f64,
    pub charge_active_power: f64,
    pub charge_active_power_ac: f64,
    pub charge_active_power_dc: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_charge_active_power: Option<f64>,
    pub discharge_active_power: f64,
    pub discharge_active_power_ac: f64,
    pub discharge_active_power_dc: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discharge_active_power: Option<f64>,
    pub power_ratio: f64,
    pub max_apparent_power: f64,
    pub effective_power: f64,
    pub effective_charge_power: f64,
    pub effective_discharge_power: f64,
    pub capacity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionSummary {
    pub power_ratio: f64,
    #[serde(rename = "hasDC")]
    pub has_dc: bool,
    /// Sum of `active_power_ac` and `active_power_dc`
    pub active_power: f64,
    pub active_power_ac: f64,
    pub active_power_ac_l1: f64,
    pub active_power_ac_l2: f64,
    pub active_power_ac_l3: f64,
    pub active_power_dc: f64,
    pub max_active_power: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSummary {
    pub power_ratio: f64,
    pub active_power_l1: f64,
    pub active_power_l2: f64,
    pub active_power_l3: f64,
    pub buy_active_power: f64,
    pub max_buy_active_power: f64,
    pub sell_active_power: f64,
    pub sell_active_power_l1: f64,
    pub sell_active_power_l2: f64,
    pub sell_active_power_l3: f64,
    pub max_sell_active_power: f64,
    pub grid_mode: GridMode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionSummary {
    pub power_ratio: f64,
    pub active_power: f64,
    pub active_power_l1: f64,
    pub active_power_l2: f64,
    pub active_power_l3: f64,
}

impl Summary {
    /// Copy with every ratio clamped to `[-1, 1]` and every percentage to `[0, 100]`
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut summary = self.clone();
        summary.system.autarchy = clamp_percent(summary.system.autarchy);
        summary.system.self_consumption = clamp_percent(summary.system.self_consumption);
        summary.storage.soc = clamp_percent(summary.storage.soc);
        summary.storage.power_ratio = clamp_ratio(summary.storage.power_ratio);
        summary.production.power_ratio = clamp_ratio(summary.production.power_ratio);
        summary.grid.power_ratio = clamp_ratio(summary.grid.power_ratio);
        summary.consumption.power_ratio = clamp_ratio(summary.consumption.power_ratio);
        summary
    }

    /// Whether every ratio and percentage is within its range
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        percent_ok(self.system.autarchy)
            && percent_ok(self.system.self_consumption)
            && percent_ok(self.storage.soc)
            && ratio_ok(self.storage.power_ratio)
            && ratio_ok(self.production.power_ratio)
            && ratio_ok(self.grid.power_ratio)
            && ratio_ok(self.consumption.power_ratio)
    }
}

impl ProductionSummary {
    /// AC plus DC production
    #[must_use]
    pub fn total_active_power(&self) -> f64 {
        self.active_power_ac + self.active_power_dc
    }
}
