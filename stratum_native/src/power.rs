// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Battery status.

use std::ffi::c_int;

use stratum_sys::power::{self as sys, SDL_PowerState};

use crate::error::{Error, Result};

/// What the power source is doing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PowerState {
    /// The platform cannot tell.
    #[default]
    Unknown,
    /// Running on battery.
    OnBattery,
    /// Plugged in with no battery.
    NoBattery,
    /// Plugged in and charging.
    Charging,
    /// Plugged in and fully charged.
    Charged,
}

/// A snapshot of the power source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PowerInfo {
    /// Power source state.
    pub state: PowerState,
    /// Estimated battery time left, in seconds.
    pub seconds: Option<u32>,
    /// Battery charge, `0..=100`.
    pub percent: Option<u8>,
}

impl PowerInfo {
    fn from_raw(state: SDL_PowerState, seconds: c_int, percent: c_int) -> Option<Self> {
        let state = match state {
            SDL_PowerState::ON_BATTERY => PowerState::OnBattery,
            SDL_PowerState::NO_BATTERY => PowerState::NoBattery,
            SDL_PowerState::CHARGING => PowerState::Charging,
            SDL_PowerState::CHARGED => PowerState::Charged,
            SDL_PowerState::ERROR => return None,
            _ => PowerState::Unknown,
        };
        Some(Self {
            state,
            // Negative means unknown.
            seconds: u32::try_from(seconds).ok(),
            percent: u8::try_from(percent).ok().map(|p| p.min(100)),
        })
    }
}

/// Queries the power source.
///
/// This can be slow on some platforms; avoid calling it every frame.
pub fn power_info() -> Result<PowerInfo> {
    let (mut seconds, mut percent) = (-1, -1);
    // SAFETY: valid out pointers.
    let state = unsafe { sys::SDL_GetPowerInfo(&mut seconds, &mut percent) };
    let info = PowerInfo::from_raw(state, seconds, percent).ok_or_else(Error::native)?;
    ::log::trace!(target: "stratum::power", "{info:?}");
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_values_are_none() {
        let info = PowerInfo::from_raw(SDL_PowerState::NO_BATTERY, -1, -1).unwrap();
        assert_eq!(
            info,
            PowerInfo {
                state: PowerState::NoBattery,
                seconds: None,
                percent: None,
            }
        );
    }

    #[test]
    fn battery_values_are_kept() {
        let info = PowerInfo::from_raw(SDL_PowerState::ON_BATTERY, 5400, 62).unwrap();
        assert_eq!(info.state, PowerState::OnBattery);
        assert_eq!(info.seconds, Some(5400));
        assert_eq!(info.percent, Some(62));
    }

    #[test]
    fn error_state_fails() {
        assert_eq!(PowerInfo::from_raw(SDL_PowerState::ERROR, 10, 10), None);
        assert_eq!(
            PowerInfo::from_raw(SDL_PowerState(42), 0, 0).map(|i| i.state),
            Some(PowerState::Unknown)
        );
    }
}
