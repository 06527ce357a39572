// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `SDL_power.h`.

use core::ffi::c_int;

c_enum! {
    /// The basic state of the system's power supply.
    pub struct SDL_PowerState(c_int) {
        ERROR = SDL_POWERSTATE_ERROR = -1,
        UNKNOWN = SDL_POWERSTATE_UNKNOWN = 0,
        ON_BATTERY = SDL_POWERSTATE_ON_BATTERY = 1,
        NO_BATTERY = SDL_POWERSTATE_NO_BATTERY = 2,
        CHARGING = SDL_POWERSTATE_CHARGING = 3,
        CHARGED = SDL_POWERSTATE_CHARGED = 4,
    }
}

#[cfg_attr(feature = "link", link(name = "SDL3"))]
unsafe extern "C" {
    /// Either out-pointer may be null. Unknown values are written as `-1`.
    pub fn SDL_GetPowerInfo(seconds: *mut c_int, percent: *mut c_int) -> SDL_PowerState;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_state_values() {
        assert_eq!(SDL_POWERSTATE_ERROR.0, -1);
        assert_eq!(SDL_POWERSTATE_CHARGED.0, 4);
        assert_eq!(SDL_PowerState::default(), SDL_PowerState::UNKNOWN);
    }
}
