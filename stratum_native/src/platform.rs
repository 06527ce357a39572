// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The platform the library was built for.

use std::fmt;

use stratum_sys::platform as sys;

use crate::error::borrowed_string;

/// Operating systems the library reports by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    MacOs,
    /// Apple iOS.
    Ios,
    /// Apple tvOS.
    TvOs,
    /// Apple visionOS.
    VisionOs,
    /// Linux, other than Android.
    Linux,
    /// Android.
    Android,
    /// Emscripten in a browser.
    Emscripten,
    /// FreeBSD.
    FreeBsd,
    /// NetBSD.
    NetBsd,
    /// OpenBSD.
    OpenBsd,
    /// Haiku.
    Haiku,
    /// None of the above.
    Unknown,
}

impl Platform {
    /// The platform this crate was compiled for.
    pub const CURRENT: Self = if cfg!(target_os = "windows") {
        Self::Windows
    } else if cfg!(target_os = "macos") {
        Self::MacOs
    } else if cfg!(target_os = "ios") {
        Self::Ios
    } else if cfg!(target_os = "tvos") {
        Self::TvOs
    } else if cfg!(target_os = "visionos") {
        Self::VisionOs
    } else if cfg!(target_os = "android") {
        Self::Android
    } else if cfg!(target_os = "linux") {
        Self::Linux
    } else if cfg!(target_os = "emscripten") {
        Self::Emscripten
    } else if cfg!(target_os = "freebsd") {
        Self::FreeBsd
    } else if cfg!(target_os = "netbsd") {
        Self::NetBsd
    } else if cfg!(target_os = "openbsd") {
        Self::OpenBsd
    } else if cfg!(target_os = "haiku") {
        Self::Haiku
    } else {
        Self::Unknown
    };

    /// The name the native library reports for this platform.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
            Self::Ios => "iOS",
            Self::TvOs => "tvOS",
            Self::VisionOs => "visionOS",
            Self::Linux => "Linux",
            Self::Android => "Android",
            Self::Emscripten => "Emscripten",
            Self::FreeBsd => "FreeBSD",
            Self::NetBsd => "NetBSD",
            Self::OpenBsd => "OpenBSD",
            Self::Haiku => "Haiku",
            Self::Unknown => "Unknown",
        }
    }

    /// Looks a platform up by its native name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        ALL.into_iter()
            .find(|p| p.name() == name)
            .unwrap_or(Self::Unknown)
    }
}

const ALL: [Platform; 12] = [
    Platform::Windows,
    Platform::MacOs,
    Platform::Ios,
    Platform::TvOs,
    Platform::VisionOs,
    Platform::Linux,
    Platform::Android,
    Platform::Emscripten,
    Platform::FreeBsd,
    Platform::NetBsd,
    Platform::OpenBsd,
    Platform::Haiku,
];

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The platform name reported by the loaded library.
#[must_use]
pub fn platform_name() -> String {
    // SAFETY: the library returns a static string.
    unsafe { borrowed_string(sys::SDL_GetPlatform()) }.unwrap_or_else(|| "Unknown".to_owned())
}

/// The platform reported by the loaded library.
#[must_use]
pub fn platform() -> Platform {
    Platform::from_name(&platform_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for p in ALL {
            assert_eq!(Platform::from_name(p.name()), p);
        }
        assert_eq!(Platform::from_name("PlayStation 2"), Platform::Unknown);
        assert_eq!(Platform::from_name("macos"), Platform::Unknown);
    }

    #[test]
    fn current_matches_target() {
        #[cfg(target_os = "linux")]
        assert_eq!(Platform::CURRENT.to_string(), "Linux");
        #[cfg(target_os = "macos")]
        assert_eq!(Platform::CURRENT.to_string(), "macOS");
        #[cfg(target_os = "windows")]
        assert_eq!(Platform::CURRENT.to_string(), "Windows");
        assert!(
            Platform::CURRENT == Platform::Unknown || ALL.contains(&Platform::CURRENT),
            "CURRENT is a named platform or Unknown"
        );
    }
}
