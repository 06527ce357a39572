// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable dumps.

use std::fmt::Write as _;

use stratum_core::properties::{PropertiesId, PropertyStore};
use stratum_native::assert::AssertionRecord;

/// Formats `group` as one `name: type = value` line per property, sorted by
/// name.
///
/// Strings are quoted and escaped; pointers are shown as hex addresses.
pub fn format_group<S: PropertyStore>(store: &S, group: PropertiesId) -> Result<String, S::Error> {
    let mut out = String::new();
    for (name, value) in store.snapshot(group)? {
        let _ = writeln!(out, "{name}: {} = {value}", value.property_type().name());
    }
    Ok(out)
}

/// Formats an assertion report, one line per site.
#[must_use]
pub fn format_assertions(records: &[AssertionRecord]) -> String {
    let mut out = String::new();
    for r in records {
        let _ = write!(
            out,
            "{}:{}: {}: '{}' failed {} time{}",
            r.file,
            r.line,
            r.function,
            r.condition,
            r.trigger_count,
            if r.trigger_count == 1 { "" } else { "s" },
        );
        if r.always_ignore {
            out.push_str(" (always ignored)");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_core::properties::{PropertyError, PropertyRegistry, RawAddress};

    #[test]
    fn group_lines_are_sorted_and_typed() {
        let registry = PropertyRegistry::new();
        let group = registry.create_group().unwrap();
        registry.set_number(group, "width", 640).unwrap();
        registry.set_string(group, "title", Some("say \"hi\"")).unwrap();
        registry.set_boolean(group, "borderless", true).unwrap();
        registry.set_float(group, "scale", 1.5).unwrap();
        let mut slot = 0_u8;
        let addr = RawAddress::from_ptr(&raw mut slot).unwrap();
        registry.set_pointer(group, "handle", Some(addr), None).unwrap();

        let text = format_group(&registry, group).unwrap();
        let expected = format!(
            "borderless: boolean = true\n\
             handle: pointer = {:#x}\n\
             scale: float = 1.5\n\
             title: string = \"say \\\"hi\\\"\"\n\
             width: number = 640\n",
            addr.addr()
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_and_invalid_groups() {
        let registry = PropertyRegistry::new();
        let group = registry.create_group().unwrap();
        assert_eq!(format_group(&registry, group).unwrap(), "");
        assert_eq!(
            format_group(&registry, PropertiesId(0)),
            Err(PropertyError::InvalidGroup(PropertiesId(0)))
        );
    }

    #[test]
    fn assertion_lines() {
        let records = [
            AssertionRecord {
                condition: "w > 0".into(),
                file: "video.c".into(),
                line: 42,
                function: "SDL_CreateWindow".into(),
                trigger_count: 1,
                always_ignore: false,
            },
            AssertionRecord {
                condition: "ok".into(),
                file: "audio.c".into(),
                line: 7,
                function: "mix".into(),
                trigger_count: 3,
                always_ignore: true,
            },
        ];
        assert_eq!(
            format_assertions(&records),
            "video.c:42: SDL_CreateWindow: 'w > 0' failed 1 time\n\
             audio.c:7: mix: 'ok' failed 3 times (always ignored)\n"
        );
    }
}
