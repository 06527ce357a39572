// Copyright 2026 the Stratum Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export.
//!
//! Property groups become an object keyed by property name:
//!
//! ```json
//! { "title": { "type": "string", "value": "main" },
//!   "handle": { "type": "pointer", "value": "0x7f00dead0000" } }
//! ```
//!
//! Pointers are written as hex strings since JSON numbers cannot carry a
//! full 64-bit address.

use std::fmt::Display;
use std::io::{self, Write};

use serde_json::{Map, Value, json};

use stratum_core::properties::{PropertiesId, PropertyStore, PropertyValue};
use stratum_native::assert::AssertionRecord;

fn value_json(value: &PropertyValue) -> Value {
    match value {
        PropertyValue::Pointer(addr) => json!(format!("{:#x}", addr.addr())),
        PropertyValue::String(s) => json!(s),
        PropertyValue::Number(n) => json!(n),
        PropertyValue::Float(f) => json!(f),
        PropertyValue::Boolean(b) => json!(b),
    }
}

/// Builds the JSON object for `group`.
pub fn group_value<S: PropertyStore>(store: &S, group: PropertiesId) -> Result<Value, S::Error> {
    let mut map = Map::new();
    for (name, value) in store.snapshot(group)? {
        map.insert(
            name,
            json!({
                "type": value.property_type().name(),
                "value": value_json(&value),
            }),
        );
    }
    Ok(Value::Object(map))
}

/// Writes `group` as pretty-printed JSON.
///
/// A store error (such as an invalid group) is returned as an
/// [`io::Error`] of kind `Other`.
pub fn export_group<S>(store: &S, group: PropertiesId, writer: &mut dyn Write) -> io::Result<()>
where
    S: PropertyStore,
    S::Error: Display,
{
    let value = group_value(store, group).map_err(|err| io::Error::other(err.to_string()))?;
    serde_json::to_writer_pretty(&mut *writer, &value)?;
    writeln!(writer)
}

/// Writes an assertion report as a JSON array.
pub fn export_assertions(records: &[AssertionRecord], writer: &mut dyn Write) -> io::Result<()> {
    let items: Vec<Value> = records
        .iter()
        .map(|r| {
            json!({
                "condition": r.condition,
                "file": r.file,
                "line": r.line,
                "function": r.function,
                "trigger_count": r.trigger_count,
                "always_ignore": r.always_ignore,
            })
        })
        .collect();
    serde_json::to_writer_pretty(&mut *writer, &items)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_core::properties::{PropertyRegistry, RawAddress};

    #[test]
    fn group_round_trips_through_serde() {
        let registry = PropertyRegistry::new();
        let group = registry.create_group().unwrap();
        registry.set_string(group, "title", Some("main")).unwrap();
        registry.set_number(group, "count", -3).unwrap();
        registry.set_float(group, "gamma", 2.25).unwrap();
        registry.set_boolean(group, "vsync", false).unwrap();
        let mut slot = 0_u32;
        let addr = RawAddress::from_ptr(&raw mut slot).unwrap();
        registry.set_pointer(group, "handle", Some(addr), None).unwrap();

        let mut out = Vec::new();
        export_group(&registry, group, &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(parsed["title"], json!({ "type": "string", "value": "main" }));
        assert_eq!(parsed["count"]["value"], -3);
        assert_eq!(parsed["gamma"]["value"], 2.25);
        assert_eq!(parsed["vsync"], json!({ "type": "boolean", "value": false }));
        assert_eq!(parsed["handle"]["type"], "pointer");
        assert_eq!(
            parsed["handle"]["value"],
            Value::String(format!("{:#x}", addr.addr()))
        );
        assert_eq!(parsed.as_object().unwrap().len(), 5);
    }

    #[test]
    fn invalid_group_is_an_io_error() {
        let registry = PropertyRegistry::new();
        let mut out = Vec::new();
        let err = export_group(&registry, PropertiesId(999), &mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
        assert!(out.is_empty(), "nothing is written on failure");
    }

    #[test]
    fn assertions_export_as_array() {
        let records = [AssertionRecord {
            condition: "len <= cap".into(),
            file: "stdlib.c".into(),
            line: 88,
            function: "grow".into(),
            trigger_count: 2,
            always_ignore: false,
        }];
        let mut out = Vec::new();
        export_assertions(&records, &mut out).unwrap();
        let parsed: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            parsed,
            json!([{
                "condition": "len <= cap",
                "file": "stdlib.c",
                "line": 88,
                "function": "grow",
                "trigger_count": 2,
                "always_ignore": false,
            }])
        );

        let mut empty = Vec::new();
        export_assertions(&[], &mut empty).unwrap();
        assert_eq!(serde_json::from_slice::<Value>(&empty).unwrap(), json!([]));
    }
}
