//! Descriptor Parsing
//!
//! Turns a loosely-typed JSON document into an [`AdapterDescriptor`]. A document either
//! carries the fields at its root or, like `io-package.json`, under `common`. Every missing
//! or mistyped field is collected before giving up.

use serde_json::{Map, Value};

use super::types::{AdapterDescriptor, AdapterMode};
use super::violation::Violation;

impl AdapterDescriptor {
    pub fn from_value(value: &Value) -> Result<Self, Vec<Violation>> {
        let Some(root) = value.as_object() else {
            return Err(vec![Violation::invalid_field(
                "<root>",
                "expected a JSON object",
            )]);
        };

        let fields = match root.get("common") {
            Some(Value::Object(common)) => common,
            _ => root,
        };

        let mut reader = FieldReader::new(fields);
        let name = reader.string("name");
        let mode = reader.string("mode");
        let only_www = reader.boolean("onlyWWW");
        let no_config = reader.boolean("noConfig");
        let singleton = reader.boolean("singleton");
        let adapter_type = reader.string("type");
        let version = reader.string("version");
        let main = reader.optional_string("main");

        let (
            Some(name),
            Some(mode),
            Some(only_www),
            Some(no_config),
            Some(singleton),
            Some(adapter_type),
            Some(version),
        ) = (name, mode, only_www, no_config, singleton, adapter_type, version)
        else {
            return Err(reader.violations);
        };

        if !reader.violations.is_empty() {
            return Err(reader.violations);
        }

        Ok(Self {
            name,
            mode: AdapterMode::parse(&mode),
            only_www,
            no_config,
            singleton,
            adapter_type,
            version,
            main,
        })
    }
}

struct FieldReader<'a> {
    fields: &'a Map<String, Value>,
    violations: Vec<Violation>,
}

impl<'a> FieldReader<'a> {
    fn new(fields: &'a Map<String, Value>) -> Self {
        Self {
            fields,
            violations: Vec::new(),
        }
    }

    fn string(&mut self, field: &str) -> Option<String> {
        match self.fields.get(field) {
            None | Some(Value::Null) => {
                self.violations.push(Violation::missing_field(field));
                None
            }
            Some(Value::String(s)) if s.trim().is_empty() => {
                self.violations
                    .push(Violation::invalid_field(field, "must not be empty"));
                None
            }
            Some(Value::String(s)) => Some(s.trim().to_string()),
            Some(_) => {
                self.violations
                    .push(Violation::invalid_field(field, "expected string"));
                None
            }
        }
    }

    fn boolean(&mut self, field: &str) -> Option<bool> {
        match self.fields.get(field) {
            None | Some(Value::Null) => {
                self.violations.push(Violation::missing_field(field));
                None
            }
            Some(Value::Bool(b)) => Some(*b),
            Some(_) => {
                self.violations
                    .push(Violation::invalid_field(field, "expected boolean"));
                None
            }
        }
    }

    /// Absent, null and blank all mean "not declared"
    fn optional_string(&mut self, field: &str) -> Option<String> {
        match self.fields.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(Value::String(s)) => Some(s.trim().to_string()),
            Some(_) => {
                self.violations
                    .push(Violation::invalid_field(field, "expected string"));
                None
            }
        }
    }
}
