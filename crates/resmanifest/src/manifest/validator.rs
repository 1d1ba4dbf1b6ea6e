//! Manifest Validator
//!
//! Pure consistency checks between a descriptor, the files it ships and its release record.
//! All checks run on every call; the result lists every violation in a fixed order.

use semver::Version;
use serde_json::Value;

use super::types::{
    AdapterDescriptor, AdapterMode, ReleaseMetadata, ResourceDirectory, KNOWN_ADAPTER_TYPES,
};
use super::violation::{Violation, ViolationKind};

/// Inputs to validation beyond the three records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Type tags accepted in addition to [`KNOWN_ADAPTER_TYPES`]
    pub extra_types: Vec<String>,
}

impl ValidationOptions {
    pub fn is_known_type(&self, tag: &str) -> bool {
        KNOWN_ADAPTER_TYPES.contains(&tag) || self.extra_types.iter().any(|t| t == tag)
    }
}

/// Validate against the built-in type set
pub fn validate(
    descriptor: &AdapterDescriptor,
    directory: &ResourceDirectory,
    release: &ReleaseMetadata,
) -> Result<(), Vec<Violation>> {
    validate_with(descriptor, directory, release, &ValidationOptions::default())
}

pub fn validate_with(
    descriptor: &AdapterDescriptor,
    directory: &ResourceDirectory,
    release: &ReleaseMetadata,
    options: &ValidationOptions,
) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();

    if !descriptor.mode.is_recognized() {
        violations.push(Violation::new(
            ViolationKind::UnknownMode,
            format!("mode \"{}\" is not a known adapter mode", descriptor.mode),
        ));
    }

    if descriptor.only_www {
        if descriptor.mode != AdapterMode::None {
            violations.push(Violation::new(
                ViolationKind::ModeMismatch,
                format!(
                    "onlyWWW adapters must use mode \"none\", found \"{}\"",
                    descriptor.mode
                ),
            ));
        }

        if let Some(main) = &descriptor.main {
            violations.push(Violation::new(
                ViolationKind::EntryPointDeclared,
                format!("descriptor declares runtime entry point \"{}\"", main),
            ));
        }
        if let Some(main) = &release.main {
            violations.push(Violation::new(
                ViolationKind::EntryPointDeclared,
                format!("release metadata declares runtime entry point \"{}\"", main),
            ));
        }

        if directory.is_empty() {
            violations.push(Violation::new(
                ViolationKind::EmptyResourceSet,
                format!(
                    "onlyWWW adapter ships no files under {}",
                    directory.root_path.display()
                ),
            ));
        }
    }

    if !options.is_known_type(&descriptor.adapter_type) {
        violations.push(Violation::new(
            ViolationKind::UnknownType,
            format!(
                "type \"{}\" is not a recognized adapter type",
                descriptor.adapter_type
            ),
        ));
    }

    let ours = parse_version("descriptor", &descriptor.version, &mut violations);
    let theirs = parse_version("release metadata", &release.version, &mut violations);
    let drifted = match (ours, theirs) {
        (Some(ours), Some(theirs)) => ours != theirs,
        _ => descriptor.version.trim() != release.version.trim(),
    };
    if drifted {
        violations.push(Violation::new(
            ViolationKind::VersionDrift,
            format!(
                "descriptor version {} does not match release version {}",
                descriptor.version, release.version
            ),
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Parse a raw descriptor document and validate it in one step
///
/// A descriptor that cannot be built reports only its field violations.
pub fn check_document(
    descriptor: &Value,
    directory: &ResourceDirectory,
    release: &ReleaseMetadata,
    options: &ValidationOptions,
) -> Result<(), Vec<Violation>> {
    let descriptor = AdapterDescriptor::from_value(descriptor)?;
    validate_with(&descriptor, directory, release, options)
}

fn parse_version(source: &str, raw: &str, violations: &mut Vec<Violation>) -> Option<Version> {
    match Version::parse(raw.trim()) {
        Ok(version) => Some(version),
        Err(e) => {
            violations.push(Violation::new(
                ViolationKind::InvalidVersion,
                format!("{} version \"{}\" is not a semantic version: {}", source, raw, e),
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::violation::kinds;
    use serde_json::json;

    fn icons_descriptor() -> AdapterDescriptor {
        AdapterDescriptor {
            name: "icons-example".to_string(),
            mode: AdapterMode::None,
            only_www: true,
            no_config: true,
            singleton: true,
            adapter_type: "visualization-icons".to_string(),
            version: "1.2.0".to_string(),
            main: None,
        }
    }

    fn icons() -> ResourceDirectory {
        ResourceDirectory::new("www", ["house.svg", "lamp.svg"])
    }

    fn release(version: &str) -> ReleaseMetadata {
        ReleaseMetadata::new(version)
    }

    #[test]
    fn consistent_icon_adapter_passes() {
        assert_eq!(validate(&icons_descriptor(), &icons(), &release("1.2.0")), Ok(()));
    }

    #[test]
    fn daemon_mode_is_a_mismatch() {
        let descriptor = AdapterDescriptor {
            mode: AdapterMode::Daemon,
            ..icons_descriptor()
        };
        let err = validate(&descriptor, &icons(), &release("1.2.0")).unwrap_err();
        assert_eq!(kinds(&err), vec![ViolationKind::ModeMismatch]);
        assert!(err[0].detail.contains("daemon"));
    }

    #[test]
    fn empty_directory_is_reported() {
        let empty = ResourceDirectory::new("www", Vec::<String>::new());
        let err = validate(&icons_descriptor(), &empty, &release("1.2.0")).unwrap_err();
        assert_eq!(kinds(&err), vec![ViolationKind::EmptyResourceSet]);
    }

    #[test]
    fn version_drift_is_reported() {
        let err = validate(&icons_descriptor(), &icons(), &release("1.1.9")).unwrap_err();
        assert_eq!(kinds(&err), vec![ViolationKind::VersionDrift]);
        assert!(err[0].detail.contains("1.2.0"));
        assert!(err[0].detail.contains("1.1.9"));
    }

    #[test]
    fn runtime_adapters_may_ship_nothing() {
        let descriptor = AdapterDescriptor {
            mode: AdapterMode::Daemon,
            only_www: false,
            adapter_type: "lighting".to_string(),
            main: Some("main.js".to_string()),
            ..icons_descriptor()
        };
        let empty = ResourceDirectory::default();
        assert_eq!(validate(&descriptor, &empty, &release("1.2.0")), Ok(()));
    }

    #[test]
    fn entry_points_are_reported_from_both_records() {
        let descriptor = AdapterDescriptor {
            main: Some("main.js".to_string()),
            ..icons_descriptor()
        };
        let mut rel = release("1.2.0");
        rel.main = Some("build/main.js".to_string());

        let err = validate(&descriptor, &icons(), &rel).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                ViolationKind::EntryPointDeclared,
                ViolationKind::EntryPointDeclared
            ]
        );
        assert!(err[0].detail.starts_with("descriptor"));
        assert!(err[1].detail.starts_with("release"));
    }

    #[test]
    fn unknown_type_is_reported_unless_allowed() {
        let descriptor = AdapterDescriptor {
            adapter_type: "icon-pack".to_string(),
            ..icons_descriptor()
        };
        let err = validate(&descriptor, &icons(), &release("1.2.0")).unwrap_err();
        assert_eq!(kinds(&err), vec![ViolationKind::UnknownType]);

        let options = ValidationOptions {
            extra_types: vec!["icon-pack".to_string()],
        };
        assert_eq!(
            validate_with(&descriptor, &icons(), &release("1.2.0"), &options),
            Ok(())
        );
    }

    #[test]
    fn unknown_mode_also_mismatches() {
        let descriptor = AdapterDescriptor {
            mode: AdapterMode::parse("forever"),
            ..icons_descriptor()
        };
        let err = validate(&descriptor, &icons(), &release("1.2.0")).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![ViolationKind::UnknownMode, ViolationKind::ModeMismatch]
        );
    }

    #[test]
    fn versions_compare_semantically() {
        let descriptor = AdapterDescriptor {
            version: " 1.2.0".to_string(),
            ..icons_descriptor()
        };
        assert_eq!(validate(&descriptor, &icons(), &release("1.2.0 ")), Ok(()));
    }

    #[test]
    fn malformed_versions_are_invalid_and_compared_as_text() {
        let descriptor = AdapterDescriptor {
            version: "1.2".to_string(),
            ..icons_descriptor()
        };
        let err = validate(&descriptor, &icons(), &release("1.2")).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![ViolationKind::InvalidVersion, ViolationKind::InvalidVersion]
        );

        let err = validate(&descriptor, &icons(), &release("1.2.0")).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![ViolationKind::InvalidVersion, ViolationKind::VersionDrift]
        );
    }

    #[test]
    fn all_violations_are_reported_in_order() {
        let descriptor = AdapterDescriptor {
            mode: AdapterMode::Schedule,
            adapter_type: "icons".to_string(),
            ..icons_descriptor()
        };
        let empty = ResourceDirectory::default();
        let err = validate(&descriptor, &empty, &release("1.1.9")).unwrap_err();
        assert_eq!(
            kinds(&err),
            vec![
                ViolationKind::ModeMismatch,
                ViolationKind::EmptyResourceSet,
                ViolationKind::UnknownType,
                ViolationKind::VersionDrift,
            ]
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let descriptor = AdapterDescriptor {
            mode: AdapterMode::Daemon,
            ..icons_descriptor()
        };
        let first = validate(&descriptor, &icons(), &release("0.9.0"));
        let second = validate(&descriptor, &icons(), &release("0.9.0"));
        assert_eq!(first, second);
    }

    #[test]
    fn check_document_surfaces_missing_fields() {
        let doc = json!({ "common": { "name": "icons-example", "mode": "none" } });
        let err = check_document(
            &doc,
            &icons(),
            &release("1.2.0"),
            &ValidationOptions::default(),
        )
        .unwrap_err();
        assert!(err.iter().all(|v| v.kind == ViolationKind::MissingField));
        assert!(err.iter().any(|v| v.detail == "onlyWWW"));
    }

    #[test]
    fn check_document_runs_full_validation() {
        let doc = json!({
            "mode": "daemon",
            "name": "icons-example",
            "onlyWWW": true,
            "noConfig": true,
            "singleton": true,
            "type": "visualization-icons",
            "version": "1.2.0"
        });
        let err = check_document(
            &doc,
            &icons(),
            &release("1.2.0"),
            &ValidationOptions::default(),
        )
        .unwrap_err();
        assert_eq!(kinds(&err), vec![ViolationKind::ModeMismatch]);
    }
}
