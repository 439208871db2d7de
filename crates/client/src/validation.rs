//! Constraint validation for model values.
//!
//! Responsibilities:
//! - Walk a model value (nested structures, lists, maps, unions) and check the
//!   constraints declared on its fields: required markers, length ranges,
//!   numeric ranges, regex patterns, and enum knownness under a strict policy.
//! - Report every violation with the dotted path of the offending field.
//!
//! Does NOT handle:
//! - Rejecting values at construction time. Models accept any value; checking
//!   is advisory and runs only when a caller asks for it.
//!
//! Invariants:
//! - Validation never panics; an invalid pattern is reported as a violation.
//! - Paths use wire names (`PhysicalTableMap.t1.RelationalTable.Name`,
//!   `Tags[0].Key`).

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{LazyLock, Mutex};

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

pub use quicksight_config::EnumPolicy;

use crate::error::{ModelError, Result};
use crate::types::{SensitiveString, Timestamp};

/// Options controlling how strictly values are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub enums: EnumPolicy,
}

impl ValidationPolicy {
    /// A policy that also rejects enum values outside the documented domain.
    pub fn strict() -> Self {
        Self {
            enums: EnumPolicy::Strict,
        }
    }
}

impl From<&quicksight_config::Config> for ValidationPolicy {
    fn from(config: &quicksight_config::Config) -> Self {
        Self {
            enums: config.enum_policy,
        }
    }
}

/// What went wrong at one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    Missing,
    Length {
        min: usize,
        max: usize,
        actual: usize,
    },
    Range {
        min: i64,
        max: i64,
        actual: i64,
    },
    Pattern {
        pattern: &'static str,
    },
    InvalidPattern {
        pattern: &'static str,
    },
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },
    UnknownUnionVariant {
        union: &'static str,
        key: String,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "is required"),
            Self::Length { min, max, actual } => {
                write!(f, "length {actual} is outside {min}..={max}")
            }
            Self::Range { min, max, actual } => {
                write!(f, "value {actual} is outside {min}..={max}")
            }
            Self::Pattern { pattern } => write!(f, "does not match {pattern}"),
            Self::InvalidPattern { pattern } => write!(f, "has an unusable pattern {pattern}"),
            Self::UnknownEnumValue { enum_name, value } => {
                write!(f, "'{value}' is not a known {enum_name} value")
            }
            Self::UnknownUnionVariant { union, key } if key.is_empty() => {
                write!(f, "carries no {union} variant")
            }
            Self::UnknownUnionVariant { union, key } => {
                write!(f, "'{key}' is not a known {union} variant")
            }
        }
    }
}

/// A single failed constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintViolation {
    pub path: String,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.kind)
    }
}

/// All violations found in one value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<ConstraintViolation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations at exactly this path.
    pub fn at(&self, path: &str) -> Vec<&ViolationKind> {
        self.violations
            .iter()
            .filter(|v| v.path == path)
            .map(|v| &v.kind)
            .collect()
    }

    /// Convert into a `Result`, failing with `ModelError::Validation` when
    /// any violation was found.
    pub fn into_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ModelError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.violations.is_empty() {
            return f.write_str("no violations");
        }
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Traversal state: current path, policy, and collected violations.
pub struct ValidationContext<'p> {
    policy: &'p ValidationPolicy,
    path: Vec<String>,
    violations: Vec<ConstraintViolation>,
}

impl<'p> ValidationContext<'p> {
    pub fn new(policy: &'p ValidationPolicy) -> Self {
        Self {
            policy,
            path: Vec::new(),
            violations: Vec::new(),
        }
    }

    pub fn policy(&self) -> &ValidationPolicy {
        self.policy
    }

    pub fn enter(&mut self, segment: impl Into<String>) {
        self.path.push(segment.into());
    }

    pub fn enter_index(&mut self, index: usize) {
        self.path.push(format!("[{index}]"));
    }

    pub fn leave(&mut self) {
        self.path.pop();
    }

    /// Current dotted path.
    pub fn path(&self) -> String {
        let mut out = String::new();
        for segment in &self.path {
            if !out.is_empty() && !segment.starts_with('[') {
                out.push('.');
            }
            out.push_str(segment);
        }
        out
    }

    fn report(&mut self, kind: ViolationKind) {
        let path = self.path();
        self.violations.push(ConstraintViolation { path, kind });
    }

    pub fn check_required(&mut self, present: bool) {
        if !present {
            self.report(ViolationKind::Missing);
        }
    }

    pub fn check_length(&mut self, actual: usize, min: usize, max: usize) {
        if actual < min || actual > max {
            self.report(ViolationKind::Length { min, max, actual });
        }
    }

    pub fn check_range(&mut self, actual: i64, min: i64, max: i64) {
        if actual < min || actual > max {
            self.report(ViolationKind::Range { min, max, actual });
        }
    }

    pub fn check_pattern(&mut self, value: &str, pattern: &'static str) {
        match compiled(pattern) {
            Some(re) if re.is_match(value) => {}
            Some(_) => self.report(ViolationKind::Pattern { pattern }),
            None => self.report(ViolationKind::InvalidPattern { pattern }),
        }
    }

    pub fn check_enum(&mut self, enum_name: &'static str, value: &str, known: bool) {
        if !known && self.policy.enums == EnumPolicy::Strict {
            self.report(ViolationKind::UnknownEnumValue {
                enum_name,
                value: value.to_string(),
            });
        }
    }

    /// Unknown union variants follow the enum policy.
    pub fn check_union_variant(&mut self, union: &'static str, key: &str) {
        if self.policy.enums == EnumPolicy::Strict {
            self.report(ViolationKind::UnknownUnionVariant {
                union,
                key: key.to_string(),
            });
        }
    }

    pub fn finish(self) -> ValidationReport {
        ValidationReport {
            violations: self.violations,
        }
    }
}

static PATTERNS: LazyLock<Mutex<HashMap<&'static str, Option<Regex>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Compile a declared pattern once. Patterns match the whole value.
fn compiled(pattern: &'static str) -> Option<Regex> {
    let mut cache = PATTERNS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    cache
        .entry(pattern)
        .or_insert_with(|| {
            let anchored = if pattern.starts_with('^') {
                pattern.to_string()
            } else {
                format!("^(?:{pattern})$")
            };
            match Regex::new(&anchored) {
                Ok(re) => Some(re),
                Err(e) => {
                    tracing::warn!(pattern, error = %e, "Unusable field pattern");
                    None
                }
            }
        })
        .clone()
}

/// A value whose declared field constraints can be checked.
pub trait Validate {
    /// Check this value, recording violations in `ctx`.
    fn validate_into(&self, ctx: &mut ValidationContext<'_>);

    /// Check this value under `policy` and collect the report.
    fn validate(&self, policy: &ValidationPolicy) -> ValidationReport {
        let mut ctx = ValidationContext::new(policy);
        self.validate_into(&mut ctx);
        let report = ctx.finish();
        tracing::debug!(violations = report.violations.len(), "Validated model value");
        report
    }
}

macro_rules! leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Validate for $ty {
                fn validate_into(&self, _ctx: &mut ValidationContext<'_>) {}
            }
        )*
    };
}

leaf!(String, bool, i32, i64, Decimal, Timestamp, SensitiveString);

impl<T: Validate> Validate for Vec<T> {
    fn validate_into(&self, ctx: &mut ValidationContext<'_>) {
        for (i, item) in self.iter().enumerate() {
            ctx.enter_index(i);
            item.validate_into(ctx);
            ctx.leave();
        }
    }
}

impl<T: Validate> Validate for BTreeMap<String, T> {
    fn validate_into(&self, ctx: &mut ValidationContext<'_>) {
        for (key, value) in self {
            ctx.enter(key.as_str());
            value.validate_into(ctx);
            ctx.leave();
        }
    }
}

/// Size of a value for length constraints: characters for strings, items
/// for collections.
pub trait Measure {
    fn measure(&self) -> usize;
}

impl Measure for String {
    fn measure(&self) -> usize {
        self.chars().count()
    }
}

impl Measure for SensitiveString {
    fn measure(&self) -> usize {
        self.expose().chars().count()
    }
}

impl<T> Measure for Vec<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measure for BTreeMap<String, T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_joins_segments_and_indexes() {
        let policy = ValidationPolicy::default();
        let mut ctx = ValidationContext::new(&policy);
        ctx.enter("Tags");
        ctx.enter_index(2);
        ctx.enter("Key");
        assert_eq!(ctx.path(), "Tags[2].Key");
        ctx.leave();
        ctx.leave();
        ctx.leave();
        assert_eq!(ctx.path(), "");
    }

    #[test]
    fn test_length_and_range_bounds_are_inclusive() {
        let policy = ValidationPolicy::default();
        let mut ctx = ValidationContext::new(&policy);
        ctx.check_length(1, 1, 128);
        ctx.check_length(128, 1, 128);
        ctx.check_range(65535, 1, 65535);
        assert!(ctx.finish().is_valid());

        let mut ctx = ValidationContext::new(&policy);
        ctx.check_length(0, 1, 128);
        ctx.check_range(0, 1, 65535);
        assert_eq!(ctx.finish().violations.len(), 2);
    }

    #[test]
    fn test_pattern_matches_whole_value() {
        let policy = ValidationPolicy::default();
        let mut ctx = ValidationContext::new(&policy);
        ctx.enter("DataSetId");
        ctx.check_pattern("abc-123", "[\\w\\-]+");
        ctx.check_pattern("abc 123", "[\\w\\-]+");
        let report = ctx.finish();
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].path, "DataSetId");
    }

    #[test]
    fn test_invalid_pattern_is_reported_not_panicked() {
        let policy = ValidationPolicy::default();
        let mut ctx = ValidationContext::new(&policy);
        ctx.check_pattern("x", "(unclosed");
        let report = ctx.finish();
        assert_eq!(
            report.violations[0].kind,
            ViolationKind::InvalidPattern {
                pattern: "(unclosed"
            }
        );
    }

    #[test]
    fn test_enum_check_depends_on_policy() {
        let lenient = ValidationPolicy::default();
        let mut ctx = ValidationContext::new(&lenient);
        ctx.check_enum("DataSourceType", "NEW_ENGINE", false);
        assert!(ctx.finish().is_valid());

        let strict = ValidationPolicy::strict();
        let mut ctx = ValidationContext::new(&strict);
        ctx.check_enum("DataSourceType", "NEW_ENGINE", false);
        ctx.check_enum("DataSourceType", "ATHENA", true);
        let report = ctx.finish();
        assert_eq!(report.violations.len(), 1);
        assert!(report.to_string().contains("'NEW_ENGINE' is not a known DataSourceType value"));
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationReport::default().into_result().is_ok());

        let report = ValidationReport {
            violations: vec![ConstraintViolation {
                path: "Name".to_string(),
                kind: ViolationKind::Missing,
            }],
        };
        let err = report.into_result().unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: Name is required");
    }

    #[test]
    fn test_measure_counts_characters() {
        assert_eq!("héllo".to_string().measure(), 5);
        assert_eq!(vec![1, 2, 3].measure(), 3);
    }
}
