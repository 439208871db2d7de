//! Enums command implementation.
//!
//! Responsibilities:
//! - List every enumeration domain with its value count.
//! - Show the documented values of a single domain, looked up case-insensitively.
//!
//! Does NOT handle:
//! - Checking values against a domain (see the `validate` command).

use std::str::FromStr;

use anyhow::Result;
use quicksight_client::models::DOMAINS;
use tracing::info;

use crate::error::UnknownDomain;
use crate::formatters::{EnumDomainOutput, OutputFormat, get_formatter, output_result};

/// Collect all domains, or only the one called `name`.
pub fn domains(name: Option<&str>) -> Result<Vec<EnumDomainOutput>, UnknownDomain> {
    let selected: Vec<EnumDomainOutput> = DOMAINS
        .iter()
        .filter(|(domain, _)| name.is_none_or(|n| domain.eq_ignore_ascii_case(n)))
        .map(|(domain, values)| EnumDomainOutput {
            name: *domain,
            values: values.to_vec(),
        })
        .collect();

    match name {
        Some(n) if selected.is_empty() => Err(UnknownDomain(n.to_string())),
        _ => Ok(selected),
    }
}

pub fn run(name: Option<&str>, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let domains = domains(name)?;
    info!(count = domains.len(), "Listing enum domains");

    let formatter = get_formatter(format);
    output_result(&formatter.format_enum_domains(&domains)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_domains() {
        assert_eq!(domains(None).unwrap().len(), DOMAINS.len());
    }

    #[test]
    fn test_single_domain_lookup_ignores_case() {
        let found = domains(Some("userrole")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "UserRole");
        assert!(found[0].values.contains(&"ADMIN"));
    }

    #[test]
    fn test_unknown_domain() {
        let err = domains(Some("Colour")).unwrap_err();
        assert_eq!(err.to_string(), "Unknown enum domain: Colour");
    }
}
