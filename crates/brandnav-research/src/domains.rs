//! Domain-availability stage: live RDAP lookups across configured TLDs.

use brandnav_core::BrandQuery;
use brandnav_domains::{DomainClient, RegistrationStatus};

use crate::types::{DomainSection, DomainStatus, SectionResult};

/// Check registration status of `{label}.{tld}` for each configured TLD.
///
/// One domain's lookup failure yields an `error` entry for that domain only.
/// Only an underivable domain label fails the whole section.
pub(crate) async fn check_domains(
    client: &DomainClient,
    query: &BrandQuery,
    tlds: &[String],
) -> SectionResult<DomainSection> {
    let Some(label) = query.domain_label() else {
        tracing::warn!(brand = %query, "no usable domain label");
        return SectionResult::err(format!(
            "could not derive a domain label from brand name '{query}'"
        ));
    };

    let mut statuses = DomainSection::new();
    for tld in tlds {
        let domain = format!("{label}.{tld}");
        let status = match client.check(&domain).await {
            Ok(RegistrationStatus::Registered) => DomainStatus::NotAvailable,
            Ok(RegistrationStatus::Unregistered) => DomainStatus::PotentiallyAvailable,
            Ok(RegistrationStatus::Inconclusive) => DomainStatus::Inconclusive,
            Err(e) => {
                tracing::warn!(domain, error = %e, "domain lookup failed");
                DomainStatus::Error
            }
        };
        tracing::info!(domain, status = ?status, "domain checked");
        statuses.insert(domain, status);
    }

    SectionResult::Ok(statuses)
}
