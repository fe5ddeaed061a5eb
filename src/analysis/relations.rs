//! Relation expectation model
//!
//! Domain prior knowledge: for a node of a given category, the probability
//! that a thorough investigation links it to a neighbor of each target
//! category. A person is expected to have a phone number with p = 0.85, a
//! domain to resolve to an IP address with p = 0.80, and so on.

use crate::graph::NodeCategory;
use crate::graph::NodeCategory::*;

/// Expected (target category, probability) pairs for one source category
pub type Expectations = &'static [(NodeCategory, f64)];

const PERSON: Expectations = &[
    (PhoneNumber, 0.85),
    (Email, 0.80),
    (SocialProfile, 0.75),
    (Organization, 0.70),
    (GeoLocation, 0.65),
    (BankAccount, 0.50),
    (Vehicle, 0.45),
    (Device, 0.60),
    (Document, 0.55),
    (Entity, 0.40),
];

const ORGANIZATION: Expectations = &[
    (Entity, 0.85),
    (GeoLocation, 0.80),
    (Domain, 0.75),
    (Email, 0.70),
    (PhoneNumber, 0.65),
    (BankAccount, 0.60),
    (CompanyRegistration, 0.55),
    (SocialProfile, 0.50),
];

const THREAT_ACTOR: Expectations = &[
    (Malware, 0.85),
    (IpAddress, 0.80),
    (Domain, 0.80),
    (C2Server, 0.75),
    (Exploit, 0.70),
    (AttackPattern, 0.70),
    (Vulnerability, 0.65),
    (Campaign, 0.60),
    (Indicator, 0.55),
];

const IP_ADDRESS: Expectations = &[
    (Domain, 0.75),
    (Server, 0.70),
    (GeoLocation, 0.65),
    (Asn, 0.60),
    (Malware, 0.45),
    (C2Server, 0.40),
];

const DOMAIN: Expectations = &[
    (IpAddress, 0.80),
    (SslCert, 0.65),
    (Organization, 0.55),
    (Email, 0.50),
    (Server, 0.45),
];

const EMAIL: Expectations = &[
    (Entity, 0.85),
    (Organization, 0.60),
    (Domain, 0.55),
    (SocialProfile, 0.50),
];

const PHONE_NUMBER: Expectations = &[
    (Entity, 0.90),
    (GeoLocation, 0.55),
    (Device, 0.50),
    (SimCard, 0.45),
];

const SOCIAL_PROFILE: Expectations = &[
    (Entity, 0.90),
    (Email, 0.60),
    (PhoneNumber, 0.50),
    (Image, 0.45),
    (SocialPost, 0.40),
];

const CRYPTO_WALLET: Expectations = &[
    (Transaction, 0.85),
    (Entity, 0.60),
    (CryptoWallet, 0.55),
    (Organization, 0.40),
];

const TRANSACTION: Expectations = &[
    (CryptoWallet, 0.90),
    (BankAccount, 0.70),
    (Entity, 0.55),
];

const GEO_LOCATION: Expectations = &[
    (Entity, 0.70),
    (Organization, 0.65),
    (Facility, 0.55),
    (Event, 0.50),
];

const VEHICLE: Expectations = &[
    (Entity, 0.85),
    (LicensePlate, 0.80),
    (GeoLocation, 0.55),
];

const MALWARE: Expectations = &[
    (FileHash, 0.90),
    (ThreatActor, 0.75),
    (C2Server, 0.70),
    (IpAddress, 0.65),
    (Vulnerability, 0.60),
    (AttackPattern, 0.55),
];

const EVENT: Expectations = &[
    (Entity, 0.80),
    (GeoLocation, 0.75),
    (Organization, 0.60),
    (Document, 0.50),
];

const FLIGHT: Expectations = &[
    (Entity, 0.90),
    (GeoLocation, 0.85),
    (Passport, 0.70),
];

const PASSPORT: Expectations = &[
    (Entity, 0.95),
    (Visa, 0.60),
    (Flight, 0.55),
];

/// Static table of expected relations keyed by source category
#[derive(Debug, Clone, Copy, Default)]
pub struct RelationExpectationModel;

impl RelationExpectationModel {
    /// Expected relations of a category, or `None` when the table has no entry
    pub fn expectations(&self, category: NodeCategory) -> Option<Expectations> {
        let table = match category {
            Entity => PERSON,
            Organization => ORGANIZATION,
            ThreatActor => THREAT_ACTOR,
            IpAddress => IP_ADDRESS,
            Domain => DOMAIN,
            Email => EMAIL,
            PhoneNumber => PHONE_NUMBER,
            SocialProfile => SOCIAL_PROFILE,
            CryptoWallet => CRYPTO_WALLET,
            Transaction => TRANSACTION,
            GeoLocation => GEO_LOCATION,
            Vehicle => VEHICLE,
            Malware => MALWARE,
            Event => EVENT,
            Flight => FLIGHT,
            Passport => PASSPORT,
            _ => return None,
        };
        Some(table)
    }

    /// Expected probability of a (source, target) pair, 0 when not listed
    pub fn probability(&self, source: NodeCategory, target: NodeCategory) -> f64 {
        self.expectations(source)
            .and_then(|table| table.iter().find(|(t, _)| *t == target))
            .map(|(_, p)| *p)
            .unwrap_or(0.0)
    }

    /// Human-readable hint for a missing relation
    pub fn describe_missing(&self, source: NodeCategory, target: NodeCategory) -> String {
        let template = match (source, target) {
            (Entity, PhoneNumber) => "This person has no linked phone number",
            (Entity, Email) => "This person has no linked email address",
            (Entity, SocialProfile) => "This person has no linked social media account",
            (Entity, Organization) => "This person has no linked organization or employer",
            (Entity, GeoLocation) => "This person has no known location",
            (Organization, Entity) => "This organization has no linked people",
            (Organization, Domain) => "This organization has no linked domain",
            (ThreatActor, Malware) => "This threat actor has no attributed malware",
            (ThreatActor, IpAddress) => "This threat actor has no linked IP addresses",
            (IpAddress, Domain) => "This IP address has no associated domain",
            (Domain, IpAddress) => "This domain has no resolved IP address",
            (Malware, FileHash) => "This malware has no file hash",
            (CryptoWallet, Transaction) => "This wallet has no recorded transactions",
            (Vehicle, LicensePlate) => "This vehicle has no license plate",
            (Flight, Entity) => "This flight has no linked passengers",
            _ => return format!("Consider linking a {} entity", target),
        };
        template.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        let model = RelationExpectationModel;
        assert_eq!(model.probability(Entity, PhoneNumber), 0.85);
        assert_eq!(model.probability(Passport, Entity), 0.95);
        assert_eq!(model.probability(Entity, Weapon), 0.0);
        assert!(model.expectations(Note).is_none());
        assert!(model.expectations(NodeCategory::Unknown).is_none());
    }

    #[test]
    fn test_probabilities_in_range() {
        let model = RelationExpectationModel;
        for category in NodeCategory::ALL {
            if let Some(table) = model.expectations(*category) {
                assert!(!table.is_empty());
                assert!(table.iter().all(|(_, p)| *p > 0.0 && *p <= 1.0));
            }
        }
    }

    #[test]
    fn test_descriptions() {
        let model = RelationExpectationModel;
        assert_eq!(
            model.describe_missing(Domain, IpAddress),
            "This domain has no resolved IP address"
        );
        assert_eq!(
            model.describe_missing(Organization, BankAccount),
            "Consider linking a BANK_ACCOUNT entity"
        );
    }
}
