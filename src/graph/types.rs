//! Core type definitions for the intelligence graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned unique identifier for a node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

/// Identifier for a connection between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct EdgeId(String);

impl EdgeId {
    pub fn new(id: impl Into<String>) -> Self {
        EdgeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(s: &str) -> Self {
        EdgeId(s.to_string())
    }
}

impl From<String> for EdgeId {
    fn from(s: String) -> Self {
        EdgeId(s)
    }
}

/// Broad grouping of node categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFamily {
    Subject,
    NetworkInfra,
    Communication,
    Financial,
    Physical,
    TravelLogistics,
    ContentMedia,
    Collection,
    Analysis,
    Ops,
    Unknown,
}

macro_rules! node_categories {
    ($($family:ident => [$($variant:ident = $wire:literal),+ $(,)?]),+ $(,)?) => {
        /// Closed vocabulary of entity kinds a node can represent.
        ///
        /// Categories that the editor does not know about deserialize to
        /// [`NodeCategory::Unknown`].
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub enum NodeCategory {
            $($(
                #[serde(rename = $wire)]
                $variant,
            )+)+
            #[default]
            #[serde(other, rename = "UNKNOWN")]
            Unknown,
        }

        impl NodeCategory {
            /// Every known category, excluding `Unknown`
            pub const ALL: &'static [NodeCategory] = &[$($(NodeCategory::$variant,)+)+];

            /// Wire name as used in snapshots (e.g. `PHONE_NUMBER`)
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($(NodeCategory::$variant => $wire,)+)+
                    NodeCategory::Unknown => "UNKNOWN",
                }
            }

            pub fn family(&self) -> CategoryFamily {
                match self {
                    $($(NodeCategory::$variant => CategoryFamily::$family,)+)+
                    NodeCategory::Unknown => CategoryFamily::Unknown,
                }
            }

            /// Parse a wire name; unrecognised names map to `Unknown`
            pub fn parse(name: &str) -> Self {
                match name {
                    $($($wire => NodeCategory::$variant,)+)+
                    _ => NodeCategory::Unknown,
                }
            }
        }
    };
}

node_categories! {
    Subject => [
        Entity = "ENTITY",
        Organization = "ORGANIZATION",
        ThreatActor = "THREAT_ACTOR",
        Identity = "IDENTITY",
        MilitaryUnit = "MILITARY_UNIT",
        GovAgency = "GOV_AGENCY",
        CompanyRegistration = "COMPANY_REGISTRATION",
    ],
    NetworkInfra => [
        IpAddress = "IP_ADDRESS",
        MacAddress = "MAC_ADDRESS",
        Domain = "DOMAIN",
        Url = "URL",
        Server = "SERVER",
        C2Server = "C2_SERVER",
        CloudService = "CLOUD_SERVICE",
        Wifi = "WIFI",
        Asn = "ASN",
        SslCert = "SSL_CERT",
        Botnet = "BOTNET",
    ],
    Communication => [
        Email = "EMAIL",
        PhoneNumber = "PHONE_NUMBER",
        SocialProfile = "SOCIAL_PROFILE",
        MessagingId = "MESSAGING_ID",
        ForumAccount = "FORUM_ACCOUNT",
        App = "APP",
    ],
    Financial => [
        CryptoWallet = "CRYPTO_WALLET",
        BankAccount = "BANK_ACCOUNT",
        CreditCard = "CREDIT_CARD",
        Transaction = "TRANSACTION",
    ],
    Physical => [
        GeoLocation = "GEO_LOCATION",
        Facility = "FACILITY",
        Vehicle = "VEHICLE",
        LicensePlate = "LICENSE_PLATE",
        Device = "DEVICE",
        Weapon = "WEAPON",
        SimCard = "SIM_CARD",
    ],
    TravelLogistics => [
        Flight = "FLIGHT",
        Hotel = "HOTEL",
        Shipping = "SHIPPING",
        Passport = "PASSPORT",
        Visa = "VISA",
    ],
    ContentMedia => [
        Image = "IMAGE",
        Video = "VIDEO",
        Audio = "AUDIO",
        Document = "DOCUMENT",
        SocialPost = "SOCIAL_POST",
        NewsArticle = "NEWS_ARTICLE",
        DarkwebSite = "DARKWEB_SITE",
        FileHash = "FILE_HASH",
        CodeSnippet = "CODE_SNIPPET",
        Exploit = "EXPLOIT",
        PhishingKit = "PHISHING_KIT",
    ],
    Collection => [
        SourceHumint = "SOURCE_HUMINT",
        SourceSigint = "SOURCE_SIGINT",
        SourceImint = "SOURCE_IMINT",
        SourceGeoint = "SOURCE_GEOINT",
        SourceOsint = "SOURCE_OSINT",
        SourceMasint = "SOURCE_MASINT",
    ],
    Analysis => [
        Report = "REPORT",
        Note = "NOTE",
        Event = "EVENT",
        Campaign = "CAMPAIGN",
        Vulnerability = "VULNERABILITY",
        Malware = "MALWARE",
        AttackPattern = "ATTACK_PATTERN",
        Indicator = "INDICATOR",
        Topic = "TOPIC",
        Hypothesis = "HYPOTHESIS",
        LegalCase = "LEGAL_CASE",
    ],
    Ops => [
        SearchQuery = "SEARCH_QUERY",
        DataSource = "DATA_SOURCE",
        LeakDump = "LEAK_DUMP",
        Sensor = "SENSOR",
    ],
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
