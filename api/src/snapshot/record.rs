// File: api/src/snapshot/record.rs
use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Field names of a node record, in storage position order.
pub const RECORD_KEYS: [&str; 14] = [
    "addr", "port", "agent", "since", "services", "height", "hostname", "city", "country", "lat",
    "lng", "timezone", "asn", "org",
];

/// On-disk form of a node record: a fixed 14-element JSON array.
type PositionalRecord = (
    String,
    u16,
    String,
    i64,
    u64,
    u64,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<Number>,
    Option<Number>,
    Option<String>,
    Option<String>,
    Option<String>,
);

/// One reachable node as observed in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PositionalRecord", into = "PositionalRecord")]
pub struct NodeRecord {
    pub addr: String,
    pub port: u16,
    pub agent: String,
    /// Unix timestamp the node was first seen
    pub since: i64,
    pub services: u64,
    pub height: u64,
    pub hostname: Option<String>,
    pub geo: GeoInfo,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoInfo {
    pub city: Option<String>,
    pub country: Option<String>,
    /// Kept as parsed so coordinates are written back exactly as read
    pub lat: Option<Number>,
    pub lng: Option<Number>,
    pub timezone: Option<String>,
    pub asn: Option<String>,
    pub org: Option<String>,
}

impl From<PositionalRecord> for NodeRecord {
    fn from(row: PositionalRecord) -> Self {
        let (
            addr,
            port,
            agent,
            since,
            services,
            height,
            hostname,
            city,
            country,
            lat,
            lng,
            timezone,
            asn,
            org,
        ) = row;

        Self {
            addr,
            port,
            agent,
            since,
            services,
            height,
            hostname,
            geo: GeoInfo {
                city,
                country,
                lat,
                lng,
                timezone,
                asn,
                org,
            },
        }
    }
}

impl From<NodeRecord> for PositionalRecord {
    fn from(record: NodeRecord) -> Self {
        let NodeRecord {
            addr,
            port,
            agent,
            since,
            services,
            height,
            hostname,
            geo,
        } = record;

        (
            addr,
            port,
            agent,
            since,
            services,
            height,
            hostname,
            geo.city,
            geo.country,
            geo.lat,
            geo.lng,
            geo.timezone,
            geo.asn,
            geo.org,
        )
    }
}
