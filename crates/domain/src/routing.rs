//! Routing policy variants layered over any record set by the provider.

use crate::extension::KeyValues;
use serde::{Deserialize, Serialize};

const KEY_FAILOVER: &str = "failover";
const KEY_COUNTRY: &str = "countryCode";
const KEY_CONTINENT: &str = "continentCode";
const KEY_SUBDIVISION: &str = "subdivisionCode";
// Historical misspelling still found in old zone files.
const KEY_SUBDIVISION_LEGACY: &str = "subdivisonCode";
const KEY_REGION: &str = "region";
const KEY_WEIGHT: &str = "weight";

/// One routing strategy per record set; mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutingPolicy {
    Failover {
        state: String,
    },
    GeoLocation {
        country_code: Option<String>,
        continent_code: Option<String>,
        subdivision_code: Option<String>,
    },
    Latency {
        region: String,
    },
    Weighted {
        weight: i64,
    },
    MultiValue,
}

impl RoutingPolicy {
    /// Select and populate a variant from a parsed key/value sequence.
    /// Returns `None` for a routing strategy name we do not know.
    pub fn from_key_values(routing: &str, kvs: &KeyValues) -> Option<RoutingPolicy> {
        match routing {
            "FAILOVER" => Some(RoutingPolicy::Failover {
                state: kvs.get_str(KEY_FAILOVER),
            }),
            "GEOLOCATION" => Some(RoutingPolicy::GeoLocation {
                country_code: kvs.get_opt_str(KEY_COUNTRY),
                continent_code: kvs.get_opt_str(KEY_CONTINENT),
                subdivision_code: kvs
                    .get_opt_str(KEY_SUBDIVISION)
                    .or_else(|| kvs.get_opt_str(KEY_SUBDIVISION_LEGACY)),
            }),
            "LATENCY" => Some(RoutingPolicy::Latency {
                region: kvs.get_str(KEY_REGION),
            }),
            "WEIGHTED" => Some(RoutingPolicy::Weighted {
                weight: kvs.get_int(KEY_WEIGHT),
            }),
            "MULTIVALUE" => Some(RoutingPolicy::MultiValue),
            _ => None,
        }
    }

    /// Canonical key/value rendering, keys in fixed per-variant order so
    /// round-tripping is stable.
    pub fn to_key_values(&self) -> KeyValues {
        let mut kvs = KeyValues::new();
        match self {
            RoutingPolicy::Failover { state } => {
                kvs.push_str("routing", "FAILOVER");
                kvs.push_str(KEY_FAILOVER, state.clone());
            }
            RoutingPolicy::GeoLocation {
                country_code,
                continent_code,
                subdivision_code,
            } => {
                kvs.push_str("routing", "GEOLOCATION");
                if let Some(cc) = country_code {
                    kvs.push_str(KEY_COUNTRY, cc.clone());
                }
                if let Some(cc) = continent_code {
                    kvs.push_str(KEY_CONTINENT, cc.clone());
                }
                if let Some(sc) = subdivision_code {
                    kvs.push_str(KEY_SUBDIVISION, sc.clone());
                }
            }
            RoutingPolicy::Latency { region } => {
                kvs.push_str("routing", "LATENCY");
                kvs.push_str(KEY_REGION, region.clone());
            }
            RoutingPolicy::Weighted { weight } => {
                kvs.push_str("routing", "WEIGHTED");
                kvs.push_int(KEY_WEIGHT, *weight);
            }
            RoutingPolicy::MultiValue => {
                kvs.push_str("routing", "MULTIVALUE");
            }
        }
        kvs
    }
}
