//! The cities offered by the route planner.

use std::sync::Arc;

/// Every city the route-search endpoint knows, in display order.
pub const CITIES: [&str; 36] = [
    "Atlanta (ATL)",
    "Austin (AUS)",
    "Baltimore (BWI)",
    "Boston (BOS)",
    "Charlotte (CLT)",
    "Chicago (ORD)",
    "Dallas (DFW)",
    "Denver (DEN)",
    "Detroit (DTW)",
    "Fort Lauderdale (FLL)",
    "Honolulu (HNL)",
    "Houston (IAH)",
    "Las Vegas (LAS)",
    "Los Angeles (LAX)",
    "Miami (MIA)",
    "Minneapolis (MSP)",
    "Nashville (BNA)",
    "New Orleans (MSY)",
    "New York (JFK)",
    "New York (LGA)",
    "Newark (EWR)",
    "Oakland (OAK)",
    "Orlando (MCO)",
    "Philadelphia (PHL)",
    "Phoenix (PHX)",
    "Portland (PDX)",
    "Salt Lake City (SLC)",
    "San Diego (SAN)",
    "San Francisco (SFO)",
    "San Jose (SJC)",
    "Seattle (SEA)",
    "Tampa (TPA)",
    "Toronto (YYZ)",
    "Vancouver (YVR)",
    "Washington (DCA)",
    "Washington (IAD)",
];

/// [`CITIES`] as a shared option list.
pub fn city_options() -> Arc<[String]> {
    CITIES.iter().map(|city| city.to_string()).collect()
}
