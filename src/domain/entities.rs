#![allow(dead_code)]

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// Identifier for influencers in the catalog.
pub type InfluencerId = u32;

/// Identifier for venues in the catalog.
pub type VenueId = u32;

/// Which catalog an id or favorite marker belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Influencer,
    Venue,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Influencer {
    pub id: InfluencerId,
    pub name: String,
    pub handle: String,
    #[serde(deserialize_with = "non_negative_whole")]
    pub follower_count: u64,
    /// Display string such as "4.2%"; never parsed.
    #[serde(default)]
    pub engagement: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub image: String,
}

impl Influencer {
    pub fn platform_kind(&self) -> Option<Platform> {
        Platform::from_label(&self.platform)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub location_ko: String,
    /// Flat booking price in whole KRW.
    #[serde(deserialize_with = "non_negative_whole")]
    pub price: u64,
    #[serde(default)]
    pub pyeong: f64,
    #[serde(default)]
    pub sqm: f64,
    /// Purpose tags. Missing, null or non-array input deserializes to the empty set.
    #[serde(default, deserialize_with = "lenient_purposes")]
    pub types: BTreeSet<Purpose>,
    /// Map pin data, carried through untouched.
    #[serde(default)]
    pub coordinates: Value,
    #[serde(default)]
    pub image: String,
}

/// Categorical venue label used for purpose filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Purpose {
    Club,
    Lounge,
    Hotel,
    EmptyVenue,
    Pub,
    Cafe,
    PartyRoom,
    AfterParty,
    PopUpStore,
    Studio,
    Exhibition,
}

impl Purpose {
    pub const ALL: [Purpose; 11] = [
        Purpose::Club,
        Purpose::Lounge,
        Purpose::Hotel,
        Purpose::EmptyVenue,
        Purpose::Pub,
        Purpose::Cafe,
        Purpose::PartyRoom,
        Purpose::AfterParty,
        Purpose::PopUpStore,
        Purpose::Studio,
        Purpose::Exhibition,
    ];

    /// Purposes offered as filter chips on the venue page.
    pub const FILTER_CHIPS: [Purpose; 9] = [
        Purpose::Club,
        Purpose::Lounge,
        Purpose::Hotel,
        Purpose::EmptyVenue,
        Purpose::Pub,
        Purpose::Cafe,
        Purpose::PartyRoom,
        Purpose::AfterParty,
        Purpose::PopUpStore,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Purpose::Club => "club",
            Purpose::Lounge => "lounge",
            Purpose::Hotel => "hotel",
            Purpose::EmptyVenue => "emptyVenue",
            Purpose::Pub => "pub",
            Purpose::Cafe => "cafe",
            Purpose::PartyRoom => "partyRoom",
            Purpose::AfterParty => "afterParty",
            Purpose::PopUpStore => "popUpStore",
            Purpose::Studio => "studio",
            Purpose::Exhibition => "exhibition",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|purpose| purpose.tag() == tag)
    }
}

/// Social platform short codes shown as filter buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Instagram,
    YouTube,
    TikTok,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::YouTube, Platform::TikTok];

    pub fn code(&self) -> &'static str {
        match self {
            Platform::Instagram => "IG",
            Platform::YouTube => "YT",
            Platform::TikTok => "TK",
        }
    }

    /// Accepts either the short code or the full platform name, case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|platform| {
            let name = match platform {
                Platform::Instagram => "instagram",
                Platform::YouTube => "youtube",
                Platform::TikTok => "tiktok",
            };
            label.eq_ignore_ascii_case(platform.code()) || label.eq_ignore_ascii_case(name)
        })
    }
}

fn non_negative_whole<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    Ok(clamp_number(&number))
}

/// Negative values clamp to zero, fractional values round to the nearest whole unit.
pub(crate) fn clamp_number(number: &Number) -> u64 {
    if let Some(value) = number.as_u64() {
        return value;
    }
    match number.as_f64() {
        Some(value) if value.is_finite() && value > 0.0 => value.round() as u64,
        _ => 0,
    }
}

fn lenient_purposes<'de, D>(deserializer: D) -> Result<BTreeSet<Purpose>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(purposes_from_value(&raw))
}

pub(crate) fn purposes_from_value(raw: &Value) -> BTreeSet<Purpose> {
    match raw {
        Value::Array(entries) => entries
            .iter()
            .filter_map(Value::as_str)
            .filter_map(Purpose::from_tag)
            .collect(),
        _ => BTreeSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn venue_json(types: Value) -> Value {
        json!({
            "id": 7,
            "name": "Studio Seven",
            "location": "Seongsu-dong",
            "locationKo": "성수동",
            "price": 500000,
            "pyeong": 30,
            "sqm": 99.2,
            "types": types,
            "coordinates": { "lat": 37.54, "lng": 127.05 },
            "image": "studio7.jpg"
        })
    }

    #[test]
    fn venue_types_tolerate_missing_and_malformed_input() {
        let null_types: Venue = serde_json::from_value(venue_json(Value::Null)).unwrap();
        assert!(null_types.types.is_empty());

        let string_types: Venue = serde_json::from_value(venue_json(json!("club"))).unwrap();
        assert!(string_types.types.is_empty());

        let mut raw = venue_json(Value::Null);
        raw.as_object_mut().unwrap().remove("types");
        let missing: Venue = serde_json::from_value(raw).unwrap();
        assert!(missing.types.is_empty());
    }

    #[test]
    fn venue_types_keep_known_tags_only() {
        let venue: Venue =
            serde_json::from_value(venue_json(json!(["club", 3, "rooftop", "popUpStore"])))
                .unwrap();
        let expected: BTreeSet<_> = [Purpose::Club, Purpose::PopUpStore].into_iter().collect();
        assert_eq!(venue.types, expected);
    }

    #[test]
    fn negative_and_fractional_numbers_clamp() {
        let mut raw = venue_json(json!([]));
        raw["price"] = json!(-1200);
        let venue: Venue = serde_json::from_value(raw).unwrap();
        assert_eq!(venue.price, 0);

        let influencer: Influencer = serde_json::from_value(json!({
            "id": 1,
            "name": "Kim",
            "handle": "@kim",
            "followerCount": 12345.6,
        }))
        .unwrap();
        assert_eq!(influencer.follower_count, 12346);
    }

    #[test]
    fn platform_labels_match_code_or_name() {
        assert_eq!(Platform::from_label("IG"), Some(Platform::Instagram));
        assert_eq!(Platform::from_label("youtube"), Some(Platform::YouTube));
        assert_eq!(Platform::from_label(" TikTok "), Some(Platform::TikTok));
        assert_eq!(Platform::from_label("Threads"), None);
    }
}
