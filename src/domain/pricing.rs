//! Influencer cost estimates.
//!
//! Every deliverable is priced off the feed post rate (10-15 KRW per follower)
//! and requested deliverables are summed. Arithmetic runs in tenths of a won so
//! the final rounding to the nearest 1,000 is exact.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Requested deliverable format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Feed,
    Reels,
    Story,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [ContentType::Feed, ContentType::Reels, ContentType::Story];

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Feed => "feed",
            ContentType::Reels => "reels",
            ContentType::Story => "story",
        }
    }

    /// Per-follower (min, max) rate in tenths of a won.
    fn rate_tenths(&self) -> (u64, u64) {
        match self {
            // feedMin = N * 10, feedMax = N * 15
            ContentType::Feed => (100, 150),
            // feedMin * 1.5, feedMax * 2
            ContentType::Reels => (150, 300),
            // feedMin * 0.3, feedMax * 0.3
            ContentType::Story => (30, 45),
        }
    }
}

/// Non-empty set of content types.
///
/// Starts as `{feed}`; removing the last remaining type is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSelection {
    types: BTreeSet<ContentType>,
}

impl Default for ContentSelection {
    fn default() -> Self {
        Self::single(ContentType::Feed)
    }
}

impl ContentSelection {
    pub fn single(content: ContentType) -> Self {
        Self {
            types: BTreeSet::from([content]),
        }
    }

    /// All deliverables; the configuration used for aggregate cost.
    pub fn full() -> Self {
        Self {
            types: ContentType::ALL.into_iter().collect(),
        }
    }

    /// Builds a selection from an arbitrary iterator, or `None` if it is empty.
    pub fn from_types(types: impl IntoIterator<Item = ContentType>) -> Option<Self> {
        let types: BTreeSet<_> = types.into_iter().collect();
        if types.is_empty() {
            None
        } else {
            Some(Self { types })
        }
    }

    /// Adds or removes `content`. Returns false when the toggle was refused
    /// because it would leave the selection empty.
    pub fn toggle(&mut self, content: ContentType) -> bool {
        if self.types.contains(&content) {
            if self.types.len() == 1 {
                return false;
            }
            self.types.remove(&content);
        } else {
            self.types.insert(content);
        }
        true
    }

    pub fn contains(&self, content: ContentType) -> bool {
        self.types.contains(&content)
    }

    pub fn iter(&self) -> impl Iterator<Item = ContentType> + '_ {
        self.types.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }
}

/// Price range in whole KRW, both ends rounded to the nearest 1,000.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub min: u64,
    pub max: u64,
}

pub fn estimate(follower_count: u64, contents: &ContentSelection) -> PriceEstimate {
    let (min_tenths, max_tenths) = contents.iter().fold((0u64, 0u64), |(min, max), content| {
        let (min_rate, max_rate) = content.rate_tenths();
        (
            min.saturating_add(follower_count.saturating_mul(min_rate)),
            max.saturating_add(follower_count.saturating_mul(max_rate)),
        )
    });

    PriceEstimate {
        min: round_to_thousand(min_tenths),
        max: round_to_thousand(max_tenths),
    }
}

/// Rounds a tenths-of-a-won amount to whole won at the nearest 1,000, halves up.
fn round_to_thousand(tenths: u64) -> u64 {
    const STEP: u64 = 10_000;
    (tenths / STEP + u64::from(tenths % STEP >= STEP / 2)).saturating_mul(1_000)
}
