//! Audience-size tiers for influencers.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Nano,
    Micro,
    Macro,
    Mega,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Nano, Tier::Micro, Tier::Macro, Tier::Mega];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Nano => "Nano",
            Tier::Micro => "Micro",
            Tier::Macro => "Macro",
            Tier::Mega => "Mega",
        }
    }

    /// Follower range shown on the tier filter chips (`Band` policy).
    pub fn band_label(&self) -> &'static str {
        match self {
            Tier::Nano => "1k~10k",
            Tier::Micro => "10k~50k",
            Tier::Macro => "50k~100k",
            Tier::Mega => "100k+",
        }
    }
}

/// Threshold set used to bucket follower counts.
///
/// `Badge` is the canonical policy for card badges. `Band` is the coarser set
/// behind the tier filter chips, where anything above 100k counts as Mega.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TierPolicy {
    #[default]
    Badge,
    Band,
}

impl TierPolicy {
    fn mega_threshold(&self) -> u64 {
        match self {
            TierPolicy::Badge => 1_000_000,
            TierPolicy::Band => 100_000,
        }
    }

    pub fn classify(&self, follower_count: u64) -> Tier {
        if follower_count >= self.mega_threshold() {
            Tier::Mega
        } else if follower_count >= 50_000 {
            Tier::Macro
        } else if follower_count >= 10_000 {
            Tier::Micro
        } else {
            Tier::Nano
        }
    }
}

/// Classifies with the canonical badge thresholds.
pub fn classify(follower_count: u64) -> Tier {
    TierPolicy::Badge.classify(follower_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_thresholds_are_inclusive_lower_bounds() {
        assert_eq!(classify(0), Tier::Nano);
        assert_eq!(classify(9_999), Tier::Nano);
        assert_eq!(classify(10_000), Tier::Micro);
        assert_eq!(classify(49_999), Tier::Micro);
        assert_eq!(classify(50_000), Tier::Macro);
        assert_eq!(classify(999_999), Tier::Macro);
        assert_eq!(classify(1_000_000), Tier::Mega);
    }

    #[test]
    fn band_policy_promotes_to_mega_at_100k() {
        assert_eq!(TierPolicy::Band.classify(99_999), Tier::Macro);
        assert_eq!(TierPolicy::Band.classify(100_000), Tier::Mega);
        assert_eq!(TierPolicy::Badge.classify(100_000), Tier::Macro);
        assert_eq!(TierPolicy::Band.classify(9_999), Tier::Nano);
    }

    #[test]
    fn tiers_are_ordered_by_audience_size() {
        let mut tiers = vec![Tier::Mega, Tier::Nano, Tier::Macro, Tier::Micro];
        tiers.sort();
        assert_eq!(tiers, Tier::ALL.to_vec());
    }
}
