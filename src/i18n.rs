//! Localized UI text.
//!
//! Messages are addressed by a closed set of keys. A lookup that has no entry
//! for the requested locale reports [`I18nError::MissingTranslation`] instead
//! of falling back to the key.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Purpose;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    pub fn toggle(self) -> Self {
        match self {
            Locale::Ko => Locale::En,
            Locale::En => Locale::Ko,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ko" | "ko-kr" => Some(Locale::Ko),
            "en" | "en-us" | "en-gb" => Some(Locale::En),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    NavInfluencer,
    NavVenue,
    NavSelections,
    Select,
    Selected,
    SendRequest,
    ItemsSelected,
    ReviewShortlist,
    Items,
    TotalMinimum,
    SelectedInfluencers,
    SelectedVenues,
    NoFavorites,
    RequestUnavailable,
    CatalogUnavailable,
    InfluencerTitle,
    InfluencerSubtitle,
    FilterCategory,
    FilterFollowers,
    FilterPlatform,
    FilterContent,
    AllCategories,
    StatFollowers,
    StatEngagement,
    StatPlatform,
    ViewGrid,
    ViewList,
    Estimate,
    VenueTitle,
    FilterLocation,
    FilterDate,
    FilterPrice,
    FilterSize,
    VenueShowing,
    SortLabel,
    SortRecommended,
    SortPriceLow,
    SortPriceHigh,
    TabInfluencers,
    TabVenues,
    Purpose(Purpose),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    #[error("no {locale:?} translation for {key:?}")]
    MissingTranslation { locale: Locale, key: MessageKey },
    #[error("placeholder {{{name}}} has no value in {key:?}")]
    UnboundPlaceholder { key: MessageKey, name: String },
}

pub fn lookup(locale: Locale, key: MessageKey) -> Result<&'static str, I18nError> {
    table(locale)
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
        .ok_or(I18nError::MissingTranslation { locale, key })
}

/// Looks up `key` and substitutes `{name}` placeholders from `args`.
pub fn format_message(
    locale: Locale,
    key: MessageKey,
    args: &[(&str, &str)],
) -> Result<String, I18nError> {
    let template = lookup(locale, key)?;
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            output.push_str(&rest[start..]);
            rest = "";
            break;
        };
        let name = &after[..end];
        let value = args
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, value)| *value)
            .ok_or_else(|| I18nError::UnboundPlaceholder {
                key,
                name: name.to_string(),
            })?;
        output.push_str(value);
        rest = &after[end + 1..];
    }
    output.push_str(rest);

    Ok(output)
}

fn table(locale: Locale) -> &'static [(MessageKey, &'static str)] {
    match locale {
        Locale::Ko => KO,
        Locale::En => EN,
    }
}

const KO: &[(MessageKey, &str)] = &[
    (MessageKey::NavInfluencer, "인플루언서 찾기"),
    (MessageKey::NavVenue, "베뉴 찾기"),
    (MessageKey::NavSelections, "마이 셀렉션"),
    (MessageKey::Select, "선택하기"),
    (MessageKey::Selected, "선택됨"),
    (MessageKey::SendRequest, "요청 보내기"),
    (MessageKey::ItemsSelected, "개 항목 선택됨"),
    (MessageKey::ReviewShortlist, "선택한 항목을 검토하고 요청을 보내세요."),
    (MessageKey::Items, "개"),
    (MessageKey::TotalMinimum, "총 금액 (최저 금액)"),
    (MessageKey::SelectedInfluencers, "선택한 인플루언서"),
    (MessageKey::SelectedVenues, "선택한 베뉴"),
    (MessageKey::NoFavorites, "아직 즐겨찾기가 없습니다."),
    (MessageKey::RequestUnavailable, "요청 전송은 아직 지원되지 않습니다."),
    (MessageKey::CatalogUnavailable, "카탈로그를 불러오지 못했습니다."),
    (MessageKey::InfluencerTitle, "크리에이터 찾기"),
    (MessageKey::InfluencerSubtitle, "캠페인에 가장 적합한 인플루언서를 찾아보세요."),
    (MessageKey::FilterCategory, "카테고리"),
    (MessageKey::FilterFollowers, "팔로워 수"),
    (MessageKey::FilterPlatform, "플랫폼"),
    (MessageKey::FilterContent, "콘텐츠"),
    (MessageKey::AllCategories, "모든 카테고리"),
    (MessageKey::StatFollowers, "팔로워"),
    (MessageKey::StatEngagement, "참여율"),
    (MessageKey::StatPlatform, "플랫폼"),
    (MessageKey::ViewGrid, "그리드"),
    (MessageKey::ViewList, "리스트"),
    (MessageKey::Estimate, "예상 견적"),
    (MessageKey::VenueTitle, "공간 찾기"),
    (MessageKey::FilterLocation, "위치"),
    (MessageKey::FilterDate, "날짜"),
    (MessageKey::FilterPrice, "가격대"),
    (MessageKey::FilterSize, "크기"),
    (MessageKey::VenueShowing, "서울의 {count}개 베뉴를 보여주는 중"),
    (MessageKey::SortLabel, "정렬"),
    (MessageKey::SortRecommended, "추천순"),
    (MessageKey::SortPriceLow, "낮은 가격순"),
    (MessageKey::SortPriceHigh, "높은 가격순"),
    (MessageKey::TabInfluencers, "인플루언서 ({count})"),
    (MessageKey::TabVenues, "베뉴 ({count})"),
    (MessageKey::Purpose(Purpose::Club), "클럽"),
    (MessageKey::Purpose(Purpose::Lounge), "라운지"),
    (MessageKey::Purpose(Purpose::Hotel), "호텔"),
    (MessageKey::Purpose(Purpose::EmptyVenue), "빈 베뉴"),
    (MessageKey::Purpose(Purpose::Pub), "펍"),
    (MessageKey::Purpose(Purpose::Cafe), "카페"),
    (MessageKey::Purpose(Purpose::PartyRoom), "파티룸"),
    (MessageKey::Purpose(Purpose::AfterParty), "애프터파티"),
    (MessageKey::Purpose(Purpose::PopUpStore), "팝업스토어"),
    (MessageKey::Purpose(Purpose::Studio), "스튜디오"),
    (MessageKey::Purpose(Purpose::Exhibition), "전시회"),
];

const EN: &[(MessageKey, &str)] = &[
    (MessageKey::NavInfluencer, "Find Creators"),
    (MessageKey::NavVenue, "Find Venues"),
    (MessageKey::NavSelections, "My Selections"),
    (MessageKey::Select, "Select"),
    (MessageKey::Selected, "Selected"),
    (MessageKey::SendRequest, "Send Request"),
    (MessageKey::ItemsSelected, "Items Selected"),
    (MessageKey::ReviewShortlist, "Review your shortlist before sending."),
    (MessageKey::Items, "items"),
    (MessageKey::TotalMinimum, "Total (minimum)"),
    (MessageKey::SelectedInfluencers, "Selected Influencers"),
    (MessageKey::SelectedVenues, "Selected Venues"),
    (MessageKey::NoFavorites, "No favorites yet."),
    (MessageKey::RequestUnavailable, "Sending requests is not available yet."),
    (MessageKey::CatalogUnavailable, "Failed to load the catalog."),
    (MessageKey::InfluencerTitle, "Find Creators"),
    (MessageKey::InfluencerSubtitle, "Discover and connect with top tier talent for your campaign."),
    (MessageKey::FilterCategory, "Category"),
    (MessageKey::FilterFollowers, "Followers"),
    (MessageKey::FilterPlatform, "Platform"),
    (MessageKey::FilterContent, "Content"),
    (MessageKey::AllCategories, "All Categories"),
    (MessageKey::StatFollowers, "Followers"),
    (MessageKey::StatEngagement, "Engagement"),
    (MessageKey::StatPlatform, "Platform"),
    (MessageKey::ViewGrid, "Grid"),
    (MessageKey::ViewList, "List"),
    (MessageKey::Estimate, "Estimate"),
    (MessageKey::VenueTitle, "Discover Spaces"),
    (MessageKey::FilterLocation, "Location"),
    (MessageKey::FilterDate, "Date"),
    (MessageKey::FilterPrice, "Price Range"),
    (MessageKey::FilterSize, "Size"),
    (MessageKey::VenueShowing, "Showing {count} venues in Seoul"),
    (MessageKey::SortLabel, "Sort by"),
    (MessageKey::SortRecommended, "Recommended"),
    (MessageKey::SortPriceLow, "Price: Low to High"),
    (MessageKey::SortPriceHigh, "Price: High to Low"),
    (MessageKey::TabInfluencers, "Influencers ({count})"),
    (MessageKey::TabVenues, "Venues ({count})"),
    (MessageKey::Purpose(Purpose::Club), "Club"),
    (MessageKey::Purpose(Purpose::Lounge), "Lounge"),
    (MessageKey::Purpose(Purpose::Hotel), "Hotel"),
    (MessageKey::Purpose(Purpose::EmptyVenue), "Empty Venue"),
    (MessageKey::Purpose(Purpose::Pub), "Pub"),
    (MessageKey::Purpose(Purpose::Cafe), "Cafe"),
    (MessageKey::Purpose(Purpose::PartyRoom), "Party Room"),
    (MessageKey::Purpose(Purpose::AfterParty), "After Party"),
    (MessageKey::Purpose(Purpose::PopUpStore), "Pop-up Store"),
    (MessageKey::Purpose(Purpose::Studio), "Studio"),
    (MessageKey::Purpose(Purpose::Exhibition), "Exhibition"),
];
