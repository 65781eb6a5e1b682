//! Field identifiers understood by the quote service.
//!
//! A field can be named two ways: by a [`Field`] variant or by a raw string.
//! Both resolve through [`FieldKey::normalize`] to one canonical key, which is
//! what duplicate detection and record lookups compare.
//!
//! ```rust
//! use ferroquote_core::{Field, FieldKey};
//!
//! assert_eq!(FieldKey::from("CURRENCY"), FieldKey::from(Field::Currency));
//! assert_eq!(FieldKey::from("bid").as_str(), "bid");
//! assert_eq!(FieldKey::from("ForwardPe").as_str(), "forwardPE");
//! ```

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Value kind the service uses for a known field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Integer,
    Number,
    Text,
    Boolean,
    Date,
}

impl FieldKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Date => "date",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quote fields known to the service. The string form is the wire name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum Field {
    Ask,
    AskSize,
    AverageAnalystRating,
    #[strum(serialize = "averageDailyVolume10Day")]
    AverageDailyVolume10Day,
    #[strum(serialize = "averageDailyVolume3Month")]
    AverageDailyVolume3Month,
    Bid,
    BidSize,
    BookValue,
    CryptoTradeable,
    Currency,
    DisplayName,
    DividendDate,
    DividendRate,
    DividendYield,
    EarningsTimestamp,
    EarningsTimestampEnd,
    EarningsTimestampStart,
    EpsCurrentYear,
    EpsForward,
    EpsTrailingTwelveMonths,
    EsgPopulated,
    Exchange,
    ExchangeDataDelayedBy,
    ExchangeTimezoneName,
    ExchangeTimezoneShortName,
    FiftyDayAverage,
    FiftyDayAverageChange,
    FiftyDayAverageChangePercent,
    FiftyTwoWeekHigh,
    FiftyTwoWeekHighChange,
    FiftyTwoWeekHighChangePercent,
    FiftyTwoWeekLow,
    FiftyTwoWeekLowChange,
    FiftyTwoWeekLowChangePercent,
    FiftyTwoWeekRange,
    FinancialCurrency,
    FirstTradeDateMilliseconds,
    #[strum(serialize = "forwardPE")]
    ForwardPe,
    FullExchangeName,
    GmtOffSetMilliseconds,
    HasPrePostMarketData,
    Language,
    LongName,
    Market,
    MarketCap,
    MarketState,
    MessageBoardId,
    PostMarketChange,
    PostMarketChangePercent,
    PostMarketPrice,
    PostMarketTime,
    PreMarketChange,
    PreMarketChangePercent,
    PreMarketPrice,
    PreMarketTime,
    PriceEpsCurrentYear,
    PriceHint,
    PriceToBook,
    QuoteSourceName,
    QuoteType,
    Region,
    RegularMarketChange,
    RegularMarketChangePercent,
    RegularMarketDayHigh,
    RegularMarketDayLow,
    RegularMarketDayRange,
    RegularMarketOpen,
    RegularMarketPreviousClose,
    RegularMarketPrice,
    RegularMarketTime,
    RegularMarketVolume,
    SharesOutstanding,
    ShortName,
    SourceInterval,
    Symbol,
    Tradeable,
    TrailingAnnualDividendRate,
    TrailingAnnualDividendYield,
    #[strum(serialize = "trailingPE")]
    TrailingPe,
    Triggerable,
    TwoHundredDayAverage,
    TwoHundredDayAverageChange,
    TwoHundredDayAverageChangePercent,
    TypeDisp,
}

impl Field {
    /// Key used by the service for this field, e.g. `regularMarketPrice`.
    pub fn wire_name(self) -> &'static str {
        self.into()
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::DividendDate
            | Self::EarningsTimestamp
            | Self::EarningsTimestampEnd
            | Self::EarningsTimestampStart
            | Self::FirstTradeDateMilliseconds
            | Self::PostMarketTime
            | Self::PreMarketTime
            | Self::RegularMarketTime => FieldKind::Date,

            Self::AskSize
            | Self::AverageDailyVolume10Day
            | Self::AverageDailyVolume3Month
            | Self::BidSize
            | Self::ExchangeDataDelayedBy
            | Self::GmtOffSetMilliseconds
            | Self::MarketCap
            | Self::PriceHint
            | Self::RegularMarketVolume
            | Self::SharesOutstanding
            | Self::SourceInterval => FieldKind::Integer,

            Self::CryptoTradeable
            | Self::EsgPopulated
            | Self::HasPrePostMarketData
            | Self::Tradeable
            | Self::Triggerable => FieldKind::Boolean,

            Self::AverageAnalystRating
            | Self::Currency
            | Self::DisplayName
            | Self::Exchange
            | Self::ExchangeTimezoneName
            | Self::ExchangeTimezoneShortName
            | Self::FiftyTwoWeekRange
            | Self::FinancialCurrency
            | Self::FullExchangeName
            | Self::Language
            | Self::LongName
            | Self::Market
            | Self::MarketState
            | Self::MessageBoardId
            | Self::QuoteSourceName
            | Self::QuoteType
            | Self::Region
            | Self::RegularMarketDayRange
            | Self::ShortName
            | Self::Symbol
            | Self::TypeDisp => FieldKind::Text,

            _ => FieldKind::Number,
        }
    }

    /// Date fields whose integer payload counts milliseconds rather than seconds.
    pub(crate) fn is_millisecond_epoch(self) -> bool {
        self.kind() == FieldKind::Date && self.wire_name().ends_with("Milliseconds")
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Canonical field key.
///
/// Equality, ordering and hashing ignore ASCII case. Names of known fields
/// are rewritten to their wire spelling; unknown names keep their spelling.
#[derive(Debug, Clone)]
pub struct FieldKey {
    name: String,
    folded: String,
}

impl FieldKey {
    /// The one normalization path for string field names.
    pub fn normalize(name: &str) -> Self {
        let trimmed = name.trim();
        match trimmed.parse::<Field>() {
            Ok(field) => Self::from(field),
            Err(_) => Self {
                name: trimmed.to_owned(),
                folded: trimmed.to_ascii_lowercase(),
            },
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The known field this key names, if any.
    pub fn field(&self) -> Option<Field> {
        self.name.parse().ok()
    }

    pub fn is_known(&self) -> bool {
        self.field().is_some()
    }
}

impl From<Field> for FieldKey {
    fn from(field: Field) -> Self {
        let name = field.wire_name();
        Self {
            name: name.to_owned(),
            folded: name.to_ascii_lowercase(),
        }
    }
}

impl From<&str> for FieldKey {
    fn from(name: &str) -> Self {
        Self::normalize(name)
    }
}

impl From<String> for FieldKey {
    fn from(name: String) -> Self {
        Self::normalize(&name)
    }
}

impl From<&String> for FieldKey {
    fn from(name: &String) -> Self {
        Self::normalize(name)
    }
}

impl From<&FieldKey> for FieldKey {
    fn from(key: &FieldKey) -> Self {
        key.clone()
    }
}

impl PartialEq for FieldKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for FieldKey {}

impl Hash for FieldKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl PartialOrd for FieldKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded.cmp(&other.folded)
    }
}

impl Display for FieldKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Serialize for FieldKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.name)
    }
}
