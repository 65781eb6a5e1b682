//! Per-symbol quote records.
//!
//! A [`Security`] holds every field the service returned for one symbol.
//! Lookups accept a [`Field`] or a string interchangeably; a missing key is
//! always [`FieldError::NotFound`], never a default value.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::FieldError;
use crate::field::{Field, FieldKey};
use crate::timestamp::UtcDateTime;
use crate::value::FieldValue;

/// Fields returned for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Security {
    symbol: String,
    fields: BTreeMap<FieldKey, FieldValue>,
}

impl Security {
    pub fn new(symbol: impl Into<String>, fields: BTreeMap<FieldKey, FieldValue>) -> Self {
        Self {
            symbol: symbol.into(),
            fields,
        }
    }

    /// Symbol this record was returned for, as keyed in [`Securities`].
    pub fn symbol_key(&self) -> &str {
        &self.symbol
    }

    pub fn fields(&self) -> &BTreeMap<FieldKey, FieldValue> {
        &self.fields
    }

    pub fn contains(&self, key: impl Into<FieldKey>) -> bool {
        self.fields.contains_key(&key.into())
    }

    /// Raw lookup by field or by name.
    pub fn get(&self, key: impl Into<FieldKey>) -> Result<&FieldValue, FieldError> {
        let key = key.into();
        self.fields.get(&key).ok_or_else(|| FieldError::NotFound {
            symbol: self.symbol.clone(),
            field: key.as_str().to_owned(),
        })
    }

    pub fn get_f64(&self, key: impl Into<FieldKey>) -> Result<f64, FieldError> {
        self.read(key.into(), "number", FieldValue::as_f64)
    }

    pub fn get_i64(&self, key: impl Into<FieldKey>) -> Result<i64, FieldError> {
        self.read(key.into(), "integer", FieldValue::as_i64)
    }

    pub fn get_str(&self, key: impl Into<FieldKey>) -> Result<&str, FieldError> {
        self.read(key.into(), "text", FieldValue::as_str)
    }

    pub fn get_bool(&self, key: impl Into<FieldKey>) -> Result<bool, FieldError> {
        self.read(key.into(), "boolean", FieldValue::as_bool)
    }

    pub fn get_date(&self, key: impl Into<FieldKey>) -> Result<UtcDateTime, FieldError> {
        self.read(key.into(), "date", FieldValue::as_date)
    }

    fn read<'a, T>(
        &'a self,
        key: FieldKey,
        expected: &'static str,
        view: impl FnOnce(&'a FieldValue) -> Option<T>,
    ) -> Result<T, FieldError> {
        let value = self.get(&key)?;
        view(value).ok_or_else(|| FieldError::TypeMismatch {
            symbol: self.symbol.clone(),
            field: key.as_str().to_owned(),
            expected,
            found: value.type_name(),
        })
    }
}

macro_rules! typed_accessors {
    ($($method:ident => $field:ident: $getter:ident -> $ty:ty;)*) => {
        /// Named accessors over [`Security::get`], one per [`Field`].
        impl Security {
            $(
                pub fn $method(&self) -> Result<$ty, FieldError> {
                    self.$getter(Field::$field)
                }
            )*
        }
    };
}

typed_accessors! {
    ask => Ask: get_f64 -> f64;
    ask_size => AskSize: get_i64 -> i64;
    average_analyst_rating => AverageAnalystRating: get_str -> &str;
    average_daily_volume_10_day => AverageDailyVolume10Day: get_i64 -> i64;
    average_daily_volume_3_month => AverageDailyVolume3Month: get_i64 -> i64;
    bid => Bid: get_f64 -> f64;
    bid_size => BidSize: get_i64 -> i64;
    book_value => BookValue: get_f64 -> f64;
    crypto_tradeable => CryptoTradeable: get_bool -> bool;
    currency => Currency: get_str -> &str;
    display_name => DisplayName: get_str -> &str;
    dividend_date => DividendDate: get_date -> UtcDateTime;
    dividend_rate => DividendRate: get_f64 -> f64;
    dividend_yield => DividendYield: get_f64 -> f64;
    earnings_timestamp => EarningsTimestamp: get_date -> UtcDateTime;
    earnings_timestamp_end => EarningsTimestampEnd: get_date -> UtcDateTime;
    earnings_timestamp_start => EarningsTimestampStart: get_date -> UtcDateTime;
    eps_current_year => EpsCurrentYear: get_f64 -> f64;
    eps_forward => EpsForward: get_f64 -> f64;
    eps_trailing_twelve_months => EpsTrailingTwelveMonths: get_f64 -> f64;
    esg_populated => EsgPopulated: get_bool -> bool;
    exchange => Exchange: get_str -> &str;
    exchange_data_delayed_by => ExchangeDataDelayedBy: get_i64 -> i64;
    exchange_timezone_name => ExchangeTimezoneName: get_str -> &str;
    exchange_timezone_short_name => ExchangeTimezoneShortName: get_str -> &str;
    fifty_day_average => FiftyDayAverage: get_f64 -> f64;
    fifty_day_average_change => FiftyDayAverageChange: get_f64 -> f64;
    fifty_day_average_change_percent => FiftyDayAverageChangePercent: get_f64 -> f64;
    fifty_two_week_high => FiftyTwoWeekHigh: get_f64 -> f64;
    fifty_two_week_high_change => FiftyTwoWeekHighChange: get_f64 -> f64;
    fifty_two_week_high_change_percent => FiftyTwoWeekHighChangePercent: get_f64 -> f64;
    fifty_two_week_low => FiftyTwoWeekLow: get_f64 -> f64;
    fifty_two_week_low_change => FiftyTwoWeekLowChange: get_f64 -> f64;
    fifty_two_week_low_change_percent => FiftyTwoWeekLowChangePercent: get_f64 -> f64;
    fifty_two_week_range => FiftyTwoWeekRange: get_str -> &str;
    financial_currency => FinancialCurrency: get_str -> &str;
    first_trade_date => FirstTradeDateMilliseconds: get_date -> UtcDateTime;
    forward_pe => ForwardPe: get_f64 -> f64;
    full_exchange_name => FullExchangeName: get_str -> &str;
    gmt_offset_milliseconds => GmtOffSetMilliseconds: get_i64 -> i64;
    has_pre_post_market_data => HasPrePostMarketData: get_bool -> bool;
    language => Language: get_str -> &str;
    long_name => LongName: get_str -> &str;
    market => Market: get_str -> &str;
    market_cap => MarketCap: get_i64 -> i64;
    market_state => MarketState: get_str -> &str;
    message_board_id => MessageBoardId: get_str -> &str;
    post_market_change => PostMarketChange: get_f64 -> f64;
    post_market_change_percent => PostMarketChangePercent: get_f64 -> f64;
    post_market_price => PostMarketPrice: get_f64 -> f64;
    post_market_time => PostMarketTime: get_date -> UtcDateTime;
    pre_market_change => PreMarketChange: get_f64 -> f64;
    pre_market_change_percent => PreMarketChangePercent: get_f64 -> f64;
    pre_market_price => PreMarketPrice: get_f64 -> f64;
    pre_market_time => PreMarketTime: get_date -> UtcDateTime;
    price_eps_current_year => PriceEpsCurrentYear: get_f64 -> f64;
    price_hint => PriceHint: get_i64 -> i64;
    price_to_book => PriceToBook: get_f64 -> f64;
    quote_source_name => QuoteSourceName: get_str -> &str;
    quote_type => QuoteType: get_str -> &str;
    region => Region: get_str -> &str;
    regular_market_change => RegularMarketChange: get_f64 -> f64;
    regular_market_change_percent => RegularMarketChangePercent: get_f64 -> f64;
    regular_market_day_high => RegularMarketDayHigh: get_f64 -> f64;
    regular_market_day_low => RegularMarketDayLow: get_f64 -> f64;
    regular_market_day_range => RegularMarketDayRange: get_str -> &str;
    regular_market_open => RegularMarketOpen: get_f64 -> f64;
    regular_market_previous_close => RegularMarketPreviousClose: get_f64 -> f64;
    regular_market_price => RegularMarketPrice: get_f64 -> f64;
    regular_market_time => RegularMarketTime: get_date -> UtcDateTime;
    regular_market_volume => RegularMarketVolume: get_i64 -> i64;
    shares_outstanding => SharesOutstanding: get_i64 -> i64;
    short_name => ShortName: get_str -> &str;
    source_interval => SourceInterval: get_i64 -> i64;
    symbol => Symbol: get_str -> &str;
    tradeable => Tradeable: get_bool -> bool;
    trailing_annual_dividend_rate => TrailingAnnualDividendRate: get_f64 -> f64;
    trailing_annual_dividend_yield => TrailingAnnualDividendYield: get_f64 -> f64;
    trailing_pe => TrailingPe: get_f64 -> f64;
    triggerable => Triggerable: get_bool -> bool;
    two_hundred_day_average => TwoHundredDayAverage: get_f64 -> f64;
    two_hundred_day_average_change => TwoHundredDayAverageChange: get_f64 -> f64;
    two_hundred_day_average_change_percent => TwoHundredDayAverageChangePercent: get_f64 -> f64;
    type_disp => TypeDisp: get_str -> &str;
}

/// Query result keyed by symbol. Symbols the service did not recognize are
/// simply missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Securities {
    entries: BTreeMap<String, Security>,
}

impl Securities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert unless the symbol is already present; returns whether it was added.
    pub(crate) fn insert_first(&mut self, security: Security) -> bool {
        match self.entries.entry(security.symbol.clone()) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(security);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&Security> {
        self.entries.get(symbol)
    }

    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Security> {
        self.entries.iter()
    }
}

impl IntoIterator for Securities {
    type Item = (String, Security);
    type IntoIter = btree_map::IntoIter<String, Security>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Securities {
    type Item = (&'a String, &'a Security);
    type IntoIter = btree_map::Iter<'a, String, Security>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
