use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// The shop backend already emits snake_case keys, so no `rename_all` is needed.
// Sequence fields accept an absent key or `null` and degrade to an empty chart
// instead of failing the whole report.

/// Response of `GET /admin/analytics/revenue`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueReport {
    pub total_revenue: Decimal,
    /// One entry per day of the trailing 30 day window, oldest first.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub daily_revenue: Vec<DailyRevenue>,
    /// Last 12 weeks, keyed by the Monday of each week.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub weekly_revenue: Vec<WeeklyRevenue>,
    /// Last 12 months, keyed by the first day of each month.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyRevenue {
    pub week: NaiveDate,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: NaiveDate,
    pub revenue: Decimal,
}

/// Response of `GET /admin/analytics/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersReport {
    pub total_orders: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub daily_orders: Vec<DailyOrders>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyOrders {
    pub date: NaiveDate,
    pub count: i64,
}

/// Response of `GET /admin/analytics/products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsReport {
    /// Revenue per product, unique by name. Order carries no meaning.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub product_distribution: Vec<ProductRevenue>,
    /// Ranked by units sold, best first.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub top_products: Vec<TopProduct>,
    /// Ranked by units sold, worst first.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub least_products: Vec<LeastProduct>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRevenue {
    pub name: String,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub id: i64,
    pub name: String,
    pub total_sold: i64,
    pub total_revenue: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeastProduct {
    pub id: i64,
    pub name: String,
    pub total_sold: i64,
}

/// Response of `GET /admin/analytics/customers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomersReport {
    pub total_users: i64,
    /// On the wire this is a JSON object of label to count. It is held as a
    /// sequence so the payload's key order survives.
    #[serde(
        default,
        deserialize_with = "deserialize_segments",
        serialize_with = "serialize_segments"
    )]
    pub customer_types: Vec<CustomerSegment>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub monthly_new_users: Vec<MonthlyUsers>,
    #[serde(default)]
    pub users_with_orders: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerSegment {
    pub label: String,
    pub count: i64,
}

impl CustomerSegment {
    pub fn new(label: impl Into<String>, count: i64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyUsers {
    pub month: NaiveDate,
    pub count: i64,
}

/// Response of `GET /admin/analytics/conversion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub total_users: i64,
    pub users_with_orders: i64,
    pub users_without_orders: i64,
    /// Percentage in `0..=100` as computed by the backend. It is not required to
    /// match `users_with_orders / total_users` and is never recomputed here.
    pub conversion_rate: Decimal,
}

/// All five reports of one fetch cycle. Either every report is present or
/// there is no aggregate at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsAggregate {
    pub revenue: RevenueReport,
    pub orders: OrdersReport,
    pub products: ProductsReport,
    pub customers: CustomersReport,
    pub conversion: ConversionReport,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn deserialize_segments<'de, D>(deserializer: D) -> Result<Vec<CustomerSegment>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SegmentsVisitor;

    impl<'de> Visitor<'de> for SegmentsVisitor {
        type Value = Vec<CustomerSegment>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of customer type to count")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_map(self)
        }

        fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut segments: Vec<CustomerSegment> =
                Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((label, count)) = access.next_entry::<String, i64>()? {
                // A repeated key keeps its first position, last value wins.
                match segments.iter_mut().find(|s| s.label == label) {
                    Some(existing) => existing.count = count,
                    None => segments.push(CustomerSegment { label, count }),
                }
            }
            Ok(segments)
        }
    }

    deserializer.deserialize_option(SegmentsVisitor)
}

fn serialize_segments<S>(segments: &[CustomerSegment], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(segments.len()))?;
    for segment in segments {
        map.serialize_entry(&segment.label, &segment.count)?;
    }
    map.end()
}
