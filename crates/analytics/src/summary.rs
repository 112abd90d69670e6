use crate::format::{currency, percent};
use crate::mapper::{USERS_WITH_ORDERS, USERS_WITHOUT_ORDERS};
use core_types::AnalyticsAggregate;
use serde::Serialize;

/// Only this many rows of the top-products ranking are shown.
pub const TOP_PRODUCTS_SHOWN: usize = 5;
pub const LEAST_PRODUCTS_SHOWN: usize = 5;

/// A headline number at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProductRow {
    pub id: i64,
    pub name: String,
    pub sold: i64,
    pub revenue: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeastProductRow {
    pub id: i64,
    pub name: String,
    pub sold: i64,
}

/// A `label: value` line of a details panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub label: String,
    pub value: String,
}

impl StatLine {
    fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

/// The text side of the dashboard: cards, the top-products table and the
/// details panels next to the customer and conversion charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub cards: Vec<MetricCard>,
    pub top_products: Vec<TopProductRow>,
    pub least_products: Vec<LeastProductRow>,
    pub customer_breakdown: Vec<StatLine>,
    pub customer_totals: Vec<StatLine>,
    pub conversion: Vec<StatLine>,
}

impl DashboardSummary {
    pub fn from_aggregate(aggregate: &AnalyticsAggregate) -> Self {
        Self {
            cards: metric_cards(aggregate),
            top_products: top_products(aggregate),
            least_products: least_products(aggregate),
            customer_breakdown: customer_breakdown(aggregate),
            customer_totals: customer_totals(aggregate),
            conversion: conversion_stats(aggregate),
        }
    }
}

pub fn metric_cards(aggregate: &AnalyticsAggregate) -> Vec<MetricCard> {
    vec![
        MetricCard {
            title: "Total Revenue",
            value: currency(aggregate.revenue.total_revenue),
        },
        MetricCard {
            title: "Total Orders",
            value: aggregate.orders.total_orders.to_string(),
        },
        MetricCard {
            title: "Total Users",
            value: aggregate.customers.total_users.to_string(),
        },
        MetricCard {
            title: "Conversion Rate",
            value: percent(aggregate.conversion.conversion_rate),
        },
    ]
}

pub fn top_products(aggregate: &AnalyticsAggregate) -> Vec<TopProductRow> {
    aggregate
        .products
        .top_products
        .iter()
        .take(TOP_PRODUCTS_SHOWN)
        .map(|product| TopProductRow {
            id: product.id,
            name: product.name.clone(),
            sold: product.total_sold,
            revenue: currency(product.total_revenue),
        })
        .collect()
}

/// The slowest sellers, worst first as ranked by the backend.
pub fn least_products(aggregate: &AnalyticsAggregate) -> Vec<LeastProductRow> {
    aggregate
        .products
        .least_products
        .iter()
        .take(LEAST_PRODUCTS_SHOWN)
        .map(|product| LeastProductRow {
            id: product.id,
            name: product.name.clone(),
            sold: product.total_sold,
        })
        .collect()
}

pub fn customer_breakdown(aggregate: &AnalyticsAggregate) -> Vec<StatLine> {
    aggregate
        .customers
        .customer_types
        .iter()
        .map(|segment| StatLine::new(segment.label.clone(), segment.count))
        .collect()
}

/// Totals from the customers report. Older backends omit the count of users
/// with orders, in which case the line is left out.
pub fn customer_totals(aggregate: &AnalyticsAggregate) -> Vec<StatLine> {
    let customers = &aggregate.customers;
    let mut lines = vec![StatLine::new("Total Users", customers.total_users)];
    if let Some(with_orders) = customers.users_with_orders {
        lines.push(StatLine::new(USERS_WITH_ORDERS, with_orders));
    }
    lines
}

pub fn conversion_stats(aggregate: &AnalyticsAggregate) -> Vec<StatLine> {
    let conversion = &aggregate.conversion;
    vec![
        StatLine::new("Total Users", conversion.total_users),
        StatLine::new(USERS_WITH_ORDERS, conversion.users_with_orders),
        StatLine::new(USERS_WITHOUT_ORDERS, conversion.users_without_orders),
        StatLine::new("Conversion Rate", percent(conversion.conversion_rate)),
    ]
}
