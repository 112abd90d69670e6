use crate::charts::{Category, ChartKind, ChartSet, Distribution, Point, Series, SeriesStyle};
use crate::format::{month_label, short_date};
use crate::palette::{self, CONVERSION_PALETTE, CUSTOMER_PALETTE, PRODUCT_PALETTE};
use core_types::{
    AnalyticsAggregate, ConversionReport, CustomersReport, OrdersReport, ProductsReport,
    RevenueReport,
};
use rust_decimal::Decimal;

// Every function here is pure: same report in, same chart out. None of them
// mutate their input, and an empty input yields an empty chart.

pub const USERS_WITH_ORDERS: &str = "Users with Orders";
pub const USERS_WITHOUT_ORDERS: &str = "Users without Orders";

const CHART_BORDER_WIDTH: u8 = 2;

/// Daily revenue as a line series, oldest day first.
pub fn revenue_series(report: &RevenueReport) -> Series {
    Series {
        kind: ChartKind::Line,
        title: "Daily Revenue Trend (Last 30 Days)",
        dataset_label: "Daily Revenue (₹)",
        points: report
            .daily_revenue
            .iter()
            .map(|day| Point {
                label: short_date(day.date),
                value: day.revenue,
            })
            .collect(),
        style: SeriesStyle {
            border_color: palette::REVENUE_LINE,
            background_color: palette::REVENUE_FILL,
            border_width: 1,
            tension: Some(0.4),
        },
    }
}

/// Revenue per week, labelled by the first day of the week.
pub fn weekly_revenue_series(report: &RevenueReport) -> Series {
    Series {
        kind: ChartKind::Line,
        title: "Weekly Revenue (Last 12 Weeks)",
        dataset_label: "Weekly Revenue (₹)",
        points: report
            .weekly_revenue
            .iter()
            .map(|week| Point {
                label: short_date(week.week),
                value: week.revenue,
            })
            .collect(),
        style: SeriesStyle {
            border_color: palette::REVENUE_LINE,
            background_color: palette::REVENUE_FILL,
            border_width: 1,
            tension: Some(0.4),
        },
    }
}

pub fn monthly_revenue_series(report: &RevenueReport) -> Series {
    Series {
        kind: ChartKind::Bar,
        title: "Monthly Revenue (Last 12 Months)",
        dataset_label: "Monthly Revenue (₹)",
        points: report
            .monthly_revenue
            .iter()
            .map(|month| Point {
                label: month_label(month.month),
                value: month.revenue,
            })
            .collect(),
        style: SeriesStyle {
            border_color: palette::MONTHLY_REVENUE_BORDER,
            background_color: palette::MONTHLY_REVENUE_FILL,
            border_width: 1,
            tension: None,
        },
    }
}

/// Daily order counts as a bar series, labelled like the revenue series.
pub fn orders_series(report: &OrdersReport) -> Series {
    Series {
        kind: ChartKind::Bar,
        title: "Daily Orders (Last 30 Days)",
        dataset_label: "Daily Orders",
        points: report
            .daily_orders
            .iter()
            .map(|day| Point {
                label: short_date(day.date),
                value: Decimal::from(day.count),
            })
            .collect(),
        style: SeriesStyle {
            border_color: palette::ORDERS_BORDER,
            background_color: palette::ORDERS_FILL,
            border_width: 1,
            tension: None,
        },
    }
}

/// Sign-ups per month from the customers report.
pub fn new_users_series(report: &CustomersReport) -> Series {
    Series {
        kind: ChartKind::Bar,
        title: "New Users (Last 12 Months)",
        dataset_label: "New Users",
        points: report
            .monthly_new_users
            .iter()
            .map(|month| Point {
                label: month_label(month.month),
                value: Decimal::from(month.count),
            })
            .collect(),
        style: SeriesStyle {
            border_color: palette::NEW_USERS_BORDER,
            background_color: palette::NEW_USERS_FILL,
            border_width: 1,
            tension: None,
        },
    }
}

/// Revenue per product. Colors follow input position, not product identity.
pub fn product_distribution(report: &ProductsReport) -> Distribution {
    Distribution {
        kind: ChartKind::Pie,
        title: "Revenue Distribution",
        dataset_label: "Revenue by Product",
        categories: report
            .product_distribution
            .iter()
            .enumerate()
            .map(|(i, product)| Category {
                label: product.name.clone(),
                value: product.revenue,
                color: palette::cycle(&PRODUCT_PALETTE, i),
            })
            .collect(),
        border_width: CHART_BORDER_WIDTH,
    }
}

/// Customer segments in payload order.
pub fn customer_types(report: &CustomersReport) -> Distribution {
    Distribution {
        kind: ChartKind::Doughnut,
        title: "Customer Types",
        dataset_label: "Customers",
        categories: report
            .customer_types
            .iter()
            .enumerate()
            .map(|(i, segment)| Category {
                label: segment.label.clone(),
                value: Decimal::from(segment.count),
                color: palette::cycle(&CUSTOMER_PALETTE, i),
            })
            .collect(),
        border_width: CHART_BORDER_WIDTH,
    }
}

/// Users with and without orders, always exactly two categories.
pub fn conversion_split(report: &ConversionReport) -> Distribution {
    let category = |i: usize, label: &str, count: i64| Category {
        label: label.to_string(),
        value: Decimal::from(count),
        color: CONVERSION_PALETTE[i],
    };

    Distribution {
        kind: ChartKind::Doughnut,
        title: "User Conversion",
        dataset_label: "Users",
        categories: vec![
            category(0, USERS_WITH_ORDERS, report.users_with_orders),
            category(1, USERS_WITHOUT_ORDERS, report.users_without_orders),
        ],
        border_width: CHART_BORDER_WIDTH,
    }
}

impl ChartSet {
    pub fn from_aggregate(aggregate: &AnalyticsAggregate) -> Self {
        Self {
            revenue: revenue_series(&aggregate.revenue),
            weekly_revenue: weekly_revenue_series(&aggregate.revenue),
            monthly_revenue: monthly_revenue_series(&aggregate.revenue),
            orders: orders_series(&aggregate.orders),
            new_users: new_users_series(&aggregate.customers),
            products: product_distribution(&aggregate.products),
            customers: customer_types(&aggregate.customers),
            conversion: conversion_split(&aggregate.conversion),
        }
    }
}
