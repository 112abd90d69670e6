use analytics::{ChartSet, DashboardSummary, Distribution, Series, StatLine};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use rust_decimal::Decimal;

/// Renders the whole dashboard as a stack of terminal tables.
pub fn dashboard(charts: &ChartSet, summary: &DashboardSummary) -> String {
    let sections = [
        cards(summary),
        series(&charts.revenue, "Day"),
        series(&charts.weekly_revenue, "Week of"),
        series(&charts.monthly_revenue, "Month"),
        series(&charts.orders, "Day"),
        top_products(summary),
        least_products(summary),
        distribution(&charts.products),
        series(&charts.new_users, "Month"),
        distribution(&charts.customers),
        stat_lines("Customer Breakdown", &summary.customer_breakdown),
        stat_lines("Customer Totals", &summary.customer_totals),
        distribution(&charts.conversion),
        stat_lines("Conversion Statistics", &summary.conversion),
    ];
    sections.join("\n\n")
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .into_iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );
    table
}

fn titled(title: &str, table: &Table) -> String {
    format!("{}\n{}", title, table)
}

fn number(value: Decimal) -> String {
    value.normalize().to_string()
}

fn cards(summary: &DashboardSummary) -> String {
    let mut table = new_table(summary.cards.iter().map(|card| card.title).collect());
    table.add_row(summary.cards.iter().map(|card| card.value.as_str()));
    titled("Analytics Dashboard", &table)
}

fn series(series: &Series, axis: &str) -> String {
    let mut table = new_table(vec![axis, series.dataset_label]);
    if series.is_empty() {
        table.add_row(vec!["-", "no data"]);
    }
    for point in &series.points {
        table.add_row(vec![point.label.clone(), number(point.value)]);
    }
    titled(series.title, &table)
}

fn distribution(distribution: &Distribution) -> String {
    let mut table = new_table(vec!["Category", distribution.dataset_label, "Color"]);
    if distribution.is_empty() {
        table.add_row(vec!["-", "no data", ""]);
    }
    for category in &distribution.categories {
        table.add_row(vec![
            category.label.clone(),
            number(category.value),
            category.color.to_string(),
        ]);
    }
    titled(distribution.title, &table)
}

fn top_products(summary: &DashboardSummary) -> String {
    let mut table = new_table(vec!["Product", "Sold", "Revenue"]);
    for row in &summary.top_products {
        table.add_row(vec![row.name.clone(), row.sold.to_string(), row.revenue.clone()]);
    }
    titled("Top Selling Products", &table)
}

fn least_products(summary: &DashboardSummary) -> String {
    let mut table = new_table(vec!["Product", "Sold"]);
    if summary.least_products.is_empty() {
        table.add_row(vec!["no data", ""]);
    }
    for row in &summary.least_products {
        table.add_row(vec![row.name.clone(), row.sold.to_string()]);
    }
    titled("Least Selling Products", &table)
}

fn stat_lines(title: &str, lines: &[StatLine]) -> String {
    let mut table = new_table(vec!["", ""]);
    for line in lines {
        table.add_row(vec![line.label.as_str(), line.value.as_str()]);
    }
    titled(title, &table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::{
        AnalyticsAggregate, ConversionReport, CustomerSegment, CustomersReport, DailyRevenue,
        LeastProduct, MonthlyRevenue, OrdersReport, ProductsReport, RevenueReport,
    };
    use rust_decimal_macros::dec;

    fn aggregate() -> AnalyticsAggregate {
        AnalyticsAggregate {
            revenue: RevenueReport {
                total_revenue: dec!(1234567.5),
                daily_revenue: vec![DailyRevenue {
                    date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                    revenue: dec!(100.50),
                }],
                weekly_revenue: vec![],
                monthly_revenue: vec![MonthlyRevenue {
                    month: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    revenue: dec!(1234567.5),
                }],
            },
            orders: OrdersReport {
                total_orders: 0,
                daily_orders: vec![],
            },
            products: ProductsReport {
                product_distribution: vec![],
                top_products: vec![],
                least_products: vec![LeastProduct {
                    id: 9,
                    name: "Dusty Lamp".to_string(),
                    total_sold: 0,
                }],
            },
            customers: CustomersReport {
                total_users: 3,
                customer_types: vec![CustomerSegment::new("Repeat Customers", 3)],
                monthly_new_users: vec![],
                users_with_orders: Some(3),
            },
            conversion: ConversionReport {
                total_users: 3,
                users_with_orders: 3,
                users_without_orders: 0,
                conversion_rate: dec!(100),
            },
        }
    }

    #[test]
    fn renders_every_section() {
        let aggregate = aggregate();
        let text = dashboard(
            &ChartSet::from_aggregate(&aggregate),
            &DashboardSummary::from_aggregate(&aggregate),
        );

        assert!(text.contains("₹12,34,567.5"));
        assert!(text.contains("Jan 5"));
        assert!(text.contains("100.5"));
        assert!(text.contains("Daily Orders (Last 30 Days)"));
        assert!(text.contains("no data"));
        assert!(text.contains("Repeat Customers"));
        assert!(text.contains("100%"));
        assert!(text.contains("Monthly Revenue (Last 12 Months)"));
        assert!(text.contains("Jan 2024"));
        assert!(text.contains("Least Selling Products"));
        assert!(text.contains("Dusty Lamp"));
        assert!(text.contains("Customer Totals"));
        assert!(text.contains("Users with Orders"));
    }
}
