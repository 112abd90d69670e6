//! Fixed colors of the dashboard charts.

/// A CSS color string, ready for a charting layer.
pub type Color = &'static str;

/// Slice colors of the product revenue pie, assigned by position.
pub const PRODUCT_PALETTE: [Color; 10] = [
    "rgba(255, 99, 132, 0.6)",
    "rgba(54, 162, 235, 0.6)",
    "rgba(255, 206, 86, 0.6)",
    "rgba(75, 192, 192, 0.6)",
    "rgba(153, 102, 255, 0.6)",
    "rgba(255, 159, 64, 0.6)",
    "rgba(199, 199, 199, 0.6)",
    "rgba(83, 102, 255, 0.6)",
    "rgba(255, 99, 255, 0.6)",
    "rgba(99, 255, 132, 0.6)",
];

/// Segment colors of the customer types doughnut.
pub const CUSTOMER_PALETTE: [Color; 3] = [
    "rgba(75, 192, 192, 0.6)",
    "rgba(255, 206, 86, 0.6)",
    "rgba(255, 99, 132, 0.6)",
];

/// Segment colors of the conversion doughnut: with orders, without orders.
pub const CONVERSION_PALETTE: [Color; 2] = ["rgba(75, 192, 192, 0.6)", "rgba(255, 99, 132, 0.6)"];

pub const REVENUE_LINE: Color = "rgb(75, 192, 192)";
pub const REVENUE_FILL: Color = "rgba(75, 192, 192, 0.2)";
pub const ORDERS_BORDER: Color = "rgba(54, 162, 235, 1)";
pub const ORDERS_FILL: Color = "rgba(54, 162, 235, 0.6)";
pub const MONTHLY_REVENUE_BORDER: Color = "rgba(255, 159, 64, 1)";
pub const MONTHLY_REVENUE_FILL: Color = "rgba(255, 159, 64, 0.6)";
pub const NEW_USERS_BORDER: Color = "rgba(153, 102, 255, 1)";
pub const NEW_USERS_FILL: Color = "rgba(153, 102, 255, 0.6)";

/// Picks the color for the category at `index`, wrapping around when there
/// are more categories than colors.
pub fn cycle(palette: &[Color], index: usize) -> Color {
    palette[index % palette.len()]
}
