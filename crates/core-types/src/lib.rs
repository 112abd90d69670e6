pub mod reports;

// Re-export the core types to provide a clean public API.
pub use reports::{
    AnalyticsAggregate, ConversionReport, CustomerSegment, CustomersReport, DailyOrders,
    DailyRevenue, LeastProduct, MonthlyRevenue, MonthlyUsers, OrdersReport, ProductRevenue,
    ProductsReport, RevenueReport, TopProduct, WeeklyRevenue,
};
