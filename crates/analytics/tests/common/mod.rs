#![allow(dead_code)]

use api_client::{AnalyticsApi, ApiError, StatusCode};
use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::{
    AnalyticsAggregate, ConversionReport, CustomerSegment, CustomersReport, DailyOrders,
    DailyRevenue, LeastProduct, MonthlyRevenue, MonthlyUsers, OrdersReport, ProductRevenue,
    ProductsReport, RevenueReport, TopProduct, WeeklyRevenue,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{mpsc, watch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Revenue,
    Orders,
    Products,
    Customers,
    Conversion,
}

pub const ALL_ENDPOINTS: [Endpoint; 5] = [
    Endpoint::Revenue,
    Endpoint::Orders,
    Endpoint::Products,
    Endpoint::Customers,
    Endpoint::Conversion,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Server,
    Decode,
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

pub fn sample_aggregate() -> AnalyticsAggregate {
    AnalyticsAggregate {
        revenue: RevenueReport {
            total_revenue: dec!(250),
            daily_revenue: vec![
                DailyRevenue {
                    date: date(1),
                    revenue: dec!(100),
                },
                DailyRevenue {
                    date: date(2),
                    revenue: dec!(150),
                },
            ],
            weekly_revenue: vec![WeeklyRevenue {
                week: date(1),
                revenue: dec!(250),
            }],
            monthly_revenue: vec![MonthlyRevenue {
                month: date(1),
                revenue: dec!(250),
            }],
        },
        orders: OrdersReport {
            total_orders: 5,
            daily_orders: vec![
                DailyOrders {
                    date: date(1),
                    count: 2,
                },
                DailyOrders {
                    date: date(2),
                    count: 3,
                },
            ],
        },
        products: ProductsReport {
            product_distribution: (1..=12)
                .map(|i| ProductRevenue {
                    name: format!("Product {}", i),
                    revenue: Decimal::from(i * 1000),
                })
                .collect(),
            top_products: (1..=7)
                .map(|i| TopProduct {
                    id: i,
                    name: format!("Product {}", i),
                    total_sold: 100 - i,
                    total_revenue: Decimal::from(150000 - i * 10000),
                })
                .collect(),
            least_products: (1..=7)
                .map(|i| LeastProduct {
                    id: 20 + i,
                    name: format!("Slow Product {}", i),
                    total_sold: i - 1,
                })
                .collect(),
        },
        customers: CustomersReport {
            total_users: 8,
            customer_types: vec![
                CustomerSegment::new("new", 5),
                CustomerSegment::new("returning", 3),
            ],
            monthly_new_users: vec![
                MonthlyUsers {
                    month: NaiveDate::from_ymd_opt(2023, 12, 1).unwrap(),
                    count: 3,
                },
                MonthlyUsers {
                    month: date(1),
                    count: 5,
                },
            ],
            users_with_orders: Some(8),
        },
        conversion: ConversionReport {
            total_users: 100,
            users_with_orders: 40,
            users_without_orders: 60,
            conversion_rate: dec!(40),
        },
    }
}

/// An in-memory `AnalyticsApi` serving a fixed aggregate.
pub struct StubApi {
    aggregate: AnalyticsAggregate,
    failing: Vec<(Endpoint, Failure)>,
    calls: AtomicUsize,
    gate: Option<watch::Receiver<bool>>,
    done: Option<mpsc::UnboundedSender<Endpoint>>,
}

impl StubApi {
    pub fn new(aggregate: AnalyticsAggregate) -> Self {
        Self {
            aggregate,
            failing: Vec::new(),
            calls: AtomicUsize::new(0),
            gate: None,
            done: None,
        }
    }

    pub fn failing(mut self, endpoint: Endpoint, failure: Failure) -> Self {
        self.failing.push((endpoint, failure));
        self
    }

    /// Holds every response until `gate` turns true, then reports each
    /// finished endpoint on `done`.
    pub fn gated(
        mut self,
        gate: watch::Receiver<bool>,
        done: mpsc::UnboundedSender<Endpoint>,
    ) -> Self {
        self.gate = Some(gate);
        self.done = Some(done);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn respond<T: Clone>(&self, endpoint: Endpoint, value: &T) -> Result<T, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            let mut gate = gate.clone();
            let _ = gate.wait_for(|open| *open).await;
        }

        let failure = self
            .failing
            .iter()
            .find(|(failing, _)| *failing == endpoint)
            .map(|(_, failure)| *failure);
        let result = match failure {
            None => Ok(value.clone()),
            Some(Failure::Server) => Err(ApiError::Server {
                path: format!("{:?}", endpoint),
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: r#"{"error": "Internal server error"}"#.to_string(),
            }),
            Some(Failure::Decode) => Err(ApiError::Decode {
                path: format!("{:?}", endpoint),
                source: serde_json::from_str::<RevenueReport>("{}").unwrap_err(),
            }),
        };

        if let Some(done) = &self.done {
            let _ = done.send(endpoint);
        }
        result
    }
}

#[async_trait]
impl AnalyticsApi for StubApi {
    async fn revenue(&self) -> Result<RevenueReport, ApiError> {
        self.respond(Endpoint::Revenue, &self.aggregate.revenue).await
    }

    async fn orders(&self) -> Result<OrdersReport, ApiError> {
        self.respond(Endpoint::Orders, &self.aggregate.orders).await
    }

    async fn products(&self) -> Result<ProductsReport, ApiError> {
        self.respond(Endpoint::Products, &self.aggregate.products).await
    }

    async fn customers(&self) -> Result<CustomersReport, ApiError> {
        self.respond(Endpoint::Customers, &self.aggregate.customers).await
    }

    async fn conversion(&self) -> Result<ConversionReport, ApiError> {
        self.respond(Endpoint::Conversion, &self.aggregate.conversion).await
    }
}
