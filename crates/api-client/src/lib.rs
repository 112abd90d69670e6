use async_trait::async_trait;
use configuration::ApiConfig;
use core_types::{
    ConversionReport, CustomersReport, OrdersReport, ProductsReport, RevenueReport,
};
use serde::de::DeserializeOwned;

pub mod error;
pub mod session;
// --- Public API ---
pub use error::ApiError;
pub use reqwest::StatusCode;
pub use session::Session;

/// Paths of the admin analytics endpoints, relative to the API origin.
pub mod endpoints {
    pub const REVENUE: &str = "/admin/analytics/revenue";
    pub const ORDERS: &str = "/admin/analytics/orders";
    pub const PRODUCTS: &str = "/admin/analytics/products";
    pub const CUSTOMERS: &str = "/admin/analytics/customers";
    pub const CONVERSION: &str = "/admin/analytics/conversion";
}

/// The read side of the shop's admin analytics API.
///
/// This trait is the contract the dashboard fetches through, allowing the
/// underlying implementation (HTTP or mock) to be swapped out. Every call is
/// a parameter-less, idempotent read; the server picks the reporting window.
#[async_trait]
pub trait AnalyticsApi: Send + Sync {
    /// `GET /admin/analytics/revenue`
    async fn revenue(&self) -> Result<RevenueReport, ApiError>;

    /// `GET /admin/analytics/orders`
    async fn orders(&self) -> Result<OrdersReport, ApiError>;

    /// `GET /admin/analytics/products`
    async fn products(&self) -> Result<ProductsReport, ApiError>;

    /// `GET /admin/analytics/customers`
    async fn customers(&self) -> Result<CustomersReport, ApiError>;

    /// `GET /admin/analytics/conversion`
    async fn conversion(&self) -> Result<ConversionReport, ApiError>;
}

/// A concrete implementation of `AnalyticsApi` over HTTP.
#[derive(Clone)]
pub struct ShopClient {
    client: reqwest::Client,
    base_url: String,
}

impl ShopClient {
    /// Builds a client for the configured origin. The session's credentials
    /// are attached to every request as default headers.
    pub fn new(api_config: &ApiConfig, session: &Session) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().default_headers(session.headers()?);
        if let Some(timeout) = api_config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().map_err(ApiError::ClientBuild)?,
            base_url: api_config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "Fetching analytics report.");

        let network = |source| ApiError::Network {
            path: path.to_string(),
            source,
        };

        let response = self.client.get(&url).send().await.map_err(network)?;
        let status = response.status();
        let body = response.bytes().await.map_err(network)?;

        if !status.is_success() {
            return Err(ApiError::Server {
                path: path.to_string(),
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        // Decoding from the raw bytes keeps object key order, which the
        // customer breakdown relies on.
        serde_json::from_slice::<T>(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl AnalyticsApi for ShopClient {
    async fn revenue(&self) -> Result<RevenueReport, ApiError> {
        self.get_json(endpoints::REVENUE).await
    }

    async fn orders(&self) -> Result<OrdersReport, ApiError> {
        self.get_json(endpoints::ORDERS).await
    }

    async fn products(&self) -> Result<ProductsReport, ApiError> {
        self.get_json(endpoints::PRODUCTS).await
    }

    async fn customers(&self) -> Result<CustomersReport, ApiError> {
        self.get_json(endpoints::CUSTOMERS).await
    }

    async fn conversion(&self) -> Result<ConversionReport, ApiError> {
        self.get_json(endpoints::CONVERSION).await
    }
}
