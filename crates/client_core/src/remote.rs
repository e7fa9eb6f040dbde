//! The remote catalog service seam and its HTTP implementation.

use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{Food, FoodId},
    error::{ApiError, ApiException},
    protocol::CreateFoodRequest,
};
use tracing::{debug, warn};
use url::Url;

use crate::error::CatalogError;

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

#[async_trait]
pub trait FoodsApi: Send + Sync {
    async fn list_foods(&self) -> CatalogResult<Vec<Food>>;
    async fn create_food(&self, request: &CreateFoodRequest) -> CatalogResult<Food>;
    async fn update_food(&self, id: FoodId, food: &Food) -> CatalogResult<Food>;
    async fn delete_food(&self, id: FoodId) -> CatalogResult<()>;
}

/// Talks to a JSON catalog service exposing `/foods` and `/foods/{id}`.
pub struct HttpFoodsApi {
    http: Client,
    base_url: Url,
}

impl HttpFoodsApi {
    pub fn new(base_url: &str) -> CatalogResult<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> CatalogResult<Self> {
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn foods_url(&self) -> CatalogResult<Url> {
        Ok(self.base_url.join("foods")?)
    }

    fn food_url(&self, id: FoodId) -> CatalogResult<Url> {
        Ok(self.base_url.join(&format!("foods/{id}"))?)
    }
}

#[async_trait]
impl FoodsApi for HttpFoodsApi {
    async fn list_foods(&self) -> CatalogResult<Vec<Food>> {
        let url = self.foods_url()?;
        debug!(%url, "GET foods");
        let res = self.http.get(url).send().await?;
        Ok(ensure_success(res).await?.json().await?)
    }

    async fn create_food(&self, request: &CreateFoodRequest) -> CatalogResult<Food> {
        let url = self.foods_url()?;
        debug!(%url, name = %request.draft.name, "POST food");
        let res = self.http.post(url).json(request).send().await?;
        Ok(ensure_success(res).await?.json().await?)
    }

    async fn update_food(&self, id: FoodId, food: &Food) -> CatalogResult<Food> {
        let url = self.food_url(id)?;
        debug!(%url, "PUT food");
        let res = self.http.put(url).json(food).send().await?;
        Ok(ensure_success(res).await?.json().await?)
    }

    async fn delete_food(&self, id: FoodId) -> CatalogResult<()> {
        let url = self.food_url(id)?;
        debug!(%url, "DELETE food");
        let res = self.http.delete(url).send().await?;
        ensure_success(res).await?;
        Ok(())
    }
}

/// Parses `raw` and guarantees a trailing slash so relative joins keep any path prefix.
pub fn normalize_base_url(raw: &str) -> CatalogResult<Url> {
    let trimmed = raw.trim();
    if trimmed.ends_with('/') {
        Ok(Url::parse(trimmed)?)
    } else {
        Ok(Url::parse(&format!("{trimmed}/"))?)
    }
}

async fn ensure_success(res: Response) -> CatalogResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let body = match res.text().await {
        Ok(body) => body,
        Err(error) => {
            warn!(%status, %error, "failed to read error response body");
            String::new()
        }
    };
    match serde_json::from_str::<ApiError>(&body) {
        Ok(api_error) => Err(CatalogError::Rejected {
            status: status.as_u16(),
            source: ApiException::from(api_error),
        }),
        Err(_) => Err(CatalogError::Status {
            status: status.as_u16(),
            body,
        }),
    }
}
