//! Thin PostgREST client for the hosted project.

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::Error;

/// REST client bound to one project's connection settings.
///
/// Cheap to build; views construct one per mount rather than sharing a
/// global instance.
#[derive(Clone, Debug)]
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Build a client from the settings captured at compile time.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::new(Config::from_env()?))
    }

    /// Fetch every row of `table`.
    pub async fn fetch_all<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>, Error> {
        let response = self
            .request(Method::GET, table)
            .query(&[("select", "*")])
            .send()
            .await
            .map_err(Error::http)?;
        let response = check(response).await?;
        response
            .json()
            .await
            .map_err(|err| Error::decode(table, err))
    }

    /// Fetch the first row of `table`, or `None` when the table is empty.
    pub async fn fetch_one_or_absent<T: DeserializeOwned>(
        &self,
        table: &str,
    ) -> Result<Option<T>, Error> {
        let response = self
            .request(Method::GET, table)
            .query(&[("select", "*"), ("limit", "1")])
            .send()
            .await
            .map_err(Error::http)?;
        let response = check(response).await?;
        let mut rows: Vec<T> = response
            .json()
            .await
            .map_err(|err| Error::decode(table, err))?;
        Ok(rows.pop())
    }

    /// Insert one record into `table`.
    ///
    /// Asks the service not to echo the row back; success is the status code.
    pub async fn insert<T: Serialize>(&self, table: &str, record: &T) -> Result<(), Error> {
        let response = self
            .request(Method::POST, table)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await
            .map_err(Error::http)?;
        check(response).await?;
        Ok(())
    }

    fn request(&self, method: Method, table: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, self.config.rest_endpoint(table))
            .header("apikey", self.config.anon_key.as_str())
            .header(AUTHORIZATION, format!("Bearer {}", self.config.anon_key))
    }
}

/// Pass a successful response through, turning any other status into
/// [`Error::Service`] with the service's own message.
async fn check(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::service(status.as_u16(), &body))
}
