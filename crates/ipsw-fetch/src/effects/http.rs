use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Streamed response body with its announced length.
pub struct ResponseBody<E> {
    /// Value of the Content-Length header, if present.
    pub content_length: Option<u64>,
    pub stream: BoxStream<'static, Result<Bytes, E>>,
}

/// Asynchronous HTTP client abstraction.
///
/// Implementations follow redirects and map non-2xx statuses to errors.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + 'static;

    /// GET the whole response body.
    fn get(&self, url: &str) -> impl Future<Output = Result<Bytes, Self::Error>> + Send;

    /// GET and return the response body as a stream of chunks.
    ///
    /// Resolves once the response headers have arrived.
    fn stream(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<ResponseBody<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use futures_util::StreamExt;
    use reqwest::{Client, Proxy};

    /// Settings used to build a [`ReqwestClient`].
    #[derive(Debug, Clone, Default)]
    pub struct ClientSetting {
        pub proxies: Vec<String>,
        pub user_agent: Option<String>,
    }

    impl ClientSetting {
        pub fn build(self) -> Result<ReqwestClient, reqwest::Error> {
            let (secure, insecure): (Vec<String>, Vec<String>) = self
                .proxies
                .into_iter()
                .partition(|u| u.starts_with("https://"));

            let mut cb = Client::builder();

            for u in secure {
                cb = cb.proxy(Proxy::https(u)?);
            }

            for u in insecure {
                cb = cb.proxy(Proxy::http(u)?);
            }

            if let Some(ua) = self.user_agent {
                cb = cb.user_agent(ua);
            }

            Ok(ReqwestClient { client: cb.build()? })
        }
    }

    /// Production HTTP client implementation using reqwest.
    pub struct ReqwestClient {
        client: Client,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with default configuration.
        pub fn new() -> Result<Self, reqwest::Error> {
            ClientSetting::default().build()
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(&self, url: &str) -> Result<Bytes, Self::Error> {
            self.client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await
        }

        async fn stream(&self, url: &str) -> Result<ResponseBody<Self::Error>, Self::Error> {
            let response = self.client.get(url).send().await?.error_for_status()?;
            let content_length = response.content_length();
            let stream = response.bytes_stream().boxed();

            Ok(ResponseBody {
                content_length,
                stream,
            })
        }
    }

}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::{ClientSetting, ReqwestClient};
