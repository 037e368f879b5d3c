use std::time::Instant;

use bytes::Bytes;
use eyre::{Result, WrapErr};
use http_body_util::{BodyExt, Collected, Full};
use hyper::{
    body::Incoming,
    header::{ACCEPT, USER_AGENT},
    Method, Request, Response,
};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Builder, Client as HyperClient, Error as HyperError},
    rt::TokioExecutor,
};
use leaky_bucket_lite::LeakyBucket;
use tokio::time::Duration;

use crate::{ClientError, Site, MY_USER_AGENT};

pub(crate) type InnerClient = HyperClient<HttpsConnector<HttpConnector>, Body>;
pub(crate) type Body = Full<Bytes>;

pub struct Client {
    pub(crate) client: InnerClient,
    ratelimiters: [LeakyBucket; 2],
}

impl Client {
    pub fn new() -> Result<Self> {
        let crypto_provider = rustls::crypto::ring::default_provider();

        let https = HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(crypto_provider)
            .wrap_err("Failed to configure https connector")?
            .https_only()
            .enable_http1()
            .enable_http2()
            .build();

        let client = Builder::new(TokioExecutor::new()).build(https);

        let ratelimiter = |per_second| {
            LeakyBucket::builder()
                .max(per_second)
                .tokens(per_second)
                .refill_interval(Duration::from_millis(1000 / per_second as u64))
                .refill_amount(1)
                .build()
        };

        let ratelimiters = [
            ratelimiter(5), // RdwFuel
            ratelimiter(5), // RdwVehicle
        ];

        Ok(Self {
            client,
            ratelimiters,
        })
    }

    pub(crate) async fn ratelimit(&self, site: Site) {
        self.ratelimiters[site as usize].acquire_one().await
    }

    pub(crate) async fn make_get_request(
        &self,
        url: impl AsRef<str>,
        site: Site,
    ) -> Result<Bytes, ClientError> {
        let url = url.as_ref();
        trace!("GET request to url {url}");

        let req = Request::builder()
            .uri(url)
            .method(Method::GET)
            .header(USER_AGENT, MY_USER_AGENT)
            .header(ACCEPT, "application/json")
            .body(Body::default())
            .wrap_err("Failed to build GET request")?;

        let (response, start) = self
            .send_request(req, site)
            .await
            .wrap_err("Failed to receive GET response")?;

        let status = response.status();
        let bytes_res = Self::error_for_status(response, url).await;

        trace!(
            site = site.as_str(),
            %status,
            latency = ?start.elapsed(),
            "Received response",
        );

        bytes_res
    }

    pub(crate) async fn error_for_status(
        response: Response<Incoming>,
        url: &str,
    ) -> Result<Bytes, ClientError> {
        let status = response.status();

        match status.as_u16() {
            200..=299 => response
                .into_body()
                .collect()
                .await
                .map(Collected::to_bytes)
                .wrap_err("Failed to collect response bytes")
                .map_err(ClientError::Report),
            400 => Err(ClientError::BadRequest),
            404 => Err(ClientError::NotFound),
            429 => Err(ClientError::Ratelimited),
            _ => Err(eyre!("Failed with status code {status} when requesting url {url}").into()),
        }
    }

    async fn send_request(
        &self,
        req: Request<Body>,
        site: Site,
    ) -> Result<(Response<Incoming>, Instant), HyperError> {
        self.ratelimit(site).await;

        let start = Instant::now();

        match self.client.request(req).await {
            Ok(res) => Ok((res, start)),
            Err(err) => {
                warn!(site = site.as_str(), "Failed to send request");

                Err(err)
            }
        }
    }
}
