use anyhow::{bail, Context, Result};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Fetch and decode a json resource, failing on any non-2xx status.

pub async fn get_json<T>(uri: &str) -> Result<T>
    where T: DeserializeOwned
{
    let resp = Request::get(uri).send().await?;

    if !resp.ok() {
        bail!("request to {} failed ({})", uri, resp.status());
    };

    read_json(resp).await
}

/// Send a json body. The response is returned whatever its status so callers
/// can read error bodies.

pub async fn send_json<T>(builder: RequestBuilder, body: &T) -> Result<Response>
    where T: Serialize
{
    let req = builder
        .header("Content-Type", "application/json")
        .json(body)?;

    Ok(req.send().await?)
}

pub async fn read_json<T>(resp: Response) -> Result<T>
    where T: DeserializeOwned
{
    let text = resp.text().await?;
    serde_json::from_str(&text).context("unexpected response body")
}
