use reqwest::StatusCode;

use crate::{Error, Resource};

pub(crate) async fn get_data<T, F>(
    client: &reqwest::Client,
    resource: &Resource<T, F>,
) -> Result<T, Error>
where
    F: Fn(&[u8]) -> Option<T>,
{
    tracing::debug!(url = %resource.url(), "requesting resource");
    let res: reqwest::Response = client
        .get(resource.url().clone())
        .send()
        .await
        .map_err(Error::Transport)?;
    let status = res.status();
    if !status.is_success() {
        return Err(Error::Status(status));
    }
    if status == StatusCode::NO_CONTENT {
        return Err(Error::DataAbsent);
    }
    let body = res.bytes().await.map_err(|error| {
        tracing::debug!(%error, "failed to read response body");
        Error::DataAbsent
    })?;
    resource.parse(&body).ok_or(Error::Parse)
}
