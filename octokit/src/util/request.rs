use crate::error::ErrorKind;
use crate::{Config, Error, Octokit};
use failure::ResultExt;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder};

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Returns a 'reqwest' request-builder for a given method and api path
/// And configures security headers according to configuration.
pub fn get_request_builder(octokit: &Octokit, method: Method, path: &str) -> RequestBuilder {
    let cfg = octokit.config();
    let mut request_builder = octokit
        .client
        .request(method, cfg.endpoint(path))
        .header(ACCEPT, GITHUB_JSON);

    if let Some(a) = &cfg.auth {
        request_builder = request_builder.bearer_auth(a);
    }

    request_builder
}

/// Builds the shared client. GitHub rejects requests without a user agent.
pub fn get_client(cfg: &Config) -> Result<Client, Error> {
    let mut builder = Client::builder().user_agent(cfg.user_agent.as_str());
    if let Some(timeout) = cfg.timeout {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build().context(ErrorKind::Client)?)
}
