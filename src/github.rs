use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use crate::error::AuditError;
use crate::types::{GitHubRepo, RepositoryDescriptor};

const AGENT: &str = concat!("github-repo-auditor/", env!("CARGO_PKG_VERSION"));

/// List the public repositories of `org`, in the order the API returns them.
///
/// Only the first page of results is read.
pub async fn list_public_repos(
    client: &reqwest::Client,
    api_url: &str,
    org: &str,
) -> Result<Vec<RepositoryDescriptor>, AuditError> {
    let url = format!("{}/orgs/{}/repos", api_url, org);
    debug!("listing repositories: {}", url);

    let listing_err = |source| AuditError::Listing { org: org.to_string(), source };

    let res = client
        .get(&url)
        .query(&[("type", "public")])
        .header(ACCEPT, "application/vnd.github+json")
        .header(USER_AGENT, AGENT)
        .send()
        .await
        .map_err(listing_err)?;

    if !res.status().is_success() {
        return Err(AuditError::ListingStatus {
            org: org.to_string(),
            status: res.status(),
        });
    }

    let repos: Vec<GitHubRepo> = res.json().await.map_err(listing_err)?;
    Ok(repos.into_iter().map(RepositoryDescriptor::from).collect())
}

impl From<GitHubRepo> for RepositoryDescriptor {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            name: repo.name,
            url: repo.html_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_lists_public_repos_in_api_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/orgs/acme/repos")
            .match_query(Matcher::UrlEncoded("type".into(), "public".into()))
            .match_header("accept", "application/vnd.github+json")
            .match_header("user-agent", Matcher::Regex("^github-repo-auditor/".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[
                {"id": 2, "name": "zeta", "html_url": "https://github.com/acme/zeta", "private": false},
                {"id": 1, "name": "alpha", "html_url": "https://github.com/acme/alpha", "private": false}
            ]"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let repos = list_public_repos(&client, &server.url(), "acme").await.unwrap();

        mock.assert_async().await;
        assert_eq!(repos, vec![
            RepositoryDescriptor { name: "zeta".to_string(), url: "https://github.com/acme/zeta".to_string() },
            RepositoryDescriptor { name: "alpha".to_string(), url: "https://github.com/acme/alpha".to_string() },
        ]);
    }

    #[tokio::test]
    async fn test_unknown_org_is_status_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/orgs/nope/repos")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let err = list_public_repos(&client, &server.url(), "nope").await.unwrap_err();

        match err {
            AuditError::ListingStatus { org, status } => {
                assert_eq!(org, "nope");
                assert_eq!(status.as_u16(), 404);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_listing_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/orgs/acme/repos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let err = list_public_repos(&client, &server.url(), "acme").await.unwrap_err();
        assert!(matches!(err, AuditError::Listing { .. }));
    }
}
