//! # REST client — the HTTP collaborator behind every resource store
//!
//! [`ApiClient`] owns the shared transport: a [`reqwest::Client`], the base
//! URL, and the credential store the bearer token is read from on every
//! request. [`Endpoint`] binds that transport to one resource path and
//! implements [`store::ResourceClient`], so the four admin resources share a
//! single generic implementation of the five wire operations:
//!
//! | Operation | Request | Response |
//! |-----------|---------|----------|
//! | `list`    | `GET /{resource}` | JSON array of records |
//! | `get`     | `GET /{resource}/{id}` | JSON record |
//! | `create`  | `POST /{resource}` | JSON record with the server-assigned id |
//! | `update`  | `PUT /{resource}/{id}` | empty acknowledgement |
//! | `delete`  | `DELETE /{resource}/{id}` | empty |
//!
//! The bearer header is attached only when a credential is present in
//! storage; the server rejects unauthenticated calls itself. Cookies ride
//! along on every request in the browser build.

use std::marker::PhantomData;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{ClientError, CredentialStore, Record, ResourceClient};

use crate::auth::{LoginRequest, LoginResponse};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{
    CreateExercise, CreateMembership, CreateSchedule, CreateUser, Exercise,
    Membership, Schedule, UpdateExercise, UpdateMembership, UpdateSchedule,
    UpdateUser, User,
};

/// A record reachable under a fixed REST path.
pub trait RestResource: Record + DeserializeOwned {
    /// Path segment under the API base, e.g. "users".
    const PATH: &'static str;
    type Create: Serialize;
    type Update: Serialize;
}

impl RestResource for User {
    const PATH: &'static str = "users";
    type Create = CreateUser;
    type Update = UpdateUser;
}

impl RestResource for Membership {
    const PATH: &'static str = "memberships";
    type Create = CreateMembership;
    type Update = UpdateMembership;
}

impl RestResource for Schedule {
    const PATH: &'static str = "schedules";
    type Create = CreateSchedule;
    type Update = UpdateSchedule;
}

impl RestResource for Exercise {
    const PATH: &'static str = "exercises";
    type Create = CreateExercise;
    type Update = UpdateExercise;
}

/// Shared HTTP transport for all endpoints.
#[derive(Clone)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    config: ApiConfig,
    credentials: S,
}

impl<S: CredentialStore + Clone> ApiClient<S> {
    pub fn new(config: ApiConfig, credentials: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            credentials,
        }
    }

    pub fn users(&self) -> Endpoint<S, User> {
        Endpoint::new(self.clone())
    }

    pub fn memberships(&self) -> Endpoint<S, Membership> {
        Endpoint::new(self.clone())
    }

    pub fn schedules(&self) -> Endpoint<S, Schedule> {
        Endpoint::new(self.clone())
    }

    pub fn exercises(&self) -> Endpoint<S, Exercise> {
        Endpoint::new(self.clone())
    }

    /// Exchange login credentials for a bearer token.
    pub async fn login(&self, req: &LoginRequest) -> Result<String, ClientError> {
        let response = self
            .request(Method::POST, "auth/login")
            .json(req)
            .send()
            .await
            .map_err(reduce)?;
        let body: LoginResponse = check_status(response)?.json().await.map_err(reduce)?;
        Ok(body.token)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        tracing::debug!(%method, path, "api request");
        let url = format!("{}/{}", self.config.base_url, path);
        #[allow(unused_mut)]
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.credentials.load() {
            builder = builder.bearer_auth(token);
        }
        #[cfg(target_arch = "wasm32")]
        {
            builder = builder.fetch_credentials_include();
        }
        builder
    }
}

/// One resource collection's five wire operations, bound to its path.
pub struct Endpoint<S, R: RestResource> {
    client: ApiClient<S>,
    _marker: PhantomData<fn() -> R>,
}

impl<S: Clone, R: RestResource> Clone for Endpoint<S, R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, R: RestResource> Endpoint<S, R> {
    fn new(client: ApiClient<S>) -> Self {
        Self {
            client,
            _marker: PhantomData,
        }
    }
}

impl<S, R> ResourceClient for Endpoint<S, R>
where
    S: CredentialStore + Clone,
    R: RestResource,
    R::Id: std::fmt::Display,
{
    type Record = R;
    type Create = R::Create;
    type Update = R::Update;

    fn resource(&self) -> &'static str {
        R::PATH
    }

    async fn list(&self) -> Result<Vec<R>, ClientError> {
        let response = self
            .client
            .request(Method::GET, R::PATH)
            .send()
            .await
            .map_err(reduce)?;
        check_status(response)?.json().await.map_err(reduce)
    }

    async fn get(&self, id: &R::Id) -> Result<R, ClientError> {
        let response = self
            .client
            .request(Method::GET, &format!("{}/{id}", R::PATH))
            .send()
            .await
            .map_err(reduce)?;
        check_status(response)?.json().await.map_err(reduce)
    }

    async fn create(&self, req: &R::Create) -> Result<R, ClientError> {
        let response = self
            .client
            .request(Method::POST, R::PATH)
            .json(req)
            .send()
            .await
            .map_err(reduce)?;
        check_status(response)?.json().await.map_err(reduce)
    }

    async fn update(&self, id: &R::Id, req: &R::Update) -> Result<(), ClientError> {
        // the server acknowledges with an empty body; the store refetches
        let response = self
            .client
            .request(Method::PUT, &format!("{}/{id}", R::PATH))
            .json(req)
            .send()
            .await
            .map_err(reduce)?;
        check_status(response)?;
        Ok(())
    }

    async fn delete(&self, id: &R::Id) -> Result<(), ClientError> {
        let response = self
            .client
            .request(Method::DELETE, &format!("{}/{id}", R::PATH))
            .send()
            .await
            .map_err(reduce)?;
        check_status(response)?;
        Ok(())
    }
}

fn reduce(err: reqwest::Error) -> ClientError {
    ApiError::Http(err).into()
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::debug!(%status, url = %response.url(), "server rejected request");
        Err(ClientError::Status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryCredentials;

    fn client_with(credentials: MemoryCredentials) -> ApiClient<MemoryCredentials> {
        ApiClient::new(
            ApiConfig {
                base_url: "https://gym.example/api".to_string(),
            },
            credentials,
        )
    }

    #[test]
    fn bearer_header_is_attached_only_when_a_credential_exists() {
        let credentials = MemoryCredentials::new();
        let client = client_with(credentials.clone());

        let anonymous = client.request(Method::GET, "users").build().unwrap();
        assert!(anonymous.headers().get("authorization").is_none());

        credentials.save("tok-123");
        let authed = client.request(Method::GET, "users").build().unwrap();
        assert_eq!(authed.headers()["authorization"], "Bearer tok-123");
    }

    #[test]
    fn endpoints_address_their_collection_paths() {
        let client = client_with(MemoryCredentials::new());

        let list = client.request(Method::GET, Membership::PATH).build().unwrap();
        assert_eq!(list.url().as_str(), "https://gym.example/api/memberships");

        let one = client
            .request(Method::GET, &format!("{}/7", Schedule::PATH))
            .build()
            .unwrap();
        assert_eq!(one.url().as_str(), "https://gym.example/api/schedules/7");
    }
}
