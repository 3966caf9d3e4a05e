//! Request templates, one builder per task.
//!
//! A [`RequestTemplate`] is a plain value: method, path (with query), optional
//! JSON body and whether the session's `Authorization` header goes with it.
//! Builders never touch the network, so every request shape in the load test
//! can be checked by ordinary unit tests. [`crate::tasks`] turns templates
//! into goose requests.

use crate::auth::Credentials;
use crate::catalog;
use rand::RngCore;
use serde_json::{json, Value};
use std::fmt;

/// HTTP methods the load test issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

impl RequestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One HTTP request as a task would issue it.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTemplate {
    pub method: RequestMethod,
    /// Path relative to the target host, always starting with `/`.
    pub path: String,
    pub body: Option<Value>,
    /// Send the session's Basic-auth header.
    pub authenticated: bool,
}

impl RequestTemplate {
    fn get(path: impl Into<String>) -> Self {
        Self {
            method: RequestMethod::Get,
            path: path.into(),
            body: None,
            authenticated: true,
        }
    }

    fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: RequestMethod::Post,
            path: path.into(),
            body: Some(body),
            authenticated: true,
        }
    }

    fn without_auth(mut self) -> Self {
        self.authenticated = false;
        self
    }
}

impl fmt::Display for RequestTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;
        if let Some(body) = &self.body {
            write!(f, " {body}")?;
        }
        if !self.authenticated {
            write!(f, " (no auth)")?;
        }
        Ok(())
    }
}

/// `GET /users/{FIXED_USER_ID}`
pub fn get_user(_credentials: &Credentials, _rng: &mut dyn RngCore) -> RequestTemplate {
    RequestTemplate::get(format!("/users/{}", catalog::FIXED_USER_ID))
}

/// `POST /users/register` with a fresh random email.
pub fn register_user(_credentials: &Credentials, rng: &mut dyn RngCore) -> RequestTemplate {
    RequestTemplate::post(
        "/users/register",
        json!({
            "name": catalog::REGISTER_NAME,
            "email": catalog::registration_email(rng),
            "password": catalog::REGISTER_PASSWORD,
            "age": catalog::REGISTER_AGE,
        }),
    )
}

/// `GET /users/{id}/history` for a random known user.
pub fn get_user_history(_credentials: &Credentials, rng: &mut dyn RngCore) -> RequestTemplate {
    let user_id = catalog::pick(catalog::HISTORY_USER_IDS, rng);
    RequestTemplate::get(format!("/users/{user_id}/history"))
}

/// `POST /users/login` with the test account. Sent without the session
/// header: this is the request that acquires credentials.
pub fn login_user(credentials: &Credentials, _rng: &mut dyn RngCore) -> RequestTemplate {
    RequestTemplate::post(
        "/users/login",
        json!({
            "email": credentials.username,
            "password": credentials.password,
        }),
    )
    .without_auth()
}

/// `GET /products`
pub fn list_products(_credentials: &Credentials, _rng: &mut dyn RngCore) -> RequestTemplate {
    RequestTemplate::get("/products")
}

/// `GET /products?brand=<b>&category=<c>`. Both parameters are always
/// present; either may be empty.
pub fn list_products_with_filters(
    _credentials: &Credentials,
    rng: &mut dyn RngCore,
) -> RequestTemplate {
    let brand = catalog::pick(catalog::BRANDS, rng);
    let category = catalog::pick(catalog::CATEGORIES, rng);
    RequestTemplate::get(format!("/products?brand={brand}&category={category}"))
}

/// `GET /products/{id}` for a random known product.
pub fn get_single_product(_credentials: &Credentials, rng: &mut dyn RngCore) -> RequestTemplate {
    let product_id = catalog::pick(catalog::PRODUCT_IDS, rng);
    RequestTemplate::get(format!("/products/{product_id}"))
}

/// `GET /products/recommendations`
pub fn get_recommendations(_credentials: &Credentials, _rng: &mut dyn RngCore) -> RequestTemplate {
    RequestTemplate::get("/products/recommendations")
}
