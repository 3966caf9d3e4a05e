//! # Task Table
//!
//! The weighted task set each simulated user runs. Weights are relative:
//! goose lists every transaction `weight` times per scenario pass and the
//! random scheduler shuffles that list, so over a run `list_products` (3) is
//! picked three times as often as `register_user` (1).
//!
//! | Task | Weight | Request |
//! |------|--------|---------|
//! | `get_user` | 2 | `GET /users/{fixed id}` |
//! | `register_user` | 1 | `POST /users/register` |
//! | `get_user_history` | 2 | `GET /users/{id}/history` |
//! | `login_user` | 1 | `POST /users/login` (no auth) |
//! | `list_products` | 3 | `GET /products` |
//! | `list_products_with_filters` | 2 | `GET /products?brand=..&category=..` |
//! | `get_single_product` | 1 | `GET /products/{id}` |
//! | `get_recommendations` | 1 | `GET /products/recommendations` |

use crate::auth::{self, Credentials};
use crate::requests::{self, RequestMethod, RequestTemplate};
use goose::prelude::*;
use rand::RngCore;
use std::sync::Arc;

/// Builds one request for a task from the session credentials and an RNG.
pub type RequestBuilderFn = fn(&Credentials, &mut dyn RngCore) -> RequestTemplate;

/// A named, weighted task.
#[derive(Debug, Clone, Copy)]
pub struct Task {
    pub name: &'static str,
    pub weight: usize,
    pub build: RequestBuilderFn,
}

impl Task {
    /// Build this task's next request.
    pub fn request(&self, credentials: &Credentials, rng: &mut dyn RngCore) -> RequestTemplate {
        (self.build)(credentials, rng)
    }
}

/// Every task a simulated user may run.
pub const TASKS: &[Task] = &[
    Task {
        name: "get_user",
        weight: 2,
        build: requests::get_user,
    },
    Task {
        name: "register_user",
        weight: 1,
        build: requests::register_user,
    },
    Task {
        name: "get_user_history",
        weight: 2,
        build: requests::get_user_history,
    },
    Task {
        name: "login_user",
        weight: 1,
        build: requests::login_user,
    },
    Task {
        name: "list_products",
        weight: 3,
        build: requests::list_products,
    },
    Task {
        name: "list_products_with_filters",
        weight: 2,
        build: requests::list_products_with_filters,
    },
    Task {
        name: "get_single_product",
        weight: 1,
        build: requests::get_single_product,
    },
    Task {
        name: "get_recommendations",
        weight: 1,
        build: requests::get_recommendations,
    },
];

/// Look a task up by name.
pub fn find(name: &str) -> Option<&'static Task> {
    TASKS.iter().find(|task| task.name == name)
}

/// Sum of all task weights.
pub fn total_weight() -> usize {
    TASKS.iter().map(|task| task.weight).sum()
}

fn goose_method(method: RequestMethod) -> GooseMethod {
    match method {
        RequestMethod::Get => GooseMethod::Get,
        RequestMethod::Post => GooseMethod::Post,
    }
}

/// Issue one request for `task` on behalf of `user`.
///
/// Failures surface through `?` and are counted by goose; nothing is retried.
pub async fn run_task(
    user: &mut GooseUser,
    task: &'static Task,
    credentials: &Credentials,
) -> TransactionResult {
    // ThreadRng is !Send, so it must not live across the await below.
    let template = task.request(credentials, &mut rand::rng());
    tracing::trace!(
        task = task.name,
        method = %template.method,
        path = %template.path,
        "request"
    );

    let method = goose_method(template.method);
    let mut request_builder = user.get_request_builder(&method, &template.path)?;
    if template.authenticated {
        let authorization = auth::session_authorization(user, credentials);
        request_builder = request_builder.header(auth::AUTHORIZATION, authorization);
    }
    if let Some(body) = &template.body {
        request_builder = request_builder.json(body);
    }

    let goose_request = GooseRequest::builder()
        .method(method)
        .path(template.path.as_str())
        .name(task.name)
        .set_request_builder(request_builder)
        .build();
    user.request(goose_request).await?;
    Ok(())
}

/// Goose transaction for `task`, carrying its name and weight.
pub fn transaction(
    task: &'static Task,
    credentials: Arc<Credentials>,
) -> Result<Transaction, GooseError> {
    let function: TransactionFunction = Arc::new(move |user| {
        let credentials = Arc::clone(&credentials);
        Box::pin(async move { run_task(user, task, &credentials).await })
    });
    Transaction::new(function)
        .set_name(task.name)
        .set_weight(task.weight)
}

/// On-start transaction that computes the session's auth header.
pub fn session_start(credentials: Arc<Credentials>) -> Transaction {
    let function: TransactionFunction = Arc::new(move |user| {
        let credentials = Arc::clone(&credentials);
        Box::pin(async move {
            auth::init_session(user, &credentials);
            Ok(())
        })
    });
    Transaction::new(function)
        .set_name("init_session")
        .set_on_start()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_weights_match_table() {
        let expected = [
            ("get_user", 2),
            ("register_user", 1),
            ("get_user_history", 2),
            ("login_user", 1),
            ("list_products", 3),
            ("list_products_with_filters", 2),
            ("get_single_product", 1),
            ("get_recommendations", 1),
        ];
        assert_eq!(TASKS.len(), expected.len());
        for (name, weight) in expected {
            assert_eq!(find(name).map(|t| t.weight), Some(weight), "{name}");
        }
        assert_eq!(total_weight(), 13);
    }

    #[test]
    fn test_only_login_skips_auth() {
        let credentials = Credentials::new("john@gmail.com", "password");
        let mut rng = StdRng::seed_from_u64(9);
        for task in TASKS {
            let template = task.request(&credentials, &mut rng);
            assert_eq!(template.authenticated, task.name != "login_user", "{}", task.name);
        }
    }

    #[test]
    fn test_goose_method_mapping() {
        assert!(matches!(goose_method(RequestMethod::Get), GooseMethod::Get));
        assert!(matches!(goose_method(RequestMethod::Post), GooseMethod::Post));
    }

    #[test]
    fn test_transactions_build_for_every_task() {
        let credentials = Arc::new(Credentials::new("john@gmail.com", "password"));
        for task in TASKS {
            assert!(transaction(task, Arc::clone(&credentials)).is_ok(), "{}", task.name);
        }
    }
}
