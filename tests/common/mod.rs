#![allow(dead_code)]

pub mod mock_backend {
    use std::io::Read;
    use std::sync::{Arc, Mutex};
    use std::thread;

    /// One request as the mock backend saw it.
    #[derive(Debug, Clone)]
    pub struct RecordedRequest {
        pub method: String,
        /// Path plus query, e.g. `/products?brand=Nike&category=`
        pub url: String,
        pub authorization: Option<String>,
        pub body: String,
    }

    /// Minimal stand-in for the storefront backend: answers every request
    /// with `200 {"success":true}` and records what it received.
    pub struct MockBackend {
        pub base_url: String,
        recorded: Arc<Mutex<Vec<RecordedRequest>>>,
        _handle: thread::JoinHandle<()>,
    }

    impl MockBackend {
        pub fn start() -> Self {
            let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
            let addr = server.server_addr().to_ip().unwrap();
            let recorded = Arc::new(Mutex::new(Vec::new()));

            let sink = Arc::clone(&recorded);
            let handle = thread::spawn(move || {
                for mut request in server.incoming_requests() {
                    let mut body = String::new();
                    let _ = request.as_reader().read_to_string(&mut body);
                    let authorization = request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv("Authorization"))
                        .map(|h| h.value.as_str().to_string());
                    sink.lock().unwrap().push(RecordedRequest {
                        method: request.method().to_string(),
                        url: request.url().to_string(),
                        authorization,
                        body,
                    });
                    let _ = request.respond(tiny_http::Response::from_string(
                        r#"{"success":true}"#,
                    ));
                }
            });

            Self {
                base_url: format!("http://{addr}"),
                recorded,
                _handle: handle,
            }
        }

        /// Snapshot of everything received so far.
        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.recorded.lock().unwrap().clone()
        }
    }
}

pub mod shapes {
    use storefront_load::catalog;

    /// True when `method url` is one of the request shapes the task table
    /// can produce.
    pub fn is_known_request(method: &str, url: &str) -> bool {
        match method {
            "POST" => url == "/users/register" || url == "/users/login",
            "GET" => {
                if url == format!("/users/{}", catalog::FIXED_USER_ID)
                    || url == "/products"
                    || url == "/products/recommendations"
                {
                    return true;
                }
                if let Some(id) = url
                    .strip_prefix("/users/")
                    .and_then(|rest| rest.strip_suffix("/history"))
                {
                    return catalog::HISTORY_USER_IDS.contains(&id);
                }
                if let Some(query) = url.strip_prefix("/products?") {
                    return is_filter_query(query);
                }
                if let Some(id) = url.strip_prefix("/products/") {
                    return catalog::PRODUCT_IDS.contains(&id);
                }
                false
            }
            _ => false,
        }
    }

    fn is_filter_query(query: &str) -> bool {
        let Some((brand, category)) = query.split_once('&') else {
            return false;
        };
        match (
            brand.strip_prefix("brand="),
            category.strip_prefix("category="),
        ) {
            (Some(brand), Some(category)) => {
                catalog::BRANDS.contains(&brand) && catalog::CATEGORIES.contains(&category)
            }
            _ => false,
        }
    }
}
