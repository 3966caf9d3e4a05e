//! Statistical checks over the task table and request builders.

mod common;

use common::shapes::is_known_request;
use rand::rngs::StdRng;
use rand::SeedableRng;
use storefront_load::auth::{basic_auth_header, Credentials, Session};
use storefront_load::plan;
use storefront_load::tasks::{self, TASKS};

fn account() -> Credentials {
    Credentials::new("john@gmail.com", "password")
}

#[test]
fn test_selection_frequency_converges_to_weights() {
    let mut rng = StdRng::seed_from_u64(2024);
    let sample = plan::sample(130_000, 0, &account(), &mut rng).unwrap();

    for share in plan::weight_shares() {
        let observed = sample.observed_share(share.task).unwrap();
        assert!(
            (observed - share.share).abs() < 0.01,
            "{}: observed {observed:.4}, expected {:.4}",
            share.task,
            share.share
        );
    }

    let ratio = sample.count("list_products") as f64 / sample.count("register_user") as f64;
    assert!((ratio - 3.0).abs() < 0.2, "list_products/register_user = {ratio:.3}");
}

#[test]
fn test_sampled_requests_have_known_shapes() {
    let mut rng = StdRng::seed_from_u64(99);
    let sample = plan::sample(5_000, 5_000, &account(), &mut rng).unwrap();
    assert_eq!(sample.requests.len(), 5_000);
    for (task, request) in &sample.requests {
        assert!(
            is_known_request(request.method.as_str(), &request.path),
            "{task}: {request}"
        );
        assert_eq!(request.authenticated, *task != "login_user");
    }
}

#[test]
fn test_get_user_example() {
    let mut rng = StdRng::seed_from_u64(0);
    let task = tasks::find("get_user").unwrap();
    let request = task.request(&account(), &mut rng);
    assert_eq!(
        request.to_string(),
        "GET /users/761c3b71-a9ce-4b6f-a691-ac84743ec508"
    );
    assert!(request.authenticated);
    assert_eq!(
        Session::new(&account()).authorization(),
        "Basic am9obkBnbWFpbC5jb206cGFzc3dvcmQ="
    );
}

#[test]
fn test_every_session_gets_the_same_header() {
    let expected = basic_auth_header(&account());
    for _ in 0..100 {
        let session = Session::new(&account());
        assert_eq!(session.authorization(), expected.1);
    }
}

#[test]
fn test_table_covers_all_weights() {
    assert_eq!(TASKS.len(), 8);
    assert_eq!(tasks::total_weight(), 13);
    assert!(TASKS.iter().all(|task| task.weight > 0));
}
