//! Assembles the goose scenario and attack from [`LoadTestConfig`].

use crate::config::LoadTestConfig;
use crate::tasks::{self, TASKS};
use goose::prelude::*;
use std::sync::Arc;

/// Name of the single scenario every simulated user runs.
pub const SCENARIO_NAME: &str = "StorefrontUser";

/// The storefront user scenario: session setup on start, then the weighted
/// task table with the configured think time between tasks.
pub fn build_scenario(config: &LoadTestConfig) -> Result<Scenario, GooseError> {
    let credentials = Arc::new(config.credentials.clone());

    let mut scenario = Scenario::new(SCENARIO_NAME)
        .register_transaction(tasks::session_start(Arc::clone(&credentials)));
    for task in TASKS {
        let transaction = tasks::transaction(task, Arc::clone(&credentials))?;
        scenario = scenario.register_transaction(transaction);
    }

    match config.wait_time() {
        Some((min, max)) => scenario.set_wait_time(min, max),
        None => Ok(scenario),
    }
}

/// Register the scenario on `attack`, schedule transactions randomly and
/// default the host to the configured one.
pub fn build_attack(
    attack: GooseAttack,
    config: &LoadTestConfig,
) -> Result<GooseAttack, GooseError> {
    tracing::info!(
        host = %config.host,
        username = %config.credentials.username,
        password = "<REDACTED>",
        wait_min_secs = config.wait_min_secs,
        wait_max_secs = config.wait_max_secs,
        tasks = TASKS.len(),
        "configuring storefront load test"
    );

    let attack = attack.set_default(GooseDefault::Host, config.host.as_str())?;
    Ok(attack
        .register_scenario(build_scenario(config)?)
        .set_scheduler(GooseScheduler::Random))
}

#[cfg(test)]
mod tests {
    use super::*;
    use goose::config::GooseConfiguration;
    use std::time::Duration;

    #[test]
    fn test_build_attack_yields_configured_attack() {
        let attack = GooseAttack::initialize_with_config(GooseConfiguration::default()).unwrap();
        let config = LoadTestConfig {
            host: "http://storefront.test:3000".to_string(),
            ..LoadTestConfig::default()
        };
        let attack: GooseAttack = build_attack(attack, &config).unwrap();
        // Further defaults chain onto the returned attack.
        assert!(attack.set_default(GooseDefault::Users, 1).is_ok());
    }

    #[test]
    fn test_scenario_registers_weighted_tasks_and_session_start() {
        let scenario = build_scenario(&LoadTestConfig::default()).unwrap();
        assert_eq!(scenario.name, SCENARIO_NAME);

        let on_start: Vec<&str> = scenario
            .transactions
            .iter()
            .filter(|t| t.on_start)
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(on_start, vec!["init_session"]);

        let weighted: Vec<(&str, usize)> = scenario
            .transactions
            .iter()
            .filter(|t| !t.on_start)
            .map(|t| (t.name.as_str(), t.weight))
            .collect();
        assert_eq!(
            weighted,
            vec![
                ("get_user", 2),
                ("register_user", 1),
                ("get_user_history", 2),
                ("login_user", 1),
                ("list_products", 3),
                ("list_products_with_filters", 2),
                ("get_single_product", 1),
                ("get_recommendations", 1),
            ]
        );
    }

    #[test]
    fn test_default_think_time_is_one_to_three_seconds() {
        let scenario = build_scenario(&LoadTestConfig::default()).unwrap();
        assert_eq!(
            scenario.transaction_wait,
            Some((Duration::from_secs(1), Duration::from_secs(3)))
        );
    }

    #[test]
    fn test_scenario_builds_with_default_config() {
        assert!(build_scenario(&LoadTestConfig::default()).is_ok());
    }

    #[test]
    fn test_scenario_builds_without_wait_time() {
        let config = LoadTestConfig {
            wait_min_secs: 0,
            wait_max_secs: 0,
            ..LoadTestConfig::default()
        };
        let scenario = build_scenario(&config).unwrap();
        assert_eq!(scenario.transaction_wait, None);
    }
}
