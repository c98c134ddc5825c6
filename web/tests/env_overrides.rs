use std::env;
use unbored_web::config::{AppConfig, RunMode};

// Environment overrides mutate process-wide state, so this is the only test
// in its binary: no sibling thread can call into the environment while the
// variables below are set and removed.
#[test]
fn test_environment_values_override_the_resolved_config() {
    let baseline = AppConfig::resolve(None).unwrap();

    env::set_var("UNBORED_MODE", "production");
    env::set_var("UNBORED_PORT", "9100");
    env::set_var("UNBORED_API_URL", "http://localhost:9006");

    let config = AppConfig::resolve(None).unwrap();
    assert_eq!(config.mode, RunMode::Production);
    assert_eq!(config.listen_port, 9100);
    assert_eq!(config.api.base_url, "http://localhost:9006");

    // Unparseable values must be ignored, not crash the load.
    env::set_var("UNBORED_PORT", "not-a-port");

    let config = AppConfig::resolve(None).unwrap();
    assert_eq!(config.listen_port, baseline.listen_port);

    env::remove_var("UNBORED_MODE");
    env::remove_var("UNBORED_PORT");
    env::remove_var("UNBORED_API_URL");
}
