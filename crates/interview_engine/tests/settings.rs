use std::collections::HashMap;
use std::time::Duration;

use interview_engine::{
    SettingsError, TransportSettings, ENV_BASE_URL, ENV_CONNECT_TIMEOUT_SECS,
    ENV_REQUEST_TIMEOUT_SECS,
};
use pretty_assertions::assert_eq;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn unset_variables_keep_defaults() {
    let settings = TransportSettings::from_lookup(lookup(&[])).unwrap();
    assert_eq!(settings, TransportSettings::default());
    assert_eq!(settings.base_url, "http://127.0.0.1:8000/");
    assert_eq!(settings.connect_timeout, Duration::from_secs(10));
    assert_eq!(settings.request_timeout, Duration::from_secs(60));
}

#[test]
fn overrides_are_applied() {
    let settings = TransportSettings::from_lookup(lookup(&[
        (ENV_BASE_URL, " http://10.0.2.2:8000 "),
        (ENV_CONNECT_TIMEOUT_SECS, "3"),
        (ENV_REQUEST_TIMEOUT_SECS, "90"),
    ]))
    .unwrap();

    assert_eq!(settings.base_url, "http://10.0.2.2:8000");
    assert_eq!(settings.connect_timeout, Duration::from_secs(3));
    assert_eq!(settings.request_timeout, Duration::from_secs(90));
    assert_eq!(settings.base().unwrap().as_str(), "http://10.0.2.2:8000/");
}

#[test]
fn invalid_values_name_the_variable() {
    let err = TransportSettings::from_lookup(lookup(&[(ENV_CONNECT_TIMEOUT_SECS, "soon")]))
        .unwrap_err();
    assert!(matches!(
        err,
        SettingsError::InvalidValue { ref key, .. } if key == ENV_CONNECT_TIMEOUT_SECS
    ));

    let err =
        TransportSettings::from_lookup(lookup(&[(ENV_REQUEST_TIMEOUT_SECS, "0")])).unwrap_err();
    assert_eq!(
        err,
        SettingsError::InvalidValue {
            key: ENV_REQUEST_TIMEOUT_SECS.to_string(),
            message: "timeout must be positive".to_string(),
        }
    );

    let err = TransportSettings::from_lookup(lookup(&[(ENV_BASE_URL, "not a url")])).unwrap_err();
    assert!(err.to_string().starts_with("invalid value for R2I_BASE_URL"));

    let err = TransportSettings::from_lookup(lookup(&[(ENV_BASE_URL, "mailto:me@example.com")]))
        .unwrap_err();
    assert!(err.to_string().contains("cannot be a base"));
}
