//! End-to-end reads through the public API.
//!
//! Most tests use `InMemoryEnv` (via the `test-support` feature) and never
//! touch process state. `reads_the_process_environment` sets one variable
//! with a name no other test uses.

use std::sync::{Arc, Barrier};

use toolkit_core::{
    InputOptions, Inputs, ValidationError, ValidationErrorKind, get_boolean_input, get_input,
    get_multiline_input, input_env_key,
};
use toolkit_std::env::InMemoryEnv;

#[test]
fn host_key_convention_round_trip() {
    let env = InMemoryEnv::new();
    env.set(input_env_key("release notes"), "line one\nline two");
    let inputs = Inputs::new(&env);

    assert!(env.contains("INPUT_RELEASE_NOTES"));
    assert_eq!(
        inputs.get_multiline_input("Release Notes", None).unwrap(),
        vec!["line one", "line two"]
    );
}

#[test]
fn one_environment_many_readers() {
    let env = Arc::new(InMemoryEnv::new());
    env.set("INPUT_DRY_RUN", "False");

    let a = Inputs::new(Arc::clone(&env));
    let b = Inputs::new(&*env);

    assert!(!a.get_boolean_input("dry run", None).unwrap());
    assert!(!b.get_boolean_input("dry run", None).unwrap());

    env.set("INPUT_DRY_RUN", "maybe");
    let err = a.get_boolean_input("dry run", None).unwrap_err();
    assert_eq!(err.kind(), ValidationErrorKind::InvalidBoolean);
    assert_eq!(err.raw_value(), Some("maybe"));
}

#[test]
fn shared_options_race_on_first_use() {
    const THREADS: usize = 32;

    let env: InMemoryEnv = (0..THREADS)
        .map(|i| (format!("INPUT_NAME_{i}"), format!("  value {i}  ")))
        .collect();
    let inputs = Inputs::new(env);
    let options = InputOptions::new().required(true);
    let barrier = Barrier::new(THREADS);

    std::thread::scope(|s| {
        for i in 0..THREADS {
            let (inputs, options, barrier) = (&inputs, &options, &barrier);
            s.spawn(move || {
                barrier.wait();
                let value = inputs.get_input(&format!("name {i}"), Some(options)).unwrap();
                assert_eq!(value, format!("value {i}"));

                let resolved = options.resolve();
                assert!(resolved.required);
                assert!(resolved.trim_whitespace);
            });
        }
    });

    assert!(options.is_resolved());
    assert_eq!(options.declared_trim_whitespace(), None);
}

#[test]
fn required_failure_carries_the_display_name() {
    let inputs = Inputs::new(InMemoryEnv::new());
    let options = InputOptions::new().required(true);

    let err = inputs.get_input("My Token", Some(&options)).unwrap_err();
    assert_eq!(
        err,
        ValidationError::RequiredInputMissing {
            name: "My Token".to_string()
        }
    );
    assert_eq!(err.to_string(), "Input required and not supplied: My Token");
}

#[test]
fn options_loaded_from_configuration() {
    let env: InMemoryEnv = [("INPUT_PATTERN", "  *.rs  ")].into_iter().collect();
    let inputs = Inputs::new(env);
    let options: InputOptions =
        serde_json::from_str(r#"{"required":true,"trim_whitespace":false}"#).unwrap();

    assert_eq!(
        inputs.get_input("pattern", Some(&options)).unwrap(),
        "  *.rs  "
    );
}

#[test]
fn reads_the_process_environment() {
    // SAFETY: no other test in this binary reads or writes this variable.
    unsafe {
        std::env::set_var(
            "INPUT_TOOLKIT_CORE_PROCESS_ENV_CHECK",
            " alpha\n\nbeta ",
        );
    }

    assert_eq!(
        get_input("toolkit core process env check", None).unwrap(),
        "alpha\n\nbeta"
    );
    assert_eq!(
        get_multiline_input("toolkit core process env check", None).unwrap(),
        vec!["alpha", "beta"]
    );
    assert_eq!(
        get_boolean_input("toolkit core process env check", None)
            .unwrap_err()
            .kind(),
        ValidationErrorKind::InvalidBoolean
    );
    assert_eq!(
        Inputs::system()
            .get_input("toolkit core process env check unset", None)
            .unwrap(),
        ""
    );
}
