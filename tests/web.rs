//! Browser-side checks for the paths that create JS values
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use spinner_engine::Spinner;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn rejects_bad_options() {
    assert!(Spinner::new_with_options(0.0, 20).is_err());
    assert!(Spinner::new_with_options(8.0, 0).is_err());

    let mut spinner = Spinner::new();
    assert!(spinner.load_options("{\"stepSize\": \"fast\"}".to_string()).is_err());
    assert!(spinner.restart("[]".to_string()).is_err());
    assert!(spinner.frame_orientation_by_key("sideways").is_err());
}

#[wasm_bindgen_test]
fn restart_and_step_in_browser() {
    spinner_engine::init();
    let mut spinner = Spinner::new_with_options(4.0, 10).expect("valid options");
    spinner
        .restart("{\"r\": 1, \"q\": 1, \"psi\": 30, \"chi\": 60, \"omega\": [0.001, 0, 0]}".to_string())
        .expect("valid restart");
    spinner.step(16.0);

    assert_eq!(spinner.get_perf_stats().substeps(), 0);
    assert!((spinner.time() - 16.0).abs() < 1e-12);
    assert_eq!(spinner.frame_orientation_by_key("J").map(|q| q.len()).ok(), Some(4));
}
