#![cfg(target_arch = "wasm32")]

use gloo_timers::future::sleep;
use net_worth_chart_wasm::domain::errors::BalanceError;
use net_worth_chart_wasm::infrastructure::http::with_timeout;
use std::time::Duration;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test(async)]
async fn slow_fetch_times_out() {
    let slow = async {
        sleep(Duration::from_millis(200)).await;
        Ok::<_, BalanceError>(1)
    };
    assert_eq!(with_timeout(slow, Some(10)).await, Err(BalanceError::Timeout(10)));
}

#[wasm_bindgen_test(async)]
async fn fast_fetch_beats_timer() {
    let fast = async {
        sleep(Duration::from_millis(5)).await;
        Ok::<_, BalanceError>(7)
    };
    assert_eq!(with_timeout(fast, Some(500)).await, Ok(7));
}

#[wasm_bindgen_test(async)]
async fn no_timeout_waits_for_fetch() {
    let fetch = async {
        sleep(Duration::from_millis(20)).await;
        Ok::<_, BalanceError>("done")
    };
    assert_eq!(with_timeout(fetch, None).await, Ok("done"));
}
