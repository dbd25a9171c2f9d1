//! Loading indicator with an animated dot suffix

use dioxus::prelude::*;

const TICK_MS: u64 = 500;

/// Advance the dot suffix by one tick: append a dot, reset after three.
fn advance_dots(dots: &str) -> String {
    if dots.len() == 3 {
        String::new()
    } else {
        format!("{dots}.")
    }
}

/// Full-page "Loading" indicator
///
/// Cycles the dot suffix every 500ms while mounted. The ticker runs in a
/// `use_future` task owned by this scope, so unmounting drops it and no
/// further ticks fire once the caller stops rendering the indicator.
#[component]
pub fn LoadingIndicator() -> Element {
    let mut dots = use_signal(String::new);

    use_future(move || async move {
        loop {
            sleep_ms(TICK_MS).await;
            let next = advance_dots(&dots.peek());
            dots.set(next);
        }
    });

    rsx! {
        p { class: "flex flex-col items-center mt-40 h-screen text-center text-8xl font-bold",
            "Loading{dots}"
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_append_then_reset() {
        let mut dots = String::new();
        let mut seen = Vec::new();
        for _ in 0..8 {
            dots = advance_dots(&dots);
            seen.push(dots.clone());
        }
        assert_eq!(seen, [".", "..", "...", "", ".", "..", "...", ""]);
    }

    #[test]
    fn dots_stay_within_cycle() {
        let mut dots = String::new();
        for _ in 0..50 {
            dots = advance_dots(&dots);
            assert!(["", ".", "..", "..."].contains(&dots.as_str()));
        }
    }
}
