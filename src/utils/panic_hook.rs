use leptos::logging::log;
use std::panic;

/// Routes panics to the browser console and adds a hint when the panic came
/// from a reactive owner that was already disposed.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if is_disposed_owner(&message) {
            log!("[PANIC] A reactive owner was disposed before this code ran. Usually:");
            log!("[PANIC] 1. The survey form was unmounted while a DOM event was still queued");
            log!("[PANIC] 2. A parent kept the form's on_change callback and called it later");
            log!("[PANIC] The form keeps no state after unmount; keep the last SurveyChange in the parent");
        }
    }));
}

fn is_disposed_owner(message: &str) -> bool {
    message.contains("OwnerDisposed") || message.contains("disposed")
}

/// Call once from the wasm entry point.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_owner_disposal_messages() {
        assert!(is_disposed_owner("called `Result::unwrap()` on an `Err` value: OwnerDisposed(..)"));
        assert!(is_disposed_owner("tried to access a signal that has been disposed"));
        assert!(!is_disposed_owner("index out of bounds"));
    }
}
