use leptos::prelude::*;
use taxfy_frontend::{App, ConfigErrorPage};
use taxfy_shared::config::{API_BASE_URL_VAR, ApiConfig};

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    match ApiConfig::from_value(option_env!("TAXFY_API_BASE_URL")) {
        Ok(config) => {
            log::info!("[App] API base URL: {}", config.base_url());
            mount_to_body(move || view! { <App config=config /> });
        }
        Err(e) => {
            log::error!("[App] Invalid configuration ({}): {}", API_BASE_URL_VAR, e);
            let message = e.to_string();
            mount_to_body(move || view! { <ConfigErrorPage message=message /> });
        }
    }
}
