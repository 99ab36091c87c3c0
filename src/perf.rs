use mockup_core::capability::{should_enable_smoothing, DeviceProfile, PerformanceConfig, SMOOTHING_CSS};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Read what the browser exposes about memory, cores and user agent.
/// `navigator.deviceMemory` is non-standard, so it is read reflectively.
pub fn device_profile(window: &web::Window) -> DeviceProfile {
    let navigator = window.navigator();
    let device_memory_gb = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64());
    let cores = navigator.hardware_concurrency();
    DeviceProfile {
        device_memory_gb,
        hardware_concurrency: (cores.is_finite() && cores > 0.0).then_some(cores as u32),
        user_agent: navigator.user_agent().unwrap_or_default(),
    }
}

/// Decide the motion-smoothing tier once at startup and install the
/// transitions if needed.
pub fn install_motion_policy(window: &web::Window, document: &web::Document) {
    let profile = device_profile(window);
    if !should_enable_smoothing(&profile, &PerformanceConfig::default()) {
        log::info!("[perf] tier: High - Raw Input Enabled");
        return;
    }
    log::info!("[perf] tier: Low/Mobile - Enabling Smoothing");
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(SMOOTHING_CSS));
    if let Some(head) = document.head() {
        _ = head.append_child(&style);
    }
}
