//! Startup heuristic deciding whether to smooth motion with CSS transitions.

/// Thresholds below which a device is treated as low-end.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerformanceConfig {
    pub low_end_ram_limit_gb: f64,
    pub low_end_cpu_limit: u32,
    pub force_smoothing_on_mobile: bool,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            low_end_ram_limit_gb: 4.0,
            low_end_cpu_limit: 4,
            force_smoothing_on_mobile: true,
        }
    }
}

/// What the browser reports about the device. Missing values are `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeviceProfile {
    pub device_memory_gb: Option<f64>,
    pub hardware_concurrency: Option<u32>,
    pub user_agent: String,
}

const MOBILE_AGENTS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Transitions installed when smoothing is enabled.
pub const SMOOTHING_CSS: &str = "
    .packaging-container { transition: transform 0.1s linear !important; }
    :root { transition: --rot-x 0.1s linear, --rot-y 0.1s linear !important; }
    .face { transition: filter 0.1s linear !important; }
";

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_AGENTS.iter().any(|token| ua.contains(token))
}

pub fn should_enable_smoothing(profile: &DeviceProfile, config: &PerformanceConfig) -> bool {
    // Zero means "not reported" for both signals.
    if let Some(memory) = profile.device_memory_gb.filter(|m| *m > 0.0) {
        if memory < config.low_end_ram_limit_gb {
            return true;
        }
    }
    if let Some(cores) = profile.hardware_concurrency.filter(|c| *c > 0) {
        if cores <= config.low_end_cpu_limit {
            return true;
        }
    }
    config.force_smoothing_on_mobile && is_mobile_user_agent(&profile.user_agent)
}
