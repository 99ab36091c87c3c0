// DOM hooks the front-end expects in index.html.

// Elements
pub const SCENE_ID: &str = "scene-area";
pub const CONTAINER_SELECTOR: &str = ".packaging-container";
pub const SHADOW_SELECTOR: &str = ".packaging-shadow";
pub const VARIANT_TEXT_ID: &str = "variant-text";
pub const PRODUCT_CODE_ID: &str = "pirt-number";
pub const SINE_PATH_ID: &str = "sine";

// Controls
pub const RESET_FRONT_ID: &str = "reset-front";
pub const RESET_BACK_ID: &str = "reset-back";
pub const VARIANT_PILL_SELECTOR: &str = ".var-pill";
pub const VARIANT_DATA_ATTR: &str = "data-variant";

// Classes
pub const ACTIVE_CLASS: &str = "active";
pub const CLICKED_CLASS: &str = "clicked";
pub const CLICK_PULSE_MS: i32 = 150; // how long a pressed button keeps CLICKED_CLASS
