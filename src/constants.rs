// Browser-side element ids and input tuning for the web front-end.

// DOM hooks
pub const CANVAS_ID: &str = "sphere-canvas";
pub const MODAL_ID: &str = "imageModal";
pub const MODAL_IMG_ID: &str = "modalImg";
pub const UPLOAD_BUTTON_ID: &str = "uploadBtn";
pub const FILE_INPUT_ID: &str = "fileInput";

// Wheel normalisation (WheelEvent.deltaMode)
pub const WHEEL_LINE_PX: f32 = 16.0; // DOM_DELTA_LINE, one line of text
pub const WHEEL_PAGE_PX: f32 = 800.0; // DOM_DELTA_PAGE, roughly one viewport

// Image textures
pub const MAX_TEXTURE_SIDE: u32 = 512; // decoded images are downscaled to fit
pub const IMAGE_CROSS_ORIGIN: &str = "anonymous"; // remote images must allow CORS to be sampled

// Clear colour behind the sphere (transparent so the page background shows)
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];
