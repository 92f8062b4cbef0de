// Shared layout, animation and camera tuning constants.

// Sphere layout
pub const SPHERE_RADIUS: f32 = 3.0; // distance of every panel centre from the origin
pub const PANEL_SIZE: f32 = 1.2; // side length of the square image quad

// Animation
pub const IDLE_ROTATION_PER_TICK: f32 = 0.002; // radians added to the group yaw each frame
pub const PULSE_AMPLITUDE: f32 = 0.02; // group scale breathes in [1 - a, 1 + a]
pub const PULSE_RATE: f64 = 1.0; // radians of pulse phase per second of wall-clock time

// Interaction
pub const REST_SCALE: f32 = 1.0;
pub const HOVER_SCALE: f32 = 1.3; // per-panel enlargement while hovered

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_DISTANCE: f32 = 6.0; // eye starts on +Z looking at the origin
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit controls
pub const ORBIT_MIN_DISTANCE: f32 = 3.0;
pub const ORBIT_MAX_DISTANCE: f32 = 12.0;
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of pending rotation applied per update
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // distance multiplier per wheel notch
pub const ORBIT_MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01; // stay off the poles

// Start-up image set, replaced wholesale by uploads
pub const DEFAULT_IMAGES: [&str; 6] = [
    "https://picsum.photos/300?1",
    "https://picsum.photos/300?2",
    "https://picsum.photos/300?3",
    "https://picsum.photos/300?4",
    "https://picsum.photos/300?5",
    "https://picsum.photos/300?6",
];
