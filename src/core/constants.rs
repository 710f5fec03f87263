// Simulation and interaction tuning constants shared by the pure core and
// the web wiring layer.

// Particle field
pub const PARTICLE_AREA_PER: f32 = 15000.0; // canvas px^2 per particle
pub const PARTICLE_MAX_COUNT: usize = 100; // hard cap regardless of area
pub const PARTICLE_SIZE_MIN: f32 = 0.5;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0; // size in [min, min + span)
pub const PARTICLE_SPEED_HALF_RANGE: f32 = 0.25; // velocity components in [-h, h)
pub const PARTICLE_CHANNEL_BASE: u8 = 155; // red/green floor; blue stays at 255
pub const PARTICLE_CHANNEL_SPAN: u8 = 100;
pub const PARTICLE_ALPHA_MIN: f32 = 0.1;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.5;

// Pointer repulsion
pub const POINTER_RADIUS: f32 = 100.0; // interaction radius in px
pub const REPEL_STEP_MAX: f32 = 5.0; // displacement per frame at zero distance
pub const REPEL_MIN_DISTANCE: f32 = 1e-3; // below this the force is skipped

// Proximity connections
pub const CONNECT_DISTANCE: f32 = 100.0;
pub const CONNECT_ALPHA_SCALE: f32 = 0.1;

// Cursor follower
pub const FOLLOWER_EASE: f32 = 0.15; // fraction of remaining distance per frame

// Hover tilt
pub const MAGNET_STRENGTH_PX: f32 = 10.0;
pub const CUBE_TILT_DEG: f32 = 10.0;
pub const CUBE_LIFT_PX: f32 = 20.0; // translateZ while hovered
pub const CARD_TILT_DEG: f32 = 5.0;
pub const CARD_LIFT_PX: f32 = 15.0; // translateY lift while hovered
pub const CARD_PARALLAX_COEFF: f32 = 0.05;
pub const CARD_IMAGE_SCALE: f32 = 1.05;
pub const TILT_MIN_VIEWPORT_PX: f32 = 768.0; // effects disabled below this width

// Title rotator
pub const TITLE_START_DELAY_MS: i32 = 1000;
pub const TITLE_INTERVAL_MS: i32 = 3000;

// Contact form
pub const FORM_SEND_LATENCY_MS: i32 = 1500; // simulated round trip
pub const FORM_RESET_DELAY_MS: i32 = 3000; // success state -> resubmittable
pub const FORM_MESSAGE_TTL_MS: i32 = 5000; // transient message lifetime
pub const FORM_MESSAGE_FADE_MS: i32 = 300;

// Smooth anchor scrolling
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 80.0; // fixed header height
