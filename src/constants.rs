// DOM ids/selectors the wiring layer binds to, plus inline style values for
// elements the page stylesheet cannot reach (they mirror the page theme).

// Element hooks
pub const PARTICLE_CANVAS_ID: &str = "particle-canvas";
pub const CURSOR_FOLLOWER_SELECTOR: &str = ".cursor-follower";
pub const INTERACTIVE_SELECTOR: &str =
    "button, a, .skill-cube, .project-card, .social-icon, .nav-link";
pub const MAGNETIC_SELECTOR: &str = ".magnetic";
pub const SKILL_CUBE_SELECTOR: &str = ".skill-cube";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const PROJECT_IMAGE_SELECTOR: &str = ".project-image-placeholder";
pub const PROJECT_BUTTON_SELECTOR: &str = ".project-btn";
pub const TITLE_ITEM_SELECTOR: &str = ".title-item";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".submit-btn";
pub const NAME_INPUT_ID: &str = "name";
pub const EMAIL_INPUT_ID: &str = "email";
pub const MESSAGE_INPUT_ID: &str = "message";
pub const FORM_MESSAGE_SELECTOR: &str = ".form-message";
pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const MENU_SPAN_SELECTOR: &str = ".menu-toggle span";
pub const BG_VIDEO_ID: &str = "bg-video";
pub const VIDEO_BACKGROUND_SELECTOR: &str = ".video-background";
pub const SECTION_SELECTOR: &str = "section";
pub const SOUND_HOOK_SELECTOR: &str = "[data-sound]";
pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

// Cursor follower appearance over interactive elements
pub const CURSOR_ACTIVE_TRANSFORM: &str = "translate(-50%, -50%) scale(1.5)";
pub const CURSOR_IDLE_TRANSFORM: &str = "translate(-50%, -50%) scale(1)";
pub const CURSOR_ACTIVE_BACKGROUND: &str = "rgba(99, 102, 241, 0.3)";
pub const CURSOR_IDLE_BACKGROUND: &str = "rgba(99, 102, 241, 0.2)";
pub const CURSOR_ACTIVE_BORDER: &str = "rgba(99, 102, 241, 0.8)";
pub const CURSOR_IDLE_BORDER: &str = "rgba(99, 102, 241, 0.5)";

// Form field border states
pub const FIELD_BORDER_FILLED: &str = "rgba(99, 102, 241, 0.5)";
pub const FIELD_BORDER_NEUTRAL: &str = "rgba(255, 255, 255, 0.1)";
pub const FIELD_BORDER_INVALID: &str = "#ef4444";

// Form feedback copy
pub const MSG_VALIDATION_FAILED: &str = "Please fill in all fields correctly";
pub const MSG_SEND_SUCCESS: &str = "Message sent successfully! I'll get back to you soon.";
pub const MSG_SEND_FAILED: &str = "Something went wrong. Please try again.";

pub const FORM_MESSAGE_BASE_STYLE: &str = "padding: 1rem; margin-top: 1rem; \
    border-radius: 0.5rem; font-weight: 500; text-align: center;";
pub const FORM_MESSAGE_SUCCESS_STYLE: &str = "background-color: rgba(16, 185, 129, 0.1); \
    color: #10b981; border: 1px solid rgba(16, 185, 129, 0.2);";
pub const FORM_MESSAGE_ERROR_STYLE: &str = "background-color: rgba(239, 68, 68, 0.1); \
    color: #ef4444; border: 1px solid rgba(239, 68, 68, 0.2);";

// Hamburger icon span transforms while the menu is open
pub const SPAN_TOP_OPEN: &str = "rotate(45deg) translate(5px, 5px)";
pub const SPAN_BOTTOM_OPEN: &str = "rotate(-45deg) translate(7px, -6px)";

// Background video fallback
pub const VIDEO_FALLBACK_IMAGE: &str = "url(\"assets/images/fallback-bg.jpg\")";
pub const PLAY_BUTTON_STYLE: &str = "position:fixed; bottom:20px; right:20px; z-index:9999; \
    padding:10px 20px; background:#6366f1; color:white; border:none; border-radius:5px; \
    cursor:pointer;";
pub const PLAY_BUTTON_LABEL: &str = "\u{25B6} Play Background";

// Safety net runs shortly after init, once reveal setup had a chance to run
pub const VISIBILITY_FIX_DELAY_MS: i32 = 100;
