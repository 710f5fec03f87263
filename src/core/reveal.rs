// Declarative scroll-reveal plan for the page.
//
// Plain data only; `scroll.rs` hands each entry to the external animation
// library when one is present on the page, and skips the whole plan when
// it is not.

/// Whether a tween animates *from* the given state into place, or *to* it
/// away from the current style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenKind {
    From,
    To,
}

/// Scroll window driving a tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerSpec {
    pub start: &'static str,
    pub end: Option<&'static str>,
    /// Library action string, e.g. play on enter / reverse on leave-back.
    pub toggle_actions: Option<&'static str>,
    /// Tie tween progress to scroll position, smoothed over this many
    /// seconds, instead of playing on a timeline.
    pub scrub: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealSpec {
    pub targets: &'static str,
    /// Selector for the element group driving the trigger. Ignored when
    /// `per_element` is set: each matched target then triggers itself.
    pub trigger: &'static str,
    pub per_element: bool,
    pub kind: TweenKind,
    pub x: f32,
    pub y: f32,
    pub opacity: Option<f32>,
    pub duration: f32,
    pub stagger: Option<f32>,
    pub ease: &'static str,
    pub window: TriggerSpec,
}

/// Targets that must be forced visible before any tween is registered, so a
/// half-initialized library never leaves them hidden.
pub const INITIAL_VISIBLE_TARGETS: &str = ".skill-cube, .project-card";

const REVEAL_TOGGLE: &str = "play none none reverse";

/// The page's reveal plan: per-section fade/slide-ins, staggered skill
/// cubes and project cards, a hero parallax scrub, and the about-section
/// slide-ins.
pub fn page_reveals() -> Vec<RevealSpec> {
    vec![
        RevealSpec {
            targets: "section:not(.hero)",
            trigger: "section:not(.hero)",
            per_element: true,
            kind: TweenKind::From,
            x: 0.0,
            y: 50.0,
            opacity: Some(0.0),
            duration: 1.0,
            stagger: None,
            ease: "power2.out",
            window: TriggerSpec {
                start: "top 85%",
                end: Some("bottom 20%"),
                toggle_actions: Some(REVEAL_TOGGLE),
                scrub: None,
            },
        },
        RevealSpec {
            targets: ".skill-cube",
            trigger: ".skills",
            per_element: false,
            kind: TweenKind::From,
            x: 0.0,
            y: 60.0,
            opacity: Some(0.0),
            duration: 0.8,
            stagger: Some(0.1),
            ease: "back.out(1.7)",
            window: TriggerSpec {
                start: "top 80%",
                end: Some("bottom 20%"),
                toggle_actions: Some(REVEAL_TOGGLE),
                scrub: None,
            },
        },
        RevealSpec {
            targets: ".project-card",
            trigger: ".projects",
            per_element: false,
            kind: TweenKind::From,
            x: 0.0,
            y: 80.0,
            opacity: Some(0.0),
            duration: 1.0,
            stagger: Some(0.15),
            ease: "power3.out",
            window: TriggerSpec {
                start: "top 80%",
                end: Some("bottom 20%"),
                toggle_actions: Some(REVEAL_TOGGLE),
                scrub: None,
            },
        },
        RevealSpec {
            targets: ".hero-glass",
            trigger: ".hero",
            per_element: false,
            kind: TweenKind::To,
            x: 0.0,
            y: 100.0,
            opacity: None,
            duration: 1.0,
            stagger: None,
            ease: "none",
            window: TriggerSpec {
                start: "top top",
                end: Some("bottom top"),
                toggle_actions: None,
                scrub: Some(1.0),
            },
        },
        RevealSpec {
            targets: ".image-frame",
            trigger: ".about",
            per_element: false,
            kind: TweenKind::From,
            x: -50.0,
            y: 0.0,
            opacity: Some(0.0),
            duration: 1.0,
            stagger: None,
            ease: "power2.out",
            window: TriggerSpec {
                start: "top 75%",
                end: None,
                toggle_actions: Some(REVEAL_TOGGLE),
                scrub: None,
            },
        },
        RevealSpec {
            targets: ".about-text",
            trigger: ".about",
            per_element: false,
            kind: TweenKind::From,
            x: 50.0,
            y: 0.0,
            opacity: Some(0.0),
            duration: 1.0,
            stagger: None,
            ease: "power2.out",
            window: TriggerSpec {
                start: "top 75%",
                end: None,
                toggle_actions: Some(REVEAL_TOGGLE),
                scrub: None,
            },
        },
    ]
}
