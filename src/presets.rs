//! Factories and ready-made modifiers.
//!
//! The factories are the usual entry point:
//!
//! ```rust
//! use modifier::prelude::*;
//!
//! let title = modifier::design().font_size("24px").color("#111");
//! let row = modifier::layout().gap("8px");
//! ```
//!
//! Presets are plain functions returning fresh modifiers, so callers can keep
//! chaining on them:
//!
//! ```rust
//! use modifier::prelude::*;
//! use modifier::presets::{self, typography};
//!
//! let heading = typography::h1().color("#3b82f6");
//! let card = presets::card().merge(&modifier::layout().padding("24px"));
//! # let _ = (heading, card);
//! ```

use crate::modifier::{
    AdvancedDesignModifier, BaseModifier, DesignModifier, DesignVocabulary, EventModifier,
    LayoutModifier, Modifier, StyleSource,
};
use crate::style_map;

/// An empty façade.
pub fn app() -> Modifier {
    Modifier::new()
}

pub fn layout() -> LayoutModifier {
    LayoutModifier::new()
}

pub fn design() -> DesignModifier {
    DesignModifier::new()
}

pub fn advanced_design() -> AdvancedDesignModifier {
    AdvancedDesignModifier::new()
}

pub fn event() -> EventModifier {
    EventModifier::new()
}

/// Merges `user` over `default` when given, otherwise wraps `default` alone.
///
/// This is how a component applies its own look while still letting its
/// caller restyle it:
///
/// ```rust
/// use modifier::prelude::*;
/// use modifier::{with_default, StyleValue};
///
/// let default = modifier::design().color("gray").font_size("14px");
/// let user = modifier::design().color("red");
///
/// let styled = with_default(&default, Some(&user));
/// assert_eq!(styled.record().styles["color"], StyleValue::from("red"));
/// assert_eq!(styled.record().styles["fontSize"], StyleValue::from("14px"));
///
/// let plain = with_default(&default, None);
/// assert_eq!(plain.record().styles["color"], StyleValue::from("gray"));
/// ```
pub fn with_default<D>(default: &D, user: Option<&dyn StyleSource>) -> Modifier
where
    D: StyleSource + ?Sized,
{
    let base = Modifier::from_source(default);
    match user {
        Some(user) => base.merge(user),
        None => base,
    }
}

/// Heading and body text presets.
pub mod typography {
    use crate::modifier::{DesignModifier, DesignVocabulary};

    pub fn h1() -> DesignModifier {
        DesignModifier::new()
            .font_size("48px")
            .font_weight("bold")
            .line_height(1.2)
    }

    pub fn h2() -> DesignModifier {
        DesignModifier::new()
            .font_size("36px")
            .font_weight("bold")
            .line_height(1.3)
    }

    pub fn h3() -> DesignModifier {
        DesignModifier::new()
            .font_size("28px")
            .font_weight("600")
            .line_height(1.4)
    }

    pub fn body() -> DesignModifier {
        DesignModifier::new()
            .font_size("16px")
            .font_weight("normal")
            .line_height(1.6)
    }

    pub fn small() -> DesignModifier {
        DesignModifier::new()
            .font_size("14px")
            .font_weight("normal")
            .line_height(1.5)
    }
}

/// Text color presets.
pub mod colors {
    use crate::modifier::{DesignModifier, DesignVocabulary};

    pub fn primary() -> DesignModifier {
        DesignModifier::new().color("#3b82f6")
    }

    pub fn secondary() -> DesignModifier {
        DesignModifier::new().color("#10b981")
    }

    pub fn danger() -> DesignModifier {
        DesignModifier::new().color("#ef4444")
    }

    pub fn muted() -> DesignModifier {
        DesignModifier::new().color("#6b7280")
    }
}

/// White surface with a light border and shadow.
pub fn card() -> Modifier {
    app().merge_all(&[
        &layout().padding("16px"),
        &design()
            .background("#ffffff")
            .border_radius("8px")
            .border(1, "solid", "#e0e0e0")
            .shadow("0 2px 4px rgba(0,0,0,0.1)"),
    ])
}

pub fn primary_button() -> Modifier {
    app().merge_all(&[
        &layout().padding("12px 24px"),
        &design()
            .background("#3b82f6")
            .color("#ffffff")
            .border_radius("6px")
            .font_weight("bold")
            .transition_all()
            .cursor("pointer")
            .class_name(["hover:bg-blue-600"]),
    ])
}

/// Frosted glass surface.
pub fn glassmorphism() -> Modifier {
    app().merge(
        &design()
            .advanced()
            .glassmorphism(20.0, 0.1)
            .border_radius("12px")
            .shadow("0 8px 32px rgba(31, 38, 135, 0.37)"),
    )
}

/// [`glassmorphism`] with roomier padding and corners.
pub fn glass_card() -> Modifier {
    app().merge_all(&[
        &layout().padding("32px"),
        &design()
            .advanced()
            .glassmorphism(20.0, 0.1)
            .border_radius("16px")
            .shadow("0 8px 32px rgba(31, 38, 135, 0.37)"),
    ])
}

/// Large bold text filled with a blue-to-green gradient.
pub fn gradient_text() -> AdvancedDesignModifier {
    advanced_design()
        .gradient_text("linear-gradient(45deg, #3b82f6, #10b981)")
        .font_size("48px")
        .font_weight("bold")
}

/// Half-second fade from transparent.
pub fn fade_in() -> AdvancedDesignModifier {
    design()
        .advanced()
        .keyframes(
            "fadeIn",
            [
                ("0%", style_map! { "opacity" => 0 }),
                ("100%", style_map! { "opacity" => 1 }),
            ],
        )
        .animate("fadeIn", "0.5s")
}

/// Half-second slide in from the left.
pub fn slide_in() -> AdvancedDesignModifier {
    design()
        .advanced()
        .keyframes(
            "slideIn",
            [
                (
                    "0%",
                    style_map! { "transform" => "translateX(-100%)", "opacity" => 0 },
                ),
                (
                    "100%",
                    style_map! { "transform" => "translateX(0)", "opacity" => 1 },
                ),
            ],
        )
        .animate("slideIn", "0.5s")
}
