//! Design vocabulary: colors, typography and surface effects.

use super::advanced::AdvancedDesignModifier;
use super::base::{modifier_variant, BaseModifier, ModifierState};
use super::StyleSource;
use crate::style::StyleValue;

/// Visual properties shared by [`DesignModifier`] and [`AdvancedDesignModifier`].
pub trait DesignVocabulary: BaseModifier {
    /// Sets `backgroundColor`.
    fn background(&self, color: impl Into<StyleValue>) -> Self {
        self.style("backgroundColor", color)
    }

    fn color(&self, color: impl Into<StyleValue>) -> Self {
        self.style("color", color)
    }

    fn font_size(&self, size: impl Into<StyleValue>) -> Self {
        self.style("fontSize", size)
    }

    /// Accepts keywords (`"bold"`) or numeric weights (`600`).
    fn font_weight(&self, weight: impl Into<StyleValue>) -> Self {
        self.style("fontWeight", weight)
    }

    fn border_radius(&self, radius: impl Into<StyleValue>) -> Self {
        self.style("borderRadius", radius)
    }

    /// Sets `boxShadow`.
    fn shadow(&self, value: impl Into<StyleValue>) -> Self {
        self.style("boxShadow", value)
    }

    /// Sets `border` to `<width>px <style> <color>`.
    fn border(
        &self,
        width: impl Into<StyleValue>,
        style: impl Into<StyleValue>,
        color: impl Into<StyleValue>,
    ) -> Self {
        let (width, style, color): (StyleValue, StyleValue, StyleValue) =
            (width.into(), style.into(), color.into());
        let border = format!("{}px {} {}", width, style, color);
        self.style("border", border)
    }

    fn transition(&self, property: impl Into<StyleValue>, duration: impl Into<StyleValue>) -> Self {
        let (property, duration): (StyleValue, StyleValue) = (property.into(), duration.into());
        let transition = format!("{} {}", property, duration);
        self.style("transition", transition)
    }

    /// `transition: all 300ms`.
    fn transition_all(&self) -> Self {
        self.transition("all", "300ms")
    }

    fn opacity(&self, value: f64) -> Self {
        self.style("opacity", value)
    }

    fn transform(&self, value: impl Into<StyleValue>) -> Self {
        self.style("transform", value)
    }

    fn cursor(&self, cursor: impl Into<StyleValue>) -> Self {
        self.style("cursor", cursor)
    }

    fn line_height(&self, value: impl Into<StyleValue>) -> Self {
        self.style("lineHeight", value)
    }
}

modifier_variant!(
    /// Modifier with the basic design vocabulary.
    ///
    /// Call [`advanced`](DesignModifier::advanced) to reach vendor-specific
    /// and compound effects.
    DesignModifier
);

impl DesignVocabulary for DesignModifier {}

impl DesignModifier {
    /// Re-types this snapshot as an [`AdvancedDesignModifier`].
    ///
    /// The snapshot is shared, not copied.
    pub fn advanced(&self) -> AdvancedDesignModifier {
        AdvancedDesignModifier::from_state(ModifierState::shared(self.shared_record()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn style_of(m: &DesignModifier, key: &str) -> Option<StyleValue> {
        m.record().styles.get(key).cloned()
    }

    #[test]
    fn test_colors_and_type() {
        let m = DesignModifier::new()
            .background("#fff")
            .color("#111")
            .font_size("16px")
            .font_weight("bold")
            .line_height(1.5);

        assert_eq!(style_of(&m, "backgroundColor"), Some(StyleValue::from("#fff")));
        assert_eq!(style_of(&m, "color"), Some(StyleValue::from("#111")));
        assert_eq!(style_of(&m, "fontSize"), Some(StyleValue::from("16px")));
        assert_eq!(style_of(&m, "fontWeight"), Some(StyleValue::from("bold")));
        assert_eq!(style_of(&m, "lineHeight"), Some(StyleValue::Number(1.5)));
    }

    #[test]
    fn test_numeric_font_weight() {
        let m = DesignModifier::new().font_weight(600);
        assert_eq!(style_of(&m, "fontWeight"), Some(StyleValue::Number(600.0)));
    }

    #[test]
    fn test_border_and_shadow() {
        let m = DesignModifier::new()
            .border(1, "solid", "#e0e0e0")
            .shadow("0 2px 4px rgba(0,0,0,0.1)")
            .border_radius("8px");

        assert_eq!(
            style_of(&m, "border"),
            Some(StyleValue::from("1px solid #e0e0e0"))
        );
        assert_eq!(
            style_of(&m, "boxShadow"),
            Some(StyleValue::from("0 2px 4px rgba(0,0,0,0.1)"))
        );
        assert_eq!(style_of(&m, "borderRadius"), Some(StyleValue::from("8px")));
    }

    #[test]
    fn test_transition_default() {
        let m = DesignModifier::new().transition_all();
        assert_eq!(style_of(&m, "transition"), Some(StyleValue::from("all 300ms")));

        let m = m.transition("opacity", "1s");
        assert_eq!(style_of(&m, "transition"), Some(StyleValue::from("opacity 1s")));
    }

    #[test]
    fn test_effects() {
        let m = DesignModifier::new()
            .opacity(0.4)
            .transform("scale(1.02)")
            .cursor("pointer");

        assert_eq!(style_of(&m, "opacity"), Some(StyleValue::Number(0.4)));
        assert_eq!(style_of(&m, "transform"), Some(StyleValue::from("scale(1.02)")));
        assert_eq!(style_of(&m, "cursor"), Some(StyleValue::from("pointer")));
    }

    #[test]
    fn test_advanced_shares_snapshot() {
        let design = DesignModifier::new().color("red");
        let advanced = design.advanced();

        assert!(Arc::ptr_eq(&design.shared_record(), &advanced.shared_record()));
        let upgraded = advanced.gradient_text("linear-gradient(red, blue)");
        assert!(design.record().styles.get("backgroundClip").is_none());
        assert!(upgraded.record().styles.contains_key("color"));
    }
}
