//! Advanced design vocabulary: vendor-prefixed and compound effects.
//!
//! Everything on [`DesignVocabulary`] is available here too. The helpers
//! that produce stylesheet text (scrollbar, selection, keyframes) go through
//! [`BaseModifier::custom_css`], so each one replaces the custom CSS written
//! by the one before it.

use super::base::{modifier_variant, BaseModifier};
use super::design::DesignVocabulary;
use crate::style::{declarations, StyleMap, StyleValue};
use crate::style_map;

/// Blur radius, in pixels, used by [`AdvancedDesignModifier::glass`].
pub const DEFAULT_GLASS_BLUR: f64 = 10.0;
/// Background opacity used by [`AdvancedDesignModifier::glass`].
pub const DEFAULT_GLASS_OPACITY: f64 = 0.1;

modifier_variant!(
    /// Modifier with the full design vocabulary plus effects that need vendor
    /// prefixes or generated stylesheet rules.
    ///
    /// ```rust
    /// use modifier::prelude::*;
    /// use modifier::style_map;
    ///
    /// let fade = modifier::advanced_design()
    ///     .keyframes("fadeIn", [
    ///         ("0%", style_map! { "opacity" => 0 }),
    ///         ("100%", style_map! { "opacity" => 1 }),
    ///     ])
    ///     .animate("fadeIn", "0.5s");
    ///
    /// assert!(fade.record().custom_css().unwrap().contains("@keyframes fadeIn"));
    /// ```
    AdvancedDesignModifier
);

impl DesignVocabulary for AdvancedDesignModifier {}

impl AdvancedDesignModifier {
    /// Themes the element's scrollbar, both the standard properties and the
    /// `::-webkit-scrollbar` pseudo-elements.
    pub fn webkit_scrollbar(&self, width: &str, track_color: &str, thumb_color: &str) -> Self {
        self.custom_css(format!(
            "& {{\n  scrollbar-width: thin;\n  scrollbar-color: {thumb} {track};\n}}\n\
             &::-webkit-scrollbar {{\n  width: {width};\n}}\n\
             &::-webkit-scrollbar-track {{\n  background: {track};\n}}\n\
             &::-webkit-scrollbar-thumb {{\n  background: {thumb};\n  border-radius: 4px;\n}}\n\
             &::-webkit-scrollbar-thumb:hover {{\n  background: {thumb}dd;\n}}\n",
            width = width,
            track = track_color,
            thumb = thumb_color,
        ))
    }

    /// Colors selected text inside the element.
    pub fn selection(&self, background_color: &str, text_color: &str) -> Self {
        let body = format!(
            "{{\n  background-color: {};\n  color: {};\n}}\n",
            background_color, text_color
        );
        self.custom_css(format!("&::selection {}&::-moz-selection {}", body, body))
    }

    /// Paints the text with `gradient` by clipping the background to the glyphs.
    pub fn gradient_text(&self, gradient: impl Into<StyleValue>) -> Self {
        let gradient: StyleValue = gradient.into();
        self.with_styles(style_map! {
            "background" => gradient,
            "WebkitBackgroundClip" => "text",
            "WebkitTextFillColor" => "transparent",
            "backgroundClip" => "text",
        })
    }

    pub fn backdrop_filter(&self, filter: &str) -> Self {
        self.with_styles(style_map! {
            "backdropFilter" => filter,
            "WebkitBackdropFilter" => filter,
        })
    }

    /// Frosted glass: backdrop blur, translucent white fill and a hairline border.
    pub fn glassmorphism(&self, blur: f64, opacity: f64) -> Self {
        self.backdrop_filter(&format!("blur({}px)", blur))
            .with_styles(style_map! {
                "backgroundColor" => format!("rgba(255, 255, 255, {})", opacity),
                "border" => "1px solid rgba(255, 255, 255, 0.2)",
            })
    }

    /// [`glassmorphism`](Self::glassmorphism) with the default blur and opacity.
    pub fn glass(&self) -> Self {
        self.glassmorphism(DEFAULT_GLASS_BLUR, DEFAULT_GLASS_OPACITY)
    }

    pub fn clip_path(&self, path: &str) -> Self {
        self.with_styles(style_map! {
            "clipPath" => path,
            "WebkitClipPath" => path,
        })
    }

    /// Masks the element with an image or gradient.
    pub fn mask(&self, image: &str, size: &str, repeat: &str) -> Self {
        self.with_styles(style_map! {
            "maskImage" => image,
            "WebkitMaskImage" => image,
            "maskSize" => size,
            "WebkitMaskSize" => size,
            "maskRepeat" => repeat,
            "WebkitMaskRepeat" => repeat,
        })
    }

    /// [`mask`](Self::mask) sized to `contain` without repetition.
    pub fn mask_image(&self, image: &str) -> Self {
        self.mask(image, "contain", "no-repeat")
    }

    /// Multi-column text layout.
    pub fn columns(&self, count: u32, gap: impl Into<StyleValue>) -> Self {
        let gap: StyleValue = gap.into();
        self.with_styles(style_map! {
            "columnCount" => count,
            "columnGap" => gap,
        })
    }

    pub fn grid_area(&self, area: &str) -> Self {
        self.style("gridArea", area)
    }

    /// Binds a declared animation: `<name> <duration> <easing> <iteration>`.
    pub fn animation(
        &self,
        name: &str,
        duration: &str,
        easing: &str,
        iteration: impl Into<StyleValue>,
    ) -> Self {
        let iteration: StyleValue = iteration.into();
        self.style(
            "animation",
            format!("{} {} {} {}", name, duration, easing, iteration),
        )
    }

    /// [`animation`](Self::animation) with `ease` easing, played once.
    pub fn animate(&self, name: &str, duration: &str) -> Self {
        self.animation(name, duration, "ease", 1)
    }

    /// Registers an `@keyframes` block built from `(stop, styles)` frames.
    pub fn keyframes<I, K>(&self, name: &str, frames: I) -> Self
    where
        I: IntoIterator<Item = (K, StyleMap)>,
        K: AsRef<str>,
    {
        let rules: String = frames
            .into_iter()
            .map(|(stop, styles)| format!("  {} {{ {} }}\n", stop.as_ref(), declarations(&styles)))
            .collect();
        self.custom_css(format!("@keyframes {} {{\n{}}}\n", name, rules))
    }

    /// Sets the custom property `--<name>`.
    pub fn css_var(&self, name: &str, value: impl Into<StyleValue>) -> Self {
        self.style(format!("--{}", name), value)
    }

    /// Returns a `var(--<name>)` reference, with `fallback` when given.
    ///
    /// This is a string helper; the modifier is not changed.
    pub fn var(&self, name: &str, fallback: Option<&str>) -> String {
        match fallback.filter(|f| !f.is_empty()) {
            Some(fallback) => format!("var(--{}, {})", name, fallback),
            None => format!("var(--{})", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::StyleSource;

    fn style_of(m: &AdvancedDesignModifier, key: &str) -> Option<StyleValue> {
        m.record().styles.get(key).cloned()
    }

    #[test]
    fn test_inherits_design_vocabulary() {
        let m = AdvancedDesignModifier::new()
            .background("#000")
            .font_size("48px")
            .gradient_text("linear-gradient(45deg, #3b82f6, #10b981)");

        assert_eq!(style_of(&m, "backgroundColor"), Some(StyleValue::from("#000")));
        assert_eq!(style_of(&m, "fontSize"), Some(StyleValue::from("48px")));
    }

    #[test]
    fn test_gradient_text() {
        let m = AdvancedDesignModifier::new().gradient_text("linear-gradient(red, blue)");
        assert_eq!(
            style_of(&m, "background"),
            Some(StyleValue::from("linear-gradient(red, blue)"))
        );
        assert_eq!(style_of(&m, "WebkitBackgroundClip"), Some(StyleValue::from("text")));
        assert_eq!(
            style_of(&m, "WebkitTextFillColor"),
            Some(StyleValue::from("transparent"))
        );
        assert_eq!(style_of(&m, "backgroundClip"), Some(StyleValue::from("text")));
    }

    #[test]
    fn test_glassmorphism() {
        let m = AdvancedDesignModifier::new().glassmorphism(20.0, 0.1);
        assert_eq!(style_of(&m, "backdropFilter"), Some(StyleValue::from("blur(20px)")));
        assert_eq!(
            style_of(&m, "WebkitBackdropFilter"),
            Some(StyleValue::from("blur(20px)"))
        );
        assert_eq!(
            style_of(&m, "backgroundColor"),
            Some(StyleValue::from("rgba(255, 255, 255, 0.1)"))
        );
        assert_eq!(
            style_of(&m, "border"),
            Some(StyleValue::from("1px solid rgba(255, 255, 255, 0.2)"))
        );
    }

    #[test]
    fn test_glass_defaults() {
        let m = AdvancedDesignModifier::new().glass();
        assert_eq!(style_of(&m, "backdropFilter"), Some(StyleValue::from("blur(10px)")));
    }

    #[test]
    fn test_clip_path_and_mask() {
        let m = AdvancedDesignModifier::new()
            .clip_path("circle(50%)")
            .mask_image("url(mask.svg)");

        assert_eq!(style_of(&m, "WebkitClipPath"), Some(StyleValue::from("circle(50%)")));
        assert_eq!(style_of(&m, "maskSize"), Some(StyleValue::from("contain")));
        assert_eq!(
            style_of(&m, "WebkitMaskRepeat"),
            Some(StyleValue::from("no-repeat"))
        );
    }

    #[test]
    fn test_columns_and_grid_area() {
        let m = AdvancedDesignModifier::new().columns(3, "2em").grid_area("sidebar");
        assert_eq!(style_of(&m, "columnCount"), Some(StyleValue::Number(3.0)));
        assert_eq!(style_of(&m, "columnGap"), Some(StyleValue::from("2em")));
        assert_eq!(style_of(&m, "gridArea"), Some(StyleValue::from("sidebar")));
    }

    #[test]
    fn test_animation() {
        let m = AdvancedDesignModifier::new().animation("spin", "2s", "linear", "infinite");
        assert_eq!(
            style_of(&m, "animation"),
            Some(StyleValue::from("spin 2s linear infinite"))
        );

        let m = m.animate("fadeIn", "0.5s");
        assert_eq!(
            style_of(&m, "animation"),
            Some(StyleValue::from("fadeIn 0.5s ease 1"))
        );
    }

    #[test]
    fn test_keyframes_text() {
        let m = AdvancedDesignModifier::new().keyframes(
            "slideIn",
            [
                ("0%", style_map! { "transform" => "translateX(-100%)", "opacity" => 0 }),
                ("100%", style_map! { "transform" => "translateX(0)", "opacity" => 1 }),
            ],
        );

        assert_eq!(
            m.record().custom_css(),
            Some(
                "@keyframes slideIn {\n  0% { transform: translateX(-100%); opacity: 0 }\n  \
                 100% { transform: translateX(0); opacity: 1 }\n}\n"
            )
        );
    }

    #[test]
    fn test_custom_css_helpers_overwrite_each_other() {
        let m = AdvancedDesignModifier::new()
            .webkit_scrollbar("8px", "#eee", "#888")
            .selection("#3b82f6", "#fff");

        let css = m.record().custom_css().unwrap();
        assert!(css.contains("&::selection"));
        assert!(css.contains("&::-moz-selection"));
        assert!(!css.contains("scrollbar"));
    }

    #[test]
    fn test_scrollbar_rules() {
        let m = AdvancedDesignModifier::new().webkit_scrollbar("8px", "#eee", "#888");
        let css = m.record().custom_css().unwrap();
        assert!(css.contains("scrollbar-color: #888 #eee;"));
        assert!(css.contains("&::-webkit-scrollbar {\n  width: 8px;\n}"));
        assert!(css.contains("background: #888dd;"));
    }

    #[test]
    fn test_css_var_and_var() {
        let m = AdvancedDesignModifier::new().css_var("brand", "#3b82f6");
        assert_eq!(style_of(&m, "--brand"), Some(StyleValue::from("#3b82f6")));

        assert_eq!(m.var("brand", None), "var(--brand)");
        assert_eq!(m.var("brand", Some("red")), "var(--brand, red)");
        assert_eq!(m.var("brand", Some("")), "var(--brand)");
        assert_eq!(m.record().styles.len(), 1);
    }
}
