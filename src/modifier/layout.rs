//! Layout vocabulary: size, spacing and flow.

use super::base::{modifier_variant, BaseModifier};
use crate::style::StyleValue;
use crate::style_map;

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

impl FlexDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }
}

/// Cross-axis alignment of flex items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    Baseline,
}

impl AlignItems {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignItems::FlexStart => "flex-start",
            AlignItems::FlexEnd => "flex-end",
            AlignItems::Center => "center",
            AlignItems::Stretch => "stretch",
            AlignItems::Baseline => "baseline",
        }
    }
}

/// Main-axis distribution of flex items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JustifyContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl JustifyContent {
    pub fn as_str(&self) -> &'static str {
        match self {
            JustifyContent::FlexStart => "flex-start",
            JustifyContent::FlexEnd => "flex-end",
            JustifyContent::Center => "center",
            JustifyContent::SpaceBetween => "space-between",
            JustifyContent::SpaceAround => "space-around",
            JustifyContent::SpaceEvenly => "space-evenly",
        }
    }
}

/// Positioning scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Static => "static",
            Position::Relative => "relative",
            Position::Absolute => "absolute",
            Position::Fixed => "fixed",
            Position::Sticky => "sticky",
        }
    }
}

modifier_variant!(
    /// Modifier with the layout vocabulary.
    ///
    /// The flex helpers also switch the element to `display: flex`, and the
    /// grid helpers to `display: grid`.
    ///
    /// ```rust
    /// use modifier::prelude::*;
    /// use modifier::{JustifyContent, StyleValue};
    ///
    /// let row = modifier::layout()
    ///     .justify_content(JustifyContent::SpaceBetween)
    ///     .gap("8px");
    /// assert_eq!(row.record().styles["display"], StyleValue::from("flex"));
    /// ```
    LayoutModifier
);

impl LayoutModifier {
    pub fn width(&self, value: impl Into<StyleValue>) -> Self {
        self.style("width", value)
    }

    pub fn height(&self, value: impl Into<StyleValue>) -> Self {
        self.style("height", value)
    }

    pub fn padding(&self, value: impl Into<StyleValue>) -> Self {
        self.style("padding", value)
    }

    pub fn margin(&self, value: impl Into<StyleValue>) -> Self {
        self.style("margin", value)
    }

    pub fn flex_direction(&self, direction: FlexDirection) -> Self {
        self.with_styles(style_map! {
            "display" => "flex",
            "flexDirection" => direction.as_str(),
        })
    }

    pub fn align_items(&self, alignment: AlignItems) -> Self {
        self.with_styles(style_map! {
            "display" => "flex",
            "alignItems" => alignment.as_str(),
        })
    }

    pub fn justify_content(&self, justification: JustifyContent) -> Self {
        self.with_styles(style_map! {
            "display" => "flex",
            "justifyContent" => justification.as_str(),
        })
    }

    pub fn gap(&self, value: impl Into<StyleValue>) -> Self {
        self.style("gap", value)
    }

    pub fn position(&self, position: Position) -> Self {
        self.style("position", position.as_str())
    }

    /// Equal-width grid columns without touching `gap`.
    pub fn grid_columns(&self, columns: u32) -> Self {
        self.with_styles(style_map! {
            "display" => "grid",
            "gridTemplateColumns" => format!("repeat({}, 1fr)", columns),
        })
    }

    /// Equal-width grid columns separated by `gap`.
    pub fn grid(&self, columns: u32, gap: impl Into<StyleValue>) -> Self {
        self.grid_columns(columns).gap(gap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::StyleSource;

    fn style_of(m: &LayoutModifier, key: &str) -> Option<StyleValue> {
        m.record().styles.get(key).cloned()
    }

    #[test]
    fn test_size_and_spacing() {
        let m = LayoutModifier::new()
            .width("100%")
            .height(40)
            .padding("8px 16px")
            .margin(0)
            .gap("4px");

        assert_eq!(style_of(&m, "width"), Some(StyleValue::from("100%")));
        assert_eq!(style_of(&m, "height"), Some(StyleValue::Number(40.0)));
        assert_eq!(style_of(&m, "padding"), Some(StyleValue::from("8px 16px")));
        assert_eq!(style_of(&m, "margin"), Some(StyleValue::Number(0.0)));
        assert_eq!(style_of(&m, "gap"), Some(StyleValue::from("4px")));
    }

    #[test]
    fn test_flex_helpers_set_display() {
        let m = LayoutModifier::new()
            .flex_direction(FlexDirection::Column)
            .align_items(AlignItems::Center)
            .justify_content(JustifyContent::SpaceEvenly);

        assert_eq!(style_of(&m, "display"), Some(StyleValue::from("flex")));
        assert_eq!(style_of(&m, "flexDirection"), Some(StyleValue::from("column")));
        assert_eq!(style_of(&m, "alignItems"), Some(StyleValue::from("center")));
        assert_eq!(
            style_of(&m, "justifyContent"),
            Some(StyleValue::from("space-evenly"))
        );
    }

    #[test]
    fn test_position() {
        let m = LayoutModifier::new().position(Position::Sticky);
        assert_eq!(style_of(&m, "position"), Some(StyleValue::from("sticky")));
    }

    #[test]
    fn test_grid_with_gap() {
        let m = LayoutModifier::new().grid(3, "16px");
        assert_eq!(style_of(&m, "display"), Some(StyleValue::from("grid")));
        assert_eq!(
            style_of(&m, "gridTemplateColumns"),
            Some(StyleValue::from("repeat(3, 1fr)"))
        );
        assert_eq!(style_of(&m, "gap"), Some(StyleValue::from("16px")));
    }

    #[test]
    fn test_grid_columns_leaves_gap_alone() {
        let m = LayoutModifier::new().gap("2px").grid_columns(2);
        assert_eq!(style_of(&m, "gap"), Some(StyleValue::from("2px")));
    }

    #[test]
    fn test_layout_chain_keeps_type() {
        // Shared vocabulary returns LayoutModifier, so layout methods stay available.
        let m = LayoutModifier::new().class_name(["row"]).width(10);
        assert_eq!(m.record().classes, vec!["row"]);
    }
}
