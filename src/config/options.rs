use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    artwork::Variant,
    foundation::{
        color::Color,
        error::{LogoError, LogoResult},
    },
    layout::{Alignment, Margins, SizingPolicy},
};

/// How far the background square extends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundSize {
    /// Exactly the mark's square.
    #[default]
    Contain,
    /// Three times the artwork box, centered on it, so it bleeds past every edge.
    Cover,
}

/// The complete, resolved rendering configuration.
///
/// Values are immutable per render; [`RenderConfig::merged`] produces the next configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Draw the background square.
    pub background_enabled: bool,
    /// Draw the manta-ray mark.
    pub manta_enabled: bool,
    /// Draw the wordmark.
    pub text_enabled: bool,
    /// Put the wordmark beside the mark instead of below it.
    pub horizontal: bool,
    /// Box width in logical pixels; `None` uses the container width.
    pub width: Option<f64>,
    /// Box height in logical pixels; `None` uses the container height.
    pub height: Option<f64>,
    /// Space above the box.
    pub margin_top: f64,
    /// Space below the box.
    pub margin_bottom: f64,
    /// Space left of the box.
    pub margin_left: f64,
    /// Space right of the box.
    pub margin_right: f64,
    /// Background fill.
    pub background_color: Color,
    /// Mark fill.
    pub manta_color: Color,
    /// Wordmark fill.
    pub text_color: Color,
    /// Mark outline.
    pub border_color: Color,
    /// Eyes and gill fill.
    pub eyes_color: Color,
    /// Contain or cover.
    pub sizing_policy: SizingPolicy,
    /// Center or top-left.
    pub alignment: Alignment,
    /// Extent of the background square.
    pub background_size: BackgroundSize,
    /// Device pixels per logical pixel.
    pub pixel_ratio: f64,
    /// Always size the box from the container, ignoring `width`/`height`.
    pub fit_to_client_size: bool,
    /// Overlay scrolling noise on the background while animating.
    pub background_noise: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let blue = Color::rgb8(0, 131, 186);
        Self {
            background_enabled: true,
            manta_enabled: true,
            text_enabled: true,
            horizontal: false,
            width: None,
            height: None,
            margin_top: 0.0,
            margin_bottom: 0.0,
            margin_left: 0.0,
            margin_right: 0.0,
            background_color: Color::rgb8(255, 255, 255),
            manta_color: blue,
            text_color: Color::rgb8(102, 102, 102),
            border_color: blue,
            eyes_color: Color::rgb8(255, 255, 255),
            sizing_policy: SizingPolicy::Contain,
            alignment: Alignment::Center,
            background_size: BackgroundSize::Contain,
            pixel_ratio: 1.0,
            fit_to_client_size: false,
            background_noise: false,
        }
    }
}

impl RenderConfig {
    /// A copy of `self` with every field set in `options` replaced.
    pub fn merged(&self, options: &RenderOptions) -> Self {
        let mut next = self.clone();
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(if let Some(v) = options.$field {
                    next.$field = v;
                })*
            };
        }
        take!(
            background_enabled,
            manta_enabled,
            text_enabled,
            horizontal,
            margin_top,
            margin_bottom,
            margin_left,
            margin_right,
            background_color,
            manta_color,
            text_color,
            border_color,
            eyes_color,
            sizing_policy,
            alignment,
            background_size,
            pixel_ratio,
            fit_to_client_size,
            background_noise,
        );
        if options.width.is_some() {
            next.width = options.width;
        }
        if options.height.is_some() {
            next.height = options.height;
        }
        next
    }

    /// The four margins.
    pub fn margins(&self) -> Margins {
        Margins {
            top: self.margin_top,
            right: self.margin_right,
            bottom: self.margin_bottom,
            left: self.margin_left,
        }
    }

    /// Whether the mark's square is occupied, by the mark or by the background.
    pub fn mark_slot(&self) -> bool {
        self.background_enabled || self.manta_enabled
    }

    /// Composition variant selected by the enabled layers.
    pub fn variant(&self) -> Variant {
        Variant::select(self.mark_slot(), self.text_enabled, self.horizontal)
    }
}

/// A partial configuration; unset fields keep their previous value on merge.
///
/// Deserializes from camelCase JSON and rejects unknown keys:
///
/// ```
/// let opts = magnet_logo::RenderOptions::from_json_str(r#"{"mantaEnabled": false, "width": 600}"#)
///     .unwrap();
/// assert_eq!(opts.manta_enabled, Some(false));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[allow(missing_docs)]
pub struct RenderOptions {
    pub background_enabled: Option<bool>,
    pub manta_enabled: Option<bool>,
    pub text_enabled: Option<bool>,
    pub horizontal: Option<bool>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin_top: Option<f64>,
    pub margin_bottom: Option<f64>,
    pub margin_left: Option<f64>,
    pub margin_right: Option<f64>,
    pub background_color: Option<Color>,
    pub manta_color: Option<Color>,
    pub text_color: Option<Color>,
    pub border_color: Option<Color>,
    pub eyes_color: Option<Color>,
    pub sizing_policy: Option<SizingPolicy>,
    pub alignment: Option<Alignment>,
    pub background_size: Option<BackgroundSize>,
    pub pixel_ratio: Option<f64>,
    pub fit_to_client_size: Option<bool>,
    pub background_noise: Option<bool>,
}

impl RenderOptions {
    /// Parse options from a JSON string.
    pub fn from_json_str(s: &str) -> LogoResult<Self> {
        serde_json::from_str(s).map_err(|e| LogoError::serde(format!("parse options JSON: {e}")))
    }

    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> LogoResult<Self> {
        serde_json::from_reader(r).map_err(|e| LogoError::serde(format!("parse options JSON: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LogoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LogoError::config(format!("open options JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(mut self, other: &RenderOptions) -> Self {
        macro_rules! over {
            ($($field:ident),* $(,)?) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        over!(
            background_enabled,
            manta_enabled,
            text_enabled,
            horizontal,
            width,
            height,
            margin_top,
            margin_bottom,
            margin_left,
            margin_right,
            background_color,
            manta_color,
            text_color,
            border_color,
            eyes_color,
            sizing_policy,
            alignment,
            background_size,
            pixel_ratio,
            fit_to_client_size,
            background_noise,
        );
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/options.rs"]
mod tests;
