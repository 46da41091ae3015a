//! Web app manifest fragment describing the generated assets
//!
//! The `icons` and `screenshots` arrays mirror the members of the same name in
//! a W3C web app manifest, so the fragment can be pasted (or merged by a
//! build step) into `manifest.webmanifest` or a PWA plugin config.

use crate::{
    icons::IconSpec,
    output::write_atomic,
    screenshots::{FormFactor, ScreenshotSpec},
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE_NAME: &str = "pwa-assets.json";

const PNG_MIME: &str = "image/png";

/// Root of `pwa-assets.json`
#[derive(Serialize, Debug, Clone, Default)]
pub struct ManifestFragment {
    pub icons: Vec<IconEntry>,

    pub screenshots: Vec<ScreenshotEntry>,
}

/// One member of the manifest `icons` array
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// Path of the image, relative to the manifest
    pub src: String,

    /// Space-separated `WxH` list
    pub sizes: String,

    #[serde(rename = "type")]
    pub mime_type: String,

    /// `any`, `maskable` or `monochrome`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// One member of the manifest `screenshots` array
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotEntry {
    pub src: String,

    pub sizes: String,

    #[serde(rename = "type")]
    pub mime_type: String,

    pub form_factor: FormFactor,

    /// Accessible description shown by install UIs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl IconEntry {
    pub fn from_spec(spec: &IconSpec) -> Self {
        let purpose = if spec.maskable { "maskable" } else { "any" };
        Self {
            src: spec.file_name.to_string(),
            sizes: format!("{0}x{0}", spec.size),
            mime_type: PNG_MIME.to_string(),
            purpose: Some(purpose.to_string()),
        }
    }
}

impl ScreenshotEntry {
    pub fn from_spec(spec: &ScreenshotSpec) -> Self {
        Self {
            src: spec.file_name.to_string(),
            sizes: format!("{}x{}", spec.width, spec.height),
            mime_type: PNG_MIME.to_string(),
            form_factor: spec.form_factor,
            label: Some(spec.label.to_string()),
        }
    }
}

impl ManifestFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_icon(&mut self, spec: &IconSpec) {
        self.icons.push(IconEntry::from_spec(spec));
    }

    pub fn add_screenshot(&mut self, spec: &ScreenshotSpec) {
        self.screenshots.push(ScreenshotEntry::from_spec(spec));
    }

    /// Write `pwa-assets.json` into `dir`.
    pub fn write(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE_NAME);
        write_atomic(&path, |w| {
            serde_json::to_writer_pretty(&mut *w, self)
                .context("Failed to serialize the manifest fragment")?;
            writeln!(w)?;
            Ok(())
        })
        .with_context(|| format!("Failed to write {}", path.display()))?;

        println!("✅ Generated: {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{icons::ICONS, screenshots::SCREENSHOTS};

    #[test]
    fn icon_purposes() {
        let purposes: Vec<_> = ICONS
            .iter()
            .map(|spec| IconEntry::from_spec(spec).purpose.unwrap())
            .collect();
        assert_eq!(purposes, ["any", "any", "any", "maskable"]);
    }

    #[test]
    fn serializes_manifest_field_names() {
        let mut fragment = ManifestFragment::new();
        fragment.add_icon(&ICONS[3]);
        fragment.add_screenshot(&SCREENSHOTS[1]);

        let json = serde_json::to_value(&fragment).unwrap();
        assert_eq!(json["icons"][0]["src"], "pwa-maskable-512x512.png");
        assert_eq!(json["icons"][0]["sizes"], "512x512");
        assert_eq!(json["icons"][0]["type"], "image/png");
        assert_eq!(json["screenshots"][0]["sizes"], "750x1334");
        assert_eq!(json["screenshots"][0]["form_factor"], "narrow");
        assert!(json["screenshots"][0]["label"].is_string());
    }

    #[test]
    fn empty_fragment_has_both_arrays() {
        let json = serde_json::to_value(ManifestFragment::new()).unwrap();
        assert!(json["icons"].as_array().unwrap().is_empty());
        assert!(json["screenshots"].as_array().unwrap().is_empty());
    }
}
