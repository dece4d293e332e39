use log::Level;
use serde::Deserialize;

use crate::error::Result;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

const SITE_CONTENT: &str = include_str!("../content/site.json");

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct TunnelConfig {
    pub segments: usize,
    pub segment_depth: f64,
    pub depth_per_unit: f64,
    pub speed_factor: f64,
    pub rollback_margin: f64,
    pub damping: f64,
}

impl Default for TunnelConfig {
    fn default() -> Self {
        Self {
            segments: 14,
            segment_depth: 6.0,
            depth_per_unit: 0.05,
            speed_factor: 1.5,
            rollback_margin: 10.0,
            damping: 0.1,
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Scroll distance in viewport heights.
    pub scroll_multiplier: f64,
    pub overshoot: f64,
    pub damping: f64,
    pub snap_within: f64,
    pub path_length: f64,
    pub breakpoint: f64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            scroll_multiplier: 2.0,
            overshoot: 1.5,
            damping: 0.12,
            snap_within: 0.001,
            path_length: 1000.0,
            breakpoint: 768.0,
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct PinnedConfig {
    /// Pinned scroll length in viewport heights.
    pub pin_multiplier: f64,
    pub stagger: f64,
    /// Length of each card tween in timeline units.
    pub tween_duration: f64,
    pub damping: f64,
    pub breakpoint: f64,
}

impl Default for PinnedConfig {
    fn default() -> Self {
        Self {
            pin_multiplier: 1.5,
            stagger: 0.1,
            tween_duration: 0.5,
            damping: 0.08,
            breakpoint: 768.0,
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct FooterConfig {
    /// Degrees of flower rotation over the whole page.
    pub rotation: f64,
    pub damping: f64,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            rotation: 720.0,
            damping: 0.08,
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Default)]
#[serde(default)]
pub struct AnimationConfig {
    pub tunnel: TunnelConfig,
    pub lifecycle: LifecycleConfig,
    pub pinned: PinnedConfig,
    pub footer: FooterConfig,
    pub word_interval_ms: Option<u32>,
}

impl AnimationConfig {
    pub fn word_interval_ms(&self) -> u32 {
        self.word_interval_ms.unwrap_or(2000)
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn class(self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct HeroContent {
    pub title_lines: Vec<String>,
    pub subtitle: String,
    pub highlight: String,
    pub primary_cta: String,
    pub secondary_cta: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Logo {
    pub name: String,
    pub icon: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct MarqueeContent {
    pub heading: String,
    pub logos: Vec<Logo>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stage {
    pub name: String,
    pub title: String,
    pub description: String,
    /// Card position inside the diagram, in percent.
    pub x: f64,
    pub y: f64,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct LifecycleContent {
    pub heading: String,
    pub highlight: String,
    pub touchpoint: String,
    pub opportunity: String,
    pub body: String,
    pub stages: Vec<Stage>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Card {
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PinnedContent {
    pub center_title: String,
    pub center_body: String,
    pub left: Vec<Card>,
    pub right: Vec<Card>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Founder {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub image: String,
    #[serde(default)]
    pub socials: Vec<Link>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FoundersContent {
    pub heading: String,
    pub people: Vec<Founder>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TechLabContent {
    pub lead: String,
    pub actions: Vec<String>,
    pub targets: Vec<String>,
    /// Indexed `[action][target]`.
    pub descriptions: Vec<Vec<String>>,
}

impl TechLabContent {
    pub fn description(&self, action: usize, target: usize) -> &str {
        self.descriptions
            .get(action)
            .and_then(|row| row.get(target))
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub accent: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServicesContent {
    pub heading: String,
    pub subtitle: String,
    pub items: Vec<Service>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FooterColumn {
    pub heading: String,
    pub links: Vec<Link>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FooterContent {
    pub tagline: String,
    pub columns: Vec<FooterColumn>,
    pub legal: Vec<Link>,
    pub copyright: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    #[serde(default)]
    pub theme: Theme,
    pub navigation: Vec<Link>,
    pub nav_cta: String,
    pub hero: HeroContent,
    pub marquee: MarqueeContent,
    pub lifecycle: LifecycleContent,
    pub pinned: PinnedContent,
    pub founders: FoundersContent,
    pub tech_lab: TechLabContent,
    pub services: ServicesContent,
    pub footer: FooterContent,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Content bundled with the build.
    pub fn bundled() -> Result<Self> {
        Self::parse(SITE_CONTENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let content = SiteContent::bundled().unwrap();
        assert_eq!(content.lifecycle.stages.len(), 4);
        assert_eq!(content.pinned.left.len(), 3);
        assert_eq!(content.pinned.right.len(), 3);
        assert_eq!(content.tech_lab.descriptions.len(), content.tech_lab.actions.len());
        for row in &content.tech_lab.descriptions {
            assert_eq!(row.len(), content.tech_lab.targets.len());
        }
        assert_eq!(content.animation.tunnel, TunnelConfig::default());
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(SiteContent::parse("{\"brand\": 3}").is_err());
        assert!(SiteContent::parse("not json").is_err());
    }

    #[test]
    fn partial_animation_overrides_keep_defaults() {
        let config: AnimationConfig =
            serde_json::from_str(r#"{"tunnel": {"rollback_margin": 25.0}}"#).unwrap();
        assert_eq!(config.tunnel.rollback_margin, 25.0);
        assert_eq!(config.tunnel.speed_factor, 1.5);
        assert_eq!(config.lifecycle, LifecycleConfig::default());
        assert_eq!(config.pinned.tween_duration, 0.5);
        assert_eq!(config.word_interval_ms(), 2000);
    }

    #[test]
    fn theme_variants() {
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme.class(), "theme-light");
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn missing_description_is_empty() {
        let content = SiteContent::bundled().unwrap();
        assert_eq!(content.tech_lab.description(9, 9), "");
        assert!(!content.tech_lab.description(0, 0).is_empty());
    }
}
