//! Static exports of a mounted scene.

use serde::Serialize;

use crate::config::BoltConfig;
use crate::core::{Particle, Scene};
use crate::document::Document;
use crate::error::ConfigError;
use crate::materialize::stylesheet;
use crate::mount::{mount_hero, HeroMount};

#[derive(Debug, Serialize)]
struct SceneExport<'a> {
    scene: &'a Scene,
    particles: &'a [Particle],
}

/// Stand-alone HTML page with the hero mounted and the default stylesheet.
pub fn render_html_document(config: &BoltConfig, title: &str) -> Result<String, ConfigError> {
    let mut doc = Document::with_hero();
    mount_hero(&mut doc, config)?;

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>");
    out.push_str(&title.replace('&', "&amp;").replace('<', "&lt;"));
    out.push_str("</title>\n<style>\n");
    out.push_str(&stylesheet(&config.scene));
    out.push_str("</style>\n</head>\n");
    out.push_str(&doc.to_html());
    out.push_str("\n</html>\n");
    Ok(out)
}

/// Scene data (blocks with final positions, particles) as pretty JSON.
pub fn render_json(mount: &HeroMount) -> Result<String, ConfigError> {
    let export = SceneExport {
        scene: &mount.scene,
        particles: &mount.particles,
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CLASS_ACTIVE, SCENE_ROOT_ID};

    #[test]
    fn html_document_contains_mounted_scene() {
        let html = render_html_document(&BoltConfig::default(), "Thunder <DB>").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Thunder &lt;DB></title>"));
        assert!(html.contains(&format!("id=\"{SCENE_ROOT_ID}\"")));
        assert!(html.contains(CLASS_ACTIVE));
        assert_eq!(html.matches("bolt-face--top\"").count(), 43);
    }

    #[test]
    fn json_export_lists_every_block() {
        let mut doc = Document::with_hero();
        let mount = mount_hero(&mut doc, &BoltConfig::default()).unwrap().unwrap();
        let json = render_json(&mount).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["scene"]["blocks"].as_array().unwrap().len(), 43);
        assert_eq!(value["particles"].as_array().unwrap().len(), 14);
        assert!(value["scene"]["width"].as_f64().unwrap() >= 320.0);
    }
}
