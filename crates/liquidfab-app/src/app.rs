//! Headless demo: opens the button, taps a cell, closes it again and
//! exports every animation frame as SVG.

use kurbo::{Rect, Size};
use liquidfab_core::{ButtonConfig, ConfigError, LiquidError, LiquidFloatingActionButton, TickOutcome};
use liquidfab_render::{RenderContext, Renderer, RendererError, SvgRenderer};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Button size and margin, matching a 56pt material FAB.
const BUTTON_SIZE: f64 = 56.0;
const BUTTON_MARGIN: f64 = 16.0;

/// Upper bound on frames per run so a bad config cannot loop forever.
const MAX_FRAMES_PER_RUN: usize = 10_000;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error(transparent)]
    Widget(#[from] LiquidError),
    #[error("IO error: {0}")]
    Io(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub width: u32,
    pub height: u32,
    pub frame_rate: u32,
    /// Image names of the cells, in order.
    pub cells: Vec<String>,
    /// Cell tapped once the button is open.
    pub select: usize,
    pub output_dir: PathBuf,
    pub button: ButtonConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 568,
            frame_rate: 60,
            cells: ["ic_cloud", "ic_system", "ic_place", "ic_art", "ic_brush"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            select: 0,
            output_dir: PathBuf::from("frames"),
            button: ButtonConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|e| AppError::Io(e.to_string()))?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.button.validate()?;
        if config.frame_rate == 0 {
            return Err(ConfigError::Invalid("frame_rate must be positive".to_string()).into());
        }
        Ok(config)
    }
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub open_frames: usize,
    pub close_frames: usize,
    pub selected: Option<usize>,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    button: LiquidFloatingActionButton,
    renderer: SvgRenderer,
    frame_index: usize,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let frame = Rect::new(
            f64::from(config.width) - BUTTON_SIZE - BUTTON_MARGIN,
            f64::from(config.height) - BUTTON_SIZE - BUTTON_MARGIN,
            f64::from(config.width) - BUTTON_MARGIN,
            f64::from(config.height) - BUTTON_MARGIN,
        );
        let mut button = LiquidFloatingActionButton::with_config(frame, config.button.clone());
        for name in &config.cells {
            let label = name.clone();
            button.add_cell_image(name.clone(), move |i| info!("touched {label} (cell {i})"));
        }
        Self {
            config,
            button,
            renderer: SvgRenderer::new(),
            frame_index: 0,
        }
    }

    pub fn button(&self) -> &LiquidFloatingActionButton {
        &self.button
    }

    /// Run the demo sequence and write frames to the output directory.
    pub fn run(&mut self) -> Result<RunSummary, AppError> {
        std::fs::create_dir_all(&self.config.output_dir).map_err(|e| AppError::Io(e.to_string()))?;
        info!("writing frames to {}", self.config.output_dir.display());

        self.render_frame()?;
        self.button.toggle();
        let open_frames = self.play()?;

        let selected = if self.config.select < self.button.cells().len() {
            self.button.select_item(self.config.select)?;
            Some(self.config.select)
        } else {
            None
        };

        self.button.toggle();
        let close_frames = self.play()?;

        let summary = RunSummary {
            open_frames,
            close_frames,
            selected,
        };
        info!(
            "done: {} opening frame(s), {} closing frame(s)",
            summary.open_frames, summary.close_frames
        );
        Ok(summary)
    }

    /// Tick until the current run finishes, rendering each frame.
    fn play(&mut self) -> Result<usize, AppError> {
        let dt = 1.0 / f64::from(self.config.frame_rate);
        let mut frames = 0;
        while frames < MAX_FRAMES_PER_RUN {
            let outcome = self.button.tick(dt);
            self.render_frame()?;
            frames += 1;
            match outcome {
                TickOutcome::Running { all_ratio } => debug!("frame {frames}: {all_ratio:.3}"),
                TickOutcome::Finished(_) | TickOutcome::Idle => break,
            }
        }
        Ok(frames)
    }

    fn render_frame(&mut self) -> Result<(), AppError> {
        let viewport = Size::new(f64::from(self.config.width), f64::from(self.config.height));
        let ctx = RenderContext::new(&self.button, viewport);
        self.renderer.build_scene(&ctx);
        let path = self
            .config
            .output_dir
            .join(format!("frame_{:04}.svg", self.frame_index));
        self.renderer.write_to(&path)?;
        self.frame_index += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_layout() {
        let app = App::new(AppConfig::default());
        let frame = app.button().frame();
        assert!((frame.x1 - 304.0).abs() < f64::EPSILON);
        assert!((frame.width() - BUTTON_SIZE).abs() < f64::EPSILON);
        assert_eq!(app.button().item_count(), 5);
    }

    #[test]
    fn test_run_writes_frames() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            cells: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            select: 1,
            output_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };
        let mut app = App::new(config);
        let summary = app.run().unwrap();

        // 0.6 + 3 * 0.1 seconds at 60 fps, then 0.2 seconds.
        assert!(summary.open_frames >= 54);
        assert!(summary.close_frames >= 12);
        assert_eq!(summary.selected, Some(1));
        assert!(app.button().is_closed());
        assert!(app.button().cells().is_empty());

        let written = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(written, 1 + summary.open_frames + summary.close_frames);
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.json");
        std::fs::write(&path, r#"{"width": 400, "button": {"direction": "Left"}}"#).unwrap();
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 568);
        assert_eq!(config.button.direction, liquidfab_core::Direction::Left);

        std::fs::write(&path, r#"{"frame_rate": 0}"#).unwrap();
        assert!(matches!(AppConfig::load(&path), Err(AppError::Config(_))));
    }
}
