//! Liquid base: the animation driver behind the button.

use super::{Direction, Phase, Timeline};
use crate::config::AnimationConfig;
use crate::engine::LiquidEngine;
use crate::shapes::{Circle, DrawTarget};
use crate::widget::Cell;
use kurbo::{Point, Rect};
use log::{debug, trace};
use peniko::Color;

/// Result of advancing the driver by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No timeline is active.
    Idle,
    /// The run continues; `all_ratio` is its eased progress.
    Running { all_ratio: f64 },
    /// The run completed on this tick.
    Finished(Phase),
}

/// Owns the base circle, the two connector engines and the displayed cells,
/// and moves the cells along the configured direction every tick.
#[derive(Debug, Clone)]
pub struct LiquidBase {
    center: Point,
    base: Circle,
    /// Joins neighbouring cells.
    engine: LiquidEngine,
    /// Joins the base circle to the first cell.
    big_engine: LiquidEngine,
    cells: Vec<Cell>,
    timeline: Option<Timeline>,
    pub direction: Direction,
    pub enable_shadow: bool,
    config: AnimationConfig,
}

impl LiquidBase {
    /// Build the driver for a button occupying `frame` (local coordinates
    /// start at the frame origin).
    pub fn new(frame: Rect, color: Color, direction: Direction, config: AnimationConfig) -> Self {
        let center = Point::new(frame.width() * 0.5, frame.height() * 0.5);
        let radius = frame.width().min(frame.height()) * 0.5;
        let engine = LiquidEngine::new(radius * config.small_radius_factor, config.small_angle_thresh)
            .with_viscosity(config.viscosity)
            .with_color(color);
        let big_engine = LiquidEngine::new(radius, config.big_angle_thresh)
            .with_viscosity(config.viscosity)
            .with_color(color);
        Self {
            center,
            base: Circle::new(center, radius, color),
            engine,
            big_engine,
            cells: Vec::new(),
            timeline: None,
            direction,
            enable_shadow: true,
            config,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn base(&self) -> &Circle {
        &self.base
    }

    pub fn engine(&self) -> &LiquidEngine {
        &self.engine
    }

    pub fn big_engine(&self) -> &LiquidEngine {
        &self.big_engine
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn timeline(&self) -> Option<&Timeline> {
        self.timeline.as_ref()
    }

    /// A run is in flight.
    pub fn is_animating(&self) -> bool {
        self.timeline.is_some()
    }

    pub fn set_color(&mut self, color: Color) {
        self.base.set_color(color);
        self.engine.set_color(color);
        self.big_engine.set_color(color);
    }

    /// Recolor the base circle only; connectors keep their color.
    pub fn set_base_color(&mut self, color: Color) {
        self.base.set_color(color);
    }

    /// Start opening with a fresh set of cells, replacing any run in flight.
    pub fn open(&mut self, cells: Vec<Cell>) {
        if let Some(timeline) = self.stop() {
            debug!("open pre-empts {:?} at {:.3}s", timeline.phase(), timeline.elapsed());
        }
        self.cells = cells;
        for cell in &mut self.cells {
            cell.erase_shadow();
            cell.set_interactive(false);
            cell.set_center(self.center);
        }
        self.timeline = Some(Timeline::opening(&self.config, self.cells.len()));
        debug!("opening {} cell(s)", self.cells.len());
    }

    /// Start closing the displayed cells, replacing any run in flight.
    ///
    /// Positions restart from the closing formula; the interrupted run's
    /// in-flight positions are not blended.
    pub fn close(&mut self) {
        if let Some(timeline) = self.stop() {
            debug!("close pre-empts {:?} at {:.3}s", timeline.phase(), timeline.elapsed());
        }
        for cell in &mut self.cells {
            cell.erase_shadow();
            cell.set_interactive(false);
        }
        self.timeline = Some(Timeline::closing(&self.config, self.cells.len()));
        debug!("closing {} cell(s)", self.cells.len());
    }

    /// Advance the active run by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> TickOutcome {
        let Some(timeline) = self.timeline.as_mut() else {
            return TickOutcome::Idle;
        };
        timeline.advance(dt);
        let phase = timeline.phase();
        let all_ratio = timeline.all_ratio();

        if timeline.is_complete() {
            self.finish(phase);
            return TickOutcome::Finished(phase);
        }

        self.layout();
        self.update_liquid();
        trace!(
            "tick {:?} ratio {:.3}: {} + {} connector shape(s)",
            phase,
            all_ratio,
            self.big_engine.layer().len(),
            self.engine.layer().len()
        );
        TickOutcome::Running { all_ratio }
    }

    /// Distance from the center of cell `index` at progress `ratio`.
    pub fn cell_distance(&self, index: usize, ratio: f64) -> f64 {
        let height = self.cells.get(index).map_or(0.0, |c| c.radius() * 2.0);
        (height * 0.5 + (index + 1) as f64 * height * 1.5) * ratio
    }

    /// Fill the connector layers. Drawn under the base circle and the cells.
    pub fn draw_liquid(&self, target: &mut dyn DrawTarget) {
        self.engine.draw(target);
        self.big_engine.draw(target);
    }

    /// Position every cell for the current elapsed time.
    fn layout(&mut self) {
        let Some(timeline) = self.timeline.as_ref() else {
            return;
        };
        let count = self.cells.len();
        for i in 0..count {
            let ratio = timeline.cell_ratio(i);
            let (factor, open) = match timeline.phase() {
                Phase::Opening => {
                    let pos_ratio = if ratio > i as f64 / count as f64 { ratio } else { 0.0 };
                    (pos_ratio, true)
                }
                Phase::Closing => (1.0 - ratio, false),
            };
            let distance = self.cell_distance(i, factor);
            let center = self.center + self.direction.offset(distance);
            let cell = &mut self.cells[i];
            cell.set_center(center);
            cell.update(ratio, open);
        }
    }

    /// Rebuild both connector layers from the current cell positions.
    fn update_liquid(&mut self) {
        self.engine.clear();
        self.big_engine.clear();
        if let Some(first) = self.cells.first() {
            self.big_engine.push(&self.base, first.circle());
        }
        for pair in self.cells.windows(2) {
            self.engine.push(pair[0].circle(), pair[1].circle());
        }
    }

    fn finish(&mut self, phase: Phase) {
        match phase {
            Phase::Opening => {
                let count = self.cells.len();
                for i in 0..count {
                    let distance = self.cell_distance(i, 1.0);
                    let center = self.center + self.direction.offset(distance);
                    let cell = &mut self.cells[i];
                    cell.set_center(center);
                    cell.update(1.0, true);
                    cell.set_interactive(true);
                }
                self.update_liquid();
            }
            Phase::Closing => {
                self.cells.clear();
                self.engine.clear();
                self.big_engine.clear();
            }
        }
        self.stop();
        debug!("{phase:?} finished");
    }

    /// Drop the active timeline, restoring cell shadows.
    fn stop(&mut self) -> Option<Timeline> {
        if self.enable_shadow {
            for cell in &mut self.cells {
                cell.append_shadow();
            }
        }
        self.timeline.take()
    }
}
