//! Liquid floating action button.

use super::{Cell, CellContent, DataSource, Delegate};
use crate::animation::{Direction, LiquidBase, Phase, TickOutcome};
use crate::config::ButtonConfig;
use crate::error::{LiquidError, Result};
use crate::shapes::{DrawTarget, PlusIcon, Shadow, whiten};
use kurbo::{BezPath, Point, Rect};
use log::{debug, warn};
use peniko::Color;

/// Plus icon radius relative to the button width (20pt on a 56pt button).
const INTERNAL_RADIUS_RATIO: f64 = 20.0 / 56.0;

type SelectCallback = Box<dyn FnMut(usize)>;

struct Item {
    content: CellContent,
    on_select: Option<SelectCallback>,
}

/// A round button that opens into a line of cells joined by liquid connectors.
///
/// All geometry is in the button's local coordinates: `(0, 0)` is the
/// top-left of `frame`.
pub struct LiquidFloatingActionButton {
    frame: Rect,
    config: ButtonConfig,
    color: Color,
    base: LiquidBase,
    items: Vec<Item>,
    data_source: Option<Box<dyn DataSource>>,
    delegate: Option<Box<dyn Delegate>>,
    closed: bool,
    touching: bool,
    plus: PlusIcon,
}

impl std::fmt::Debug for LiquidFloatingActionButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiquidFloatingActionButton")
            .field("frame", &self.frame)
            .field("closed", &self.closed)
            .field("items", &self.items.len())
            .field("cells", &self.base.cells().len())
            .finish_non_exhaustive()
    }
}

impl LiquidFloatingActionButton {
    pub fn new(frame: Rect, direction: Direction) -> Self {
        let config = ButtonConfig {
            direction,
            ..ButtonConfig::default()
        };
        Self::with_config(frame, config)
    }

    pub fn with_config(frame: Rect, config: ButtonConfig) -> Self {
        let color: Color = config.color.into();
        let mut base = LiquidBase::new(frame, color, config.direction, config.animation.clone());
        base.enable_shadow = config.enable_shadow;
        let plus = PlusIcon::new(base.center(), frame.width() * INTERNAL_RADIUS_RATIO * 0.5);
        Self {
            frame,
            config,
            color,
            base,
            items: Vec::new(),
            data_source: None,
            delegate: None,
            closed: true,
            touching: false,
            plus,
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    pub fn base(&self) -> &LiquidBase {
        &self.base
    }

    /// Cells currently on screen (empty once closed).
    pub fn cells(&self) -> &[Cell] {
        self.base.cells()
    }

    pub fn plus_icon(&self) -> &PlusIcon {
        &self.plus
    }

    /// Stroke path of the plus icon at its current rotation.
    pub fn plus_path(&self) -> BezPath {
        self.plus.to_path()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The opening animation is running.
    pub fn is_opening(&self) -> bool {
        self.base
            .timeline()
            .is_some_and(|timeline| timeline.phase() == Phase::Opening)
    }

    /// An open or close animation is running.
    pub fn is_animating(&self) -> bool {
        self.base.is_animating()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.config.color = color.into();
        self.base.set_color(color);
        self.base.set_base_color(self.highlighted_color());
        for cell in self.base.cells_mut() {
            cell.set_color(color);
        }
    }

    pub fn direction(&self) -> Direction {
        self.base.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.config.direction = direction;
        self.base.direction = direction;
    }

    pub fn set_data_source(&mut self, source: Box<dyn DataSource>) {
        self.data_source = Some(source);
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn Delegate>) {
        self.delegate = Some(delegate);
    }

    /// Add an item; `on_select` receives the item's index when tapped.
    pub fn add_cell(&mut self, content: CellContent, on_select: impl FnMut(usize) + 'static) {
        self.items.push(Item {
            content,
            on_select: Some(Box::new(on_select)),
        });
    }

    pub fn add_cell_image(&mut self, image: impl Into<String>, on_select: impl FnMut(usize) + 'static) {
        self.add_cell(CellContent::Image(image.into()), on_select);
    }

    pub fn add_cell_view(&mut self, view: impl Into<String>, on_select: impl FnMut(usize) + 'static) {
        self.add_cell(CellContent::View(view.into()), on_select);
    }

    pub fn item_count(&self) -> usize {
        match &self.data_source {
            Some(source) => source.number_of_cells(),
            None => self.items.len(),
        }
    }

    pub fn open(&mut self) {
        self.plus.rotation = self.config.rotation_degrees.to_radians();
        let cells = self.cell_array();
        debug!("button open with {} cell(s)", cells.len());
        self.base.open(cells);
        self.closed = false;
    }

    pub fn close(&mut self) {
        self.plus.rotation = 0.0;
        debug!("button close");
        self.base.close();
        self.closed = true;
    }

    /// Tap on the main button.
    pub fn toggle(&mut self) {
        if !self.config.responsible {
            return;
        }
        if self.closed {
            self.open();
        } else {
            self.close();
        }
    }

    /// Advance the animation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> TickOutcome {
        self.base.tick(dt)
    }

    /// Pressed-state highlight of the main button.
    pub fn set_touching(&mut self, touching: bool) {
        self.touching = touching;
        self.base.set_base_color(self.highlighted_color());
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    /// Pressed-state highlight of a displayed cell.
    pub fn set_cell_touching(&mut self, index: usize, touching: bool) -> Result<()> {
        let len = self.base.cells().len();
        let cell = self
            .base
            .cells_mut()
            .get_mut(index)
            .ok_or(LiquidError::IndexOutOfRange { index, len })?;
        cell.set_touching(touching);
        Ok(())
    }

    /// Index of the interactive cell under `point`, if any.
    pub fn cell_at(&self, point: Point) -> Option<usize> {
        self.base
            .cells()
            .iter()
            .position(|cell| cell.is_interactive() && cell.contains(point))
    }

    /// Report a tap on cell `index` to its callback and the delegate.
    pub fn select_item(&mut self, index: usize) -> Result<()> {
        if self.closed {
            warn!("select_item({index}) while closed");
            return Err(LiquidError::NotOpen);
        }
        let len = self.base.cells().len();
        let cell = self
            .base
            .cells()
            .get(index)
            .ok_or(LiquidError::IndexOutOfRange { index, len })?;
        if !cell.is_interactive() {
            warn!("select_item({index}) while animating");
            return Err(LiquidError::CellNotInteractive(index));
        }

        if self.data_source.is_none() {
            if let Some(callback) = self.items.get_mut(index).and_then(|item| item.on_select.as_mut()) {
                callback(index);
            }
        }
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_select_item(index);
        }
        debug!("selected cell {index}");
        Ok(())
    }

    /// Draw the whole widget back to front.
    pub fn draw(&self, target: &mut dyn DrawTarget) {
        let base = self.base.base();
        target.draw(base);
        self.base.draw_liquid(target);
        if self.config.enable_shadow {
            target.fill_path_with_shadow(base.path(), base.color(), &Shadow::default());
        } else {
            target.draw(base);
        }
        target.stroke_path(&self.plus_path(), self.plus.color, self.plus.line_width);
        for cell in self.base.cells() {
            cell.draw(target);
        }
    }

    fn highlighted_color(&self) -> Color {
        if self.touching {
            whiten(self.color, 0.5)
        } else {
            self.color
        }
    }

    fn cell_array(&self) -> Vec<Cell> {
        let cells: Vec<Cell> = match &self.data_source {
            Some(source) => (0..source.number_of_cells())
                .map(|i| source.cell_for_index(i))
                .collect(),
            None => self
                .items
                .iter()
                .map(|item| Cell::new(item.content.clone()))
                .collect(),
        };
        cells.into_iter().map(|cell| self.insert_cell(cell)).collect()
    }

    fn insert_cell(&self, mut cell: Cell) -> Cell {
        cell.set_color(self.color);
        cell.set_radius(self.frame.width() * self.config.cell_radius_ratio);
        cell.set_center(self.base.center());
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::recorder::Recorder;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn button() -> LiquidFloatingActionButton {
        LiquidFloatingActionButton::new(Rect::new(300.0, 500.0, 356.0, 556.0), Direction::Up)
    }

    fn run_to_end(button: &mut LiquidFloatingActionButton) {
        for _ in 0..200 {
            if let TickOutcome::Finished(_) | TickOutcome::Idle = button.tick(1.0 / 60.0) {
                return;
            }
        }
    }

    struct Icons(usize);

    impl DataSource for Icons {
        fn number_of_cells(&self) -> usize {
            self.0
        }

        fn cell_for_index(&self, index: usize) -> Cell {
            Cell::image(format!("icon-{index}"))
        }
    }

    struct Recording(Rc<RefCell<Vec<usize>>>);

    impl Delegate for Recording {
        fn did_select_item(&mut self, index: usize) {
            self.0.borrow_mut().push(index);
        }
    }

    #[test]
    fn test_open_close_lifecycle() {
        let mut button = button();
        button.add_cell_image("ic_cloud", |_| {});
        button.add_cell_image("ic_place", |_| {});
        assert!(button.is_closed());
        assert!(!button.is_opening());

        button.open();
        assert!(!button.is_closed());
        assert!(button.is_opening());
        assert_eq!(button.cells().len(), 2);
        let r = button.cells()[0].radius();
        assert!((r - 56.0 * 0.38).abs() < 1e-9);
        assert!((button.plus_icon().rotation - std::f64::consts::FRAC_PI_4).abs() < 1e-9);
        assert_eq!(button.plus_path().elements().len(), 4);

        run_to_end(&mut button);
        assert!(!button.is_opening());
        assert!(button.cells().iter().all(Cell::is_interactive));

        button.close();
        assert!(button.is_closed());
        assert!(!button.is_opening());
        assert!(button.is_animating());
        assert!(button.plus_icon().rotation.abs() < f64::EPSILON);
        run_to_end(&mut button);
        assert!(!button.is_animating());
        assert!(button.cells().is_empty());
    }

    #[test]
    fn test_select_invokes_callback_and_delegate() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let selected = Rc::new(RefCell::new(Vec::new()));

        let mut button = button();
        for name in ["ic_cloud", "ic_system", "ic_place"] {
            let hits = Rc::clone(&hits);
            button.add_cell_image(name, move |i| hits.borrow_mut().push(i));
        }
        button.set_delegate(Box::new(Recording(Rc::clone(&selected))));

        assert!(matches!(button.select_item(0), Err(LiquidError::NotOpen)));

        button.open();
        button.tick(0.1);
        assert!(matches!(
            button.select_item(1),
            Err(LiquidError::CellNotInteractive(1))
        ));

        run_to_end(&mut button);
        button.select_item(2).unwrap();
        assert_eq!(*hits.borrow(), vec![2]);
        assert_eq!(*selected.borrow(), vec![2]);
        assert!(matches!(
            button.select_item(7),
            Err(LiquidError::IndexOutOfRange { index: 7, len: 3 })
        ));
    }

    #[test]
    fn test_data_source_overrides_items() {
        let mut button = button();
        button.add_cell_view("ignored", |_| {});
        button.set_data_source(Box::new(Icons(4)));
        assert_eq!(button.item_count(), 4);
        button.open();
        assert_eq!(button.cells().len(), 4);
        assert_eq!(button.cells()[3].content(), &CellContent::Image("icon-3".to_string()));
    }

    #[test]
    fn test_cell_at_after_open() {
        let mut button = button();
        button.add_cell_image("ic_art", |_| {});
        button.open();
        let center = button.cells()[0].center();
        assert_eq!(button.cell_at(center), None);
        run_to_end(&mut button);
        let center = button.cells()[0].center();
        assert_eq!(button.cell_at(center), Some(0));
        assert_eq!(button.cell_at(Point::new(-100.0, -100.0)), None);
    }

    #[test]
    fn test_toggle_respects_responsible() {
        let mut button = button();
        button.toggle();
        assert!(!button.is_closed());
        button.toggle();
        assert!(button.is_closed());

        let config = ButtonConfig {
            responsible: false,
            ..ButtonConfig::default()
        };
        let mut inert = LiquidFloatingActionButton::with_config(Rect::new(0.0, 0.0, 56.0, 56.0), config);
        inert.toggle();
        assert!(inert.is_closed());
    }

    #[test]
    fn test_close_mid_open_uses_closing_phase() {
        let mut button = button();
        button.set_data_source(Box::new(Icons(3)));
        button.open();
        button.tick(0.2);
        button.close();
        assert_eq!(button.base().timeline().map(|t| t.phase()), Some(Phase::Closing));
        assert!(!button.is_opening());
        assert!(matches!(button.tick(0.0), TickOutcome::Running { .. }));
    }

    #[test]
    fn test_color_propagates() {
        let mut button = button();
        button.add_cell_image("ic_brush", |_| {});
        button.open();
        let red = Color::from_rgba8(255, 0, 0, 255);
        button.set_color(red);
        assert_eq!(button.base().base().color().to_rgba8().r, 255);
        assert_eq!(button.base().engine().color().to_rgba8().r, 255);
        assert_eq!(button.cells()[0].color().to_rgba8().r, 255);

        button.set_touching(true);
        assert_eq!(button.base().base().color().to_rgba8().g, 128);
        assert_eq!(button.base().engine().color().to_rgba8().g, 0);
        assert_eq!(button.base().big_engine().color().to_rgba8().g, 0);
        button.set_touching(false);
        assert_eq!(button.base().base().color().to_rgba8().g, 0);
    }

    #[test]
    fn test_recolor_while_touching_keeps_connectors_plain() {
        let mut button = button();
        button.set_touching(true);
        button.set_color(Color::from_rgba8(0, 0, 255, 255));
        assert_eq!(button.base().base().color().to_rgba8().r, 128);
        assert_eq!(button.base().engine().color().to_rgba8().r, 0);
        assert_eq!(button.base().big_engine().color().to_rgba8().r, 0);
    }

    #[test]
    fn test_cell_touching_out_of_range() {
        let mut button = button();
        assert!(matches!(
            button.set_cell_touching(0, true),
            Err(LiquidError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_draw_order() {
        let mut button = button();
        button.add_cell_image("ic_cloud", |_| {});
        button.open();
        button.tick(0.05);
        let mut recorder = Recorder::default();
        button.draw(&mut recorder);
        // Base, connectors, shadowed main circle, cell.
        assert!(recorder.fills.len() >= 4);
        assert_eq!(recorder.strokes.len(), 1);
        assert_eq!(recorder.shadowed, 1);
    }
}
