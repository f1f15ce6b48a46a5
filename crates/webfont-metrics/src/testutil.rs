//! Test doubles: a scripted measuring surface and font environment.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::environment::FontEnvironment;
use crate::identity::{FontStyle, FontWeight};
use crate::surface::{MeasuringSurface, TextAlign, TextBaseline, TextMeasurement};
use crate::{FontLoadError, Result};

/// Surface returning canned measurements per probe string.
///
/// Unscripted strings measure as all zeros, like a glyph falling through to
/// the blank backup face. Every `measure_text` input is appended to a shared
/// call log so tests can count probes after the surface moves into a
/// metrics instance.
#[derive(Debug)]
pub(crate) struct FakeSurface {
    pub font: Option<String>,
    pub align: Option<TextAlign>,
    pub baseline: Option<TextBaseline>,
    measurements: HashMap<String, TextMeasurement>,
    calls: Rc<RefCell<Vec<String>>>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self {
            font: None,
            align: None,
            baseline: None,
            measurements: HashMap::new(),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_measurements(measurements: HashMap<String, TextMeasurement>) -> Self {
        Self {
            measurements,
            ..Self::new()
        }
    }

    /// Script a glyph: rendered width plus bounding-box ascent and descent.
    pub fn with_glyph(mut self, text: &str, width: f64, ascent: f64, descent: f64) -> Self {
        self.measurements
            .insert(text.to_string(), glyph_measurement(width, ascent, descent));
        self
    }

    /// Handle on the call log, valid after the surface is moved elsewhere.
    pub fn calls(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.calls)
    }
}

impl MeasuringSurface for FakeSurface {
    fn set_font(&mut self, spec: &str) {
        self.font = Some(spec.to_string());
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.align = Some(align);
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = Some(baseline);
    }

    fn measure_text(&self, text: &str) -> TextMeasurement {
        self.calls.borrow_mut().push(text.to_string());
        self.measurements.get(text).cloned().unwrap_or_default()
    }
}

fn glyph_measurement(width: f64, ascent: f64, descent: f64) -> TextMeasurement {
    TextMeasurement {
        width,
        actual_bounding_box_right: width,
        actual_bounding_box_ascent: ascent,
        actual_bounding_box_descent: descent,
        ..Default::default()
    }
}

/// Environment whose surfaces all share one measurement script.
///
/// Records every readiness wait and font-face registration; readiness can be
/// scripted to fail for one family or to suspend once so tests can interleave
/// concurrent requests.
#[derive(Debug)]
pub(crate) struct FakeEnvironment {
    measurements: HashMap<String, TextMeasurement>,
    pub surfaces_created: Cell<usize>,
    pub ready_waits: RefCell<Vec<String>>,
    pub registered_faces: RefCell<Vec<(String, FontWeight, FontStyle)>>,
    pub fail_family: RefCell<Option<String>>,
    yield_in_ready: bool,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self {
            measurements: HashMap::new(),
            surfaces_created: Cell::new(0),
            ready_waits: RefCell::new(Vec::new()),
            registered_faces: RefCell::new(Vec::new()),
            fail_family: RefCell::new(None),
            yield_in_ready: false,
        }
    }

    /// Script a glyph on every surface this environment creates.
    pub fn with_glyph(mut self, text: &str, width: f64, ascent: f64, descent: f64) -> Self {
        self.measurements
            .insert(text.to_string(), glyph_measurement(width, ascent, descent));
        self
    }

    /// Readiness waits for this family fail with a load error.
    pub fn failing(self, family: &str) -> Self {
        *self.fail_family.borrow_mut() = Some(family.to_string());
        self
    }

    /// Readiness waits suspend once before resolving, opening the async gap
    /// concurrent requests race across.
    pub fn yielding(mut self) -> Self {
        self.yield_in_ready = true;
        self
    }
}

impl FontEnvironment for FakeEnvironment {
    type Surface = FakeSurface;

    fn create_surface(&self) -> FakeSurface {
        self.surfaces_created.set(self.surfaces_created.get() + 1);
        FakeSurface::with_measurements(self.measurements.clone())
    }

    async fn wait_ready(&self, family: &str, _weight: FontWeight, _style: FontStyle) -> Result<()> {
        self.ready_waits.borrow_mut().push(family.to_string());
        if self.yield_in_ready {
            smol::future::yield_now().await;
        }
        if self.fail_family.borrow().as_deref() == Some(family) {
            return Err(FontLoadError::Failed {
                family: family.to_string(),
                reason: "scripted load failure".to_string(),
            });
        }
        Ok(())
    }

    fn register_font_face(
        &self,
        family: &str,
        weight: FontWeight,
        style: FontStyle,
        _source: &str,
    ) {
        self.registered_faces
            .borrow_mut()
            .push((family.to_string(), weight, style));
    }
}
