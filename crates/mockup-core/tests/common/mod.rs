#![allow(dead_code)]
use instant::Instant;
use mockup_core::{Clock, Layer, PresentationSurface, TextSlot};
use std::cell::Cell;
use std::time::Duration;

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Cell::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Surface that records every write in order.
#[derive(Default)]
pub struct RecordingSurface {
    pub properties: Vec<(Layer, String, String)>,
    pub texts: Vec<(TextSlot, String)>,
}

impl RecordingSurface {
    pub fn writes(&self) -> usize {
        self.properties.len() + self.texts.len()
    }

    pub fn last(&self, layer: Layer, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .rev()
            .find(|(l, n, _)| *l == layer && n == name)
            .map(|(_, _, v)| v.as_str())
    }
}

impl PresentationSurface for RecordingSurface {
    fn set_property(&mut self, layer: Layer, name: &str, value: &str) {
        self.properties.push((layer, name.to_string(), value.to_string()));
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) {
        self.texts.push((slot, text.to_string()));
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
