//! The idle float effect: a requestAnimationFrame loop feeding a bounded
//! sine wave, independent of scroll.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// A fixed-amplitude sine oscillator sampled by wall-clock elapsed time, so
/// the perceived speed does not depend on frame rate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Oscillator {
    amplitude: f64,
    /// Radians per millisecond.
    angular_frequency: f64,
    phase: f64,
}

impl Oscillator {
    pub const fn new(amplitude: f64, angular_frequency: f64) -> Self {
        Self {
            amplitude,
            angular_frequency,
            phase: 0.0,
        }
    }

    /// Same oscillator shifted by `phase` radians. A shift of pi yields the
    /// exact negation, for layers floating in counter-phase.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    pub fn sample(&self, elapsed_ms: f64) -> f64 {
        self.amplitude * (elapsed_ms * self.angular_frequency + self.phase).sin()
    }
}

/// Runs `osc` on an animation-frame loop and returns its current value.
/// Elapsed time is anchored to the first delivered frame timestamp, so a
/// dropped frame does not slow the wave down. The pending frame is cancelled
/// and the callback dropped when the calling component unmounts.
#[hook]
pub fn use_float(osc: Oscillator) -> f64 {
    let value = use_state(|| 0.0);
    {
        let value = value.clone();
        use_effect_with_deps(
            move |osc| {
                let osc = *osc;
                let raf_id = Rc::new(Cell::new(None::<i32>));
                // The callback re-requests itself, so it lives in a shared
                // slot it can borrow from inside its own body.
                let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));
                if web_sys::window().is_some() {
                    let start = Cell::new(None::<f64>);
                    let tick = Closure::<dyn FnMut(f64)>::new({
                        let value = value.clone();
                        let raf_id = raf_id.clone();
                        let slot = slot.clone();
                        move |time: f64| {
                            let begin = match start.get() {
                                Some(t) => t,
                                None => {
                                    start.set(Some(time));
                                    time
                                }
                            };
                            value.set(osc.sample(time - begin));
                            if let Some(win) = web_sys::window() {
                                if let Some(cb) = slot.borrow().as_ref() {
                                    if let Ok(id) = win
                                        .request_animation_frame(cb.as_ref().unchecked_ref())
                                    {
                                        raf_id.set(Some(id));
                                    }
                                }
                            }
                        }
                    });
                    *slot.borrow_mut() = Some(tick);
                    if let Some(win) = web_sys::window() {
                        if let Some(cb) = slot.borrow().as_ref() {
                            if let Ok(id) =
                                win.request_animation_frame(cb.as_ref().unchecked_ref())
                            {
                                raf_id.set(Some(id));
                            }
                        }
                    }
                }
                move || {
                    if let Some(win) = web_sys::window() {
                        if let Some(id) = raf_id.get() {
                            let _ = win.cancel_animation_frame(id);
                        }
                    }
                    slot.borrow_mut().take();
                }
            },
            osc,
        );
    }
    *value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const FLOAT: Oscillator = Oscillator::new(5.0, 0.002);

    #[test]
    fn starts_at_zero() {
        assert_eq!(FLOAT.sample(0.0), 0.0);
    }

    #[test]
    fn bounded_by_amplitude() {
        for i in 0..10_000 {
            let v = FLOAT.sample(f64::from(i) * 17.3);
            assert!(v.abs() <= 5.0, "sample escaped amplitude: {v}");
        }
    }

    #[test]
    fn counter_phase_negates() {
        let inverse = FLOAT.with_phase(PI);
        for i in 0..1000 {
            let t = f64::from(i) * 16.6;
            assert!((FLOAT.sample(t) + inverse.sample(t)).abs() < 1e-9);
        }
    }

    #[test]
    fn sampling_is_pure() {
        let t = 1234.5;
        assert_eq!(FLOAT.sample(t).to_bits(), FLOAT.sample(t).to_bits());
    }
}
