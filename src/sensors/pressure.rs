//! Pressure pad driver.
//!
//! Reads the pad's analog voltage through a 12-bit ADC channel, smooths it
//! with a 10-sample moving average and maps the result linearly onto
//! `[0.0, 1.0]` using two calibration points.
//!
//! ## Cold start
//!
//! The smoothing window is zero-filled at construction and the average is
//! always taken over the whole window, so the first nine reads after boot
//! under-report.  [`PressureSensor::is_primed`] turns `true` once the window
//! holds only real samples.

use log::{info, warn};

use crate::app::ports::AnalogInput;
use crate::error::ConfigError;
use crate::filter::RingBuffer;
use crate::pins;

/// Number of raw samples averaged per reading.
pub const SMOOTHING_WINDOW: usize = 10;

/// Raw ADC readings mapped to 0.0 and 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub min_raw: f32,
    pub max_raw: f32,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            min_raw: 0.0,
            max_raw: f32::from(pins::ADC_MAX_RAW),
        }
    }
}

impl Calibration {
    /// Equal (or non-finite) bounds would make normalisation divide by zero.
    ///
    /// Inverted bounds (`min_raw > max_raw`) are accepted and produce an
    /// inverted mapping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_raw.is_finite() || !self.max_raw.is_finite() {
            return Err(ConfigError::DegenerateCalibration);
        }
        if self.min_raw == self.max_raw {
            return Err(ConfigError::DegenerateCalibration);
        }
        Ok(())
    }

    /// Map `raw` onto `[0.0, 1.0]`, clamping out-of-range input.
    pub fn normalise(&self, raw: f32) -> f32 {
        ((raw - self.min_raw) / (self.max_raw - self.min_raw)).clamp(0.0, 1.0)
    }
}

pub struct PressureSensor<A> {
    input: Option<A>,
    cal: Calibration,
    window: RingBuffer<SMOOTHING_WINDOW>,
    last_raw: f32,
    last_reading: f32,
}

impl<A: AnalogInput> PressureSensor<A> {
    /// An unbound sensor: every read returns `0.0` until [`configure`](Self::configure).
    pub fn new() -> Self {
        Self {
            input: None,
            cal: Calibration::default(),
            window: RingBuffer::new(),
            last_raw: 0.0,
            last_reading: 0.0,
        }
    }

    /// Bind the analog input and set the calibration bounds.
    ///
    /// May be called again to rebind or recalibrate; the smoothing window is
    /// kept.  A rejected calibration leaves the sensor unchanged.
    pub fn configure(&mut self, input: A, cal: Calibration) -> Result<(), ConfigError> {
        if let Err(e) = cal.validate() {
            warn!(
                "pressure: rejected calibration [{}, {}] on GPIO {}",
                cal.min_raw,
                cal.max_raw,
                input.pin()
            );
            return Err(e);
        }
        info!(
            "pressure: GPIO {} bound ({}-bit ADC, range {}..{})",
            input.pin(),
            pins::ADC_RESOLUTION_BITS,
            cal.min_raw,
            cal.max_raw
        );
        self.input = Some(input);
        self.cal = cal;
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.input.is_some()
    }

    /// Take one ADC sample and return the smoothed raw value.
    ///
    /// Unconfigured sensors return `0.0` and leave the window untouched.
    pub fn read_raw(&mut self) -> f32 {
        let Some(input) = self.input.as_mut() else {
            return 0.0;
        };
        let sample = input.read_raw();
        self.last_raw = self.window.push(f32::from(sample));
        self.last_raw
    }

    /// Sample, smooth and normalise.  The result is always within `[0.0, 1.0]`.
    pub fn read(&mut self) -> f32 {
        let raw = self.read_raw();
        self.last_reading = self.cal.normalise(raw);
        self.last_reading
    }

    /// Most recent normalised reading; no I/O.
    pub fn last_reading(&self) -> f32 {
        self.last_reading
    }

    /// Most recent smoothed raw value; no I/O.
    pub fn last_raw(&self) -> f32 {
        self.last_raw
    }

    pub fn calibration(&self) -> Calibration {
        self.cal
    }

    /// `true` once the smoothing window has been filled.
    pub fn is_primed(&self) -> bool {
        self.window.is_primed()
    }
}

impl<A: AnalogInput> Default for PressureSensor<A> {
    fn default() -> Self {
        Self::new()
    }
}
