#![no_std]

pub mod coordinate;
pub mod cop;
pub mod scale;
pub mod settings;

pub use coordinate::Coordinate;
pub use scale::{Error, Scale};
pub use settings::Settings;

/// The capability set of a load cell amplifier driver (an hx711 or
/// compatible).
///
/// The persistence and calibration helpers in this crate sit on top of
/// this trait instead of a concrete driver, so any implementation can be
/// wrapped, including a test double.
pub trait LoadCell {
    type Offset;
    type Scale;

    /// Read the raw value from the load cell.
    fn read(&mut self) -> i32;

    /// Read the value with the tare offset subtracted and the calibration
    /// factor divided out. Casts to the type of Scale.
    fn read_scaled(&mut self) -> Self::Scale;

    /// Zero the load cell offset by averaging `num_samples` readings.
    fn tare(&mut self, num_samples: usize);

    /// Get the tare offset.
    fn get_offset(&self) -> Self::Offset;

    /// Set the tare offset directly, e.g. one restored from storage.
    fn set_offset(&mut self, offset: Self::Offset);

    /// Set the scale (AKA calibrate the scale).
    /// Use this to ensure that 1kg ~ 1kg.
    fn set_scale(&mut self, scale: Self::Scale);

    /// Get the scale.
    fn get_scale(&self) -> Self::Scale;
}
