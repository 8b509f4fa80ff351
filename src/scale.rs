//! Calibration persistence for a load cell driver.

use embedded_storage::{ReadStorage, Storage};

use crate::settings::Settings;
use crate::LoadCell;

/// Failure while persisting or restoring calibration settings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The record would extend past the end of the storage region.
    OutOfBounds,
    /// The storage peripheral reported an error.
    Storage(E),
}

/// A load cell driver paired with the fixed storage address where its
/// calibration settings live.
///
/// The storage peripheral is injected at the call site of [`save`](Self::save)
/// and [`load`](Self::load), so several scales can share one peripheral.
/// Their addresses must be at least [`Settings::STORED_SIZE`] bytes apart;
/// overlapping ranges overwrite each other's records.
pub struct Scale<LC> {
    cell: LC,
    address: u32,
}

impl<LC> Scale<LC>
where
    LC: LoadCell<Scale = f32, Offset = i32>,
{
    /// Pair `cell` with the storage address its settings persist at.
    /// Does not touch storage.
    pub fn new(cell: LC, address: u32) -> Self {
        Self { cell, address }
    }

    /// The storage address this scale persists to.
    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn cell(&self) -> &LC {
        &self.cell
    }

    pub fn cell_mut(&mut self) -> &mut LC {
        &mut self.cell
    }

    /// Take the driver back out.
    pub fn release(self) -> LC {
        self.cell
    }

    /// Snapshot the driver's live calibration factor and tare offset and
    /// write them at this scale's address.
    pub fn save<S: Storage>(&mut self, storage: &mut S) -> Result<(), Error<S::Error>> {
        self.bounds_check(storage)?;
        let settings = Settings {
            calibration_factor: self.cell.get_scale(),
            zero_factor: self.cell.get_offset(),
        };
        storage
            .write(self.address, &settings.to_bytes())
            .map_err(Error::Storage)
    }

    /// Read the settings record at this scale's address and push both
    /// fields into the driver.
    ///
    /// The bytes are applied verbatim; there is no marker distinguishing a
    /// saved record from a region that was never written. Loading from an
    /// erased region installs whatever the erased pattern decodes to
    /// (all-0xFF flash gives a NaN factor and an offset of -1), so readings
    /// are meaningless until [`save`](Self::save) has run once.
    pub fn load<S: Storage>(&mut self, storage: &mut S) -> Result<(), Error<S::Error>> {
        self.bounds_check(storage)?;
        let mut bytes = [0u8; Settings::STORED_SIZE];
        storage
            .read(self.address, &mut bytes)
            .map_err(Error::Storage)?;
        let settings = Settings::from_bytes(&bytes);
        self.cell.set_scale(settings.calibration_factor);
        self.cell.set_offset(settings.zero_factor);
        Ok(())
    }

    /// Derive the calibration factor from a reference weight.
    ///
    /// Tare first, place a known weight on the platform, then call this.
    /// Averages `num_samples` raw readings, subtracts the tare offset and
    /// divides by `known_weight` (which must be nonzero), giving raw counts
    /// per weight unit. The factor is installed on the driver and returned;
    /// call [`save`](Self::save) afterwards to keep it across power cycles.
    pub fn calibrate(&mut self, known_weight: f32, num_samples: usize) -> f32 {
        let samples = num_samples.max(1);
        let mut average = 0.0f32;
        for n in 1..=samples {
            average += (self.cell.read() as f32 - average) / n as f32;
        }
        let factor = (average - self.cell.get_offset() as f32) / known_weight;
        self.cell.set_scale(factor);
        factor
    }

    fn bounds_check<S: ReadStorage>(&self, storage: &S) -> Result<(), Error<S::Error>> {
        let end = self.address as usize + Settings::STORED_SIZE;
        if end > storage.capacity() {
            return Err(Error::OutOfBounds);
        }
        Ok(())
    }
}

/// The wrapped driver's contract stays available on the scale itself.
impl<LC> LoadCell for Scale<LC>
where
    LC: LoadCell<Scale = f32, Offset = i32>,
{
    type Offset = i32;
    type Scale = f32;

    fn read(&mut self) -> i32 {
        self.cell.read()
    }

    fn read_scaled(&mut self) -> f32 {
        self.cell.read_scaled()
    }

    fn tare(&mut self, num_samples: usize) {
        self.cell.tare(num_samples)
    }

    fn get_offset(&self) -> i32 {
        self.cell.get_offset()
    }

    fn set_offset(&mut self, offset: i32) {
        self.cell.set_offset(offset)
    }

    fn set_scale(&mut self, scale: f32) {
        self.cell.set_scale(scale)
    }

    fn get_scale(&self) -> f32 {
        self.cell.get_scale()
    }
}
