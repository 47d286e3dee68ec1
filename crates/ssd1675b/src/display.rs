//! Core display operations

use core::fmt;

use embedded_graphics_core::{
    geometry::{OriginDimensions, Point, Size},
    image::GetPixel,
    pixelcolor::BinaryColor,
    primitives::Rectangle,
};
use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::command::{Command, INIT_SEQUENCE, UPDATE_FULL};
use crate::config::Config;
use crate::encoder;
use crate::error::Error;
use crate::framebuffer::{FrameBuffer, Uniform};
use crate::interface::DisplayInterface;
use crate::refresh::{self, Cancel, Never};
use crate::{HEIGHT, VISIBLE_WIDTH};

/// Settle time after the software reset, BUSY is not meaningful yet
const SOFT_RESET_SETTLE_MS: u32 = 10;

/// Display driver for the SSD1675B 2.13" panel
///
/// Every operation borrows the driver mutably; share it between threads
/// behind a mutex.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// Nothing is sent to the controller; call [`Display::init`] before the
    /// first draw.
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Create a Display and run [`Display::init`]
    pub fn with_init<D: DelayNs>(
        interface: I,
        config: Config,
        delay: &mut D,
    ) -> Result<Self, Error<I>> {
        let mut display = Self::new(interface, config);
        display.init(delay)?;
        Ok(display)
    }

    /// Hardware reset, software reset, then program the controller registers
    ///
    /// On error the controller is left half-configured and this must be run
    /// again before drawing.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        debug!("initializing ssd1675b");
        self.interface.reset(delay).map_err(Error::Interface)?;

        self.command(Command::SoftReset, &[])?;
        delay.delay_ms(SOFT_RESET_SETTLE_MS);

        for (cmd, data) in INIT_SEQUENCE {
            trace!("init {:?} {:02X?}", cmd, data);
            self.command(cmd, data)?;
        }
        Ok(())
    }

    /// Send a command opcode followed by its payload
    ///
    /// DC is switched to data only when `data` is non-empty.
    pub fn command(&mut self, cmd: Command, data: &[u8]) -> Result<(), Error<I>> {
        self.interface
            .send_command(cmd.opcode())
            .map_err(Error::Interface)?;
        if !data.is_empty() {
            self.send_data(data)?;
        }
        Ok(())
    }

    /// Continue the data phase of the command sent last
    pub fn send_data(&mut self, data: &[u8]) -> Result<(), Error<I>> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Draw `src` into `dst` and refresh the panel
    ///
    /// `origin` is the point of `src` that lands on the top-left corner of
    /// `dst`. Everything outside `dst` is white. Returns once the refresh has
    /// finished.
    pub fn draw<S, D>(
        &mut self,
        dst: Rectangle,
        src: &S,
        origin: Point,
        delay: &mut D,
    ) -> Result<(), Error<I>>
    where
        S: GetPixel<Color = BinaryColor> + ?Sized,
        D: DelayNs,
    {
        self.draw_with(dst, src, origin, delay, &Never)
    }

    /// [`Display::draw`] with a cancellable refresh wait
    pub fn draw_with<S, D, C>(
        &mut self,
        dst: Rectangle,
        src: &S,
        origin: Point,
        delay: &mut D,
        cancel: &C,
    ) -> Result<(), Error<I>>
    where
        S: GetPixel<Color = BinaryColor> + ?Sized,
        D: DelayNs,
        C: Cancel + ?Sized,
    {
        debug!("drawing frame to ssd1675b");
        let mut frame = FrameBuffer::new();
        frame.composite(dst, src, origin);
        self.write_frame(&frame)?;
        self.update_with(delay, cancel)
    }

    /// Stream a canvas into B/W RAM without refreshing
    pub fn write_frame(&mut self, frame: &FrameBuffer) -> Result<(), Error<I>> {
        self.command(Command::WriteRamBw, &[])?;
        encoder::encode(frame, |row| self.send_data(row))
    }

    /// Blank the panel
    ///
    /// Draws a white sheet over [`Display::bounds`] so nothing stays
    /// on the glass once the hardware is released.
    pub fn halt<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        debug!("halting ssd1675b");
        self.draw(
            self.bounds(),
            &Uniform(BinaryColor::Off),
            Point::zero(),
            delay,
        )
    }

    /// Run a full refresh and wait for BUSY to clear
    pub fn update<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), Error<I>> {
        self.update_with(delay, &Never)
    }

    /// [`Display::update`] with a cancellable wait
    ///
    /// # Errors
    ///
    /// [`Error::RefreshTimedOut`] when BUSY outlasts the configured timeout,
    /// [`Error::Cancelled`] when `cancel` fires first.
    pub fn update_with<D, C>(&mut self, delay: &mut D, cancel: &C) -> Result<(), Error<I>>
    where
        D: DelayNs,
        C: Cancel + ?Sized,
    {
        debug!("full refresh on ssd1675b");
        self.command(Command::DisplayUpdateCtrl2, &[UPDATE_FULL])?;
        self.command(Command::MasterActivation, &[])?;
        refresh::wait_until_idle(&mut self.interface, delay, &self.config, cancel)
    }

    /// Visible area, 122x250 at the origin
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size())
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the hardware interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Give back the hardware interface
    pub fn release(self) -> I {
        self.interface
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        Size::new(VISIBLE_WIDTH as u32, HEIGHT as u32)
    }
}

impl<I> fmt::Display for Display<I>
where
    I: DisplayInterface + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        write!(
            f,
            "ssd1675b::Display{{{:?}, {}x{}}}",
            self.interface, size.width, size.height
        )
    }
}
