//! CPU pixmap surface.
//!
//! One persistent pixmap per stage; every frame clears it to the background
//! color, replays the scene into a fresh `RenderContext`, and reads the
//! result back as premultiplied RGBA8 bytes.

use crate::foundation::core::{Rgba8Premul, Viewport};
use crate::foundation::error::{TrifillError, TrifillResult};

/// One rendered frame of premultiplied RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes, row-major RGBA.
    pub data: Vec<u8>,
    /// Always `true` for frames produced by this crate.
    pub premultiplied: bool,
}

pub(crate) struct StageSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl StageSurface {
    pub(crate) fn new(viewport: Viewport) -> TrifillResult<Self> {
        let width: u16 = viewport
            .width
            .try_into()
            .map_err(|_| TrifillError::render("surface width exceeds u16"))?;
        let height: u16 = viewport
            .height
            .try_into()
            .map_err(|_| TrifillError::render("surface height exceeds u16"))?;
        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    pub(crate) fn viewport(&self) -> Viewport {
        Viewport {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    /// Clear, run `scene` against a fresh context, and read the frame back.
    pub(crate) fn render_with(
        &mut self,
        clear: Rgba8Premul,
        scene: impl FnOnce(&mut vello_cpu::RenderContext),
    ) -> FrameRgba {
        clear_pixmap(&mut self.pixmap, clear.to_bytes());

        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        scene(&mut ctx);
        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);

        FrameRgba {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}
