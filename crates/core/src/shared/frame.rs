use ndarray::{ArrayView3, ArrayViewMut3};

/// A single video frame: contiguous bytes in row-major order.
///
/// Frames are allocated once at startup for a fixed resolution and reused
/// every tick; format conversion happens at I/O boundaries only. Channel
/// counts in use are 1 (grayscale scratch), 3 (color scratch) and 4 (RGBA
/// source/destination buffers).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    /// Zero-filled RGBA frame.
    pub fn rgba(width: u32, height: u32) -> Self {
        Self::new(
            vec![0; (width as usize) * (height as usize) * 4],
            width,
            height,
            4,
            0,
        )
    }

    /// Zero-filled single-channel (grayscale) frame.
    pub fn gray(width: u32, height: u32) -> Self {
        Self::new(
            vec![0; (width as usize) * (height as usize)],
            width,
            height,
            1,
            0,
        )
    }

    /// Zero-filled three-channel (RGB) frame.
    pub fn rgb(width: u32, height: u32) -> Self {
        Self::new(
            vec![0; (width as usize) * (height as usize) * 3],
            width,
            height,
            3,
            0,
        )
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// True when the other frame has identical width, height and channels.
    pub fn same_layout(&self, other: &Frame) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.channels == other.channels
    }

    /// Copies pixel data from an identically laid out frame.
    ///
    /// This is the identity filter and the per-tick starting point for
    /// in-place effects; it never reallocates.
    pub fn copy_from(&mut self, src: &Frame) {
        debug_assert!(self.same_layout(src), "copy_from requires matching layout");
        self.data.copy_from_slice(&src.data);
        self.index = src.index;
    }

    /// Byte offset of pixel (x, y), channel 0.
    pub fn pixel_offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * (self.channels as usize)
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
