use crate::filters::engine::FilterEngine;
use crate::pipeline::controls::Controls;
use crate::pipeline::domain::frame_sink::FrameSink;
use crate::pipeline::domain::frame_source::FrameSource;
use crate::shared::frame::Frame;

/// Outcome of a full source-to-sink run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub processed: usize,
    pub failed: usize,
}

/// Drives the per-tick capture -> filter -> present contract.
///
/// Owns the filter engine and a single reusable destination frame. Every
/// tick runs to completion before the next one; the only state carried
/// across ticks is the engine's face cache and the last good output.
/// Filter failures are caught at the tick boundary: the previous output
/// is shown again and the loop keeps going.
pub struct FrameLoop {
    engine: FilterEngine,
    dst: Frame,
    processed: usize,
    failed: usize,
}

impl FrameLoop {
    pub fn new(engine: FilterEngine) -> Self {
        let (width, height) = engine.resolution();
        Self {
            engine,
            dst: Frame::rgba(width, height),
            processed: 0,
            failed: 0,
        }
    }

    pub fn engine_mut(&mut self) -> &mut FilterEngine {
        &mut self.engine
    }

    /// Processes one frame with the polled control state and returns the
    /// buffer to present.
    ///
    /// On filter failure the returned buffer holds the last good output
    /// (or an identity copy of `src` when nothing succeeded yet). A `src`
    /// whose layout does not match the engine cannot be copied either;
    /// the zeroed startup frame is returned for that tick.
    pub fn tick(&mut self, src: &Frame, controls: &Controls) -> &Frame {
        match self
            .engine
            .apply(controls.filter, src, &mut self.dst, controls.intensity)
        {
            Ok(()) => self.processed += 1,
            Err(e) => {
                log::warn!(
                    "filter '{}' failed on frame {}: {e}; showing previous output",
                    controls.filter,
                    src.index()
                );
                if self.processed == 0 && self.dst.same_layout(src) {
                    self.dst.copy_from(src);
                }
                self.failed += 1;
            }
        }
        &self.dst
    }

    /// Pulls frames from `source` until exhaustion, ticking each one and
    /// handing the result to `sink`.
    ///
    /// Source failure is fatal (no frames means no loop); sink failures
    /// are logged per tick and the loop continues.
    pub fn run(
        &mut self,
        source: &mut dyn FrameSource,
        sink: &mut dyn FrameSink,
        controls: &Controls,
    ) -> Result<LoopStats, Box<dyn std::error::Error>> {
        let (width, height) = source.resolution();
        let (ew, eh) = self.engine.resolution();
        if (width, height) != (ew, eh) {
            return Err(format!(
                "source resolution {width}x{height} does not match engine {ew}x{eh}"
            )
            .into());
        }

        let mut src = Frame::rgba(width, height);
        while source.next_frame(&mut src)? {
            let index = src.index();
            let output = self.tick(&src, controls);
            if let Err(e) = sink.present(output) {
                log::warn!("failed to present frame {index}: {e}");
                self.failed += 1;
            }
        }

        let stats = LoopStats {
            processed: self.processed,
            failed: self.failed,
        };
        log::info!(
            "frame loop finished: {} processed, {} failed",
            stats.processed,
            stats.failed
        );
        Ok(stats)
    }
}
