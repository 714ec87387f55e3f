use crate::filters::kind::FilterKind;

/// Snapshot of the user-facing controls, polled once per tick.
///
/// The UI itself lives outside this crate; the loop only sees the
/// selected filter and the intensity slider value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub filter: FilterKind,
    pub intensity: u8,
}

impl Controls {
    pub fn new(filter: FilterKind, intensity: u8) -> Self {
        Self { filter, intensity }
    }
}
