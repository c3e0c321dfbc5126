/// Animation style attached to emitted row updates.
///
/// The engine never interprets the value; it is handed unchanged to the
/// [`crate::RowSink`] that performs the insert or delete.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RowAnimation {
    None,
    #[default]
    Automatic,
    Fade,
    Top,
    Bottom,
    Left,
    Right,
    Middle,
    /// Widget specific style identified by an opaque code.
    Custom(u32),
}

/// Configuration knobs for a [`crate::FlatTree`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeOptions {
    /// Style used by `expand`/`collapse` when the caller does not pass one.
    pub animation: RowAnimation,
}
