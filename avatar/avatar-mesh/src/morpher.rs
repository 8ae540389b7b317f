//! Figure resource ownership.

use avatar_types::{AvatarAttributes, BodyMeasurements};
use tracing::debug;

use crate::error::MeshResult;
use crate::figure::build_figure;
use crate::parts::Figure;

/// Owner of the current generated figure.
///
/// This is the only stateful object in the core. Each rebuild constructs
/// the complete replacement figure first and only then swaps it in, so a
/// render surface holding the previous figure never observes a
/// half-updated one; the old figure is dropped strictly after the new
/// one is installed.
///
/// # Example
///
/// ```
/// use avatar_mesh::MeshMorpher;
/// use avatar_types::{AvatarAttributes, BodyMeasurements};
///
/// let mut morpher = MeshMorpher::new();
/// assert!(morpher.figure().is_none());
///
/// let attrs = AvatarAttributes::default();
/// morpher.rebuild(&attrs, BodyMeasurements::new(101, 79, 93)).unwrap();
/// assert!(morpher.figure().is_some());
/// ```
#[derive(Debug, Default)]
pub struct MeshMorpher {
    current: Option<Figure>,
}

impl MeshMorpher {
    /// Create a morpher with no figure yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { current: None }
    }

    /// Rebuild the figure from a fresh snapshot, replacing the previous
    /// one atomically.
    ///
    /// Safe to call on every attribute edit; the call is idempotent for
    /// an unchanged snapshot.
    ///
    /// # Errors
    ///
    /// Propagates figure construction errors; on error the previous
    /// figure is retained untouched.
    pub fn rebuild(
        &mut self,
        attrs: &AvatarAttributes,
        measurements: BodyMeasurements,
    ) -> MeshResult<&Figure> {
        let next = build_figure(attrs, measurements)?;
        debug!(
            parts = next.len(),
            surface_vertices = next.surface_vertex_count(),
            "figure rebuilt"
        );
        // `insert` drops the old figure only after `next` is complete.
        Ok(self.current.insert(next))
    }

    /// The current figure, if one has been built.
    #[must_use]
    pub fn figure(&self) -> Option<&Figure> {
        self.current.as_ref()
    }

    /// Hand the current figure to the caller, leaving the morpher empty.
    #[must_use]
    pub fn take(&mut self) -> Option<Figure> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let morpher = MeshMorpher::new();
        assert!(morpher.figure().is_none());
    }

    #[test]
    fn test_rebuild_installs_figure() {
        let mut morpher = MeshMorpher::new();
        let attrs = AvatarAttributes::default();
        let parts = morpher
            .rebuild(&attrs, BodyMeasurements::new(101, 79, 93))
            .unwrap()
            .len();
        assert!(parts > 0);
        assert_eq!(morpher.figure().unwrap().len(), parts);
    }

    #[test]
    fn test_rebuild_replaces_wholesale() {
        let mut morpher = MeshMorpher::new();
        let attrs = AvatarAttributes::default();

        morpher
            .rebuild(&attrs, BodyMeasurements::new(70, 70, 70))
            .unwrap();
        let narrow = morpher.figure().unwrap().clone();

        morpher
            .rebuild(&attrs, BodyMeasurements::new(130, 130, 130))
            .unwrap();
        let broad = morpher.figure().unwrap();

        assert_ne!(&narrow, broad);
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let mut morpher = MeshMorpher::new();
        let attrs = AvatarAttributes::default();
        let measurements = BodyMeasurements::new(101, 79, 93);

        morpher.rebuild(&attrs, measurements).unwrap();
        let first = morpher.figure().unwrap().clone();
        morpher.rebuild(&attrs, measurements).unwrap();
        assert_eq!(&first, morpher.figure().unwrap());
    }

    #[test]
    fn test_take_empties_the_morpher() {
        let mut morpher = MeshMorpher::new();
        let attrs = AvatarAttributes::default();
        morpher
            .rebuild(&attrs, BodyMeasurements::FALLBACK)
            .unwrap();

        assert!(morpher.take().is_some());
        assert!(morpher.figure().is_none());
    }
}
