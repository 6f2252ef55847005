use tracing::{info, warn};

use crate::error::{BodyError, BoundaryFillError, GeometryCreationError, Result};
use crate::geometry::UpAxis;
use crate::host::{BoundaryFill, BoundingBoxProvider, PlaneFactory};
use crate::jaw::JawInputs;

use super::JawPlanes;

/// Builds the soft jaw construction planes for a body and starts the
/// boundary fill that carves them.
pub struct GenerateSoftJaws<B> {
    body: B,
    up_axis: UpAxis,
    inputs: JawInputs,
}

impl<B> GenerateSoftJaws<B> {
    /// Creates a new `GenerateSoftJaws` command.
    #[must_use]
    pub fn new(body: B, up_axis: UpAxis, inputs: JawInputs) -> Self {
        Self {
            body,
            up_axis,
            inputs,
        }
    }

    /// Creates the command from a selection that must hold exactly one body.
    ///
    /// # Errors
    ///
    /// Returns [`BodyError::NoSelection`] for an empty selection and
    /// [`BodyError::MultipleSelected`] for more than one body.
    pub fn from_selection(
        selection: Vec<B>,
        up_axis: UpAxis,
        inputs: JawInputs,
    ) -> Result<Self> {
        let count = selection.len();
        let mut bodies = selection.into_iter();
        match (bodies.next(), bodies.next()) {
            (Some(body), None) => Ok(Self::new(body, up_axis, inputs)),
            (None, _) => Err(BodyError::NoSelection.into()),
            (Some(_), Some(_)) => Err(BodyError::MultipleSelected(count).into()),
        }
    }

    /// Executes the command.
    ///
    /// Planes are created bottom, top, back, front, left, right and then
    /// handed to `fill`. Returns the created planes in that order.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is unknown, a jaw dimension is invalid,
    /// the factory fails to create a plane, or the boundary fill cannot be
    /// started. Validation happens before any plane is created; a factory
    /// failure stops at the failing plane and the boundary fill is not
    /// launched. Planes already created are left with the host.
    pub fn execute<P, F, L>(
        &self,
        provider: &P,
        factory: &mut F,
        fill: &mut L,
    ) -> Result<Vec<F::Plane>>
    where
        P: BoundingBoxProvider<Body = B>,
        F: PlaneFactory,
        L: BoundaryFill<Plane = F::Plane>,
    {
        let bbox = provider.bounding_box(&self.body)?;
        let spec = self.inputs.to_spec();
        info!(
            vise = self.inputs.preset.label(),
            up_axis = ?self.up_axis,
            length = spec.length,
            width = spec.width,
            height = spec.height,
            "generating soft jaws"
        );

        let set = JawPlanes::new(bbox, self.up_axis, spec)
            .execute()
            .inspect_err(|err| warn!(%err, "soft jaw input rejected"))?;

        let mut created = Vec::with_capacity(6);
        for jaw_plane in set.planes() {
            let handle = factory
                .create_offset_plane(jaw_plane.base, jaw_plane.offset, jaw_plane.name())
                .map_err(|reason| {
                    warn!(side = %jaw_plane.side, %reason, "construction plane creation failed");
                    GeometryCreationError {
                        side: jaw_plane.side,
                        reason,
                    }
                })?;
            created.push(handle);
        }

        fill.launch(&created).map_err(|reason| {
            warn!(%reason, "boundary fill launch failed");
            BoundaryFillError { reason }
        })?;
        info!(planes = created.len(), "boundary fill launched");
        Ok(created)
    }
}
