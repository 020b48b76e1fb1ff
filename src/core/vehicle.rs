use crate::errors::{AppError, AppResult};
use crate::models::vehicle::VehicleProfile;
use crate::store::{Loaded, Persistence, VEHICLE_KEY};

pub struct VehicleLogic;

impl VehicleLogic {
    /// The stored profile, if any.
    ///
    /// An unreadable profile is treated as absent (degraded mode) and the
    /// decode problem is returned so the caller can warn; the blob is left
    /// in place for the user to fix or overwrite.
    pub fn load(p: Persistence<'_>) -> AppResult<Loaded<Option<VehicleProfile>>> {
        match p.load::<Option<VehicleProfile>>(VEHICLE_KEY, None) {
            Ok(value) => Ok(Loaded {
                value,
                problem: None,
            }),
            Err(AppError::CorruptData { reason, .. }) => Ok(Loaded {
                value: None,
                problem: Some(reason),
            }),
            Err(e) => Err(e),
        }
    }

    /// Replace the profile wholesale.
    pub fn save(p: Persistence<'_>, profile: &VehicleProfile) -> AppResult<()> {
        profile.validate()?;
        p.save(VEHICLE_KEY, profile)
    }

    pub fn clear(p: Persistence<'_>) -> AppResult<()> {
        p.remove(VEHICLE_KEY)
    }
}
