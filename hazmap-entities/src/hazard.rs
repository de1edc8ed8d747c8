use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::EnumString;
use thiserror::Error;

use crate::{activity::*, geo::*, id::*, time::*};

pub type SeverityPrimitive = u8;

/// Hazard severity on the 1 (minor) to 5 (critical) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Severity(SeverityPrimitive);

#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("Severity out of range: {0}")]
pub struct SeverityOutOfRange(SeverityPrimitive);

impl Severity {
    pub const MIN: SeverityPrimitive = 1;
    pub const MAX: SeverityPrimitive = 5;

    pub const fn to_primitive(self) -> SeverityPrimitive {
        self.0
    }
}

impl TryFrom<SeverityPrimitive> for Severity {
    type Error = SeverityOutOfRange;
    fn try_from(from: SeverityPrimitive) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&from) {
            Ok(Self(from))
        } else {
            Err(SeverityOutOfRange(from))
        }
    }
}

impl From<Severity> for SeverityPrimitive {
    fn from(from: Severity) -> Self {
        from.0
    }
}

pub type HazardStatusPrimitive = i16;

/// Review status of a hazard record.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum HazardStatus {
    Rejected = -1,
    Pending  =  0,
    Approved =  1,
}

impl HazardStatus {
    pub const fn default() -> Self {
        Self::Pending
    }

    pub fn is_visible(self) -> bool {
        self == Self::Approved
    }
}

#[derive(Debug, Error)]
#[error("Invalid hazard status primitive: {0}")]
pub struct InvalidHazardStatusPrimitive(HazardStatusPrimitive);

impl TryFrom<HazardStatusPrimitive> for HazardStatus {
    type Error = InvalidHazardStatusPrimitive;
    fn try_from(from: HazardStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidHazardStatusPrimitive(from))
    }
}

impl From<HazardStatus> for HazardStatusPrimitive {
    fn from(from: HazardStatus) -> Self {
        from.to_i16().expect("hazard status primitive")
    }
}

/// How the visibility of a hazard lapses over time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, strum::Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ExpirationKind {
    #[default]
    None,
    AutoExpire,
}

/// Expiration and resolution metadata of a hazard.
///
/// `resolved_by == None` on a resolved record marks a system-triggered
/// resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expiration {
    pub kind: ExpirationKind,
    pub expires_at: Option<Timestamp>,
    pub resolved_at: Option<Timestamp>,
    pub resolved_by: Option<Id>,
    pub resolution_note: Option<String>,
}

impl Expiration {
    pub fn auto_expire(expires_at: Timestamp) -> Self {
        Self {
            kind: ExpirationKind::AutoExpire,
            expires_at: Some(expires_at),
            ..Default::default()
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved_at.is_some()
    }
}

/// A user-submitted, geolocated danger report.
#[derive(Debug, Clone, PartialEq)]
pub struct Hazard {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub category: Id,
    pub severity: Severity,
    pub position: MapPoint,
    pub area: Option<Polygon>,
    pub status: HazardStatus,
    pub expiration: Expiration,
    /// Ids of users who confirmed that the hazard is gone, deduplicated.
    pub resolution_confirmations: Vec<Id>,
    pub created: Activity,
}

impl Hazard {
    /// True iff the record auto-expires, has not been resolved yet and its
    /// expiry timestamp has passed.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        if self.expiration.kind != ExpirationKind::AutoExpire {
            return false;
        }
        if self.expiration.resolved_at.is_some() {
            return false;
        }
        match self.expiration.expires_at {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn severity_range() {
        assert!(Severity::try_from(0).is_err());
        assert!(Severity::try_from(6).is_err());
        assert_eq!(3, Severity::try_from(3).unwrap().to_primitive());
    }

    #[test]
    fn hazard_status_primitives() {
        assert_eq!(
            HazardStatus::Approved,
            HazardStatus::try_from(HazardStatusPrimitive::from(HazardStatus::Approved)).unwrap()
        );
        assert!(HazardStatus::try_from(7).is_err());
    }

    #[test]
    fn never_expired_without_expiry_timestamp() {
        let hazard = Hazard::build()
            .expiration(Expiration {
                kind: ExpirationKind::AutoExpire,
                ..Default::default()
            })
            .finish();
        assert!(!hazard.is_expired(Timestamp::from_secs(i64::MAX)));
    }

    #[test]
    fn never_expired_when_resolved() {
        let now = Timestamp::from_secs(10_000);
        let hazard = Hazard::build()
            .expiration(Expiration {
                kind: ExpirationKind::AutoExpire,
                expires_at: Some(now - Duration::from_hours(3)),
                resolved_at: Some(now - Duration::from_hours(1)),
                ..Default::default()
            })
            .finish();
        assert!(!hazard.is_expired(now));
    }

    #[test]
    fn expired_when_expiry_has_passed() {
        let now = Timestamp::from_secs(10_000);
        let hazard = Hazard::build()
            .expiration(Expiration::auto_expire(now - Duration::from_secs(1)))
            .finish();
        assert!(hazard.is_expired(now));
        // Exactly at the boundary counts as expired.
        let hazard = Hazard::build()
            .expiration(Expiration::auto_expire(now))
            .finish();
        assert!(hazard.is_expired(now));
    }

    #[test]
    fn not_expired_for_other_kinds() {
        let now = Timestamp::from_secs(10_000);
        let hazard = Hazard::build()
            .expiration(Expiration {
                kind: ExpirationKind::None,
                expires_at: Some(now - Duration::from_hours(3)),
                ..Default::default()
            })
            .finish();
        assert!(!hazard.is_expired(now));
    }
}
