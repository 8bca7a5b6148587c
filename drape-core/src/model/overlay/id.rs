use serde::{Deserialize, Serialize};

/// identifies a ground overlay within the collection held by its owning
/// host. uniqueness within that collection is the owner's responsibility;
/// nothing is enforced here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroundOverlayId(pub String);

impl std::fmt::Display for GroundOverlayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
