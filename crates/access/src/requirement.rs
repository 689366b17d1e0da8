use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Access requirement declared statically on each endpoint.
///
/// `Public` means public within the member space: administrators are still
/// sent back to their own home.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, VariantArray)]
#[strum(serialize_all = "kebab-case")]
pub enum RouteRequirement {
    Public,
    MemberOnly,
    AdminOnly,
    RequiresSubscription,
    RequiresNoSubscription,
}
