//! Channel-qualified product identity.

use super::channel::Channel;
use super::naming;

/// Base identity before channel qualification.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BaseIdentity {
    /// Display name (`Hadron`).
    pub product_name: String,
    /// Package identifier (`hadron-app`).
    pub slug: String,
    /// Reverse-DNS bundle id (`com.mongodb.hadron`). Only required on macOS.
    pub bundle_id: Option<String>,
}

/// Identity after channel qualification.
///
/// Either every field carries the channel suffix or none does.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Identity {
    /// Channel-qualified display name (`Hadron Beta`).
    pub product_name: String,
    /// Channel-qualified slug (`hadron-app-beta`).
    pub slug: String,
    /// Channel-qualified bundle id (`com.mongodb.hadron.beta`).
    pub bundle_id: Option<String>,
}

/// Applies the channel suffix rules to every identity field.
pub fn derive_identity(base: &BaseIdentity, channel: &Channel) -> Identity {
    Identity {
        product_name: naming::display_name(&base.product_name, channel),
        slug: naming::slug(&base.slug, channel),
        bundle_id: base
            .bundle_id
            .as_deref()
            .map(|id| naming::bundle_id(id, channel)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseIdentity {
        BaseIdentity {
            product_name: "Hadron".into(),
            slug: "hadron-app".into(),
            bundle_id: Some("com.mongodb.hadron".into()),
        }
    }

    #[test]
    fn stable_identity_equals_base() {
        let identity = derive_identity(&base(), &Channel::Stable);
        assert_eq!(identity.product_name, "Hadron");
        assert_eq!(identity.slug, "hadron-app");
        assert_eq!(identity.bundle_id.as_deref(), Some("com.mongodb.hadron"));
    }

    #[test]
    fn prerelease_identity_suffixes_every_field() {
        let identity = derive_identity(&base(), &Channel::Prerelease("custom".into()));
        assert_eq!(identity.product_name, "Hadron Custom");
        assert_eq!(identity.slug, "hadron-app-custom");
        assert_eq!(identity.bundle_id.as_deref(), Some("com.mongodb.hadron.custom"));
    }

    #[test]
    fn missing_bundle_id_stays_missing() {
        let base = BaseIdentity {
            bundle_id: None,
            ..base()
        };
        let identity = derive_identity(&base, &Channel::Prerelease("beta".into()));
        assert_eq!(identity.bundle_id, None);
        assert_eq!(identity.slug, "hadron-app-beta");
    }
}
