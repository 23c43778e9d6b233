/// Contact fields as collected from the form. All text is trimmed; empty
/// means absent.
///
/// The document tolerates an empty `name`. Placeholder names only come into
/// play when deriving a download filename.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: String,
    pub organization: String,
    pub title: String,
    pub phone: String,
    /// Lower-cased address.
    pub email: String,
    /// Request for a Gravatar photo. Photo lookup happens outside the
    /// serializer, so this never produces a line by itself.
    pub use_gravatar: bool,
    /// Organization the contact works for, when distinct from `organization`.
    pub work_organization: String,
    pub url: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
    pub note: String,
}

impl ContactRecord {
    /// ADR components in RFC 6350 order: PO box, extended address, street,
    /// locality, region, postal code, country.
    #[must_use]
    pub fn address_components(&self) -> [&str; 7] {
        [
            "",
            "",
            &self.street,
            &self.city,
            &self.region,
            &self.postal_code,
            &self.country,
        ]
    }

    #[must_use]
    pub fn has_address(&self) -> bool {
        self.address_components().iter().any(|c| !c.is_empty())
    }
}
