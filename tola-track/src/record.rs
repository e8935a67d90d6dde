//! Record-to-payload mapping for Track.
//!
//! Each mirrored type states explicitly which fields go on the wire;
//! the client never enumerates fields by reflection.

use std::collections::BTreeMap;

use tola_model::{Country, Organization, TolaUser};

/// A local record that can be mirrored to Track.
pub trait TrackRecord {
    /// Model label used in log messages; lowercased for API paths.
    fn model(&self) -> &'static str;

    /// Local primary key, addresses the remote resource.
    fn record_id(&self) -> i64;

    /// Human-readable name used in log messages.
    fn display_name(&self) -> &str;

    /// Flat field map sent as the request body.
    fn payload(&self) -> BTreeMap<&'static str, String>;
}

impl TrackRecord for Organization {
    fn model(&self) -> &'static str {
        "Organization"
    }

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn payload(&self) -> BTreeMap<&'static str, String> {
        let mut fields = BTreeMap::new();
        fields.insert("name", self.name.clone());
        if let Some(description) = &self.description {
            fields.insert("description", description.clone());
        }
        fields
    }
}

impl TrackRecord for TolaUser {
    fn model(&self) -> &'static str {
        "TolaUser"
    }

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.username
    }

    fn payload(&self) -> BTreeMap<&'static str, String> {
        let mut fields = BTreeMap::new();
        fields.insert("username", self.username.clone());
        fields.insert("first_name", self.first_name.clone());
        fields.insert("last_name", self.last_name.clone());
        fields.insert("email", self.email.clone());
        fields.insert("tola_user_uuid", self.tola_user_uuid.to_string());
        fields
    }
}

impl TrackRecord for Country {
    fn model(&self) -> &'static str {
        "Country"
    }

    fn record_id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.country
    }

    fn payload(&self) -> BTreeMap<&'static str, String> {
        let mut fields = BTreeMap::new();
        fields.insert("country", self.country.clone());
        fields.insert("code", self.code.clone());
        fields
    }
}
