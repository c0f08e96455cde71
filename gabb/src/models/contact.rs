//! Contact models.

use serde::{Deserialize, Serialize};

use super::DeviceId;

/// A contact to add to the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    /// Phone number in full international format, e.g. `+15555555555`.
    pub phone: String,
    pub guest: bool,
    pub first_name: String,
    pub enable_chat_school_mode: bool,
    /// Whether this contact is an emergency contact.
    pub emergency: bool,
    /// Relationship with the device owner.
    pub relationship: String,
    /// Encoded photo. The encoding the API expects is unknown; leave empty.
    pub photo: String,
    /// Devices the contact applies to.
    pub devices: Vec<DeviceId>,
    pub guest_primary_access: bool,
    pub last_name: String,
}

impl NewContact {
    /// Create a contact with the required fields and everything else off.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            relationship: relationship.into(),
            ..Default::default()
        }
    }

    /// Apply the contact to a device.
    pub fn device(mut self, device: impl Into<DeviceId>) -> Self {
        self.devices.push(device.into());
        self
    }

    /// Mark as emergency contact.
    pub fn emergency(mut self, emergency: bool) -> Self {
        self.emergency = emergency;
        self
    }

    /// Allow chatting while the watch is in school mode.
    pub fn chat_in_school_mode(mut self, enabled: bool) -> Self {
        self.enable_chat_school_mode = enabled;
        self
    }

    /// Add as a guest, optionally with primary access.
    pub fn guest(mut self, guest: bool, primary_access: bool) -> Self {
        self.guest = guest;
        self.guest_primary_access = primary_access;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_new_contact_payload() {
        let contact = NewContact::new("Bill", "Smith", "+15555555555", "Friend").device(555555u64);

        assert_eq!(
            serde_json::to_value(&contact).unwrap(),
            json!({
                "phone": "+15555555555",
                "guest": false,
                "firstName": "Bill",
                "enableChatSchoolMode": false,
                "emergency": false,
                "relationship": "Friend",
                "photo": "",
                "devices": [555555],
                "guestPrimaryAccess": false,
                "lastName": "Smith",
            })
        );
    }
}
