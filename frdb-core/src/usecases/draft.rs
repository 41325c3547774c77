use super::{create_location::NewLocation, prelude::*};

/// Fallback address when the service resolved no placemark at all.
pub const ADDRESS_NOT_FOUND_FALLBACK: &str = "Address not found.";

/// Fallback address when a placemark was resolved but carried no components.
pub const ADDRESS_EMPTY_FALLBACK: &str = "Address not found for this point.";

/// The informal stages of the add flow, made explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftStage {
    /// Nothing entered yet.
    Empty,
    /// Either an address without a pinned coordinate or a coordinate
    /// without a resolved address.
    CoordinatePending,
    /// Name, address and coordinate are all present.
    ReadyToSave,
}

/// Transient state of the add flow.
///
/// Drafts never survive a restart. Cancelling the flow is dropping
/// the value.
#[derive(Debug, Clone, Default)]
pub struct LocationDraft {
    pub name: String,
    pub address: String,
    pub details: String,
    pub contact: String,
    pos: Option<MapPoint>,
}

impl LocationDraft {
    /// Start a draft pre-filled with a coordinate selected on the map.
    pub fn with_position(pos: MapPoint) -> Self {
        Self {
            pos: Some(pos),
            ..Default::default()
        }
    }

    pub fn pos(&self) -> Option<MapPoint> {
        self.pos
    }

    pub fn stage(&self) -> DraftStage {
        if self.can_save() {
            DraftStage::ReadyToSave
        } else if self.pos.is_some() || !self.address.trim().is_empty() {
            DraftStage::CoordinatePending
        } else {
            DraftStage::Empty
        }
    }

    /// Saving is gated on name, address and coordinate all being present.
    pub fn can_save(&self) -> bool {
        !self.name.trim().is_empty() && !self.address.trim().is_empty() && self.pos.is_some()
    }

    /// Apply the outcome of forward geocoding the entered address.
    ///
    /// Zero candidates clear any tentative coordinate.
    pub fn apply_forward_geocode(&mut self, resolved: Option<MapPoint>) -> Result<()> {
        match resolved {
            Some(pos) => {
                self.pos = Some(pos);
                Ok(())
            }
            None => {
                self.pos = None;
                Err(Error::AddressNotFound)
            }
        }
    }

    /// Apply the outcome of reverse geocoding the selected coordinate.
    ///
    /// The address field always ends up non-empty: either the assembled
    /// address line or a fallback placeholder.
    pub fn apply_reverse_geocode(&mut self, resolved: Option<Address>) -> Result<()> {
        match resolved {
            Some(addr) if !addr.is_empty() => {
                self.address = addr.to_address_line();
                Ok(())
            }
            Some(_) => {
                self.address = ADDRESS_EMPTY_FALLBACK.to_string();
                Err(Error::AddressLookupFailed)
            }
            None => {
                self.address = ADDRESS_NOT_FOUND_FALLBACK.to_string();
                Err(Error::AddressLookupFailed)
            }
        }
    }

    /// Finish the flow: turn a complete draft into creation parameters.
    pub fn into_new_location(self) -> Result<NewLocation> {
        if !self.can_save() {
            return Err(Error::DraftIncomplete);
        }
        let Self {
            name,
            address,
            details,
            contact,
            pos,
        } = self;
        let Some(pos) = pos else {
            return Err(Error::DraftIncomplete);
        };
        let (lat, lng) = pos.to_lat_lng_deg();
        Ok(NewLocation {
            name,
            address,
            lat,
            lng,
            details: (!details.is_empty()).then_some(details),
            contact: (!contact.is_empty()).then_some(contact),
        })
    }
}
