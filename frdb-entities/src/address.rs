use itertools::Itertools;

/// Postal address components as resolved by a geocoding service.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street       : Option<String>,
    pub house_number : Option<String>,
    pub city         : Option<String>,
    pub state        : Option<String>,
    pub zip          : Option<String>,
    pub country      : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.house_number.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip.is_none()
            && self.country.is_none()
    }

    /// Single-line rendering: the present components joined with ", "
    /// in the order street, house number, city, state, zip, country.
    pub fn to_address_line(&self) -> String {
        [
            &self.street,
            &self.house_number,
            &self.city,
            &self.state,
            &self.zip,
            &self.country,
        ]
        .into_iter()
        .filter_map(|c| c.as_deref())
        .join(", ")
    }
}
