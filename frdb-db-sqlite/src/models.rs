// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = rescue_location)]
pub struct NewRescueLocation<'a> {
    pub id: &'a str,
    pub created_at: i64,
    pub name: &'a str,
    pub address: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub details: Option<&'a str>,
    pub contact: Option<&'a str>,
}

#[derive(Queryable)]
pub struct RescueLocationEntity {
    pub rowid: i64,
    pub id: String,
    pub created_at: i64,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub details: Option<String>,
    pub contact: Option<String>,
}
