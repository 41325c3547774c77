use super::*;
use crate::web::tests::prelude::*;
use frdb_entities::builders::Builder;

fn setup() -> (Client, sqlite::Connections) {
    rocket_test_setup(vec![("/", routes())])
}

fn setup_with_geo_gw(geo_gw: DummyGeoGW) -> (Client, sqlite::Connections) {
    rocket_test_setup_with_geo_gw(vec![("/", routes())], geo_gw)
}

fn default_new_location_json() -> &'static str {
    r#"{"name":"Food Bank Lublin","address":"Krakowskie Przedmieście 12, Lublin","lat":51.2465,"lng":22.5684,"contact":"info@foodbank.pl"}"#
}

fn store_location(pool: &sqlite::Connections, location: &RescueLocation) {
    pool.exclusive().unwrap().create_location(location).unwrap();
}

#[test]
fn get_version() {
    let (client, _) = setup();
    let res = client.get("/server/version").dispatch();
    assert_eq!(Status::Ok, res.status());
    assert_eq!(DUMMY_VERSION, res.into_string().unwrap());
}

#[test]
fn create_location() {
    let (client, db) = setup();
    let res = client
        .post("/locations")
        .header(ContentType::JSON)
        .body(default_new_location_json())
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let id: String = res.into_json().unwrap();

    let stored = db.shared().unwrap().get_location(&id).unwrap();
    assert_eq!("Food Bank Lublin", stored.name);
    assert_eq!((51.2465, 22.5684), stored.pos.to_lat_lng_deg());
    assert_eq!(Some("info@foodbank.pl"), stored.contact.as_deref());
    assert_eq!(None, stored.details);
}

#[test]
fn create_location_with_empty_name_is_rejected() {
    let (client, db) = setup();
    let res = client
        .post("/locations")
        .header(ContentType::JSON)
        .body(r#"{"name":"","address":"Somewhere 1","lat":51.0,"lng":22.0}"#)
        .dispatch();
    assert_eq!(Status::BadRequest, res.status());
    assert_eq!(0, db.shared().unwrap().count_locations().unwrap());
}

#[test]
fn create_location_with_out_of_range_position_is_rejected() {
    let (client, db) = setup();
    let res = client
        .post("/locations")
        .header(ContentType::JSON)
        .body(r#"{"name":"Food Bank","address":"Somewhere 1","lat":91.0,"lng":22.0}"#)
        .dispatch();
    assert_eq!(Status::BadRequest, res.status());
    assert_eq!(0, db.shared().unwrap().count_locations().unwrap());
}

#[test]
fn create_locations_with_identical_names() {
    let (client, db) = setup();
    for body in [
        r#"{"name":"Food Bank","address":"North St 1","lat":51.0,"lng":22.0}"#,
        r#"{"name":"Food Bank","address":"South St 2","lat":52.0,"lng":21.0}"#,
    ] {
        let res = client
            .post("/locations")
            .header(ContentType::JSON)
            .body(body)
            .dispatch();
        assert_eq!(Status::Ok, res.status());
    }
    assert_eq!(2, db.shared().unwrap().count_locations().unwrap());
}

#[test]
fn get_all_locations_in_creation_order() {
    let (client, db) = setup();
    let older = RescueLocation::build()
        .name("Zero Waste Point")
        .address("Narutowicza 8, Lublin")
        .pos(MapPoint::from_lat_lng_deg(51.2440, 22.5600))
        .created_at(100)
        .finish();
    let newer = RescueLocation::build()
        .name("Community Fridge")
        .address("Main St 5, Springfield")
        .pos(MapPoint::from_lat_lng_deg(39.7817, -89.6501))
        .created_at(200)
        .finish();
    store_location(&db, &newer);
    store_location(&db, &older);

    let res = client.get("/locations").dispatch();
    assert_eq!(Status::Ok, res.status());
    let body: Vec<json::RescueLocation> = res.into_json().unwrap();
    assert_eq!(2, body.len());
    assert_eq!(older.id.as_str(), body[0].id);
    assert_eq!(newer.id.as_str(), body[1].id);
}

#[test]
fn get_one_location() {
    let (client, db) = setup();
    let location = RescueLocation::build()
        .name("Food Bank Lublin")
        .address("Krakowskie Przedmieście 12, Lublin")
        .pos(MapPoint::from_lat_lng_deg(51.2465, 22.5684))
        .details("Open on weekdays")
        .contact("+48 123 456 789")
        .finish();
    store_location(&db, &location);

    let res = client
        .get(format!("/locations/{}", location.id))
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let body: json::RescueLocation = res.into_json().unwrap();
    assert_eq!(location.id.as_str(), body.id);
    assert_eq!("Food Bank Lublin", body.name);
    assert_eq!(Some("Open on weekdays"), body.details.as_deref());
    assert_eq!(Some("+48 123 456 789"), body.contact.as_deref());
}

#[test]
fn get_unknown_location() {
    let (client, _) = setup();
    let res = client.get("/locations/no-such-id").dispatch();
    assert_eq!(Status::NotFound, res.status());
}

#[test]
fn search_matches_name_and_address_case_insensitively() {
    let (client, db) = setup();
    for (name, address) in [
        ("Zero Waste Point", "Narutowicza 8, Lublin"),
        ("Food Bank Lublin", "Krakowskie Przedmieście 12, Lublin"),
        ("Community Fridge", "Main St 5, Springfield"),
    ] {
        let location = RescueLocation::build()
            .name(name)
            .address(address)
            .pos(MapPoint::from_lat_lng_deg(51.0, 22.0))
            .finish();
        store_location(&db, &location);
    }

    let res = client.get("/search?text=LUBLIN").dispatch();
    assert_eq!(Status::Ok, res.status());
    let body: Vec<json::RescueLocation> = res.into_json().unwrap();
    let names: Vec<_> = body.into_iter().map(|l| l.name).collect();
    // Matches on name OR address, ordered by name.
    assert_eq!(vec!["Food Bank Lublin", "Zero Waste Point"], names);

    let res = client.get("/search?text=warehouse").dispatch();
    let body: Vec<json::RescueLocation> = res.into_json().unwrap();
    assert!(body.is_empty());
}

#[test]
fn search_without_query_returns_all_in_name_order() {
    let (client, db) = setup();
    for (name, created_at) in [("b", 1), ("C", 2), ("a", 3)] {
        let location = RescueLocation::build()
            .name(name)
            .address("Somewhere 1")
            .pos(MapPoint::from_lat_lng_deg(51.0, 22.0))
            .created_at(created_at)
            .finish();
        store_location(&db, &location);
    }

    let res = client.get("/search").dispatch();
    assert_eq!(Status::Ok, res.status());
    let body: Vec<json::RescueLocation> = res.into_json().unwrap();
    let names: Vec<_> = body.into_iter().map(|l| l.name).collect();
    assert_eq!(vec!["a", "b", "C"], names);
}

#[test]
fn delete_location() {
    let (client, db) = setup();
    let location = RescueLocation::build()
        .name("Food Bank")
        .address("Somewhere 1")
        .pos(MapPoint::from_lat_lng_deg(51.0, 22.0))
        .finish();
    store_location(&db, &location);

    let res = client
        .delete(format!("/locations/{}", location.id))
        .dispatch();
    assert_eq!(Status::NoContent, res.status());
    assert_eq!(0, db.shared().unwrap().count_locations().unwrap());

    // Deleting is permanent, the record is gone afterwards.
    let res = client
        .delete(format!("/locations/{}", location.id))
        .dispatch();
    assert_eq!(Status::NotFound, res.status());
}

#[test]
fn count_locations() {
    let (client, db) = setup();
    let res = client.get("/count/locations").dispatch();
    let body: json::ResultCount = res.into_json().unwrap();
    assert_eq!(0, body.count);

    let location = RescueLocation::build()
        .name("Food Bank")
        .address("Somewhere 1")
        .pos(MapPoint::from_lat_lng_deg(51.0, 22.0))
        .finish();
    store_location(&db, &location);

    let res = client.get("/count/locations").dispatch();
    let body: json::ResultCount = res.into_json().unwrap();
    assert_eq!(1, body.count);
}

#[test]
fn forward_geocoding() {
    let (client, _) = setup_with_geo_gw(DummyGeoGW {
        pos: MapPoint::try_from_lat_lng_deg(51.2465, 22.5684),
        ..Default::default()
    });
    let res = client.get("/geocode/forward?addr=Lublin,%20Poland").dispatch();
    assert_eq!(Status::Ok, res.status());
    let body: json::Coordinate = res.into_json().unwrap();
    assert_eq!((51.2465, 22.5684), (body.lat, body.lng));
}

#[test]
fn forward_geocoding_unresolvable_address() {
    let (client, _) = setup();
    let res = client.get("/geocode/forward?addr=Nowhere").dispatch();
    assert_eq!(Status::NotFound, res.status());
    let body: json::Error = res.into_json().unwrap();
    assert_eq!(404, body.http_status);
}

#[test]
fn reverse_geocoding() {
    let (client, _) = setup_with_geo_gw(DummyGeoGW {
        addr: Some(Address {
            city: Some("Lublin".into()),
            country: Some("Poland".into()),
            ..Default::default()
        }),
        ..Default::default()
    });
    let res = client
        .get("/geocode/reverse?lat=51.2465&lng=22.5684")
        .dispatch();
    assert_eq!(Status::Ok, res.status());
    let body: json::ResolvedAddress = res.into_json().unwrap();
    assert_eq!("Lublin, Poland", body.formatted);
    assert_eq!(Some("Lublin"), body.city.as_deref());
    assert_eq!(None, body.street);
}

#[test]
fn reverse_geocoding_unresolvable_position() {
    let (client, _) = setup();
    let res = client.get("/geocode/reverse?lat=0.0&lng=0.0").dispatch();
    assert_eq!(Status::NotFound, res.status());
}

#[test]
fn reverse_geocoding_out_of_range_position() {
    let (client, _) = setup();
    let res = client.get("/geocode/reverse?lat=95.0&lng=22.0").dispatch();
    assert_eq!(Status::BadRequest, res.status());
}
