use super::*;

impl<'a> LocationRepo for DbReadOnly<'a> {
    fn create_location(&self, _location: &RescueLocation) -> Result<()> {
        unreachable!();
    }
    fn delete_location(&self, _id: &str) -> Result<()> {
        unreachable!();
    }

    fn get_location(&self, id: &str) -> Result<RescueLocation> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn all_locations(&self) -> Result<Vec<RescueLocation>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

impl<'a> LocationRepo for DbReadWrite<'a> {
    fn create_location(&self, location: &RescueLocation) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn delete_location(&self, id: &str) -> Result<()> {
        delete_location(&mut self.conn.borrow_mut(), id)
    }

    fn get_location(&self, id: &str) -> Result<RescueLocation> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn all_locations(&self) -> Result<Vec<RescueLocation>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

impl<'a> LocationRepo for DbConnection<'a> {
    fn create_location(&self, location: &RescueLocation) -> Result<()> {
        create_location(&mut self.conn.borrow_mut(), location)
    }
    fn delete_location(&self, id: &str) -> Result<()> {
        delete_location(&mut self.conn.borrow_mut(), id)
    }

    fn get_location(&self, id: &str) -> Result<RescueLocation> {
        get_location(&mut self.conn.borrow_mut(), id)
    }
    fn all_locations(&self) -> Result<Vec<RescueLocation>> {
        all_locations(&mut self.conn.borrow_mut())
    }
    fn count_locations(&self) -> Result<usize> {
        count_locations(&mut self.conn.borrow_mut())
    }
}

fn into_entity(model: models::RescueLocationEntity) -> Result<RescueLocation> {
    let models::RescueLocationEntity {
        rowid: _,
        id,
        created_at,
        name,
        address,
        lat,
        lng,
        details,
        contact,
    } = model;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or_else(|| repo::Error::Other(anyhow!("Invalid position of record {id}: {lat},{lng}")))?;
    Ok(RescueLocation {
        id: id.into(),
        created_at: Timestamp::from_millis(created_at),
        name,
        address,
        pos,
        details,
        contact,
    })
}

fn create_location(conn: &mut SqliteConnection, l: &RescueLocation) -> Result<()> {
    let (lat, lng) = l.pos.to_lat_lng_deg();
    let new_location = models::NewRescueLocation {
        id: l.id.as_str(),
        created_at: l.created_at.into_millis(),
        name: &l.name,
        address: &l.address,
        lat,
        lng,
        details: l.details.as_deref(),
        contact: l.contact.as_deref(),
    };
    diesel::insert_into(schema::rescue_location::table)
        .values(&new_location)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn get_location(conn: &mut SqliteConnection, id: &str) -> Result<RescueLocation> {
    use schema::rescue_location::dsl;
    let model = dsl::rescue_location
        .filter(dsl::id.eq(id))
        .first::<models::RescueLocationEntity>(conn)
        .map_err(from_diesel_err)?;
    into_entity(model)
}

fn all_locations(conn: &mut SqliteConnection) -> Result<Vec<RescueLocation>> {
    use schema::rescue_location::dsl;
    dsl::rescue_location
        .order(dsl::created_at.asc())
        .load::<models::RescueLocationEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(into_entity)
        .collect()
}

fn count_locations(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::rescue_location::dsl;
    let count = dsl::rescue_location
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(count as usize)
}

fn delete_location(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::rescue_location::dsl;
    let count = diesel::delete(dsl::rescue_location.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}
