use super::*;

impl Game {
    /// Moves one tile in `direction` and re-syncs the neighborhood.
    pub fn move_step(&mut self, direction: Direction) -> SyncReport {
        let (di, dj) = direction.delta();
        let tile = self.board.tile_size();
        let position = self.state.player.position;
        self.move_to(LatLng {
            lat: position.lat + f64::from(di) * tile,
            lng: position.lng + f64::from(dj) * tile,
        })
    }

    /// Absolute position update, as delivered by a location sensor. Positions
    /// off the globe are ignored.
    pub fn move_to(&mut self, position: LatLng) -> SyncReport {
        if !position.is_geographic() {
            warn!("ignoring position outside geographic range {position:?}");
            return SyncReport::default();
        }
        self.state.player.position = position;
        self.state.player.path.push(position);
        self.sync()
    }

    /// A failed location query leaves the player where they are.
    pub fn geolocation_failed(&self, reason: &str) {
        warn!("geolocation unavailable, keeping position {:?}: {reason}", self.state.player.position);
    }
}
