use crate::{
    remote::{EdgeTileSource, ShortlistService},
    Edge, EditorError, EditorResult, ShortlistEntry, TileAttributes,
};

use super::EditSession;

impl EditSession {
    /// Adds the active tile to the personal shortlist.
    pub fn shortlist_active_tile(&mut self, service: &dyn ShortlistService) -> EditorResult<i64> {
        let attributes = self.active.attributes.clone();
        self.add_to_shortlist(attributes, service)
    }

    /// Stores `attributes` on the server and puts the new entry on top of the
    /// shortlist. The entry becomes the active shortlist id.
    pub fn add_to_shortlist(&mut self, attributes: TileAttributes, service: &dyn ShortlistService) -> EditorResult<i64> {
        let response = service.add(&attributes).inspect_err(|err| log::warn!("shortlisting failed: {err}"))?;
        if let Some(error) = response.errors.first() {
            log::warn!("shortlisting rejected: {} - {}", error.field, error.detail);
            return Err(EditorError::Remote(error.detail.clone()));
        }
        let id = response
            .tile_shortlist
            .map(|record| record.id)
            .ok_or_else(|| EditorError::Remote("shortlist response without an entry".to_string()))?;

        self.shortlist.push_front(ShortlistEntry {
            id,
            attr_hash: response.attr_hash,
            attributes,
        });
        self.active.shortlist_id = Some(id);
        Ok(id)
    }

    /// Removes the active tile from the shortlist. The local entry is dropped
    /// even when the server reports an error.
    pub fn unshortlist_active_tile(&mut self, service: &dyn ShortlistService) -> EditorResult<()> {
        let Some(id) = self.active.shortlist_id.take() else {
            return Ok(());
        };
        self.shortlist.remove(id);
        let removal = service.remove(id)?;
        if let Some(error) = removal.error {
            log::warn!("removing shortlist entry {id} failed: {error}");
            return Err(EditorError::Remote(error));
        }
        Ok(())
    }

    /// Shows the border of the neighbouring level `level_number` beyond `edge`,
    /// `None` hides it. A failed fetch keeps the edge as it was.
    pub fn update_edge_tiles(&mut self, edge: Edge, level_number: Option<i32>, source: &dyn EdgeTileSource) -> EditorResult<()> {
        let Some(level_number) = level_number else {
            self.edges.clear(edge);
            return Ok(());
        };
        let tiles = source
            .fetch(edge, level_number)
            .inspect_err(|err| log::warn!("fetching {edge} edge of level {level_number} failed: {err}"))?;
        log::debug!("{} {edge} edge tiles from level {level_number}", tiles.len());
        self.edges.set(edge, tiles, self.grid.width(), self.grid.height());
        Ok(())
    }
}
