use std::collections::HashSet;

mod input;
pub use input::{Key, Modifiers, PointerButton};

mod paint_operations;
mod remote_operations;

mod tile_edit;
pub use tile_edit::TileEditForm;

use crate::{
    compositing::{ViewMode, Visibility},
    tools::{ColorPair, Tool, ToolState},
    ActiveTile, Coord, EdgeTiles, EditorError, EditorResult, FormPayload, Grid, LevelData, MapDiff, Palette, Shortlist, SpawnSet, TileAttributes,
    TileTemplate, ZBounds,
};

/// One editing session of a level.
///
/// Owns the grid, the tool state machine and the active selection. Front ends
/// feed pointer and keyboard events into it and render the grid through
/// [`crate::render`]; every input handler returns the cells whose visible
/// layer may have changed.
pub struct EditSession {
    pub(crate) grid: Grid,
    pub(crate) tools: ToolState,
    pub(crate) active: ActiveTile,
    pub(crate) palette: Palette,
    pub(crate) spawns: SpawnSet,
    pub(crate) shortlist: Shortlist,
    pub(crate) edges: EdgeTiles,

    viewport_z: i32,
    view_mode: ViewMode,

    /// Layers matching the hovered palette entry while shift is held
    highlights: HashSet<(Coord, i32)>,

    pub(crate) pending_edit: Option<TileEditForm>,
}

impl EditSession {
    pub fn new(width: i32, height: i32, palette: Vec<TileTemplate>) -> EditorResult<Self> {
        let mut session = Self {
            grid: Grid::new(width, height)?,
            tools: ToolState::default(),
            active: ActiveTile::default(),
            palette: Palette::new(palette),
            spawns: SpawnSet::default(),
            shortlist: Shortlist::default(),
            edges: EdgeTiles::default(),
            viewport_z: 0,
            view_mode: ViewMode::default(),
            highlights: HashSet::new(),
            pending_edit: None,
        };
        if let Some(id) = session.palette.first().map(|t| t.id) {
            session.select_template(id)?;
        }
        Ok(session)
    }

    /// Builds a session from the level as the server rendered it. All loaded
    /// layers start out unchanged.
    pub fn from_level(level: LevelData) -> EditorResult<Self> {
        let mut session = Self::new(level.width, level.height, level.palette)?;
        session.grid.set_bounds(ZBounds::new(level.z_index_lower, level.z_index_upper));
        for tile in level.tiles {
            session.grid.insert_loaded(Coord::new(tile.row, tile.col), tile.z_index, tile.attributes)?;
        }
        session.spawns = SpawnSet::from_keys(&level.spawn_locations)?;
        session.shortlist = Shortlist::new(level.shortlist);
        log::debug!(
            "loaded {}x{} level, z-index {}..={}",
            session.grid.width(),
            session.grid.height(),
            session.grid.bounds().lower,
            session.grid.bounds().upper
        );
        Ok(session)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn tool(&self) -> Tool {
        self.tools.tool()
    }

    pub fn active_tile(&self) -> &ActiveTile {
        &self.active
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn spawns(&self) -> &SpawnSet {
        &self.spawns
    }

    pub fn shortlist(&self) -> &Shortlist {
        &self.shortlist
    }

    pub fn edge_tiles(&self) -> &EdgeTiles {
        &self.edges
    }

    pub fn viewport_z(&self) -> i32 {
        self.viewport_z
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn z_bounds(&self) -> ZBounds {
        self.grid.bounds()
    }

    pub fn visible_layer(&self, coord: Coord) -> Visibility<'_> {
        self.grid.visible_layer(coord, self.viewport_z, self.view_mode)
    }

    // ========================================================================
    // Tools & selection
    // ========================================================================

    pub fn select_tool(&mut self, tool: Tool) {
        log::debug!("tool {} -> {tool}", self.tools.tool());
        self.tools.select(tool);
        if tool == Tool::TilePainting {
            self.sync_active_colors();
        }
    }

    /// Makes a palette template the active tile.
    pub fn select_template(&mut self, id: i64) -> EditorResult<()> {
        let template = self.palette.get(id).ok_or(EditorError::UnknownTemplate { id })?;
        self.activate(ActiveTile::from_template(template));
        Ok(())
    }

    /// Makes a shortlist entry the active tile.
    pub fn select_shortlist_entry(&mut self, id: i64) -> EditorResult<()> {
        let entry = self.shortlist.get(id).ok_or(EditorError::UnknownShortlistEntry { id })?;
        let mut active = ActiveTile::from_attributes(entry.attributes.clone());
        active.historic = self.is_historic(&active.attributes);
        active.shortlist_id = Some(id);
        self.activate(active);
        Ok(())
    }

    pub(crate) fn activate(&mut self, active: ActiveTile) {
        let colors = ColorPair::new(active.attributes.color.clone(), active.attributes.background_color.clone());
        log::debug!("active tile '{}'", active.display_name());
        self.active = active;
        self.tools.remember(Tool::TilePainting, colors);
    }

    pub(crate) fn is_historic(&self, attributes: &TileAttributes) -> bool {
        attributes.tile_template_id.and_then(|id| self.palette.get(id)).is_some_and(|t| t.historic)
    }

    /// Sets both color inputs for the active tool.
    pub fn set_colors(&mut self, colors: ColorPair) {
        self.tools.set_colors(colors);
        if self.tools.tool() == Tool::TilePainting {
            self.sync_active_colors();
        }
    }

    /// Left click on a color swatch.
    pub fn set_foreground(&mut self, color: impl Into<String>) {
        self.tools.set_foreground(color);
        if self.tools.tool() == Tool::TilePainting {
            self.sync_active_colors();
        }
    }

    /// Right click on a color swatch.
    pub fn set_background(&mut self, background_color: impl Into<String>) {
        self.tools.set_background(background_color);
        if self.tools.tool() == Tool::TilePainting {
            self.sync_active_colors();
        }
    }

    /// Tile painting goes back to the template colors, every other tool to no colors.
    pub fn reset_colors(&mut self) {
        let colors = if self.tools.tool() == Tool::TilePainting {
            self.active
                .attributes
                .tile_template_id
                .and_then(|id| self.palette.get(id))
                .map(|t| ColorPair::new(t.color.clone(), t.background_color.clone()))
                .unwrap_or_default()
        } else {
            ColorPair::default()
        };
        self.set_colors(colors);
    }

    fn sync_active_colors(&mut self) {
        let colors = self.tools.colors();
        self.active.attributes.color = colors.color.clone();
        self.active.attributes.background_color = colors.background_color.clone();
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    pub fn set_viewport_z(&mut self, z: i32) {
        self.viewport_z = z;
    }

    pub fn viewport_to_lower_bound(&mut self) {
        self.viewport_z = self.grid.bounds().lower;
    }

    pub fn viewport_to_upper_bound(&mut self) {
        self.viewport_z = self.grid.bounds().upper;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggle();
    }

    // ========================================================================
    // Highlighting
    // ========================================================================

    /// Highlights every live layer showing the same tile as `attributes`.
    pub fn highlight_tiles_like(&mut self, attributes: &TileAttributes) -> usize {
        self.highlights = self
            .grid
            .layers()
            .filter(|(_, layer)| layer.is_live() && layer.attributes.same_tile(attributes))
            .map(|(coord, layer)| (coord, layer.z_index))
            .collect();
        self.highlights.len()
    }

    pub fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    pub fn is_highlighted(&self, coord: Coord, z: i32) -> bool {
        self.highlights.contains(&(coord, z))
    }

    // ========================================================================
    // Submission
    // ========================================================================

    pub fn diff(&self) -> MapDiff {
        MapDiff::collect(&self.grid, &self.spawns)
    }

    /// Produces the hidden form fields that end the session.
    pub fn submit(&self) -> EditorResult<FormPayload> {
        let diff = self.diff();
        log::info!(
            "submitting {} additions, {} changes, {} deletions, {} spawn tiles",
            diff.additions.len(),
            diff.changes.len(),
            diff.deletions.len(),
            diff.spawn_tiles.len()
        );
        diff.to_form_payload()
    }
}
